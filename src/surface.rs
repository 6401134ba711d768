//! Presentation surface driven by an edit session.

use crate::image::GeneratedImage;
use std::sync::Arc;

/// The visible parts of an editing front-end.
///
/// The result area has three mutually exclusive states: placeholder, error
/// text, or a rendered image. Each call replaces whatever the area showed
/// before. The three inputs (file picker, prompt, submit) are toggled
/// independently. Methods take `&self`; implementations that keep state use
/// interior mutability.
pub trait Surface: Send + Sync {
    /// Shows the locally selected image before submission.
    fn show_preview(&self, data_url: &str);

    /// Puts the result area back into its placeholder state.
    fn show_placeholder(&self);

    /// Replaces the result area with a failure message.
    fn show_error(&self, message: &str);

    /// Replaces the result area with the returned image.
    fn show_result(&self, image: &GeneratedImage);

    /// Shows or hides the busy indicator.
    fn set_progress_visible(&self, visible: bool);

    /// Enables or disables the submit control.
    fn set_submit_enabled(&self, enabled: bool);

    /// Enables or disables the prompt input.
    fn set_prompt_enabled(&self, enabled: bool);

    /// Enables or disables the file picker.
    fn set_file_input_enabled(&self, enabled: bool);
}

impl<S: Surface + ?Sized> Surface for Arc<S> {
    fn show_preview(&self, data_url: &str) {
        (**self).show_preview(data_url)
    }

    fn show_placeholder(&self) {
        (**self).show_placeholder()
    }

    fn show_error(&self, message: &str) {
        (**self).show_error(message)
    }

    fn show_result(&self, image: &GeneratedImage) {
        (**self).show_result(image)
    }

    fn set_progress_visible(&self, visible: bool) {
        (**self).set_progress_visible(visible)
    }

    fn set_submit_enabled(&self, enabled: bool) {
        (**self).set_submit_enabled(enabled)
    }

    fn set_prompt_enabled(&self, enabled: bool) {
        (**self).set_prompt_enabled(enabled)
    }

    fn set_file_input_enabled(&self, enabled: bool) {
        (**self).set_file_input_enabled(enabled)
    }
}
