#![warn(missing_docs)]
//! GenEdit - prompt-driven image editing.
//!
//! Select an image, describe the change, and get back the edited image from
//! a generative provider. An [`EditSession`] holds the selection and prompt,
//! runs one submission at a time, and reports progress and results to a
//! [`Surface`] supplied by the front-end.
//!
//! # Quick Start
//!
//! ```no_run
//! use genedit::{GeminiProvider, GenerationRequest, ImageProvider, SelectedImage};
//!
//! #[tokio::main]
//! async fn main() -> genedit::Result<()> {
//!     let provider = GeminiProvider::builder().build()?;
//!     let encoded = genedit::encode_image(&SelectedImage::from_path("cat.png")).await?;
//!     let request = GenerationRequest::edit(encoded, "Give the cat a tiny wizard hat");
//!     let image = provider.generate(&request).await?.into_image()?;
//!     image.save("wizard-cat.png")?;
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `gemini`: Gemini (Google) provider
//! - `cli`: Command-line front-end

mod error;
pub mod image;
pub mod session;
mod surface;

// Re-export error types at crate root
pub use error::{GenEditError, Result, UNKNOWN_ERROR_MESSAGE};

pub use image::{
    encode_image, EncodedImage, GeneratedImage, GenerationMetadata, GenerationRequest,
    GenerationResponse, ImageFormat, ImageProvider, Modality, Part, SelectedImage,
};
pub use session::{EditSession, SubmissionOutcome, SubmissionState, DEFAULT_PROMPT};
pub use surface::Surface;

#[cfg(feature = "gemini")]
pub use image::providers::{GeminiModel, GeminiProvider, GeminiProviderBuilder};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{GenEditError, Result};
    pub use crate::image::{GeneratedImage, GenerationRequest, ImageProvider, SelectedImage};
    pub use crate::session::{EditSession, SubmissionOutcome};
    pub use crate::surface::Surface;

    #[cfg(feature = "gemini")]
    pub use crate::image::providers::GeminiProvider;
}
