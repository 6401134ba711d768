//! Image encoding, request/response types and providers.

pub mod encoder;
mod provider;
pub mod providers;
mod types;

pub use encoder::{data_url_payload, encode_image};
pub use provider::ImageProvider;
pub use types::{
    EncodedImage, GeneratedImage, GenerationMetadata, GenerationRequest, GenerationResponse,
    ImageFormat, ImageSource, Modality, Part, SelectedImage, FALLBACK_MIME_TYPE,
};
