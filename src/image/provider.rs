//! Image provider trait.

use crate::error::Result;
use crate::image::types::{GenerationRequest, GenerationResponse};
use async_trait::async_trait;
use std::sync::Arc;

/// A remote generative service that answers multimodal edit requests.
///
/// Implementations issue exactly one call per [`generate`](Self::generate)
/// and return the response parts in service order; choosing which part to
/// display is left to the caller.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    /// Sends the request and returns the ordered response parts.
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResponse>;

    /// Returns the name of this provider for display.
    fn name(&self) -> &str;

    /// Returns the model identifier requests are sent to.
    fn model(&self) -> &str;

    /// Checks if the provider is reachable and authenticated.
    async fn health_check(&self) -> Result<()>;
}

#[async_trait]
impl<P: ImageProvider + ?Sized> ImageProvider for Arc<P> {
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResponse> {
        (**self).generate(request).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn model(&self) -> &str {
        (**self).model()
    }

    async fn health_check(&self) -> Result<()> {
        (**self).health_check().await
    }
}
