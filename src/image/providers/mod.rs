//! Image editing providers.

#[cfg(feature = "gemini")]
mod gemini;

#[cfg(feature = "gemini")]
pub use gemini::{
    GeminiModel, GeminiProvider, GeminiProviderBuilder, API_KEY_ENV_VARS, DEFAULT_BASE_URL,
};
