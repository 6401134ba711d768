//! Image editing example - modifies an existing image with a text prompt.
//!
//! Run with: `cargo run --example edit_image -- <input_image.png>`
//!
//! Requires `GOOGLE_API_KEY` (or `GEMINI_API_KEY`) environment variable.

use genedit::{encode_image, GeminiProvider, GenerationRequest, ImageProvider, SelectedImage};

#[tokio::main]
async fn main() -> genedit::Result<()> {
    let input_path = std::env::args()
        .nth(1)
        .expect("Usage: edit_image <input_image.png>");

    let provider = GeminiProvider::builder().build()?;

    let encoded = encode_image(&SelectedImage::from_path(input_path)).await?;
    let request = GenerationRequest::edit(
        encoded,
        "Make the colors more vibrant and add a warm sunset glow",
    );

    let response = provider.generate(&request).await?;
    if let Some(text) = response.text() {
        println!("Model says: {text}");
    }

    let image = response.into_image()?;
    image.save("edited.png")?;
    println!("Edited image saved to edited.png ({})", image.mime_type());

    Ok(())
}
