//! CLI for GenEdit - prompt-driven image editing.

use clap::{Args, Parser, Subcommand, ValueEnum};
use genedit::{
    EditSession, GeminiModel, GeminiProvider, GeneratedImage, ImageProvider, SelectedImage, Surface,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "genedit")]
#[command(about = "Edit images with a text prompt via Gemini")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Edit an image with a text prompt
    Edit(EditArgs),

    /// List available models
    Models,

    /// Check that the API key and model are usable
    Check {
        /// Model to check
        #[arg(short, long, value_enum, default_value = "nano-banana")]
        model: ModelArg,
    },
}

#[derive(Args)]
struct EditArgs {
    /// Image file to edit
    image: PathBuf,

    /// Edit instruction (defaults to the built-in prompt)
    #[arg(short, long)]
    prompt: Option<String>,

    /// Output file path (defaults to edited.<ext>)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Model to use
    #[arg(short, long, value_enum, default_value = "nano-banana")]
    model: ModelArg,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModelArg {
    NanoBanana,
    NanoBananaPreview,
    NanoBananaPro,
}

impl From<ModelArg> for GeminiModel {
    fn from(arg: ModelArg) -> Self {
        match arg {
            ModelArg::NanoBanana => GeminiModel::NanoBanana,
            ModelArg::NanoBananaPreview => GeminiModel::NanoBananaPreview,
            ModelArg::NanoBananaPro => GeminiModel::NanoBananaPro,
        }
    }
}

/// Renders session updates on stderr, or as JSON on stdout.
struct TerminalSurface {
    json: bool,
}

impl Surface for TerminalSurface {
    fn show_preview(&self, data_url: &str) {
        if !self.json {
            eprintln!("Loaded image ({} bytes encoded)", data_url.len());
        }
    }

    fn show_placeholder(&self) {}

    fn show_error(&self, message: &str) {
        if self.json {
            let result = serde_json::json!({ "success": false, "error": message });
            println!("{result}");
        } else {
            eprintln!("Error: {message}");
        }
    }

    fn show_result(&self, image: &GeneratedImage) {
        if !self.json {
            eprintln!("Received {} image", image.mime_type());
            if let Some(ref text) = image.text {
                eprintln!("Model says: {text}");
            }
        }
    }

    fn set_progress_visible(&self, visible: bool) {
        if visible && !self.json {
            eprintln!("Generating...");
        }
    }

    fn set_submit_enabled(&self, enabled: bool) {
        tracing::trace!(enabled, "submit control");
    }

    fn set_prompt_enabled(&self, enabled: bool) {
        tracing::trace!(enabled, "prompt input");
    }

    fn set_file_input_enabled(&self, enabled: bool) {
        tracing::trace!(enabled, "file input");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    match cli.command {
        Commands::Edit(args) => edit_image(args, cli.json).await,
        Commands::Models => {
            list_models(cli.json)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check { model } => {
            check(model, cli.json).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn edit_image(args: EditArgs, json_output: bool) -> anyhow::Result<ExitCode> {
    let provider = GeminiProvider::builder().model(args.model.into()).build()?;
    let session = EditSession::new(provider, TerminalSurface { json: json_output });

    if let Some(prompt) = args.prompt {
        session.set_prompt(prompt);
    }

    if session
        .select_image(SelectedImage::from_path(&args.image))
        .await
        .is_err()
    {
        return Ok(ExitCode::FAILURE);
    }

    let image = match session.submit().await.into_result() {
        Ok(image) => image,
        Err(_) => return Ok(ExitCode::FAILURE),
    };

    let output = args.output.unwrap_or_else(|| {
        let ext = image.format().map(|f| f.extension()).unwrap_or("png");
        PathBuf::from(format!("edited.{ext}"))
    });
    image.save(&output)?;

    if json_output {
        let result = serde_json::json!({
            "success": true,
            "output": output.display().to_string(),
            "mime_type": image.mime_type(),
            "model": image.metadata.model,
            "model_version": image.metadata.model_version,
            "duration_ms": image.metadata.duration_ms,
            "text": image.text,
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("Edited image: {}", output.display());
        if let Some(duration) = image.metadata.duration_ms {
            println!("Duration: {}ms", duration);
        }
    }

    Ok(ExitCode::SUCCESS)
}

async fn check(model: ModelArg, json_output: bool) -> anyhow::Result<()> {
    let provider = GeminiProvider::builder().model(model.into()).build()?;
    provider.health_check().await?;

    if json_output {
        let result = serde_json::json!({
            "success": true,
            "provider": provider.name(),
            "model": provider.model(),
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{} is reachable ({})", provider.name(), provider.model());
    }

    Ok(())
}

fn list_models(json_output: bool) -> anyhow::Result<()> {
    #[derive(serde::Serialize)]
    struct ModelInfo {
        name: String,
        id: &'static str,
        default: bool,
    }

    let models: Vec<ModelInfo> = GeminiModel::ALL
        .iter()
        .map(|m| ModelInfo {
            name: format!("{m:?}"),
            id: m.as_str(),
            default: *m == GeminiModel::default(),
        })
        .collect();

    if json_output {
        println!("{}", serde_json::to_string_pretty(&models)?);
    } else {
        println!("Available models (API key: GOOGLE_API_KEY or GEMINI_API_KEY):\n");
        for m in &models {
            let marker = if m.default { "*" } else { " " };
            println!("  {} {} ({})", marker, m.id, m.name);
        }
    }

    Ok(())
}
