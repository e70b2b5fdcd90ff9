//! # labelsheet CLI
//!
//! Command-line interface for rendering label sheets.
//!
//! ## Usage
//!
//! ```bash
//! # Render a JSON batch to PDF
//! labelsheet render labels.json -o labels.pdf
//!
//! # Force flow packing with a wider gap
//! labelsheet render labels.json -o labels.pdf --mode flow --spacing 20
//!
//! # Start the HTTP server
//! labelsheet serve --listen 0.0.0.0:3001
//!
//! # List label templates
//! labelsheet templates
//! ```
//!
//! The batch file is either a JSON array of label configurations or an
//! object with a `labels` array.

use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::path::PathBuf;
use tracing::info;

use labelsheet::{
    LabelConfig, LabelError, ModeChoice, PageSpec, Sheet,
    page::DEFAULT_SPACING,
    server::{self, ServerConfig},
    style, templates,
};

/// labelsheet - Printable label sheet generator
#[derive(Parser, Debug)]
#[command(name = "labelsheet")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a JSON batch of labels to a PDF file
    Render {
        /// Batch file (JSON)
        input: PathBuf,

        /// Output PDF path
        #[arg(short, long, value_name = "FILE", default_value = "labels.pdf")]
        output: PathBuf,

        /// Packing mode: fixed, flow or auto
        #[arg(long, default_value = "auto")]
        mode: ModeChoice,

        /// Page margin in points
        #[arg(long, default_value_t = PageSpec::LETTER.margin)]
        margin: f32,

        /// Gap between labels in points
        #[arg(long, default_value_t = DEFAULT_SPACING)]
        spacing: f32,
    },

    /// Start the HTTP server
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "0.0.0.0:3001")]
        listen: String,

        /// Page margin in points
        #[arg(long, default_value_t = PageSpec::LETTER.margin)]
        margin: f32,

        /// Gap between labels in points
        #[arg(long, default_value_t = DEFAULT_SPACING)]
        spacing: f32,
    },

    /// List available label templates, fonts and colors
    Templates,
}

/// Batch file contents.
#[derive(Deserialize)]
#[serde(untagged)]
enum BatchFile {
    List(Vec<LabelConfig>),
    Wrapped {
        #[serde(alias = "etiquetas")]
        labels: Vec<LabelConfig>,
    },
}

impl BatchFile {
    fn into_labels(self) -> Vec<LabelConfig> {
        match self {
            BatchFile::List(labels) | BatchFile::Wrapped { labels } => labels,
        }
    }
}

fn main() {
    labelsheet::init_logging();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), LabelError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            input,
            output,
            mode,
            margin,
            spacing,
        } => {
            let page = PageSpec::letter_with_margin(margin)?;
            let text = std::fs::read_to_string(&input)?;
            let configs = serde_json::from_str::<BatchFile>(&text)?.into_labels();

            let sheet = Sheet::new(page, mode, spacing);
            let pdf = sheet.render_pdf(&configs)?;
            std::fs::write(&output, &pdf)?;

            info!(
                input = %input.display(),
                output = %output.display(),
                bytes = pdf.len(),
                "wrote label sheet"
            );
            println!("Saved to {}", output.display());
        }

        Commands::Serve {
            listen,
            margin,
            spacing,
        } => {
            let config = ServerConfig {
                listen_addr: listen,
                page: PageSpec::letter_with_margin(margin)?,
                spacing,
            };
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(server::serve(config))?;
        }

        Commands::Templates => {
            println!("Available templates:");
            for template in templates::all() {
                let size = template.geometry.fixed;
                println!(
                    "  {:<18} {:<26} {}x{}  aliases: {}",
                    template.tag,
                    template.name,
                    size.width,
                    size.height,
                    template.aliases.join(", ")
                );
            }

            println!("\nFonts:");
            for font in style::fonts() {
                println!("  {:<10} {:?} x{}", font.key, font.handle, font.size_multiplier);
            }

            println!("\nColors:");
            for color in style::colors() {
                let c = color.color;
                println!(
                    "  {:<8} #{:02X}{:02X}{:02X}  aliases: {}",
                    color.key,
                    c.r,
                    c.g,
                    c.b,
                    color.aliases.join(", ")
                );
            }
        }
    }

    Ok(())
}
