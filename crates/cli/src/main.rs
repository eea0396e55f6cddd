//! swagger2openapi CLI
//!
//! Command-line interface for converting Swagger 2.0 documents to OpenAPI 3.0.

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use std::path::{Path, PathBuf};
use swagger2openapi_common::ConverterOptions;
use swagger2openapi_converter::{InputFormat, SwaggerParser};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "swagger2openapi")]
#[command(version, about = "Convert Swagger 2.0 specifications to OpenAPI 3.0", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a Swagger 2.0 document to an OpenAPI 3.0.0 document
    #[command(after_help = "EXAMPLES:\n  \
        # Write docs/swagger-openapi3.json next to the input\n  \
        swagger2openapi convert docs/swagger.json\n\n  \
        # Choose the output path\n  \
        swagger2openapi convert docs/swagger.json docs/openapi.json\n\n  \
        # Override server defaults from a config file\n  \
        swagger2openapi convert swagger.yaml --config convert.yaml")]
    Convert {
        /// Path to the Swagger 2.0 document
        input: PathBuf,

        /// Output path (defaults to <input-stem>-openapi3.json beside the input)
        output: Option<PathBuf>,

        /// YAML file with conversion options
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Input format (detected from the extension if not specified)
        #[arg(long)]
        input_format: Option<InputFormatArg>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum InputFormatArg {
    /// JSON document
    Json,
    /// YAML document
    Yaml,
}

impl From<InputFormatArg> for InputFormat {
    fn from(arg: InputFormatArg) -> Self {
        match arg {
            InputFormatArg::Json => InputFormat::Json,
            InputFormatArg::Yaml => InputFormat::Yaml,
        }
    }
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            // Usage errors exit with 1, not clap's default of 2
            let _ = e.print();
            std::process::exit(1);
        }
    };

    init_logging(cli.verbose);

    match cli.command {
        Commands::Convert {
            input,
            output,
            config,
            input_format,
        } => {
            convert_command(
                input.as_path(),
                output.as_deref(),
                config.as_deref(),
                input_format.map(InputFormat::from),
                cli.verbose,
            )?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "warn,swagger2openapi_converter=debug"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .init();
}

fn convert_command(
    input: &Path,
    output: Option<&Path>,
    config: Option<&Path>,
    format: Option<InputFormat>,
    verbose: bool,
) -> Result<()> {
    let output_path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output_path(input));

    let options = match config {
        Some(path) => ConverterOptions::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ConverterOptions::default(),
    };

    let format = format.unwrap_or_else(|| InputFormat::from_path(input));

    if verbose {
        println!("{} Reading {}", "→".cyan(), input.display());
        println!("  Format: {:?}", format);
        println!("  Output: {}", output_path.display());
        if let Some(path) = config {
            println!("  Config: {}", path.display());
        }
    }

    let parser = SwaggerParser::from_file_with_format(input, format)
        .with_context(|| format!("Failed to load Swagger document {}", input.display()))?
        .with_options(options);

    if !parser.is_swagger_2() {
        eprintln!(
            "{} Warning: {} may not be a Swagger 2.0 file",
            "⚠".yellow(),
            input.display()
        );
    }

    let document = parser.convert();
    document
        .write_to_file(&output_path)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    let summary = document.summary();
    println!(
        "{} Converted {} to {}",
        "✓".green(),
        input.display(),
        output_path.display()
    );
    println!("  Format: OpenAPI {}", document.openapi);
    println!("  Endpoints: {}", summary.endpoints);
    println!("  Schemas: {}", summary.schemas);

    if verbose {
        println!("  Operations: {}", summary.operations);
        println!("\n{}", "Paths:".bold());
        for (path, item) in &document.paths {
            let methods: Vec<String> = item.keys().map(|m| m.to_uppercase()).collect();
            println!("  • {} ({})", path.cyan(), methods.join(", "));
        }
    }

    Ok(())
}

/// `<dir>/<stem>-openapi3.json` next to the input file
fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("swagger");

    input
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(format!("{}-openapi3.json", stem))
}
