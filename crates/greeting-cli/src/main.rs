//! Greeting CLI: edit and preview the birthday greeting from the command line.
//!
//! Storage location comes from GREETING_STORAGE_ROOT (default `saved_birthday_data`).

use anyhow::Context;
use clap::{Parser, Subcommand};
use greeting_cli::{init_tracing, source_label, PageSummary, SettingsOverrides};
use greeting_core::{BackgroundPreset, Config};
use greeting_services::{GreetingService, Upload};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "greeting", about = "Birthday greeting page tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the saved settings (or the defaults)
    Show,
    /// Update settings, store images and save
    Save {
        #[command(flatten)]
        overrides: SettingsOverrides,
        /// Additional image to show; repeat up to three times
        #[arg(long = "image", value_name = "FILE")]
        images: Vec<PathBuf>,
        /// Image file to use as a custom background
        #[arg(long, value_name = "FILE")]
        background_file: Option<PathBuf>,
    },
    /// Resolve the page and print what would be shown
    Render,
    /// List the preset backgrounds
    Presets,
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("Serialize output")?;
    println!("{}", out);
    Ok(())
}

fn read_upload(path: &Path) -> anyhow::Result<Upload> {
    Upload::from_path(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::from_env().context("Failed to load configuration")?;
    init_tracing(config.is_production());

    let service = GreetingService::from_config(&config);
    service
        .ensure_ready()
        .context("Failed to prepare the storage directory")?;

    match cli.command {
        Commands::Show => {
            let loaded = service.load_settings();
            print_json(&serde_json::json!({
                "source": source_label(loaded.source),
                "warning": loaded.warning.map(|w| w.to_string()),
                "configuration": loaded.configuration,
            }))?;
        }
        Commands::Save {
            overrides,
            images,
            background_file,
        } => {
            let mut configuration = service.load_settings().configuration;
            overrides.apply(&mut configuration);

            if let Some(path) = background_file {
                let upload = read_upload(&path)?;
                service
                    .set_custom_background(&mut configuration, &upload)
                    .context("Failed to store background image")?;
            }

            let uploads = images
                .iter()
                .map(|path| read_upload(path))
                .collect::<anyhow::Result<Vec<_>>>()?;
            let saved = service
                .save(configuration, &uploads)
                .context("Failed to save settings")?;
            print_json(&saved)?;
        }
        Commands::Render => {
            let loaded = service.load_settings();
            let page = service.render(&loaded.configuration);
            print_json(&PageSummary::from(&page))?;
        }
        Commands::Presets => {
            let presets: Vec<_> = BackgroundPreset::ALL
                .iter()
                .map(|preset| serde_json::json!({ "key": preset.key(), "url": preset.url() }))
                .collect();
            print_json(&presets)?;
        }
    }

    Ok(())
}
