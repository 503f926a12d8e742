use clap::Args;
use greeting_core::{Background, BackgroundPreset, Configuration};
use greeting_services::{BackgroundSource, PageData, SkipReason};
use greeting_storage::ConfigSource;
use serde::Serialize;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing for the CLI. Logs go to stderr so stdout stays valid JSON.
pub fn init_tracing(json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("greeting=info"));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

/// Truncate a string to max_len characters, appending "..." if truncated.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

pub fn source_label(source: ConfigSource) -> &'static str {
    match source {
        ConfigSource::Saved => "saved",
        ConfigSource::Defaults => "defaults",
        ConfigSource::Fallback => "fallback",
    }
}

/// Field overrides for `greeting save`; unset flags keep the loaded value
#[derive(Args, Debug, Default)]
pub struct SettingsOverrides {
    /// Name shown in the greeting
    #[arg(long)]
    pub recipient: Option<String>,
    #[arg(long)]
    pub age: Option<u32>,
    /// Who the greeting is from
    #[arg(long)]
    pub sender: Option<String>,
    /// Primary text color, e.g. "#FF69B4"
    #[arg(long)]
    pub text_color: Option<String>,
    /// Secondary text color
    #[arg(long)]
    pub text_color2: Option<String>,
    #[arg(long)]
    pub font_size: Option<u32>,
    #[arg(long)]
    pub animation_speed: Option<u32>,
    #[arg(long)]
    pub flower_count: Option<u32>,
    /// Display width of the additional images in pixels
    #[arg(long)]
    pub image_size: Option<u32>,
    /// Preset background key (see `greeting presets`)
    #[arg(long, conflicts_with = "background_file")]
    pub background_preset: Option<BackgroundPreset>,
}

impl SettingsOverrides {
    pub fn apply(self, configuration: &mut Configuration) {
        if let Some(recipient) = self.recipient {
            configuration.recipient_name = recipient;
        }
        if let Some(age) = self.age {
            configuration.age = age;
        }
        if let Some(sender) = self.sender {
            configuration.sender = sender;
        }
        if let Some(color) = self.text_color {
            configuration.text_color = color;
        }
        if let Some(color) = self.text_color2 {
            configuration.text_color2 = color;
        }
        if let Some(size) = self.font_size {
            configuration.font_size = size;
        }
        if let Some(speed) = self.animation_speed {
            configuration.animation_speed = speed;
        }
        if let Some(count) = self.flower_count {
            configuration.flower_count = count;
        }
        if let Some(size) = self.image_size {
            configuration.image_size = size;
        }
        if let Some(key) = self.background_preset {
            configuration.background = Background::Preset { key };
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ImageSummary {
    pub reference: String,
    pub width: u32,
    pub height: u32,
    pub encoded_len: usize,
}

#[derive(Debug, Serialize)]
pub struct SkipSummary {
    pub reference: String,
    pub reason: String,
}

/// Printable digest of a resolved page; data URIs are shortened
#[derive(Debug, Serialize)]
pub struct PageSummary {
    pub recipient_name: String,
    pub age: u32,
    pub sender: String,
    pub background_kind: &'static str,
    pub background: String,
    pub images: Vec<ImageSummary>,
    pub skipped: Vec<SkipSummary>,
}

impl From<&PageData> for PageSummary {
    fn from(page: &PageData) -> Self {
        let (background_kind, background) = match &page.background {
            BackgroundSource::Url(url) => ("url", url.clone()),
            BackgroundSource::DataUri(uri) => ("data_uri", truncate_string(uri, 48)),
        };

        Self {
            recipient_name: page.configuration.recipient_name.clone(),
            age: page.configuration.age,
            sender: page.configuration.sender.clone(),
            background_kind,
            background,
            images: page
                .gallery
                .images
                .iter()
                .map(|image| ImageSummary {
                    reference: image.reference.to_string(),
                    width: image.width,
                    height: image.height,
                    encoded_len: image.data_uri.len(),
                })
                .collect(),
            skipped: page
                .gallery
                .skipped
                .iter()
                .map(|skipped| SkipSummary {
                    reference: skipped.reference.to_string(),
                    reason: match &skipped.reason {
                        SkipReason::NotFound => "not found".to_string(),
                        SkipReason::Unreadable(detail) => detail.clone(),
                    },
                })
                .collect(),
        }
    }
}
