use greeting_core::{AssetRef, Configuration};
use serde::Serialize;
use std::io;
use std::path::Path;

/// A file handed over by the presentation layer
#[derive(Debug, Clone)]
pub struct Upload {
    pub file_name: String,
    pub data: Vec<u8>,
}

impl Upload {
    pub fn new(file_name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            data: data.into(),
        }
    }

    /// Read a local file, keeping its file name as the upload name
    pub fn from_path(path: &Path) -> io::Result<Self> {
        let data = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("{} has no file name", path.display()),
                )
            })?;
        Ok(Self { file_name, data })
    }
}

/// An image ready to embed
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedImage {
    pub reference: AssetRef,
    pub data_uri: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum SkipReason {
    /// The reference no longer resolves to a stored file
    NotFound,
    /// The file exists but could not be displayed
    Unreadable(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct SkippedImage {
    pub reference: AssetRef,
    pub reason: SkipReason,
}

/// Additional images in display order, plus the ones that were left out
#[derive(Debug, Clone, Default, Serialize)]
pub struct ImageGallery {
    pub images: Vec<ResolvedImage>,
    pub skipped: Vec<SkippedImage>,
}

impl ImageGallery {
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

/// Where the page background comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum BackgroundSource {
    Url(String),
    DataUri(String),
}

impl BackgroundSource {
    /// Value for a CSS `url(...)`
    pub fn as_css_url(&self) -> &str {
        match self {
            BackgroundSource::Url(url) | BackgroundSource::DataUri(url) => url,
        }
    }
}

/// Everything the presentation layer needs for one render
#[derive(Debug, Clone, Serialize)]
pub struct PageData {
    pub configuration: Configuration,
    pub background: BackgroundSource,
    pub gallery: ImageGallery,
}
