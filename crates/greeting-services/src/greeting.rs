use crate::types::{
    BackgroundSource, ImageGallery, PageData, ResolvedImage, SkipReason, SkippedImage, Upload,
};
use greeting_core::constants::MAX_IMAGES;
use greeting_core::{AppError, AssetRef, Background, BackgroundPreset, Config, Configuration};
use greeting_processing::{to_data_uri, ImageRenderer};
use greeting_storage::{
    AssetStore, ConfigRepository, JsonConfigRepository, LoadedConfiguration, LocalAssetStore,
};
use validator::Validate;

/// Render-cycle orchestration over an asset store and a configuration repository.
///
/// Recoverable conditions (missing asset, unreadable record, undecodable image) are
/// handled here and never abort a render. Only failures of an explicit save or
/// upload are returned to the caller.
pub struct GreetingService<A, R> {
    assets: A,
    repository: R,
}

impl GreetingService<LocalAssetStore, JsonConfigRepository> {
    /// Filesystem-backed service using the layout from `config`
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            LocalAssetStore::new(config.asset_root()),
            JsonConfigRepository::new(config.config_path()),
        )
    }
}

impl<A: AssetStore, R: ConfigRepository> GreetingService<A, R> {
    pub fn new(assets: A, repository: R) -> Self {
        Self { assets, repository }
    }

    pub fn assets(&self) -> &A {
        &self.assets
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Provision storage directories. Call once before the first render.
    pub fn ensure_ready(&self) -> Result<(), AppError> {
        self.assets.ensure_ready()?;
        tracing::debug!(asset_root = %self.assets.root().display(), "Storage ready");
        Ok(())
    }

    /// Saved settings, or defaults on first run or when the record is unreadable
    pub fn load_settings(&self) -> LoadedConfiguration {
        let loaded = self.repository.load_or_default();
        if let Some(ref warning) = loaded.warning {
            tracing::warn!(
                error = %warning,
                "Saved configuration could not be read, using defaults"
            );
        }
        loaded
    }

    /// Store up to `MAX_IMAGES` uploads in order and return their references
    pub fn store_uploads(&self, uploads: &[Upload]) -> Result<Vec<AssetRef>, AppError> {
        if uploads.len() > MAX_IMAGES {
            tracing::warn!(
                received = uploads.len(),
                kept = MAX_IMAGES,
                "Too many images uploaded, ignoring the rest"
            );
        }

        uploads
            .iter()
            .take(MAX_IMAGES)
            .map(|upload| {
                self.assets
                    .store(&upload.file_name, &upload.data)
                    .map_err(AppError::from)
            })
            .collect()
    }

    /// Persist `configuration`, storing `uploads` first.
    ///
    /// When any upload is given, the new references replace the record's image list;
    /// otherwise the list already in the record is saved as-is. An invalid record is
    /// rejected before any upload is written.
    pub fn save(
        &self,
        mut configuration: Configuration,
        uploads: &[Upload],
    ) -> Result<Configuration, AppError> {
        configuration.validate()?;

        let references = self.store_uploads(uploads)?;
        if !references.is_empty() {
            configuration.set_images(references);
        }

        self.repository.save(&configuration)?;
        Ok(configuration)
    }

    /// Store `upload` and make it the record's background
    pub fn set_custom_background(
        &self,
        configuration: &mut Configuration,
        upload: &Upload,
    ) -> Result<AssetRef, AppError> {
        let reference = self.assets.store(&upload.file_name, &upload.data)?;
        configuration.background = Background::Custom {
            reference: reference.clone(),
        };
        Ok(reference)
    }

    /// Load one asset and scale it to `width`
    pub fn resolve_image(
        &self,
        reference: &AssetRef,
        width: u32,
    ) -> Result<ResolvedImage, AppError> {
        let data = self
            .assets
            .load(reference)?
            .ok_or_else(|| AppError::NotFound(format!("Image {} is missing", reference)))?;

        let rendered = ImageRenderer::resize_to_width(&data, i64::from(width))?;

        Ok(ResolvedImage {
            reference: reference.clone(),
            data_uri: to_data_uri(&rendered.data),
            width: rendered.width,
            height: rendered.height,
        })
    }

    /// Resolve every image of the record, skipping the ones that cannot be shown
    pub fn resolve_images(&self, configuration: &Configuration) -> ImageGallery {
        let mut gallery = ImageGallery::default();

        for reference in &configuration.image_paths {
            match self.resolve_image(reference, configuration.image_size) {
                Ok(image) => gallery.images.push(image),
                Err(AppError::NotFound(_)) => {
                    tracing::warn!(reference = %reference, "Skipping missing image");
                    gallery.skipped.push(SkippedImage {
                        reference: reference.clone(),
                        reason: SkipReason::NotFound,
                    });
                }
                Err(err) => {
                    tracing::warn!(
                        reference = %reference,
                        error = %err,
                        "Skipping image that cannot be displayed"
                    );
                    gallery.skipped.push(SkippedImage {
                        reference: reference.clone(),
                        reason: SkipReason::Unreadable(err.to_string()),
                    });
                }
            }
        }

        gallery
    }

    /// Background for the page; a custom image that cannot be shown falls back to
    /// the default preset.
    pub fn resolve_background(&self, configuration: &Configuration) -> BackgroundSource {
        let reference = match &configuration.background {
            Background::Preset { key } => return BackgroundSource::Url(key.url().to_string()),
            Background::Custom { reference } => reference,
        };

        match self.load_background(reference) {
            Ok(uri) => BackgroundSource::DataUri(uri),
            Err(err) => {
                tracing::warn!(
                    reference = %reference,
                    error = %err,
                    "Custom background unavailable, using default preset"
                );
                BackgroundSource::Url(BackgroundPreset::default().url().to_string())
            }
        }
    }

    fn load_background(&self, reference: &AssetRef) -> Result<String, AppError> {
        let data = self
            .assets
            .load(reference)?
            .ok_or_else(|| AppError::NotFound(format!("Background {} is missing", reference)))?;
        let rendered = ImageRenderer::to_png(&data)?;
        Ok(to_data_uri(&rendered.data))
    }

    /// Resolve everything the page shows for `configuration`
    pub fn render(&self, configuration: &Configuration) -> PageData {
        let background = self.resolve_background(configuration);
        let gallery = self.resolve_images(configuration);

        tracing::info!(
            images = gallery.images.len(),
            skipped = gallery.skipped.len(),
            custom_background = configuration.background.is_custom(),
            "Page resolved"
        );

        PageData {
            configuration: configuration.clone(),
            background,
            gallery,
        }
    }
}
