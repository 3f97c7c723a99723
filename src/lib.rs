// Re-export modules
pub mod config;
pub mod download;
pub mod error;
pub mod extractors;
pub mod fetchers;
pub mod prompt;
pub mod report;
pub mod results;
pub mod utils;

// Re-export commonly used types for convenience
pub use error::{Error, Result};
pub use fetchers::FetchMode;
pub use results::{ImageKind, ImageRecord, PageResult};

use config::ExtractorConfig;
use url::Url;

/// Builder for extracting the images of a single page
pub struct Images {
    url: String,
    mode: FetchMode,
    config: ExtractorConfig,
}

impl Images {
    /// Create a new builder for `url` with default settings
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            mode: FetchMode::Http,
            config: ExtractorConfig::default().with_env_overrides(),
        }
    }

    /// Render the page in a headless browser instead of a plain HTTP fetch
    pub fn with_browser(mut self, use_browser: bool) -> Self {
        self.mode = if use_browser {
            FetchMode::Browser
        } else {
            FetchMode::Http
        };
        self
    }

    /// Set the configuration
    pub fn with_config(mut self, config: ExtractorConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a file
    pub fn with_config_file(self, path: impl AsRef<std::path::Path>) -> Result<Self> {
        let config = ExtractorConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Load configuration from a string
    pub fn with_config_str(self, config_str: &str) -> Result<Self> {
        let config = ExtractorConfig::from_json(config_str)?;
        Ok(self.with_config(config))
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Fetch the page and extract its images
    ///
    /// Any failure is logged and reported as [`PageResult::empty`].
    pub async fn generate(&self) -> PageResult {
        match self.try_generate().await {
            Ok(result) => result,
            Err(e) => {
                ::log::error!("Error retrieving images from {}: {}", self.url, e);
                PageResult::empty()
            }
        }
    }

    /// Fetch the page and extract its images, surfacing fetch errors
    pub async fn try_generate(&self) -> Result<PageResult> {
        let base = Url::parse(&self.url).map_err(|source| Error::InvalidUrl {
            url: self.url.clone(),
            source,
        })?;

        let page = fetchers::fetch(&base, self.mode, &self.config).await?;
        let result = extractors::extract(&page.html, &base, page.shadow_images.as_deref());

        ::log::info!("Found {} unique images on {}", result.images.len(), base);
        Ok(result)
    }
}
