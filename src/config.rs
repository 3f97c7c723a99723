use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// User agent sent with plain HTTP fetches
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Configuration for an extraction run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// URL used when the prompt is left blank
    #[serde(default = "default_url")]
    pub default_url: String,

    /// User agent for plain HTTP fetches
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// URL for the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// Delay after page load before reading a rendered page
    #[serde(default = "default_render_wait_ms")]
    pub render_wait_ms: u64,

    /// Maximum number of images to download
    #[serde(default = "default_max_downloads")]
    pub max_downloads: usize,

    /// Folder that receives downloaded images
    #[serde(default = "default_download_dir")]
    pub download_dir: PathBuf,

    /// Path of the text report
    #[serde(default = "default_report_path")]
    pub report_path: PathBuf,
}

impl ExtractorConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Error::Config)
    }

    /// Apply the `WEBDRIVER_URL` environment override, if set
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(webdriver_url) = std::env::var("WEBDRIVER_URL") {
            if !webdriver_url.is_empty() {
                self.webdriver_url = webdriver_url;
            }
        }
        self
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            default_url: default_url(),
            user_agent: default_user_agent(),
            webdriver_url: default_webdriver_url(),
            render_wait_ms: default_render_wait_ms(),
            max_downloads: default_max_downloads(),
            download_dir: default_download_dir(),
            report_path: default_report_path(),
        }
    }
}

fn default_url() -> String {
    "https://en.wikipedia.org/wiki/Cat".to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

/// Default value for webdriver_url
fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

fn default_render_wait_ms() -> u64 {
    2000
}

fn default_max_downloads() -> usize {
    5
}

fn default_download_dir() -> PathBuf {
    PathBuf::from("downloaded_images")
}

fn default_report_path() -> PathBuf {
    PathBuf::from("image_urls.txt")
}
