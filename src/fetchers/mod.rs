pub mod browser;
pub mod http;

use crate::config::ExtractorConfig;
use crate::error::Result;
use crate::extractors::shadow::ShadowImage;
use url::Url;

/// How a page is retrieved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchMode {
    /// Plain HTTP GET of the raw HTML
    #[default]
    Http,
    /// Rendered by a headless browser through WebDriver
    Browser,
}

/// Markup of a fetched page
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub html: String,

    /// Images collected from shadow roots; only present for rendered pages
    pub shadow_images: Option<Vec<ShadowImage>>,
}

/// Fetches `url` with the requested mode
pub async fn fetch(url: &Url, mode: FetchMode, config: &ExtractorConfig) -> Result<FetchedPage> {
    match mode {
        FetchMode::Http => {
            let client = http::build_client(&config.user_agent)?;
            let html = http::fetch(&client, url).await?;
            Ok(FetchedPage {
                html,
                shadow_images: None,
            })
        }
        FetchMode::Browser => browser::render(url, config).await,
    }
}
