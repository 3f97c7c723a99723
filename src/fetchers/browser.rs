use crate::config::ExtractorConfig;
use crate::error::{Error, Result};
use crate::extractors::shadow::{self, SHADOW_IMAGES_SCRIPT};
use crate::fetchers::FetchedPage;
use fantoccini::wd::Capabilities;
use fantoccini::{Client, ClientBuilder};
use serde_json::json;
use std::time::Duration;
use url::Url;

/// Endpoints tried when the configured WebDriver URL is unreachable
const FALLBACK_WEBDRIVER_URLS: [&str; 3] = [
    "http://localhost:9515", // ChromeDriver default
    "http://localhost:4444", // Selenium / geckodriver default
    "http://127.0.0.1:4444", // Try with IP instead of localhost
];

/// Renders `url` in a headless browser and collects shadow DOM images
///
/// The WebDriver session only lives for this call and is closed whether or
/// not rendering succeeded.
pub async fn render(url: &Url, config: &ExtractorConfig) -> Result<FetchedPage> {
    let client = connect_to_webdriver(&config.webdriver_url).await?;

    let rendered = load_page(&client, url, Duration::from_millis(config.render_wait_ms)).await;

    if let Err(e) = client.close().await {
        ::log::warn!("Failed to close WebDriver session: {}", e);
    }

    rendered
}

/// Capabilities for a headless Chrome session
pub fn headless_capabilities() -> Capabilities {
    let mut caps = Capabilities::new();
    caps.insert("browserName".to_string(), json!("chrome"));
    caps.insert(
        "goog:chromeOptions".to_string(),
        json!({
            "args": ["--headless", "--no-sandbox", "--disable-dev-shm-usage"]
        }),
    );
    caps
}

/// Connects to the WebDriver instance, falling back to common local endpoints
async fn connect_to_webdriver(webdriver_url: &str) -> Result<Client> {
    match new_session(webdriver_url).await {
        Ok(client) => {
            ::log::debug!("Connected to WebDriver at {}", webdriver_url);
            return Ok(client);
        }
        Err(e) => {
            ::log::error!(
                "Failed to connect to WebDriver at {}: {}",
                webdriver_url,
                e
            );
        }
    }

    let mut tried = vec![webdriver_url.to_string()];
    for url in FALLBACK_WEBDRIVER_URLS.iter() {
        if *url == webdriver_url {
            continue;
        }

        ::log::info!("Trying fallback WebDriver URL: {}", url);
        tried.push(url.to_string());
        if let Ok(client) = new_session(url).await {
            ::log::debug!("Connected to fallback WebDriver at {}", url);
            return Ok(client);
        }
    }

    ::log::error!(
        "Make sure a WebDriver server is running or set the WEBDRIVER_URL environment variable"
    );
    Err(Error::NoWebDriver(tried.join(", ")))
}

async fn new_session(
    webdriver_url: &str,
) -> std::result::Result<Client, fantoccini::error::NewSessionError> {
    ClientBuilder::native()
        .capabilities(headless_capabilities())
        .connect(webdriver_url)
        .await
}

async fn load_page(client: &Client, url: &Url, render_wait: Duration) -> Result<FetchedPage> {
    ::log::info!("Rendering {}", url);
    client.goto(url.as_str()).await?;

    // No readiness signal; give scripts a fixed window to populate the page
    tokio::time::sleep(render_wait).await;

    let html = client.source().await?;
    ::log::debug!("Rendered {} bytes from {}", html.len(), url);

    let script_result = client
        .execute(SHADOW_IMAGES_SCRIPT, Vec::new())
        .await
        .map_err(Error::from);
    let shadow_images = shadow::shadow_images_or_empty(script_result);

    Ok(FetchedPage {
        html,
        shadow_images: Some(shadow_images),
    })
}
