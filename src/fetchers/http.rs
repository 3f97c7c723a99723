use crate::error::Result;
use reqwest::Client;
use url::Url;

/// Creates the HTTP client used for page fetches and image downloads
pub fn build_client(user_agent: &str) -> Result<Client> {
    Ok(Client::builder().user_agent(user_agent).build()?)
}

/// Fetches the raw HTML of `url`, failing on non-2xx responses
pub async fn fetch(client: &Client, url: &Url) -> Result<String> {
    ::log::info!("Fetching {}", url);

    let response = client.get(url.clone()).send().await?.error_for_status()?;
    let html = response.text().await?;

    ::log::debug!("Fetched {} bytes from {}", html.len(), url);
    Ok(html)
}
