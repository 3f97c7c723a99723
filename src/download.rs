use crate::error::Result;
use crate::utils::guess_extension;
use reqwest::Client;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

/// Downloads up to `max` of `urls` into `dir`
///
/// Files are named `image_<n>.<ext>` after the URL's position in `urls`.
/// A failing URL is logged and skipped; it does not count towards `max` and
/// leaves no file behind.
pub async fn download_images(
    client: &Client,
    urls: &[String],
    dir: &Path,
    max: usize,
) -> Result<Vec<PathBuf>> {
    tokio::fs::create_dir_all(dir).await?;

    let mut saved = Vec::new();
    for (index, url) in urls.iter().enumerate() {
        if saved.len() >= max {
            break;
        }

        let path = dir.join(format!("image_{}.{}", index + 1, guess_extension(url)));
        match download_image(client, url, &path).await {
            Ok(bytes) => {
                ::log::info!("Downloaded: {} ({} bytes)", path.display(), bytes);
                saved.push(path);
            }
            Err(e) => {
                ::log::warn!("Error downloading {}: {}", url, e);
                if tokio::fs::remove_file(&path).await.is_ok() {
                    ::log::debug!("Removed partial download {}", path.display());
                }
            }
        }
    }

    Ok(saved)
}

async fn download_image(client: &Client, url: &str, path: &Path) -> Result<u64> {
    let mut response = client.get(url).send().await?.error_for_status()?;

    let mut file = tokio::fs::File::create(path).await?;
    let mut written = 0;
    while let Some(chunk) = response.chunk().await? {
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }
    file.flush().await?;

    Ok(written)
}
