use crate::error::{Error, Result};
use crate::extractors::resolve;
use crate::results::{ImageKind, ImageRecord};
use serde::Deserialize;
use url::Url;

/// Collects `<img>` elements from every shadow tree below `document.body`.
pub const SHADOW_IMAGES_SCRIPT: &str = r#"
const shadowImages = (root) => {
    const found = [];
    for (const element of root.querySelectorAll('*')) {
        if (element.shadowRoot) {
            found.push(...element.shadowRoot.querySelectorAll('img'));
            found.push(...shadowImages(element.shadowRoot));
        }
    }
    return found;
};
return shadowImages(document.body).map((img) => ({
    src: img.src || img.currentSrc || '',
    width: img.width || img.naturalWidth || 0,
    height: img.height || img.naturalHeight || 0,
}));
"#;

/// An image found inside a shadow root of a rendered page
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ShadowImage {
    #[serde(default)]
    pub src: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
}

/// Decodes the value returned by [`SHADOW_IMAGES_SCRIPT`]
pub fn decode_shadow_images(value: serde_json::Value) -> Result<Vec<ShadowImage>> {
    serde_json::from_value(value).map_err(Error::ShadowPayload)
}

/// Shadow DOM images from a script result, or none when the script failed
///
/// A failed traversal is logged and never stops the rest of the extraction.
pub fn shadow_images_or_empty(script_result: Result<serde_json::Value>) -> Vec<ShadowImage> {
    match script_result.and_then(decode_shadow_images) {
        Ok(images) => images,
        Err(e) => {
            ::log::warn!("Error processing shadow DOM: {}", e);
            Vec::new()
        }
    }
}

/// Records for shadow DOM images with a usable source
pub fn shadow_sources(images: &[ShadowImage], base: &Url) -> Vec<ImageRecord> {
    images
        .iter()
        .filter(|img| !img.src.is_empty())
        .filter_map(|img| {
            let source = resolve(base, &img.src)?;
            Some(ImageRecord::with_size(
                ImageKind::Img,
                source,
                img.width,
                img.height,
            ))
        })
        .collect()
}
