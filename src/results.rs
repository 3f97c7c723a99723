use serde::{Deserialize, Serialize};

/// Which heuristic produced an image reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImageKind {
    /// `<img>` tags, `<source>` candidates and shadow-DOM images
    Img,
    /// Anchors and free-text URLs that point at image files
    Link,
    /// `<input type="image">`
    InputImage,
    /// `url(...)` references in inline styles
    Background,
    /// Inline SVG markup turned into a data URL
    DataUrl,
}

/// A single image reference found on a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    /// Heuristic that found the image
    pub kind: ImageKind,

    /// Absolute URL or data URL
    pub source: String,

    /// Declared width, 0 when unknown
    pub width: u32,

    /// Declared height, 0 when unknown
    pub height: u32,
}

impl ImageRecord {
    /// Create a record without known dimensions
    pub fn new(kind: ImageKind, source: impl Into<String>) -> Self {
        Self::with_size(kind, source, 0, 0)
    }

    /// Create a record with declared dimensions
    pub fn with_size(kind: ImageKind, source: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            kind,
            source: source.into(),
            width,
            height,
        }
    }
}

/// Images and metadata extracted from one page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult {
    /// Unique image sources in first-seen order
    pub images: Vec<String>,

    /// Text of the `<title>` element, empty when absent
    pub title: String,

    /// Always `true`. Kept for consumers of the JSON shape; no frame
    /// detection is performed.
    pub is_top: bool,

    /// `scheme://host` of the requested URL
    pub origin: String,
}

impl PageResult {
    /// Create a new page result
    pub fn new(images: Vec<String>, title: String, origin: String) -> Self {
        Self {
            images,
            title,
            is_top: true,
            origin,
        }
    }

    /// The result reported when fetching or parsing the page failed
    pub fn empty() -> Self {
        Self::new(Vec::new(), String::new(), String::new())
    }
}
