use crate::extractors::{has_image_extension, resolve};
use crate::results::{ImageKind, ImageRecord};
use scraper::{Html, Selector};
use url::Url;

/// `<img>` elements, using `src` or the `currentsrc` fallback
pub fn img_sources(doc: &Html, base: &Url) -> Vec<ImageRecord> {
    let selector = Selector::parse("img").unwrap();
    doc.select(&selector)
        .filter_map(|img| {
            let element = img.value();
            // html5ever lowercases attribute names, so `currentSrc` arrives as `currentsrc`
            let src = non_empty(element.attr("src"))
                .or_else(|| non_empty(element.attr("currentsrc")))?;
            let source = resolve(base, src)?;
            Some(ImageRecord::with_size(
                ImageKind::Img,
                source,
                dimension(element.attr("width")),
                dimension(element.attr("height")),
            ))
        })
        .collect()
}

/// First `srcset` candidate of every `<source>` element
pub fn picture_sources(doc: &Html, base: &Url) -> Vec<ImageRecord> {
    let selector = Selector::parse("source[srcset]").unwrap();
    doc.select(&selector)
        .filter_map(|source| source.value().attr("srcset"))
        .filter_map(|srcset| srcset_candidates(srcset).next())
        .filter_map(|candidate| resolve(base, candidate))
        .map(|src| ImageRecord::new(ImageKind::Img, src))
        .collect()
}

/// Every `srcset` candidate of every `<img>` element
pub fn img_srcsets(doc: &Html, base: &Url) -> Vec<ImageRecord> {
    let selector = Selector::parse("img[srcset]").unwrap();
    doc.select(&selector)
        .filter_map(|img| img.value().attr("srcset"))
        .flat_map(srcset_candidates)
        .filter_map(|candidate| resolve(base, candidate))
        .map(|src| ImageRecord::new(ImageKind::Img, src))
        .collect()
}

/// `<input type="image">` elements
pub fn image_inputs(doc: &Html, base: &Url) -> Vec<ImageRecord> {
    let selector = Selector::parse(r#"input[type="image"]"#).unwrap();
    doc.select(&selector)
        .filter_map(|input| non_empty(input.value().attr("src")))
        .filter_map(|src| resolve(base, src))
        .map(|src| ImageRecord::new(ImageKind::InputImage, src))
        .collect()
}

/// Anchors whose `href` names an image file
pub fn image_links(doc: &Html, base: &Url) -> Vec<ImageRecord> {
    let selector = Selector::parse("a[href]").unwrap();
    doc.select(&selector)
        .filter_map(|link| link.value().attr("href"))
        .filter(|href| has_image_extension(href))
        .filter_map(|href| resolve(base, href))
        .map(|src| ImageRecord::new(ImageKind::Link, src))
        .collect()
}

/// URLs of a `srcset` value, with width and density descriptors dropped
///
/// Candidates are split on commas, so a data URL inside a `srcset` is cut
/// short.
pub fn srcset_candidates(srcset: &str) -> impl Iterator<Item = &str> {
    srcset
        .split(',')
        .filter_map(|candidate| candidate.split_whitespace().next())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn dimension(value: Option<&str>) -> u32 {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(0)
}
