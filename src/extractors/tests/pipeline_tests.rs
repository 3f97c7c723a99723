use crate::error::Error;
use crate::extractors::shadow::{ShadowImage, shadow_images_or_empty};
use crate::extractors::{
    PASSES, dedup_sources, extract, extract_records, has_image_extension, origin,
};
use crate::results::{ImageKind, ImageRecord};
use scraper::Html;
use url::Url;

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://example.com/blog/post.html").unwrap()
    }

    #[test]
    fn test_distinct_imgs_in_document_order() {
        let html = r#"<html><head><title>Pets</title></head><body>
            <img src="one.png"><p>text</p><img src="/two.jpg">
            <div><img src="https://cdn.example.net/three.gif"></div>
        </body></html>"#;
        let result = extract(html, &base(), None);

        assert_eq!(
            result.images,
            vec![
                "https://example.com/blog/one.png",
                "https://example.com/two.jpg",
                "https://cdn.example.net/three.gif",
            ]
        );
        assert_eq!(result.title, "Pets");
        assert_eq!(result.origin, "https://example.com");
        assert!(result.is_top);
    }

    #[test]
    fn test_duplicates_across_passes_keep_first_position() {
        let html = r#"<body>
            <img src="/a.png">
            <a href="/b.png">b</a>
            <a href="/a.png">a again</a>
            <img src="/c.png">
            <div style="background: url(/b.png)"></div>
        </body>"#;
        let result = extract(html, &base(), None);

        // img pass runs before the anchor pass, so c.png precedes b.png
        assert_eq!(
            result.images,
            vec![
                "https://example.com/a.png",
                "https://example.com/c.png",
                "https://example.com/b.png",
            ]
        );
    }

    #[test]
    fn test_relative_sources_are_absolute() {
        let html = r#"<body>
            <img src="x.png" srcset="x2.png 2x">
            <picture><source srcset="y.webp"></picture>
            <input type="image" src="../btn.gif">
            <a href="z.JPG">z</a>
            <span style="background-image: url('bg/tile.png')"></span>
        </body>"#;
        let result = extract(html, &base(), None);

        assert_eq!(result.images.len(), 6);
        assert!(
            result
                .images
                .iter()
                .all(|src| src.starts_with("https://example.com/"))
        );
    }

    #[test]
    fn test_pass_order() {
        let html = r#"<body>
            <span style="background-image: url('style.png')"></span>
            <a href="anchor.png">a</a>
            <svg></svg>
            <input type="image" src="input.png">
            <img srcset="srcset.png 1x">
            <picture><source srcset="source.png"></picture>
            <img src="img.png">
            <p>https://example.org/text.png</p>
        </body>"#;
        let doc = Html::parse_document(html);
        let kinds: Vec<_> = extract_records(&doc, &base())
            .iter()
            .map(|r| r.kind)
            .collect();

        assert_eq!(
            kinds,
            vec![
                ImageKind::Img,
                ImageKind::Img,
                ImageKind::Img,
                ImageKind::InputImage,
                ImageKind::Link,
                ImageKind::DataUrl,
                ImageKind::Background,
                ImageKind::Link,
            ]
        );
        let names: Vec<_> = PASSES.iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            vec!["img", "source", "srcset", "input", "anchor", "svg", "style", "text"]
        );
    }

    #[test]
    fn test_identical_svgs_are_deduplicated() {
        let html = r#"<body><svg><rect></rect></svg><svg><rect></rect></svg></body>"#;
        let doc = Html::parse_document(html);
        assert_eq!(extract_records(&doc, &base()).len(), 2);

        let result = extract(html, &base(), None);
        assert_eq!(result.images.len(), 1);
        assert!(result.images[0].starts_with("data:image/svg+xml;base64,"));
    }

    #[test]
    fn test_shadow_images_come_last() {
        let html = r#"<body><img src="light.png"></body>"#;
        let shadow = vec![
            ShadowImage {
                src: "https://example.com/blog/light.png".to_string(),
                width: 1,
                height: 1,
            },
            ShadowImage {
                src: "dark.png".to_string(),
                width: 0,
                height: 0,
            },
        ];
        let result = extract(html, &base(), Some(&shadow));
        assert_eq!(
            result.images,
            vec![
                "https://example.com/blog/light.png",
                "https://example.com/blog/dark.png",
            ]
        );
    }

    #[test]
    fn test_failed_shadow_scan_keeps_document_images() {
        let html = r#"<body><img src="light.png"><a href="full.jpg">full</a></body>"#;

        let bad_payload = shadow_images_or_empty(Ok(serde_json::json!({"error": "detached"})));
        assert!(bad_payload.is_empty());
        let result = extract(html, &base(), Some(&bad_payload));
        assert_eq!(
            result.images,
            vec![
                "https://example.com/blog/light.png",
                "https://example.com/blog/full.jpg",
            ]
        );

        let script_error = Error::NoWebDriver("http://localhost:4444".to_string());
        let failed = shadow_images_or_empty(Err(script_error));
        assert_eq!(extract(html, &base(), Some(&failed)), result);
    }

    #[test]
    fn test_shadow_payload_is_decoded() {
        let images = shadow_images_or_empty(Ok(serde_json::json!([
            {"src": "dark.png", "width": 4, "height": 2}
        ])));
        let result = extract("<body></body>", &base(), Some(&images));
        assert_eq!(result.images, vec!["https://example.com/blog/dark.png"]);
    }

    #[test]
    fn test_empty_document() {
        let result = extract("", &base(), None);
        assert!(result.images.is_empty());
        assert_eq!(result.title, "");
        assert_eq!(result.origin, "https://example.com");
    }

    #[test]
    fn test_dedup_sources() {
        let records = vec![
            ImageRecord::new(ImageKind::Img, "a"),
            ImageRecord::new(ImageKind::Link, "b"),
            ImageRecord::new(ImageKind::Background, "a"),
            ImageRecord::new(ImageKind::Img, "c"),
            ImageRecord::new(ImageKind::Link, "b"),
        ];
        assert_eq!(dedup_sources(&records), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_has_image_extension() {
        assert!(has_image_extension("photo.PNG"));
        assert!(has_image_extension("https://x.org/a.pjp"));
        assert!(has_image_extension("icon.ico"));
        assert!(!has_image_extension("page.html"));
        assert!(!has_image_extension("image.png?size=2"));
    }

    #[test]
    fn test_origin() {
        let url = Url::parse("https://example.com:8443/a?b=c").unwrap();
        assert_eq!(origin(&url), "https://example.com:8443");

        let url = Url::parse("http://example.com:80/").unwrap();
        assert_eq!(origin(&url), "http://example.com");

        let url = Url::parse("https://user:pw@example.com:8443/x").unwrap();
        assert_eq!(origin(&url), "https://user:pw@example.com:8443");

        let url = Url::parse("https://user@example.com/x").unwrap();
        assert_eq!(origin(&url), "https://user@example.com");
    }
}
