/// Guess a file extension from the trailing URL segment
///
/// Takes the text after the last `.` and drops any query string. The guess is
/// naive: `https://example.com/img?id=3` yields `com/img`, which is then made
/// filename safe by [`sanitize_filename`].
pub fn guess_extension(url: &str) -> String {
    let last = url.rsplit('.').next().unwrap_or(url);
    let ext = last.split('?').next().unwrap_or(last);
    sanitize_filename(ext)
}

/// Convert a string to a sanitized filename
pub fn sanitize_filename(name: &str) -> String {
    let mut name = name.replace(['/', '\\', ':', '?', '&', '=', '#', '%', ';', ','], "_");

    // Limit filename length
    if name.len() > 100 {
        let mut end = 100;
        while !name.is_char_boundary(end) {
            end -= 1;
        }
        name.truncate(end);
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_extension() {
        assert_eq!(guess_extension("https://example.com/cat.jpg"), "jpg");
        assert_eq!(guess_extension("https://example.com/cat.png?w=200"), "png");
        assert_eq!(guess_extension("https://example.com/a.b/c.webp"), "webp");
    }

    #[test]
    fn test_guess_extension_without_dot_in_path() {
        assert_eq!(guess_extension("https://example.com/img?id=3"), "com_img");
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("a/b:c"), "a_b_c");
        assert_eq!(sanitize_filename(&"x".repeat(150)).len(), 100);
    }
}
