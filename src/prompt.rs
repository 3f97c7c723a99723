use std::io::{self, BufRead, Write};

/// Asks for a page URL, returning `default_url` when the answer is blank
pub fn read_url<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    default_url: &str,
) -> io::Result<String> {
    write!(output, "Enter the webpage URL (e.g., {}): ", default_url)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    let url = line.trim();
    if url.is_empty() {
        Ok(default_url.to_string())
    } else {
        Ok(url.to_string())
    }
}
