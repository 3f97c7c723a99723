use crate::error::Result;
use crate::results::PageResult;
use std::fmt;
use std::path::Path;

/// Plain text summary of a page result
pub struct Report<'a> {
    result: &'a PageResult,
}

impl<'a> Report<'a> {
    pub fn new(result: &'a PageResult) -> Self {
        Self { result }
    }

    /// The report as printed to the terminal
    pub fn terminal(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = self.write_lines(&mut out, "Number of Unique Images Found");
        out
    }

    /// Writes the report to `path`, replacing any existing file
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_string())?;
        Ok(())
    }

    fn write_lines(&self, f: &mut impl fmt::Write, count_label: &str) -> fmt::Result {
        writeln!(f, "Page Title: {}", self.result.title)?;
        writeln!(f, "Origin: {}", self.result.origin)?;
        writeln!(f, "{}: {}", count_label, self.result.images.len())?;
        writeln!(f)?;
        writeln!(f, "Image URLs:")?;
        for url in &self.result.images {
            writeln!(f, "{}", url)?;
        }
        Ok(())
    }
}

/// The report file layout
impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_lines(f, "Number of Images")
    }
}
