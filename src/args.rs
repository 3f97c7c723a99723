use clap::Parser;
use page_images::Result;
use page_images::config::ExtractorConfig;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "page-images")]
#[command(about = "Finds, reports and samples the images referenced by a web page")]
#[command(version)]
pub struct Args {
    /// Page URL (prompted for when omitted)
    pub uri: Option<String>,

    /// Render the page in a headless browser through WebDriver; also scans shadow DOM
    #[arg(short, long)]
    pub browser: bool,

    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Maximum number of images to download
    #[arg(long)]
    pub max_downloads: Option<usize>,

    /// Folder for downloaded images
    #[arg(long)]
    pub download_dir: Option<PathBuf>,

    /// Path of the text report
    #[arg(long)]
    pub report: Option<PathBuf>,
}

impl Args {
    /// Builds the run configuration: file (or defaults), then environment, then flags
    pub fn load_config(&self) -> Result<ExtractorConfig> {
        let mut config = match &self.config {
            Some(path) => ExtractorConfig::from_file(path)?,
            None => ExtractorConfig::default(),
        }
        .with_env_overrides();

        if let Some(max_downloads) = self.max_downloads {
            config.max_downloads = max_downloads;
        }
        if let Some(dir) = &self.download_dir {
            config.download_dir = dir.clone();
        }
        if let Some(report) = &self.report {
            config.report_path = report.clone();
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let args = Args::parse_from([
            "page-images",
            "https://example.com",
            "--browser",
            "--max-downloads",
            "3",
            "--report",
            "out.txt",
        ]);
        assert_eq!(args.uri.as_deref(), Some("https://example.com"));
        assert!(args.browser);

        let config = args.load_config().unwrap();
        assert_eq!(config.max_downloads, 3);
        assert_eq!(config.report_path, PathBuf::from("out.txt"));
        assert_eq!(config.download_dir, PathBuf::from("downloaded_images"));
    }

    #[test]
    fn test_uri_is_optional() {
        let args = Args::parse_from(["page-images"]);
        assert!(args.uri.is_none());
        assert!(!args.browser);
    }
}
