use clap::Parser;
use page_images::report::Report;
use page_images::{Images, download, fetchers, prompt};
use std::io;

mod args;
use args::Args;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    let config = match args.load_config() {
        Ok(config) => config,
        Err(e) => {
            ::log::error!("Failed to load configuration: {}", e);
            return;
        }
    };

    let uri = match &args.uri {
        Some(uri) => uri.clone(),
        None => match prompt::read_url(io::stdin().lock(), io::stdout(), &config.default_url) {
            Ok(uri) => uri,
            Err(e) => {
                ::log::error!("Failed to read URL: {}", e);
                return;
            }
        },
    };

    ::log::info!("Extracting images from: {}", uri);
    if args.browser {
        println!("Note: browser rendering requires a WebDriver server (e.g., ChromeDriver).");
        println!(
            "Set WEBDRIVER_URL environment variable if not using {}",
            config.webdriver_url
        );
    }

    let result = Images::new(&uri)
        .with_browser(args.browser)
        .with_config(config.clone())
        .generate()
        .await;

    let report = Report::new(&result);
    println!("\nResults:");
    print!("{}", report.terminal());

    if !result.images.is_empty() {
        println!("\nDownloading up to {} images...", config.max_downloads);
        match fetchers::http::build_client(&config.user_agent) {
            Ok(client) => {
                match download::download_images(
                    &client,
                    &result.images,
                    &config.download_dir,
                    config.max_downloads,
                )
                .await
                {
                    Ok(saved) => println!(
                        "Downloaded {} images into '{}'.",
                        saved.len(),
                        config.download_dir.display()
                    ),
                    Err(e) => ::log::error!("Failed to download images: {}", e),
                }
            }
            Err(e) => ::log::error!("Failed to create HTTP client: {}", e),
        }
    }

    match report.write_to(&config.report_path) {
        Ok(()) => println!("\nResults saved to '{}'.", config.report_path.display()),
        Err(e) => ::log::error!("Failed to write report: {}", e),
    }
}
