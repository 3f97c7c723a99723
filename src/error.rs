use thiserror::Error;

/// Errors raised while fetching a page or preparing a run
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid url '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("WebDriver command failed: {0}")]
    Command(#[from] fantoccini::error::CmdError),

    #[error("no WebDriver server reachable (tried {0})")]
    NoWebDriver(String),

    #[error("unexpected shadow DOM payload: {0}")]
    ShadowPayload(#[source] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(#[source] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
