use thiserror::Error;

/// Failure writing into the rendering surface.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("no element matches `{0}`")]
    MissingTarget(String),
    #[error("no document is available to render into")]
    NoDocument,
    #[error("failed to update `{selector}`: {message}")]
    Dom { selector: String, message: String },
}

/// Failure of a single section population routine.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("section `{0}` is missing from the site configuration")]
    MissingSection(&'static str),
    #[error("section `{key}` is malformed: {source}")]
    InvalidSection {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

/// Failure fetching or parsing the configuration document.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: gloo_net::Error,
    },
    #[error("fetching {url} returned status {status}")]
    Status { url: String, status: u16 },
    #[error("failed to read the body of {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: gloo_net::Error,
    },
    #[error("configuration document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
