pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("request to {url} returned {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("failed to inflate gzip response: {0}")]
    Gzip(#[source] std::io::Error),
    #[error("unexpected {endpoint} response: {source}")]
    UnexpectedSchema {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("problem {0} does not exist")]
    ProblemNotFound(String),
    #[error("problem {0} is premium only")]
    PaidOnly(String),
    #[error("problem {slug} has no {language} code template")]
    LanguageUnavailable { slug: String, language: String },
    #[error("no problem with id {0}")]
    UnknownProblemId(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("{0}")]
    Usage(String),
}

impl Error {
    /// Transport failures and error statuses are worth another attempt,
    /// everything else fails the same way twice.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Transport { .. } | Error::Status { .. })
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Transport { source, .. } if source.is_timeout())
    }
}
