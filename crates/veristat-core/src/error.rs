use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReportError>;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(
        "invalid DSN. Cross verify the VERISTAT_DSN value against the repository settings page"
    )]
    MalformedDsn,

    #[error("DSN scheme must start with http(s), got '{0}'")]
    UnsupportedScheme(String),

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("undecodable server response: {0}")]
    Undecodable(String),

    #[error("reporting failed | {0}")]
    Remote(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl ReportError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::MalformedDsn => "MALFORMED_DSN",
            Self::UnsupportedScheme(_) => "UNSUPPORTED_SCHEME",
            Self::Status(_) => "HTTP_STATUS",
            Self::Undecodable(_) => "UNDECODABLE_RESPONSE",
            Self::Remote(_) => "REMOTE_ERROR",
            Self::Io(_) => "IO_ERROR",
            Self::Json(_) => "JSON_ERROR",
            Self::Http(_) => "HTTP_ERROR",
        }
    }
}
