use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, HoroLongError>;

#[derive(Error, Debug)]
pub enum HoroLongError {
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server answered with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Unable to (de)serialize JSON payload: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid date range: {0}")]
    InvalidRange(String),

    #[error("Invalid time zone: {0}, expected a value within [-12, 12]")]
    InvalidTimeZone(f64),

    #[error("Unknown body: {0}, expected one of sun, moon, new_moon")]
    UnknownBody(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Unable to write CSV output: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unable to perform I/O operation: {0}")]
    IoError(#[from] std::io::Error),
}

impl HoroLongError {
    /// HTTP status reported by the server, if this error came from a non-success answer.
    pub fn status(&self) -> Option<u16> {
        match self {
            HoroLongError::Status { status, .. } => Some(*status),
            HoroLongError::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl PartialEq for HoroLongError {
    fn eq(&self, other: &Self) -> bool {
        use HoroLongError::*;
        match (self, other) {
            (
                Status {
                    status: s1,
                    body: b1,
                },
                Status {
                    status: s2,
                    body: b2,
                },
            ) => s1 == s2 && b1 == b2,
            (InvalidUrl(a), InvalidUrl(b)) => a == b,
            (InvalidDate(a), InvalidDate(b)) => a == b,
            (InvalidRange(a), InvalidRange(b)) => a == b,
            (InvalidTimeZone(a), InvalidTimeZone(b)) => a == b,
            (UnknownBody(a), UnknownBody(b)) => a == b,
            (Config(a), Config(b)) => a == b,

            // not comparable: same variant is enough
            (Transport(_), Transport(_)) => true,
            (Deserialize(_), Deserialize(_)) => true,
            (Csv(_), Csv(_)) => true,
            (IoError(_), IoError(_)) => true,

            _ => false,
        }
    }
}
