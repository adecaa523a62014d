use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Not configured. Install a scenario configuration first.")]
    NotConfigured,

    #[error("Invalid parameter {name}: {value}")]
    InvalidParam { name: &'static str, value: String },

    #[error("Invalid fixture {path} at line {line}: {source}")]
    FixtureParse {
        path: String,
        line: usize,
        source: serde_json::Error,
    },

    #[error("Simulated 429 for rate_limit at request {request}")]
    RateLimited { request: u64 },

    #[error("Simulated 500 for server_error at request {request}")]
    ServerFault { request: u64 },

    #[error("Fixture I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SimError {
    /// The HTTP status a transport sitting in front of the engine
    /// would emit for this error. The core itself knows nothing
    /// about HTTP beyond this mapping.
    pub fn status(&self) -> u16 {
        match self {
            Self::NotConfigured => 400,
            Self::InvalidParam { .. } => 422,
            Self::RateLimited { .. } => 429,
            Self::ServerFault { .. }
            | Self::FixtureParse { .. }
            | Self::Io(_)
            | Self::Serialization(_) => 500,
        }
    }

    /// Simulated transient faults are the only errors the client
    /// under test is expected to retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::RateLimited { .. } | Self::ServerFault { .. })
    }
}

pub type SimResult<T> = Result<T, SimError>;
