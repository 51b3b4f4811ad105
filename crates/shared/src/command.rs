#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),

    #[error("transport: {0}")]
    Transport(String),

    #[error("notification: {0}")]
    Notification(String),

    #[error("{0}")]
    Unknown(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::Unknown(value.into())
    }
}

impl From<time::error::Format> for Error {
    fn from(value: time::error::Format) -> Self {
        Self::Unknown(value.into())
    }
}

#[macro_export]
macro_rules! transport {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::Transport(format!($msg)))
    };
    ($err:expr $(,)?) => {
        return Err($crate::Error::Transport(format!($err)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::Transport(format!($fmt, $($arg)*)))
    };
}
