use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type Result<T, E = PhotoError> = std::result::Result<T, E>;

/// Every failure the photo pipeline can surface. `Display` is the bare
/// message so the grid can show it to the user as-is.
#[derive(Error, Debug)]
pub enum PhotoError {
    /// Connectivity, timeout or body read failure.
    #[error("{message}")]
    Network {
        message: String,
        #[source]
        cause: Option<BoxError>,
    },

    /// Response did not have the expected shape.
    #[error("{message}")]
    Parse {
        message: String,
        #[source]
        cause: Option<BoxError>,
    },

    /// Remote signalled failure, either via HTTP status or a `stat: fail` envelope.
    #[error("{message}")]
    Server { code: i32, message: String },

    /// Bad user input, raised by the grid before any request is made.
    #[error("{message}")]
    Validation { message: String },

    #[error("{message}")]
    Unknown {
        message: String,
        #[source]
        cause: Option<BoxError>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Parse,
    Server,
    Validation,
    Unknown,
}

impl PhotoError {
    pub fn network(message: impl Into<String>) -> Self {
        PhotoError::Network { message: message.into(), cause: None }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        PhotoError::Parse { message: message.into(), cause: None }
    }

    pub fn server(code: i32, message: impl Into<String>) -> Self {
        PhotoError::Server { code, message: message.into() }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        PhotoError::Validation { message: message.into() }
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        PhotoError::Unknown { message: message.into(), cause: None }
    }

    /// Attach an underlying error. Variants without a cause slot are returned unchanged.
    pub fn with_cause<E>(self, err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            PhotoError::Network { message, .. } => PhotoError::Network { message, cause: Some(Box::new(err)) },
            PhotoError::Parse { message, .. } => PhotoError::Parse { message, cause: Some(Box::new(err)) },
            PhotoError::Unknown { message, .. } => PhotoError::Unknown { message, cause: Some(Box::new(err)) },
            other => other,
        }
    }

    /// Prefix the message with what was being attempted, keeping variant, code and cause.
    pub fn context(self, ctx: &str) -> Self {
        let prefixed = |message: String| format!("{}: {}", ctx, message);
        match self {
            PhotoError::Network { message, cause } => PhotoError::Network { message: prefixed(message), cause },
            PhotoError::Parse { message, cause } => PhotoError::Parse { message: prefixed(message), cause },
            PhotoError::Server { code, message } => PhotoError::Server { code, message: prefixed(message) },
            PhotoError::Validation { message } => PhotoError::Validation { message: prefixed(message) },
            PhotoError::Unknown { message, cause } => PhotoError::Unknown { message: prefixed(message), cause },
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            PhotoError::Network { .. } => ErrorKind::Network,
            PhotoError::Parse { .. } => ErrorKind::Parse,
            PhotoError::Server { .. } => ErrorKind::Server,
            PhotoError::Validation { .. } => ErrorKind::Validation,
            PhotoError::Unknown { .. } => ErrorKind::Unknown,
        }
    }

    pub fn code(&self) -> Option<i32> {
        match self {
            PhotoError::Server { code, .. } => Some(*code),
            _ => None,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            PhotoError::Network { message, .. }
            | PhotoError::Parse { message, .. }
            | PhotoError::Server { message, .. }
            | PhotoError::Validation { message }
            | PhotoError::Unknown { message, .. } => message,
        }
    }
}

impl From<reqwest::Error> for PhotoError {
    fn from(e: reqwest::Error) -> Self {
        // The request URL carries the API key.
        let e = e.without_url();
        if let Some(status) = e.status() {
            return PhotoError::server(status.as_u16() as i32, format!("HTTP {}", status));
        }
        if e.is_decode() {
            return PhotoError::parse(format!("invalid response body: {}", e)).with_cause(e);
        }
        if e.is_builder() {
            return PhotoError::unknown(format!("invalid request: {}", e)).with_cause(e);
        }
        PhotoError::network(e.to_string()).with_cause(e)
    }
}

impl From<serde_json::Error> for PhotoError {
    fn from(e: serde_json::Error) -> Self {
        PhotoError::parse(e.to_string()).with_cause(e)
    }
}
