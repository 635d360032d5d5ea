use thiserror::Error;

use crate::consts::Game;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HakushinError {
    /// Upstream API responded with 404
    #[error("404: The requested resource was not found. ({url})")]
    NotFound {
        url: String
    },

    /// Any other non-success status code
    #[error("{status}: An error occurred while fetching data. ({url})")]
    Status {
        status: u16,
        url: String
    },

    /// reqwest error
    #[error("reqwest error: {0}")]
    Reqwest(String),

    /// Response body doesn't match the expected schema
    #[error("Failed to decode response from {url}: {message}")]
    Decode {
        url: String,
        message: String
    },

    #[error("IO error: {0}")]
    Io(String),

    #[error("Invalid request header: {0}")]
    InvalidHeader(String),

    /// Crate was built without this game's feature
    #[error("Support of the game {0} is not enabled")]
    UnsupportedGame(Game)
}

impl HakushinError {
    /// HTTP status code of the failed request, if there was one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(404),
            Self::Status { status, .. } => Some(*status),

            _ => None
        }
    }

    #[inline]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Build error from the response status
    pub(crate) fn from_status(status: u16, url: impl ToString) -> Self {
        match status {
            404 => Self::NotFound { url: url.to_string() },

            _ => Self::Status {
                status,
                url: url.to_string()
            }
        }
    }
}

impl From<reqwest::Error> for HakushinError {
    #[inline(always)]
    fn from(error: reqwest::Error) -> Self {
        Self::Reqwest(error.to_string())
    }
}

impl From<std::io::Error> for HakushinError {
    #[inline(always)]
    fn from(value: std::io::Error) -> Self {
        Self::Io(value.to_string())
    }
}
