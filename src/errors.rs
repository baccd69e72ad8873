// errors.rs
use astra::Response;
use thiserror::Error;

/// Message shown for server-class failures whose cause stays in the logs.
pub const GENERIC_MESSAGE: &str = "Something Went Wrong!";

/// Errors originating from either the server logic
/// (routing, validation, missing records) or downstream layers (DB).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("{0}")]
    Validation(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(&'static str),

    #[error("Page Not Found!")]
    RouteNotFound,

    #[error("Cast to ObjectId failed for value \"{0}\" (type string) at path \"_id\" for model \"Listing\"")]
    InvalidId(String),

    #[error("Database Error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Internal Error: {0}")]
    Internal(String),
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::Validation(_) | ServerError::BadRequest(_) => 400,
            ServerError::NotFound(_) | ServerError::RouteNotFound => 404,
            ServerError::InvalidId(_) | ServerError::Db(_) | ServerError::Internal(_) => 500,
        }
    }

    /// What the error page shows. Store and internal failures are not
    /// echoed back to the client.
    pub fn public_message(&self) -> String {
        match self {
            ServerError::Db(_) | ServerError::Internal(_) => GENERIC_MESSAGE.to_string(),
            other => {
                let msg = other.to_string();
                if msg.is_empty() {
                    GENERIC_MESSAGE.to_string()
                } else {
                    msg
                }
            }
        }
    }
}
