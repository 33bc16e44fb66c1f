use async_trait::async_trait;
use crate::core::circulation::CirculationError;

#[derive(Debug)]
pub enum CommandError {
    Http {
        message: String,
        status: Option<u16>,
        retryable: bool,
    },
    NotFound {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<CirculationError> for CommandError {
    fn from(other: CirculationError) -> Self {
        match other {
            CirculationError::Http { message, status, retryable } => {
                CommandError::Http { message, status, retryable }
            }
            CirculationError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            CirculationError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            CirculationError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            CirculationError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code }
            }
        }
    }
}
