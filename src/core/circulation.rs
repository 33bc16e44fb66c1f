use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum CirculationError {
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

impl CirculationError {
    pub fn http(message: &str, status: Option<u16>, retryable: bool) -> CirculationError {
        CirculationError::Http { message: message.to_string(), status, retryable }
    }

    pub fn not_found(message: &str) -> CirculationError {
        CirculationError::NotFound { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> CirculationError {
        CirculationError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> CirculationError {
        CirculationError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> CirculationError {
        CirculationError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn from_status(message: &str, status: u16) -> CirculationError {
        if status == 404 {
            CirculationError::not_found(
                format!("not found error {:?} {:?}", message, status).as_str())
        } else if status == 400 {
            CirculationError::validation(
                format!("bad request error {:?} {:?}", message, status).as_str(),
                Some(status.to_string()))
        } else {
            CirculationError::http(message, Some(status), status >= 500)
        }
    }

    pub fn retryable(&self) -> bool {
        match self {
            CirculationError::Http { retryable, .. } => { *retryable }
            CirculationError::NotFound { .. } => { false }
            CirculationError::Validation { .. } => { false }
            CirculationError::Serialization { .. } => { false }
            CirculationError::Runtime { .. } => { false }
        }
    }
}

impl From<reqwest::Error> for CirculationError {
    fn from(err: reqwest::Error) -> Self {
        let status = err.status().map(|s| s.as_u16());
        if err.is_timeout() || err.is_connect() {
            CirculationError::http(
                format!("http transport {:?}", err).as_str(), status, true)
        } else {
            CirculationError::http(
                format!("http request {:?}", err).as_str(), status, false)
        }
    }
}

impl From<serde_json::Error> for CirculationError {
    fn from(err: serde_json::Error) -> Self {
        CirculationError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl From<String> for CirculationError {
    fn from(err: String) -> Self {
        CirculationError::serialization(
            format!("serde parsing {:?}", err).as_str())
    }
}

impl Display for CirculationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CirculationError::Http { message, status, retryable } => {
                write!(f, "{} {:?} {}", message, status, retryable)
            }
            CirculationError::NotFound { message } => {
                write!(f, "{}", message)
            }
            CirculationError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            CirculationError::Serialization { message } => {
                write!(f, "{}", message)
            }
            CirculationError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

/// A specialized Result type for gateway and store operations.
pub type CirculationResult<T> = Result<T, CirculationError>;

// Outcome of a dry-run validation for a single action on a single record.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum ActionOutcome {
    Unknown,
    Allowed,
    Denied,
}

impl ActionOutcome {
    pub fn score(&self) -> i8 {
        match self {
            ActionOutcome::Unknown => 0,
            ActionOutcome::Allowed => 1,
            ActionOutcome::Denied => -1,
        }
    }
}

impl From<i8> for ActionOutcome {
    fn from(score: i8) -> Self {
        match score {
            1 => ActionOutcome::Allowed,
            -1 => ActionOutcome::Denied,
            _ => ActionOutcome::Unknown,
        }
    }
}

impl Display for ActionOutcome {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ActionOutcome::Unknown => write!(f, "Unknown"),
            ActionOutcome::Allowed => write!(f, "Allowed"),
            ActionOutcome::Denied => write!(f, "Denied"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Delivery {
    Mail,
    Pickup,
}

impl From<String> for Delivery {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "mail" => Delivery::Mail,
            "internal mail" => Delivery::Mail,
            _ => Delivery::Pickup,
        }
    }
}

impl Display for Delivery {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Delivery::Mail => write!(f, "mail"),
            Delivery::Pickup => write!(f, "pickup"),
        }
    }
}
