use std::fmt;
use std::fmt::{Display, Formatter};
use std::num::ParseIntError;

#[derive(Debug)]
pub enum CommandError {
    // Raw console input could not be turned into a request, e.g. a year that
    // is not a base-10 integer. The console loop does not recover from it.
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    EndOfInput {
        message: String,
    },
    Io {
        message: String,
    },
    Serialization {
        message: String,
    },
}

impl CommandError {
    pub fn validation(message: &str, reason_code: Option<String>) -> CommandError {
        CommandError::Validation { message: message.to_string(), reason_code }
    }

    pub fn end_of_input(message: &str) -> CommandError {
        CommandError::EndOfInput { message: message.to_string() }
    }

    pub fn io(message: &str) -> CommandError {
        CommandError::Io { message: message.to_string() }
    }

    pub fn serialization(message: &str) -> CommandError {
        CommandError::Serialization { message: message.to_string() }
    }
}

/// A specialized Result type for commands and the console loop.
pub type CommandResult<T> = Result<T, CommandError>;

pub trait Command<Request, Response> {
    fn execute(&self, req: Request) -> CommandResult<Response>;
}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::io(format!("console io {:?}", err).as_str())
    }
}

impl From<ParseIntError> for CommandError {
    fn from(err: ParseIntError) -> Self {
        CommandError::validation(
            format!("integer parsing {}", err).as_str(), Some(format!("{:?}", err.kind())))
    }
}

impl From<serde_json::Error> for CommandError {
    fn from(err: serde_json::Error) -> Self {
        CommandError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            CommandError::EndOfInput { message } => {
                write!(f, "{}", message)
            }
            CommandError::Io { message } => {
                write!(f, "{}", message)
            }
            CommandError::Serialization { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

impl std::error::Error for CommandError {}
