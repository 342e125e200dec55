use thiserror::Error;

use crate::lang::Rule;

#[macro_export]
macro_rules! internal_err {
    () => {
        $crate::error::Error::Internal {
            message: None,
            file: std::file!(),
            line: std::line!(),
        }
    };
    ( $x:expr ) => {
        $crate::error::Error::Internal {
            message: Some($x.to_string()),
            file: std::file!(),
            line: std::line!(),
        }
    };
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    // vector errors
    #[error("vector sizes differ ({lhs} != {rhs})")]
    SizeMismatch { lhs: usize, rhs: usize },

    #[error("index {index} is out of range for a vector of size {size}")]
    IndexOutOfRange { index: usize, size: usize },

    #[error("slice of length {length} starting at {start} exceeds a vector of size {size}")]
    InvalidSlice {
        start: usize,
        length: usize,
        size: usize,
    },

    // evaluation errors
    #[error("object '{0}' not found")]
    VariableNotFound(String),

    #[error("could not find function '{0}'")]
    UnknownFunction(String),

    #[error("argument '{0}' is missing with no default")]
    ArgumentMissing(String),

    #[error("argument '{0}' is invalid")]
    ArgumentInvalid(String),

    #[error("non-conformable arguments: {0}")]
    NonConformable(String),

    // parsing errors
    #[error("{0}")]
    ParseFailure(Box<pest::error::Error<Rule>>),

    #[error("Parse failed. Found unexpected parsing rule '{0:?}'")]
    ParseUnexpected(Rule),

    // front end
    #[error("history unavailable: {0}")]
    History(String),

    #[error("i/o error: {0}")]
    Io(String),

    #[error("Internal Error ({file}:{line}){detail}", detail = detail(.message))]
    Internal {
        message: Option<String>,
        file: &'static str,
        line: u32,
    },
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

fn detail(message: &Option<String>) -> String {
    message.as_ref().map(|m| format!("\n{m}")).unwrap_or_default()
}

/// Size agreement between two vector operands
///
/// Fails with [Error::SizeMismatch] when `lhs` and `rhs` differ.
///
/// ```
/// use lazyvec::error::{check_size, Error};
///
/// assert!(check_size(3, 3).is_ok());
/// assert_eq!(check_size(3, 4), Err(Error::SizeMismatch { lhs: 3, rhs: 4 }));
/// ```
///
pub fn check_size(lhs: usize, rhs: usize) -> Result<()> {
    if lhs == rhs {
        Ok(())
    } else {
        Err(Error::SizeMismatch { lhs, rhs })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn messages() {
        let e = Error::InvalidSlice { start: 0, length: 4, size: 3 };
        assert_eq!(
            e.to_string(),
            "slice of length 4 starting at 0 exceeds a vector of size 3"
        );

        let e = internal_err!("missing token");
        assert!(e.to_string().starts_with("Internal Error (src/error.rs:"));
        assert!(e.to_string().ends_with("\nmissing token"));
    }
}
