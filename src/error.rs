use failure_derive::Fail;

use crate::operation::Operation;

#[derive(Debug, Fail)]
pub enum OtError {
    // lengths of the text or of the two operations do not line up
    #[fail(display = "incompatible lengths: expected {}, found {}", expected, found)]
    IncompatibleLengths { expected: usize, found: usize },

    // a wire element that is neither a number nor a string
    #[fail(display = "invalid operation element: {}", _0)]
    InvalidElement(String),

    // a count that cannot be represented on the wire or in the sequence lengths
    #[fail(display = "count {} is out of range", count)]
    CountOutOfRange { count: String },

    #[fail(display = "malformed operation payload: {}", _0)]
    Json(#[cause] serde_json::Error),
}

impl From<serde_json::Error> for OtError {
    fn from(error: serde_json::Error) -> Self {
        OtError::Json(error)
    }
}

pub type Result<T> = std::result::Result<T, OtError>;

// checks the precondition shared by apply, invert, compose and transform
pub(crate) fn check_len(expected: usize, found: usize) -> Result<()> {
    if expected == found {
        Ok(())
    } else {
        tracing::debug!(expected, found, "length mismatch");
        Err(OtError::IncompatibleLengths { expected, found })
    }
}

// one side ran out while the other still had input to consume
pub(crate) fn exhausted(op: &Operation) -> OtError {
    let found = op.base_len().max(op.target_len());
    tracing::debug!(?op, "operand exhausted early");
    OtError::IncompatibleLengths { expected: 0, found }
}

pub(crate) fn out_of_range<T: ToString>(count: T) -> OtError {
    let count = count.to_string();
    tracing::debug!(%count, "count out of range");
    OtError::CountOutOfRange { count }
}
