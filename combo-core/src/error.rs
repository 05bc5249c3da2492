use thiserror::Error;

use crate::engine::Token;

#[derive(Error, Debug)]
pub enum Error {
    #[error("duplicate pattern: \"{duplicate}\" declares the same sequence as \"{existing}\"")]
    DuplicatePattern { existing: String, duplicate: String },

    #[error("empty pattern: \"{0}\" declares no tokens")]
    EmptyPattern(String),

    #[error("pattern \"{id}\" declares {overrides} step overrides for {steps} steps")]
    StepOverrideMismatch {
        id: String,
        steps: usize,
        overrides: usize,
    },

    #[error("out-of-order input: {token} at {timestamp}s is earlier than the last buffered input at {last}s")]
    OutOfOrderInput {
        token: Token,
        timestamp: f64,
        last: f64,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
