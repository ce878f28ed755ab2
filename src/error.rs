use thiserror::Error;

use crate::parse::ParseError;
use crate::{CompileError, EvaluateError};

/// Unified error type covering parsing, compilation, evaluation, and I/O.
///
/// Returned by convenience entry points like [`System::from_file()`](crate::System::from_file)
/// and [`solve()`](crate::solve).
#[derive(Debug, Error)]
pub enum PartflowError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error(transparent)]
    Evaluate(#[from] EvaluateError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
