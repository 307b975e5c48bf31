extern crate thiserror;

use thiserror::Error;

/// Alignment error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AlignError {
    /// Tokens whose text occurs nowhere in the target text, in input order.
    #[error("tokens not found in text: {}", .tokens.join(", "))]
    Unresolved { tokens: Vec<String> },
}

impl AlignError {
    #[inline]
    pub fn unresolved(&self) -> &[String] {
        match self {
            AlignError::Unresolved { tokens } => tokens,
        }
    }
}
