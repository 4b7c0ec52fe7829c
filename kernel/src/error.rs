use std::fmt::Display;

use error_stack::Context;

/// Failure kinds shared by every layer.
///
/// The human-readable explanation is carried by the surrounding
/// [`error_stack::Report`] as a printable attachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelError {
    /// A referenced id does not resolve to a stored record.
    NotFound,
    /// The vehicle is already under an active rental.
    Conflict,
    /// The record is in a state that forbids the operation.
    InvalidState,
    /// Malformed or semantically inconsistent input.
    InvalidInput,
    Timeout,
    Internal,
}

impl KernelError {
    pub fn kind(&self) -> &'static str {
        match self {
            KernelError::NotFound => "not_found",
            KernelError::Conflict => "conflict",
            KernelError::InvalidState => "invalid_state",
            KernelError::InvalidInput => "invalid_input",
            KernelError::Timeout => "timeout",
            KernelError::Internal => "internal",
        }
    }
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::NotFound => write!(f, "Referenced entity not found"),
            KernelError::Conflict => write!(f, "Vehicle is not available"),
            KernelError::InvalidState => write!(f, "Operation not allowed in current state"),
            KernelError::InvalidInput => write!(f, "Invalid input"),
            KernelError::Timeout => write!(f, "Process timed out"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}
