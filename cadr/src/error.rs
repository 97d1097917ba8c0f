use crate::SymbolId;
use serde::{Deserialize, Serialize};

/// Errors produced while evaluating expressions.
/// These are carried as [crate::Val::Error] values rather than aborting evaluation.
#[derive(thiserror::Error, Debug, PartialEq, Clone, Serialize, Deserialize)]
pub enum Error {
    /// Free-form error created by host code
    #[error("{0}")]
    Message(String),

    #[error("Malformed arguments - {0}")]
    MalformedArguments(String),

    #[error("Not a symbol - {0}")]
    NotASymbol(String),

    #[error("Unexpected type - {0}")]
    UnexpectedType(String),

    #[error("Overflow - {0}")]
    Overflow(String),

    #[error("Error evaluating value for {0}")]
    SetValue(SymbolId),

    #[error("COND: Malformed clause list - expected cons cell")]
    CondClauseList,

    #[error("COND: Each clause must be a cons cell with a condition and result")]
    CondClause,

    #[error("COND: Missing condition in clause")]
    CondMissingCondition,

    #[error("COND: Missing or malformed result in clause")]
    CondMissingResult,

    #[error("COND: Error evaluating result")]
    CondResult,
}
