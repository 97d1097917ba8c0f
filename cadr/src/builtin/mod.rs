//! Builtin special forms and primitives
pub mod cond;
pub mod list;
pub mod math;
pub mod special;

pub use cond::eq;
pub use cond::is_truthy;

use crate::{Error, Result, Val};

/// Argument forms of `form` as a vector. Improper argument lists are malformed.
pub(crate) fn arg_forms(form: &str, args: &Val) -> Result<Vec<Val>> {
    args.to_vec().ok_or_else(|| {
        Error::MalformedArguments(format!(
            "{form} expects a proper argument list - got {args}"
        ))
    })
}
