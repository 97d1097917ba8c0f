mod error;
mod eval;
mod print;

pub mod builtin;
pub mod env;
pub mod types;

pub use builtin::eq;
pub use builtin::is_truthy;
pub use env::Env;
pub use error::Error;
pub use eval::eval;
pub use print::render;
pub use types::Closure;
pub use types::Pair;
pub use types::SymbolId;
pub use types::Val;
pub use types::TRUTH;

pub type Result<T> = std::result::Result<T, Error>;
