//! Output routines called by programs compiled from p0 source.
//!
//! The compiler declares each routine as an external function (see
//! [`decl::BUILTINS`]) and the linker resolves it against this crate's
//! static library. Every routine writes one value to stdout and never
//! reports failure to its caller.

pub mod decl;
mod error;
pub mod print;

pub use error::PrintError;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
