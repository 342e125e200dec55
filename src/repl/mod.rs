mod release;
pub use release::*;

mod headless;
pub use headless::*;

#[cfg(feature = "repl")]
mod core;
#[cfg(feature = "repl")]
pub use core::*;

#[cfg(feature = "repl")]
pub mod highlight;

#[cfg(feature = "repl")]
pub mod prompt;

#[cfg(feature = "repl")]
pub mod validator;
