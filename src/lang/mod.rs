//! Expression Language
//!
//! A small calculator language over numeric vectors. Source text is parsed
//! into [Statement]s, and a [Session] evaluates each expression into a lazy
//! tree of vector expression nodes. Nothing is computed until a statement is
//! assigned to a name or its value is requested.
//!
//! ```
//! use lazyvec::lang::{Materialized, Session};
//!
//! let mut session = Session::default();
//! session.run("x <- c(1, 2, 3)")?;
//! assert_eq!(session.run("x[1] * 10")?, Some(Materialized::Scalar(20.)));
//! # Ok::<(), lazyvec::error::Error>(())
//! ```
//!

mod ast;
pub use ast::*;

mod builtins;
pub use builtins::Builtin;

mod parser;
pub use parser::{is_incomplete, parse, parse_highlight, LangParser, Rule};

mod session;
pub use session::*;

mod style;
pub use style::Style;
