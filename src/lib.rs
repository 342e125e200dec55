#[macro_use]
extern crate pest_derive;

pub mod cli;
pub mod error;
pub mod lang;
pub mod repl;
pub mod vector;
