//! Command modules for the somt CLI.
//!
//! Each subcommand lives in its own file and implements
//! [`traits::Command`].

pub mod common;
pub mod traits;

pub mod check;
pub mod lex;

pub use check::{run_check, CheckArgs};
pub use lex::{run_lex, LexArgs};
