//! Japanese text tokenizer and deinflector.
//!
//! Normalizes raw input, walks it left to right, and at each position
//! deinflects candidate conjugations and looks them up against an in-memory
//! dictionary, emitting a stream of [japanese::Token]s that cover the input
//! exactly once.

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate serde_derive;
extern crate bitflags;
extern crate serde;
extern crate serde_json;
extern crate unicode_normalization;
extern crate unicase;
extern crate regex;
#[macro_use]
extern crate slog;
extern crate slog_scope;
extern crate slog_stdlog;
extern crate slog_term;

#[macro_use]
mod base;
mod config;
pub mod kana;
pub mod japanese;
mod util;

pub use config::Config;
pub use util::{Error, Result};
