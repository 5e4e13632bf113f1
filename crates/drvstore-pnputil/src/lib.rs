//! Enumeration output parsing for drvstore.
//!
//! The native driver tool prints one block of `label : value` lines per
//! staged package, with labels in the console locale's language. This crate
//! implements [`DriverListParserPort`](drvstore_core::ports::DriverListParserPort)
//! for that format without ever comparing label text, so the same parser
//! handles English, Chinese, Russian, and any other locale that keeps the
//! tool's structural conventions.

#![deny(unused_crate_dependencies)]

mod parser;

pub use parser::EnumOutputParser;
