//! # Primext
//!
//! Extension utilities layered onto built-in primitives.
//!
//! The two larger pieces are a configurable sequence joiner and a
//! line-reactive process piper that answers child-process output with
//! canned responses (a tiny `expect`).
//!
//! ## Features
//!
//! - Joining any iterable into a [`core::fmt::Write`] sink with prefix, suffix,
//!   a distinct last separator, a limit and a truncation marker
//! - Scanning child-process output line by line against regex triggers and
//!   writing responses back to its stdin (blocking or on tokio)
//! - Small helpers for strings, `Vec`-as-stack, integers, paths and
//!   conditional transformation
//!
//! ## Quick Start
//!
//! ```rust
//! use primext::{JoinOptions, Joinable};
//!
//! let options = JoinOptions::new().last_separator(" and ");
//! assert_eq!([1, 2, 3].iter().join_to_string(&options), "1, 2 and 3");
//! ```
//!
//! ```rust,no_run
//! use std::process::{Command, Stdio};
//! use primext::process::{react_to_child, TriggerTable};
//!
//! # fn main() -> Result<(), primext::Error> {
//! let triggers = TriggerTable::new()
//!     .on(r"Continue\? \[y/N\]", "y\n")?
//!     .on(r"[Pp]assword:", "hunter2\n")?;
//!
//! let mut child = Command::new("./installer.sh")
//!     .stdin(Stdio::piped())
//!     .stdout(Stdio::piped())
//!     .spawn()?;
//!
//! let report = react_to_child(&mut child, &triggers)?;
//! println!("answered {} prompts", report.responses);
//! # Ok(())
//! # }
//! ```

pub mod diag;
pub mod error;
pub mod fs;
pub mod join;
pub mod number;
pub mod process;
pub mod scope;
pub mod stack;
pub mod text;

// Re-export main types for convenience
pub use error::Error;
pub use join::{JoinOptions, Joinable};
pub use process::{Reactor, ReactorConfig, ReactorReport, TriggerTable};
