//! Line-reactive piping of child-process output.
//!
//! A [`Reactor`] reads a process's output one line at a time, echoes each
//! line, and for every [`TriggerTable`] entry whose pattern matches the line
//! writes the entry's response to the process's input. This is enough to
//! script installers, `ssh-keygen` style prompts or REPLs without a full
//! expect engine.
//!
//! The reactor never spawns or kills anything. It stops when the liveness
//! predicate reports the process as gone; reaching end of output alone does
//! not stop it.

mod ansi;
mod async_reactor;
mod child;
mod matcher;
mod reactor;
mod trigger;

pub use ansi::strip_ansi;
pub use async_reactor::react_to_child_async;
pub use child::{pipe_output, react_to_child, spawn_with};
pub use matcher::LineMatcher;
pub use reactor::{Reactor, ReactorConfig, ReactorReport, react_to_stream};
pub use trigger::{Trigger, TriggerSpec, TriggerTable};
