//! Adapters attaching a reactor to a `std::process::Child`.

use std::io::{self, BufReader, Write};
use std::process::{Child, Command};

use log::debug;

use super::reactor::{Reactor, ReactorReport};
use super::trigger::TriggerTable;
use crate::error::{ProcessError, Result};

/// Start `command` and run `also` on the new child before returning it.
pub fn spawn_with<F>(command: &mut Command, also: F) -> Result<Child>
where
    F: FnOnce(&mut Child),
{
    let mut child = command.spawn()?;
    debug!("spawned child {}", child.id());
    also(&mut child);
    Ok(child)
}

/// Echo the child's stdout to our stdout and answer matching lines on its stdin.
///
/// The child must have been spawned with `Stdio::piped()` stdout and stdin.
/// Blocks until the child exits. Its stdout and stdin handles are consumed.
pub fn react_to_child(child: &mut Child, triggers: &TriggerTable) -> Result<ReactorReport> {
    Reactor::new(triggers).run_child(child, &mut io::stdout())
}

/// Echo the child's stdout to our stdout until it exits.
///
/// Only stdout needs to be piped.
pub fn pipe_output(child: &mut Child) -> Result<ReactorReport> {
    react_to_child(child, &TriggerTable::new())
}

impl Reactor<'_> {
    /// Run against a child process, echoing to `echo`.
    ///
    /// Liveness is `Child::try_wait` reporting no exit status. Stdin is only
    /// required when the trigger table is non-empty.
    pub fn run_child<E: Write>(&self, child: &mut Child, echo: &mut E) -> Result<ReactorReport> {
        let stdout = child
            .stdout
            .take()
            .ok_or(ProcessError::StreamNotPiped("stdout"))?;

        let mut input: Box<dyn Write + Send> = match child.stdin.take() {
            Some(stdin) => Box::new(stdin),
            None if self.triggers().is_empty() => Box::new(io::sink()),
            None => return Err(ProcessError::StreamNotPiped("stdin").into()),
        };

        debug!("reactor: attached to child {}", child.id());
        self.run(BufReader::new(stdout), &mut input, echo, || {
            matches!(child.try_wait(), Ok(None))
        })
    }
}
