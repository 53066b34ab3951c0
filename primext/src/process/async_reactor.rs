//! Tokio variant of the line reactor, for running it as a task.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::process::Child;

use log::{debug, trace};

use super::reactor::{Reactor, ReactorReport, trim_line_ending};
use super::trigger::TriggerTable;
use crate::error::{ProcessError, Result};

impl Reactor<'_> {
    /// Async counterpart of [`Reactor::run`].
    ///
    /// Semantics are identical; the end-of-output backoff uses
    /// `tokio::time::sleep` so the runtime thread is not blocked.
    pub async fn run_async<R, W, E, A>(
        &self,
        mut output: R,
        input: &mut W,
        echo: &mut E,
        mut is_alive: A,
    ) -> Result<ReactorReport>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
        E: AsyncWrite + Unpin,
        A: FnMut() -> bool,
    {
        debug!("async reactor: started with {} triggers", self.triggers().len());

        let mut report = ReactorReport::default();
        let mut line = Vec::with_capacity(256);
        loop {
            line.clear();
            if output.read_until(b'\n', &mut line).await? == 0 {
                trace!(
                    "async reactor: end of output, backing off {:?}",
                    self.config().idle_backoff
                );
                tokio::time::sleep(self.config().idle_backoff).await;
            } else {
                let line = trim_line_ending(&line);
                report.lines += 1;
                if self.config().echo {
                    echo.write_all(line).await?;
                    echo.write_all(b"\n").await?;
                }

                let subject = self.match_subject(line);
                for trigger in self.triggers().matching(&subject) {
                    debug!(
                        "async reactor: trigger {:?} matched, responding",
                        trigger.pattern()
                    );
                    input.write_all(trigger.response().as_bytes()).await?;
                    input.flush().await?;
                    report.record_fire(trigger);
                }
            }

            if !is_alive() {
                break;
            }
        }

        echo.flush().await?;
        debug!(
            "async reactor: stopped after {} lines, {} responses",
            report.lines, report.responses
        );
        Ok(report)
    }

    /// Async counterpart of [`Reactor::run_child`] for `tokio::process::Child`.
    pub async fn run_child_async<E>(&self, child: &mut Child, echo: &mut E) -> Result<ReactorReport>
    where
        E: AsyncWrite + Unpin,
    {
        let stdout = child
            .stdout
            .take()
            .ok_or(ProcessError::StreamNotPiped("stdout"))?;

        let mut input: Box<dyn AsyncWrite + Unpin + Send> = match child.stdin.take() {
            Some(stdin) => Box::new(stdin),
            None if self.triggers().is_empty() => Box::new(tokio::io::sink()),
            None => return Err(ProcessError::StreamNotPiped("stdin").into()),
        };

        debug!("async reactor: attached to child {:?}", child.id());
        self.run_async(BufReader::new(stdout), &mut input, echo, || {
            matches!(child.try_wait(), Ok(None))
        })
        .await
    }
}

/// Echo a tokio child's stdout to our stdout and answer matching lines on its stdin.
pub async fn react_to_child_async(
    child: &mut Child,
    triggers: &TriggerTable,
) -> Result<ReactorReport> {
    Reactor::new(triggers)
        .run_child_async(child, &mut tokio::io::stdout())
        .await
}
