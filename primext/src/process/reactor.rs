//! Blocking line reactor.

use std::borrow::Cow;
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use indexmap::IndexMap;
use log::{debug, trace};

use super::ansi::strip_ansi;
use super::trigger::{Trigger, TriggerTable};
use crate::error::Result;

/// Configuration for reactor behavior.
#[derive(Debug, Clone)]
pub struct ReactorConfig {
    /// How long to wait after an end-of-output read before polling liveness again.
    pub idle_backoff: Duration,

    /// Whether each line is echoed to the echo sink.
    pub echo: bool,

    /// Match triggers against the line with ANSI escapes removed.
    /// The echo always receives the raw line.
    pub strip_ansi: bool,
}

impl Default for ReactorConfig {
    fn default() -> Self {
        Self {
            idle_backoff: Duration::from_millis(10),
            echo: true,
            strip_ansi: false,
        }
    }
}

impl ReactorConfig {
    /// Set the end-of-output backoff.
    pub fn with_idle_backoff(mut self, backoff: Duration) -> Self {
        self.idle_backoff = backoff;
        self
    }

    /// Enable or disable echoing.
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Enable or disable ANSI stripping before matching.
    pub fn with_strip_ansi(mut self, strip: bool) -> Self {
        self.strip_ansi = strip;
        self
    }
}

/// Summary of a reactor run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReactorReport {
    /// Lines read from the process output.
    pub lines: usize,

    /// Responses written to the process input.
    pub responses: usize,

    /// Fire count per pattern text, in first-fired order.
    pub fired: IndexMap<String, usize>,
}

impl ReactorReport {
    /// How many times the pattern fired.
    pub fn fired_count(&self, pattern: &str) -> usize {
        self.fired.get(pattern).copied().unwrap_or(0)
    }

    pub(crate) fn record_fire(&mut self, trigger: &Trigger) {
        self.responses += 1;
        *self.fired.entry(trigger.pattern().to_string()).or_insert(0) += 1;
    }
}

/// Reads process output line by line and answers matching lines.
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
/// use primext::process::{Reactor, ReactorConfig, TriggerTable};
///
/// # fn main() -> Result<(), primext::Error> {
/// let triggers = TriggerTable::new().on(r"name\?$", "ferris\n")?;
/// let reactor = Reactor::with_config(&triggers, ReactorConfig::default());
///
/// let mut input = Vec::new();
/// let mut echo = Vec::new();
/// let report = reactor.run(Cursor::new("What is your name?\n"), &mut input, &mut echo, || false)?;
///
/// assert_eq!(input, b"ferris\n");
/// assert_eq!(echo, b"What is your name?\n");
/// assert_eq!(report.responses, 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Reactor<'t> {
    triggers: &'t TriggerTable,
    config: ReactorConfig,
}

impl<'t> Reactor<'t> {
    /// Create a reactor with default configuration.
    pub fn new(triggers: &'t TriggerTable) -> Self {
        Self::with_config(triggers, ReactorConfig::default())
    }

    /// Create a reactor with the given configuration.
    pub fn with_config(triggers: &'t TriggerTable, config: ReactorConfig) -> Self {
        Self { triggers, config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &ReactorConfig {
        &self.config
    }

    /// Get the trigger table.
    pub fn triggers(&self) -> &'t TriggerTable {
        self.triggers
    }

    /// Run until `is_alive` returns false.
    ///
    /// Each iteration reads at most one line, echoes it, fires the matching
    /// triggers (writing and flushing `input` after every response), and then
    /// consults `is_alive`. An end-of-output read sleeps for the configured
    /// backoff instead of spinning.
    ///
    /// # Errors
    ///
    /// Any I/O error from reading `output`, writing `echo` or writing `input`
    /// is returned immediately.
    pub fn run<R, W, E, A>(
        &self,
        mut output: R,
        input: &mut W,
        echo: &mut E,
        mut is_alive: A,
    ) -> Result<ReactorReport>
    where
        R: BufRead,
        W: Write,
        E: Write,
        A: FnMut() -> bool,
    {
        debug!("reactor: started with {} triggers", self.triggers.len());

        let mut report = ReactorReport::default();
        let mut line = Vec::with_capacity(256);
        loop {
            line.clear();
            if output.read_until(b'\n', &mut line)? == 0 {
                trace!(
                    "reactor: end of output, backing off {:?}",
                    self.config.idle_backoff
                );
                thread::sleep(self.config.idle_backoff);
            } else {
                self.handle_line(trim_line_ending(&line), input, echo, &mut report)?;
            }

            if !is_alive() {
                break;
            }
        }

        debug!(
            "reactor: stopped after {} lines, {} responses",
            report.lines, report.responses
        );
        Ok(report)
    }

    fn handle_line<W: Write, E: Write>(
        &self,
        line: &[u8],
        input: &mut W,
        echo: &mut E,
        report: &mut ReactorReport,
    ) -> Result<()> {
        report.lines += 1;
        if self.config.echo {
            echo.write_all(line)?;
            echo.write_all(b"\n")?;
        }

        let subject = self.match_subject(line);
        for trigger in self.triggers.matching(&subject) {
            debug!("reactor: trigger {:?} matched, responding", trigger.pattern());
            input.write_all(trigger.response().as_bytes())?;
            input.flush()?;
            report.record_fire(trigger);
        }
        Ok(())
    }

    /// The bytes triggers are evaluated against.
    pub(crate) fn match_subject<'a>(&self, line: &'a [u8]) -> Cow<'a, [u8]> {
        if self.config.strip_ansi {
            Cow::Owned(strip_ansi(line))
        } else {
            Cow::Borrowed(line)
        }
    }
}

/// Remove a trailing `\n` or `\r\n`.
pub(crate) fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Echo `output` to stdout line by line and answer matching lines on `input`.
///
/// Blocks until `is_alive` returns false. See [`Reactor::run`].
pub fn react_to_stream<R, W, A>(
    output: R,
    input: &mut W,
    is_alive: A,
    triggers: &TriggerTable,
) -> Result<ReactorReport>
where
    R: BufRead,
    W: Write,
    A: FnMut() -> bool,
{
    Reactor::new(triggers).run(output, input, &mut io::stdout(), is_alive)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Records writes and counts flushes.
    #[derive(Default)]
    struct Recorder {
        data: Vec<u8>,
        flushes: usize,
    }

    impl Write for Recorder {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.data.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            self.flushes += 1;
            Ok(())
        }
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn alive_for(calls: usize) -> impl FnMut() -> bool {
        let mut seen = 0;
        move || {
            seen += 1;
            seen < calls
        }
    }

    #[test]
    fn test_scripted_stream_fires_on_matching_lines() {
        let triggers = TriggerTable::new().on(r"ba.*", "R1\n").unwrap();
        let reactor = Reactor::new(&triggers);
        let mut input = Recorder::default();
        let mut echo = Vec::new();

        let report = reactor
            .run(Cursor::new("foo\nbar\nbaz\n"), &mut input, &mut echo, alive_for(3))
            .unwrap();

        assert_eq!(echo, b"foo\nbar\nbaz\n");
        assert_eq!(input.data, b"R1\nR1\n");
        assert_eq!(input.flushes, 2);
        assert_eq!(report.lines, 3);
        assert_eq!(report.responses, 2);
        assert_eq!(report.fired_count("ba.*"), 2);
    }

    #[test]
    fn test_empty_table_never_writes() {
        let triggers = TriggerTable::new();
        let mut input = Recorder::default();
        let mut echo = Vec::new();

        let report = Reactor::new(&triggers)
            .run(Cursor::new("anything\nat all\n"), &mut input, &mut echo, alive_for(2))
            .unwrap();

        assert!(input.data.is_empty());
        assert_eq!(input.flushes, 0);
        assert_eq!(report.lines, 2);
        assert!(report.fired.is_empty());
    }

    #[test]
    fn test_every_matching_trigger_fires_in_order() {
        let triggers = TriggerTable::new()
            .on("o", "1")
            .unwrap()
            .on("^f", "2")
            .unwrap()
            .on("o", "3")
            .unwrap();
        let mut input = Recorder::default();

        Reactor::new(&triggers)
            .run(Cursor::new("foo\n"), &mut input, &mut io::sink(), || false)
            .unwrap();

        assert_eq!(input.data, b"123");
        assert_eq!(input.flushes, 3);
    }

    #[test]
    fn test_eof_backs_off_until_dead() {
        let triggers = TriggerTable::new().on("x", "y").unwrap();
        let config = ReactorConfig::default().with_idle_backoff(Duration::from_millis(1));
        let mut checks = 0;
        let mut input = Recorder::default();

        let report = Reactor::with_config(&triggers, config)
            .run(Cursor::new("x\n"), &mut input, &mut io::sink(), || {
                checks += 1;
                checks < 4
            })
            .unwrap();

        assert_eq!(checks, 4);
        assert_eq!(report.lines, 1);
        assert_eq!(input.data, b"y");
    }

    #[test]
    fn test_crlf_and_unterminated_last_line() {
        let triggers = TriggerTable::new().on(r"^done$", "bye").unwrap();
        let mut input = Recorder::default();
        let mut echo = Vec::new();

        Reactor::new(&triggers)
            .run(Cursor::new("one\r\ndone"), &mut input, &mut echo, alive_for(2))
            .unwrap();

        assert_eq!(echo, b"one\ndone\n");
        assert_eq!(input.data, b"bye");
    }

    #[test]
    fn test_echo_disabled() {
        let triggers = TriggerTable::new();
        let config = ReactorConfig::default().with_echo(false);
        let mut echo = Vec::new();

        let report = Reactor::with_config(&triggers, config)
            .run(Cursor::new("quiet\n"), &mut io::sink(), &mut echo, || false)
            .unwrap();

        assert!(echo.is_empty());
        assert_eq!(report.lines, 1);
    }

    #[test]
    fn test_strip_ansi_before_matching() {
        let triggers = TriggerTable::new().on(r"^Password:$", "pw\n").unwrap();
        let colored = "\x1b[1mPassword:\x1b[0m\n";

        let mut input = Recorder::default();
        Reactor::new(&triggers)
            .run(Cursor::new(colored), &mut input, &mut io::sink(), || false)
            .unwrap();
        assert!(input.data.is_empty());

        let mut input = Recorder::default();
        let mut echo = Vec::new();
        let config = ReactorConfig::default().with_strip_ansi(true);
        Reactor::with_config(&triggers, config)
            .run(Cursor::new(colored), &mut input, &mut echo, || false)
            .unwrap();
        assert_eq!(input.data, b"pw\n");
        assert_eq!(echo, colored.as_bytes());
    }

    #[test]
    fn test_write_failure_propagates_after_echo() {
        let triggers = TriggerTable::new().on("ask", "answer").unwrap();
        let mut echo = Vec::new();

        let err = Reactor::new(&triggers)
            .run(Cursor::new("ask\nnever read\n"), &mut BrokenPipe, &mut echo, || true)
            .unwrap_err();

        assert!(matches!(err, crate::Error::Io(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
        assert_eq!(echo, b"ask\n");
    }

    #[test]
    fn test_react_to_stream_writes_responses() {
        let triggers = TriggerTable::new().on_literal("?", "!");
        let mut input = Vec::new();

        let report =
            react_to_stream(Cursor::new("why?\n"), &mut input, || false, &triggers).unwrap();

        assert_eq!(input, b"!");
        assert_eq!(report.responses, 1);
    }

    #[test]
    fn test_trim_line_ending() {
        assert_eq!(trim_line_ending(b"a\r\n"), b"a");
        assert_eq!(trim_line_ending(b"a\n"), b"a");
        assert_eq!(trim_line_ending(b"a"), b"a");
        assert_eq!(trim_line_ending(b"\r"), b"");
    }
}
