//! Async auto-answer example: the reactor runs as a tokio task.
//!
//! ```bash
//! RUST_LOG=debug cargo run --example async_answer
//! ```

use std::process::Stdio;
use std::time::Duration;

use primext::diag::time_execution;
use primext::process::{TriggerTable, react_to_child_async};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let triggers = TriggerTable::new()
        .on(r"^Username:", "ferris\n")?
        .on(r"^Password:", "hunter2\n")?;

    let mut child = tokio::process::Command::new("sh")
        .arg("-c")
        .arg(r#"echo "Username:"; read u; echo "Password:"; read p; echo "welcome, $u""#)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()?;

    let reactor = tokio::spawn(async move {
        let report = react_to_child_async(&mut child, &triggers).await;
        let status = child.wait().await;
        (report, status)
    });

    // Other work can proceed while the reactor task drives the child.
    let timed = time_execution(|| (1..=1_000u64).sum::<u64>());
    println!("computed {} in {:?} meanwhile", timed.value, timed.duration);

    let (report, status) = tokio::time::timeout(Duration::from_secs(10), reactor).await??;
    let report = report?;
    println!(
        "answered {} prompts across {} lines, exit {}",
        report.responses,
        report.lines,
        status?
    );
    Ok(())
}
