//! Auto-answer example: run a command and reply to its prompts.
//!
//! Runs a shell script that asks two questions, echoes its output, and
//! answers each prompt from a trigger table. A custom table can be loaded
//! from a JSON file of `{"pattern": ..., "response": ...}` records.
//!
//! # Usage
//!
//! ```bash
//! RUST_LOG=debug cargo run --example auto_answer
//! cargo run --example auto_answer -- --triggers answers.json --command ./installer.sh
//! ```

use std::env;
use std::fs;
use std::process::{Command, Stdio};

use primext::process::{TriggerSpec, TriggerTable, react_to_child, spawn_with};
use primext::{JoinOptions, Joinable};

const DEMO_SCRIPT: &str = r#"
printf 'Install into /opt/demo? [y/N]\n'
read confirm
printf 'Admin e-mail:\n'
read email
printf 'confirm=%s email=%s\n' "$confirm" "$email"
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (set RUST_LOG=debug for verbose output)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let triggers = match &args.triggers {
        Some(path) => {
            let specs: Vec<TriggerSpec> = serde_json::from_str(&fs::read_to_string(path)?)?;
            TriggerTable::from_specs(specs)?
        }
        None => TriggerTable::new()
            .on(r"\[y/N\]", "y\n")?
            .on(r"(?i)e-?mail:", "ops@example.com\n")?,
    };

    let patterns = triggers
        .iter()
        .map(|t| t.pattern())
        .join_to_string(&JoinOptions::new().last_separator(" and ").prefix("[").suffix("]"));
    println!("Watching for {patterns}");
    println!("{}", "-".repeat(50));

    let mut command = Command::new("sh");
    match &args.command {
        Some(script) => command.arg(script),
        None => command.arg("-c").arg(DEMO_SCRIPT),
    };
    command.stdin(Stdio::piped()).stdout(Stdio::piped());

    let mut child = spawn_with(&mut command, |child| {
        log::info!("started pid {}", child.id());
    })?;
    let report = react_to_child(&mut child, &triggers)?;
    let status = child.wait()?;

    println!("{}", "-".repeat(50));
    println!(
        "{} lines, {} responses, exit {}",
        report.lines, report.responses, status
    );
    for (pattern, count) in &report.fired {
        println!("  {pattern}: {count}");
    }

    Ok(())
}

/// Simple argument parser (avoiding clap dependency for examples)
struct Args {
    triggers: Option<String>,
    command: Option<String>,
}

impl Args {
    fn parse() -> Self {
        let args: Vec<String> = env::args().collect();
        let mut triggers = None;
        let mut command = None;

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--triggers" | "-t" => {
                    i += 1;
                    if i < args.len() {
                        triggers = Some(args[i].clone());
                    }
                }
                "--command" | "-c" => {
                    i += 1;
                    if i < args.len() {
                        command = Some(args[i].clone());
                    }
                }
                "--help" => {
                    Self::print_help();
                    std::process::exit(0);
                }
                _ => {
                    eprintln!("Unknown argument: {}", args[i]);
                }
            }
            i += 1;
        }

        Self { triggers, command }
    }

    fn print_help() {
        println!(
            r#"primext auto_answer example

USAGE:
    cargo run --example auto_answer -- [OPTIONS]

OPTIONS:
    -t, --triggers <FILE>    JSON array of {{"pattern", "response"}} records
    -c, --command <SCRIPT>   Shell script to run [default: built-in demo]
    --help                   Print this help message
"#
        );
    }
}
