//! Course registry demonstration.
//!
//! Registers an online and an offline course, assigns teachers, enrolls
//! students and prints every course plus the courses of one teacher.
//!
//! Usage:
//!   course-demo [--strict] [--json] [--verbose]

use anyhow::{Context, Result};
use clap::Parser;
use course_demo::{build_sample, render_text};
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "course-demo")]
#[command(about = "Course registry demonstration")]
struct Args {
    /// Reject courses whose id is already registered
    #[arg(long)]
    strict: bool,

    /// Print the registry as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    debug!("Starting with {:?}", args);
    let report = build_sample(args.strict)?;

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("serializing report")?;
        println!("{json}");
    } else {
        print!("{}", render_text(&report));
    }
    Ok(())
}
