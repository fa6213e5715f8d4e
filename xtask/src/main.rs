use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::process::{Command, Stdio};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "x")]
#[command(about = "Development automation for ember-core")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all CI checks (fmt, clippy, build, test)
    Ci {
        #[arg(long)]
        verbose: bool,
    },
    /// Quick checks before commit (fmt, clippy)
    Check {
        #[arg(long)]
        verbose: bool,
    },
    /// Format code
    Fmt {
        #[arg(long)]
        check: bool,
    },
    /// Run clippy
    Clippy {
        #[arg(long)]
        fix: bool,
    },
    /// Build the project
    Build {
        #[arg(long)]
        release: bool,
    },
    /// Run tests
    Test {
        #[arg(long)]
        doc: bool,
    },
    /// Run benches
    Bench,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ci { verbose } => {
            run_step("fmt", &["fmt", "--all", "--", "--check"], verbose)?;
            run_step(
                "clippy",
                &["clippy", "--all-targets", "--", "-D", "warnings"],
                verbose,
            )?;
            run_step("build", &["build", "--all-targets"], verbose)?;
            run_step("test", &["test"], verbose)?;
            println!("{}", "All CI checks passed".green().bold());
            Ok(())
        }
        Commands::Check { verbose } => {
            run_step("fmt", &["fmt", "--all", "--", "--check"], verbose)?;
            run_step(
                "clippy",
                &["clippy", "--all-targets", "--", "-D", "warnings"],
                verbose,
            )?;
            println!("{}", "Pre-commit checks passed".green().bold());
            Ok(())
        }
        Commands::Fmt { check } => {
            if check {
                run_step("fmt", &["fmt", "--all", "--", "--check"], true)
            } else {
                run_step("fmt", &["fmt", "--all"], true)
            }
        }
        Commands::Clippy { fix } => {
            if fix {
                run_step("clippy", &["clippy", "--fix", "--allow-dirty"], true)
            } else {
                run_step(
                    "clippy",
                    &["clippy", "--all-targets", "--", "-D", "warnings"],
                    true,
                )
            }
        }
        Commands::Build { release } => {
            if release {
                run_step("build", &["build", "--release"], true)
            } else {
                run_step("build", &["build", "--all-targets"], true)
            }
        }
        Commands::Test { doc } => {
            if doc {
                run_step("test", &["test", "--doc"], true)
            } else {
                run_step("test", &["test"], true)
            }
        }
        Commands::Bench => run_step("bench", &["bench"], true),
    }
}

/// Run one cargo step, timing it and reporting pass/fail
fn run_step(name: &str, args: &[&str], verbose: bool) -> Result<()> {
    println!("{} cargo {}", "Running".cyan().bold(), args.join(" "));
    let start = Instant::now();

    let mut command = Command::new("cargo");
    command.args(args);
    if !verbose {
        command.stdout(Stdio::null());
    }

    let status = command.status()?;
    let elapsed = start.elapsed();

    if status.success() {
        println!("{} {} ({:.1?})", "ok".green().bold(), name, elapsed);
        Ok(())
    } else {
        println!("{} {} ({:.1?})", "FAILED".red().bold(), name, elapsed);
        anyhow::bail!("step '{}' failed", name)
    }
}
