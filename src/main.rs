use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use vendor_smoke::{CheckResult, HashVerifier};

#[derive(Parser)]
#[command(name = "vendor-smoke")]
#[command(about = "Smoke tests for vendored hashing and HTTP client builds")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the built-in SHA-256 known-answer vectors
    Smoke,
    /// Check if a file matches a SHA-256 hash
    Check {
        /// Hash to reference
        hash: String,
        /// File to compare
        file: PathBuf,
    },
    /// Print the SHA-256 hash of a file
    Calculate {
        /// File to hash
        file: PathBuf,
    },
    /// Compare reported component versions against pinned versions
    Versions {
        /// JSON object mapping component names to reported versions
        report: PathBuf,
        /// JSON object overriding the default pins
        #[arg(short, long)]
        pins: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Smoke => {
            let report = vendor_smoke::commands::smoke::run();
            for result in &report.results {
                let status = if result.passed() { "ok" } else { "FAILED" };
                println!("{}: {}", result.vector.name, status);
            }
            if let Err(e) = report.into_result() {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
        Commands::Check { hash, file } => {
            match vendor_smoke::commands::check::run(&HashVerifier::sha256(), &hash, &file) {
                Ok(CheckResult::Match) => {
                    println!("Hash match");
                }
                Ok(CheckResult::NoMatch { actual }) => {
                    println!("Hashes differ");
                    println!("Expected hash: {}", hash);
                    println!("Actual hash: {}", actual);
                    process::exit(1);
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    process::exit(2);
                }
            }
        }
        Commands::Calculate { file } => {
            match vendor_smoke::commands::calculate::run(&HashVerifier::sha256(), &file) {
                Ok(hash) => {
                    println!("{}", hash);
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    process::exit(2);
                }
            }
        }
        Commands::Versions { report, pins } => {
            match vendor_smoke::commands::versions::run(&report, pins.as_deref()) {
                Ok(mismatches) if mismatches.is_empty() => {
                    println!("All component versions match");
                }
                Ok(mismatches) => {
                    for mismatch in &mismatches {
                        eprintln!("{}", mismatch);
                    }
                    process::exit(1);
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    process::exit(2);
                }
            }
        }
    }
}
