// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # nacl-keys
//!
//! Entry point for the `nacl-keys` binary. Parses CLI arguments, sets up
//! logging, loads generator settings and dispatches to a subcommand:
//!
//! - `generate`:  derive a keypair from secrets and print its identity
//! - `encode`:    hex public key to identity
//! - `decode`:    identity to hex public key
//! - `recognize`: classify identities by format
//! - `version`:   print build version information
//!
//! Results go to stdout, logs and errors to stderr.

mod cli;
mod commands;
mod logging;

use std::fmt::Display;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use nacl_keys::KeyGenerator;

use cli::{Commands, NaclKeysCli};
use logging::LogFormat;

fn main() -> Result<()> {
    let cli = NaclKeysCli::parse();
    logging::init_logging(&cli.log_level, LogFormat::from_str_lossy(&cli.log_format));

    let json = cli.json;
    match cli.command {
        Commands::Generate(mut args) => {
            let generator = build_generator(cli.config.as_deref())?;
            let passphrase =
                commands::read_passphrase(args.passphrase.take(), std::io::stdin().lock())?;
            emit(&commands::generate(&generator, args, &passphrase)?, json)
        }
        Commands::Encode(args) => {
            let generator = build_generator(cli.config.as_deref())?;
            emit(&commands::encode(&generator, args)?, json)
        }
        Commands::Decode(args) => {
            let generator = build_generator(cli.config.as_deref())?;
            emit(&commands::decode(&generator, args)?, json)
        }
        Commands::Recognize(args) => {
            let generator = build_generator(cli.config.as_deref())?;
            emit(&commands::recognize(&generator, args), json)
        }
        Commands::Version => {
            print_version();
            Ok(())
        }
    }
}

/// Builds the generator from the optional config file.
fn build_generator(config_path: Option<&Path>) -> Result<KeyGenerator> {
    let config = commands::load_config(config_path)?;
    Ok(KeyGenerator::new(config))
}

/// Prints a report as text or as pretty JSON.
fn emit<T: Serialize + Display>(report: &T, json: bool) -> Result<()> {
    if json {
        let rendered =
            serde_json::to_string_pretty(report).context("failed to serialize output")?;
        println!("{rendered}");
    } else {
        println!("{report}");
    }
    Ok(())
}

/// Prints version information to stdout.
fn print_version() {
    println!("nacl-keys {}", env!("CARGO_PKG_VERSION"));
    println!("rustc     {}", rustc_version());
}

/// Returns the Rust compiler version used to build this binary.
fn rustc_version() -> &'static str {
    option_env!("RUSTC_VERSION").unwrap_or("unknown")
}
