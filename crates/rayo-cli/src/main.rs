// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Rayo transpiler command-line interface.
//!
//! This is the main entry point for the `rayo` command.

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use miette::Result;
use tracing_subscriber::EnvFilter;

mod commands;
mod diagnostic;

/// Rayo: a Python-flavored scripting language that transpiles to Go
#[derive(Debug, Parser)]
#[command(name = "rayo")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Extra directories to search for local imports
    #[arg(short = 'I', long = "include", global = true, value_name = "DIR")]
    include: Vec<Utf8PathBuf>,

    /// Output path for generated code
    #[arg(short, long, global = true, value_name = "FILE")]
    output: Option<Utf8PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit Go source (accepted for compatibility; Go is the only target)
    #[arg(long = "emit-go", global = true)]
    emit_go: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the token stream of a source file
    Lex {
        /// Source file to lex
        file: Utf8PathBuf,
    },

    /// Parse a source file and print an AST summary
    Parse {
        /// Source file to parse
        file: Utf8PathBuf,
    },

    /// Parse and semantically check a source file
    Check {
        /// Source file to check
        file: Utf8PathBuf,
    },

    /// Transpile a source file and its local imports to Go
    Transpile {
        /// Entry source file
        file: Utf8PathBuf,
    },

    /// Transpile and run via the Go toolchain
    Run {
        /// Entry source file
        file: Utf8PathBuf,

        /// Arguments passed through to the program
        #[arg(trailing_var_arg = true)]
        args: Vec<String>,
    },

    /// Parse every source file under a directory and report pass/fail
    Test {
        /// Directory to search for source files
        #[arg(default_value = ".")]
        dir: Utf8PathBuf,
    },

    /// Print version information
    Version,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    // Install miette's fancy error handler
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    init_tracing(cli.verbose);
    if cli.emit_go {
        // Accepted for interface stability; Go is the only backend.
        tracing::debug!("--emit-go is implied");
    }

    let result = match cli.command {
        Command::Lex { file } => commands::lex::lex(&file),
        Command::Parse { file } => commands::parse::parse(&file),
        Command::Check { file } => commands::check::check(&file),
        Command::Transpile { file } => {
            commands::transpile::transpile(&file, &cli.include, cli.output.as_deref())
        }
        Command::Run { file, args } => commands::run::run(&file, &args, &cli.include),
        Command::Test { dir } => commands::test::test(&dir),
        Command::Version => {
            println!("rayo {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    };

    match result {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("{e:?}");
            std::process::exit(1);
        }
    }
}
