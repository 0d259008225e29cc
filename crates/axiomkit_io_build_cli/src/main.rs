//! `axiomkit-build` entry point.

use std::io::{IsTerminal, Read, Write};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use axiomkit_io_build::{BuildFs, BuildFsError, LocalStorage, SpecBuildFsOptions};

mod cli;

use cli::{Cli, Command};

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
enum ExitCode {
    Success = 0,
    /// Storage failure or conflicting paths.
    OperationFailed = 1,
    /// Arguments that can never succeed (e.g. wildcard copy onto a file).
    UsageError = 2,
}

impl From<&anyhow::Error> for ExitCode {
    fn from(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<BuildFsError>() {
            Some(BuildFsError::MultipleSourcesNeedDirectoryDestination { .. }) => {
                ExitCode::UsageError
            }
            _ => ExitCode::OperationFailed,
        }
    }
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("AXIOMKIT_BUILD_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run(Cli::parse()) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("axiomkit-build: {e:#}");
            ExitCode::from(&e)
        }
    };

    std::process::exit(exit_code as i32);
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let storage = LocalStorage::new().with_metadata(!cli.global.no_metadata);
    let spec_options = SpecBuildFsOptions {
        if_silent: cli.global.silent,
    };
    let fs_build = BuildFs::new(storage, spec_options);

    match cli.command {
        Command::Delete { folder } => fs_build.delete_folder(&folder)?,
        Command::Clean { folder } => fs_build.clean_folder(&folder)?,
        Command::Read { path } => write_stdout(&fs_build.read(&path)?)?,
        Command::Concat { paths } => write_stdout(&fs_build.concat(&paths)?)?,
        Command::Save { path, contents } => {
            let contents = match contents {
                Some(v) => v,
                None => {
                    let mut buf = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buf)
                        .context("reading contents from stdin")?;
                    buf
                }
            };
            fs_build.save(&path, &contents)?;
        }
        Command::Mkdir { destination } => fs_build.create_folders(&destination)?,
        Command::Copy {
            source,
            destination,
        } => {
            let report = fs_build.copy(&source, &destination)?;
            if !fs_build.is_silent() {
                tracing::info!("{report}");
            }
        }
        Command::List { path } => {
            let mut stdout = std::io::stdout().lock();
            for path in fs_build.list(&path)? {
                writeln!(stdout, "{path}")?;
            }
        }
    }
    Ok(())
}

fn write_stdout(txt: &str) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(txt.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
