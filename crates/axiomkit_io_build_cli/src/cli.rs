//! Command-line definitions.

use clap::{Args, Parser, Subcommand};

/// Build-time file helpers: clean, copy, list and save files.
#[derive(Debug, Parser)]
#[command(name = "axiomkit-build", version)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Do not log completed operations
    #[arg(
        long,
        short = 's',
        global = true,
        env = "AXIOMKIT_BUILD_SILENT",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub silent: bool,

    /// Copy file bytes only (no permissions, timestamps or extended attributes)
    #[arg(long, global = true)]
    pub no_metadata: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Remove a folder and everything below it (missing folders are fine)
    Delete {
        folder: String,
    },
    /// Leave a folder existing and empty
    Clean {
        folder: String,
    },
    /// Print a file
    Read {
        path: String,
    },
    /// Print files one after another, with no separator
    Concat {
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Write a file, creating parent folders
    Save {
        path: String,
        /// Contents to write; read from stdin when omitted
        #[arg(long)]
        contents: Option<String>,
    },
    /// Create missing folders (a trailing `/` makes the whole path a folder)
    Mkdir {
        destination: String,
    },
    /// Copy a file, or every file matching `*`/`?` into a folder ending with `/`
    Copy {
        source: String,
        destination: String,
    },
    /// List the files a path or wildcard selects
    List {
        path: String,
    },
}
