//! CLI argument definitions for the usdj-am binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// usdj-am scene document tool
#[derive(Parser, Debug)]
#[command(name = "usdj-am")]
#[command(about = "Inspect and build USDJ scene documents stored in Automerge")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Project a scene document and print it as JSON
    Dump(DumpArgs),
    /// Build an Automerge scene document from a JSON file
    Import(ImportArgs),
}

/// Arguments for the dump command
#[derive(clap::Args, Debug)]
pub struct DumpArgs {
    /// Automerge scene document to read
    pub file: PathBuf,

    /// Pretty-print the JSON output
    #[arg(short, long)]
    pub pretty: bool,
}

/// Arguments for the import command
#[derive(clap::Args, Debug)]
pub struct ImportArgs {
    /// JSON scene description to read
    pub json: PathBuf,

    /// Automerge document file to write
    pub file: PathBuf,
}
