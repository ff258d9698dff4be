//! CLI argument definitions for the pomhelper binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Read, edit and rewrite Maven `pom.xml` descriptors
#[derive(Parser, Debug)]
#[command(name = "pomhelper")]
#[command(about = "Edit pom.xml descriptors with deterministic property ordering")]
#[command(version)]
pub struct Cli {
    /// YAML file with writer settings (indent_size, xml_declaration)
    #[arg(long, global = true, env = "POMHELPER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Write the result here instead of rewriting the descriptor in place
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rewrite a descriptor with its properties in key order
    Sort(PomArgs),
    /// Insert or overwrite a property
    SetProperty(SetPropertyArgs),
    /// Remove a property
    RemoveProperty(RemovePropertyArgs),
    /// Print coordinates, parent and properties
    Show(ShowArgs),
}

/// Arguments naming a single descriptor
#[derive(clap::Args, Debug)]
pub struct PomArgs {
    /// Descriptor to operate on
    #[arg(default_value = "pom.xml")]
    pub pom: PathBuf,
}

/// Arguments for the set-property command
#[derive(clap::Args, Debug)]
pub struct SetPropertyArgs {
    /// Property name
    pub key: String,

    /// Property value
    pub value: String,

    /// Descriptor to operate on
    #[arg(long, default_value = "pom.xml")]
    pub pom: PathBuf,
}

/// Arguments for the remove-property command
#[derive(clap::Args, Debug)]
pub struct RemovePropertyArgs {
    /// Property name
    pub key: String,

    /// Descriptor to operate on
    #[arg(long, default_value = "pom.xml")]
    pub pom: PathBuf,
}

/// Arguments for the show command
#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Descriptor to operate on
    #[arg(default_value = "pom.xml")]
    pub pom: PathBuf,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}
