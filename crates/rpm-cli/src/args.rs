use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{FormArgs, GenerateArgs};

/// Generate Rencana Pembelajaran Mendalam (RPM) lesson plans
///
/// Fill in the form with flags or a TOML/JSON form file, then let the
/// generation service write the learning design, one learning experience per
/// meeting and the assessment. The identification section is always taken
/// from the form. The `serve` command exposes the same operations as an MCP
/// server on stdio.
#[derive(Parser)]
#[command(version, about, name = "rpmgen")]
pub struct Args {
    /// Path to the configuration file. Defaults to
    /// $XDG_CONFIG_HOME/rpmgen/config.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands. Without a command the form options are listed.
#[derive(Subcommand)]
pub enum Commands {
    /// Generate an RPM from the form
    #[command(alias = "g")]
    Generate(GenerateArgs),
    /// Print the prompt that would be sent for the form
    Prompt(FormArgs),
    /// Print the JSON schema the reply must follow
    Schema,
    /// List education levels, grades, practices and dimensions
    Options,
    /// Print the form as a TOML file to edit and pass back with --form
    Template(FormArgs),
    /// Start the MCP server
    Serve,
}
