use anyhow::Result;
use ckbsdk_molecule::Compatibility;
use clap::{Parser, Subcommand};

mod commands;
mod registry;
mod utils;

#[derive(Parser)]
#[command(name = "ckbsdk-cmd")]
#[command(about = "Command-line utility for inspecting Molecule-encoded CKB data")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a buffer as the given type and display its layout
    Inspect {
        /// Schema type name (see `types`)
        #[arg(short = 't', long = "type")]
        type_name: String,

        /// Verification mode: `strict` rejects trailing table fields, `compatible` accepts them
        #[arg(long, default_value_t = Compatibility::Strict)]
        mode: Compatibility,

        /// Shorthand for `--mode compatible`
        #[arg(long, conflicts_with = "mode")]
        compatible: bool,

        /// Hex-encoded buffer (optionally `0x`-prefixed), or `@path` to read raw bytes from a file
        input: String,
    },

    /// Print the hex encoding of a type's default value
    Default {
        /// Schema type name (see `types`)
        #[arg(short = 't', long = "type")]
        type_name: String,
    },

    /// List the known schema types
    Types,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect {
            type_name,
            mode,
            compatible,
            input,
        } => {
            let mode = if compatible {
                Compatibility::Compatible
            } else {
                mode
            };
            commands::inspect::run(type_name, mode, input)
        }
        Commands::Default { type_name } => commands::default::run(type_name),
        Commands::Types => commands::types::run(),
    }
}
