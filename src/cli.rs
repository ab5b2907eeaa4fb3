//! Command-line interface for the skeleton generator.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

use crate::constants::DEFAULT_FORMAT;

/// Command-line arguments structure.
#[derive(Parser, Debug)]
#[command(author, version, about = "Create new Hugo site and theme skeletons", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// What to create.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new site skeleton
    Site {
        /// Directory where the site will be created
        #[arg(value_name = "OUTPUT_DIR")]
        output_dir: PathBuf,

        /// Init inside a non-empty directory
        #[arg(short, long)]
        force: bool,

        /// Config file format (toml, yaml or json)
        #[arg(long, default_value = DEFAULT_FORMAT)]
        format: String,
    },
    /// Create a new theme skeleton
    Theme {
        /// Directory where the theme will be created
        #[arg(value_name = "OUTPUT_DIR")]
        output_dir: PathBuf,

        /// Config file format (toml, yaml or json)
        #[arg(long, default_value = DEFAULT_FORMAT)]
        format: String,
    },
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if matches!(
                e.kind(),
                ErrorKind::MissingRequiredArgument
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                    | ErrorKind::MissingSubcommand
            ) {
                if let Err(err) = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                {
                    eprintln!("Failed to print help: {err}");
                }
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
