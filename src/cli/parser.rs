use clap::{Parser, Subcommand};

/// Command-line interface definition for emogo
/// Personal mood and vlog logger with CSV export
#[derive(Parser)]
#[command(
    name = "emogo",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log 1-5 mood scores and short vlogs with optional GPS, export everything as CSV",
    long_about = None
)]
pub struct Cli {
    /// Override the app directory (config, log, vlogs). Useful for tests.
    #[arg(global = true, long = "dir", value_name = "DIR")]
    pub dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the config file, the data log and the vlog directory, and
    /// register the collection reminders
    Init {
        #[arg(long, short = 'f', help = "Rewrite the configuration file with defaults")]
        force: bool,
    },

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use instead of $EDITOR")]
        editor: Option<String>,
    },

    /// Log a mood score (1 = very bad, 5 = very good)
    Mood {
        #[arg(value_parser = clap::value_parser!(u8).range(1..=5))]
        score: u8,

        #[arg(long, requires = "lng", allow_negative_numbers = true, help = "Latitude of the reading")]
        lat: Option<f64>,

        #[arg(long, requires = "lat", allow_negative_numbers = true, help = "Longitude of the reading")]
        lng: Option<f64>,
    },

    /// Store a captured video clip and log it
    Vlog {
        /// Path of the captured clip; it is moved into the vlog directory
        clip: String,

        #[arg(long, requires = "lng", allow_negative_numbers = true, help = "Latitude of the reading")]
        lat: Option<f64>,

        #[arg(long, requires = "lat", allow_negative_numbers = true, help = "Longitude of the reading")]
        lng: Option<f64>,
    },

    /// List logged records
    List {
        #[arg(long, help = "Only records of this type (sentiment, vlog, ...)")]
        kind: Option<String>,
    },

    /// Show the next collection time
    Next,

    /// Export the whole log as CSV
    Export,

    /// Re-register the daily collection reminders
    Schedule,
}
