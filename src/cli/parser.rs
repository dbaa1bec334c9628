use clap::{Parser, Subcommand};

/// Command-line interface definition for kmlog
#[derive(Parser)]
#[command(
    name = "kmlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Personal logbook for daily odometer readings and time punches, served as a small web app",
    long_about = None
)]
pub struct Cli {
    /// Path of the YAML configuration file
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the configuration file and create the database
    Init,

    /// Start the web server
    Serve {
        /// Listen on this port instead of the configured one
        #[arg(long = "port", short = 'p')]
        port: Option<u16>,
    },

    /// Show the effective configuration
    Config {
        /// Print the configuration as YAML
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Print or manage the internal log table
    Log {
        /// Print rows from the internal `log` table
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
