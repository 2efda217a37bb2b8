//! CLI argument parsing

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "netscope")]
#[command(version, about = "Network diagnostics companion", long_about = None)]
pub struct Cli {
    /// Verbose output (-v, -vv, -vvv for increasing verbosity)
    #[arg(short = 'v', long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Capture live traffic on an interface
    Capture {
        /// Capture device name (as reported by the platform)
        #[arg(short, long)]
        interface: String,

        /// BPF filter expression, passed verbatim to the capture provider
        #[arg(short, long, default_value = "", conflicts_with = "template")]
        filter: String,

        /// Capture duration in seconds
        #[arg(short = 't', long)]
        duration: Option<u64>,

        /// Start from a named capture template
        #[arg(long)]
        template: Option<String>,

        /// Print records as JSON instead of one-line summaries
        #[arg(long)]
        json: bool,
    },

    /// Manage capture templates
    Templates {
        #[command(subcommand)]
        command: TemplateCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum TemplateCommands {
    /// List built-in and user templates
    List,

    /// Save a user template
    Save {
        /// Template name (unique, case-insensitive)
        #[arg(short, long)]
        name: String,

        /// Human-readable description
        #[arg(short, long, default_value = "")]
        description: String,

        /// BPF filter expression
        #[arg(short, long)]
        filter: String,

        /// Default capture duration in seconds
        #[arg(short = 't', long, default_value = "30")]
        duration: u64,
    },
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
