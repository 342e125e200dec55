use std::path::PathBuf;

use crate::lang::Session;

/// Lazily evaluated arithmetic over numeric vectors
///
/// Without `--expr`, statements are read interactively (or from standard
/// input when it is not a terminal).
///
#[derive(clap::Parser, Debug, Clone, Default)]
#[command(version, about)]
pub struct Cli {
    /// Evaluate a statement and print its value; may be repeated
    #[arg(short, long = "expr", value_name = "EXPR")]
    pub exprs: Vec<String>,

    /// File used to persist interactive history
    #[arg(long, value_name = "PATH")]
    pub history: Option<PathBuf>,

    /// Seed for the random builtins
    #[arg(long)]
    pub seed: Option<u64>,

    /// Increase logging verbosity; may be repeated
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Default log filter for the requested verbosity
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl From<&Cli> for Session {
    fn from(cli: &Cli) -> Self {
        Session::new(cli.seed)
    }
}
