//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format flag (`--output`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    /// Chair result, every specialist result and all findings
    Full,
    /// Only the chair's result and findings
    Summary,
    /// Machine-readable JSON
    Json,
}

impl From<OutputArg> for council_domain::OutputFormat {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Full => Self::Full,
            OutputArg::Summary => Self::Summary,
            OutputArg::Json => Self::Json,
        }
    }
}

/// CLI arguments for offer-council
#[derive(Parser, Debug)]
#[command(name = "offer-council")]
#[command(author, version, about = "Offer Council - a specialist panel and a chair judge a promotional offer")]
#[command(long_about = r#"
Offer Council runs four specialists (offer_iq, creative, shopper, retail)
on the same offer context, then a chair who reconciles them.

  evaluate   verdicts, six scores and must-fix lists
  improve    role-specific proposals folded into at most two upgrade packages

Configuration files are loaded from (in priority order):
1. COUNCIL_* environment variables
2. --config <path>     Explicit config file
3. ./council.toml      Project-level config
4. ~/.config/offer-council/config.toml   Global config

Example:
  offer-council evaluate --context ctx.json --policy policy.md
  offer-council evaluate --context ctx.json -o json > eval.json
  offer-council improve --context ctx.json --evaluation eval.json
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format [default: config value, else summary]
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputArg>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Report validation errors as findings instead of failing the round
    #[arg(long, global = true)]
    pub flag_only: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Judge an offer: verdict, scores, must-fix list
    Evaluate {
        /// Offer context (JSON)
        #[arg(long, value_name = "PATH")]
        context: PathBuf,

        /// Business policy text, embedded verbatim in every prompt
        #[arg(long, value_name = "PATH")]
        policy: Option<PathBuf>,
    },

    /// Propose upgrade packages, building on a prior evaluation
    Improve {
        /// Offer context (JSON)
        #[arg(long, value_name = "PATH")]
        context: PathBuf,

        /// Output of `evaluate -o json`
        #[arg(long, value_name = "PATH")]
        evaluation: PathBuf,

        /// Business policy text, embedded verbatim in every prompt
        #[arg(long, value_name = "PATH")]
        policy: Option<PathBuf>,
    },
}

impl Command {
    pub fn context_path(&self) -> &PathBuf {
        match self {
            Command::Evaluate { context, .. } | Command::Improve { context, .. } => context,
        }
    }

    pub fn policy_path(&self) -> Option<&PathBuf> {
        match self {
            Command::Evaluate { policy, .. } | Command::Improve { policy, .. } => policy.as_ref(),
        }
    }
}
