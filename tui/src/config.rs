//! Command-line options and the paths derived from them.

use std::path::PathBuf;

use clap::Parser;
use directories::ProjectDirs;
use vimsweep_core::Mode;

pub const SCORES_FILE: &str = "scores.jsonl";
pub const LOG_FILE: &str = "vimsweep.log";

/// Minesweeper for practising vim motions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[command(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed for mine placement instead of the clock
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Score file (JSON lines)
    #[arg(long, value_name = "PATH")]
    pub scores: Option<PathBuf>,

    /// Directory for the log file
    #[arg(long, value_name = "PATH")]
    pub log_dir: Option<PathBuf>,

    /// Skip the menus and start straight away (beginner, intermediate, expert)
    #[arg(short, long)]
    pub mode: Option<Mode>,
}

/// Resolved runtime settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub seed: Option<u64>,
    pub scores_path: PathBuf,
    pub log_dir: PathBuf,
    pub start_mode: Option<Mode>,
    /// Directive for the tracing `EnvFilter`, e.g. `warn`.
    pub log_level: String,
}

impl Config {
    pub fn from_args(args: Args) -> Self {
        Self::resolve(args, ProjectDirs::from("dev", "sugoijan", "vimsweep"))
    }

    fn resolve(args: Args, dirs: Option<ProjectDirs>) -> Self {
        let scores_path = args.scores.unwrap_or_else(|| match &dirs {
            Some(dirs) => dirs.data_dir().join(SCORES_FILE),
            None => PathBuf::from(SCORES_FILE),
        });
        let log_dir = args.log_dir.unwrap_or_else(|| match &dirs {
            Some(dirs) => dirs.cache_dir().join("logs"),
            None => std::env::temp_dir().join("vimsweep"),
        });

        Self {
            seed: args.seed,
            scores_path,
            log_dir,
            start_mode: args.mode,
            log_level: args.verbose.log_level_filter().to_string().to_lowercase(),
        }
    }
}
