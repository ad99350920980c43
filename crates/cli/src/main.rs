// ABOUTME: CLI for building the top-leaderboards summary from the leaderboard page.
// ABOUTME: `build` (default) fetches and writes the JSON files; `history` records a daily snapshot.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use topboard_cli::config::{self, Config};
use topboard_cli::{init_logging, run_build, run_history};

/// Extract top-5 leaderboard lists and write them as JSON.
#[derive(Parser, Debug)]
#[command(name = "topboard")]
#[command(about = "Scrape leaderboard cards into top-leaderboards.json", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    build: BuildArgs,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch the page and write top-leaderboards.json and build-log.json (default).
    Build(BuildArgs),
    /// Append a payload to history/history.csv and history/trends.json.
    History(HistoryArgs),
}

#[derive(Args, Debug)]
struct BuildArgs {
    /// Source page (overrides LEADERBOARD_URL).
    #[arg(long)]
    url: Option<String>,

    /// Directory receiving the output files.
    #[arg(short = 'o', long, default_value = ".")]
    out_dir: PathBuf,

    /// HTTP timeout in seconds.
    #[arg(long, default_value_t = config::DEFAULT_TIMEOUT.as_secs())]
    timeout_secs: u64,

    /// Also save the fetched markup (same as SAVE_SNAPSHOT=true).
    #[arg(long)]
    snapshot: bool,

    /// Include the main model table in the payload.
    #[arg(long)]
    with_table: bool,

    /// Parse a local HTML file instead of fetching.
    #[arg(long)]
    html: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct HistoryArgs {
    /// Payload written by the build step.
    #[arg(long, default_value = "top-leaderboards.json")]
    input: PathBuf,

    /// Directory holding history.csv and trends.json.
    #[arg(long, default_value = "history")]
    dir: PathBuf,

    /// Date to record (YYYY-MM-DD, default: today in UTC).
    #[arg(long)]
    date: Option<NaiveDate>,
}

impl BuildArgs {
    fn into_config(self) -> Config {
        let env_url = env::var(config::URL_ENV).ok();
        let env_snapshot = env::var(config::SNAPSHOT_ENV).ok();
        Config {
            url: config::resolve_url(self.url.as_deref(), env_url.as_deref()),
            out_dir: self.out_dir,
            timeout: Duration::from_secs(self.timeout_secs),
            save_snapshot: self.snapshot || config::snapshot_from_env(env_snapshot.as_deref()),
            with_table: self.with_table,
            html_file: self.html,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match cli.command.unwrap_or(Command::Build(cli.build)) {
        Command::Build(args) => match run_build(&args.into_config()) {
            Ok(outcome) => {
                println!("COUNTS: {}", outcome.log.counts.summary());
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("error: {:#}", e);
                ExitCode::from(1)
            }
        },
        Command::History(args) => match run_history(&args.input, &args.dir, args.date) {
            Ok(report) => {
                println!("OK: history.csv & trends.json updated for {}", report.date);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("error: {:#}", e);
                ExitCode::from(1)
            }
        },
    }
}
