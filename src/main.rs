use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Args, Debug)]
struct Inputs {
    /// Candidate profile (YAML)
    #[arg(short, long)]
    profile: PathBuf,

    /// Job postings (YAML list)
    #[arg(short, long)]
    jobs: PathBuf,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List jobs ranked for the profile
    Rank {
        #[command(flatten)]
        inputs: Inputs,

        /// Show only the first N matches
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Print matches as JSON
        #[arg(long, conflicts_with = "tsv")]
        json: bool,

        /// Print matches as tab-separated values
        #[arg(long)]
        tsv: bool,
    },
    /// Show the full breakdown of one ranked job
    Explain {
        #[command(flatten)]
        inputs: Inputs,

        /// Position of the job in the ranked list (1-based, as shown by rank)
        index: usize,

        /// Print the match as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "job-match")]
#[command(about = "Explainable job matching for a candidate profile", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/job-match/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Commands {
    fn inputs(&self) -> &Inputs {
        match self {
            Commands::Rank { inputs, .. } | Commands::Explain { inputs, .. } => inputs,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    job_match::logging::init_tracing(cli.verbose);

    let command = cli.command;
    let start_time = Instant::now();

    // Load config
    let config = match job_match::config::load_config(cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate scoring config at startup
    let scoring = config.effective_scoring();
    if let Err(errors) = job_match::scoring::validate_scoring(&scoring) {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let profile = match job_match::config::load_profile(&command.inputs().profile) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Profile error: {:#}", e);
            std::process::exit(EXIT_INPUT);
        }
    };
    let jobs = match job_match::config::load_jobs(&command.inputs().jobs) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Jobs error: {:#}", e);
            std::process::exit(EXIT_INPUT);
        }
    };

    tracing::info!(profile = %profile.id, jobs = jobs.len(), "loaded inputs");

    let now = Utc::now();
    let engine = job_match::MatchEngine::new(scoring);
    let ranked = engine.feed(&profile, &jobs, now);

    tracing::debug!(elapsed = ?start_time.elapsed(), "ranked {} jobs", ranked.len());

    let use_colors = job_match::output::should_use_colors();

    match command {
        Commands::Rank {
            limit, json, tsv, ..
        } => {
            let shown = &ranked[..limit.unwrap_or(ranked.len()).min(ranked.len())];

            if json {
                print_json(shown);
            } else if tsv {
                println!("{}", job_match::output::format_tsv(shown));
            } else {
                println!("{}", job_match::output::format_feed_table(shown, use_colors));
            }
        }
        Commands::Explain { index, json, .. } => {
            // Validate index bounds (1-based)
            if index < 1 || index > ranked.len() {
                eprintln!(
                    "Invalid index {}. Must be between 1 and {}.",
                    index,
                    ranked.len()
                );
                std::process::exit(EXIT_INPUT);
            }

            let selected = &ranked[index - 1];
            if json {
                print_json(selected);
            } else {
                println!(
                    "{}",
                    job_match::output::format_match_detail(selected, now, use_colors)
                );
            }
        }
    }

    std::process::exit(EXIT_SUCCESS);
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Failed to serialize output: {}", e);
            std::process::exit(EXIT_INPUT);
        }
    }
}
