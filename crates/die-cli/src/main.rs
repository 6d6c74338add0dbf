//! CLI frontend for testing whether a physical die is fair.

mod commands;

use std::process;

use clap::{Parser, Subcommand};

use die_stats::Die;

#[derive(Parser)]
#[command(
    name = "dietest",
    about = "Chi-squared fairness test for physical dice",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Enter rolls one by one and get a fairness report (default)
    Test {
        /// Die to test, as a face count or tag ("6", "d20"); asked for if omitted
        #[arg(short, long, value_parser = parse_die)]
        faces: Option<Die>,

        /// Keep accepted roll lines on screen instead of erasing them
        #[arg(long)]
        no_overwrite: bool,
    },

    /// Analyze a list of rolls without prompting
    Analyze {
        /// Die to analyze, as a face count or tag ("6", "d20")
        #[arg(short, long, value_parser = parse_die)]
        faces: Die,

        /// Roll values, each between 1 and the face count
        #[arg(required = true)]
        rolls: Vec<u32>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the chi-squared critical values for every supported die
    Table,
}

/// Accepts 3, 4, 6, 8, 10, 12 or 20, with or without a leading `d`.
fn parse_die(s: &str) -> Result<Die, String> {
    Die::from_str_tag(s).map_err(|e| e.to_string())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Test {
        faces: None,
        no_overwrite: false,
    });

    let result = match command {
        Commands::Test {
            faces,
            no_overwrite,
        } => commands::test::run(faces, !no_overwrite),
        Commands::Analyze { faces, rolls, json } => commands::analyze::run(faces, &rolls, json),
        Commands::Table => commands::table::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
