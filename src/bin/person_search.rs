use anyhow::Result;
use clap::{Parser, Subcommand};
use person_search::{
    repl,
    search::QueryRanker,
    seed::{initialize, SeedOptions, DEFAULT_RECORD_COUNT},
    PersonSearchEngine,
};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "person-search", version, about = "Ranked starts-with search over a generated person directory")]
struct Cli {
    /// SQLite file holding the person table; created and populated if missing
    #[arg(long, env = "PERSON_SEARCH_DB_PATH", default_value = "data/people.sqlite")]
    db_path: PathBuf,

    /// Number of synthetic people to generate when creating the store
    #[arg(long, env = "PERSON_SEARCH_RECORD_COUNT", default_value_t = DEFAULT_RECORD_COUNT)]
    count: usize,

    /// Seed for the synthetic data generator
    #[arg(long, env = "PERSON_SEARCH_SEED")]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Interactive search loop (default). Type :q to leave.
    Repl,
    /// Run a single query and exit
    Search {
        #[arg(required = true, num_args = 1..)]
        terms: Vec<String>,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show record count for the store
    Stats,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("person_search=info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let options = SeedOptions {
        count: cli.count,
        seed: cli.seed,
    };
    let (engine, _) = initialize(&cli.db_path, &options)?;

    match cli.command.unwrap_or(Command::Repl) {
        Command::Repl => cmd_repl(&engine),
        Command::Search { terms, json } => cmd_search(&engine, &terms.join(" "), json),
        Command::Stats => cmd_stats(&engine, &cli.db_path),
    }
}

fn load_ranker(engine: &PersonSearchEngine) -> Result<QueryRanker> {
    let started = Instant::now();
    let ranker = QueryRanker::load(&engine.store())?;
    info!(
        records = ranker.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Loaded people into ranker"
    );
    Ok(ranker)
}

fn cmd_repl(engine: &PersonSearchEngine) -> Result<()> {
    let ranker = load_ranker(engine)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let answered = repl::run(&ranker, stdin.lock(), &mut out)?;
    info!(queries = answered, "Session ended");
    Ok(())
}

fn cmd_search(engine: &PersonSearchEngine, query: &str, json: bool) -> Result<()> {
    let ranker = load_ranker(engine)?;
    let results = ranker.search(query);
    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        for result in &results {
            println!("{}", repl::format_row(result));
        }
    }
    Ok(())
}

fn cmd_stats(engine: &PersonSearchEngine, db_path: &Path) -> Result<()> {
    let output = serde_json::json!({
        "db_path": db_path.display().to_string(),
        "records": engine.store().count()?,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
