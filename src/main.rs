use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod alumni;
mod db;
mod error;
mod models;
mod profile;
mod recommend;
mod report;
mod similarity;

#[derive(Parser)]
#[command(name = "achievement-recommender")]
#[command(about = "Achievement recommendations from alumni success profiles", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct GlobalArgs {
    /// Postgres connection string for the achievement records
    #[arg(long, env = "DATABASE_URL", global = true, hide_env_values = true)]
    database_url: Option<String>,
    #[arg(long, default_value_t = 5, global = true)]
    max_connections: u32,
    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Markdown,
}

#[derive(Subcommand)]
enum Commands {
    /// Create or upgrade the database schema
    InitDb,
    /// Load demo students and achievements
    Seed,
    /// Import achievements from a CSV file
    Import {
        #[arg(long)]
        csv: PathBuf,
    },
    /// Recommend next achievements for a student
    Recommend {
        student_id: String,
        /// Target career path; defaults to the best predicted path
        #[arg(long)]
        career_goal: Option<String>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Show the analyzed profile of a student
    Profile { student_id: String },
    /// Find alumni with similar achievement profiles
    Similar {
        student_id: String,
        #[arg(long, default_value_t = similarity::DEFAULT_TOP_K)]
        top_k: usize,
    },
    /// List career paths and how many alumni follow each
    CareerPaths,
    /// List alumni profiles
    Alumni {
        #[arg(long)]
        career_path: Option<String>,
    },
    /// Summary statistics over the alumni profiles
    Stats,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.global.verbose);

    match cli.command {
        Commands::InitDb => {
            let pool = connect(&cli.global).await?;
            db::init_db(&pool).await?;
            println!("Schema ready.");
        }
        Commands::Seed => {
            let pool = connect(&cli.global).await?;
            db::seed(&pool).await?;
            println!("Seed data inserted.");
        }
        Commands::Import { csv } => {
            let pool = connect(&cli.global).await?;
            let inserted = db::import_csv(&pool, &csv).await?;
            println!("Inserted {inserted} achievements from {}.", csv.display());
        }
        Commands::Recommend {
            student_id,
            career_goal,
            format,
            out,
        } => {
            let pool = connect(&cli.global).await?;
            let student = db::fetch_student(&pool, &student_id).await?;

            match recommend::recommend_for(&student_id, student.as_ref(), career_goal.as_deref()) {
                Ok(result) => {
                    let rendered = match format {
                        OutputFormat::Json => serde_json::to_string_pretty(&result)?,
                        OutputFormat::Markdown => report::build_report(&result),
                    };
                    emit(&rendered, out.as_deref())?;
                }
                Err(err) => return not_found(&err),
            }
        }
        Commands::Profile { student_id } => {
            let pool = connect(&cli.global).await?;
            match db::fetch_student(&pool, &student_id).await? {
                Some(student) => print_json(&profile::analyze(&student))?,
                None => return not_found(&error::EngineError::StudentNotFound { student_id }),
            }
        }
        Commands::Similar { student_id, top_k } => {
            let pool = connect(&cli.global).await?;
            match db::fetch_student(&pool, &student_id).await? {
                Some(student) => {
                    let profile = profile::analyze(&student);
                    print_json(&similarity::similar_alumni_result(&profile, top_k))?;
                }
                None => return not_found(&error::EngineError::StudentNotFound { student_id }),
            }
        }
        Commands::CareerPaths => print_json(&alumni::career_path_listing())?,
        Commands::Alumni { career_path } => {
            print_json(&alumni::alumni_listing(career_path.as_deref()))?
        }
        Commands::Stats => print_json(&alumni::corpus_stats())?,
    }

    Ok(ExitCode::SUCCESS)
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("achievement_recommender={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn connect(global: &GlobalArgs) -> anyhow::Result<PgPool> {
    let database_url = global
        .database_url
        .as_deref()
        .context("DATABASE_URL must be set to a production Postgres instance")?;

    let pool = PgPoolOptions::new()
        .max_connections(global.max_connections)
        .connect(database_url)
        .await
        .context("failed to connect to Postgres")?;

    info!(max_connections = global.max_connections, "connected to Postgres");
    Ok(pool)
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn emit(rendered: &str, out: Option<&Path>) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Recommendations written to {}.", path.display());
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

fn not_found(err: &error::EngineError) -> anyhow::Result<ExitCode> {
    warn!(student_id = err.student_id(), "{err}");
    print_json(err)?;
    Ok(ExitCode::FAILURE)
}
