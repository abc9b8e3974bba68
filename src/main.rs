use anyhow::{anyhow, bail, Context};
use clap::{Parser, Subcommand};
use colored::*;
use interview_drills::catalog::{self, RunSummary, Topic};
use interview_drills::config::suggest_topic;
use interview_drills::{DrillConfig, Reporter};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "drills")]
#[command(version)]
#[command(about = "Run interview data-structure and embedded drills", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    verbose: bool,

    #[arg(long, global = true)]
    no_color: bool,

    /// Seed for randomly generated inputs
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// TOML or JSON config file
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "List topics and their demos")]
    List {
        #[arg(long)]
        json: bool,
    },

    #[command(about = "Run the demos of one or more topics")]
    Run {
        #[arg(required = true)]
        topics: Vec<String>,
    },

    #[command(about = "Run every configured topic")]
    All,

    #[command(about = "Print the effective configuration as TOML")]
    Config,
}

fn load_config(cli: &Cli) -> anyhow::Result<DrillConfig> {
    let mut config = match &cli.config {
        Some(path) => DrillConfig::load(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => DrillConfig::default(),
    };
    config.apply_overrides(cli.no_color, cli.verbose, cli.seed);
    Ok(config)
}

fn list(json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&catalog::summaries())?);
        return Ok(());
    }
    for topic in Topic::ALL {
        let names: Vec<_> = topic.demos().iter().map(|d| d.name).collect();
        println!("{:<16} {}", topic.name().bold(), topic.title());
        println!("{:<16} {}", "", names.join(", ").dimmed());
    }
    Ok(())
}

fn parse_topic(name: &str) -> anyhow::Result<Topic> {
    name.parse::<Topic>().map_err(|err| match suggest_topic(name) {
        Some(suggestion) => anyhow!("{err} (did you mean '{suggestion}'?)"),
        None => err.into(),
    })
}

fn finish(summary: RunSummary) -> anyhow::Result<()> {
    println!();
    if summary.is_success() {
        println!("{} {} demos passed", "ok:".green().bold(), summary.passed);
        Ok(())
    } else {
        bail!(
            "{} of {} demos failed: {}",
            summary.failed.len(),
            summary.passed + summary.failed.len(),
            summary.failed.join(", ")
        )
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;
    let mut reporter = Reporter::new(&config.output);

    match cli.command {
        Commands::List { json } => list(json),
        Commands::Run { topics } => {
            let mut selected = topics
                .iter()
                .map(|name| parse_topic(name))
                .collect::<anyhow::Result<Vec<_>>>()?;
            selected.sort();
            selected.dedup();
            finish(catalog::run_topics(&selected, &mut reporter, &config))
        }
        Commands::All => finish(catalog::run_configured(&mut reporter, &config)?),
        Commands::Config => {
            print!("{}", config.to_toml_string()?);
            Ok(())
        }
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}
