//! Portfolio CLI
//!
//! Thin wrapper around portfolio-core for checking site content before it is
//! deployed.
//!
//! ## Usage
//!
//! ```bash
//! # Check every resource in ./public/data
//! portfolio check
//!
//! # Check another directory
//! portfolio --data-dir ./site/data check
//!
//! # Print what the page would render
//! portfolio summary
//!
//! # Print the URLs the site fetches for a given base
//! portfolio paths --base https://cdn.example.com/data
//! ```

mod source;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use portfolio_core::{check_resources, load_content, PortfolioContent, Resource, SiteConfig};

use crate::source::DirSource;

/// Portfolio - check and summarise site content
#[derive(Parser)]
#[command(name = "portfolio")]
#[command(version = "0.1.0")]
#[command(about = "Check and summarise portfolio site content")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Content directory holding the five JSON resources
    #[arg(short, long, global = true, default_value = "public/data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and decode every resource, reporting each one
    Check,

    /// Load all content and print what the page would render
    Summary,

    /// Print the URL of each resource for a data base path
    Paths {
        /// Base path or URL (default: /data)
        #[arg(short, long)]
        base: Option<String>,
    },
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

async fn run_check(source: &DirSource) -> Result<()> {
    println!("Checking {}", source.dir().display());

    let report = check_resources(source).await;
    let mut failures = 0;
    for (resource, outcome) in &report {
        match outcome {
            Ok(count) => println!("  ok    {:<18} {} record(s)", resource.file_name(), count),
            Err(e) => {
                failures += 1;
                println!("  FAIL  {:<18} {}", resource.file_name(), e);
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{} of {} resources failed", failures, report.len());
    }
    println!("All {} resources OK", report.len());
    Ok(())
}

fn print_summary(content: &PortfolioContent) {
    println!("{} - {}", content.personal.name, content.personal.title);
    println!("  {}", content.personal.description);
    println!();

    println!("Skills: {} in {} categories", content.skill_count(), content.skills.len());
    for category in &content.skills {
        let names: Vec<&str> = category.skills.iter().map(|s| s.name.as_str()).collect();
        println!("  {}: {}", category.name, names.join(", "));
    }
    println!();

    println!("Experience: {}", content.experiences.len());
    for exp in &content.experiences {
        println!("  {} at {} ({})", exp.title, exp.company, exp.period);
    }
    println!();

    println!("Projects: {}", content.projects.len());
    for project in &content.projects {
        if project.technologies.is_empty() {
            println!("  {}", project.title);
        } else {
            println!("  {} [{}]", project.title, project.technologies.join(", "));
        }
    }
    println!();

    println!("Contact:");
    println!("  Email: {}", content.contact.email);
    println!("  GitHub: {}", content.contact.github_url());
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    match cli.command {
        Commands::Check => {
            let source = DirSource::new(&cli.data_dir);
            run_check(&source).await?;
        }
        Commands::Summary => {
            let source = DirSource::new(&cli.data_dir);
            let content = load_content(&source).await?;
            print_summary(&content);
        }
        Commands::Paths { base } => {
            let config = base.map(SiteConfig::with_data_base).unwrap_or_default();
            for resource in Resource::ALL {
                println!("{}", config.resource_url(resource));
            }
        }
    }

    Ok(())
}
