//! Folio CLI — the portfolio from the terminal.
//!
//! Calls `folio-core` directly; everything is rendered from the built-in
//! dataset, so there is nothing to configure and nothing to fetch.

use clap::{Parser, Subcommand};
use tracing::debug;

use folio_core::filter::{filter_projects, FilterState, TagFilter};
use folio_core::types::{Skill, SkillGroup, Tag};

/// Folio CLI — browse the portfolio from the terminal.
#[derive(Parser)]
#[command(name = "folio", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output as JSON instead of human-readable text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List projects, optionally filtered by search text and tag
    Projects {
        /// Free-text search over titles and blurbs
        query: Option<String>,

        /// Only projects carrying this tag (e.g. "AI", "Robotics")
        #[arg(long)]
        tag: Option<String>,
    },
    /// Show the skill list, grouped by area
    Skills,
    /// Show work and education history
    Experience,
    /// Show name, tagline, and links
    Profile,
    /// Show a summary of the built-in dataset
    Status,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("folio=warn".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let portfolio = folio_core::portfolio();
    debug!(
        projects = portfolio.projects.len(),
        skills = portfolio.skills.len(),
        "Dataset ready"
    );

    match cli.command {
        Commands::Projects { query, tag } => {
            let tag = match tag {
                Some(ref raw) => match raw.parse::<Tag>() {
                    Ok(tag) => TagFilter::Only(tag),
                    Err(e) => {
                        eprintln!("{e}");
                        std::process::exit(1);
                    }
                },
                None => TagFilter::All,
            };
            let state = FilterState { query: query.unwrap_or_default(), tag };
            let matches = filter_projects(&portfolio.projects, &state);

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&matches).unwrap());
            } else if matches.is_empty() {
                // Zero matches is a normal outcome, not an error
                eprintln!("No projects match");
            } else {
                for p in &matches {
                    let tags: Vec<&str> = p.tags.iter().map(|t| t.label()).collect();
                    println!("{:<34} [{}]", p.title, tags.join(", "));
                    println!("    {}", p.blurb);
                }
                eprintln!("\n{} of {} projects", matches.len(), portfolio.projects.len());
            }
        }
        Commands::Skills => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&portfolio.skills).unwrap());
            } else {
                for group in SkillGroup::ALL {
                    let in_group: Vec<&Skill> =
                        portfolio.skills.iter().filter(|s| s.group == group).collect();
                    if in_group.is_empty() {
                        continue;
                    }
                    println!("{}", group.label());
                    for s in in_group {
                        let bar = "#".repeat(s.level as usize);
                        println!("  {:<24} {:<5} {}/5", s.name, bar, s.level);
                    }
                    println!();
                }
            }
        }
        Commands::Experience => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&portfolio.experience).unwrap());
            } else {
                for e in &portfolio.experience {
                    println!("{}", e.role);
                    println!("{} \u{00b7} {}", e.org, e.period);
                    for point in &e.highlights {
                        println!("  - {point}");
                    }
                    println!();
                }
            }
        }
        Commands::Profile => {
            let p = &portfolio.profile;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(p).unwrap());
            } else {
                println!("Name:      {}", p.name);
                println!("Tagline:   {}", p.tagline);
                println!("Location:  {}", p.location);
                println!("Email:     {}", p.email);
                println!("GitHub:    {}", p.github);
                println!("LinkedIn:  {}", p.linkedin);
                println!("Resume:    {}", p.resume_url);
            }
        }
        Commands::Status => {
            if cli.json {
                let output = serde_json::json!({
                    "name": portfolio.profile.name,
                    "projects": portfolio.projects.len(),
                    "skills": portfolio.skills.len(),
                    "experience": portfolio.experience.len(),
                    "tags": Tag::ALL.len(),
                });
                println!("{}", serde_json::to_string_pretty(&output).unwrap());
            } else {
                println!("Portfolio:   {}", portfolio.profile.name);
                println!("Projects:    {}", portfolio.projects.len());
                println!("Skills:      {}", portfolio.skills.len());
                println!("Experience:  {}", portfolio.experience.len());
                println!("Tags:        {}", Tag::ALL.len());

                println!("\nProjects per tag:");
                for tag in Tag::ALL {
                    let count =
                        portfolio.projects.iter().filter(|p| p.tags.contains(&tag)).count();
                    println!("  {:<12} {}", tag.label(), count);
                }
            }
        }
    }
}
