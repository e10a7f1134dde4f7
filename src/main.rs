use anyhow::{anyhow, bail, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use colored::*;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use vitalrs::config::AppConfig;
use vitalrs::cycles::compute_biorhythms;
use vitalrs::display;
use vitalrs::export::{self, ExportFormat};
use vitalrs::group::{compute_group, generate_group_recommendations, GroupBiorhythmData};
use vitalrs::logging::{init_logging, LogLevel};
use vitalrs::models::{BirthProfile, CycleKind, MAX_TRACKED_PEOPLE};
use vitalrs::recommendations::{daily_recommendations, heritage_recommendation};
use vitalrs::state::classify_state;
use vitalrs::store::PeopleStore;

/// VitalRS - Biorhythm Analysis CLI
///
/// Computes physical, emotional and intellectual cycles from a birth date,
/// classifies the values into descriptive bands and compares tracked people.
#[derive(Parser)]
#[command(name = "vitalrs")]
#[command(author = "VitalRS Contributors")]
#[command(version)]
#[command(about = "Biorhythm Analysis CLI", long_about = None)]
struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase verbosity of output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Whose biorhythms to compute: an ad-hoc birth date or a stored person
#[derive(Args)]
struct Subject {
    /// Birth date (YYYY-MM-DD)
    #[arg(short, long, conflicts_with = "person")]
    birth: Option<NaiveDate>,

    /// Name or id of a stored person
    #[arg(short, long)]
    person: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show cycle values, bands and recommendations
    Show {
        #[command(flatten)]
        subject: Subject,

        /// Reference date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// Print the 31-day chart window
    Chart {
        #[command(flatten)]
        subject: Subject,

        /// Reference date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Write an SVG chart to this path instead of printing a table
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Compare the active people on one cycle
    Compare {
        /// Reference date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Cycle to compare (physical, emotional, intellectual)
        #[arg(short = 't', long, default_value = "physical")]
        cycle: CycleKind,

        /// Write an SVG comparison chart to this path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Manage the comparison roster
    People {
        #[command(subcommand)]
        command: PeopleCommands,
    },

    /// Export chart data
    Export {
        #[command(flatten)]
        subject: Subject,

        /// Reference date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Export format (csv, json)
        #[arg(short, long, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Export the active-people comparison instead of one person
        #[arg(short, long)]
        group: bool,

        /// Cycle for the comparison export
        #[arg(short = 't', long, default_value = "physical")]
        cycle: CycleKind,
    },

    /// Show or initialize configuration
    Config {
        /// Write a default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

#[derive(Subcommand)]
enum PeopleCommands {
    /// Add a person to the roster
    Add {
        /// Display name
        name: String,

        /// Birth date (YYYY-MM-DD)
        #[arg(short, long)]
        birth: NaiveDate,

        /// Birth time, kept for completeness
        #[arg(long)]
        birth_time: Option<String>,

        /// Birth place
        #[arg(long)]
        place: Option<String>,

        /// Heritage key for cultural recommendations
        #[arg(long)]
        heritage: Option<String>,

        /// Include in comparison immediately
        #[arg(short, long)]
        active: bool,
    },

    /// List the roster
    List,

    /// Remove a person
    Remove { person: String },

    /// Include a person in comparison
    Activate { person: String },

    /// Exclude a person from comparison
    Deactivate { person: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(AppConfig::default_path);
    let mut config = AppConfig::load_or_default(&config_path)?;
    if cli.verbose > 0 {
        config.log.level = LogLevel::from_verbosity(cli.verbose);
    }
    init_logging(&config.log)?;

    match cli.command {
        Commands::Show { subject, date } => cmd_show(&config, subject, date),
        Commands::Chart {
            subject,
            date,
            output,
        } => cmd_chart(&config, subject, date, output),
        Commands::Compare {
            date,
            cycle,
            output,
        } => cmd_compare(&config, date, cycle, output),
        Commands::People { command } => cmd_people(&config, command),
        Commands::Export {
            subject,
            date,
            format,
            output,
            group,
            cycle,
        } => cmd_export(&config, subject, date, format, output, group, cycle),
        Commands::Config { init } => cmd_config(config, &config_path, init),
    }
}

/// Resolve the subject of a single-person command to a birth profile
fn resolve_profile(config: &AppConfig, subject: &Subject) -> Result<BirthProfile> {
    match (&subject.birth, &subject.person) {
        (Some(birth), _) => Ok(BirthProfile::new("you", *birth)),
        (None, Some(key)) => {
            let store = PeopleStore::open(config.people_path())?;
            store
                .find(key)
                .map(|p| p.profile.clone())
                .ok_or_else(|| anyhow!("No person named \"{}\" in the roster", key))
        }
        (None, None) => bail!("Provide either --birth or --person"),
    }
}

fn render_emphasis(text: &str) -> String {
    // **name** segments come from the recommendation rule tables
    text.split("**")
        .enumerate()
        .map(|(i, segment)| {
            if i % 2 == 1 {
                segment.bold().to_string()
            } else {
                segment.to_string()
            }
        })
        .collect()
}

fn cmd_show(config: &AppConfig, subject: Subject, date: Option<NaiveDate>) -> Result<()> {
    let profile = resolve_profile(config, &subject)?;
    let data = compute_biorhythms(profile.birth_date, date);

    let shown = data.selected.unwrap_or(data.today);
    let state = classify_state(&shown, Some(&data.yesterday));

    println!(
        "{}",
        format!("Biorhythms for {}", profile.name).cyan().bold()
    );
    if let Some(reference) = date {
        println!("  Reference date: {}", reference);
    }
    println!("{}", display::state_table(&state));

    println!("{}", "Recommendations".cyan().bold());
    for recommendation in daily_recommendations(&state) {
        println!(
            "  {} {}",
            format!("{}:", recommendation.title).bold(),
            recommendation.description
        );
    }

    if let Some(heritage) = &profile.heritage {
        println!();
        println!("  {}", heritage_recommendation(heritage, &state).italic());
    }

    Ok(())
}

fn cmd_chart(
    config: &AppConfig,
    subject: Subject,
    date: Option<NaiveDate>,
    output: Option<PathBuf>,
) -> Result<()> {
    let profile = resolve_profile(config, &subject)?;
    let data = compute_biorhythms(profile.birth_date, date);

    match output {
        Some(path) => {
            render_single_chart(config, &data, &path)?;
            println!("{} {}", "✓ Chart written to".green(), path.display());
        }
        None => println!("{}", display::chart_table(&data.chart)),
    }

    Ok(())
}

#[cfg(feature = "charts")]
fn render_single_chart(
    config: &AppConfig,
    data: &vitalrs::BiorhythmData,
    path: &std::path::Path,
) -> Result<()> {
    vitalrs::chart::render_chart(
        data,
        path,
        config.settings.chart.width,
        config.settings.chart.height,
    )
}

#[cfg(not(feature = "charts"))]
fn render_single_chart(
    _config: &AppConfig,
    _data: &vitalrs::BiorhythmData,
    _path: &std::path::Path,
) -> Result<()> {
    bail!("SVG output requires building with the `charts` feature")
}

#[cfg(feature = "charts")]
fn render_comparison_chart(
    config: &AppConfig,
    group: &GroupBiorhythmData,
    cycle: CycleKind,
    path: &std::path::Path,
) -> Result<()> {
    vitalrs::chart::render_group_chart(
        group,
        cycle,
        path,
        config.settings.chart.width,
        config.settings.chart.height,
    )
}

#[cfg(not(feature = "charts"))]
fn render_comparison_chart(
    _config: &AppConfig,
    _group: &GroupBiorhythmData,
    _cycle: CycleKind,
    _path: &std::path::Path,
) -> Result<()> {
    bail!("SVG output requires building with the `charts` feature")
}

fn cmd_compare(
    config: &AppConfig,
    date: Option<NaiveDate>,
    cycle: CycleKind,
    output: Option<PathBuf>,
) -> Result<()> {
    let store = PeopleStore::open(config.people_path())?;
    let people = store.active_people();
    if people.is_empty() {
        bail!("No active people — add and activate someone with `vitalrs people`");
    }

    let group = compute_group(&people, date, cycle);

    println!(
        "{}",
        format!("{} comparison ({} people)", cycle.label(), people.len())
            .cyan()
            .bold()
    );
    println!("{}", display::group_table(&group, cycle));

    let recommendations = generate_group_recommendations(&group.people, cycle);
    if !recommendations.is_empty() {
        println!("{}", "Combined recommendations".cyan().bold());
        for recommendation in &recommendations {
            println!("  • {}", render_emphasis(recommendation));
        }
    }

    if let Some(path) = output {
        render_comparison_chart(config, &group, cycle, &path)?;
        println!("{} {}", "✓ Chart written to".green(), path.display());
    }

    Ok(())
}

fn cmd_people(config: &AppConfig, command: PeopleCommands) -> Result<()> {
    let mut store = PeopleStore::open(config.people_path())?;

    match command {
        PeopleCommands::Add {
            name,
            birth,
            birth_time,
            place,
            heritage,
            active,
        } => {
            let profile = BirthProfile {
                name: name.clone(),
                birth_date: birth,
                birth_time,
                birth_place: place,
                heritage,
            };
            store
                .add(profile)
                .map_err(|e| anyhow!(vitalrs::VitalError::from(e).user_message()))?;
            if active {
                store.set_active(&name, true)?;
            }
            store.save()?;
            println!("{} {}", "✓ Added".green(), name);
        }

        PeopleCommands::List => {
            if store.people().is_empty() {
                println!("No people yet (max {}).", MAX_TRACKED_PEOPLE);
            }
            for person in store.people() {
                let marker = if store.is_active(person) {
                    "active".green().to_string()
                } else {
                    "inactive".dimmed().to_string()
                };
                println!(
                    "  {} {} (born {}, {}) [{}]",
                    person.color,
                    person.name().bold(),
                    person.profile.birth_date,
                    marker,
                    person.id
                );
            }
        }

        PeopleCommands::Remove { person } => {
            let removed = store
                .remove(&person)
                .map_err(|e| anyhow!(vitalrs::VitalError::from(e).user_message()))?;
            store.save()?;
            println!("{} {}", "✓ Removed".green(), removed.name());
        }

        PeopleCommands::Activate { person } => {
            store
                .set_active(&person, true)
                .map_err(|e| anyhow!(vitalrs::VitalError::from(e).user_message()))?;
            store.save()?;
            println!("{} {}", "✓ Activated".green(), person);
        }

        PeopleCommands::Deactivate { person } => {
            store
                .set_active(&person, false)
                .map_err(|e| anyhow!(vitalrs::VitalError::from(e).user_message()))?;
            store.save()?;
            println!("{} {}", "✓ Deactivated".green(), person);
        }
    }

    Ok(())
}

fn cmd_export(
    config: &AppConfig,
    subject: Subject,
    date: Option<NaiveDate>,
    format: ExportFormat,
    output: Option<PathBuf>,
    group: bool,
    cycle: CycleKind,
) -> Result<()> {
    let mut writer: Box<dyn Write> = match &output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(std::io::stdout()),
    };

    if group {
        let store = PeopleStore::open(config.people_path())?;
        let people = store.active_people();
        if people.is_empty() {
            bail!("No active people — add and activate someone with `vitalrs people`");
        }
        let data = compute_group(&people, date, cycle);
        match format {
            ExportFormat::Csv => export::csv::write_combined_chart(&mut writer, &data.combined_chart)?,
            ExportFormat::Json => export::json::write_group(&mut writer, &data)?,
        }
    } else {
        let profile = resolve_profile(config, &subject)?;
        let data = compute_biorhythms(profile.birth_date, date);
        match format {
            ExportFormat::Csv => export::csv::write_chart(&mut writer, &data.chart)?,
            ExportFormat::Json => export::json::write_biorhythms(&mut writer, &data)?,
        }
    }

    if let Some(path) = output {
        println!("{} {}", "✓ Exported to".green(), path.display());
    }

    Ok(())
}

fn cmd_config(mut config: AppConfig, path: &PathBuf, init: bool) -> Result<()> {
    if init && !path.exists() {
        config.save(path)?;
        println!("{} {}", "✓ Wrote default config to".green(), path.display());
        return Ok(());
    }

    println!("Config file: {}", path.display());
    println!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}
