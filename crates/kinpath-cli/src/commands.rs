//! CLI command implementations.

use crate::config::{KinConfig, CONFIG_DIR, CONFIG_FILE};
use crate::ExportFormat;
use colored::Colorize;
use kinpath_core::{FamilyDataset, PersonId};
use kinpath_graph::{FamilyGraph, QueryContext, QueryOutcome};
use kinpath_server::{Session, StdioServer};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// A loaded project: configuration plus the dataset it points at.
struct Project {
    config: KinConfig,
    data_path: PathBuf,
    dataset: FamilyDataset,
}

impl Project {
    /// Loads the config in the current directory and its dataset.
    fn open(data: Option<&Path>) -> Result<Self> {
        let root = std::env::current_dir()?;
        let config = KinConfig::load(&root)?;
        let data_path = config.resolve_data(&root, data);

        if !data_path.exists() {
            return Err(format!(
                "no family data at {} (run `kinpath init` or pass --data)",
                data_path.display()
            )
            .into());
        }

        let dataset = FamilyDataset::load(&data_path)?;
        info!(
            "Loaded {} people from {}",
            dataset.people().len(),
            data_path.display()
        );

        let report = dataset.load_report();
        if !report.is_clean() {
            eprintln!(
                "{} skipped {} people and {} relationships while loading",
                "⚠".yellow(),
                report.skipped_people,
                report.skipped_relationships
            );
        }

        Ok(Self {
            config,
            data_path,
            dataset,
        })
    }

    fn query(&self) -> Result<QueryContext<'_>> {
        Ok(QueryContext::new(&self.dataset)?)
    }

    /// Accepts a person ID or an exact (case-insensitive) name.
    fn resolve_target(&self, target: &str) -> Result<PersonId> {
        if let Ok(id) = target.trim().parse::<PersonId>() {
            return Ok(id);
        }

        let matches: Vec<_> = self
            .dataset
            .people()
            .iter()
            .filter(|p| p.name.eq_ignore_ascii_case(target.trim()))
            .collect();

        match matches.as_slice() {
            [person] => Ok(person.id),
            [] => Err(format!("no person named \"{}\"", target).into()),
            _ => Err(format!(
                "\"{}\" matches {} people, use an ID instead",
                target,
                matches.len()
            )
            .into()),
        }
    }
}

/// Initialize Kinpath in a directory.
pub fn init(path: &Path) -> Result<()> {
    let kinpath_dir = path.join(CONFIG_DIR);

    if kinpath_dir.exists() {
        println!("{} Already initialized", "✓".green());
        return Ok(());
    }

    fs::create_dir_all(&kinpath_dir)?;

    let config_path = kinpath_dir.join(CONFIG_FILE);
    let config = KinConfig::default();
    fs::write(&config_path, serde_json::to_string_pretty(&config)?)?;

    println!("{} Initialized Kinpath in {}", "✓".green(), path.display());
    println!(
        "  Put your family in {} and run {}",
        config.data.display().to_string().cyan(),
        "kinpath people".cyan()
    );

    Ok(())
}

/// List everyone but self.
pub fn people(data: Option<&Path>) -> Result<()> {
    let project = Project::open(data)?;

    let others: Vec<_> = project.dataset.others().collect();
    if others.is_empty() {
        println!("No one else is in the family yet");
        return Ok(());
    }

    for person in others {
        println!("  {:>4}  {}", person.id.to_string().dimmed(), person.name);
    }

    Ok(())
}

/// Describe the path from self to a target.
pub fn path(data: Option<&Path>, target: &str, json: bool) -> Result<()> {
    let project = Project::open(data)?;
    let target = project.resolve_target(target)?;
    let ctx = project.query()?;

    let outcome = ctx.select(target);

    if json {
        let frame = ctx.render(&outcome, project.config.surface_width, &project.config.layout);
        println!("{}", serde_json::to_string_pretty(&frame)?);
        return Ok(());
    }

    match &outcome {
        QueryOutcome::Found(path) => {
            println!("{}", ctx.describe(&outcome));
            println!(
                "  {} {}",
                "Steps:".dimmed(),
                path.edge_count().to_string().cyan()
            );
        }
        QueryOutcome::NoPath => println!("{}", ctx.describe(&outcome).yellow()),
    }

    Ok(())
}

/// Print the render frame for the path to a target.
pub fn layout(data: Option<&Path>, target: &str, width: Option<f64>) -> Result<()> {
    let project = Project::open(data)?;
    let target = project.resolve_target(target)?;

    let mut session = Session::new(project.dataset)
        .with_layout(project.config.layout)
        .with_surface_width(width.unwrap_or(project.config.surface_width));

    let frame = session.try_select(Some(target))?;
    println!("{}", serde_json::to_string_pretty(&frame)?);

    Ok(())
}

/// Show dataset status and statistics.
pub fn status(data: Option<&Path>) -> Result<()> {
    let project = Project::open(data)?;
    let stats = FamilyGraph::from_dataset(&project.dataset).stats();
    let report = project.dataset.load_report();

    let self_name = match stats.self_id {
        Some(id) => project
            .dataset
            .person(id)
            .map(|p| format!("{} ({})", p.name, id))
            .unwrap_or_else(|| format!("{} (not in people)", id)),
        None => "not set".red().to_string(),
    };

    println!("{}", "Kinpath Status".cyan().bold());
    println!();
    println!("  {} {}", "Data:".dimmed(), project.data_path.display());
    println!("  {} {}", "You:".dimmed(), self_name);
    println!("  {} {}", "People:".dimmed(), stats.people);
    println!("  {} {}", "Relationships:".dimmed(), stats.relationships);
    println!("  {} {}", "Family groups:".dimmed(), stats.components);
    if !report.is_clean() {
        println!(
            "  {} {} people, {} relationships",
            "Skipped:".dimmed(),
            report.skipped_people,
            report.skipped_relationships
        );
    }

    Ok(())
}

/// Export the whole family as JSON or Graphviz.
pub fn export(data: Option<&Path>, format: ExportFormat, output: Option<&Path>) -> Result<()> {
    let project = Project::open(data)?;
    let graph = FamilyGraph::from_dataset(&project.dataset);

    let text = match format {
        ExportFormat::Dot => graph.to_dot(),
        ExportFormat::Json => {
            let people: Vec<_> = graph.people().collect();
            let export = serde_json::json!({
                "version": "1.0",
                "stats": graph.stats(),
                "people": people,
                "edges": graph.export_edges(),
            });
            serde_json::to_string_pretty(&export)?
        }
    };

    match output {
        Some(path) => {
            fs::write(path, text)?;
            println!("{} Exported to {}", "✓".green(), path.display());
        }
        None => println!("{}", text),
    }

    Ok(())
}

/// Serve JSON-RPC on stdio until stdin closes.
pub fn serve(data: Option<&Path>) -> Result<()> {
    let project = Project::open(data)?;

    eprintln!("{} Serving JSON-RPC on stdio", "✓".green());
    eprintln!("  Close stdin to stop");

    let session = Session::new(project.dataset)
        .with_layout(project.config.layout)
        .with_surface_width(project.config.surface_width);
    StdioServer::new(session).run_stdio()?;

    Ok(())
}
