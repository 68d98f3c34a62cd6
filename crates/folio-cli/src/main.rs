//! Folio CLI - synthetic project catalog for portfolio sites

use anyhow::Context;
use clap::{Parser, Subcommand};
use folio_core::catalog::{Catalog, CatalogSummary, ProjectQuery};
use folio_core::config::Config;
use folio_core::export::{self, ExportFormat};
use folio_core::generator::{Category, ProjectGenerator, ProjectRecord, ProjectStatus, batch_rng};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, long_about = None)]
#[command(about = "Synthetic project catalog for portfolio sites")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format (text, json or jsonl)
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
    Jsonl,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate synthetic project records
    Generate {
        /// Number of records
        #[arg(short = 'n', long, default_value_t = 10)]
        count: usize,
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
        /// Write to a file instead of stdout (.json or .jsonl)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// List template tokens that had no candidates
        #[arg(long)]
        show_unresolved: bool,
    },

    /// Browse a page of the padded catalog
    Browse {
        #[command(flatten)]
        source: CatalogArgs,
        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: usize,
        /// Records per page (defaults to catalog.per_page)
        #[arg(long)]
        per_page: Option<usize>,
        /// Filter by category (e.g. ai-ml, devops, infrastructure, social-impact)
        #[arg(short, long)]
        category: Option<String>,
        /// Filter by status (completed, in-progress, maintained)
        #[arg(short, long)]
        status: Option<String>,
        /// Only featured projects
        #[arg(long)]
        featured: bool,
        /// Filter by AI usage
        #[arg(long)]
        ai_powered: Option<bool>,
        /// Filter by technology name
        #[arg(short, long)]
        tech: Option<String>,
        /// Search title, description and technologies
        #[arg(long)]
        search: Option<String>,
        /// Show featured projects first
        #[arg(long)]
        featured_first: bool,
    },

    /// Show one project from the padded catalog
    Show {
        /// Project ID
        id: String,
        #[command(flatten)]
        source: CatalogArgs,
    },

    /// Summarize the padded catalog
    Summary {
        #[command(flatten)]
        source: CatalogArgs,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(clap::Args)]
struct CatalogArgs {
    /// Catalog size after padding (defaults to catalog.total)
    #[arg(long)]
    total: Option<usize>,
    /// Seed for reproducible padding (defaults to generator.seed)
    #[arg(long)]
    seed: Option<u64>,
    /// JSON or JSONL file of curated records (defaults to catalog.curated_path)
    #[arg(long)]
    curated: Option<PathBuf>,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Get a configuration value
    Get { key: String },
    /// Set a configuration value
    Set { key: String, value: String },
    /// List all configuration values
    List,
    /// Reset configuration to defaults
    Reset,
    /// Show config file path
    Path,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize tracing on stderr so JSON output on stdout stays clean
    let default_directive = if cli.quiet {
        "folio_core=error"
    } else {
        "folio_core=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(default_directive.parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(cli) {
        report_error(&err);
        std::process::exit(1);
    }
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Generate {
            count,
            seed,
            output,
            show_unresolved,
        } => cmd_generate(
            count,
            seed,
            output.as_deref(),
            show_unresolved,
            cli.format,
            cli.quiet,
        ),

        Commands::Browse {
            source,
            page,
            per_page,
            category,
            status,
            featured,
            ai_powered,
            tech,
            search,
            featured_first,
        } => {
            let mut query = ProjectQuery::new();
            if let Some(category) = category {
                query = query.with_category(category.parse::<Category>()?);
            }
            if let Some(status) = status {
                query = query.with_status(status.parse::<ProjectStatus>()?);
            }
            if featured {
                query = query.featured_only();
            }
            if let Some(ai_powered) = ai_powered {
                query = query.with_ai_powered(ai_powered);
            }
            if let Some(tech) = tech {
                query = query.with_technology(tech);
            }
            if let Some(search) = search {
                query = query.with_search(search);
            }
            if featured_first {
                query = query.featured_first();
            }
            cmd_browse(&source, &query, page, per_page, cli.format)
        }

        Commands::Show { id, source } => cmd_show(&source, &id, cli.format),

        Commands::Summary { source } => cmd_summary(&source, cli.format),

        Commands::Config { action } => cmd_config(action, cli.quiet),
    }
}

fn report_error(err: &anyhow::Error) {
    match err.downcast_ref::<folio_core::Error>() {
        Some(core) => {
            eprintln!("error[{}]: {}", core.code(), core);
            if let Some(suggestion) = core.suggestion() {
                eprintln!("  try: {}", suggestion);
            }
        }
        None => eprintln!("error: {:#}", err),
    }
}

// ============================================================================
// Command Implementations
// ============================================================================

fn cmd_generate(
    count: usize,
    seed: Option<u64>,
    output: Option<&Path>,
    show_unresolved: bool,
    format: OutputFormat,
    quiet: bool,
) -> anyhow::Result<()> {
    let config = Config::load()?;
    let generator = ProjectGenerator::new(config.generator.clone())?;
    let seed = seed.or(config.generator.seed);
    debug!(count, ?seed, "Running generate");

    let mut rng = batch_rng(seed);
    let report = generator.generate_with_report(count, &mut rng)?;

    if show_unresolved {
        for token in &report.unresolved {
            eprintln!(
                "unresolved {{{}}} in {} ({})",
                token.token, token.record_id, token.field
            );
        }
    }

    if let Some(path) = output {
        let written = export::save(path, &report.records)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        if !quiet {
            println!("Wrote {} records to {}", written, path.display());
        }
        return Ok(());
    }

    print_records(&report.records, format)
}

fn cmd_browse(
    source: &CatalogArgs,
    query: &ProjectQuery,
    page: usize,
    per_page: Option<usize>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let config = Config::load()?;
    let catalog = build_catalog(&config, source)?;
    let per_page = per_page.unwrap_or(config.catalog.per_page);
    let page = catalog.page(query, page, per_page)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&page)?);
        }
        OutputFormat::Jsonl => {
            let items: Vec<ProjectRecord> = page.items.iter().map(|r| (*r).clone()).collect();
            print_records(&items, format)?;
        }
        OutputFormat::Text => {
            if catalog.is_empty() {
                println!("No projects in the catalog.");
                return Ok(());
            }
            println!(
                "Page {}/{} ({} matching projects)",
                page.page, page.total_pages, page.total
            );
            println!();
            for record in &page.items {
                print_row(record);
            }
            if page.has_previous() || page.has_next() {
                println!();
            }
            if page.has_previous() {
                println!("Previous: --page {}", page.page - 1);
            }
            if page.has_next() {
                println!("Next: --page {}", page.page + 1);
            }
        }
    }
    Ok(())
}

fn cmd_show(source: &CatalogArgs, id: &str, format: OutputFormat) -> anyhow::Result<()> {
    let config = Config::load()?;
    let catalog = build_catalog(&config, source)?;
    let record = catalog.get(id)?;

    match format {
        OutputFormat::Json | OutputFormat::Jsonl => {
            println!("{}", serde_json::to_string_pretty(record)?);
        }
        OutputFormat::Text => print_detail(record),
    }
    Ok(())
}

fn cmd_summary(source: &CatalogArgs, format: OutputFormat) -> anyhow::Result<()> {
    let config = Config::load()?;
    let catalog = build_catalog(&config, source)?;
    let summary = catalog.summary();

    match format {
        OutputFormat::Json | OutputFormat::Jsonl => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Text => print_summary(&summary),
    }
    Ok(())
}

fn cmd_config(action: ConfigAction, quiet: bool) -> anyhow::Result<()> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            let value = config.get(&key)?;
            println!("{}", value);
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, &value)?;
            config.save()?;
            if !quiet {
                println!("Set {} = {}", key, value);
            }
        }
        ConfigAction::List => {
            let config = Config::load()?;
            let items = config.list()?;
            for (key, value) in items {
                println!("{} = {}", key, value);
            }
        }
        ConfigAction::Reset => {
            Config::reset()?;
            if !quiet {
                println!("Configuration reset to defaults.");
            }
        }
        ConfigAction::Path => {
            let path = Config::config_path()?;
            println!("{}", path.display());
        }
    }
    Ok(())
}

// ============================================================================
// Helpers
// ============================================================================

fn build_catalog(config: &Config, source: &CatalogArgs) -> anyhow::Result<Catalog> {
    let generator = ProjectGenerator::new(config.generator.clone())?;

    let curated_path = source
        .curated
        .clone()
        .or_else(|| config.catalog.curated_path.clone());
    let curated = match curated_path {
        Some(path) => export::load(&path)
            .with_context(|| format!("Failed to load curated projects from {}", path.display()))?,
        None => Vec::new(),
    };

    let total = source.total.unwrap_or(config.catalog.total);
    let mut rng = batch_rng(source.seed.or(config.generator.seed));
    Ok(Catalog::padded(curated, total, &generator, &mut rng)?)
}

fn print_records(records: &[ProjectRecord], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json | OutputFormat::Jsonl => {
            let export_format = if format == OutputFormat::Json {
                ExportFormat::Json
            } else {
                ExportFormat::Jsonl
            };
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            export::write_records(records, &mut out, export_format)?;
        }
        OutputFormat::Text => {
            for record in records {
                print_row(record);
            }
        }
    }
    Ok(())
}

fn print_row(record: &ProjectRecord) {
    let marker = if record.featured { "*" } else { " " };
    println!(
        "{} {:<12} {:<15} {:<12} {}",
        marker,
        record.id,
        record.category.label(),
        record.status.to_string(),
        record.title
    );
}

fn print_detail(record: &ProjectRecord) {
    println!("{}", record.title);
    println!("{}", "=".repeat(record.title.chars().count()));
    println!("  ID:           {}", record.id);
    println!("  Category:     {}", record.category);
    println!("  Status:       {}", record.status);
    println!("  Featured:     {}", if record.featured { "yes" } else { "no" });
    println!("  AI powered:   {}", if record.ai_powered { "yes" } else { "no" });
    let technologies: Vec<&str> = record.technologies.iter().map(String::as_str).collect();
    println!("  Technologies: {}", technologies.join(", "));

    for (label, url) in [
        ("GitHub", &record.github_url),
        ("Live", &record.live_url),
        ("Demo", &record.demo_url),
    ] {
        if let Some(url) = url {
            println!("  {:<13} {}", format!("{}:", label), url);
        }
    }

    let impact = &record.impact;
    if !impact.is_empty() {
        println!();
        println!("  Impact:");
        if let Some(users) = impact.users {
            println!("    Users:       {}", users);
        }
        if let Some(performance) = &impact.performance {
            println!("    Performance: {}", performance);
        }
        if let Some(savings) = &impact.savings {
            println!("    Savings:     {}", savings);
        }
        if let Some(reliability) = &impact.reliability {
            println!("    Reliability: {}", reliability);
        }
    }

    if record.has_repository() {
        let s = record.stats;
        println!();
        println!(
            "  Stats: {} stars, {} forks, {} commits, {} contributors",
            s.stars, s.forks, s.commits, s.contributors
        );
    }

    if !record.long_description.is_empty() {
        println!();
        println!("{}", record.long_description);
    }
}

fn print_summary(summary: &CatalogSummary) {
    println!("Catalog Summary");
    println!("===============");
    println!();
    println!("  Total projects:      {}", summary.total);
    println!("  Featured:            {}", summary.featured);
    println!("  AI powered:          {}", summary.ai_powered);
    println!("  With repository:     {}", summary.with_repository);
    println!("  Unique technologies: {}", summary.unique_technologies);
    println!("  Total stars:         {}", summary.total_stars);
    println!();
    println!("  By category:");
    for (category, count) in &summary.by_category {
        println!("    {:<15} {}", category.label(), count);
    }
    println!();
    println!("  By status:");
    for (status, count) in &summary.by_status {
        println!("    {:<15} {}", status.to_string(), count);
    }
}
