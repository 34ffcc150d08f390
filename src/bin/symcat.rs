//! Command-line front end for the symbol catalog pipeline.
//!
//! `compile` turns the two input documents into an artifact, `check` lints
//! them without emitting anything, `query` runs the filter/search engine
//! against an artifact, and `categories` lists a registry. stdout carries
//! command output only; diagnostics go to stderr through `tracing`.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fs;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use symcat::{
    Catalog, CategoryId, CompileOptions, EmitFormat, REFERENCE_CATEGORIES, REFERENCE_MAPPING,
    RawDocuments, audit_catalog, compile_with, lint_documents, read_artifact, write_artifact,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "symcat")]
#[command(about = "Compile and query symbol catalogs", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log only warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile the input documents into a catalog artifact
    Compile {
        #[command(flatten)]
        inputs: InputArgs,

        /// Destination file; replaced only when compilation succeeds
        #[arg(short, long)]
        out: PathBuf,

        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,

        /// Reject empty symbol names
        #[arg(long)]
        strict: bool,
    },
    /// Report every problem in the input documents without emitting
    Check {
        #[command(flatten)]
        inputs: InputArgs,
    },
    /// Print the symbols visible for the given filters
    Query {
        /// Compiled JSON artifact
        #[arg(long)]
        artifact: PathBuf,

        /// Active category filter (repeatable, comma separated)
        #[arg(long = "category", value_delimiter = ',')]
        categories: Vec<String>,

        /// Restriction scope used when no filter is active (repeatable)
        #[arg(long, value_delimiter = ',')]
        scope: Vec<String>,

        /// Case-insensitive substring to search for
        #[arg(long, default_value = "")]
        search: String,

        /// Print a JSON array instead of one name per line
        #[arg(long)]
        json: bool,
    },
    /// List registry entries as id<TAB>label<TAB>icon
    Categories {
        /// Compiled JSON artifact; defaults to the bundled reference catalog
        #[arg(long)]
        artifact: Option<PathBuf>,
    },
}

#[derive(clap::Args)]
struct InputArgs {
    /// Category registry document (defaults to the bundled reference registry)
    #[arg(long)]
    categories: Option<PathBuf>,

    /// Category to symbol mapping document (defaults to the bundled reference mapping)
    #[arg(long)]
    mapping: Option<PathBuf>,
}

impl InputArgs {
    fn load(&self) -> Result<RawDocuments> {
        let categories = read_or_embedded(self.categories.as_deref(), REFERENCE_CATEGORIES)?;
        let mapping = read_or_embedded(self.mapping.as_deref(), REFERENCE_MAPPING)?;
        RawDocuments::parse(&categories, &mapping).with_context(|| {
            format!(
                "parsing {} and {}",
                describe(self.categories.as_deref()),
                describe(self.mapping.as_deref())
            )
        })
    }
}

fn read_or_embedded(path: Option<&Path>, embedded: &'static str) -> Result<Cow<'static, str>> {
    match path {
        Some(path) => fs::read_to_string(path)
            .map(Cow::Owned)
            .with_context(|| format!("reading {}", path.display())),
        None => Ok(Cow::Borrowed(embedded)),
    }
}

fn describe(path: Option<&Path>) -> String {
    path.map_or_else(|| "<bundled>".to_string(), |path| path.display().to_string())
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Rust,
}

impl From<Format> for EmitFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => EmitFormat::Json,
            Format::Rust => EmitFormat::RustSource,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    if let Err(err) = run(cli.command) {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool, quiet: bool) {
    let default_level = if verbose {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Compile {
            inputs,
            out,
            format,
            strict,
        } => compile(&inputs, &out, format, strict),
        Commands::Check { inputs } => check(&inputs),
        Commands::Query {
            artifact,
            categories,
            scope,
            search,
            json,
        } => query(&artifact, categories, scope, &search, json),
        Commands::Categories { artifact } => list_categories(artifact.as_deref()),
    }
}

fn compile(inputs: &InputArgs, out: &Path, format: Format, strict: bool) -> Result<()> {
    let raw = inputs.load()?;
    let catalog = compile_with(&raw, CompileOptions { strict }).context("compiling catalog")?;
    write_artifact(&catalog, out, format.into())
        .with_context(|| format!("writing {}", out.display()))?;
    info!(
        symbols = catalog.len(),
        categories = catalog.categories().len(),
        out = %out.display(),
        "catalog compiled"
    );
    Ok(())
}

fn check(inputs: &InputArgs) -> Result<()> {
    let raw = inputs.load()?;
    let problems = lint_documents(&raw);
    if problems.is_empty() {
        info!(
            categories = raw.categories.len(),
            mapped_categories = raw.mapping.len(),
            "documents are consistent"
        );
        return Ok(());
    }
    for problem in &problems {
        warn!("{problem}");
    }
    bail!("{} problem(s) found in input documents", problems.len())
}

fn query(
    artifact: &Path,
    categories: Vec<String>,
    scope: Vec<String>,
    search: &str,
    json: bool,
) -> Result<()> {
    let catalog = load_artifact(artifact)?;
    let active: BTreeSet<CategoryId> = categories.into_iter().map(CategoryId::from).collect();
    let scope: Vec<CategoryId> = scope.into_iter().map(CategoryId::from).collect();

    for id in active.iter().chain(scope.iter()) {
        if catalog.category_descriptor(id.as_str()).is_none() {
            warn!(category = %id, "unknown category selects no symbols");
        }
    }

    let names: Vec<&str> = catalog
        .visible_symbols(&active, &scope, search)
        .into_iter()
        .map(|symbol| symbol.name())
        .collect();

    if json {
        println!("{}", serde_json::to_string(&names)?);
    } else {
        for name in names {
            println!("{name}");
        }
    }
    Ok(())
}

fn list_categories(artifact: Option<&Path>) -> Result<()> {
    let owned;
    let catalog: &Catalog = match artifact {
        Some(path) => {
            owned = load_artifact(path)?;
            &owned
        }
        None => symcat::bundled().context("compiling bundled reference catalog")?,
    };
    for descriptor in catalog.categories() {
        println!(
            "{}\t{}\t{}",
            descriptor.identifier, descriptor.label, descriptor.icon
        );
    }
    Ok(())
}

fn load_artifact(path: &Path) -> Result<Catalog> {
    let catalog = read_artifact(path).with_context(|| format!("reading {}", path.display()))?;
    let problems = audit_catalog(&catalog);
    if !problems.is_empty() {
        bail!(
            "artifact {} is inconsistent:\n{}",
            path.display(),
            problems.join("\n")
        );
    }
    Ok(catalog)
}
