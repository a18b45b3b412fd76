use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use patchwork::{PatchConfig, PatchSettings, node::Value};
use patchwork_demo::{InMemoryPersons, Person, PersonService};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "persons")]
#[command(about = "Inspect and patch the sample person store")]
#[command(version)]
struct Args {
    /// Patch settings file (TOML, or JSON by extension)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all persons
    List,
    /// Show one person
    Get { id: i32 },
    /// Apply a partial JSON document to a person
    Patch { id: i32, document: String },
    /// Add a person from a JSON document
    Post { document: String },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "patchwork_core=info,patchwork_demo=info".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = load_config(args.settings.as_deref())?;
    let mut service = PersonService::with_config(InMemoryPersons::seeded(), config);

    match args.command {
        Commands::List => print_json(service.list()),
        Commands::Get { id } => match service.get_by_id(id) {
            Some(person) => print_json(person),
            None => bail!("person {id} not found"),
        },
        Commands::Patch { id, document } => {
            let document: Value =
                serde_json::from_str(&document).context("patch document is not valid JSON")?;
            match service.patch(id, &document)? {
                Some(person) => print_json(person),
                None => bail!("person {id} not found"),
            }
        }
        Commands::Post { document } => {
            let person: Person =
                serde_json::from_str(&document).context("person document is not valid JSON")?;
            print_json(service.post(person)?)
        }
    }
}

fn load_config(path: Option<&std::path::Path>) -> Result<PatchConfig> {
    let settings = match path {
        Some(path) => PatchSettings::load(path)?,
        None => PatchSettings::default(),
    };

    Ok(settings.with_env_overrides()?.into())
}

fn print_json(value: &(impl Serialize + ?Sized)) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
