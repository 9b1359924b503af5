//! `sdk-marshal` - inspect how the marshaller sees hints and payloads.
//!
//! ```bash
//! sdk-marshal classify "Union[Unset, list['Pet']]"
//! sdk-marshal snake-case UUIDValue
//! sdk-marshal module-path --service billing ApiBillingEntity
//! echo '{"name":"rex"}' | sdk-marshal decode --hint Pet --service petstore
//! ```

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sdk_marshal::hint::{classify, parse_hint};
use sdk_marshal::{snake_case, Marshaller, ModelRegistry, RegistryConfig};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "sdk-marshal", version)]
#[command(about = "Inspect type hints, module paths and wire payloads", long_about = None)]
struct Args {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Registry config (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the shape a type hint classifies as
    Classify { hint: String },
    /// Print the module file name of a model class
    SnakeCase { name: String },
    /// Print the module path a model class resolves from
    ModulePath {
        #[arg(long)]
        service: String,
        type_name: String,
    },
    /// Decode a JSON payload against a hint with no SDK packages installed
    Decode {
        #[arg(long)]
        hint: String,
        #[arg(long, default_value = "default")]
        service: String,
        /// JSON file; stdin when omitted
        file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    let default_level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .init();

    let config = match &args.config {
        Some(path) => RegistryConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => RegistryConfig::default(),
    };

    match args.command {
        Command::Classify { hint } => {
            if let Err(err) = parse_hint(&hint) {
                debug!(%err, "hint does not parse");
            }
            println!("{}", classify(&hint));
        }
        Command::SnakeCase { name } => println!("{}", snake_case(&name)),
        Command::ModulePath { service, type_name } => {
            println!("{}", config.module_path(&service, &type_name));
        }
        Command::Decode {
            hint,
            service,
            file,
        } => {
            let text = match file {
                Some(path) => fs::read_to_string(&path)
                    .with_context(|| format!("reading {}", path.display()))?,
                None => {
                    let mut text = String::new();
                    io::stdin().read_to_string(&mut text).context("reading stdin")?;
                    text
                }
            };
            let marshaller = Marshaller::new(Arc::new(ModelRegistry::with_config(config)));
            let value = marshaller.from_json_str(&text, &hint, &service)?;
            let kind = if value.contains_raw() { "raw" } else { "typed" };
            println!("{kind}");
            println!("{}", serde_json::to_string_pretty(&marshaller.serialize(&value)?)?);
        }
    }
    Ok(())
}
