//! Loads a static-data catalog file and prints its records as JSON.
//!
//! The dump is the inspection surface for catalog files: every kind's
//! records in id order plus per-kind counts, as a single JSON object on
//! stdout. Codec diagnostics go to stderr through the tracing subscriber, so
//! piping stdout stays clean.

use anyhow::{Context, Result, bail};
use serde_json::json;
use staticden::{Kind, StaticCatalog, Type1Record, Type2Record};
use std::env;
use std::path::PathBuf;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    install_subscriber();
    let args = CliArgs::parse()?;

    let mut catalog = StaticCatalog::new();
    catalog
        .load(&args.path)
        .with_context(|| format!("loading catalog {}", args.path.display()))?;

    let type1: Vec<&Type1Record> = catalog.records::<Type1Record>().collect();
    let type2: Vec<&Type2Record> = catalog.records::<Type2Record>().collect();
    let dump = json!({
        "path": args.path.display().to_string(),
        "loaded": catalog.is_loaded(),
        "counts": {
            (Kind::Type1.as_str()): catalog.count(Kind::Type1),
            (Kind::Type2.as_str()): catalog.count(Kind::Type2),
        },
        (Kind::Type1.as_str()): type1,
        (Kind::Type2.as_str()): type2,
    });

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&dump)?
    } else {
        serde_json::to_string(&dump)?
    };
    println!("{rendered}");
    Ok(())
}

struct CliArgs {
    path: PathBuf,
    pretty: bool,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut path = None;
        let mut pretty = false;

        for arg in env::args().skip(1) {
            match arg.as_str() {
                "--pretty" => pretty = true,
                "--help" | "-h" => bail!("usage: sd-dump [--pretty] <catalog-file>"),
                other if other.starts_with("--") => bail!("unknown flag '{other}'"),
                _ => {
                    if path.replace(PathBuf::from(&arg)).is_some() {
                        bail!("only one catalog file may be given");
                    }
                }
            }
        }

        let Some(path) = path else {
            bail!("usage: sd-dump [--pretty] <catalog-file>");
        };
        Ok(CliArgs { path, pretty })
    }
}

fn install_subscriber() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
