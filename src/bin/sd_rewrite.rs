//! Loads a static-data catalog file and saves it back in canonical form.
//!
//! Rewriting normalizes whatever the input file looked like: properties land
//! in binding-table order, every kind in tag order, records in id order.
//! With no output path the file is rewritten in place. A short JSON summary
//! goes to stdout; codec diagnostics go to stderr.

use anyhow::{Context, Result, bail};
use serde_json::json;
use staticden::{Kind, StaticCatalog};
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
        .load(&args.input)
        .with_context(|| format!("loading catalog {}", args.input.display()))?;

    let out = args.output.unwrap_or_else(|| args.input.clone());
    catalog
        .save(&out)
        .with_context(|| format!("saving catalog {}", out.display()))?;

    let summary = json!({
        "input": args.input.display().to_string(),
        "output": out.display().to_string(),
        "records": catalog.len(),
        "counts": {
            (Kind::Type1.as_str()): catalog.count(Kind::Type1),
            (Kind::Type2.as_str()): catalog.count(Kind::Type2),
        },
    });
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}

struct CliArgs {
    input: PathBuf,
    output: Option<PathBuf>,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut positional = Vec::new();
        for arg in env::args().skip(1) {
            match arg.as_str() {
                "--help" | "-h" => bail!("usage: sd-rewrite <catalog-file> [out-file]"),
                other if other.starts_with("--") => bail!("unknown flag '{other}'"),
                _ => positional.push(PathBuf::from(arg)),
            }
        }

        let mut positional = positional.into_iter();
        let Some(input) = positional.next() else {
            bail!("usage: sd-rewrite <catalog-file> [out-file]");
        };
        let output = positional.next();
        if positional.next().is_some() {
            bail!("usage: sd-rewrite <catalog-file> [out-file]");
        }
        Ok(CliArgs { input, output })
    }
}

fn install_subscriber() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
