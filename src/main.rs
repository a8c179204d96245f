use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use color_eyre::eyre::{bail, WrapErr};
use log::{error, info};
use smarty_footnotes::config::Settings;
use smarty_footnotes::record::{build_records, sort_records, Record};
use smarty_rust_sdk::us_street_api::candidate::Candidate;
use tracing_error::ErrorLayer;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = install_tracing() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    }

    if let Err(e) = run() {
        error!("Error: {:?}", e);
        std::process::exit(1);
    }
}

fn install_tracing() -> color_eyre::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(ErrorLayer::default())
        .try_init()?;
    color_eyre::install()
}

#[tracing::instrument]
fn run() -> color_eyre::Result<()> {
    let settings = Settings::from_env()?;
    info!("loading candidates from [{}]", settings.candidates_path.display());
    let candidates = load_candidates(&settings.candidates_path)?;
    if candidates.is_empty() {
        bail!("no candidates found in [{}]", settings.candidates_path.display());
    }

    let total = candidates.len();
    let records = build_records(&candidates, &settings);
    info!("decoded [{}/{total}] candidates, saving report to [{}]", records.len(), settings.report_path.display());
    save_records(records, &settings.report_path)?;
    Ok(())
}

fn load_candidates(path: impl AsRef<Path>) -> color_eyre::Result<Vec<Candidate>> {
    let path = path.as_ref();
    let file = File::open(path).wrap_err_with(|| format!("cannot open [{}]", path.display()))?;
    let candidates: Vec<Candidate> = serde_json::from_reader(BufReader::new(file))
        .wrap_err_with(|| format!("[{}] is not a JSON array of candidates", path.display()))?;
    Ok(candidates)
}

/// write result to CSV file
fn save_records(mut records: Vec<Record>, save_path: impl AsRef<Path>) -> color_eyre::Result<()> {
    sort_records(&mut records);
    if let Some(parent) = save_path.as_ref().parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut wtr = csv::Writer::from_path(save_path)?;
    for record in &records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}
