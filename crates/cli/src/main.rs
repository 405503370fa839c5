use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod settings;

use qosgen_shared::config;
use qosgen_shared::{write_profiles, LinkParams, TuningParams};

#[derive(Parser)]
#[command(
    name = "qosgen",
    about = "generates pub/sub QoS profiles tuned for lossy wireless links"
)]
struct Args {
    /// Link parameters as key=value tokens: r=<rate_hz> u=<payload_bytes>
    /// T=<throughput_bytes_per_sec> w=<utilization>. All four are required.
    #[arg(value_name = "KEY=VALUE")]
    params: Vec<String>,

    /// Output directory for the generated profiles (default: current dir)
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Output file-name prefix (default: "profile")
    #[arg(long)]
    prefix: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

const USAGE: &str =
    "usage: qosgen r=<rate_hz> u=<payload_bytes> T=<throughput_bytes_per_sec> w=<utilization>";

#[derive(Debug, PartialEq, thiserror::Error)]
enum ArgError {
    #[error("expected key=value, got \"{0}\"")]
    Malformed(String),
    #[error("unknown key \"{0}\" (expected r, u, T or w)")]
    UnknownKey(String),
    #[error("duplicate key \"{0}\"")]
    DuplicateKey(&'static str),
    #[error("invalid value for {key}: \"{value}\"")]
    BadValue { key: &'static str, value: String },
    #[error("missing required key \"{0}\"")]
    MissingKey(&'static str),
}

fn set<T: std::str::FromStr>(
    slot: &mut Option<T>,
    key: &'static str,
    value: &str,
) -> Result<(), ArgError> {
    if slot.is_some() {
        return Err(ArgError::DuplicateKey(key));
    }
    let parsed = value.parse().map_err(|_| ArgError::BadValue {
        key,
        value: value.to_string(),
    })?;
    *slot = Some(parsed);
    Ok(())
}

/// Parse the positional `key=value` tokens into a typed parameter struct.
/// Unknown keys are rejected rather than ignored.
fn parse_link_params(tokens: &[String]) -> Result<LinkParams, ArgError> {
    let mut rate: Option<f64> = None;
    let mut payload: Option<u64> = None;
    let mut throughput: Option<f64> = None;
    let mut utilization: Option<f64> = None;

    for token in tokens {
        let (key, value) = token
            .split_once('=')
            .ok_or_else(|| ArgError::Malformed(token.clone()))?;
        match key {
            "r" => set(&mut rate, "r", value)?,
            "u" => set(&mut payload, "u", value)?,
            "T" => set(&mut throughput, "T", value)?,
            "w" => set(&mut utilization, "w", value)?,
            other => return Err(ArgError::UnknownKey(other.to_string())),
        }
    }

    Ok(LinkParams {
        rate_hz: rate.ok_or(ArgError::MissingKey("r"))?,
        payload_bytes: payload.ok_or(ArgError::MissingKey("u"))?,
        throughput_bps: throughput.ok_or(ArgError::MissingKey("T"))?,
        utilization: utilization.ok_or(ArgError::MissingKey("w"))?,
    })
}

fn main() -> Result<()> {
    let args = Args::parse();

    let directive = format!("qosgen={}", args.log_level);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive.parse()?))
        .with_writer(std::io::stderr)
        .init();

    let link = match parse_link_params(&args.params) {
        Ok(link) => link,
        Err(e) => {
            eprintln!("{USAGE}");
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    tracing::debug!(?link, "parsed link parameters");

    let tuning = match TuningParams::derive(link) {
        Ok(tuning) => tuning,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    let file_settings = settings::FileSettings::load();
    let out_dir = args
        .out_dir
        .or(file_settings.out_dir)
        .unwrap_or_else(|| PathBuf::from("."));
    let prefix = args
        .prefix
        .or(file_settings.prefix)
        .unwrap_or_else(|| config::DEFAULT_PREFIX.to_string());

    let (pub_path, sub_path) = write_profiles(&tuning, &out_dir, &prefix)?;

    println!("wrote publisher profile {}", pub_path.display());
    println!("wrote subscriber profile {}", sub_path.display());
    println!(
        "history depth {} samples, heartbeat period {} ns",
        tuning.history_depth, tuning.heartbeat_period_ns
    );
    Ok(())
}
