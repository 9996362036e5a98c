use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod extract;
mod input;
mod provenance;

use extract::ExtractArgs;

#[derive(Parser)]
#[command(name = "keyhole")]
#[command(about = "Recover outer boundaries and holes from flattened keyhole loops")]
struct Cmd {
    /// Debug-level logs (per accepted hole)
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Extract holes from every input loop and write a JSON result
    Extract(ExtractArgs),
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    match cmd.action {
        Action::Extract(args) => run_extract(args),
        Action::Report => report(),
    }
}

fn run_extract(args: ExtractArgs) -> Result<()> {
    if let Some(eps) = args.eps {
        if !(eps.is_finite() && eps > 0.0) {
            bail!("--eps must be a positive finite number, got {eps}");
        }
    }
    tracing::info!(input = %args.input.display(), out = %args.out.display(), "extract");
    let polygons = input::read_polygons(&args.input)?;
    let result = extract::process(polygons, &args);
    let holes: usize = result.polygons.iter().map(|p| p.holes.len()).sum();
    tracing::info!(
        polygons = result.polygons.len(),
        holes,
        skipped = result.skipped.len(),
        "extract_done"
    );

    if let Some(parent) = args.out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(&args.out, serde_json::to_vec_pretty(&result)?)
        .with_context(|| format!("writing {}", args.out.display()))?;

    let payload = provenance::Payload {
        params: serde_json::to_value(&args)?,
        polygons: result.polygons.len(),
        skipped: result.skipped.len(),
    };
    let prov_path = provenance::write_sidecar(&args.out, payload)?;
    tracing::debug!(path = %prov_path.display(), "provenance_written");
    Ok(())
}

fn report() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&provenance::header())?);
    Ok(())
}
