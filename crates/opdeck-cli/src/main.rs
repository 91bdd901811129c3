use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use opdeck_discovery::{
    discover_and_register, DiscoveryConfig, ModeRegistrar, Roster, NAME_TABLE_BUDGET,
};
use opdeck_mode_sdk::{ModeDescriptor, ModeRegistry};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "opdeck-cli",
    about = "Dry-run planner for operating-mode registration"
)]
struct Args {
    /// Roster file declaring the candidate modes (JSON).
    #[arg(long)]
    roster: PathBuf,

    /// Additional namespace prefixes to exclude from the pass.
    #[arg(long = "deny", value_name = "PREFIX")]
    deny_prefixes: Vec<String>,

    /// Emit the full report as JSON instead of plain text.
    #[arg(long)]
    json: bool,
}

#[derive(Default)]
struct PlanRegistrar {
    lines: Vec<String>,
}

impl ModeRegistrar for PlanRegistrar {
    fn register(&mut self, name: &str, descriptor: &ModeDescriptor) {
        self.lines.push(format!("{name} ({})", descriptor.id));
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
        .ok();

    let args = Args::parse();
    let roster = Roster::from_path(&args.roster)
        .with_context(|| format!("failed to load roster {}", args.roster.display()))?;
    let registry = ModeRegistry::new();
    roster.install(&registry);

    let mut config = DiscoveryConfig::default();
    config.deny_prefixes.extend(args.deny_prefixes);

    let mut registrar = PlanRegistrar::default();
    let report = discover_and_register(config, &registry, &mut registrar);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for line in &registrar.lines {
            println!("{line}");
        }
        println!(
            "name table: {} / {NAME_TABLE_BUDGET} bytes",
            report.name_table_len
        );
        for diagnostic in &report.diagnostics {
            println!("note: {diagnostic:?}");
        }
    }
    Ok(())
}
