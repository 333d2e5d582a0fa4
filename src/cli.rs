use crate::builder::SvgBuilder;
use crate::config::{Config, GalaxyArm, Project, load_config};
use crate::data::{Contributions, Languages, Stats};
use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "gpsvg", version, about = "Galaxy profile SVG generator")]
pub struct Args {
    /// Config YAML file
    #[arg(short = 'c', long = "config", default_value = "config.yml")]
    pub config: PathBuf,

    /// Output directory for the generated SVGs
    #[arg(short = 'o', long = "output-dir", default_value = "assets/generated")]
    pub output_dir: PathBuf,

    /// Data snapshot YAML (stats / languages / contributions), as produced
    /// by the fetch step
    #[arg(short = 'd', long = "data")]
    pub data: Option<PathBuf>,

    /// Render with built-in demo data (no data snapshot needed)
    #[arg(long)]
    pub demo: bool,
}

/// The three bundles the fetch collaborator hands over. Anything absent
/// falls back to empty defaults; sparse data is never an error here.
#[derive(Debug, Default, Deserialize)]
pub struct DataSnapshot {
    #[serde(default)]
    pub stats: Stats,
    #[serde(default)]
    pub languages: Languages,
    #[serde(default)]
    pub contributions: Contributions,
}

pub fn run() -> Result<()> {
    tracing_subscriber::fmt().with_target(false).init();
    let args = Args::parse();

    let config = resolve_config(&args)?;
    info!(username = %config.username, "generating profile SVGs");

    let snapshot = if args.demo {
        info!("demo mode: using built-in stats, languages, and contributions");
        demo_snapshot()
    } else {
        match &args.data {
            Some(path) => load_snapshot(path)?,
            None => {
                warn!("no data snapshot supplied; rendering with empty data");
                DataSnapshot::default()
            }
        }
    };
    info!(
        languages = snapshot.languages.len(),
        total = snapshot.contributions.total,
        streak = snapshot.contributions.streak,
        "data loaded"
    );

    let builder = SvgBuilder::new(
        config,
        snapshot.stats,
        snapshot.languages,
        snapshot.contributions,
    );
    let artifacts = builder.render_all()?;

    std::fs::create_dir_all(&args.output_dir).with_context(|| {
        format!("failed to create output dir {}", args.output_dir.display())
    })?;
    for (name, svg) in &artifacts {
        let path = args.output_dir.join(format!("{name}.svg"));
        std::fs::write(&path, svg)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), "wrote artifact");
    }
    info!("done: {} SVGs generated", artifacts.len());
    Ok(())
}

fn resolve_config(args: &Args) -> Result<Config> {
    if args.config.exists() {
        return load_config(&args.config);
    }
    if args.demo {
        info!("demo mode: config not found, using built-in demo config");
        return Ok(demo_config());
    }
    anyhow::bail!(
        "config {} not found (copy config.example.yml and edit it, or pass --demo)",
        args.config.display()
    )
}

fn load_snapshot(path: &Path) -> Result<DataSnapshot> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read data snapshot {}", path.display()))?;
    serde_yaml::from_str(&raw)
        .with_context(|| format!("failed to parse data snapshot {}", path.display()))
}

pub fn demo_config() -> Config {
    let mut config = Config::new("demo-pilot");
    config.tagline = Some("charting code across the void".to_string());
    config.galaxy_arms = vec![
        GalaxyArm {
            name: "core systems".to_string(),
            angle: None,
        },
        GalaxyArm {
            name: "tooling".to_string(),
            angle: None,
        },
        GalaxyArm {
            name: "experiments".to_string(),
            angle: Some(210.0),
        },
    ];
    config.projects = vec![
        Project {
            name: "orbit-db".to_string(),
            arm: Some("core systems".to_string()),
            magnitude: Some(5.0),
        },
        Project {
            name: "relay".to_string(),
            arm: Some("core systems".to_string()),
            magnitude: Some(3.0),
        },
        Project {
            name: "starchart".to_string(),
            arm: Some("tooling".to_string()),
            magnitude: Some(2.0),
        },
        Project {
            name: "probe".to_string(),
            arm: Some("experiments".to_string()),
            magnitude: None,
        },
    ];
    config
}

pub fn demo_snapshot() -> DataSnapshot {
    let stats = [
        ("commits", 1847),
        ("stars", 342),
        ("prs", 156),
        ("issues", 89),
        ("repos", 42),
    ]
    .into_iter()
    .map(|(name, value)| (name.to_string(), value))
    .collect();

    let languages: Languages = [
        ("Python", 450_000),
        ("TypeScript", 380_000),
        ("JavaScript", 120_000),
        ("Go", 95_000),
        ("Rust", 45_000),
        ("Shell", 30_000),
        ("Dockerfile", 15_000),
        ("CSS", 10_000),
    ]
    .into_iter()
    .map(|(name, bytes)| (name.to_string(), bytes))
    .collect();

    // 52 weekly counts with quiet weeks mixed in.
    let counts = (0..52u64)
        .map(|week| match week % 7 {
            3 => 0,
            rest => 40 + week + rest * 11,
        })
        .collect();

    DataSnapshot {
        stats,
        languages,
        contributions: Contributions {
            counts,
            total: 4523,
            streak: 5,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_snapshot_fills_the_weekly_window() {
        let snapshot = demo_snapshot();
        assert_eq!(snapshot.contributions.counts.len(), 52);
        assert!(snapshot.contributions.counts.iter().any(|count| *count == 0));
        assert_eq!(snapshot.stats.get("commits"), 1847);
        assert_eq!(snapshot.languages.len(), 8);
    }

    #[test]
    fn demo_inputs_render_cleanly() {
        let snapshot = demo_snapshot();
        let builder = SvgBuilder::new(
            demo_config(),
            snapshot.stats,
            snapshot.languages,
            snapshot.contributions,
        );
        let artifacts = builder.render_all().unwrap();
        assert_eq!(artifacts.len(), 5);
    }

    #[test]
    fn snapshot_parses_partial_documents() {
        let snapshot: DataSnapshot =
            serde_yaml::from_str("stats:\n  commits: 10\n").unwrap();
        assert_eq!(snapshot.stats.get("commits"), 10);
        assert!(snapshot.languages.is_empty());
        assert_eq!(snapshot.contributions.total, 0);
    }
}
