//! Antigravity Mover - single entrypoint for the image mover daemon.
//!
//! Watches the Antigravity brain directory and copies newly created
//! screenshots into the active project's destination folder. Runs until
//! interrupted.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use antigravity_importer::{ConsoleNotifier, MoverConfig, MoverService};

#[derive(Parser)]
#[command(
    name = "antigravity-mover",
    version,
    about = "Copies new Antigravity screenshots into the active project"
)]
struct Cli {
    /// Path to a TOML config file.
    #[arg(long, env = "ANTIGRAVITY_MOVER_CONFIG")]
    config: Option<PathBuf>,

    /// Project root to import into (repeatable; the first is the target).
    #[arg(long = "project-root")]
    project_roots: Vec<PathBuf>,

    /// Folder name created under the project root.
    #[arg(long)]
    destination_folder: Option<String>,

    /// Directory to watch instead of the default brain directory.
    #[arg(long)]
    watch_root: Option<PathBuf>,

    /// Start with importing disabled.
    #[arg(long)]
    disabled: bool,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info", env = "ANTIGRAVITY_MOVER_LOG")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let config = resolve_config(&cli)?;
    if config.project_roots.is_empty() {
        warn!("No project root configured; events will be ignored until one is set");
    }

    let mut service = MoverService::new(config, Arc::new(ConsoleNotifier));
    service.start()?;

    tokio::signal::ctrl_c().await?;
    info!("Shutting down");
    service.shutdown().await;

    Ok(())
}

/// Configure tracing. If RUST_LOG is set, it is used as-is; otherwise the
/// requested level is applied to the mover crates.
fn init_logging(level: &str) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    } else {
        EnvFilter::new(format!(
            "antigravity_cli={level},antigravity_importer={level},antigravity_watcher={level}"
        ))
    };

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Resolve the effective configuration: explicit config file, then the
/// user config directory, then defaults; CLI flags override file values.
fn resolve_config(cli: &Cli) -> anyhow::Result<MoverConfig> {
    let mut config = match &cli.config {
        Some(path) => MoverConfig::load(path)?,
        None => match default_config_path() {
            Some(path) if path.exists() => MoverConfig::load(&path)?,
            _ => MoverConfig::default(),
        },
    };

    if !cli.project_roots.is_empty() {
        config.project_roots = cli.project_roots.clone();
    }
    if let Some(folder) = &cli.destination_folder {
        config.destination_folder = folder.clone();
    }
    if let Some(root) = &cli.watch_root {
        config.watch.root = root.clone();
    }
    if cli.disabled {
        config.enabled = false;
    }

    Ok(config)
}

/// `<config-dir>/antigravity-mover/config.toml`, if a config dir exists.
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("antigravity-mover").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_flags_override_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(
            &path,
            "destination_folder = \"from-file\"\nproject_roots = [\"/file-root\"]\n",
        )
        .unwrap();

        let cli = Cli::parse_from([
            "antigravity-mover",
            "--config",
            path.to_str().unwrap(),
            "--project-root",
            "/cli-root",
            "--destination-folder",
            "from-cli",
            "--disabled",
        ]);

        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.destination_folder, "from-cli");
        assert_eq!(config.project_roots, vec![PathBuf::from("/cli-root")]);
        assert!(!config.enabled);
    }

    #[test]
    fn test_file_values_survive_without_flags() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "destination_folder = \"from-file\"\n").unwrap();

        let cli = Cli::parse_from(["antigravity-mover", "--config", path.to_str().unwrap()]);

        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.destination_folder, "from-file");
        assert!(config.enabled);
    }
}
