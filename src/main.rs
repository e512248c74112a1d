//! Kids Board - Children's achievement board
//!
//! A decorative dashboard showing each child's points, skills and gift
//! progress, with switchable color themes and animated backgrounds.

mod config;
mod dashboard;
mod roster;

use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::config::AppConfig;
use crate::dashboard::{theme, ThemeName};

/// Kids Board - children's achievement board
#[derive(Parser, Debug)]
#[command(name = "kids-board")]
#[command(about = "A themed board of children's points, skills and gift progress")]
struct Args {
    /// Configuration file (defaults to the platform config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Theme to start with, overriding the configuration
    #[arg(short, long)]
    theme: Option<String>,

    /// Directory holding avatar images and fonts
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Keep the background bubbles still
    #[arg(long)]
    no_animation: bool,

    /// List available themes and exit
    #[arg(long)]
    list_themes: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    if args.list_themes {
        println!("Available themes:");
        for theme in ThemeName::ALL {
            let marker = if theme == ThemeName::default() { " (default)" } else { "" };
            println!("  {}{}", theme, marker);
        }
        return Ok(());
    }

    info!("Kids Board starting...");

    let mut config = load_or_default_config(args.config.as_deref());
    if let Some(assets) = args.assets {
        config.appearance.assets_dir = assets;
    }
    if args.no_animation {
        config.appearance.animate_background = false;
    }

    let theme_key = args
        .theme
        .unwrap_or_else(|| config.appearance.default_theme.clone());
    let theme = resolve_theme(&theme_key);
    info!("Starting with theme {}", theme);

    dashboard::app::run_dashboard(config, theme)
        .map_err(|e| anyhow::anyhow!("Dashboard error: {}", e))?;

    info!("Kids Board shutdown complete");

    Ok(())
}

/// Load configuration from the given or default location, falling back to defaults
fn load_or_default_config(explicit: Option<&Path>) -> AppConfig {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => config::default_config_path().ok().filter(|p| p.exists()),
    };

    if let Some(path) = path {
        match config::load_config(&path) {
            Ok(config) => {
                info!("Loaded configuration from {:?}", path);
                return config;
            }
            Err(e) => warn!("Could not load configuration from {:?}: {:#}", path, e),
        }
    }

    info!("Using default configuration");
    AppConfig::default()
}

/// Look up a theme key, falling back to the default theme
fn resolve_theme(key: &str) -> ThemeName {
    match theme::lookup(key) {
        Ok(palette) => palette.name,
        Err(e) => {
            warn!("{}; using {}", e, ThemeName::default());
            ThemeName::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_resolve_theme() {
        assert_eq!(resolve_theme("ocean"), ThemeName::Ocean);
        assert_eq!(resolve_theme("lavender"), ThemeName::Lavender);
        assert_eq!(resolve_theme("no-such-theme"), ThemeName::Default);
        assert_eq!(resolve_theme("Ocean"), ThemeName::Default);
    }

    #[test]
    fn test_explicit_config_is_loaded() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "[appearance]\ndefault_theme = \"sunset\"\nanimate_background = false").unwrap();

        let config = load_or_default_config(Some(temp_file.path()));
        assert_eq!(config.appearance.default_theme, "sunset");
        assert!(!config.appearance.animate_background);
    }

    #[test]
    fn test_unreadable_config_falls_back_to_defaults() {
        let config = load_or_default_config(Some(Path::new("/nonexistent/config.toml")));
        assert_eq!(config.appearance.default_theme, "default");
    }

    #[test]
    fn test_args_parse() {
        let args = Args::parse_from(["kids-board", "--theme", "forest", "--no-animation"]);
        assert_eq!(args.theme.as_deref(), Some("forest"));
        assert!(args.no_animation);
        assert!(!args.list_themes);
        assert!(args.config.is_none());
    }
}
