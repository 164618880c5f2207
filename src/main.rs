//! # Nordic Installer Entry Point
//!
//! ## Usage
//!
//! ```bash
//! # Run the installer with the saved configuration
//! nordic
//!
//! # Use another configuration file or gum binary
//! nordic --config ./config.json --gum ~/.local/bin/gum
//!
//! # Show every widget kind once and exit
//! nordic --demo
//! ```
//!
//! ## Flow
//!
//! 1. **Config**: load `~/.config/nordic/config.json`, apply command-line overrides
//! 2. **Checks**: make sure gum can be run
//! 3. **Wizard**: welcome, platform check, component selection, installation
//!
//! Exits with status 1 when the user declines at a prompt.

use nordic::backend::{is_gum_available, GumBackend};
use nordic::config::Config;
use nordic::installer::{Installer, Outcome};
use nordic::logging;
use nordic::render::Renderer;
use nordic::theme::Theme;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Nordic - install the Nordic desktop configuration
#[derive(Parser, Debug)]
#[command(name = "nordic")]
#[command(author = "AlexvZyl")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Terminal installer for the Nordic desktop configuration", long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Program used to draw widgets
    #[arg(long, value_name = "PROGRAM")]
    gum: Option<String>,

    /// Colour theme (Nord, Nordic)
    #[arg(short, long, value_name = "NAME")]
    theme: Option<String>,

    /// Stack widgets at the top instead of spreading them over the terminal
    #[arg(long)]
    no_distribute: bool,

    /// Render every widget kind once and exit
    #[arg(long)]
    demo: bool,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let _logging = logging::init();
    run_application(args)
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().context("Failed to load configuration")?,
    };

    if let Some(gum) = &args.gum {
        config.gum = gum.clone();
    }
    if let Some(theme) = &args.theme {
        config.theme = theme.clone();
    }
    if args.no_distribute {
        config.distribute_evenly = false;
    }
    Ok(config)
}

fn run_application(args: Args) -> Result<ExitCode> {
    let config = load_config(&args)?;
    tracing::debug!(?config, "configuration loaded");

    let theme = Theme::by_name(&config.theme).with_context(|| {
        let available: Vec<&str> = Theme::all().iter().map(|t| t.name).collect();
        format!(
            "Unknown theme '{}'. Available themes: {}",
            config.theme,
            available.join(", ")
        )
    })?;

    if !is_gum_available(&config.gum) {
        eprintln!("Error: '{}' could not be run", config.gum);
        eprintln!("\nThe installer draws its screens with gum.");
        eprintln!("Install it from https://github.com/charmbracelet/gum, e.g.:");
        eprintln!("  sudo pacman -S gum");
        eprintln!("\nOr point to an existing binary with --gum <PROGRAM>.");
        return Ok(ExitCode::FAILURE);
    }

    let mut renderer = Renderer::new(GumBackend::new(config.gum.clone()));
    renderer.set_distribute_evenly(config.distribute_evenly);
    let mut installer = Installer::new(renderer, theme);

    if args.demo {
        let response = installer.showcase().context("Failed to render demo")?;
        tracing::info!(?response, "demo finished");
        return Ok(ExitCode::SUCCESS);
    }

    let outcome = installer
        .run(&config.components)
        .context("Installer failed")?;
    match outcome {
        Outcome::Declined => Ok(ExitCode::from(1)),
        Outcome::Completed(installed) => {
            tracing::info!(?installed, "installation finished");
            Ok(ExitCode::SUCCESS)
        }
    }
}
