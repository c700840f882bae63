//! Runtime configuration: an optional TOML file overridden by command-line flags.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::core::Session;
use crate::types::{
    DEFAULT_HEIGHT, DEFAULT_SAVE_PATH, DEFAULT_SPEED, DEFAULT_WIDTH, MAX_SPEED, MIN_SPEED,
};

pub const DEFAULT_SEED: u64 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeConfig {
    pub width: u32,
    pub height: u32,
    /// Generations per second while running
    pub speed: u32,
    /// Seed for the randomize command
    pub seed: u64,
    pub save_path: PathBuf,
    /// Tracing output goes here; logging is off when unset
    pub log_file: Option<PathBuf>,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            speed: DEFAULT_SPEED,
            seed: DEFAULT_SEED,
            save_path: PathBuf::from(DEFAULT_SAVE_PATH),
            log_file: None,
        }
    }
}

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "tui-life")]
#[command(version)]
#[command(about = "Conway's Game of Life in the terminal", long_about = None)]
pub struct Cli {
    /// TOML file with default settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Grid width in cells
    #[arg(long)]
    pub width: Option<u32>,

    /// Grid height in cells
    #[arg(long)]
    pub height: Option<u32>,

    /// Initial speed in generations per second (1-60)
    #[arg(short, long)]
    pub speed: Option<u32>,

    /// Seed for random soups
    #[arg(long)]
    pub seed: Option<u64>,

    /// File used by save and load
    #[arg(long)]
    pub save_path: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl LifeConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("invalid config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("parsing {}", path.display()))
    }

    /// Config file (if any) first, then flags on top, then validation
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_cli(cli);
        config.validated()
    }

    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(width) = cli.width {
            self.width = width;
        }
        if let Some(height) = cli.height {
            self.height = height;
        }
        if let Some(speed) = cli.speed {
            self.speed = speed;
        }
        if let Some(seed) = cli.seed {
            self.seed = seed;
        }
        if let Some(path) = &cli.save_path {
            self.save_path = path.clone();
        }
        if let Some(path) = &cli.log_file {
            self.log_file = Some(path.clone());
        }
    }

    /// Rejects empty grids and clamps the speed into range
    pub fn validated(mut self) -> Result<Self> {
        if self.width == 0 || self.height == 0 {
            bail!(
                "grid dimensions must be non-zero (got {}x{})",
                self.width,
                self.height
            );
        }
        self.speed = self.speed.clamp(MIN_SPEED, MAX_SPEED);
        Ok(self)
    }

    pub fn build_session(&self) -> Session {
        Session::new(self.width, self.height, self.seed)
            .with_speed(self.speed)
            .with_save_path(self.save_path.clone())
    }
}
