//! Configuration and CLI argument handling

use anyhow::{bail, Context};
use clap::Parser;

use crate::{
    barista::{Pace, MIN_SPEED},
    shop::ShopSettings,
};

/// CLI argument parsing structure
#[derive(Parser, Debug, Clone)]
#[command(name = "coffeeshop-barista")]
#[command(about = "A coffee-order fulfillment engine with a bounded worker pool")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "8080")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Number of barista workers
    #[arg(short, long, default_value = "4")]
    pub workers: usize,

    /// Starting milk stock in millilitres
    #[arg(long, default_value = "10000")]
    pub milk: u32,

    /// Starting ground coffee stock in grams
    #[arg(long, default_value = "5000")]
    pub coffee: u32,

    /// Simulation speed; brewing delays are divided by this factor
    #[arg(short, long, default_value = "1.0")]
    pub speed: f64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Reject settings the engine cannot run with
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.workers == 0 {
            bail!("--workers must be at least 1");
        }
        self.pace()?;
        Ok(())
    }

    /// Engine settings derived from the command line
    pub fn shop_settings(&self) -> anyhow::Result<ShopSettings> {
        Ok(ShopSettings {
            workers: self.workers,
            milk_ml: self.milk,
            coffee_g: self.coffee,
            pace: self.pace()?,
        })
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    fn pace(&self) -> anyhow::Result<Pace> {
        Pace::new(self.speed)
            .with_context(|| format!("--speed must be a number of at least {}, got {}", MIN_SPEED, self.speed))
    }
}
