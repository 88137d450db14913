//! Configuration module for Fleetboard.
//!
//! The rate card behind every derived metric is configuration, not business
//! logic: defaults match the aggregator's working assumptions and can be
//! overridden by an optional TOML file (`FLEETBOARD_CONFIG`) and then by
//! environment variables.

use crate::domain::metrics::RateCard;
use anyhow::{Context, Result};
use rust_decimal::Decimal;
use std::env;
use std::fmt::Display;
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub rates: RateCard,

    /// How many demo rows to seed at session start.
    pub demo_records: usize,
    /// Fixed RNG seed for reproducible demo data (None = entropy).
    pub demo_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rates: RateCard::default(),
            demo_records: 100,
            demo_seed: None,
        }
    }
}

impl Config {
    /// Loads configuration: TOML base file (if `FLEETBOARD_CONFIG` is set),
    /// then environment-variable overrides, then validation.
    pub fn from_env() -> Result<Self> {
        let rates = match env_var("FLEETBOARD_CONFIG") {
            Some(path) => {
                let raw = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read config file {path}"))?;
                toml::from_str(&raw)
                    .with_context(|| format!("Failed to parse config file {path}"))?
            }
            None => RateCard::default(),
        };

        let config = Self {
            rates: RateCard {
                optimization_factor: parse_env("OPTIMIZATION_FACTOR", rates.optimization_factor)?,
                earning_per_order: parse_env("EARNING_PER_ORDER", rates.earning_per_order)?,
                saving_per_order: parse_env("SAVING_PER_ORDER", rates.saving_per_order)?,
                fuel_litres_per_order: parse_env(
                    "FUEL_LITRES_PER_ORDER",
                    rates.fuel_litres_per_order,
                )?,
                manpower_per_order: parse_env("MANPOWER_PER_ORDER", rates.manpower_per_order)?,
                cost_saved_per_order: parse_env(
                    "COST_SAVED_PER_ORDER",
                    rates.cost_saved_per_order,
                )?,
                active_drivers: parse_env("ACTIVE_DRIVERS", rates.active_drivers)?,
            },
            demo_records: parse_env("DEMO_RECORDS", 100)?,
            demo_seed: parse_env_opt("DEMO_SEED")?,
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let rates = &self.rates;
        if rates.optimization_factor <= Decimal::ZERO || rates.optimization_factor > Decimal::ONE {
            anyhow::bail!(
                "OPTIMIZATION_FACTOR must be in (0, 1], got {}",
                rates.optimization_factor
            );
        }
        for (name, value) in [
            ("EARNING_PER_ORDER", rates.earning_per_order),
            ("SAVING_PER_ORDER", rates.saving_per_order),
            ("FUEL_LITRES_PER_ORDER", rates.fuel_litres_per_order),
            ("MANPOWER_PER_ORDER", rates.manpower_per_order),
            ("COST_SAVED_PER_ORDER", rates.cost_saved_per_order),
        ] {
            if value < Decimal::ZERO {
                anyhow::bail!("{name} must be non-negative, got {value}");
            }
        }
        Ok(())
    }
}

fn env_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match env_var(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Invalid {key}={raw}: {e}")),
        None => Ok(default),
    }
}

fn parse_env_opt<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    match env_var(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| anyhow::anyhow!("Invalid {key}={raw}: {e}")),
        None => Ok(None),
    }
}
