use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

use crate::common::Principal;

/// Registry configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// The principal granted admin authority for the lifetime of the
    /// registry instance.
    pub admin_principal: Principal,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            admin_principal: Principal::new(
                env::var("REGISTRY_ADMIN").context("REGISTRY_ADMIN must be set")?,
            ),
        })
    }
}
