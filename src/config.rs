//! Configuration for Postbox
//!
//! Centralized configuration with sensible defaults.

use std::net::SocketAddr;

use crate::error::{PostboxError, Result};

/// Main configuration for a Postbox instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// HTTP listen address
    pub listen_addr: String,

    /// Max accepted request body size (bytes)
    pub max_body_bytes: usize,

    // -------------------------------------------------------------------------
    // Store Configuration
    // -------------------------------------------------------------------------
    /// Start with the two example posts in the store
    pub seed_posts: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:5002".to_string(),
            max_body_bytes: 64 * 1024, // 64 KiB
            seed_posts: true,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check the settings before a server is started with them
    pub fn validate(&self) -> Result<()> {
        self.socket_addr()?;

        if self.max_body_bytes == 0 {
            return Err(PostboxError::Config(
                "max_body_bytes must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Convert a body limit given in KiB to bytes
    pub fn body_limit_from_kib(kib: usize) -> Result<usize> {
        kib.checked_mul(1024).ok_or_else(|| {
            PostboxError::Config(format!("body limit of {} KiB is too large", kib))
        })
    }

    /// Parse the listen address
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.listen_addr.parse().map_err(|e| {
            PostboxError::Config(format!("invalid listen address {:?}: {}", self.listen_addr, e))
        })
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the HTTP listen address
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.listen_addr = addr.into();
        self
    }

    /// Set the maximum request body size (in bytes)
    pub fn max_body_bytes(mut self, bytes: usize) -> Self {
        self.config.max_body_bytes = bytes;
        self
    }

    /// Enable or disable the example posts
    pub fn seed_posts(mut self, seed: bool) -> Self {
        self.config.seed_posts = seed;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
