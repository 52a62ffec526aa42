use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

use crate::domain::EtherscanLinkSuffix;

/* =======================
DEPLOYMENT DOMAINS
======================= */

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainConfig {
    pub development: String,
    pub staging: String,
    pub production: String,
}

impl Default for DomainConfig {
    fn default() -> Self {
        Self {
            development: "0xproject.localhost:3572".to_string(),
            staging: "staging-0xproject.s3-website-us-east-1.amazonaws.com".to_string(),
            production: "0xproject.com".to_string(),
        }
    }
}

/* =======================
LAYOUT
======================= */

/// Grid and breakpoint constants, mirrored from BassCSS. Do not edit unless
/// the stylesheet changes too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub grid_size: u32,
    pub md_min_em: f64,
    pub lg_min_em: f64,
}

pub const GRID_SIZE: u32 = 12;
pub const MD_MIN_EM: f64 = 52.0;
pub const LG_MIN_EM: f64 = 64.0;

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            md_min_em: MD_MIN_EM,
            lg_min_em: LG_MIN_EM,
        }
    }
}

/* =======================
U2F
======================= */

pub const U2F_API_VERSION_TIMEOUT_MS: u64 = 3000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct U2fConfig {
    pub api_version_timeout_ms: u64,
}

impl Default for U2fConfig {
    fn default() -> Self {
        Self {
            api_version_timeout_ms: U2F_API_VERSION_TIMEOUT_MS,
        }
    }
}

/* =======================
CLI ARGS
======================= */

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "portal.json")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build an order from a JSON order request file
    Order { file: PathBuf },
    /// Translate a 0x error code into a human readable message
    Explain {
        code: String,
        #[arg(long, default_value = "")]
        taker: String,
    },
    /// Print the sentinel "no expiry chosen" timestamp
    Expiry,
    /// Render a unix timestamp as a readable date
    Readable {
        #[arg(allow_hyphen_values = true)]
        timestamp: i64,
    },
    /// Classify a viewport width
    ScreenWidth {
        #[arg(long)]
        width_px: f64,
        #[arg(long, default_value_t = 16.0)]
        font_size_px: f64,
    },
    /// Detect the deployment environment from a host name
    Environment {
        #[arg(long)]
        host: Option<String>,
    },
    /// Etherscan link for an address or transaction hash
    Etherscan {
        value: String,
        #[arg(long)]
        network_id: Option<u64>,
        #[arg(long, value_enum, default_value = "address")]
        suffix: EtherscanLinkSuffix,
    },
    /// Inspect a node version string
    Node { version: String },
    /// Check whether a wallet error means the user rejected the request
    Denied { message: String },
    /// Column size for a number of grid items
    ColSize { items: u32 },
    /// Shorten an address for display
    Address { address: String },
    /// Probe for U2F support
    U2f {
        #[arg(long)]
        legacy_hook: bool,
        #[arg(long)]
        timeout_ms: Option<u64>,
    },
}

/* =======================
MAIN CONFIG
======================= */

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub network_id: u64,
    #[serde(default)]
    pub domains: DomainConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub u2f: U2fConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            network_id: 1,
            domains: DomainConfig::default(),
            layout: LayoutConfig::default(),
            u2f: U2fConfig::default(),
        }
    }
}

/* =======================
LOAD / CREATE CONFIG
======================= */

impl Config {
    pub fn load(path: &PathBuf) -> anyhow::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&content)?)
        } else {
            let cfg = Config::default();
            let content = serde_json::to_string_pretty(&cfg)?;
            std::fs::write(path, content)?;
            Ok(cfg)
        }
    }
}

// ==================================================
// ENVIRONMENT HELPERS
// ==================================================

impl Config {
    /// Host the portal is served from, `PORTAL_HOST` or the production domain.
    pub fn portal_host(&self) -> String {
        env::var("PORTAL_HOST").unwrap_or_else(|_| self.domains.production.clone())
    }

    pub fn u2f_timeout_ms(&self) -> u64 {
        env::var("U2F_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(self.u2f.api_version_timeout_ms)
    }
}
