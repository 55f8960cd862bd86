//! Order entry, trade catalog, and output configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// How generated orders are labeled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderConfig {
    /// Symbol written into the CUSTOM order.
    #[serde(default = "default_order_symbol")]
    pub symbol: String,
    /// Contract multiplier written into the CUSTOM order.
    #[serde(default = "default_multiplier")]
    pub multiplier: u32,
}

impl Default for OrderConfig {
    fn default() -> Self {
        Self {
            symbol: default_order_symbol(),
            multiplier: default_multiplier(),
        }
    }
}

/// Where trade structures are read from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to the trade structures JSON file.
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

/// Where generated orders are written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output directory. Empty means the working directory.
    #[serde(default)]
    pub directory: PathBuf,
    /// Output file name.
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

impl OutputConfig {
    /// Full path of the order file.
    #[must_use]
    pub fn file_path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::new(),
            file_name: default_file_name(),
        }
    }
}

fn default_order_symbol() -> String {
    "SPX".to_string()
}

const fn default_multiplier() -> u32 {
    100
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("trade_structures.json")
}

fn default_file_name() -> String {
    "TOS_order_gen.txt".to_string()
}
