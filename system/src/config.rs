use anyhow::{Error, Result};
use primitives::ChainId;
use serde::{Deserialize, Serialize};
use std::{fs::read_to_string, path::Path, sync::Arc};
use tokio::sync::RwLock;

use crate::errors::TitanError;

/// Cached configuration
lazy_static::lazy_static! {
	pub static ref CACHED_CONFIG: Arc<RwLock<Option<Arc<Config>>>> = Arc::new(RwLock::new(None));
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Db {
	#[serde(alias = "Postgres", alias = "postgres")]
	Postgres {
		host: String,
		username: String,
		password: String,
		pool_size: u32,
		db_name: String,
		test_db_name: Option<String>,
	},
	#[serde(alias = "RocksDb", alias = "rocksdb")]
	RocksDb {
		name: String,
	},
}

/// Startup configuration for the titan services
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
	pub dev_mode: bool,
	pub eth_chain_id: ChainId,
	pub rpc_endpoint: String,
	pub db: Db,
}

impl Config {
	pub fn from_file(path: &Path) -> Result<Config, Error> {
		let content = read_to_string(path).map_err(|e| {
			TitanError::ConfigError(format!("can't read config file {:?}: {}", path, e))
		})?;
		let config: Config = toml::from_str(&content).map_err(|e| {
			TitanError::ConfigError(format!("can't parse config file {:?}: {}", path, e))
		})?;
		Ok(config)
	}
}

impl Default for Config {
	fn default() -> Self {
		Self {
			dev_mode: true,
			eth_chain_id: 1,
			rpc_endpoint: "ws://127.0.0.1:8545".to_string(),
			db: Db::RocksDb { name: ".titan".to_string() },
		}
	}
}
