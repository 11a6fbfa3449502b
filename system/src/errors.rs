use serde::Serialize;

#[derive(thiserror::Error, Debug, Serialize)]
pub enum TitanError {
	// not found errors
	#[error("contract fetch error: {0}")]
	ContractFetchError(String),
	// invalid errors
	#[error("invalid contract type: {0}")]
	InvalidContractType(String),
	#[error("config error: {0}")]
	ConfigError(String),
	// internal errors
	#[error("failed to access database: {0}")]
	DBError(String),
	#[error("smart contract call failed: {0}")]
	SmartContractCallFailed(String),
}
