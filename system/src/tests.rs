#[cfg(test)]
mod tests {
	use crate::{
		config::{Config, Db},
		contract::{Contract, ContractType},
	};

	#[test]
	fn test_contract_type_from_i8() {
		let erc721: ContractType = 0i8.try_into().unwrap();
		assert_eq!(erc721, ContractType::ERC721);

		let erc1155: ContractType = 1i8.try_into().unwrap();
		assert_eq!(erc1155, ContractType::ERC1155);

		let invalid: Result<ContractType, _> = 7i8.try_into();
		let err = invalid.err().unwrap();
		assert!(err.to_string().contains("invalid contract type"));
	}

	#[test]
	fn test_contract_new() {
		let contract = Contract::new(
			[0x11; 20],
			"Lily".to_string(),
			"LILY".to_string(),
			ContractType::ERC721 as i8,
			[0x22; 20],
		);
		assert_eq!(contract.address, [0x11; 20]);
		assert_eq!(contract.name, "Lily");
		assert_eq!(contract.symbol, "LILY");
		assert_eq!(contract.r#type, ContractType::ERC721 as i8);
		assert_eq!(contract.owner_address, [0x22; 20]);
	}

	#[test]
	fn test_config_default_uses_local_backend() {
		let config = Config::default();
		assert!(config.dev_mode);
		assert!(matches!(config.db, Db::RocksDb { .. }));
	}

	#[test]
	fn test_config_parses_postgres_backend() {
		let raw = r#"
			dev_mode = false
			eth_chain_id = 5
			rpc_endpoint = "ws://127.0.0.1:8545"

			[db.postgres]
			host = "localhost:5432"
			username = "postgres"
			password = "postgres"
			pool_size = 10
			db_name = "titan"
		"#;
		let config: Config = toml::from_str(raw).unwrap();
		assert_eq!(config.eth_chain_id, 5);
		match config.db {
			Db::Postgres { host, db_name, pool_size, .. } => {
				assert_eq!(host, "localhost:5432");
				assert_eq!(db_name, "titan");
				assert_eq!(pool_size, 10);
			},
			Db::RocksDb { .. } => panic!("expected a postgres backend"),
		}
	}
}
