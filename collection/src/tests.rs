#[cfg(test)]
mod tests {
	use crate::{collection_contract::CollectionContract, collection_manager::CollectionManager};
	use anyhow::{anyhow, Error};
	use async_trait::async_trait;
	use ethers::types::Address;

	struct MockCollection {
		address: Address,
		mint_enabled: Result<bool, &'static str>,
		name: Result<&'static str, &'static str>,
	}

	#[async_trait]
	impl CollectionContract for MockCollection {
		async fn public_mint_enabled(&self) -> Result<bool, Error> {
			self.mint_enabled.map_err(|e| anyhow!(e))
		}

		async fn name(&self) -> Result<String, Error> {
			self.name.map(|name| name.to_string()).map_err(|e| anyhow!(e))
		}

		fn address(&self) -> Address {
			self.address
		}
	}

	#[tokio::test]
	async fn test_public_mint_enabled_returns_flag() {
		let collection_manager = CollectionManager {};

		let contract = MockCollection {
			address: Address::from_low_u64_be(0x1234),
			mint_enabled: Ok(true),
			name: Ok("Lily"),
		};
		let enabled = collection_manager.public_mint_enabled(&contract).await.unwrap();
		assert!(enabled);

		let contract = MockCollection {
			address: Address::from_low_u64_be(0x1234),
			mint_enabled: Ok(false),
			name: Ok("Lily"),
		};
		let enabled = collection_manager.public_mint_enabled(&contract).await.unwrap();
		assert!(!enabled);
	}

	#[tokio::test]
	async fn test_flag_call_failure_is_replaced_with_generic_error() {
		let collection_manager = CollectionManager {};

		let contract = MockCollection {
			address: Address::from_low_u64_be(0x1234),
			mint_enabled: Err("connection reset by peer"),
			name: Ok("Lily"),
		};
		let err = collection_manager
			.public_mint_enabled(&contract)
			.await
			.err()
			.expect("A failing flag call must fail the read");

		let message = err.to_string();
		assert!(message.contains("Could not get publicMintEnabled"));
		assert!(message.contains(&format!("{:?}", contract.address())));
		// The underlying detail goes to the error log only
		assert!(!message.contains("connection reset by peer"));
	}

	#[tokio::test]
	async fn test_name_call_failure_fails_the_read() {
		let collection_manager = CollectionManager {};

		let contract = MockCollection {
			address: Address::from_low_u64_be(0x1234),
			mint_enabled: Ok(true),
			name: Err("execution reverted"),
		};
		let err = collection_manager
			.public_mint_enabled(&contract)
			.await
			.err()
			.expect("A failing name call must fail the read");

		let message = err.to_string();
		assert!(message.contains("Could not get publicMintEnabled"));
		assert!(!message.contains("execution reverted"));
	}
}
