use anyhow::Error;
use async_trait::async_trait;
use ethers::{contract::abigen, providers::Middleware, types::Address};
use std::sync::Arc;

abigen!(
	Erc721,
	r#"[
		function publicMintEnabled() external view returns (bool)
		function name() external view returns (string)
	]"#
);

/// Client-side binding to a deployed collection contract. Read calls go
/// through the caller-supplied provider middleware.
#[async_trait]
pub trait CollectionContract: Send + Sync {
	async fn public_mint_enabled(&self) -> Result<bool, Error>;

	async fn name(&self) -> Result<String, Error>;

	fn address(&self) -> Address;
}

pub struct Erc721Collection<M> {
	contract: Erc721<M>,
}

impl<M: Middleware + 'static> Erc721Collection<M> {
	pub fn new(address: Address, client: Arc<M>) -> Self {
		Erc721Collection { contract: Erc721::new(address, client) }
	}
}

#[async_trait]
impl<M: Middleware + 'static> CollectionContract for Erc721Collection<M> {
	async fn public_mint_enabled(&self) -> Result<bool, Error> {
		Ok(self.contract.public_mint_enabled().call().await?)
	}

	async fn name(&self) -> Result<String, Error> {
		Ok(self.contract.name().call().await?)
	}

	fn address(&self) -> Address {
		self.contract.address()
	}
}
