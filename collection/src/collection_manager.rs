use crate::collection_contract::CollectionContract;
use anyhow::Error;
use log::{debug, error};
use system::errors::TitanError;

pub struct CollectionManager {}

impl CollectionManager {
	/// Reads the `publicMintEnabled` flag of a deployed collection.
	///
	/// Call failures are written to the error log with full detail; the
	/// returned error carries only the contract address and a static
	/// description.
	pub async fn public_mint_enabled(
		&self,
		contract: &dyn CollectionContract,
	) -> Result<bool, Error> {
		let is_public_minting_enabled = match contract.public_mint_enabled().await {
			Ok(enabled) => enabled,
			Err(e) => return Err(Self::call_failed(contract, &e)),
		};
		let name = match contract.name().await {
			Ok(name) => name,
			Err(e) => return Err(Self::call_failed(contract, &e)),
		};
		debug!("public_mint_enabled: {}.publicMintEnabled is {}", name, is_public_minting_enabled);

		Ok(is_public_minting_enabled)
	}

	fn call_failed(contract: &dyn CollectionContract, e: &Error) -> Error {
		let message = format!(
			"Could not get publicMintEnabled for contract at address {:?}",
			contract.address()
		);
		error!("public_mint_enabled: {}: {:?}", message, e);
		TitanError::SmartContractCallFailed(message).into()
	}
}
