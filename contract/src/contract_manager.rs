use crate::contract_state::ContractState;
use anyhow::Error;
use primitives::Address;
use system::{
	contract::{Contract, ContractType},
	errors::TitanError,
};

pub struct ContractManager {}

impl ContractManager {
	pub async fn register_contract(
		&self,
		contract: &Contract,
		contract_state: &ContractState<'_>,
	) -> Result<(), Error> {
		let _: ContractType = contract.r#type.try_into()?;
		contract_state.store_contract(contract).await?;
		Ok(())
	}

	/// Returns every contract known to the registry.
	///
	/// An empty registry is reported as an error rather than as an empty
	/// list: callers deploy and mint against this recordset, and zero rows
	/// always means provisioning has not run yet.
	pub async fn get_all_contracts(
		&self,
		contract_state: &ContractState<'_>,
	) -> Result<Vec<Contract>, Error> {
		let contracts = contract_state.get_all_contract().await?;

		if contracts.is_empty() {
			return Err(TitanError::ContractFetchError(
				"Could not find any contracts in the database".to_string(),
			)
			.into())
		}

		Ok(contracts)
	}

	pub async fn get_contract(
		&self,
		address: &Address,
		contract_state: &ContractState<'_>,
	) -> Result<Contract, Error> {
		contract_state.get_contract(address).await
	}
}
