use anyhow::{Error, Result};
use primitives::{Address, ContractType as ContractTypei8};
use serde::{Deserialize, Serialize};

use crate::errors::TitanError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
	pub address: Address,
	pub name: String,
	pub symbol: String,
	pub r#type: ContractTypei8,
	pub owner_address: Address,
}

impl Contract {
	pub fn new(
		address: Address,
		name: String,
		symbol: String,
		r#type: ContractTypei8,
		owner_address: Address,
	) -> Contract {
		Contract { address, name, symbol, r#type, owner_address }
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i8)]
pub enum ContractType {
	ERC721 = 0,
	ERC1155 = 1,
}

impl TryInto<ContractType> for i8 {
	type Error = Error;

	fn try_into(self) -> Result<ContractType, Self::Error> {
		match self {
			0 => Ok(ContractType::ERC721),
			1 => Ok(ContractType::ERC1155),
			_ => Err(TitanError::InvalidContractType(format!("{}", self)).into()),
		}
	}
}
