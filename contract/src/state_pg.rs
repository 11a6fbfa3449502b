use anyhow::Error;
use async_trait::async_trait;
use db::postgres::{
	pg_models::{NewContract, QueryContract},
	postgres::{PgConnectionType, PostgresDBConn},
};
use db_traits::{base::BaseState, contract::ContractState};
use diesel::{self, prelude::*};
use primitives::Address;
use system::contract::Contract;

pub struct StatePg<'a> {
	pub(crate) pg: &'a PostgresDBConn<'a>,
}

fn decode_address(encoded: &str) -> Result<Address, Error> {
	let mut decoded: Address = [0; 20];
	let raw = hex::decode(encoded)?;
	if raw.len() == 20 {
		let mut array = [0u8; 20];
		array.copy_from_slice(&raw);
		decoded = array;
	}
	Ok(decoded)
}

fn to_contract(query_contract: &QueryContract) -> Result<Contract, Error> {
	let address = decode_address(&query_contract.address)?;
	let owner_address =
		decode_address(&query_contract.owner_address.clone().unwrap_or_default())?;

	Ok(Contract {
		address,
		name: query_contract.name.clone().unwrap_or_default(),
		symbol: query_contract.symbol.clone().unwrap_or_default(),
		r#type: query_contract.type_.unwrap_or_default() as i8,
		owner_address,
	})
}

#[async_trait]
impl<'a> BaseState<Contract> for StatePg<'a> {
	async fn create_table(&self) -> Result<(), Error> {
		// Tables are created by the embedded migrations
		Ok(())
	}

	async fn create(&self, _contract: &Contract) -> Result<(), Error> {
		use db::postgres::schema::contract::dsl::*;

		let new_contract = NewContract {
			address: hex::encode(_contract.address),
			name: Some(_contract.name.clone()),
			symbol: Some(_contract.symbol.clone()),
			owner_address: Some(hex::encode(_contract.owner_address)),
			type_: Some(_contract.r#type.into()),
		};

		match &self.pg.conn {
			PgConnectionType::TxConn(conn) =>
				diesel::insert_into(contract).values(new_contract).execute(*conn.lock().await)?,
			PgConnectionType::PgConn(conn) => diesel::insert_into(contract)
				.values(new_contract)
				.execute(&mut *conn.lock().await)?,
		};
		Ok(())
	}

	async fn update(&self, _contract: &Contract) -> Result<(), Error> {
		use db::postgres::schema::contract::dsl::*;

		let addr = hex::encode(_contract.address);
		let contract_name = _contract.name.clone();
		let contract_symbol = _contract.symbol.clone();

		match &self.pg.conn {
			PgConnectionType::TxConn(conn) => {
				diesel::update(contract.filter(address.eq(addr)))
					.set((name.eq(contract_name), symbol.eq(contract_symbol)))
					.execute(*conn.lock().await)
			},
			PgConnectionType::PgConn(conn) => {
				diesel::update(contract.filter(address.eq(addr)))
					.set((name.eq(contract_name), symbol.eq(contract_symbol)))
					.execute(&mut *conn.lock().await)
			},
		}?;
		Ok(())
	}

	async fn raw_query(&self, query: &str) -> Result<(), Error> {
		match &self.pg.conn {
			PgConnectionType::TxConn(conn) => diesel::sql_query(query).execute(*conn.lock().await),
			PgConnectionType::PgConn(conn) =>
				diesel::sql_query(query).execute(&mut *conn.lock().await),
		}?;
		Ok(())
	}
}

#[async_trait]
impl<'a> ContractState for StatePg<'a> {
	async fn get_all_contract(&self) -> Result<Vec<Contract>, Error> {
		use db::postgres::schema::contract::dsl::*;

		let res: Result<Vec<QueryContract>, diesel::result::Error> = match &self.pg.conn {
			PgConnectionType::TxConn(conn) => contract.load(*conn.lock().await),
			PgConnectionType::PgConn(conn) => contract.load(&mut *conn.lock().await),
		};

		match res {
			Ok(result) => {
				let mut contracts_list = vec![];
				for query_contract in result {
					contracts_list.push(to_contract(&query_contract)?);
				}
				Ok(contracts_list)
			},
			Err(e) => Err(anyhow::anyhow!("Diesel query failed: {}", e)),
		}
	}

	async fn get_contract(&self, _address: &Address) -> Result<Contract, Error> {
		use db::postgres::schema::contract::dsl::*;

		let encoded_address = hex::encode(_address);
		let res: Result<Vec<QueryContract>, diesel::result::Error> = match &self.pg.conn {
			PgConnectionType::TxConn(conn) =>
				contract.filter(address.eq(encoded_address.clone())).load(*conn.lock().await),
			PgConnectionType::PgConn(conn) => contract
				.filter(address.eq(encoded_address.clone()))
				.load(&mut *conn.lock().await),
		};

		match res {
			Ok(result) =>
				if let Some(query_contract) = result.first() {
					to_contract(query_contract)
				} else {
					Err(anyhow::anyhow!("No matching records found for contract address"))
				},
			Err(e) => Err(anyhow::anyhow!("Diesel query failed: {}", e)),
		}
	}

	async fn get_contract_owner(&self, _address: &Address) -> Result<Address, Error> {
		use db::postgres::schema::contract::dsl::*;

		let encoded_address = hex::encode(_address);

		let res: Result<QueryContract, diesel::result::Error> = match &self.pg.conn {
			PgConnectionType::TxConn(conn) =>
				contract.filter(address.eq(&encoded_address)).first(*conn.lock().await),
			PgConnectionType::PgConn(conn) =>
				contract.filter(address.eq(&encoded_address)).first(&mut *conn.lock().await),
		};

		match res {
			Ok(result) => decode_address(&result.owner_address.clone().unwrap_or_default()),
			Err(e) => Err(anyhow::anyhow!("Diesel query failed: {}", e)),
		}
	}

	async fn is_registered_contract(&self, _address: &Address) -> Result<bool, Error> {
		use db::postgres::schema::contract::dsl::*;

		let encoded_address = hex::encode(_address);
		let count: i64 = match &self.pg.conn {
			PgConnectionType::TxConn(conn) => contract
				.filter(address.eq(encoded_address))
				.count()
				.get_result(*conn.lock().await),
			PgConnectionType::PgConn(conn) => contract
				.filter(address.eq(encoded_address))
				.count()
				.get_result(&mut *conn.lock().await),
		}?;

		Ok(count > 0)
	}
}
