use crate::postgres::schema::*;
use diesel::prelude::{Insertable, *};
use serde::{Deserialize, Serialize};

#[derive(Eq, PartialEq, Debug, Insertable)]
#[diesel(table_name = contract)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewContract {
	pub address: String,
	pub name: Option<String>,
	pub symbol: Option<String>,
	pub owner_address: Option<String>,
	pub type_: Option<i16>,
}

#[derive(Eq, PartialEq, Debug, Queryable, Insertable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = contract)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct QueryContract {
	pub address: String,
	pub name: Option<String>,
	pub symbol: Option<String>,
	pub owner_address: Option<String>,
	pub type_: Option<i16>,
}
