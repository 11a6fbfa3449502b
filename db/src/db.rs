use crate::{
	postgres::postgres::{PgConnectionType, PostgresDBConn, PostgresDBPool},
	rocksdb::DatabaseManager,
};
use anyhow::{Error, Result};

use std::sync::Arc;
use system::{
	config::{Config as SystemConfig, Db, CACHED_CONFIG},
	db_connection_info::DbConnectionInfo,
	errors::TitanError,
};
use tokio::sync::Mutex;

pub struct Database;

#[derive(Clone)]
pub enum DbTxConn<'a> {
	POSTGRES(PostgresDBConn<'a>),
	ROCKSDB(String),
}

impl Database {
	pub async fn new(config: &SystemConfig) {
		{
			let mut lock = CACHED_CONFIG.write().await;
			*lock = Some(Arc::new(config.clone()));
		}

		match config.clone().db {
			Db::Postgres { host, username, password, pool_size, db_name, test_db_name: _ } => {
				let db_connection_info =
					DbConnectionInfo { host, username, password, db_name, pool_size };
				PostgresDBPool::initialize_from_config(db_connection_info, config.dev_mode)
					.await
					.expect("PG error: initialize_from_config")
			},
			Db::RocksDb { .. } => {},
		}
	}

	pub async fn new_test(config: &SystemConfig) {
		{
			let mut lock = CACHED_CONFIG.write().await;
			*lock = Some(Arc::new(config.clone()));
		}

		match config.clone().db {
			Db::Postgres { host, username, password, pool_size, db_name, test_db_name } => {
				let db_connection_info = DbConnectionInfo {
					host,
					username,
					password,
					db_name: test_db_name.unwrap_or(db_name),
					pool_size,
				};
				PostgresDBPool::initialize_from_config(db_connection_info, config.dev_mode)
					.await
					.expect("PG error: initialize_from_config")
			},
			Db::RocksDb { .. } => {},
		}
	}

	pub async fn get_pool_connection<'a>() -> Result<DbTxConn<'a>, Error> {
		let config = {
			let lock = CACHED_CONFIG.read().await;
			let config = lock.as_ref().ok_or(TitanError::DBError(
				"get_pool_connection: DB is not initialized!".to_string(),
			))?;
			config.clone()
		};

		let conn: DbTxConn<'a> = match config.clone().db.clone() {
			Db::Postgres { host, username, password, pool_size, db_name, test_db_name: _ } => {
				let db_connection_info =
					DbConnectionInfo { host, username, password, db_name, pool_size };
				let pg =
					PostgresDBPool::new_pool_conn_from_config(db_connection_info, config.dev_mode)
						.await?;
				let conn = PgConnectionType::PgConn(Arc::new(Mutex::new(pg.conn)));
				let p_conn = PostgresDBConn { conn, config: pg.config };
				DbTxConn::POSTGRES(p_conn)
			},
			Db::RocksDb { name } => DbTxConn::ROCKSDB(DatabaseManager::new(name)),
		};

		Ok(conn)
	}

	pub async fn get_test_connection<'a>() -> Result<DbTxConn<'a>, Error> {
		let config = {
			let lock = CACHED_CONFIG.read().await;
			let config = lock.as_ref().ok_or(TitanError::DBError(
				"get_test_connection: DB is not initialized!".to_string(),
			))?;
			config.clone()
		};

		let conn: DbTxConn<'a> = match config.clone().db.clone() {
			Db::Postgres { host, username, password, pool_size, db_name, test_db_name } => {
				let db_connection_info = DbConnectionInfo {
					host,
					username,
					password,
					db_name: test_db_name.unwrap_or(db_name),
					pool_size,
				};
				let pg =
					PostgresDBPool::new_pool_conn_from_config(db_connection_info, config.dev_mode)
						.await?;
				let conn = PgConnectionType::PgConn(Arc::new(Mutex::new(pg.conn)));
				let p_conn = PostgresDBConn { conn, config: pg.config };
				DbTxConn::POSTGRES(p_conn)
			},
			Db::RocksDb { name } => DbTxConn::ROCKSDB(DatabaseManager::new(name)),
		};

		Ok(conn)
	}
}
