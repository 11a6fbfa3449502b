#[cfg(test)]
mod tests {
	use crate::postgres::{config::Config as PgConfig, postgres::PostgresDBPool};
	use system::db_connection_info::DbConnectionInfo;

	#[test]
	fn test_pg_config_defaults() {
		let cfg = PgConfig::test_config();
		assert_eq!(cfg.pool_size, 10);
		assert_eq!(cfg.postgres_db_name, "titan_test");
		assert!(cfg.dev_mode);

		let cfg = PgConfig::local_config();
		assert_eq!(cfg.pool_size, 30);
		assert_eq!(cfg.postgres_db_name, "titan");
		assert!(!cfg.dev_mode);
	}

	#[tokio::test]
	#[serial_test::serial]
	#[ignore = "requires a running PostgreSQL instance"]
	async fn test_initialize_creates_database_and_pool() {
		let cfg = PgConfig::test_config();
		let db_connection_info = DbConnectionInfo {
			host: cfg.db_url.clone(),
			username: cfg.postgres_username.clone(),
			password: cfg.postgres_password.clone(),
			db_name: cfg.postgres_db_name.clone(),
			pool_size: cfg.pool_size,
		};
		PostgresDBPool::initialize_from_config(db_connection_info, true)
			.await
			.expect("Failed to initialize postgres");

		let db_connection_info = DbConnectionInfo {
			host: cfg.db_url,
			username: cfg.postgres_username,
			password: cfg.postgres_password,
			db_name: cfg.postgres_db_name,
			pool_size: cfg.pool_size,
		};
		let pg = PostgresDBPool::new_pool_conn_from_config(db_connection_info, true)
			.await
			.expect("Failed to get a pooled connection");
		assert_eq!(pg.config.postgres_db_name, "titan_test");
	}
}
