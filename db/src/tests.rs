#[cfg(test)]
mod tests {
	use crate::db::Database;

	#[tokio::test]
	#[serial_test::serial]
	async fn test_pool_connection_requires_initialization() {
		let result = Database::get_pool_connection().await;

		let err = result.err().expect("connection must fail before Database::new");
		assert!(err.to_string().contains("DB is not initialized"));
	}

	#[tokio::test]
	#[serial_test::serial]
	async fn test_test_connection_requires_initialization() {
		let result = Database::get_test_connection().await;

		let err = result.err().expect("connection must fail before Database::new");
		assert!(err.to_string().contains("DB is not initialized"));
	}
}
