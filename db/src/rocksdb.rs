use directories::UserDirs;
use std::{fs::create_dir_all, path::Path};

#[derive(Debug)]
pub struct DatabaseManager;

impl DatabaseManager {
	pub(crate) fn new(rocksdb_name: String) -> String {
		let user_dirs = UserDirs::new().expect("Couldn't fetch home directory");
		let home_dir = user_dirs.home_dir().to_path_buf();

		// Local store lives under the user's home directory
		let titan_dir = home_dir.join(rocksdb_name);

		if !Path::new(&titan_dir).exists() {
			create_dir_all(&titan_dir).expect("Couldn't create titan data directory");
		}

		titan_dir.to_string_lossy().to_string()
	}
}
