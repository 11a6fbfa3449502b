pub mod config;
pub mod contract;
pub mod db_connection_info;
pub mod errors;

mod tests;
