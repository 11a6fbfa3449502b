pub mod db;
pub mod postgres;
pub mod rocksdb;

mod tests;
