pub mod config;
pub mod pg_models;
pub mod postgres;
pub mod schema;

mod postgres_test;
