pub mod assets;
pub mod config;
pub mod context;
pub mod cors;
pub mod database;
pub mod routes;
pub mod telemetry;
