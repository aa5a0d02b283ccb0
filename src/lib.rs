pub mod controllers;
pub mod error;
pub mod infra;
pub mod modules;
pub mod schemas;
