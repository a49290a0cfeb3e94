pub mod api;
pub mod db;
pub mod error;
pub mod models;
pub mod query;
pub mod remote;
pub mod screens;
pub mod services;
pub mod state;
