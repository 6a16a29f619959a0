pub mod advisories;
pub mod client;
pub mod config;
pub mod constants;
pub mod desk;
pub mod error;
pub mod formatters;
pub mod i18n;
pub mod models;
pub mod service;
pub mod ui;
