pub mod app;
pub mod config;
pub mod data;
pub mod engine;
pub mod error;
pub mod gesture;
pub mod index;
pub mod model;
pub mod stats;
pub mod store;
pub mod ui;
pub mod view_models;

pub use app::TrackerApp;
