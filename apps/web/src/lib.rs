pub mod api;
pub mod client;
pub mod config;
pub mod error;
mod main_lib;

pub use main_lib::{build_state, init_tracing, shutdown_signal, AppState};
