pub mod app;
pub mod client;
pub mod config;
pub mod confirm;
pub mod errors;
pub mod handlers;
pub mod interaction;
pub mod models;
pub mod sink;
pub mod storage;
pub mod timestamp;
pub mod ui;
pub mod state;
pub mod validate;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use storage::{LogStore, load_data};
