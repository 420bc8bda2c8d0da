pub mod api;
pub mod charts;
pub mod config;
pub mod console;
pub mod dispatch;
pub mod error;
pub mod forms;
pub mod geo;
pub mod http_client;
pub mod models;
pub mod prompt;
pub mod render;
pub mod session;
pub mod storage;
pub mod view;

pub use config::Config;
pub use console::Console;
pub use error::{ConsoleError, ConsoleResult};
