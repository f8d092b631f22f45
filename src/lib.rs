// Library interface for testing
pub mod config;
pub mod constants;
pub mod filter;
pub mod models;
pub mod policy;
pub mod ticker;
pub mod time;
pub mod traits;
pub mod validate;
pub mod window;
