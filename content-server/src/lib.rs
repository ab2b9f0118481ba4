//! Content Server - reference backend for the portfolio content API
//!
//! Serves each ordered collection under `/api/<resource>` from an
//! in-memory document store. The admin console and the integration tests
//! of the client crates run against it.
//!
//! ```text
//! content-server/src/
//! ├── core/     # config, state, server, errors
//! ├── api/      # routes and handlers
//! ├── store/    # in-memory collections and seed loading
//! └── utils/    # logging
//! ```

pub mod api;
pub mod core;
pub mod store;
pub mod utils;

pub use crate::core::{Config, Server, ServerError, ServerState};
pub use store::{Collection, Document, Seed};
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env`, read the configuration and start logging
pub fn setup_environment() -> Config {
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    config
}
