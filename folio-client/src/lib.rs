//! Folio Client - HTTP access to the portfolio content API
//!
//! Provides the [`PersistenceGateway`] used by the admin reorder engine
//! and its HTTP implementation [`ResourceGateway`].

pub mod config;
pub mod error;
pub mod gateway;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use gateway::{PersistenceGateway, ResourceGateway};
pub use http::{HttpClient, NetworkHttpClient};

// Re-export shared types for convenience
pub use shared::{AppResponse, SortOrderItem};
