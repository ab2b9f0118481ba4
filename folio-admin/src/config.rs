//! Admin configuration

use folio_client::ClientConfig;

/// Rows per page on the Projects and Journey screens
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Settings for an admin collection screen
///
/// | Variable | Default |
/// |----------|---------|
/// | FOLIO_PAGE_SIZE | 10 |
///
/// plus the [`ClientConfig`] variables.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    pub client: ClientConfig,
    pub page_size: usize,
}

impl AdminConfig {
    pub fn new(client: ClientConfig) -> Self {
        Self {
            client,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn from_env() -> Self {
        let page_size = std::env::var("FOLIO_PAGE_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|&n: &usize| n > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE);
        Self {
            client: ClientConfig::from_env(),
            page_size,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}
