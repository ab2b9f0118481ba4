//! Document store backing the content API

mod collection;
mod document;
mod seed;

pub use collection::Collection;
pub use document::Document;
pub use seed::Seed;
