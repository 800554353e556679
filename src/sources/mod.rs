//! Data retrieval sources (local files and HTTP).

mod documents;

pub use documents::{DocumentError, DocumentSource, fetch_document};
