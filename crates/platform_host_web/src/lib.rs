//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! Every adapter compiles on native targets as an inert fallback so the runtime crates can be
//! unit-tested without a browser: stores read as empty, writes succeed, and browser-only actions
//! report an error string.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod document;
pub mod external_url;
pub mod object_url;
pub mod storage;

pub use document::set_document_theme_class;
pub use external_url::open_external_url;
pub use object_url::{object_url_from_file_input, revoke_object_url, PickedObjectUrl};
pub use storage::{WebLocalStore, WebSessionStore};
