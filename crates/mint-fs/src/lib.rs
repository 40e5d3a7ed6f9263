//! Document store abstraction for the InfinityMint client SDK
//!
//! Provides forward-slash document paths and read-only stores that serve
//! raw JSON documents by path, with explicit cache invalidation.

pub mod error;
pub mod fs_store;
pub mod memory;
pub mod path;
pub mod store;

pub use error::{Error, Result};
pub use fs_store::FsDocumentStore;
pub use memory::MemoryDocumentStore;
pub use path::NormalizedPath;
pub use store::DocumentStore;
