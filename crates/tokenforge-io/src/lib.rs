//! tokenforge-io: persistence for generated token artifacts.
//!
//! Generators never touch the filesystem directly. They read previous output
//! and the compiler writes new output through an [`ArtifactStore`]:
//!
//! - [`FsStore`] writes below a root directory, creating directories as needed
//! - [`MemoryStore`] keeps everything in memory
//!
//! [`OutputLayout`] maps each platform to its directory under the store root.

pub mod error;
pub mod layout;
pub mod store;

pub use error::{IoError, Result};
pub use layout::OutputLayout;
pub use store::{ArtifactStore, FsStore, MemoryStore};
