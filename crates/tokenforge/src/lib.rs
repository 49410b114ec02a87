//! tokenforge: compile design-token documents into platform theme files.
//!
//! A run discovers token documents ([`TokenSource`]), resolves each into
//! themes, and writes the artifacts of every selected platform through an
//! [`ArtifactStore`]. All inputs come from a [`CompilerConfig`]; nothing here
//! reads the environment.
//!
//! ```no_run
//! use tokenforge::{Compiler, CompilerConfig, FsStore, PlatformSelection};
//!
//! let config = CompilerConfig::new("tokens").with_platforms(PlatformSelection::All);
//! let compiler = Compiler::new(config)?;
//! let summary = compiler.run(&mut FsStore::new("."))?;
//! println!("{} themes", summary.themes);
//! # Ok::<(), tokenforge::CompileError>(())
//! ```

pub mod compiler;
pub mod config;
pub mod error;
pub mod source;

pub use compiler::{Compiler, RunSummary};
pub use config::{CompilerConfig, DEFAULT_TOKEN_SOURCE};
pub use error::{CompileError, Result};
pub use source::{source_name, TokenSource};

pub use tokenforge_codegen::MergePolicy;
pub use tokenforge_core::{ConfigError, DocumentError, Platform, PlatformSelection};
pub use tokenforge_io::{ArtifactStore, FsStore, MemoryStore, OutputLayout};
pub use tokenforge_resolver::CollectionRules;
