//! Code generation from resolved design-token themes.
//!
//! Each target platform has a [`CodeGenerator`]:
//! - Web: CSS custom properties plus a TypeScript constants module, merged
//!   forward across runs through a [`TokenRegistry`]
//! - Android: a Kotlin `object`
//! - iOS: a Swift `enum` namespace
//! - Flutter: a Dart class
//!
//! Generators are pure: they return [`GeneratedFile`]s and the caller decides
//! where to persist them.

pub mod error;
pub mod generators;
pub mod registry;

pub use error::{CodegenError, Result};
pub use generators::{
    generator_for, AndroidGenerator, CodeGenerator, FlutterGenerator, GeneratedFile,
    IosGenerator, TemplateEngine, WebArtifacts, WebGenerator,
};
pub use registry::{MergePolicy, TokenRegistry, REGISTRY_VERSION};
