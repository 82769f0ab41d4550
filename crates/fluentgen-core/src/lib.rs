//! Core model and machinery for compiling typed logging output
//! configurations into fluentd directive trees.
//!
//! This crate contains:
//! - The compiled directive tree (`PluginMeta`, `Directive`, `Params`)
//! - Field descriptors and the field mapper
//! - The secret-resolution boundary (`SecretValue`, `SecretLoader`)
//! - Compilation error types

pub mod directive;
pub mod error;
pub mod mapper;
pub mod params;
pub mod secret;

pub use directive::{Directive, PluginMeta, ToDirective};
pub use error::{CompileError, CompileResult, ResolveError};
pub use mapper::{Field, FieldValue, map_fields};
pub use params::Params;
pub use secret::{SecretLoader, SecretRef, SecretValue};
