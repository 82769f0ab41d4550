//! Output plugin configuration kinds.
//!
//! Each kind is a strongly-typed configuration object with a
//! [`ToDirective`](fluentgen_core::ToDirective) implementation that
//! compiles it into a directive tree: the kind's own fields become the
//! parameter mapping, nested configuration (the buffering policy)
//! becomes a child directive.

pub mod buffer;
pub mod gelf;

pub use buffer::BufferConfig;
pub use gelf::GelfOutputConfig;
