//! Fluentd text rendering for compiled directive trees.

pub mod fluentd;

pub use fluentd::render;
