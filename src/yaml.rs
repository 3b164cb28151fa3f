//! YAML emitter for generated configuration files
//!
//! Output follows the conventions of the host framework's YAML dumper so the
//! generated files are byte-identical to what its own tooling writes: block
//! style up to a configurable inline level, flow style below it, `{  }` for
//! empty collections and minimal scalar quoting.

pub mod dumper;
pub mod escaper;
pub mod inline;

pub use dumper::{DEFAULT_INDENTATION, DEFAULT_INLINE_LEVEL, Dumper, dump};
