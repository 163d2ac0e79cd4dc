//! Minimal markup model for the generated descriptor.
//!
//! Only what the descriptor needs: elements with ordered attributes, comments,
//! and raw fragments that are written verbatim. There is no parser.

mod attrs;
mod node;
pub mod writer;

pub use attrs::{AttrValue, NO, WithAttributes, YES, yes_no};
pub use node::{Element, Node};
