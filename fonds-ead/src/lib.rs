//! EAD finding aid documents
//!
//! `fonds-ead` owns the hierarchical side of collection metadata: an ordered
//! XML tree, an XPath-like location expression grammar, and the resolver /
//! grower that makes sparse documents writable.
//!
//! # Architecture
//!
//! - **One tree per export**: A [`Document`] is parsed (or built), mutated in
//!   place by the exporter, serialized once, and discarded
//! - **Closed location grammar**: Element steps and attribute predicates
//!   only; malformed expressions fail at parse time, before any document is
//!   touched
//! - **Growth never invents structure it cannot name**: Element steps are
//!   created on demand, attribute predicates are matched but never
//!   synthesized, and growth is bounded by the expression length
//!
//! Reading uses `quick-xml`; writing is a small deterministic serializer so
//! exports diff cleanly.

pub mod error;
pub mod locate;
pub mod location;
mod parse;
pub mod tree;
mod write;

pub use error::{EadError, Result};
pub use locate::{ensure, resolve};
pub use location::{Location, Step};
pub use tree::{Document, Element};
