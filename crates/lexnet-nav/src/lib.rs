//! Traversal queries over a finished lexical-semantic graph.
//!
//! Provides depth-layered transitive closure over transitive conceptual
//! relation types, plus hypernym depth maps and least-common-subsumer
//! lookup built on top of them.

pub mod closure;
pub mod paths;
