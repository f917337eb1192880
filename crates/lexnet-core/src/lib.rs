//! Core types and storage for the lexical-semantic graph.
//!
//! Provides the data model ([`graph::Synset`], [`graph::LexUnit`]), the typed
//! relation graph ([`rel::RelationMap`]), the orthographic-form indices, and
//! the builder/store pair ([`builder::LexGraphBuilder`], [`graph::LexGraph`])
//! that separates the single-writer load phase from the read-only query phase.

pub mod builder;
pub mod config;
pub mod graph;
pub mod index;
pub mod rel;
