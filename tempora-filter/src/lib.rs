//! # Tempora Filter Engine
//!
//! The tour discovery core: cascading multi-facet filtering for the heritage
//! tour catalog. Three cooperating layers, leaves first:
//!
//! - [`catalog`] - immutable lookup tables mapping periods to eras, eras to
//!   locations, and both to the keyword/alias tables the evaluator matches on
//! - [`selection`] - one browsing session's facet selections, with the
//!   cascade-and-reset rules applied on every toggle
//! - [`evaluator`] - the stable, order-preserving visibility predicate over
//!   tour records
//!
//! Everything here is synchronous pure computation: no I/O, no framework
//! types, no shared state. Callers thread a [`SelectionState`] explicitly
//! per session and pass the tour list on every evaluation.

pub mod catalog;
pub mod evaluator;
pub mod selection;

pub use catalog::{CatalogConfig, FacetCatalog};
pub use evaluator::filter_tours;
pub use selection::{FilterTag, SelectionState};
