//! Placement engines.
//!
//! A [`PlacementEngine`] answers "where does module X go next?" one request
//! at a time. Requests are not commutative, so callers must issue them in
//! order against a single engine.
//!
//! - [`attach::AttachEngine`] grows a connected, collision-free station.
//! - [`grid::GridEngine`] lays modules out on a fixed row grid.

pub mod attach;
pub mod grid;
pub mod structure;

use dockyard_core::{catalog::Catalog, placement::Placement};

use crate::config::{LayoutConfig, LayoutEngine};

/// Counters describing how an engine satisfied its requests.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PlacementStats {
    /// Connectors inserted to bridge to a module.
    pub connectors: usize,
    /// Modules placed away from the structure.
    pub fallbacks: usize,
    /// Connector insertions undone because the chained module collided.
    pub rollbacks: usize,
}

/// Trait defining the interface for placement engines.
pub trait PlacementEngine {
    /// Placements that exist before the first request, in output order.
    fn initial_placements(&self) -> Vec<Placement>;

    /// Places one module and returns every placement made for it, in order.
    ///
    /// Never returns an empty list.
    fn place(&mut self, key: &str) -> Vec<Placement>;

    /// Counters accumulated since the engine was created.
    fn stats(&self) -> PlacementStats;
}

/// Creates the engine selected by `config`.
pub fn engine_for<'a>(config: &LayoutConfig, catalog: &'a Catalog) -> Box<dyn PlacementEngine + 'a> {
    match config.engine() {
        LayoutEngine::Attach => Box::new(attach::AttachEngine::new(catalog, config.attach().clone())),
        LayoutEngine::Grid => Box::new(grid::GridEngine::new(*config.grid())),
    }
}
