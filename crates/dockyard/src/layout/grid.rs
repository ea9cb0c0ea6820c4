//! Row-grid placement: modules laid out in fixed-size cells, row by row.
//!
//! No geometry is consulted, so modules larger than the spacing may overlap.
//! There is no bootstrap connector.

use log::trace;

use dockyard_core::{geometry::Vec3, placement::Placement};

use crate::{
    config::GridConfig,
    layout::{PlacementEngine, PlacementStats},
};

/// Places each request in the next cell of an XZ grid.
#[derive(Debug)]
pub struct GridEngine {
    config: GridConfig,
    placed: u32,
}

impl GridEngine {
    pub fn new(config: GridConfig) -> Self {
        Self { config, placed: 0 }
    }

    fn cell(&self, index: u32) -> Vec3 {
        let row_limit = self.config.row_limit().max(1);
        let spacing = self.config.spacing();
        let column = i32::try_from(index % row_limit).unwrap_or(i32::MAX);
        let row = i32::try_from(index / row_limit).unwrap_or(i32::MAX);
        Vec3::new(
            column.saturating_mul(spacing),
            0,
            row.saturating_mul(spacing),
        )
    }
}

impl PlacementEngine for GridEngine {
    fn initial_placements(&self) -> Vec<Placement> {
        Vec::new()
    }

    fn place(&mut self, key: &str) -> Vec<Placement> {
        let position = self.cell(self.placed);
        self.placed = self.placed.saturating_add(1);
        trace!(key, position:% = position; "Placed module on grid");
        vec![Placement::new(key, position)]
    }

    fn stats(&self) -> PlacementStats {
        PlacementStats::default()
    }
}
