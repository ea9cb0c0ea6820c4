//! Attachment-point placement.
//!
//! The station grows outward from a connector at the origin. Each request is
//! satisfied by the first of three passes that succeeds:
//!
//! 1. **Direct**: attach the module to the open node nearest the origin
//!    whose candidate box is free.
//! 2. **Connector**: insert a connector at a free node and chain the module
//!    outward from it. If the chained module collides, the connector is
//!    rolled back and the next node is tried.
//! 3. **Fallback**: park the module on the +X axis far from the structure,
//!    stepping outward until its box is free.

use log::{debug, trace, warn};

use dockyard_core::{
    catalog::{Catalog, ModuleInfo},
    geometry::{Direction, Vec3},
    placement::Placement,
};

use crate::{
    config::AttachConfig,
    layout::{
        PlacementEngine, PlacementStats,
        structure::{OpenNode, StructureState},
    },
};

/// Greedy attachment engine over a [`StructureState`].
#[derive(Debug)]
pub struct AttachEngine<'a> {
    catalog: &'a Catalog,
    config: AttachConfig,
    state: StructureState,
    stats: PlacementStats,
}

impl<'a> AttachEngine<'a> {
    /// Creates an engine whose structure starts with the configured
    /// connector at the origin.
    pub fn new(catalog: &'a Catalog, config: AttachConfig) -> Self {
        let state = StructureState::bootstrap(
            config.connector_key(),
            catalog.lookup(config.connector_key()),
        );
        Self {
            catalog,
            config,
            state,
            stats: PlacementStats::default(),
        }
    }

    /// Returns the structure built so far.
    pub fn state(&self) -> &StructureState {
        &self.state
    }

    /// Mutable access to the structure, for seeding obstacles.
    pub fn state_mut(&mut self) -> &mut StructureState {
        &mut self.state
    }

    fn try_direct(
        &mut self,
        ranked: &[(usize, OpenNode)],
        key: &str,
        info: &ModuleInfo,
    ) -> Option<Placement> {
        for &(index, node) in ranked {
            let candidate = offset_from(node, info, info.buffer());
            if self.state.collides(candidate, info) {
                trace!(key, node:% = node.position(), direction:% = node.direction(); "Direct candidate collides");
                continue;
            }

            let _ = self.state.attach(index, key, candidate, info);
            debug!(key, position:% = candidate, direction:% = node.direction(); "Attached module");
            return Some(Placement::new(key, candidate));
        }
        None
    }

    fn try_connector(
        &mut self,
        ranked: &[(usize, OpenNode)],
        key: &str,
        info: &ModuleInfo,
    ) -> Option<Vec<Placement>> {
        let connector_key = self.config.connector_key().to_string();
        let connector = self.catalog.lookup(&connector_key).clone();

        for &(index, node) in ranked {
            let direction = node.direction();
            let bridge = offset_from(node, &connector, self.config.connector_buffer());
            if self.state.collides(bridge, &connector) {
                continue;
            }

            let undo = self.state.attach(index, connector_key.as_str(), bridge, &connector);

            let axis = direction.axis();
            let reach = (connector.size().component(axis) / 2)
                .saturating_add(info.size().component(axis) / 2)
                .saturating_add(self.config.chained_clearance());
            let target = direction.step(bridge, reach);

            if self.state.collides(target, info) {
                self.state.undo(undo);
                self.stats.rollbacks += 1;
                trace!(key, connector:% = bridge; "Chained target collides, connector rolled back");
                continue;
            }

            self.state.chain(key, target, info);
            self.stats.connectors += 1;
            debug!(key, connector:% = bridge, position:% = target; "Attached module through inserted connector");
            return Some(vec![
                Placement::new(connector_key.as_str(), bridge),
                Placement::new(key, target),
            ]);
        }
        None
    }

    fn place_fallback(&mut self, key: &str, info: &ModuleInfo) -> Placement {
        let step = self.config.fallback_step();
        let count = i32::try_from(self.state.placed().len()).unwrap_or(i32::MAX);
        let anchor = Vec3::new(
            self.config
                .fallback_origin()
                .saturating_add(count.saturating_mul(step)),
            0,
            0,
        );

        // Walk back toward the station once +X runs out of room.
        let position = self
            .free_slot(anchor, info, Direction::POS_X)
            .or_else(|| self.free_slot(anchor, info, Direction::NEG_X))
            .unwrap_or(anchor);

        self.state.isolate(key, position, info);
        self.stats.fallbacks += 1;
        warn!(key, position:% = position; "No free attachment point, module placed apart from the station");
        Placement::new(key, position)
    }

    /// First slot from `start` along `direction`, in fallback steps, where
    /// `info` overlaps nothing. `None` once the coordinate range is exhausted.
    fn free_slot(&self, start: Vec3, info: &ModuleInfo, direction: Direction) -> Option<Vec3> {
        let step = self.config.fallback_step();
        let mut position = start;
        while self.state.collides(position, info) {
            let next = direction.step(position, step);
            if next == position {
                return None;
            }
            position = next;
        }
        Some(position)
    }
}

impl PlacementEngine for AttachEngine<'_> {
    fn initial_placements(&self) -> Vec<Placement> {
        self.state
            .placed()
            .iter()
            .map(|module| module.to_placement())
            .collect()
    }

    fn place(&mut self, key: &str) -> Vec<Placement> {
        let info = self.catalog.lookup(key).clone();
        let ranked = self.state.ranked_nodes();
        trace!(key, open_nodes = ranked.len(); "Placing module");

        if let Some(placement) = self.try_direct(&ranked, key, &info) {
            return vec![placement];
        }
        if let Some(placements) = self.try_connector(&ranked, key, &info) {
            return placements;
        }
        vec![self.place_fallback(key, &info)]
    }

    fn stats(&self) -> PlacementStats {
        self.stats
    }
}

/// Center of a module with `info` pushed out from `node` by its half-extent
/// along the node's axis plus `gap`.
fn offset_from(node: OpenNode, info: &ModuleInfo, gap: i32) -> Vec3 {
    let direction = node.direction();
    let reach = (info.size().component(direction.axis()) / 2).saturating_add(gap);
    direction.step(node.position(), reach)
}
