//! The growing station: placed modules plus unconsumed attachment points.

use dockyard_core::{
    catalog::ModuleInfo,
    geometry::{Direction, Vec3, overlaps},
    placement::{Orientation, Placement},
};

/// How a placed module got its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// The bootstrap connector at the origin.
    Root,
    /// Attached to an open node, which it consumed.
    Node,
    /// Chained outward from a freshly inserted connector; consumes nothing.
    Chained,
    /// Placed away from the structure; registers no open nodes.
    Isolated,
}

/// A module instance in the structure. Never changes once placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedModule {
    key: String,
    position: Vec3,
    orientation: Orientation,
    info: ModuleInfo,
    anchor: Anchor,
}

impl PlacedModule {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Catalog entry resolved when the module was placed.
    pub fn info(&self) -> &ModuleInfo {
        &self.info
    }

    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// The output record for this module.
    pub fn to_placement(&self) -> Placement {
        Placement::new(self.key.clone(), self.position).with_orientation(self.orientation)
    }
}

/// An unconsumed attachment point in world space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenNode {
    position: Vec3,
    direction: Direction,
}

impl OpenNode {
    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    fn distance_from_origin(&self) -> i64 {
        self.position.manhattan_length()
    }
}

/// Everything needed to undo one [`StructureState::attach`].
#[derive(Debug, Clone, Copy)]
#[must_use = "an undo record must be applied or dropped explicitly"]
pub struct Undo {
    node_index: usize,
    node: OpenNode,
    placed_len: usize,
    open_len: usize,
}

/// Placed modules and open nodes, both kept in creation order.
///
/// Modules are only ever appended. Open nodes are appended in batches when a
/// module is placed and removed one at a time when consumed; removal keeps
/// the relative order of the remaining nodes, so creation order stays the
/// tiebreaker when ranking.
#[derive(Debug, Clone)]
pub struct StructureState {
    placed: Vec<PlacedModule>,
    open_nodes: Vec<OpenNode>,
}

impl StructureState {
    /// Starts a structure with `root` centered at the origin.
    pub fn bootstrap(key: impl Into<String>, root: &ModuleInfo) -> Self {
        let mut state = Self {
            placed: Vec::new(),
            open_nodes: Vec::new(),
        };
        state.push(key.into(), Vec3::ZERO, root, Anchor::Root);
        state
    }

    /// Placed modules in placement order.
    pub fn placed(&self) -> &[PlacedModule] {
        &self.placed
    }

    /// Open nodes in creation order.
    pub fn open_nodes(&self) -> &[OpenNode] {
        &self.open_nodes
    }

    /// Snapshot of `(index, node)` pairs, nearest to the origin first.
    ///
    /// The sort is stable, so nodes at equal Manhattan distance keep their
    /// creation order. Indices stay valid until the state is next mutated.
    pub fn ranked_nodes(&self) -> Vec<(usize, OpenNode)> {
        let mut ranked: Vec<(usize, OpenNode)> =
            self.open_nodes.iter().copied().enumerate().collect();
        ranked.sort_by_key(|(_, node)| node.distance_from_origin());
        ranked
    }

    /// Returns `true` if a module with `info` centered at `center` would
    /// overlap any placed module.
    pub fn collides(&self, center: Vec3, info: &ModuleInfo) -> bool {
        self.placed
            .iter()
            .any(|module| overlaps(center, info, module.position, &module.info))
    }

    /// Places a module against the open node at `node_index`, consuming it
    /// and registering the module's own nodes.
    ///
    /// # Panics
    ///
    /// Panics if `node_index` is out of bounds.
    pub fn attach(
        &mut self,
        node_index: usize,
        key: impl Into<String>,
        position: Vec3,
        info: &ModuleInfo,
    ) -> Undo {
        let node = self.open_nodes.remove(node_index);
        let placed_len = self.placed.len();
        let open_len = self.open_nodes.len();

        self.push(key.into(), position, info, Anchor::Node);

        Undo {
            node_index,
            node,
            placed_len,
            open_len,
        }
    }

    /// Places a module next to a just-inserted connector without consuming
    /// any node.
    pub fn chain(&mut self, key: impl Into<String>, position: Vec3, info: &ModuleInfo) {
        self.push(key.into(), position, info, Anchor::Chained);
    }

    /// Places a module that takes part in collision checks but offers no
    /// attachment points.
    pub fn isolate(&mut self, key: impl Into<String>, position: Vec3, info: &ModuleInfo) {
        self.placed.push(PlacedModule {
            key: key.into(),
            position,
            orientation: Orientation::CANONICAL,
            info: info.clone(),
            anchor: Anchor::Isolated,
        });
    }

    /// Reverts an [`Self::attach`], restoring the exact prior state.
    ///
    /// Must be applied before any other mutation.
    pub fn undo(&mut self, undo: Undo) {
        self.placed.truncate(undo.placed_len);
        self.open_nodes.truncate(undo.open_len);
        self.open_nodes.insert(undo.node_index, undo.node);
    }

    fn push(&mut self, key: String, position: Vec3, info: &ModuleInfo, anchor: Anchor) {
        self.open_nodes
            .extend(info.connections().iter().map(|connection| OpenNode {
                position: position.add_vec(connection.offset()),
                direction: connection.direction(),
            }));
        self.placed.push(PlacedModule {
            key,
            position,
            orientation: Orientation::CANONICAL,
            info: info.clone(),
            anchor,
        });
    }
}
