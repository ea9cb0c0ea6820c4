//! Module catalog: sizes, buffers and attachment points per module type.
//!
//! A [`Catalog`] maps catalog keys (game macro names) to [`ModuleInfo`]. It is
//! built once, never mutated afterwards, and passed by reference to whatever
//! needs it. Lookups are total: keys missing from the table resolve to a fixed
//! fallback entry instead of failing.
//!
//! # Example
//!
//! ```
//! # use dockyard_core::{catalog::Catalog, geometry::Vec3};
//! let catalog = Catalog::default();
//!
//! let storage = catalog.lookup("storage_arg_l_container_01_macro");
//! assert_eq!(storage.size(), Vec3::splat(800));
//!
//! let unknown = catalog.lookup("no_such_module_macro");
//! assert_eq!(unknown.size(), Vec3::splat(500));
//! ```

use indexmap::{IndexMap, map::Entry};
use log::debug;
use serde::Deserialize;
use thiserror::Error;

use crate::geometry::{Direction, Vec3};

/// Catalog key of the six-way cross connector used to bootstrap a station
/// and to bridge space when no direct attachment fits.
pub const CONNECTOR_KEY: &str = "structures_arg_connector_cross_01_macro";

/// Buffer applied to entries that do not specify one.
pub const DEFAULT_BUFFER: i32 = 50;

/// Edge length of the cube used for unknown catalog keys.
pub const FALLBACK_SIDE: i32 = 500;

/// Standard module table: key and full bounding-box extents in meters.
const STANDARD_MODULES: &[(&str, [i32; 3])] = &[
    // Connectors
    (CONNECTOR_KEY, [200, 200, 200]),
    // Docks
    ("dockarea_arg_m_02_tradestation_01_macro", [400, 200, 400]),
    ("pier_arg_harbor_03_macro", [1200, 400, 2000]),
    // Storage (L)
    ("storage_arg_l_container_01_macro", [800, 800, 800]),
    ("storage_arg_l_solid_01_macro", [800, 800, 800]),
    ("storage_arg_l_liquid_01_macro", [800, 800, 800]),
    // Production
    ("prod_gen_hullparts_macro", [1000, 400, 1000]),
    ("prod_gen_energycells_macro", [1200, 200, 1200]),
    ("prod_gen_refinedmetals_macro", [600, 800, 600]),
    ("prod_gen_graphene_macro", [600, 600, 600]),
    ("prod_gen_siliconwafers_macro", [600, 600, 800]),
    ("prod_gen_superfluidcoolant_macro", [600, 800, 600]),
    ("prod_gen_microchips_macro", [800, 400, 800]),
    ("prod_gen_smartchips_macro", [600, 400, 600]),
    ("prod_gen_advancedelectronics_macro", [900, 500, 900]),
    ("prod_gen_antimattercells_macro", [700, 700, 700]),
    ("prod_gen_engineparts_macro", [900, 600, 900]),
    ("prod_gen_shieldcomponents_macro", [900, 500, 900]),
    ("prod_gen_turretcomponents_macro", [800, 500, 800]),
    ("prod_gen_weaponcomponents_macro", [800, 500, 800]),
    ("prod_gen_fieldcoils_macro", [700, 500, 700]),
    ("prod_gen_scanningarrays_macro", [700, 800, 700]),
    ("prod_gen_quantumtubes_macro", [600, 800, 600]),
    ("prod_gen_plasmaconductors_macro", [700, 700, 700]),
    ("prod_gen_claytronics_macro", [1000, 600, 1000]),
    ("prod_arg_meat_macro", [800, 600, 800]),
    ("prod_arg_wheat_macro", [1000, 200, 1000]),
    ("prod_arg_foodrations_macro", [800, 600, 800]),
    ("prod_arg_medicalsupplies_macro", [800, 800, 800]),
];

/// Errors raised when building a catalog from external entries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("catalog entry `{key}` has non-positive size {size}")]
    NonPositiveSize { key: String, size: Vec3 },

    #[error("catalog entry `{key}` has negative buffer {buffer}")]
    NegativeBuffer { key: String, buffer: i32 },

    #[error("catalog entry has an empty key")]
    EmptyKey,
}

/// An attachment point template, relative to its module's center.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionNode {
    offset: Vec3,
    direction: Direction,
}

impl ConnectionNode {
    /// Creates a connection node at `offset` facing `direction`.
    pub fn new(offset: Vec3, direction: Direction) -> Self {
        Self { offset, direction }
    }

    /// Position of the node relative to the module center.
    pub fn offset(&self) -> Vec3 {
        self.offset
    }

    /// Outward-facing direction of the node.
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

/// Catalog entry describing one module type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleInfo {
    size: Vec3,
    buffer: i32,
    connections: Vec<ConnectionNode>,
}

impl ModuleInfo {
    /// Creates a module description with six cardinal connection nodes.
    ///
    /// Each node sits at the truncated half-extent on its axis and faces
    /// outward, in `+X, -X, +Y, -Y, +Z, -Z` order.
    pub fn new(size: Vec3, buffer: i32) -> Self {
        let half = size.half();
        let connections = Direction::ALL
            .iter()
            .map(|&direction| {
                let reach = half.component(direction.axis());
                ConnectionNode::new(direction.step(Vec3::ZERO, reach), direction)
            })
            .collect();

        Self {
            size,
            buffer,
            connections,
        }
    }

    /// Replaces the generated connection nodes (builder style).
    pub fn with_connections(mut self, connections: Vec<ConnectionNode>) -> Self {
        self.connections = connections;
        self
    }

    /// Full bounding-box extents.
    pub fn size(&self) -> Vec3 {
        self.size
    }

    /// Clearance added when proposing positions next to an attachment point.
    pub fn buffer(&self) -> i32 {
        self.buffer
    }

    /// Attachment points of this module, in declaration order.
    pub fn connections(&self) -> &[ConnectionNode] {
        &self.connections
    }
}

/// An externally supplied catalog entry, as found in configuration files.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogEntry {
    key: String,
    size: [i32; 3],
    #[serde(default = "default_buffer")]
    buffer: i32,
}

fn default_buffer() -> i32 {
    DEFAULT_BUFFER
}

impl CatalogEntry {
    /// Creates a catalog entry.
    pub fn new(key: impl Into<String>, size: [i32; 3], buffer: i32) -> Self {
        Self {
            key: key.into(),
            size,
            buffer,
        }
    }

    /// Returns the catalog key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Checks the entry and converts it into a [`ModuleInfo`].
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the key is empty, any extent is not
    /// positive, or the buffer is negative.
    pub fn to_module_info(&self) -> Result<ModuleInfo, CatalogError> {
        let [x, y, z] = self.size;
        let size = Vec3::new(x, y, z);

        if self.key.is_empty() {
            return Err(CatalogError::EmptyKey);
        }
        if x <= 0 || y <= 0 || z <= 0 {
            return Err(CatalogError::NonPositiveSize {
                key: self.key.clone(),
                size,
            });
        }
        if self.buffer < 0 {
            return Err(CatalogError::NegativeBuffer {
                key: self.key.clone(),
                buffer: self.buffer,
            });
        }

        Ok(ModuleInfo::new(size, self.buffer))
    }
}

/// Immutable mapping from catalog key to [`ModuleInfo`].
#[derive(Debug, Clone)]
pub struct Catalog {
    modules: IndexMap<String, ModuleInfo>,
    fallback: ModuleInfo,
}

impl Catalog {
    /// Creates an empty catalog that resolves every key to `fallback`.
    pub fn new(fallback: ModuleInfo) -> Self {
        Self {
            modules: IndexMap::new(),
            fallback,
        }
    }

    /// Adds an entry; the first definition of a key wins (builder style).
    pub fn with_module(mut self, key: impl Into<String>, info: ModuleInfo) -> Self {
        if let Entry::Vacant(slot) = self.modules.entry(key.into()) {
            slot.insert(info);
        }
        self
    }

    /// Adds or replaces entries from external definitions.
    ///
    /// Unlike [`Self::with_module`], these entries override existing keys so
    /// configuration can correct the built-in sizes.
    ///
    /// # Errors
    ///
    /// Returns the first [`CatalogError`] found among `entries`.
    pub fn with_entries<'a>(
        mut self,
        entries: impl IntoIterator<Item = &'a CatalogEntry>,
    ) -> Result<Self, CatalogError> {
        for entry in entries {
            let info = entry.to_module_info()?;
            debug!(key = entry.key(), size:% = info.size(); "Catalog entry overridden");
            self.modules.insert(entry.key.clone(), info);
        }
        Ok(self)
    }

    /// Resolves `key`, falling back to the default cube for unknown keys.
    pub fn lookup(&self, key: &str) -> &ModuleInfo {
        self.modules.get(key).unwrap_or(&self.fallback)
    }

    /// Returns `true` if `key` has its own entry.
    pub fn contains(&self, key: &str) -> bool {
        self.modules.contains_key(key)
    }

    /// The entry returned for unknown keys.
    pub fn fallback(&self) -> &ModuleInfo {
        &self.fallback
    }

    /// Number of known keys.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Returns `true` if no key has its own entry.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Iterates over known entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ModuleInfo)> {
        self.modules.iter().map(|(key, info)| (key.as_str(), info))
    }
}

impl Default for Catalog {
    /// The standard station module table.
    fn default() -> Self {
        let fallback = ModuleInfo::new(Vec3::splat(FALLBACK_SIDE), DEFAULT_BUFFER);
        STANDARD_MODULES
            .iter()
            .fold(Self::new(fallback), |catalog, &(key, [x, y, z])| {
                catalog.with_module(key, ModuleInfo::new(Vec3::new(x, y, z), DEFAULT_BUFFER))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_info_generates_cardinal_connections() {
        let info = ModuleInfo::new(Vec3::new(1000, 400, 600), 50);
        let connections = info.connections();

        assert_eq!(connections.len(), 6);
        assert_eq!(connections[0], ConnectionNode::new(Vec3::new(500, 0, 0), Direction::POS_X));
        assert_eq!(connections[1], ConnectionNode::new(Vec3::new(-500, 0, 0), Direction::NEG_X));
        assert_eq!(connections[2], ConnectionNode::new(Vec3::new(0, 200, 0), Direction::POS_Y));
        assert_eq!(connections[3], ConnectionNode::new(Vec3::new(0, -200, 0), Direction::NEG_Y));
        assert_eq!(connections[4], ConnectionNode::new(Vec3::new(0, 0, 300), Direction::POS_Z));
        assert_eq!(connections[5], ConnectionNode::new(Vec3::new(0, 0, -300), Direction::NEG_Z));
    }

    #[test]
    fn test_connection_offsets_truncate() {
        let info = ModuleInfo::new(Vec3::new(5, 5, 5), 0);
        assert_eq!(info.connections()[0].offset(), Vec3::new(2, 0, 0));
    }

    #[test]
    fn test_default_catalog_known_entries() {
        let catalog = Catalog::default();

        let connector = catalog.lookup(CONNECTOR_KEY);
        assert_eq!(connector.size(), Vec3::splat(200));
        assert_eq!(connector.buffer(), DEFAULT_BUFFER);

        let pier = catalog.lookup("pier_arg_harbor_03_macro");
        assert_eq!(pier.size(), Vec3::new(1200, 400, 2000));

        assert_eq!(catalog.len(), STANDARD_MODULES.len());
    }

    #[test]
    fn test_unknown_key_resolves_to_fallback() {
        let catalog = Catalog::default();
        let info = catalog.lookup("prod_xen_unknown_macro");

        assert_eq!(info.size(), Vec3::splat(500));
        assert_eq!(info.buffer(), DEFAULT_BUFFER);
        assert_eq!(info.connections().len(), 6);
        assert!(!catalog.contains("prod_xen_unknown_macro"));
    }

    #[test]
    fn test_with_module_keeps_first_definition() {
        let catalog = Catalog::new(ModuleInfo::new(Vec3::splat(1), 0))
            .with_module("a", ModuleInfo::new(Vec3::splat(10), 0))
            .with_module("a", ModuleInfo::new(Vec3::splat(20), 0));

        assert_eq!(catalog.lookup("a").size(), Vec3::splat(10));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_with_entries_overrides_and_adds() {
        let entries = vec![
            CatalogEntry::new(CONNECTOR_KEY, [250, 250, 250], 25),
            CatalogEntry::new("prod_custom_macro", [300, 300, 300], 0),
        ];
        let catalog = Catalog::default().with_entries(&entries).unwrap();

        assert_eq!(catalog.lookup(CONNECTOR_KEY).size(), Vec3::splat(250));
        assert_eq!(catalog.lookup(CONNECTOR_KEY).buffer(), 25);
        assert_eq!(catalog.lookup("prod_custom_macro").size(), Vec3::splat(300));
    }

    #[test]
    fn test_with_entries_rejects_invalid() {
        let zero = [CatalogEntry::new("bad", [0, 10, 10], 0)];
        assert!(matches!(
            Catalog::default().with_entries(&zero),
            Err(CatalogError::NonPositiveSize { .. })
        ));

        let negative = [CatalogEntry::new("bad", [10, 10, 10], -1)];
        assert_eq!(
            Catalog::default().with_entries(&negative).unwrap_err(),
            CatalogError::NegativeBuffer {
                key: "bad".to_string(),
                buffer: -1
            }
        );

        let empty = [CatalogEntry::new("", [10, 10, 10], 0)];
        assert_eq!(
            Catalog::default().with_entries(&empty).unwrap_err(),
            CatalogError::EmptyKey
        );
    }

    #[test]
    fn test_iter_preserves_insertion_order() {
        let catalog = Catalog::default();
        let first = catalog.iter().next().map(|(key, _)| key);
        assert_eq!(first, Some(CONNECTOR_KEY));
    }
}
