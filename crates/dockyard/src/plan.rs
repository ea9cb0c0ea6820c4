//! Plan assembly: from parsed module requests to an ordered station layout.
//!
//! A [`PlanRequest`] expands into catalog keys in a fixed order: docks,
//! piers, container storage, solid storage, liquid storage, then every
//! production module repeated by its count. [`layout_plan`] feeds those keys
//! to the configured engine one at a time.

use std::iter;

use log::{debug, info, warn};

use dockyard_core::{
    catalog::Catalog,
    mapping::{Culture, StorageKind, macro_for_module_id},
    placement::Placement,
};
use dockyard_parser::ModuleRequest;

use crate::{
    config::{LayoutConfig, LayoutEngine},
    layout::{PlacementStats, engine_for},
};

/// Everything requested for one station.
#[derive(Debug, Clone, Default)]
pub struct PlanRequest {
    modules: Vec<ModuleRequest>,
    culture: Culture,
    docks: u32,
    piers: u32,
    container_storage: u32,
    solid_storage: u32,
    liquid_storage: u32,
}

impl PlanRequest {
    /// Creates a request for the given production modules and nothing else.
    pub fn new(modules: Vec<ModuleRequest>) -> Self {
        Self {
            modules,
            ..Self::default()
        }
    }

    /// Sets the faction style used for docks, piers and storage.
    pub fn with_culture(mut self, culture: Culture) -> Self {
        self.culture = culture;
        self
    }

    /// Sets the number of medium trade docks.
    pub fn with_docks(mut self, count: u32) -> Self {
        self.docks = count;
        self
    }

    /// Sets the number of large-ship piers.
    pub fn with_piers(mut self, count: u32) -> Self {
        self.piers = count;
        self
    }

    /// Sets the number of large storage modules of one kind.
    pub fn with_storage(mut self, kind: StorageKind, count: u32) -> Self {
        match kind {
            StorageKind::Container => self.container_storage = count,
            StorageKind::Solid => self.solid_storage = count,
            StorageKind::Liquid => self.liquid_storage = count,
        }
        self
    }

    pub fn modules(&self) -> &[ModuleRequest] {
        &self.modules
    }

    pub fn culture(&self) -> Culture {
        self.culture
    }

    /// Total number of modules the plan will request.
    pub fn module_count(&self) -> u64 {
        let fixed = [
            self.docks,
            self.piers,
            self.container_storage,
            self.solid_storage,
            self.liquid_storage,
        ];
        fixed
            .into_iter()
            .chain(self.modules.iter().map(ModuleRequest::count))
            .map(u64::from)
            .sum()
    }

    /// Catalog keys in placement order.
    pub fn keys(&self) -> impl Iterator<Item = String> + '_ {
        let culture = self.culture;
        let fixed = [
            (culture.dock_key(), self.docks),
            (culture.pier_key(), self.piers),
            (
                culture.storage_key(StorageKind::Container),
                self.container_storage,
            ),
            (culture.storage_key(StorageKind::Solid), self.solid_storage),
            (culture.storage_key(StorageKind::Liquid), self.liquid_storage),
        ];

        let production = self
            .modules
            .iter()
            .map(|module| (macro_for_module_id(module.id()), module.count()));

        fixed
            .into_iter()
            .chain(production)
            .flat_map(|(key, count)| iter::repeat_n(key, count as usize))
    }
}

/// A finished layout, ready for export.
#[derive(Debug, Clone)]
pub struct Layout {
    placements: Vec<Placement>,
    stats: PlacementStats,
    engine: LayoutEngine,
    unknown_keys: Vec<String>,
}

impl Layout {
    /// Creates a layout from placements in output order.
    pub fn new(placements: Vec<Placement>, engine: LayoutEngine) -> Self {
        Self {
            placements,
            stats: PlacementStats::default(),
            engine,
            unknown_keys: Vec::new(),
        }
    }

    /// Placements in output order.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// How the engine satisfied the requests.
    pub fn stats(&self) -> PlacementStats {
        self.stats
    }

    /// The engine that produced this layout.
    pub fn engine(&self) -> LayoutEngine {
        self.engine
    }

    /// Requested keys missing from the catalog, in first-seen order.
    pub fn unknown_keys(&self) -> &[String] {
        &self.unknown_keys
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

/// Lays out every module of `request` with the engine `config` selects.
pub fn layout_plan(request: &PlanRequest, config: &LayoutConfig, catalog: &Catalog) -> Layout {
    info!(
        engine:% = config.engine(),
        culture:% = request.culture(),
        modules = request.module_count();
        "Laying out station"
    );

    let mut engine = engine_for(config, catalog);
    let mut placements = engine.initial_placements();
    let mut unknown_keys: Vec<String> = Vec::new();

    for key in request.keys() {
        if !catalog.contains(&key) && !unknown_keys.contains(&key) {
            warn!(key:% = key; "Module not in catalog, using default size");
            unknown_keys.push(key.clone());
        }
        placements.extend(engine.place(&key));
    }

    let stats = engine.stats();
    debug!(
        placements = placements.len(),
        connectors = stats.connectors,
        rollbacks = stats.rollbacks,
        fallbacks = stats.fallbacks;
        "Layout complete"
    );

    Layout {
        placements,
        stats,
        engine: config.engine(),
        unknown_keys,
    }
}

#[cfg(test)]
mod tests {
    use dockyard_core::{catalog::CONNECTOR_KEY, geometry::Vec3};

    use super::*;
    use crate::config::{AttachConfig, GridConfig};

    fn sample_request() -> PlanRequest {
        PlanRequest::new(vec![
            ModuleRequest::new("module_gen_prod_hullparts_01", 2),
            ModuleRequest::new("module_gen_prod_energycells_01", 1),
        ])
    }

    #[test]
    fn test_keys_follow_fixed_order() {
        let request = sample_request()
            .with_culture(Culture::Teladi)
            .with_docks(1)
            .with_piers(1)
            .with_storage(StorageKind::Container, 1)
            .with_storage(StorageKind::Solid, 1)
            .with_storage(StorageKind::Liquid, 2);

        let keys: Vec<String> = request.keys().collect();
        assert_eq!(
            keys,
            vec![
                "dockarea_tel_m_02_tradestation_01_macro",
                "pier_tel_harbor_03_macro",
                "storage_tel_l_container_01_macro",
                "storage_tel_l_solid_01_macro",
                "storage_tel_l_liquid_01_macro",
                "storage_tel_l_liquid_01_macro",
                "prod_gen_hullparts_macro",
                "prod_gen_hullparts_macro",
                "prod_gen_energycells_macro",
            ]
        );
        assert_eq!(request.module_count(), 9);
    }

    #[test]
    fn test_zero_count_modules_are_skipped() {
        let request = PlanRequest::new(vec![
            ModuleRequest::new("module_gen_prod_graphene_01", 0),
            ModuleRequest::new("module_gen_prod_microchips_01", 1),
        ]);
        let keys: Vec<String> = request.keys().collect();
        assert_eq!(keys, vec!["prod_gen_microchips_macro"]);
    }

    #[test]
    fn test_attach_layout_starts_with_connector() {
        let catalog = Catalog::default();
        let layout = layout_plan(&sample_request(), &LayoutConfig::default(), &catalog);

        assert_eq!(layout.engine(), LayoutEngine::Attach);
        assert_eq!(layout.placements()[0].key(), CONNECTOR_KEY);
        assert_eq!(layout.placements()[0].position(), Vec3::ZERO);

        let modules = layout
            .placements()
            .iter()
            .filter(|p| p.key() != CONNECTOR_KEY)
            .count();
        assert_eq!(modules, 3);
        assert_eq!(layout.len(), 1 + 3 + layout.stats().connectors);
        assert!(layout.unknown_keys().is_empty());
    }

    #[test]
    fn test_grid_layout_has_one_placement_per_key() {
        let catalog = Catalog::default();
        let config = LayoutConfig::new(
            LayoutEngine::Grid,
            AttachConfig::default(),
            GridConfig::default(),
        );
        let layout = layout_plan(&sample_request().with_docks(1), &config, &catalog);

        let keys: Vec<&str> = layout.placements().iter().map(|p| p.key()).collect();
        assert_eq!(
            keys,
            vec![
                "dockarea_arg_m_02_tradestation_01_macro",
                "prod_gen_hullparts_macro",
                "prod_gen_hullparts_macro",
                "prod_gen_energycells_macro",
            ]
        );
        assert_eq!(layout.placements()[0].position(), Vec3::ZERO);
        assert_eq!(layout.placements()[3].position(), Vec3::new(15_000, 0, 0));
    }

    #[test]
    fn test_unknown_keys_are_reported_once() {
        let catalog = Catalog::default();
        let request = PlanRequest::new(vec![
            ModuleRequest::new("module_mystery_01", 3),
            ModuleRequest::new("module_gen_prod_graphene_01", 1),
        ]);

        let layout = layout_plan(&request, &LayoutConfig::default(), &catalog);

        assert_eq!(layout.unknown_keys(), ["mystery_macro".to_string()]);
        assert_eq!(
            layout
                .placements()
                .iter()
                .filter(|p| p.key() == "mystery_macro")
                .count(),
            3
        );
    }

    #[test]
    fn test_empty_request_yields_bootstrap_only() {
        let catalog = Catalog::default();
        let layout = layout_plan(&PlanRequest::default(), &LayoutConfig::default(), &catalog);
        assert_eq!(layout.len(), 1);
    }
}
