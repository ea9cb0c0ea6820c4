//! Configuration types for Dockyard blueprint generation.
//!
//! This module provides configuration structures that control how stations
//! are laid out and which module sizes are used. All types implement
//! [`serde::Deserialize`] for loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and catalog settings.
//! - [`LayoutConfig`] - Selects the [`LayoutEngine`] and carries its tuning values.
//! - [`CatalogConfig`] - Extra or corrected module sizes layered over the standard table.
//!
//! # Example
//!
//! ```
//! # use dockyard::config::{AppConfig, LayoutEngine};
//! let config = AppConfig::default();
//! assert_eq!(config.layout().engine(), LayoutEngine::Attach);
//! assert!(config.validate().is_ok());
//! ```

use std::{fmt, path::PathBuf, str::FromStr};

use serde::Deserialize;
use thiserror::Error;

use dockyard_core::catalog::{CONNECTOR_KEY, Catalog, CatalogEntry, CatalogError, DEFAULT_BUFFER};

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Invalid `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },

    #[error("Invalid catalog entry: {0}")]
    Catalog(#[from] CatalogError),
}

/// Available placement strategies.
///
/// - `Attach` - Grows the station from a central connector, attaching each
///   module to a free connection point (default)
/// - `Grid` - Lays modules out in fixed-size rows without collision checks
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutEngine {
    #[default]
    Attach,
    Grid,
}

impl FromStr for LayoutEngine {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "attach" => Ok(Self::Attach),
            "grid" => Ok(Self::Grid),
            _ => Err("Unsupported layout engine"),
        }
    }
}

impl From<LayoutEngine> for &'static str {
    fn from(val: LayoutEngine) -> Self {
        match val {
            LayoutEngine::Attach => "attach",
            LayoutEngine::Grid => "grid",
        }
    }
}

impl fmt::Display for LayoutEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Catalog configuration section.
    #[serde(default)]
    catalog: CatalogConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    ///
    /// # Arguments
    ///
    /// * `layout` - Engine selection and placement tuning.
    /// * `catalog` - Module size overrides.
    pub fn new(layout: LayoutConfig, catalog: CatalogConfig) -> Self {
        Self { layout, catalog }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the catalog configuration.
    pub fn catalog(&self) -> &CatalogConfig {
        &self.catalog
    }

    /// Replaces the selected layout engine.
    pub fn with_engine(mut self, engine: LayoutEngine) -> Self {
        self.layout.engine = engine;
        self
    }

    /// Checks every section.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.layout.validate()?;
        self.catalog.build()?;
        Ok(())
    }
}

/// Layout configuration: which engine runs and how it is tuned.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct LayoutConfig {
    /// Placement strategy.
    #[serde(default)]
    engine: LayoutEngine,

    #[serde(default)]
    attach: AttachConfig,

    #[serde(default)]
    grid: GridConfig,
}

impl LayoutConfig {
    /// Creates a layout configuration.
    pub fn new(engine: LayoutEngine, attach: AttachConfig, grid: GridConfig) -> Self {
        Self {
            engine,
            attach,
            grid,
        }
    }

    /// Returns the selected [`LayoutEngine`].
    pub fn engine(&self) -> LayoutEngine {
        self.engine
    }

    /// Returns the attach engine settings.
    pub fn attach(&self) -> &AttachConfig {
        &self.attach
    }

    /// Returns the grid engine settings.
    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.attach.validate()?;
        self.grid.validate()
    }
}

/// Tuning for the attach engine.
///
/// ```toml
/// [layout.attach]
/// connector_key = "structures_arg_connector_cross_01_macro"
/// connector_buffer = 50
/// chained_clearance = 100
/// fallback_origin = 20000
/// fallback_step = 1000
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AttachConfig {
    /// Catalog key of the bootstrap and bridging connector.
    connector_key: String,

    /// Distance added beyond the connector's half-extent when it is inserted.
    connector_buffer: i32,

    /// Gap between an inserted connector and the module chained onto it.
    chained_clearance: i32,

    /// X coordinate of the first fallback slot.
    fallback_origin: i32,

    /// Spacing between fallback slots along X.
    fallback_step: i32,
}

impl Default for AttachConfig {
    fn default() -> Self {
        Self {
            connector_key: CONNECTOR_KEY.to_string(),
            connector_buffer: DEFAULT_BUFFER,
            chained_clearance: 100,
            fallback_origin: 20_000,
            fallback_step: 1_000,
        }
    }
}

impl AttachConfig {
    pub fn connector_key(&self) -> &str {
        &self.connector_key
    }

    pub fn connector_buffer(&self) -> i32 {
        self.connector_buffer
    }

    pub fn chained_clearance(&self) -> i32 {
        self.chained_clearance
    }

    pub fn fallback_origin(&self) -> i32 {
        self.fallback_origin
    }

    pub fn fallback_step(&self) -> i32 {
        self.fallback_step
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.connector_key.is_empty() {
            return Err(invalid("layout.attach.connector_key", "must not be empty"));
        }
        if self.connector_buffer < 0 {
            return Err(invalid(
                "layout.attach.connector_buffer",
                "must not be negative",
            ));
        }
        if self.chained_clearance < 0 {
            return Err(invalid(
                "layout.attach.chained_clearance",
                "must not be negative",
            ));
        }
        if self.fallback_step <= 0 {
            return Err(invalid("layout.attach.fallback_step", "must be positive"));
        }
        Ok(())
    }
}

/// Tuning for the grid engine.
///
/// ```toml
/// [layout.grid]
/// spacing = 5000
/// row_limit = 10
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Distance between neighbouring cells on both axes.
    spacing: i32,

    /// Entries per row before wrapping.
    row_limit: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            spacing: 5_000,
            row_limit: 10,
        }
    }
}

impl GridConfig {
    /// Creates a grid configuration.
    pub fn new(spacing: i32, row_limit: u32) -> Self {
        Self { spacing, row_limit }
    }

    pub fn spacing(&self) -> i32 {
        self.spacing
    }

    pub fn row_limit(&self) -> u32 {
        self.row_limit
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.spacing <= 0 {
            return Err(invalid("layout.grid.spacing", "must be positive"));
        }
        if self.row_limit == 0 {
            return Err(invalid("layout.grid.row_limit", "must be positive"));
        }
        Ok(())
    }
}

/// Module size overrides layered over the standard catalog.
///
/// ```toml
/// [[catalog.modules]]
/// key = "prod_gen_graphene_macro"
/// size = [600, 600, 600]
/// buffer = 50
/// ```
#[derive(Debug, Default, Clone, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    modules: Vec<CatalogEntry>,
}

impl CatalogConfig {
    /// Creates a catalog configuration from entries.
    pub fn new(modules: Vec<CatalogEntry>) -> Self {
        Self { modules }
    }

    /// Returns the configured entries.
    pub fn modules(&self) -> &[CatalogEntry] {
        &self.modules
    }

    /// Builds the standard catalog with these entries applied on top.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Catalog`] for the first invalid entry.
    pub fn build(&self) -> Result<Catalog, ConfigError> {
        Ok(Catalog::default().with_entries(&self.modules)?)
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use dockyard_core::geometry::Vec3;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.layout().engine(), LayoutEngine::Attach);
        assert_eq!(config.layout().attach().connector_key(), CONNECTOR_KEY);
        assert_eq!(config.layout().attach().connector_buffer(), 50);
        assert_eq!(config.layout().attach().chained_clearance(), 100);
        assert_eq!(config.layout().attach().fallback_origin(), 20_000);
        assert_eq!(config.layout().attach().fallback_step(), 1_000);
        assert_eq!(config.layout().grid().spacing(), 5_000);
        assert_eq!(config.layout().grid().row_limit(), 10);
        assert!(config.catalog().modules().is_empty());
    }

    #[test]
    fn test_deserialize_full_config() {
        let config: AppConfig = toml::from_str(
            r#"
            [layout]
            engine = "grid"

            [layout.attach]
            chained_clearance = 250

            [layout.grid]
            spacing = 3000
            row_limit = 4

            [[catalog.modules]]
            key = "prod_gen_graphene_macro"
            size = [700, 700, 700]

            [[catalog.modules]]
            key = "custom_macro"
            size = [100, 200, 300]
            buffer = 0
            "#,
        )
        .expect("valid config");

        assert_eq!(config.layout().engine(), LayoutEngine::Grid);
        assert_eq!(config.layout().attach().chained_clearance(), 250);
        assert_eq!(config.layout().attach().connector_buffer(), 50);
        assert_eq!(config.layout().grid(), &GridConfig::new(3000, 4));
        assert!(config.validate().is_ok());

        let catalog = config.catalog().build().expect("valid catalog");
        assert_eq!(
            catalog.lookup("prod_gen_graphene_macro").size(),
            Vec3::splat(700)
        );
        assert_eq!(catalog.lookup("custom_macro").buffer(), 0);
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: AppConfig = toml::from_str("").expect("empty config");
        assert_eq!(config.layout().engine(), LayoutEngine::default());
        assert_eq!(config.layout().attach(), &AttachConfig::default());
    }

    #[test]
    fn test_unknown_engine_is_rejected() {
        let result: Result<AppConfig, _> = toml::from_str("[layout]\nengine = \"spiral\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_bad_grid() {
        let config: AppConfig = toml::from_str("[layout.grid]\nspacing = 0").expect("parses");
        let err = config.validate().expect_err("zero spacing");
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "layout.grid.spacing",
                ..
            }
        ));

        let config: AppConfig = toml::from_str("[layout.grid]\nrow_limit = 0").expect("parses");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_buffers() {
        let config: AppConfig =
            toml::from_str("[layout.attach]\nconnector_buffer = -1").expect("parses");
        assert!(config.validate().is_err());

        let config: AppConfig =
            toml::from_str("[layout.attach]\nfallback_step = 0").expect("parses");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_catalog_entry() {
        let config: AppConfig = toml::from_str(
            r#"
            [[catalog.modules]]
            key = "broken_macro"
            size = [100, 0, 100]
            "#,
        )
        .expect("parses");
        let err = config.validate().expect_err("zero extent");
        assert!(matches!(err, ConfigError::Catalog(_)));
    }

    #[test]
    fn test_layout_engine_from_str() {
        assert_eq!("attach".parse::<LayoutEngine>(), Ok(LayoutEngine::Attach));
        assert_eq!("grid".parse::<LayoutEngine>(), Ok(LayoutEngine::Grid));
        assert!("force".parse::<LayoutEngine>().is_err());
        assert_eq!(LayoutEngine::Grid.to_string(), "grid");
    }

    #[test]
    fn test_with_engine_overrides_selection() {
        let config = AppConfig::default().with_engine(LayoutEngine::Grid);
        assert_eq!(config.layout().engine(), LayoutEngine::Grid);
    }
}
