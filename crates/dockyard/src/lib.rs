//! Dockyard - Station blueprints from station-calculator share links.
//!
//! Parsing, layout, and export for turning a calculator share link into a
//! construction plan the game can import. Modules are attached to each other
//! through connection points so the station stays connected and free of
//! overlaps.

pub mod config;
pub mod export;
pub mod layout;
pub mod plan;

mod error;

pub use dockyard_core::{catalog, geometry, mapping, placement};
pub use dockyard_parser::{ModuleRequest, ShareList};

pub use error::DockyardError;

use log::{debug, info, trace};

use catalog::Catalog;
use config::AppConfig;
use export::{Exporter, xml::PlanXml};
use plan::{Layout, PlanRequest};

/// Builder for parsing share links and producing plan files.
///
/// # Examples
///
/// ```rust
/// use dockyard::{BlueprintBuilder, config::AppConfig, plan::PlanRequest};
///
/// let link = "https://x4-game.com/#/station-calculator?l=@$module-module_gen_prod_graphene_01,count:2;";
///
/// let builder = BlueprintBuilder::new(AppConfig::default()).expect("valid config");
///
/// // Parse the link into module requests
/// let list = builder.parse(link).expect("Failed to parse");
///
/// // Lay the station out and write the plan
/// let layout = builder.layout(&PlanRequest::new(list.into_modules()));
/// let xml = builder.render_xml(&layout, "Graphene Plant").expect("Failed to render");
/// assert!(xml.contains("prod_gen_graphene_macro"));
/// ```
#[derive(Debug, Default)]
pub struct BlueprintBuilder {
    config: AppConfig,
    catalog: Catalog,
}

impl BlueprintBuilder {
    /// Create a new builder with the given configuration.
    ///
    /// The configuration is validated and its catalog entries are applied
    /// over the standard module table.
    ///
    /// # Errors
    ///
    /// Returns `DockyardError::Config` if the configuration is invalid.
    pub fn new(config: AppConfig) -> Result<Self, DockyardError> {
        config.validate()?;
        let catalog = config.catalog().build()?;
        debug!(modules = catalog.len(); "Catalog ready");
        Ok(Self { config, catalog })
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns the module catalog in use.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Parse a share link into module requests.
    ///
    /// Skipped entries do not fail parsing; they are reported through
    /// [`ShareList::warnings`].
    ///
    /// # Errors
    ///
    /// Returns `DockyardError::Parse` when the link has no module list, a
    /// count is out of range, or no module could be read.
    pub fn parse(&self, link: &str) -> Result<ShareList, DockyardError> {
        info!("Parsing share link");

        let list = dockyard_parser::parse(link)?;

        for warning in list.warnings() {
            debug!(warning:% = warning; "Share link entry skipped");
        }
        debug!(modules = list.modules().len(); "Share link parsed successfully");
        trace!(modules:? = list.modules(); "Parsed modules");

        Ok(list)
    }

    /// Lay out every module of `request` with the configured engine.
    ///
    /// Placement never fails; modules that cannot attach anywhere are placed
    /// apart from the station and counted in [`Layout::stats`].
    pub fn layout(&self, request: &PlanRequest) -> Layout {
        let layout = plan::layout_plan(request, self.config.layout(), &self.catalog);
        info!(
            placements = layout.len(),
            connectors = layout.stats().connectors,
            fallbacks = layout.stats().fallbacks;
            "Layout calculated"
        );
        layout
    }

    /// Render a layout as construction-plan XML.
    ///
    /// # Errors
    ///
    /// Returns `DockyardError::Export` for a blank plan name or an empty
    /// layout.
    pub fn render_xml(&self, layout: &Layout, name: &str) -> Result<String, DockyardError> {
        let xml = PlanXml::new(name).export(layout)?;
        info!(entries = layout.len(); "Plan rendered successfully");
        Ok(xml)
    }
}
