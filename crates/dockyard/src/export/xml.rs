//! Construction-plan XML export.
//!
//! The game's plan format is a flat list of entries under one `<plan>`:
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <plans>
//! <plan description="" id="imported_plan" name="Imported Plan">
//! <entry index="1" macro="structures_arg_connector_cross_01_macro">
//! <offset>
//! <position x="0" y="0" z="0"/>
//! </offset>
//! </entry>
//! </plan>
//! </plans>
//! ```
//!
//! A `<rotation>` element is written only for entries away from the origin,
//! matching the game's own files.

use log::debug;
use svg::{Node, node::element::Element};

use dockyard_core::placement::Placement;

use crate::{
    export::{Error, Exporter},
    plan::Layout,
};

const DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Writes a [`Layout`] as a named construction plan.
#[derive(Debug, Clone)]
pub struct PlanXml {
    name: String,
}

impl PlanXml {
    /// Creates an exporter for a plan called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The plan id: the name lowercased with spaces replaced by underscores.
    pub fn plan_id(&self) -> String {
        self.name.to_lowercase().replace(' ', "_")
    }

    fn entry(index: usize, placement: &Placement) -> Element {
        let position = placement.position();

        let mut position_element = Element::new("position");
        position_element.assign("x", position.x());
        position_element.assign("y", position.y());
        position_element.assign("z", position.z());

        let mut offset = Element::new("offset");
        offset.append(position_element);

        if !position.is_zero() {
            let orientation = placement.orientation();
            let mut rotation = Element::new("rotation");
            rotation.assign("yaw", orientation.yaw());
            rotation.assign("pitch", orientation.pitch());
            rotation.assign("roll", orientation.roll());
            offset.append(rotation);
        }

        let mut entry = Element::new("entry");
        entry.assign("index", index.to_string());
        entry.assign("macro", placement.key());
        entry.append(offset);
        entry
    }
}

impl Exporter for PlanXml {
    fn export(&self, layout: &Layout) -> Result<String, Error> {
        if self.name.trim().is_empty() {
            return Err(Error::EmptyPlanName);
        }
        if layout.is_empty() {
            return Err(Error::EmptyLayout);
        }

        let mut plan = Element::new("plan");
        plan.assign("id", self.plan_id());
        plan.assign("name", self.name.as_str());
        plan.assign("description", "");

        for (index, placement) in layout.placements().iter().enumerate() {
            plan.append(Self::entry(index + 1, placement));
        }

        let mut plans = Element::new("plans");
        plans.append(plan);

        debug!(plan_id = self.plan_id(), entries = layout.len(); "Plan serialized");
        Ok(format!("{DECLARATION}\n{plans}\n"))
    }
}
