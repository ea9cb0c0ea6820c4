//! Example: Creating a plan from module requests
//!
//! This example demonstrates how to build a station plan programmatically,
//! without parsing a share link.

use dockyard::{
    BlueprintBuilder, ModuleRequest,
    config::AppConfig,
    mapping::{Culture, StorageKind},
    plan::PlanRequest,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Building plan from module requests...\n");

    let request = PlanRequest::new(vec![
        ModuleRequest::new("module_gen_prod_energycells_01", 4),
        ModuleRequest::new("module_gen_prod_refinedmetals_01", 2),
        ModuleRequest::new("module_gen_prod_hullparts_01", 1),
    ])
    .with_culture(Culture::Paranid)
    .with_docks(1)
    .with_storage(StorageKind::Container, 1)
    .with_storage(StorageKind::Solid, 1);

    let builder = BlueprintBuilder::new(AppConfig::default())?;
    let layout = builder.layout(&request);

    for placement in layout.placements() {
        println!("  {placement}");
    }
    println!(
        "\n{} placements, {} connectors inserted, {} placed apart",
        layout.len(),
        layout.stats().connectors,
        layout.stats().fallbacks
    );

    let xml = builder.render_xml(&layout, "Hull Part Factory")?;
    println!("\n{xml}");

    Ok(())
}
