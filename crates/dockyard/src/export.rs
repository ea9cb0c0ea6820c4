//! Blueprint exporters.

pub mod xml;

use thiserror::Error;

use crate::plan::Layout;

/// Errors raised while serializing a layout.
#[derive(Debug, Error)]
pub enum Error {
    #[error("plan name must contain at least one visible character")]
    EmptyPlanName,

    #[error("layout has no placements to export")]
    EmptyLayout,
}

/// Serializes a finished [`Layout`] into a target format.
pub trait Exporter {
    fn export(&self, layout: &Layout) -> Result<String, Error>;
}
