//! # Dockyard Parser
//!
//! Parser for station-calculator share links. It turns a link into the
//! ordered list of `(module id, count)` requests it encodes.
//!
//! ## Usage
//!
//! ```
//! # use dockyard_parser::{parse, error::ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let link = "https://x4-game.com/#/station-calculator?l=@$module-module_gen_prod_hullparts_01,count:20;";
//!
//!     let list = parse(link)?;
//!     assert_eq!(list.modules()[0].id(), "module_gen_prod_hullparts_01");
//!     assert_eq!(list.modules()[0].count(), 20);
//!     Ok(())
//! }
//! ```

pub mod error;

mod link;
mod span;

pub use link::{ModuleRequest, ShareList};
pub use span::Span;

use error::ParseError;

/// Parse a share link into its module requests.
///
/// Surrounding whitespace and quotes are ignored. Entries that cannot be
/// read are skipped and reported through [`ShareList::warnings`].
///
/// # Errors
///
/// Returns [`ParseError`] when the link has no `l` parameter, when a module
/// count is out of range, or when no module entry could be read.
pub fn parse(link: &str) -> Result<ShareList, ParseError> {
    link::parse_link(link)
}
