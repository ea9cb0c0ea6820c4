//! Mapping from station-calculator identifiers to catalog keys.
//!
//! The calculator names production modules differently from the game's
//! macro names, and faction-specific modules (docks, piers, storage) are
//! chosen by a cosmetic [`Culture`].

use std::{fmt, str::FromStr};

use serde::Deserialize;
use thiserror::Error;

/// Error returned when parsing an unrecognized culture name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown culture `{0}` (expected argon, paranid, teladi, split or terran)")]
pub struct UnknownCulture(pub String);

/// Faction style used for docks, piers and storage modules.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Culture {
    #[default]
    Argon,
    Paranid,
    Teladi,
    Split,
    Terran,
}

impl Culture {
    /// Three-letter faction code used inside macro names.
    pub fn code(self) -> &'static str {
        match self {
            Culture::Argon => "arg",
            Culture::Paranid => "par",
            Culture::Teladi => "tel",
            Culture::Split => "spl",
            Culture::Terran => "ter",
        }
    }

    /// Medium trade-station dock area.
    pub fn dock_key(self) -> String {
        format!("dockarea_{}_m_02_tradestation_01_macro", self.code())
    }

    /// Three-berth pier for large and extra-large ships.
    pub fn pier_key(self) -> String {
        format!("pier_{}_harbor_03_macro", self.code())
    }

    /// Large storage module for the given ware kind.
    pub fn storage_key(self, kind: StorageKind) -> String {
        format!("storage_{}_l_{}_01_macro", self.code(), kind.as_str())
    }
}

impl FromStr for Culture {
    type Err = UnknownCulture;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "argon" => Ok(Self::Argon),
            "paranid" => Ok(Self::Paranid),
            "teladi" => Ok(Self::Teladi),
            "split" => Ok(Self::Split),
            "terran" => Ok(Self::Terran),
            _ => Err(UnknownCulture(s.to_string())),
        }
    }
}

impl fmt::Display for Culture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Culture::Argon => "argon",
            Culture::Paranid => "paranid",
            Culture::Teladi => "teladi",
            Culture::Split => "split",
            Culture::Terran => "terran",
        };
        write!(f, "{name}")
    }
}

/// Ware class stored by a storage module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKind {
    Container,
    Solid,
    Liquid,
}

impl StorageKind {
    fn as_str(self) -> &'static str {
        match self {
            StorageKind::Container => "container",
            StorageKind::Solid => "solid",
            StorageKind::Liquid => "liquid",
        }
    }
}

/// Converts a calculator module identifier into a catalog key.
///
/// `module_gen_prod_hullparts_01` becomes `prod_gen_hullparts_macro`: the
/// `module_` prefix is dropped, `gen_prod_` is reordered to `prod_gen_`, and
/// a single `_01`/`_02`/`_03` variant suffix is removed since the game macros
/// do not carry it.
pub fn macro_for_module_id(module_id: &str) -> String {
    let base = module_id.strip_prefix("module_").unwrap_or(module_id);

    let base = match base.strip_prefix("gen_prod_") {
        Some(rest) => format!("prod_gen_{rest}"),
        None => base.to_string(),
    };

    let base = ["_01", "_02", "_03"]
        .iter()
        .find_map(|suffix| base.strip_suffix(suffix))
        .unwrap_or(&base);

    format!("{base}_macro")
}
