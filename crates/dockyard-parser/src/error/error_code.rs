//! Error codes for the share-link diagnostic system.
//!
//! - `E00x` - Link structure and module list errors

use std::fmt;

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Missing layout parameter.
    ///
    /// The link has no non-empty `l` query parameter, neither in the URL
    /// query nor in the query part of a `#/...?` fragment.
    E001,

    /// Malformed module entry.
    ///
    /// An entry in the module list does not start with
    /// `$module-<id>,count:<n>`. The entry is skipped.
    E002,

    /// Module count out of range.
    ///
    /// The count of a module entry does not fit in 32 bits.
    E003,

    /// No modules found.
    ///
    /// The module list contained no usable entries.
    E004,
}

impl ErrorCode {
    /// Returns a short description of this error code.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "missing layout parameter",
            ErrorCode::E002 => "malformed module entry",
            ErrorCode::E003 => "module count out of range",
            ErrorCode::E004 => "no modules found",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E003 => "E003",
            ErrorCode::E004 => "E004",
        };
        write!(f, "{code}")
    }
}
