//! Share-link parsing.
//!
//! A station-calculator share link carries its module list in an `l` query
//! parameter, either in the regular URL query or in the query part of a
//! hash-routed fragment:
//!
//! ```text
//! https://x4-game.com/#/station-calculator?l=@$module-module_gen_prod_hullparts_01,count:20;,$module-...
//! ```
//!
//! The decoded parameter is an optional `@` followed by entries separated by
//! `;,`, each of the form `$module-<id>,count:<n>`.

use log::{debug, trace};
use url::{Url, form_urlencoded};
use winnow::{
    Parser as _,
    ascii::digit1,
    combinator::preceded,
    error::ModalResult,
    stream::LocatingSlice,
    token::take_till,
};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    span::Span,
};

/// Name of the query parameter holding the module list.
const LAYOUT_PARAM: &str = "l";

/// Separator between module entries.
const ENTRY_SEPARATOR: &str = ";,";

/// One requested module type and how many instances of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleRequest {
    id: String,
    count: u32,
}

impl ModuleRequest {
    /// Creates a module request.
    pub fn new(id: impl Into<String>, count: u32) -> Self {
        Self {
            id: id.into(),
            count,
        }
    }

    /// Calculator module identifier, e.g. `module_gen_prod_hullparts_01`.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Number of instances requested.
    pub fn count(&self) -> u32 {
        self.count
    }
}

/// The result of parsing a share link: module requests in link order, plus
/// any warnings about entries that were skipped.
#[derive(Debug, Clone)]
pub struct ShareList {
    modules: Vec<ModuleRequest>,
    warnings: Vec<Diagnostic>,
    layout: String,
}

impl ShareList {
    /// Module requests in the order they appear in the link.
    pub fn modules(&self) -> &[ModuleRequest] {
        &self.modules
    }

    /// Consumes the list, returning the module requests.
    pub fn into_modules(self) -> Vec<ModuleRequest> {
        self.modules
    }

    /// Non-fatal diagnostics; their spans index into [`Self::layout`].
    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    /// The decoded module list text.
    pub fn layout(&self) -> &str {
        &self.layout
    }
}

/// Parses a share link into its module requests.
pub(crate) fn parse_link(link: &str) -> Result<ShareList, ParseError> {
    let link = link.trim().trim_matches(['\'', '"']).trim();
    debug!(link; "Parsing share link");

    let layout = extract_layout(link).ok_or_else(|| {
        ParseError::new(
            vec![
                Diagnostic::error("missing layout parameter")
                    .with_code(ErrorCode::E001)
                    .with_label(Span::new(0..link.len()), "no `l` parameter in this link")
                    .with_help("copy the share link from the station calculator's export button"),
            ],
            link,
        )
    })?;
    trace!(layout; "Decoded layout parameter");

    let (modules, warnings) = parse_layout(&layout)?;

    Ok(ShareList {
        modules,
        warnings,
        layout,
    })
}

/// Finds and percent-decodes the `l` parameter.
///
/// The regular URL query is preferred. Hash-routed links keep their query
/// inside the fragment, and text that is not a valid URL is scanned for any
/// `?`-introduced query, so each `?` is tried in turn.
fn extract_layout(link: &str) -> Option<String> {
    let from_query = Url::parse(link).ok().and_then(|url| {
        url.query_pairs()
            .find(|(name, _)| name == LAYOUT_PARAM)
            .map(|(_, value)| value.into_owned())
    });

    from_query
        .filter(|value| !value.is_empty())
        .or_else(|| {
            link.match_indices('?').find_map(|(index, _)| {
                form_urlencoded::parse(link[index + 1..].as_bytes())
                    .find(|(name, value)| name == LAYOUT_PARAM && !value.is_empty())
                    .map(|(_, value)| value.into_owned())
            })
        })
}

type Input<'a> = LocatingSlice<&'a str>;

/// A syntactically valid entry before its count is converted.
struct RawEntry<'a> {
    id: &'a str,
    count: &'a str,
    count_span: std::ops::Range<usize>,
}

/// Parses `$module-<id>,count:<digits>`; anything after the digits is ignored.
fn module_entry<'a>(input: &mut Input<'a>) -> ModalResult<RawEntry<'a>> {
    let id = preceded("$module-", take_till(1.., ',')).parse_next(input)?;
    let (count, count_span) = preceded(",count:", digit1.with_span()).parse_next(input)?;
    Ok(RawEntry {
        id,
        count,
        count_span,
    })
}

/// Splits the module list into non-empty entries with their byte offsets.
fn split_entries(body: &str) -> Vec<(usize, &str)> {
    let mut entries = Vec::new();
    let mut start = 0;

    let separators = body
        .match_indices(ENTRY_SEPARATOR)
        .map(|(index, _)| index)
        .chain(std::iter::once(body.len()));

    for end in separators {
        let entry = body[start..end].trim_end_matches(';');
        if !entry.is_empty() {
            entries.push((start, entry));
        }
        start = end + ENTRY_SEPARATOR.len();
    }

    entries
}

/// Parses the decoded module list.
///
/// Malformed entries are skipped with an `E002` warning, counts that do not
/// fit in `u32` are `E003` errors, and a list without any entry is `E004`.
fn parse_layout(layout: &str) -> Result<(Vec<ModuleRequest>, Vec<Diagnostic>), ParseError> {
    let body = layout.strip_prefix('@').unwrap_or(layout);
    let body_offset = layout.len() - body.len();

    let mut collector = DiagnosticCollector::new();
    let mut modules = Vec::new();

    for (offset, entry) in split_entries(body) {
        let entry_start = body_offset + offset;
        let entry_span = Span::new(entry_start..entry_start + entry.len());

        let Ok((_, raw)) = module_entry.parse_peek(LocatingSlice::new(entry)) else {
            collector.emit(
                Diagnostic::warning("malformed module entry")
                    .with_code(ErrorCode::E002)
                    .with_label(entry_span, "expected `$module-<id>,count:<n>`")
                    .with_help("the entry was skipped"),
            );
            continue;
        };

        match raw.count.parse::<u32>() {
            Ok(count) => {
                trace!(id = raw.id, count; "Parsed module entry");
                modules.push(ModuleRequest::new(raw.id, count));
            }
            Err(_) => {
                let count_span = Span::new(raw.count_span).shift(entry_start);
                collector.emit(
                    Diagnostic::error("module count out of range")
                        .with_code(ErrorCode::E003)
                        .with_label(count_span, "does not fit in 32 bits")
                        .with_secondary_label(entry_span, "in this entry")
                        .with_help("split the request into several smaller entries"),
                );
            }
        }
    }

    if modules.is_empty() && !collector.has_errors() {
        collector.emit(
            Diagnostic::error("no modules found")
                .with_code(ErrorCode::E004)
                .with_label(Span::new(0..layout.len()), "no usable module entries")
                .with_help("entries look like `$module-module_gen_prod_hullparts_01,count:20`"),
        );
    }

    let warnings = collector.finish(layout)?;
    debug!(modules = modules.len(), warnings = warnings.len(); "Module list parsed");

    Ok((modules, warnings))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HASH_LINK: &str = "https://x4-game.com/#/station-calculator?l=@$module-module_gen_prod_hullparts_01,count:20;,$module-module_gen_prod_energycells_01,count:4;";

    #[test]
    fn test_hash_routed_link() {
        let list = parse_link(HASH_LINK).unwrap();

        assert_eq!(
            list.modules(),
            &[
                ModuleRequest::new("module_gen_prod_hullparts_01", 20),
                ModuleRequest::new("module_gen_prod_energycells_01", 4),
            ]
        );
        assert!(list.warnings().is_empty());
    }

    #[test]
    fn test_regular_query_link_is_percent_decoded() {
        let link = "https://example.com/calc?x=1&l=%40%24module-module_gen_prod_graphene_01%2Ccount%3A3%3B";
        let list = parse_link(link).unwrap();

        assert_eq!(
            list.modules(),
            &[ModuleRequest::new("module_gen_prod_graphene_01", 3)]
        );
        assert_eq!(list.layout(), "@$module-module_gen_prod_graphene_01,count:3;");
    }

    #[test]
    fn test_quoted_link_is_trimmed() {
        let quoted = format!("  '{HASH_LINK}'  ");
        assert_eq!(parse_link(&quoted).unwrap().modules().len(), 2);
    }

    #[test]
    fn test_not_a_url_still_scans_query() {
        let list = parse_link("calculator?l=$module-module_x_01,count:1").unwrap();
        assert_eq!(list.modules(), &[ModuleRequest::new("module_x_01", 1)]);
    }

    #[test]
    fn test_missing_layout_parameter() {
        let err = parse_link("https://x4-game.com/#/station-calculator?q=1").unwrap_err();

        assert_eq!(err.diagnostics().len(), 1);
        assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E001));
        assert_eq!(err.source_text(), "https://x4-game.com/#/station-calculator?q=1");
    }

    #[test]
    fn test_empty_layout_parameter_is_missing() {
        let err = parse_link("https://x4-game.com/?l=").unwrap_err();
        assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E001));
    }

    #[test]
    fn test_malformed_entry_is_skipped_with_warning() {
        let (modules, warnings) =
            parse_layout("@$module-a_01,count:2;,garbage;,$module-b_01,count:5").unwrap();

        assert_eq!(
            modules,
            vec![ModuleRequest::new("a_01", 2), ModuleRequest::new("b_01", 5)]
        );
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].code(), Some(ErrorCode::E002));
        // "@$module-a_01,count:2;," is 23 bytes.
        assert_eq!(warnings[0].labels()[0].span(), Span::new(23..30));
    }

    #[test]
    fn test_trailing_text_after_count_is_ignored() {
        let (modules, warnings) = parse_layout("$module-a_01,count:7,extra:1").unwrap();
        assert_eq!(modules, vec![ModuleRequest::new("a_01", 7)]);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_zero_count_is_kept() {
        let (modules, _) = parse_layout("$module-a_01,count:0").unwrap();
        assert_eq!(modules, vec![ModuleRequest::new("a_01", 0)]);
    }

    #[test]
    fn test_count_overflow_is_an_error() {
        let layout = "$module-a_01,count:99999999999";
        let err = parse_layout(layout).unwrap_err();

        let diag = &err.diagnostics()[0];
        assert_eq!(diag.code(), Some(ErrorCode::E003));
        assert_eq!(diag.labels()[0].span(), Span::new(19..30));
        assert_eq!(err.source_text(), layout);
    }

    #[test]
    fn test_no_entries_is_an_error() {
        let err = parse_layout("@").unwrap_err();
        assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E004));

        let err = parse_layout("@nothing;,useful").unwrap_err();
        let codes: Vec<_> = err.diagnostics().iter().map(|d| d.code()).collect();
        assert_eq!(
            codes,
            vec![
                Some(ErrorCode::E002),
                Some(ErrorCode::E002),
                Some(ErrorCode::E004)
            ]
        );
    }

    #[test]
    fn test_split_entries_drops_empty_pieces() {
        let entries = split_entries(";,a;,;,b;");
        assert_eq!(entries, vec![(2, "a"), (7, "b")]);
    }

    #[test]
    fn test_missing_id_is_malformed() {
        let (_, warnings) = parse_layout("$module-,count:1;,$module-ok_01,count:1").unwrap();
        assert_eq!(warnings.len(), 1);
    }
}
