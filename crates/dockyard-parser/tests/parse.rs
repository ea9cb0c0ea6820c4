use dockyard_parser::{
    ModuleRequest,
    error::{ErrorCode, Severity},
    parse,
};

#[test]
fn test_hash_routed_link() {
    let link = "https://x4-game.com/#/station-calculator?l=@$module-module_gen_prod_hullparts_01,count:20;,$module-module_gen_prod_energycells_01,count:4;";

    let list = parse(link).expect("Failed to parse");

    assert_eq!(
        list.modules(),
        [
            ModuleRequest::new("module_gen_prod_hullparts_01", 20),
            ModuleRequest::new("module_gen_prod_energycells_01", 4),
        ]
    );
    assert!(list.warnings().is_empty());
    assert!(list.layout().starts_with('@'));
}

#[test]
fn test_percent_encoded_query() {
    let link = "https://x4-game.com/station-calculator?x=1&l=%40%24module-module_gen_prod_graphene_01%2Ccount%3A3%3B";

    let list = parse(link).expect("Failed to parse");

    assert_eq!(
        list.modules(),
        [ModuleRequest::new("module_gen_prod_graphene_01", 3)]
    );
}

#[test]
fn test_quoted_link_with_whitespace() {
    let link = "  \"https://x4-game.com/#/station-calculator?l=$module-module_gen_prod_microchips_01,count:1\"\n";

    let list = parse(link).expect("Failed to parse");

    assert_eq!(list.modules().len(), 1);
    assert_eq!(list.modules()[0].id(), "module_gen_prod_microchips_01");
}

#[test]
fn test_skipped_entry_is_a_warning() {
    let link = "https://x4-game.com/#/station-calculator?l=@$module-a_01,count:2;,junk;,$module-b_01,count:1;";

    let list = parse(link).expect("Failed to parse");

    assert_eq!(list.modules().len(), 2);
    assert_eq!(list.warnings().len(), 1);

    let warning = &list.warnings()[0];
    assert_eq!(warning.severity(), Severity::Warning);
    assert_eq!(warning.code(), Some(ErrorCode::E002));

    let span = warning.labels()[0].span();
    assert_eq!(&list.layout()[span.start()..span.end()], "junk");
}

#[test]
fn test_missing_parameter() {
    let err = parse("https://x4-game.com/#/station-calculator?m=1").expect_err("no l");

    assert_eq!(err.diagnostics().len(), 1);
    assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E001));
    assert_eq!(err.source_text(), "https://x4-game.com/#/station-calculator?m=1");
}

#[test]
fn test_no_usable_entries() {
    let err = parse("https://x4-game.com/?l=@junk;,more-junk").expect_err("no modules");

    let codes: Vec<_> = err.diagnostics().iter().map(|d| d.code()).collect();
    assert_eq!(
        codes,
        vec![
            Some(ErrorCode::E002),
            Some(ErrorCode::E002),
            Some(ErrorCode::E004)
        ]
    );
    assert_eq!(err.source_text(), "@junk;,more-junk");
}

#[test]
fn test_count_overflow() {
    let err = parse("https://x4-game.com/?l=$module-a_01,count:4294967296").expect_err("overflow");

    assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E003));
    let span = err.diagnostics()[0].labels()[0].span();
    assert_eq!(&err.source_text()[span.start()..span.end()], "4294967296");
}
