use gherkin_pad_engine::{
    FALLBACK_TITLE, JsonFileStore, ScenarioRepository, SpanStyle, Workbench, extract_steps,
    render, render_html,
};
use pretty_assertions::assert_eq;

fn fixture(name: &str) -> String {
    std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
}

fn fixture_path(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn import_feature_file_into_json_store() {
    // Given an empty store on disk
    let dir = tempfile::tempdir().unwrap();
    let store_path = dir.path().join("scenarios.json");
    let mut wb = Workbench::new(JsonFileStore::open(&store_path).unwrap());

    // When importing the shop feature file
    let added = wb.import_file(&fixture_path("shop.feature")).unwrap();

    // Then the preamble and each scenario become records
    assert_eq!(added, 4);
    let titles: Vec<_> = wb.records().iter().map(|r| r.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![FALLBACK_TITLE, "Add an item", "Remove an item", "Checkout"]
    );

    // And they are persisted
    let reopened = JsonFileStore::open(&store_path).unwrap();
    assert_eq!(reopened.list(), wb.records());
}

#[test]
fn steps_from_imported_records_are_distinct() {
    let mut wb = Workbench::new(gherkin_pad_engine::MemoryStore::new());
    wb.import_text(&fixture("shop.feature")).unwrap();

    let steps = wb.steps();

    assert_eq!(steps.len(), 10);
    assert_eq!(steps[0], "Given an empty cart");
    assert_eq!(
        steps.iter().filter(|s| *s == "Given a cart with \"apple\"").count(),
        1
    );
    assert_eq!(steps.last().map(String::as_str), Some("But no email is sent"));
    assert_eq!(steps, extract_steps([fixture("shop.feature").as_str()]));
}

#[test]
fn rendering_fixture_keeps_every_line() {
    let text = fixture("shop.feature");
    let fragments = render(&text);

    assert_eq!(fragments.len(), text.split('\n').count());
    assert!(fragments[0].is_keyword_line());
    // Keywords only count at the start of a line, so indented steps stay plain
    assert!(!fragments[3].is_keyword_line());
    assert_eq!(fragments[1].spans[0].style, SpanStyle::Placeholder);
}

#[test]
fn exported_store_renders_as_html() {
    let mut wb = Workbench::new(gherkin_pad_engine::MemoryStore::new());
    wb.save("Scenario: Greeting\nThen I see \"Hi\"").unwrap();

    let html = render_html(&wb.export_content().unwrap());

    insta::assert_snapshot!(html, @r#"<div><span class="keyword">Scenario:</span> Greeting</div><div><span class="keyword">Then</span> I see <span class="literal">"Hi"</span></div>"#);
}
