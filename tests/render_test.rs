//! Study rendering of the bakumatsu fixture, from data file to HTML.

use rekishi::dom::{DomTree, NodeId, Role};
use rekishi::export::{HtmlConfig, HtmlExporter};
use rekishi::interact::{Event, is_hidden, visible_text};
use rekishi::render::hooks;
use rekishi::view::{Outcome, ViewState};
use rekishi::{Document, StudyView, ViewConfig};

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> String {
    format!("{}/{}", FIXTURES_DIR, name)
}

fn study_view() -> StudyView {
    let view = StudyView::open(ViewConfig::default(), fixture_path("bakumatsu.json"));
    assert_eq!(view.state(), ViewState::Ready);
    view
}

fn row(tree: &DomTree, item: &str) -> NodeId {
    tree.iter_dfs()
        .find(|n| tree.attrs.item(*n) == Some(item))
        .unwrap_or_else(|| panic!("no row for {item}"))
}

// ============================================================================
// Document loading
// ============================================================================

#[test]
fn test_fixture_decodes() {
    let doc = Document::load(fixture_path("bakumatsu.json")).expect("Failed to load fixture");
    assert_eq!(doc.sections.len(), 2);
    assert_eq!(doc.nav_links.len(), 2);
    assert_eq!(doc.item_count(), 4);
    assert_eq!(
        doc.style_map.keys().collect::<Vec<_>>(),
        vec!["blue-bold", "red", "green"]
    );
}

#[test]
fn test_missing_top_level_fields_degrade_to_empty() {
    let doc = Document::from_json("{}").unwrap();
    assert!(doc.sections.is_empty());
    assert!(doc.nav_links.is_empty());
    assert!(doc.style_map.is_empty());

    let mut view = StudyView::new(ViewConfig::default());
    view.finish_load(Ok(doc));
    assert_eq!(view.state(), ViewState::Ready);
    assert_eq!(view.tree().text_content(NodeId::ROOT), "▶ ▶ ");
}

#[test]
fn test_unknown_inline_shape_is_a_load_error() {
    let json = r#"{"sections": [{"id": "s", "h2": "h", "groups": [{"items": [
        {"id": "q", "parts": [{"bold": "x"}]}
    ]}]}]}"#;
    let mut view = StudyView::new(ViewConfig::default());
    view.finish_load(Document::from_json(json));
    assert_eq!(view.state(), ViewState::Failed);
    assert!(view.tree().text_content(NodeId::ROOT).starts_with("エラー: "));
}

// ============================================================================
// Study layout
// ============================================================================

#[test]
fn test_study_layout_structure() {
    let view = study_view();
    let tree = view.tree();

    let top: Vec<_> = tree.children(NodeId::ROOT).collect();
    // nav, two sections, nav
    assert_eq!(top.len(), 4);
    assert!(tree.attrs.has_class(top[0], "jump-nav"));
    assert_eq!(tree.role(top[1]), Some(Role::Section));
    assert!(tree.attrs.has_class(top[3], "box2"));

    let heading = tree.find_by_id("kaikoku").unwrap();
    assert_eq!(tree.role(heading), Some(Role::Heading(2)));

    // The empty group is dropped, its heading with it.
    let h3s: Vec<_> = tree
        .iter_dfs()
        .filter(|n| tree.role(*n) == Some(Role::Heading(3)))
        .map(|n| tree.text_content(n))
        .collect();
    assert_eq!(h3s, vec!["ペリー来航", "通商条約"]);

    assert!(tree.find_by_class("timeline").next().is_some());
    assert!(tree.attrs.has_class(row(tree, "q2"), "important"));
}

#[test]
fn test_tokens_and_glosses() {
    let view = study_view();
    let tree = view.tree();

    let perry = tree
        .iter_dfs()
        .find(|n| tree.attrs.token(*n) == Some("perry"))
        .unwrap();
    assert_eq!(tree.attrs.classes(perry), ["blue-bold"]);
    assert_eq!(tree.text_content(perry), "ペリー");

    let harris = tree
        .iter_dfs()
        .find(|n| tree.attrs.token(*n) == Some("harris"))
        .unwrap();
    let ruby = tree.children(harris).next().unwrap();
    assert_eq!(tree.role(ruby), Some(Role::Ruby));

    assert_eq!(
        visible_text(tree, row(tree, "q1")),
        "1853：黒船来航。ペリーが浦賀うらがに来航"
    );
    assert_eq!(visible_text(tree, row(tree, "q4")), "1858：井伊直弼による弾圧");
}

// ============================================================================
// Reveal interaction
// ============================================================================

#[test]
fn test_blanks_start_concealed() {
    let view = study_view();
    let tree = view.tree();

    assert_eq!(tree.find_by_class(hooks::FILL_LABEL).count(), 4);
    assert_eq!(
        visible_text(tree, row(tree, "q2")),
        "1854：日米を締結し、下田・を開港"
    );
    // Concealed, not absent.
    assert_eq!(
        tree.text_content(row(tree, "q2")),
        "1854：日米和親条約を締結し、下田・箱館を開港"
    );
}

#[test]
fn test_reveal_one_blank_leaves_others() {
    let mut view = study_view();
    let q2 = row(view.tree(), "q2");
    let placeholders: Vec<_> = view
        .tree()
        .descendants(q2)
        .filter(|n| view.tree().attrs.has_class(*n, hooks::FILL_PLACEHOLDER))
        .collect();
    assert_eq!(placeholders.len(), 2);

    assert_eq!(view.dispatch(Event::Click(placeholders[1])), Outcome::Updated);
    assert_eq!(
        visible_text(view.tree(), q2),
        "1854：日米を締結し、下田・箱館を開港"
    );

    assert_eq!(view.dispatch(Event::Click(placeholders[0])), Outcome::Updated);
    assert_eq!(view.dispatch(Event::Click(placeholders[0])), Outcome::Unchanged);
    assert_eq!(
        visible_text(view.tree(), q2),
        "1854：日米和親条約を締結し、下田・箱館を開港"
    );
}

#[test]
fn test_answer_classes() {
    let view = study_view();
    let tree = view.tree();
    let answer = tree
        .iter_dfs()
        .find(|n| tree.attrs.token(*n) == Some("b-treaty"))
        .unwrap();
    assert_eq!(tree.attrs.classes(answer), ["underline", "red"]);
    assert!(is_hidden(tree, answer));
}

#[test]
fn test_nested_blank_reveal_order() {
    let mut view = study_view();
    let q3 = row(view.tree(), "q3");
    let placeholders: Vec<_> = view
        .tree()
        .descendants(q3)
        .filter(|n| view.tree().attrs.has_class(*n, hooks::FILL_PLACEHOLDER))
        .collect();

    // Revealing the inner blank alone shows nothing: its outer answer is
    // still concealed.
    view.dispatch(Event::Click(placeholders[1]));
    assert_eq!(visible_text(view.tree(), q3), "1858：哈里斯ハリスとの間で");

    view.dispatch(Event::Click(placeholders[0]));
    assert_eq!(
        visible_text(view.tree(), q3),
        "1858：哈里斯ハリスとの間で日米修好通商条約"
    );
}

// ============================================================================
// HTML export
// ============================================================================

#[test]
fn test_study_page_html() {
    let view = study_view();
    let config = ViewConfig::default()
        .with_title("幕末")
        .with_stylesheet("style.css");
    let html = HtmlExporter::new()
        .with_config(HtmlConfig::from(&config))
        .to_html(view.tree());

    assert!(html.contains("<title>幕末</title>"));
    assert!(html.contains("<div id=\"app\">"));
    assert!(html.contains("<h2 id=\"kaikoku\">開国</h2>"));
    assert!(html.contains("<ruby>浦賀<rt>うらが</rt></ruby>"));
    assert!(html.contains("<span class=\"blue-bold\" data-token=\"perry\">ペリー</span>"));
    assert!(html.contains(
        "<span class=\"fill-answer\"><span class=\"underline red\" data-token=\"b-treaty\">和親条約</span></span>"
    ));
    assert!(html.contains("<a href=\"#kaikoku\">開国</a><br/><a href=\"#ansei\">安政の大獄</a>"));
}
