use pagecraft_model::{slugify, Block, LayoutId, Page, PageConfig, ThemeId};
use pagecraft_types::PageId;
use pretty_assertions::assert_eq;

// ── LayoutId ─────────────────────────────────────────────────────

#[test]
fn known_layouts_roundtrip_through_strings() {
    for layout in LayoutId::KNOWN {
        let raw = layout.as_str().to_string();
        assert_eq!(LayoutId::from(raw.as_str()), layout);
        assert!(layout.is_known());
    }
}

#[test]
fn unknown_layout_is_preserved() {
    let layout: LayoutId = "carousel".parse().unwrap();
    assert_eq!(layout, LayoutId::Other("carousel".into()));
    assert!(!layout.is_known());
    assert_eq!(String::from(layout), "carousel");
}

#[test]
fn layout_serializes_as_identifier() {
    assert_eq!(serde_json::to_string(&LayoutId::Columns2).unwrap(), "\"columns-2\"");
    assert_eq!(
        serde_json::from_str::<LayoutId>("\"right-sidebar\"").unwrap(),
        LayoutId::RightSidebar
    );
}

#[test]
fn layout_default_is_standard() {
    assert_eq!(LayoutId::default(), LayoutId::Standard);
}

// ── Page ─────────────────────────────────────────────────────────

#[test]
fn page_flattens_config() {
    let page = Page {
        id: PageId::new(),
        title: "Physics".into(),
        path: "physics".into(),
        config: PageConfig::new(LayoutId::Masonry, ThemeId::new("dark")),
        blocks: vec![Block::new("Intro", "")],
    };
    let value = serde_json::to_value(&page).unwrap();
    assert_eq!(value["layout"], "masonry");
    assert_eq!(value["theme"], "dark");
    let back: Page = serde_json::from_value(value).unwrap();
    assert_eq!(back, page);
    assert_eq!(back.layout(), &LayoutId::Masonry);
}

#[test]
fn page_doc_count_sums_blocks() {
    let mut a = Block::new("a", "");
    a.docs.push(pagecraft_model::Document::new("x", "u"));
    let mut b = Block::new("b", "");
    b.docs.push(pagecraft_model::Document::new("y", "v"));
    b.docs.push(pagecraft_model::Document::new("z", "w"));
    let page = Page {
        id: PageId::new(),
        title: "t".into(),
        path: "t".into(),
        config: PageConfig::default(),
        blocks: vec![a, b],
    };
    assert_eq!(page.doc_count(), 3);
}

// ── slugify ──────────────────────────────────────────────────────

#[test]
fn slugify_lowercases_and_dashes() {
    assert_eq!(slugify("Year 9 Science"), "year-9-science");
}

#[test]
fn slugify_collapses_and_trims() {
    assert_eq!(slugify("  Clubs & Societies!! "), "clubs-societies");
    assert_eq!(slugify("--a--b--"), "a-b");
}

#[test]
fn slugify_drops_non_ascii() {
    assert_eq!(slugify("Café Menu"), "caf-menu");
    assert_eq!(slugify("日本"), "");
}
