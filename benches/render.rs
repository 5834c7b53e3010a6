//! Benchmarks for the render pipeline.
//!
//! Run with: cargo bench

use criterion::{Criterion, criterion_group, criterion_main};

use rekishi::dom::{DomTree, NodeId};
use rekishi::export::synthesize_html;
use rekishi::render::{Layout, build_document};
use rekishi::review::filter_document;
use rekishi::{ClassLookup, Document, InlineNode, ReviewSet};

const DATA: &str = include_str!("../tests/fixtures/bakumatsu.json");

/// The fixture's sections repeated until the document holds `copies` times
/// as many items.
fn large_document(copies: usize) -> Document {
    let base = Document::from_json(DATA).unwrap();
    let mut doc = base.clone();
    for n in 1..copies {
        for section in &base.sections {
            let mut section = section.clone();
            section.anchor_id = format!("{}-{n}", section.anchor_id);
            for item in section.groups.iter_mut().flat_map(|g| g.items.iter_mut()) {
                item.id = format!("{}-{n}", item.id);
            }
            doc.sections.push(section);
        }
    }
    doc
}

// ============================================================================
// Decoding
// ============================================================================

fn bench_decode(c: &mut Criterion) {
    c.bench_function("decode_fixture", |b| {
        b.iter(|| Document::from_json(DATA).unwrap());
    });
}

// ============================================================================
// Tree construction
// ============================================================================

fn bench_build_study(c: &mut Criterion) {
    let doc = large_document(250);
    let lookup = ClassLookup::from_style_map(&doc.style_map);

    c.bench_function("build_study_1000_items", |b| {
        b.iter(|| {
            let mut tree = DomTree::new();
            build_document(&mut tree, NodeId::ROOT, &doc, &lookup, Layout::Study);
            tree
        });
    });
}

fn bench_build_review(c: &mut Criterion) {
    let doc = large_document(250);
    let lookup = ClassLookup::from_style_map(&doc.style_map);
    let set: ReviewSet = doc.items().step_by(3).map(|i| i.id.clone()).collect();

    c.bench_function("filter_and_build_review", |b| {
        b.iter(|| {
            let filtered = filter_document(&doc, &set);
            let mut tree = DomTree::new();
            build_document(&mut tree, NodeId::ROOT, &filtered, &lookup, Layout::Review);
            tree
        });
    });
}

fn bench_nested_blanks(c: &mut Criterion) {
    let mut node = InlineNode::text("核");
    for _ in 0..256 {
        node = InlineNode::blank(vec![InlineNode::text("前"), node]);
    }
    let nodes = vec![node];
    let lookup = ClassLookup::new();

    c.bench_function("render_256_nested_blanks", |b| {
        b.iter(|| {
            let mut tree = DomTree::new();
            rekishi::render::render_inline(
                &mut tree,
                NodeId::ROOT,
                &nodes,
                &lookup,
                rekishi::render::BlankMode::Concealed,
            );
            tree
        });
    });
}

// ============================================================================
// HTML synthesis
// ============================================================================

fn bench_synthesize(c: &mut Criterion) {
    let doc = large_document(250);
    let lookup = ClassLookup::from_style_map(&doc.style_map);
    let mut tree = DomTree::new();
    build_document(&mut tree, NodeId::ROOT, &doc, &lookup, Layout::Study);

    c.bench_function("synthesize_study_html", |b| {
        b.iter(|| synthesize_html(&tree));
    });
}

criterion_group!(
    benches,
    bench_decode,
    // Tree construction
    bench_build_study,
    bench_build_review,
    bench_nested_blanks,
    // HTML synthesis
    bench_synthesize,
);
criterion_main!(benches);
