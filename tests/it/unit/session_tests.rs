//! Resize session lifecycle against the in-memory document.

use image_resizer::host::{DocumentSurface, ListenerTarget};
use image_resizer::memory::MemoryDocument;
use image_resizer::session::{start_dimensions, ResizeSession};
use image_resizer::types::{Dimensions, DocumentRange, ElementId, HandleDirection, Point, Rect};

fn doc_with_image() -> (MemoryDocument, ElementId) {
    let mut doc = MemoryDocument::new();
    let p = doc.add_paragraph("abc", Rect::new(0.0, 0.0, 800.0, 240.0));
    let img = doc.add_image(p, Rect::new(40.0, 20.0, 400.0, 200.0), Dimensions::new(400, 200));
    (doc, img)
}

#[test]
fn test_start_dimensions_prefers_attributes() {
    let (mut doc, img) = doc_with_image();
    assert_eq!(start_dimensions(&doc, img), Dimensions::new(400, 200));

    doc.set_attribute(img, "width", "320px");
    assert_eq!(start_dimensions(&doc, img), Dimensions::new(320, 200));
}

#[test]
fn test_unparseable_attribute_falls_back_to_rendered() {
    let (mut doc, img) = doc_with_image();
    doc.set_attribute(img, "height", "auto");
    assert_eq!(start_dimensions(&doc, img), Dimensions::new(400, 200));
}

#[test]
fn test_begin_disables_editor_and_binds_document() {
    let (mut doc, img) = doc_with_image();
    let session = ResizeSession::begin(&mut doc, img, HandleDirection::SouthEast, Point::new(0.0, 0.0));

    assert!(!doc.editor().enabled);
    assert_eq!(doc.listeners_on(ListenerTarget::Document), 2);
    assert_eq!(session.context().start_size, Dimensions::new(400, 200));
    assert_eq!(session.last_applied(), None);

    session.abort(&mut doc);
}

#[test]
fn test_apply_writes_attributes_without_committing() {
    let (mut doc, img) = doc_with_image();
    let mut session = ResizeSession::begin(&mut doc, img, HandleDirection::SouthEast, Point::new(0.0, 0.0));

    let size = session.apply(&mut doc, Point::new(50.0, 20.0), None, 20);
    assert_eq!(size, Dimensions::new(450, 220));
    assert_eq!(doc.attribute(img, "width").as_deref(), Some("450"));
    assert_eq!(doc.attribute(img, "height").as_deref(), Some("220"));
    assert!(doc.editor().formats.is_empty());

    session.abort(&mut doc);
}

#[test]
fn test_finish_commits_and_restores_editor() {
    let (mut doc, img) = doc_with_image();
    let mut session = ResizeSession::begin(&mut doc, img, HandleDirection::SouthEast, Point::new(0.0, 0.0));
    session.apply(&mut doc, Point::new(50.0, 25.0), Some(2.0), 20);

    let range = session.finish(&mut doc);

    assert_eq!(range, Some(DocumentRange::new(3, 1)));
    assert_eq!(doc.editor().selection, Some(DocumentRange::new(3, 1)));
    let formats: Vec<(&str, &str)> = doc
        .editor()
        .formats
        .iter()
        .map(|call| (call.name.as_str(), call.value.as_str()))
        .collect();
    assert_eq!(formats, vec![("width", "450"), ("height", "225")]);
    assert!(doc.editor().enabled);
    assert_eq!(doc.editor().focus_count, 1);
    assert_eq!(doc.listener_count(), 0);
}

#[test]
fn test_finish_without_moves_formats_nothing() {
    let (mut doc, img) = doc_with_image();
    let session = ResizeSession::begin(&mut doc, img, HandleDirection::NorthWest, Point::new(0.0, 0.0));

    // No attributes were ever written, so there is nothing to format
    assert_eq!(session.finish(&mut doc), Some(DocumentRange::new(3, 1)));
    assert!(doc.editor().formats.is_empty());
    assert!(doc.editor().enabled);
}

#[test]
fn test_finish_on_unknown_blot_still_restores_editor() {
    let (mut doc, img) = doc_with_image();
    doc.untrack(img);
    let mut session = ResizeSession::begin(&mut doc, img, HandleDirection::SouthEast, Point::new(0.0, 0.0));
    session.apply(&mut doc, Point::new(10.0, 10.0), None, 20);

    assert_eq!(session.finish(&mut doc), None);
    assert!(doc.editor().formats.is_empty());
    assert!(doc.editor().enabled);
    assert_eq!(doc.editor().focus_count, 1);
}

#[test]
fn test_abort_releases_without_focus() {
    let (mut doc, img) = doc_with_image();
    let mut session = ResizeSession::begin(&mut doc, img, HandleDirection::SouthEast, Point::new(0.0, 0.0));
    session.apply(&mut doc, Point::new(10.0, 10.0), None, 20);
    session.abort(&mut doc);

    assert_eq!(doc.listener_count(), 0);
    assert!(doc.editor().enabled);
    assert_eq!(doc.editor().focus_count, 0);
    assert!(doc.editor().formats.is_empty());
}
