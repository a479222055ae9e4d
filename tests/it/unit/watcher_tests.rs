//! Removal watch behavior against the in-memory document.

use image_resizer::host::{DocumentSurface, MutationKind, MutationRecord, MutationSource, WatchId};
use image_resizer::memory::MemoryDocument;
use image_resizer::types::{Dimensions, Rect};
use image_resizer::watcher::RemovalWatch;

fn doc() -> (MemoryDocument, image_resizer::types::ElementId, image_resizer::types::ElementId) {
    let mut doc = MemoryDocument::new();
    let p = doc.add_paragraph("", Rect::new(0.0, 0.0, 800.0, 200.0));
    let img = doc.add_image(p, Rect::new(0.0, 0.0, 100.0, 100.0), Dimensions::new(100, 100));
    (doc, p, img)
}

#[test]
fn test_observe_watches_parent() {
    let (mut doc, p, img) = doc();
    let watch = RemovalWatch::observe(&mut doc, img).unwrap();
    assert_eq!(watch.parent(), p);
    assert!(doc.is_watching(watch.id()));

    watch.dispose(&mut doc);
    assert_eq!(doc.watch_count(), 0);
}

#[test]
fn test_observe_detached_image_returns_none() {
    let (mut doc, _, img) = doc();
    doc.remove_element(img);
    assert!(RemovalWatch::observe(&mut doc, img).is_none());
    assert_eq!(doc.watch_count(), 0);
}

#[test]
fn test_sibling_insert_is_not_removal() {
    let (mut doc, p, img) = doc();
    let watch = RemovalWatch::observe(&mut doc, img).unwrap();
    doc.add_image(p, Rect::new(100.0, 0.0, 50.0, 50.0), Dimensions::new(50, 50));

    let record = MutationRecord {
        watch: watch.id(),
        kind: MutationKind::ChildList,
        target: p,
    };
    assert!(watch.owns(&record));
    assert!(!RemovalWatch::is_removed(&doc, img, &record));
    watch.dispose(&mut doc);
}

#[test]
fn test_image_removal_is_detected() {
    let (mut doc, p, img) = doc();
    let watch = RemovalWatch::observe(&mut doc, img).unwrap();
    doc.remove_element(img);

    let record = MutationRecord {
        watch: watch.id(),
        kind: MutationKind::ChildList,
        target: p,
    };
    assert!(RemovalWatch::is_removed(&doc, img, &record));
    watch.dispose(&mut doc);
}

#[test]
fn test_attribute_records_are_ignored() {
    let (mut doc, p, img) = doc();
    let watch = RemovalWatch::observe(&mut doc, img).unwrap();
    doc.remove_element(img);

    let record = MutationRecord {
        watch: watch.id(),
        kind: MutationKind::Attributes,
        target: p,
    };
    assert!(!RemovalWatch::is_removed(&doc, img, &record));
    assert!(!watch.owns(&MutationRecord {
        watch: WatchId(u64::MAX),
        ..record
    }));
    watch.dispose(&mut doc);
}

#[test]
fn test_disconnect_is_idempotent() {
    let (mut doc, _, img) = doc();
    let watch = RemovalWatch::observe(&mut doc, img).unwrap();
    let id = watch.id();
    watch.dispose(&mut doc);
    doc.disconnect(id);
    assert_eq!(doc.watch_count(), 0);
}
