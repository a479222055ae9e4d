//! Overlay construction, placement and teardown.

use image_resizer::geometry::OverlayGeometry;
use image_resizer::host::{DocumentSurface, ListenerTarget};
use image_resizer::memory::MemoryDocument;
use image_resizer::overlay::Overlay;
use image_resizer::settings::ResizerSettings;
use image_resizer::types::{ElementKind, HandleDirection};

#[test]
fn test_create_appends_frame_to_container() {
    let mut doc = MemoryDocument::new();
    let overlay = Overlay::create(&mut doc, &ResizerSettings::default());

    assert_eq!(doc.parent(overlay.element()), Some(doc.container()));
    assert_eq!(doc.style(overlay.element(), "position"), Some("absolute"));
    assert_eq!(doc.style(overlay.element(), "border"), Some("1px dashed #444"));
    assert_eq!(overlay.handles().len(), 4);
    assert_eq!(doc.listeners_on(ListenerTarget::Element(overlay.element())), 1);

    overlay.destroy(&mut doc);
}

#[test]
fn test_handles_are_styled_per_corner() {
    let mut doc = MemoryDocument::new();
    let overlay = Overlay::create(&mut doc, &ResizerSettings::default());

    for direction in HandleDirection::ALL {
        let handle = overlay.handle(direction).unwrap().element;
        let (vertical, horizontal) = direction.anchors();

        assert_eq!(doc.kind(handle), Some(&ElementKind::Handle(direction)));
        assert_eq!(doc.parent(handle), Some(overlay.element()));
        assert_eq!(doc.style(handle, "width"), Some("10px"));
        assert_eq!(doc.style(handle, "height"), Some("10px"));
        assert_eq!(doc.style(handle, vertical), Some("-5px"));
        assert_eq!(doc.style(handle, horizontal), Some("-5px"));
        assert_eq!(doc.style(handle, "z-index"), Some("1001"));
        assert_eq!(doc.style(handle, "cursor"), Some(direction.cursor()));
        assert_eq!(doc.attribute(handle, "data-direction").as_deref(), Some(direction.as_str()));
        assert_eq!(doc.listeners_on(ListenerTarget::Element(handle)), 1);
    }

    overlay.destroy(&mut doc);
}

#[test]
fn test_custom_handle_settings() {
    let mut doc = MemoryDocument::new();
    let settings = ResizerSettings {
        handle_size: 14.0,
        handle_offset: 7.0,
        ..Default::default()
    };
    let overlay = Overlay::create(&mut doc, &settings);
    let handle = overlay.handle(HandleDirection::SouthEast).unwrap().element;

    assert_eq!(doc.style(handle, "width"), Some("14px"));
    assert_eq!(doc.style(handle, "bottom"), Some("-7px"));
    assert_eq!(doc.style(handle, "right"), Some("-7px"));

    overlay.destroy(&mut doc);
}

#[test]
fn test_place_writes_box_styles() {
    let mut doc = MemoryDocument::new();
    let overlay = Overlay::create(&mut doc, &ResizerSettings::default());
    overlay.place(
        &mut doc,
        &OverlayGeometry {
            left: 39.0,
            top: 19.0,
            width: 402.0,
            height: 202.0,
        },
    );

    let element = overlay.element();
    assert_eq!(doc.style(element, "left"), Some("39px"));
    assert_eq!(doc.style(element, "top"), Some("19px"));
    assert_eq!(doc.style(element, "width"), Some("402px"));
    assert_eq!(doc.style(element, "height"), Some("202px"));

    overlay.destroy(&mut doc);
}

#[test]
fn test_destroy_detaches_everything() {
    let mut doc = MemoryDocument::new();
    let overlay = Overlay::create(&mut doc, &ResizerSettings::default());
    let element = overlay.element();
    let handle = overlay.handle(HandleDirection::NorthWest).unwrap().element;

    overlay.destroy(&mut doc);

    assert_eq!(doc.listener_count(), 0);
    assert!(doc.overlays().is_empty());
    assert!(!doc.is_attached(element));
    assert!(!doc.is_attached(handle));
}

#[test]
fn test_contains_frame_and_handles_only() {
    let mut doc = MemoryDocument::new();
    let overlay = Overlay::create(&mut doc, &ResizerSettings::default());
    let handle = overlay.handle(HandleDirection::NorthEast).unwrap().element;

    assert!(overlay.contains(&doc, overlay.element()));
    assert!(overlay.contains(&doc, handle));
    assert!(!overlay.contains(&doc, doc.root()));

    overlay.destroy(&mut doc);
}
