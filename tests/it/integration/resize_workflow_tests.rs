//! Full corner drags: grab, move, release, commit.

use crate::helpers::{active_fixture, FixtureBuilder};
use image_resizer::host::{EventKind, ListenerTarget};
use image_resizer::settings::ResizerSettings;
use image_resizer::types::{
    Dimensions, DocumentRange, HandleDirection, ModifierKey, Modifiers, Point, Rect,
};

fn some(value: &str) -> Option<String> {
    Some(value.to_string())
}

// ============================================================================
// Free and Locked Drags
// ============================================================================

#[test]
fn test_south_east_free_drag() {
    let mut fx = active_fixture();
    fx.resize(HandleDirection::SouthEast, 50.0, 20.0, Modifiers::default());

    assert_eq!(fx.size_attributes(fx.image), (some("450"), some("220")));
    assert_eq!(fx.overlay_rect(), Rect::new(39.0, 19.0, 452.0, 222.0));
}

#[test]
fn test_south_east_locked_drag_commits() {
    let mut fx = active_fixture();
    fx.resize(HandleDirection::SouthEast, 50.0, 20.0, Modifiers::shift());

    assert_eq!(fx.size_attributes(fx.image), (some("450"), some("225")));
    insta::assert_debug_snapshot!(fx.doc.editor().formats, @r###"
    [
        FormatCall {
            range: Some(
                DocumentRange {
                    index: 5,
                    length: 1,
                },
            ),
            name: "width",
            value: "450",
        },
        FormatCall {
            range: Some(
                DocumentRange {
                    index: 5,
                    length: 1,
                },
            ),
            name: "height",
            value: "225",
        },
    ]
    "###);
}

#[test]
fn test_north_west_drag_grows_against_pointer() {
    let mut fx = active_fixture();
    fx.resize(HandleDirection::NorthWest, -10.0, -20.0, Modifiers::default());
    assert_eq!(fx.size_attributes(fx.image), (some("410"), some("220")));
}

#[test]
fn test_south_west_locked_drag_follows_width() {
    let mut fx = active_fixture();
    // Width shrinks by 100, height derives from it
    fx.resize(HandleDirection::SouthWest, 100.0, 80.0, Modifiers::shift());
    assert_eq!(fx.size_attributes(fx.image), (some("300"), some("150")));
}

#[test]
fn test_lock_modifier_is_configurable() {
    let settings = ResizerSettings {
        aspect_lock_modifier: ModifierKey::Alt,
        ..Default::default()
    };
    let mut fx = FixtureBuilder::new().with_settings(settings).build();
    fx.select(fx.image);

    let start = fx.grab(HandleDirection::SouthEast);
    fx.drag_to(start, 50.0, 20.0, Modifiers::shift());
    assert_eq!(fx.size_attributes(fx.image), (some("450"), some("220")));

    let alt = Modifiers {
        alt: true,
        ..Default::default()
    };
    fx.drag_to(start, 50.0, 20.0, alt);
    assert_eq!(fx.size_attributes(fx.image), (some("450"), some("225")));
    fx.release(start, 50.0, 20.0);
}

#[test]
fn test_locked_drag_uses_natural_ratio_not_current_box() {
    let mut fx = active_fixture();
    fx.resize(HandleDirection::SouthEast, 0.0, 100.0, Modifiers::default());
    assert_eq!(fx.size_attributes(fx.image), (some("400"), some("300")));

    // The 400x300 box does not change the 2:1 snapshot
    fx.resize(HandleDirection::SouthEast, 100.0, 0.0, Modifiers::shift());
    assert_eq!(fx.size_attributes(fx.image), (some("500"), some("250")));
}

// ============================================================================
// Clamping
// ============================================================================

#[test]
fn test_drag_clamps_to_minimum() {
    let mut fx = active_fixture();
    fx.resize(HandleDirection::SouthEast, -1000.0, -1000.0, Modifiers::default());
    assert_eq!(fx.size_attributes(fx.image), (some("20"), some("20")));
}

#[test]
fn test_custom_minimum() {
    let settings = ResizerSettings {
        min_size: 64,
        ..Default::default()
    };
    let mut fx = FixtureBuilder::new().with_settings(settings).build();
    fx.select(fx.image);
    fx.resize(HandleDirection::NorthEast, -500.0, 500.0, Modifiers::shift());
    assert_eq!(fx.size_attributes(fx.image), (some("64"), some("64")));
}

// ============================================================================
// Session Behavior
// ============================================================================

#[test]
fn test_moves_write_live_but_commit_on_release_only() {
    let mut fx = active_fixture();
    let start = fx.grab(HandleDirection::SouthEast);
    assert!(fx.resizer.is_dragging());
    assert!(!fx.doc.editor().enabled);

    for step in 1..=5 {
        fx.drag_to(start, 10.0 * step as f32, 4.0 * step as f32, Modifiers::shift());
        assert!(fx.doc.editor().formats.is_empty());
    }
    assert_eq!(
        fx.resizer.state().session().and_then(|s| s.last_applied()),
        Some(Dimensions::new(450, 225))
    );
    assert_eq!(fx.resizer.state().session().map(|s| s.tick_stats().count()), Some(5));

    fx.release(start, 50.0, 20.0);

    assert!(!fx.resizer.is_dragging());
    assert_eq!(fx.resizer.target(), Some(fx.image));
    assert!(fx.doc.editor().enabled);
    assert_eq!(fx.doc.editor().focus_count, 1);
    assert_eq!(fx.doc.editor().selection, Some(DocumentRange::new(5, 1)));
    assert_eq!(fx.doc.editor().formats.len(), 2);
}

#[test]
fn test_session_listeners_live_only_while_dragging() {
    let mut fx = active_fixture();
    assert_eq!(fx.doc.listeners_on(ListenerTarget::Document), 0);

    let start = fx.grab(HandleDirection::SouthEast);
    assert_eq!(fx.doc.listeners_on(ListenerTarget::Document), 2);

    fx.release(start, 0.0, 0.0);
    assert_eq!(fx.doc.listeners_on(ListenerTarget::Document), 0);
    assert_eq!(fx.doc.listener_count(), 8);
}

#[test]
fn test_handle_press_is_consumed() {
    let mut fx = active_fixture();
    let handle = fx.handle(HandleDirection::SouthEast);
    let point = fx.doc.center_of(handle);

    let outcome = fx.doc.mouse_down(&mut fx.resizer, point);

    // The overlay frame never sees the press, so no focus
    assert!(outcome.default_prevented);
    assert_eq!(outcome.delivered, 1);
    assert_eq!(fx.doc.editor().focus_count, 0);
}

#[test]
fn test_second_handle_press_is_ignored() {
    let mut fx = active_fixture();
    let start = fx.grab(HandleDirection::SouthEast);

    let other = fx.handle(HandleDirection::NorthWest);
    let point = fx.doc.center_of(other);
    fx.doc.mouse_down(&mut fx.resizer, point);

    assert_eq!(
        fx.resizer.state().session().map(|s| s.direction()),
        Some(HandleDirection::SouthEast)
    );
    assert_eq!(fx.doc.listeners_on(ListenerTarget::Document), 2);

    fx.drag_to(start, 50.0, 20.0, Modifiers::default());
    fx.release(start, 50.0, 20.0);
    assert_eq!(fx.size_attributes(fx.image), (some("450"), some("220")));
}

#[test]
fn test_mouse_down_outside_during_drag_keeps_session() {
    let mut fx = active_fixture();
    let start = fx.grab(HandleDirection::SouthEast);

    fx.doc.mouse_down(&mut fx.resizer, Point::new(700.0, 100.0));

    assert!(fx.resizer.is_dragging());
    assert_eq!(fx.doc.overlays().len(), 1);
    fx.release(start, 0.0, 0.0);
}

#[test]
fn test_click_on_other_image_during_drag_is_ignored() {
    let mut fx = FixtureBuilder::new().with_second_image().build();
    let second = fx.second_image.unwrap();
    fx.select(fx.image);
    let start = fx.grab(HandleDirection::SouthEast);

    let point = fx.doc.center_of(second);
    fx.doc
        .mouse(&mut fx.resizer, EventKind::Click, point, Modifiers::default());

    assert_eq!(fx.resizer.target(), Some(fx.image));
    assert!(fx.resizer.is_dragging());
    fx.release(start, 0.0, 0.0);
}

#[test]
fn test_release_far_outside_still_commits() {
    let mut fx = active_fixture();
    let start = fx.grab(HandleDirection::SouthEast);
    fx.drag_to(start, 100.0, 100.0, Modifiers::default());
    fx.doc.mouse_up(&mut fx.resizer, Point::new(799.0, 599.0));

    assert_eq!(fx.doc.editor().formats.len(), 2);
    assert!(!fx.resizer.is_dragging());
}

#[test]
fn test_next_drag_starts_from_committed_size() {
    let mut fx = active_fixture();
    fx.resize(HandleDirection::SouthEast, 50.0, 20.0, Modifiers::default());
    fx.resize(HandleDirection::SouthEast, 10.0, 0.0, Modifiers::default());

    assert_eq!(fx.size_attributes(fx.image), (some("460"), some("220")));
    assert_eq!(fx.doc.editor().formats.len(), 4);
}

#[test]
fn test_release_on_unknown_blot_skips_commit() {
    let mut fx = active_fixture();
    fx.doc.untrack(fx.image);
    fx.resize(HandleDirection::SouthEast, 50.0, 20.0, Modifiers::default());

    assert!(fx.doc.editor().formats.is_empty());
    assert!(fx.doc.editor().enabled);
    assert_eq!(fx.doc.editor().focus_count, 1);
    // Live attributes stay as the last tick wrote them
    assert_eq!(fx.size_attributes(fx.image), (some("450"), some("220")));
    assert!(fx.resizer.is_active());
}
