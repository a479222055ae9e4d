//! Selection overlay and its corner handles.
//!
//! The overlay is a dashed frame appended to the editor container (not the
//! editable root), with four square handles pinned just outside its corners.
//! Every listener the overlay attaches is remembered here so destruction can
//! detach them all.

use crate::constants::DIRECTION_ATTR;
use crate::geometry::{px, OverlayGeometry};
use crate::host::{Binding, DocumentSurface, Host, ListenerId, ListenerTarget};
use crate::settings::ResizerSettings;
use crate::types::{ElementId, ElementKind, HandleDirection};

/// A corner grip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Handle {
    pub element: ElementId,
    pub direction: HandleDirection,
    listener: ListenerId,
}

/// The overlay frame. Dropping it without [`Overlay::destroy`] leaks host
/// elements, so it is consumed on teardown.
#[derive(Debug)]
#[must_use = "an overlay must be destroyed to remove it from the host"]
pub struct Overlay {
    element: ElementId,
    handles: Vec<Handle>,
    listener: ListenerId,
}

impl Overlay {
    /// Create the frame and its four handles inside the host container.
    pub fn create<H: Host + ?Sized>(host: &mut H, settings: &ResizerSettings) -> Self {
        let container = host.container();
        let element = host.create_element(container, ElementKind::Overlay);
        host.set_style(element, "position", "absolute");
        host.set_style(element, "border", &settings.overlay_border);
        let listener = host.listen(ListenerTarget::Element(element), Binding::OverlayMouseDown);

        let handles = HandleDirection::ALL
            .into_iter()
            .map(|direction| Self::create_handle(host, element, direction, settings))
            .collect();

        tracing::trace!(overlay = %element, "Created overlay");
        Self {
            element,
            handles,
            listener,
        }
    }

    fn create_handle<H: Host + ?Sized>(
        host: &mut H,
        overlay: ElementId,
        direction: HandleDirection,
        settings: &ResizerSettings,
    ) -> Handle {
        let element = host.create_element(overlay, ElementKind::Handle(direction));
        let size = px(settings.handle_size);
        let offset = px(-settings.handle_offset);
        let (vertical, horizontal) = direction.anchors();

        host.set_style(element, "position", "absolute");
        host.set_style(element, "width", &size);
        host.set_style(element, "height", &size);
        host.set_style(element, "background", &settings.handle_background);
        host.set_style(element, "border", &settings.handle_border);
        host.set_style(element, "cursor", direction.cursor());
        host.set_style(element, "z-index", &settings.handle_z_index.to_string());
        host.set_style(element, vertical, &offset);
        host.set_style(element, horizontal, &offset);
        host.set_attribute(element, DIRECTION_ATTR, direction.as_str());

        let listener = host.listen(
            ListenerTarget::Element(element),
            Binding::HandleMouseDown(direction),
        );
        Handle {
            element,
            direction,
            listener,
        }
    }

    pub fn element(&self) -> ElementId {
        self.element
    }

    pub fn handles(&self) -> &[Handle] {
        &self.handles
    }

    pub fn handle(&self, direction: HandleDirection) -> Option<&Handle> {
        self.handles.iter().find(|h| h.direction == direction)
    }

    /// True if `element` is the overlay itself or one of its handles.
    pub fn contains<H: DocumentSurface + ?Sized>(&self, host: &H, element: ElementId) -> bool {
        host.contains(self.element, element)
    }

    /// Move and size the frame.
    pub fn place<H: DocumentSurface + ?Sized>(&self, host: &mut H, geometry: &OverlayGeometry) {
        for (property, value) in geometry.style_rules() {
            host.set_style(self.element, property, &value);
        }
    }

    /// Detach every listener and remove the frame with its handles.
    pub fn destroy<H: Host + ?Sized>(self, host: &mut H) {
        for handle in &self.handles {
            host.unlisten(handle.listener);
        }
        host.unlisten(self.listener);
        host.remove_element(self.element);
        tracing::trace!(overlay = %self.element, "Destroyed overlay");
    }
}
