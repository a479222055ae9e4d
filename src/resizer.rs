//! The activation coordinator.
//!
//! [`ImageResizer`] owns the selection state and is the single entry point
//! for host callbacks. It decides when to activate, switch or drop the
//! target image and hands drags to a [`ResizeSession`](crate::session::ResizeSession).
//! The per-event handlers live in [`crate::input`].

use crate::geometry::GeometryTracker;
use crate::host::{Binding, Host, ListenerId, ListenerTarget, WatchId};
use crate::input::{ResizerState, Selection};
use crate::overlay::Overlay;
use crate::profile_scope;
use crate::settings::ResizerSettings;
use crate::types::{ElementId, EventResponse, InputEvent};
use crate::watcher::RemovalWatch;

pub struct ImageResizer {
    pub(crate) settings: ResizerSettings,
    pub(crate) state: ResizerState,
    /// Root click, root mouse down and container scroll
    root_listeners: Vec<ListenerId>,
}

impl ImageResizer {
    /// Bind the resizer to a host surface.
    pub fn attach<H: Host + ?Sized>(host: &mut H, settings: ResizerSettings) -> Self {
        let root_listeners = vec![
            host.listen(ListenerTarget::Root, Binding::RootClick),
            host.listen(ListenerTarget::Root, Binding::RootMouseDown),
            host.listen(ListenerTarget::ScrollContainer, Binding::ContainerScroll),
        ];
        tracing::debug!("Image resizer attached");
        Self {
            settings,
            state: ResizerState::Idle,
            root_listeners,
        }
    }

    /// Detach from the host and drop any selection.
    ///
    /// Safe to call more than once.
    pub fn destroy<H: Host + ?Sized>(&mut self, host: &mut H) {
        for id in self.root_listeners.drain(..) {
            host.unlisten(id);
        }
        self.deactivate(host);
        tracing::debug!("Image resizer destroyed");
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn settings(&self) -> &ResizerSettings {
        &self.settings
    }

    pub fn state(&self) -> &ResizerState {
        &self.state
    }

    /// Currently selected image, if any
    pub fn target(&self) -> Option<ElementId> {
        self.state.target()
    }

    pub fn overlay(&self) -> Option<&Overlay> {
        self.state.selection().map(|s| &s.overlay)
    }

    pub fn watch_id(&self) -> Option<WatchId> {
        self.state.selection().map(|s| s.watch.id())
    }

    /// Aspect ratio snapshot of the target, `None` when idle.
    ///
    /// Always `Some` while an image is selected; a NaN ratio means the image
    /// had no usable size and the lock modifier has no effect.
    pub fn aspect_ratio(&self) -> Option<f64> {
        self.state.selection().map(|s| s.aspect_ratio)
    }

    pub fn is_active(&self) -> bool {
        !self.state.is_idle()
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    /// True until [`ImageResizer::destroy`] is called.
    pub fn is_attached(&self) -> bool {
        !self.root_listeners.is_empty()
    }

    // ========================================================================
    // Dispatch
    // ========================================================================

    /// Route an event delivered through one of the resizer's listeners.
    pub fn handle_event<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        binding: Binding,
        event: &InputEvent,
    ) -> EventResponse {
        match (binding, event) {
            (Binding::RootClick, InputEvent::Mouse(e)) => self.handle_click(host, e),
            (Binding::RootMouseDown, InputEvent::Mouse(e)) => self.handle_root_mouse_down(host, e),
            (Binding::OverlayMouseDown, InputEvent::Mouse(_)) => self.handle_overlay_mouse_down(host),
            (Binding::HandleMouseDown(direction), InputEvent::Mouse(e)) => {
                self.handle_drag_start(host, direction, e)
            }
            (Binding::SessionMouseMove, InputEvent::Mouse(e)) => self.handle_mouse_move(host, e),
            (Binding::SessionMouseUp, InputEvent::Mouse(_)) => self.handle_mouse_up(host),
            (Binding::ContainerScroll, _) => self.handle_scroll(host),
            (binding, event) => {
                tracing::trace!(?binding, ?event, "Ignoring event for mismatched binding");
                EventResponse::pass()
            }
        }
    }

    // ========================================================================
    // Activation
    // ========================================================================

    /// Select `image`, replacing any current selection.
    ///
    /// Activating the current target is a no-op. An element that is not an
    /// attached image leaves the resizer idle.
    pub fn activate<H: Host + ?Sized>(&mut self, host: &mut H, image: ElementId) {
        if self.state.target() == Some(image) {
            return;
        }

        self.deactivate(host);

        if !host.is_image(image) || !host.is_attached(image) {
            tracing::debug!(element = %image, "Refusing to activate a detached or non-image element");
            return;
        }
        let Some(watch) = RemovalWatch::observe(host, image) else {
            return;
        };

        let aspect_ratio = host
            .natural_size(image)
            .and_then(|size| size.aspect_ratio())
            .or_else(|| {
                host.bounding_rect(image)
                    .filter(|r| r.width > 0.0 && r.height > 0.0)
                    .map(|r| r.width as f64 / r.height as f64)
            })
            .unwrap_or(f64::NAN);
        let overlay = Overlay::create(host, &self.settings);

        self.state = ResizerState::Active(Selection {
            image,
            overlay,
            watch,
            aspect_ratio,
        });
        tracing::debug!(image = %image, ?aspect_ratio, "Activated image");

        self.reposition(host);
    }

    /// Drop the selection and everything tied to it, aborting any drag.
    ///
    /// Deactivating while idle is a no-op.
    pub fn deactivate<H: Host + ?Sized>(&mut self, host: &mut H) {
        let selection = match std::mem::take(&mut self.state) {
            ResizerState::Idle => return,
            ResizerState::Active(selection) => selection,
            ResizerState::Dragging { selection, session } => {
                session.abort(host);
                selection
            }
        };

        let image = selection.image;
        selection.watch.dispose(host);
        selection.overlay.destroy(host);
        tracing::debug!(image = %image, "Deactivated image");
    }

    /// Place the overlay over the target's current box.
    ///
    /// Returns false (after deactivating) if the target has left the document.
    pub(crate) fn reposition<H: Host + ?Sized>(&mut self, host: &mut H) -> bool {
        profile_scope!("reposition_overlay");

        let Some(image) = self.state.target() else {
            return false;
        };
        match GeometryTracker::track(&*host, image, self.settings.overlay_inset) {
            Some(geometry) => {
                if let Some(selection) = self.state.selection() {
                    selection.overlay.place(host, &geometry);
                }
                tracing::trace!(
                    image = %image,
                    left = geometry.left,
                    top = geometry.top,
                    width = geometry.width,
                    height = geometry.height,
                    "Positioned overlay"
                );
                true
            }
            None => {
                tracing::debug!(image = %image, "Target left the document during reposition");
                self.deactivate(host);
                false
            }
        }
    }
}
