//! Mouse down handling - deactivation, target switching and drag start.

use crate::host::Host;
use crate::input::ResizerState;
use crate::resizer::ImageResizer;
use crate::session::ResizeSession;
use crate::types::{EventResponse, HandleDirection, MouseEvent};

impl ImageResizer {
    /// Mouse down anywhere inside the editable root.
    ///
    /// Outside the overlay this drops the selection; on another image it
    /// switches the target. Both are suppressed while dragging.
    pub(crate) fn handle_root_mouse_down<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        event: &MouseEvent,
    ) -> EventResponse {
        if self.state.is_dragging() {
            return EventResponse::pass();
        }

        let target = event.target;
        if self.state.target() == Some(target) {
            return EventResponse::pass();
        }

        let outside_overlay = match self.state.selection() {
            Some(selection) => !selection.overlay.contains(&*host, target),
            None => false,
        };
        if outside_overlay {
            self.deactivate(host);
        }

        if host.is_image(target) {
            self.activate(host, target);
        }
        EventResponse::pass()
    }

    /// Mouse down on the overlay frame itself.
    ///
    /// The frame swallows the event so the editor never sees it, and hands
    /// focus back to the editor unless a resize is running.
    pub(crate) fn handle_overlay_mouse_down<H: Host + ?Sized>(&mut self, host: &mut H) -> EventResponse {
        if !self.state.is_dragging() {
            host.focus();
        }
        EventResponse::consume()
    }

    /// Mouse down on a corner handle opens a resize session.
    ///
    /// Only one session may run at a time: a handle press while already
    /// dragging is swallowed without effect.
    pub(crate) fn handle_drag_start<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        direction: HandleDirection,
        event: &MouseEvent,
    ) -> EventResponse {
        match std::mem::take(&mut self.state) {
            ResizerState::Active(selection) => {
                if !host.is_attached(selection.image) {
                    self.state = ResizerState::Active(selection);
                    self.deactivate(host);
                    return EventResponse::consume();
                }
                let session = ResizeSession::begin(host, selection.image, direction, event.position);
                self.state = ResizerState::Dragging { selection, session };
                EventResponse::consume()
            }
            dragging @ ResizerState::Dragging { .. } => {
                tracing::trace!(%direction, "Ignoring handle press during an open session");
                self.state = dragging;
                EventResponse::consume()
            }
            ResizerState::Idle => EventResponse::pass(),
        }
    }
}
