//! Drag handling - one resize tick per document mouse move.
//!
//! ## Performance Notes
//!
//! Mouse move fires very frequently during a resize. Each tick writes two
//! attributes and repositions the overlay synchronously, so the overlay
//! always reflects the size just written.
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use crate::constants::SLOW_TICK_MS;
use crate::host::Host;
use crate::input::ResizerState;
use crate::perf::measure;
use crate::profile_scope;
use crate::resizer::ImageResizer;
use crate::types::{EventResponse, MouseEvent};

impl ImageResizer {
    pub(crate) fn handle_mouse_move<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        event: &MouseEvent,
    ) -> EventResponse {
        profile_scope!("resize_tick", SLOW_TICK_MS);

        let Some(image) = self.state.session().map(|s| s.image()) else {
            return EventResponse::pass();
        };

        // The image vanished mid-drag: abort, which also drops the session listeners
        if !host.is_attached(image) {
            tracing::debug!(image = %image, "Target vanished during resize");
            self.deactivate(host);
            return EventResponse::pass();
        }

        let locked = self.settings.aspect_lock_modifier.is_held(&event.modifiers);
        let min_size = self.settings.min_size;

        let (placed, elapsed_ms) = measure(|| {
            if let ResizerState::Dragging { selection, session } = &mut self.state {
                let ratio = locked.then_some(selection.aspect_ratio);
                let size = session.apply(host, event.position, ratio, min_size);
                tracing::trace!(
                    image = %image,
                    width = size.width,
                    height = size.height,
                    locked,
                    "Resize tick"
                );
            }
            self.reposition(host)
        });
        if !placed {
            return EventResponse::pass();
        }

        if let ResizerState::Dragging { session, .. } = &mut self.state {
            session.record_tick(elapsed_ms);
        }
        EventResponse::pass()
    }
}
