//! Root click handling.

use crate::host::Host;
use crate::resizer::ImageResizer;
use crate::types::{EventResponse, MouseEvent};

impl ImageResizer {
    /// A click on an image selects it, unless a resize is in progress.
    pub(crate) fn handle_click<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        event: &MouseEvent,
    ) -> EventResponse {
        if host.is_image(event.target) && !self.state.is_dragging() {
            self.activate(host, event.target);
        }
        EventResponse::pass()
    }
}
