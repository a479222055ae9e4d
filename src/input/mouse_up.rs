//! Mouse up handling - close the session and commit the final size.

use crate::host::Host;
use crate::input::ResizerState;
use crate::resizer::ImageResizer;
use crate::types::EventResponse;

impl ImageResizer {
    pub(crate) fn handle_mouse_up<H: Host + ?Sized>(&mut self, host: &mut H) -> EventResponse {
        match std::mem::take(&mut self.state) {
            ResizerState::Dragging { selection, session } => {
                session.finish(host);
                self.state = ResizerState::Active(selection);
                // Drops the selection too if the image left during release
                self.reposition(host);
            }
            other => self.state = other,
        }
        EventResponse::pass()
    }
}
