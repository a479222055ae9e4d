//! Container scroll handling.

use crate::host::Host;
use crate::resizer::ImageResizer;
use crate::types::EventResponse;

impl ImageResizer {
    /// Keep the overlay glued to the image as the content scrolls.
    pub(crate) fn handle_scroll<H: Host + ?Sized>(&mut self, host: &mut H) -> EventResponse {
        if !self.state.is_idle() {
            self.reposition(host);
        }
        EventResponse::pass()
    }
}
