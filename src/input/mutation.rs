//! Removal watch records.

use crate::host::{Host, MutationRecord};
use crate::resizer::ImageResizer;
use crate::watcher::RemovalWatch;

impl ImageResizer {
    /// Deliver a mutation record from the host's child-list observation.
    ///
    /// Records from a watch that has already been disposed are ignored.
    pub fn handle_mutation<H: Host + ?Sized>(&mut self, host: &mut H, record: &MutationRecord) {
        let Some(selection) = self.state.selection() else {
            return;
        };
        if !selection.watch.owns(record) {
            tracing::trace!(watch = ?record.watch, "Ignoring record from a stale watch");
            return;
        }

        if RemovalWatch::is_removed(&*host, selection.image, record) {
            tracing::debug!(image = %selection.image, "Target image removed from the document");
            self.deactivate(host);
        }
    }
}
