//! Removal watch for the target image.
//!
//! Observes child-list changes on the image's parent. A record from the
//! watch means something around the image moved; the coordinator then asks
//! [`RemovalWatch::is_removed`] whether the image itself is gone.

use crate::host::{DocumentSurface, MutationKind, MutationRecord, MutationSource, WatchId};
use crate::types::ElementId;

#[derive(Debug)]
#[must_use = "a removal watch must be disposed to disconnect it"]
pub struct RemovalWatch {
    watch: WatchId,
    parent: ElementId,
}

impl RemovalWatch {
    /// Start observing the parent of `image`.
    ///
    /// An image without a parent is not in the document, so there is
    /// nothing to watch and `None` is returned.
    pub fn observe<H>(host: &mut H, image: ElementId) -> Option<Self>
    where
        H: MutationSource + DocumentSurface + ?Sized,
    {
        let parent = host.parent(image)?;
        let watch = host.observe_children(parent);
        tracing::trace!(image = %image, parent = %parent, "Watching for image removal");
        Some(Self { watch, parent })
    }

    pub fn id(&self) -> WatchId {
        self.watch
    }

    pub fn parent(&self) -> ElementId {
        self.parent
    }

    /// True if `record` belongs to this watch.
    pub fn owns(&self, record: &MutationRecord) -> bool {
        record.watch == self.watch
    }

    /// True if `record` shows that `image` has left the document.
    pub fn is_removed<H: DocumentSurface + ?Sized>(
        host: &H,
        image: ElementId,
        record: &MutationRecord,
    ) -> bool {
        if record.kind != MutationKind::ChildList {
            return false;
        }
        !host.contains(record.target, image) || !host.is_attached(image)
    }

    pub fn dispose<H: MutationSource + ?Sized>(self, host: &mut H) {
        host.disconnect(self.watch);
    }
}
