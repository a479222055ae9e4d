//! Resizer state machine.
//!
//! Everything that must exist only while an image is selected (the overlay,
//! its handles, the aspect ratio snapshot and the removal watch) lives in a
//! single [`Selection`], so the co-lifecycle holds by construction.
//!
//! ## State Transitions
//!
//! ```text
//! Idle     -> Active      (click / mouse down on an image)
//! Active   -> Active      (mouse down on a different image)
//! Active   -> Idle        (mouse down outside the overlay, image removed)
//! Active   -> Dragging    (mouse down on a handle)
//! Dragging -> Active      (mouse up, after commit)
//! Dragging -> Idle        (image removed mid-drag, destroy)
//! ```

use crate::overlay::Overlay;
use crate::session::ResizeSession;
use crate::types::ElementId;
use crate::watcher::RemovalWatch;

/// Resources tied to the target image.
#[derive(Debug)]
pub struct Selection {
    pub image: ElementId,
    pub overlay: Overlay,
    pub watch: RemovalWatch,
    /// Width / height captured at activation. NaN when the image has no
    /// usable intrinsic or rendered size, which leaves locked drags unconstrained.
    pub aspect_ratio: f64,
}

#[derive(Debug, Default)]
pub enum ResizerState {
    /// No image selected
    #[default]
    Idle,

    /// Image selected, no drag in progress
    Active(Selection),

    /// Image selected and a handle is being dragged
    Dragging {
        selection: Selection,
        session: ResizeSession,
    },
}

impl ResizerState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true while a resize session is open
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    pub fn selection(&self) -> Option<&Selection> {
        match self {
            Self::Idle => None,
            Self::Active(selection) | Self::Dragging { selection, .. } => Some(selection),
        }
    }

    pub fn target(&self) -> Option<ElementId> {
        self.selection().map(|s| s.image)
    }

    pub fn session(&self) -> Option<&ResizeSession> {
        match self {
            Self::Dragging { session, .. } => Some(session),
            _ => None,
        }
    }
}
