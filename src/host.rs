//! Capabilities the resizer needs from its host document.
//!
//! The resizer never reaches into the host's document structure. It only
//! asks for geometry, attributes and listener registration through these
//! traits, and the host calls back into
//! [`ImageResizer::handle_event`](crate::ImageResizer::handle_event) and
//! [`ImageResizer::handle_mutation`](crate::ImageResizer::handle_mutation)
//! when something happens.
//!
//! [`MemoryDocument`](crate::memory::MemoryDocument) is a complete in-memory
//! implementation used by the tests and the demo.

use crate::types::{Dimensions, DocumentRange, ElementId, ElementKind, HandleDirection, Point, Rect};

// ============================================================================
// Listener Registration
// ============================================================================

/// Handle to a registered listener, used to detach it again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

/// Handle to a live child-list observation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WatchId(pub u64);

/// DOM event type a listener is registered for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    MouseDown,
    MouseMove,
    MouseUp,
    Scroll,
}

/// Where a listener is attached.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListenerTarget {
    /// The editable root of the document
    Root,
    /// The element that scrolls the document content
    ScrollContainer,
    /// The whole document, so drags register outside any element
    Document,
    Element(ElementId),
}

/// Which resizer callback an event is routed to.
///
/// The host stores the binding with the listener and hands it back on
/// dispatch; the binding also fixes the event type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Binding {
    RootClick,
    RootMouseDown,
    ContainerScroll,
    OverlayMouseDown,
    HandleMouseDown(HandleDirection),
    SessionMouseMove,
    SessionMouseUp,
}

impl Binding {
    pub fn kind(self) -> EventKind {
        match self {
            Self::RootClick => EventKind::Click,
            Self::RootMouseDown | Self::OverlayMouseDown | Self::HandleMouseDown(_) => {
                EventKind::MouseDown
            }
            Self::ContainerScroll => EventKind::Scroll,
            Self::SessionMouseMove => EventKind::MouseMove,
            Self::SessionMouseUp => EventKind::MouseUp,
        }
    }
}

/// Attach and detach input listeners.
pub trait InputSource {
    fn listen(&mut self, target: ListenerTarget, binding: Binding) -> ListenerId;

    /// Detaching an unknown or already detached listener is a no-op.
    fn unlisten(&mut self, id: ListenerId);
}

// ============================================================================
// Mutation Observation
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MutationKind {
    ChildList,
    Attributes,
}

/// A structural change reported by an observation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MutationRecord {
    pub watch: WatchId,
    pub kind: MutationKind,
    /// Node whose children (or attributes) changed
    pub target: ElementId,
}

/// Child-list observation on a node.
pub trait MutationSource {
    fn observe_children(&mut self, node: ElementId) -> WatchId;

    /// Stop delivering records for `watch`. Idempotent.
    fn disconnect(&mut self, watch: WatchId);
}

// ============================================================================
// Document Surface
// ============================================================================

/// Element tree, geometry and styling.
pub trait DocumentSurface {
    /// Element the overlay is appended to and positioned against.
    fn container(&self) -> ElementId;

    /// Current scroll offsets of the scrolling content surface.
    fn scroll_offset(&self) -> Point;

    /// Client-space bounding box, `None` for unknown elements.
    fn bounding_rect(&self, element: ElementId) -> Option<Rect>;

    /// True if the element is connected to the document body.
    fn is_attached(&self, element: ElementId) -> bool;

    /// Inclusive descendant check, like `Node.contains`.
    fn contains(&self, ancestor: ElementId, element: ElementId) -> bool;

    fn parent(&self, element: ElementId) -> Option<ElementId>;

    fn is_image(&self, element: ElementId) -> bool;

    /// Intrinsic size of an image, `None` if unknown or not loaded.
    fn natural_size(&self, image: ElementId) -> Option<Dimensions>;

    fn attribute(&self, element: ElementId, name: &str) -> Option<String>;

    fn set_attribute(&mut self, element: ElementId, name: &str, value: &str);

    /// Create an element and append it to `parent`.
    fn create_element(&mut self, parent: ElementId, kind: ElementKind) -> ElementId;

    /// Remove the element and its subtree. Removing a detached element is a no-op.
    fn remove_element(&mut self, element: ElementId);

    fn set_style(&mut self, element: ElementId, property: &str, value: &str);
}

// ============================================================================
// Editor
// ============================================================================

/// The rich-text editor that owns the document content model.
pub trait Editor {
    fn enable(&mut self);

    /// Stop accepting text edits until [`Editor::enable`] is called.
    fn disable(&mut self);

    fn focus(&mut self);

    /// Resolve a rendered element to its position and length in the content model.
    fn find_range(&self, element: ElementId) -> Option<DocumentRange>;

    fn set_selection(&mut self, range: DocumentRange);

    /// Apply a named format to the current selection.
    fn format(&mut self, name: &str, value: &str);
}

/// Everything the resizer needs, in one bound.
pub trait Host: InputSource + MutationSource + DocumentSurface + Editor {}

impl<T> Host for T where T: InputSource + MutationSource + DocumentSurface + Editor {}
