//! Overlay geometry.
//!
//! Converts an image's client-space bounding box into the overlay's
//! position inside the editor container, accounting for the container's
//! scroll offsets and the frame inset.

use crate::host::DocumentSurface;
use crate::types::{ElementId, Point, Rect};

/// Overlay box in container coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayGeometry {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl OverlayGeometry {
    /// CSS declarations for an absolutely positioned element.
    pub fn style_rules(&self) -> [(&'static str, String); 4] {
        [
            ("left", px(self.left)),
            ("top", px(self.top)),
            ("width", px(self.width)),
            ("height", px(self.height)),
        ]
    }
}

/// Inputs needed to place the overlay
pub struct GeometryContext {
    pub container: Rect,
    pub scroll: Point,
    pub inset: f32,
}

impl GeometryContext {
    #[inline]
    pub fn new(container: Rect, scroll: Point, inset: f32) -> Self {
        Self {
            container,
            scroll,
            inset,
        }
    }
}

pub struct GeometryTracker;

impl GeometryTracker {
    /// Frame `image` in container space, grown outward by the inset on every side.
    #[inline]
    pub fn compute(image: Rect, ctx: &GeometryContext) -> OverlayGeometry {
        OverlayGeometry {
            left: image.left - ctx.container.left + ctx.scroll.x - ctx.inset,
            top: image.top - ctx.container.top + ctx.scroll.y - ctx.inset,
            width: image.width + ctx.inset * 2.0,
            height: image.height + ctx.inset * 2.0,
        }
    }

    /// Read the live geometry from the host.
    ///
    /// Returns `None` when the image is no longer in the document; callers
    /// treat that as a removal rather than placing the overlay at stale
    /// coordinates.
    pub fn track<H: DocumentSurface + ?Sized>(
        host: &H,
        image: ElementId,
        inset: f32,
    ) -> Option<OverlayGeometry> {
        if !host.is_attached(image) {
            return None;
        }
        let image_rect = host.bounding_rect(image)?;
        let container_rect = host.bounding_rect(host.container())?;
        let ctx = GeometryContext::new(container_rect, host.scroll_offset(), inset);
        Some(Self::compute(image_rect, &ctx))
    }
}

/// Format a length the way the overlay styles are written.
pub fn px(value: f32) -> String {
    format!("{}px", value)
}
