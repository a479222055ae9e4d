//! Resize session - one corner-handle drag from mouse down to mouse up.
//!
//! A session owns the document-level move/up listeners it attaches, so the
//! only ways to end one, [`ResizeSession::finish`] and
//! [`ResizeSession::abort`], both release them. Intermediate move ticks
//! write the image's live attributes for visual feedback; the host's
//! content model is only formatted once, on finish.

use crate::constants::{HEIGHT_ATTR, WIDTH_ATTR};
use crate::host::{Binding, DocumentSurface, Host, ListenerId, ListenerTarget};
use crate::perf::OperationStats;
use crate::types::{Dimensions, DocumentRange, ElementId, HandleDirection, Point};

/// Immutable values captured when the drag starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionContext {
    pub direction: HandleDirection,
    /// Pointer position at mouse down
    pub start: Point,
    /// Image size at mouse down
    pub start_size: Dimensions,
}

/// Compute the image size for a pointer position during a drag.
///
/// `aspect_ratio` is `Some` only while the lock modifier is held. Each axis
/// is floored at `min_size`.
pub fn resize_dimensions(
    ctx: &SessionContext,
    pointer: Point,
    aspect_ratio: Option<f64>,
    min_size: u32,
) -> Dimensions {
    let delta = pointer - ctx.start;
    let dx = round_half_up(delta.x as f64);
    let dy = round_half_up(delta.y as f64);
    let (sign_x, sign_y) = ctx.direction.to_signs();

    let mut width = i64::from(ctx.start_size.width).saturating_add(sign_x.saturating_mul(dx));
    let mut height = i64::from(ctx.start_size.height).saturating_add(sign_y.saturating_mul(dy));

    if let Some(ratio) = aspect_ratio.filter(|r| r.is_finite() && *r > 0.0) {
        if ctx.direction.is_horizontal() {
            height = round_half_up(width as f64 / ratio);
        } else {
            width = round_half_up(height as f64 * ratio);
        }
    }

    let min = i64::from(min_size);
    Dimensions::new(clamp_to_u32(width.max(min)), clamp_to_u32(height.max(min)))
}

/// Round to the nearest integer, halves toward positive infinity.
#[inline]
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

#[inline]
fn clamp_to_u32(value: i64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

/// Parse a length attribute the way `parseInt` does: leading digits,
/// trailing units ignored.
pub fn parse_pixel_length(value: &str) -> Option<u32> {
    let trimmed = value.trim_start();
    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse().ok()
}

/// Size the drag starts from: explicit attributes first, rendered size otherwise.
pub fn start_dimensions<H: DocumentSurface + ?Sized>(host: &H, image: ElementId) -> Dimensions {
    let rendered = host.bounding_rect(image).unwrap_or_default();
    let width = host
        .attribute(image, WIDTH_ATTR)
        .as_deref()
        .and_then(parse_pixel_length)
        .unwrap_or_else(|| clamp_to_u32(round_half_up(rendered.width as f64)));
    let height = host
        .attribute(image, HEIGHT_ATTR)
        .as_deref()
        .and_then(parse_pixel_length)
        .unwrap_or_else(|| clamp_to_u32(round_half_up(rendered.height as f64)));
    Dimensions::new(width, height)
}

#[derive(Debug)]
#[must_use = "a session must be finished or aborted to release its listeners"]
pub struct ResizeSession {
    context: SessionContext,
    image: ElementId,
    move_listener: ListenerId,
    up_listener: ListenerId,
    last_applied: Option<Dimensions>,
    tick_stats: OperationStats,
}

impl ResizeSession {
    /// Capture the start geometry, disable editing and bind the document-level listeners.
    pub fn begin<H: Host + ?Sized>(
        host: &mut H,
        image: ElementId,
        direction: HandleDirection,
        start: Point,
    ) -> Self {
        let context = SessionContext {
            direction,
            start,
            start_size: start_dimensions(&*host, image),
        };

        host.disable();
        let move_listener = host.listen(ListenerTarget::Document, Binding::SessionMouseMove);
        let up_listener = host.listen(ListenerTarget::Document, Binding::SessionMouseUp);

        tracing::debug!(
            image = %image,
            direction = %direction,
            width = context.start_size.width,
            height = context.start_size.height,
            "Resize session started"
        );

        Self {
            context,
            image,
            move_listener,
            up_listener,
            last_applied: None,
            tick_stats: OperationStats::default(),
        }
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    pub fn image(&self) -> ElementId {
        self.image
    }

    pub fn direction(&self) -> HandleDirection {
        self.context.direction
    }

    /// Size written by the most recent move tick, if any.
    pub fn last_applied(&self) -> Option<Dimensions> {
        self.last_applied
    }

    pub fn listeners(&self) -> [ListenerId; 2] {
        [self.move_listener, self.up_listener]
    }

    /// Compute the new size for `pointer` and write it onto the image attributes.
    pub fn apply<H: DocumentSurface + ?Sized>(
        &mut self,
        host: &mut H,
        pointer: Point,
        aspect_ratio: Option<f64>,
        min_size: u32,
    ) -> Dimensions {
        let size = resize_dimensions(&self.context, pointer, aspect_ratio, min_size);
        host.set_attribute(self.image, WIDTH_ATTR, &size.width.to_string());
        host.set_attribute(self.image, HEIGHT_ATTR, &size.height.to_string());
        self.last_applied = Some(size);
        size
    }

    pub fn record_tick(&mut self, elapsed_ms: f64) {
        self.tick_stats.record(elapsed_ms);
    }

    pub fn tick_stats(&self) -> &OperationStats {
        &self.tick_stats
    }

    fn release<H: Host + ?Sized>(&self, host: &mut H) {
        host.unlisten(self.move_listener);
        host.unlisten(self.up_listener);
        self.tick_stats.log_summary("resize_tick");
    }

    /// End the drag normally and commit the final size to the content model.
    ///
    /// Returns the range that was formatted, or `None` if the image could not
    /// be resolved (it left the document, or the editor does not know it).
    pub fn finish<H: Host + ?Sized>(self, host: &mut H) -> Option<DocumentRange> {
        self.release(host);

        let committed = if host.is_attached(self.image) {
            host.find_range(self.image).map(|range| {
                host.set_selection(range);
                for name in [WIDTH_ATTR, HEIGHT_ATTR] {
                    if let Some(value) = host.attribute(self.image, name) {
                        host.format(name, &value);
                    }
                }
                range
            })
        } else {
            None
        };

        host.enable();
        host.focus();

        match committed {
            Some(range) => tracing::debug!(
                image = %self.image,
                index = range.index,
                length = range.length,
                "Committed resize"
            ),
            None => tracing::debug!(image = %self.image, "Resize ended without commit"),
        }
        committed
    }

    /// Tear the drag down without committing.
    pub fn abort<H: Host + ?Sized>(self, host: &mut H) {
        self.release(host);
        host.enable();
        tracing::debug!(image = %self.image, "Resize session aborted");
    }
}
