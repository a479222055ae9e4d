//! Core types shared by the resizer and its host.
//!
//! These are deliberately small value types: element handles, pointer
//! positions, rectangles and the handle directions that drive a resize.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Element Handles
// ============================================================================

/// Opaque handle to an element owned by the host document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What an element is, as far as the resizer cares.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ElementKind {
    /// An `<img>` embedded in the document
    Image,
    /// The selection frame drawn around the target image
    Overlay,
    /// A corner grip inside the overlay
    Handle(HandleDirection),
    /// Any other node (paragraphs, containers, text wrappers)
    Block(String),
}

impl ElementKind {
    pub fn is_image(&self) -> bool {
        matches!(self, Self::Image)
    }
}

// ============================================================================
// Geometry
// ============================================================================

/// A pointer position or scroll offset in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// An axis-aligned box, as returned by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[inline]
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left && point.x <= self.right() && point.y >= self.top && point.y <= self.bottom()
    }
}

/// Whole-pixel image dimensions, as written to the `width`/`height` attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height, or `None` for a degenerate box.
    pub fn aspect_ratio(&self) -> Option<f64> {
        if self.width == 0 || self.height == 0 {
            None
        } else {
            Some(self.width as f64 / self.height as f64)
        }
    }
}

// ============================================================================
// Handle Directions
// ============================================================================

/// One of the four corner grips on the overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandleDirection {
    #[serde(rename = "nw")]
    NorthWest,
    #[serde(rename = "ne")]
    NorthEast,
    #[serde(rename = "se")]
    SouthEast,
    #[serde(rename = "sw")]
    SouthWest,
}

impl HandleDirection {
    /// Creation order of the handles inside the overlay.
    pub const ALL: [HandleDirection; 4] = [
        Self::NorthWest,
        Self::NorthEast,
        Self::SouthEast,
        Self::SouthWest,
    ];

    /// Short tag stored in the handle's `data-direction`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NorthWest => "nw",
            Self::NorthEast => "ne",
            Self::SouthEast => "se",
            Self::SouthWest => "sw",
        }
    }

    /// CSS cursor shown while hovering the handle.
    pub fn cursor(self) -> &'static str {
        match self {
            Self::NorthWest => "nw-resize",
            Self::NorthEast => "ne-resize",
            Self::SouthEast => "se-resize",
            Self::SouthWest => "sw-resize",
        }
    }

    /// Sign multipliers applied to the pointer delta: (width, height).
    ///
    /// East grows width with +x, west shrinks it; south grows height with +y,
    /// north shrinks it.
    pub fn to_signs(self) -> (i64, i64) {
        match self {
            Self::NorthWest => (-1, -1),
            Self::NorthEast => (1, -1),
            Self::SouthEast => (1, 1),
            Self::SouthWest => (-1, 1),
        }
    }

    /// True when the direction has an east or west component.
    ///
    /// Every corner has one, so aspect-locked drags from a corner always
    /// derive height from width.
    pub fn is_horizontal(self) -> bool {
        let (sx, _) = self.to_signs();
        sx != 0
    }

    /// CSS edges the handle is pinned to: (vertical edge, horizontal edge).
    pub fn anchors(self) -> (&'static str, &'static str) {
        match self {
            Self::NorthWest => ("top", "left"),
            Self::NorthEast => ("top", "right"),
            Self::SouthEast => ("bottom", "right"),
            Self::SouthWest => ("bottom", "left"),
        }
    }
}

impl fmt::Display for HandleDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Input
// ============================================================================

/// Keyboard modifiers held during a mouse event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub control: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::default()
        }
    }
}

/// Modifier key that locks the aspect ratio during a drag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModifierKey {
    #[default]
    Shift,
    Control,
    Alt,
    Meta,
}

impl ModifierKey {
    pub fn is_held(self, modifiers: &Modifiers) -> bool {
        match self {
            Self::Shift => modifiers.shift,
            Self::Control => modifiers.control,
            Self::Alt => modifiers.alt,
            Self::Meta => modifiers.meta,
        }
    }
}

/// A mouse event as delivered by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MouseEvent {
    /// Innermost element under the pointer
    pub target: ElementId,
    /// Client coordinates
    pub position: Point,
    pub modifiers: Modifiers,
}

impl MouseEvent {
    pub fn new(target: ElementId, position: Point) -> Self {
        Self {
            target,
            position,
            modifiers: Modifiers::default(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// Anything the host delivers to a resizer listener.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    Mouse(MouseEvent),
    /// The scroll container scrolled; offsets are read back from the host
    Scroll,
}

/// What a listener asks the host to do with the event after it returns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventResponse {
    pub prevent_default: bool,
    pub stop_propagation: bool,
}

impl EventResponse {
    /// Let the event continue untouched.
    pub const fn pass() -> Self {
        Self {
            prevent_default: false,
            stop_propagation: false,
        }
    }

    /// `preventDefault()` + `stopPropagation()`.
    pub const fn consume() -> Self {
        Self {
            prevent_default: true,
            stop_propagation: true,
        }
    }
}

// ============================================================================
// Document Model
// ============================================================================

/// A span in the host's logical content model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRange {
    pub index: usize,
    pub length: usize,
}

impl DocumentRange {
    pub const fn new(index: usize, length: usize) -> Self {
        Self { index, length }
    }
}
