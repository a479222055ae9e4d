//! Resizer-wide constants.
//!
//! Defaults for [`ResizerSettings`](crate::settings::ResizerSettings) and the
//! names of the attributes and formats the resizer writes.

// ============================================================================
// Sizing
// ============================================================================

/// Smallest width or height a drag may produce, in pixels
pub const MIN_IMAGE_SIZE: u32 = 20;

/// Outward inset of the overlay frame so it borders the image instead of covering it
pub const OVERLAY_INSET: f32 = 1.0;

/// Side length of a corner handle in pixels
pub const HANDLE_SIZE: f32 = 10.0;

/// How far a handle sits outside the overlay's corner
pub const HANDLE_OFFSET: f32 = 5.0;

// ============================================================================
// Appearance
// ============================================================================

pub const OVERLAY_BORDER: &str = "1px dashed #444";

pub const HANDLE_BACKGROUND: &str = "#444";

pub const HANDLE_BORDER: &str = "1px solid #fff";

/// Keeps handles above the editor's own stacking contexts
pub const HANDLE_Z_INDEX: i32 = 1001;

// ============================================================================
// Document Attributes
// ============================================================================

/// Attribute and format name for the image width
pub const WIDTH_ATTR: &str = "width";

/// Attribute and format name for the image height
pub const HEIGHT_ATTR: &str = "height";

/// Data attribute carrying a handle's direction tag
pub const DIRECTION_ATTR: &str = "data-direction";

// ============================================================================
// Settings
// ============================================================================

/// Directory under the platform config dir holding the settings file
pub const SETTINGS_DIR: &str = "image-resizer";

pub const SETTINGS_FILE: &str = "settings.json";

/// Move ticks slower than this are reported as slow operations
pub const SLOW_TICK_MS: f64 = 4.0;
