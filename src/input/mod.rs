//! Mouse, scroll and mutation handling for the resizer.
//!
//! ## Architecture
//!
//! The resizer uses an explicit state machine (`ResizerState`) instead of
//! `is_dragging` / `is_resizing` flags. Each handler below is an
//! `impl ImageResizer` block for one kind of callback.
//!
//! ## Modules
//!
//! - `state` - State enum and the per-selection resources
//! - `click` - Root click (activation)
//! - `mouse_down` - Root, overlay and handle mouse down
//! - `drag` - Document mouse move during a resize session
//! - `mouse_up` - Session release and commit
//! - `scroll` - Container scroll repositioning
//! - `mutation` - Removal watch records

mod click;
mod drag;
mod mouse_down;
mod mouse_up;
mod mutation;
mod scroll;
mod state;

pub use state::{ResizerState, Selection};
