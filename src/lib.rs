//! Interactive image resizing for rich-text document surfaces.
//!
//! Selecting an image in the editable root frames it with a dashed overlay
//! carrying four corner handles. Dragging a handle resizes the image live;
//! releasing commits the final `width`/`height` to the editor's content model.
//!
//! ## Modules
//!
//! - `resizer` - [`ImageResizer`], the activation coordinator
//! - `input` - Per-event handlers and the [`ResizerState`] machine
//! - `session` - One drag from mouse down to mouse up
//! - `overlay` / `geometry` - The frame, its handles and where they go
//! - `watcher` - Detects the target image leaving the document
//! - `host` - Capability traits a document must provide
//! - `memory` - A complete in-memory host
//! - `settings` - User-tunable sizes, styling and the lock modifier

pub mod constants;
pub mod error;
pub mod geometry;
pub mod host;
pub mod input;
pub mod memory;
pub mod overlay;
pub mod perf;
pub mod resizer;
pub mod session;
pub mod settings;
pub mod spatial_index;
pub mod types;
pub mod watcher;

pub use error::{ResizerError, ResizerResult};
pub use host::{Binding, DocumentSurface, Editor, Host, InputSource, MutationSource};
pub use input::{ResizerState, Selection};
pub use resizer::ImageResizer;
pub use settings::ResizerSettings;
