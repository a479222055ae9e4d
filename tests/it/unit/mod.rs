//! Unit tests for the resizer components.

mod overlay_tests;
mod session_tests;
mod watcher_tests;
