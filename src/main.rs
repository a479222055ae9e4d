//! Scripted resize against the in-memory document.
//!
//! ```sh
//! RUST_LOG=image_resizer=trace cargo run --bin image-resizer-demo -- photo.png
//! ```
//!
//! Without an argument a 400x200 placeholder image is used.

use anyhow::{Context, Result};
use image_resizer::host::DocumentSurface;
use image_resizer::memory::MemoryDocument;
use image_resizer::types::{Dimensions, HandleDirection, Modifiers, Point, Rect};
use image_resizer::{ImageResizer, ResizerSettings};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("image_resizer=debug")),
        )
        .init();

    let mut doc = MemoryDocument::new();
    let paragraph = doc.add_paragraph("Resize me:", Rect::new(0.0, 0.0, 800.0, 400.0));
    let image = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => doc
            .add_image_from_file(paragraph, &path, Point::new(40.0, 40.0))
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => doc.add_image(
            paragraph,
            Rect::new(40.0, 40.0, 400.0, 200.0),
            Dimensions::new(400, 200),
        ),
    };

    let mut resizer = ImageResizer::attach(&mut doc, ResizerSettings::load_or_default());

    let image_center = doc.center_of(image);
    doc.click(&mut resizer, image_center);
    let handle = resizer
        .overlay()
        .and_then(|overlay| overlay.handle(HandleDirection::SouthEast))
        .map(|handle| handle.element)
        .context("Image did not activate")?;

    let start = doc.center_of(handle);
    doc.mouse_down(&mut resizer, start);
    for step in 1..=5 {
        let pointer = Point::new(start.x + 10.0 * step as f32, start.y + 4.0 * step as f32);
        doc.mouse_move(&mut resizer, pointer, Modifiers::shift());
    }
    doc.mouse_up(&mut resizer, Point::new(start.x + 50.0, start.y + 20.0));

    for call in &doc.editor().formats {
        tracing::info!(name = %call.name, value = %call.value, range = ?call.range, "Committed format");
    }
    if let Some(rect) = doc.bounding_rect(image) {
        tracing::info!(width = rect.width, height = rect.height, "Final image size");
    }

    doc.scroll_to(&mut resizer, Point::new(0.0, 30.0));
    doc.remove_element(image);
    doc.flush_mutations(&mut resizer);
    tracing::info!(active = resizer.is_active(), "After removing the image");

    resizer.destroy(&mut doc);
    tracing::info!(listeners = doc.listener_count(), "Resizer destroyed");
    Ok(())
}
