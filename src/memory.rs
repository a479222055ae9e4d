//! In-memory reference host.
//!
//! [`MemoryDocument`] implements every host capability over a small element
//! tree shaped like a rich-text editor:
//!
//! ```text
//! body
//! └── container        (overlay parent)
//!     └── root         (editable root, also the scroll container)
//!         └── p ── img
//! ```
//!
//! It models just enough browser behavior to drive the resizer end to end:
//! bubbling dispatch with `stopPropagation`, document-level listeners,
//! queued child-list mutation records, scrolling, an R-tree hit test and a
//! layout where an image's rendered size follows its `width`/`height`
//! attributes. The editor half records selections and formats so tests can
//! tell live attribute writes apart from committed edits.

use crate::constants::{HEIGHT_ATTR, WIDTH_ATTR};
use crate::error::{ResizerError, ResizerResult};
use crate::host::{
    Binding, DocumentSurface, Editor, EventKind, InputSource, ListenerId, ListenerTarget,
    MutationKind, MutationRecord, MutationSource, WatchId,
};
use crate::resizer::ImageResizer;
use crate::session::parse_pixel_length;
use crate::spatial_index::SpatialIndex;
use crate::types::{
    Dimensions, DocumentRange, ElementId, ElementKind, InputEvent, Modifiers, MouseEvent, Point,
    Rect,
};
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::path::Path;

/// Default editor viewport
const DEFAULT_VIEWPORT: Rect = Rect::new(0.0, 0.0, 800.0, 600.0);

#[derive(Debug, Clone)]
struct Node {
    kind: ElementKind,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    attributes: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    /// Layout box, in content coordinates for scrolled elements
    rect: Rect,
    natural: Option<Dimensions>,
    /// Characters of text this node contributes to the content model
    text_len: usize,
    /// False for embeds the editor does not know about
    tracked: bool,
}

impl Node {
    fn new(kind: ElementKind, parent: Option<ElementId>, rect: Rect) -> Self {
        Self {
            kind,
            parent,
            children: Vec::new(),
            attributes: BTreeMap::new(),
            styles: BTreeMap::new(),
            rect,
            natural: None,
            text_len: 0,
            tracked: true,
        }
    }
}

/// A `format` call received by the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatCall {
    /// Selection the format applied to
    pub range: Option<DocumentRange>,
    pub name: String,
    pub value: String,
}

/// Editor-side state of the reference host.
#[derive(Debug, Clone)]
pub struct EditorModel {
    pub enabled: bool,
    pub focus_count: usize,
    pub selection: Option<DocumentRange>,
    pub formats: Vec<FormatCall>,
}

impl Default for EditorModel {
    fn default() -> Self {
        Self {
            enabled: true,
            focus_count: 0,
            selection: None,
            formats: Vec::new(),
        }
    }
}

/// Result of dispatching one event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// Number of listeners invoked
    pub delivered: usize,
    pub default_prevented: bool,
}

pub struct MemoryDocument {
    nodes: HashMap<ElementId, Node>,
    next_element: u64,
    body: ElementId,
    container: ElementId,
    root: ElementId,
    scroll: Point,
    listeners: BTreeMap<ListenerId, (ListenerTarget, Binding)>,
    next_listener: u64,
    watches: BTreeMap<WatchId, ElementId>,
    next_watch: u64,
    pending: VecDeque<MutationRecord>,
    editor: EditorModel,
    index: SpatialIndex,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    /// An empty editor filling the default viewport.
    pub fn new() -> Self {
        Self::with_viewport(DEFAULT_VIEWPORT)
    }

    pub fn with_viewport(viewport: Rect) -> Self {
        let mut doc = Self {
            nodes: HashMap::new(),
            next_element: 1,
            body: ElementId(0),
            container: ElementId(0),
            root: ElementId(0),
            scroll: Point::default(),
            listeners: BTreeMap::new(),
            next_listener: 1,
            watches: BTreeMap::new(),
            next_watch: 1,
            pending: VecDeque::new(),
            editor: EditorModel::default(),
            index: SpatialIndex::new(),
        };
        doc.body = doc.insert_node(None, ElementKind::Block("body".into()), viewport);
        doc.container = doc.insert_node(Some(doc.body), ElementKind::Block("div".into()), viewport);
        doc.root = doc.insert_node(Some(doc.container), ElementKind::Block("div".into()), viewport);
        doc
    }

    fn insert_node(&mut self, parent: Option<ElementId>, kind: ElementKind, rect: Rect) -> ElementId {
        let id = ElementId(self.next_element);
        self.next_element += 1;
        self.nodes.insert(id, Node::new(kind, parent, rect));
        if let Some(parent) = parent {
            if let Some(node) = self.nodes.get_mut(&parent) {
                node.children.push(id);
            }
            self.queue_child_list(parent);
        }
        id
    }

    fn queue_child_list(&mut self, parent: ElementId) {
        let records: Vec<MutationRecord> = self
            .watches
            .iter()
            .filter(|(_, node)| **node == parent)
            .map(|(watch, _)| MutationRecord {
                watch: *watch,
                kind: MutationKind::ChildList,
                target: parent,
            })
            .collect();
        self.pending.extend(records);
    }

    // ========================================================================
    // Building
    // ========================================================================

    pub fn body(&self) -> ElementId {
        self.body
    }

    /// The editable root
    pub fn root(&self) -> ElementId {
        self.root
    }

    /// Append a paragraph with `text` to the editable root.
    pub fn add_paragraph(&mut self, text: &str, rect: Rect) -> ElementId {
        let id = self.insert_node(Some(self.root), ElementKind::Block("p".into()), rect);
        if let Some(node) = self.nodes.get_mut(&id) {
            node.text_len = text.chars().count();
        }
        self.index.insert(id, rect);
        id
    }

    /// Append an image laid out at `rect` with the given intrinsic size.
    pub fn add_image(&mut self, parent: ElementId, rect: Rect, natural: Dimensions) -> ElementId {
        let id = self.insert_node(Some(parent), ElementKind::Image, rect);
        if let Some(node) = self.nodes.get_mut(&id) {
            node.natural = Some(natural);
        }
        self.index.insert(id, rect);
        id
    }

    /// Append an image whose intrinsic size is read from an image file.
    ///
    /// The image is laid out at its natural size with its top-left at `origin`.
    pub fn add_image_from_file(
        &mut self,
        parent: ElementId,
        path: &Path,
        origin: Point,
    ) -> ResizerResult<ElementId> {
        if !self.nodes.contains_key(&parent) {
            return Err(ResizerError::UnknownElement(parent));
        }
        let (width, height) = image::image_dimensions(path).map_err(|source| ResizerError::Image {
            path: path.to_path_buf(),
            source,
        })?;
        let rect = Rect::new(origin.x, origin.y, width as f32, height as f32);
        Ok(self.add_image(parent, rect, Dimensions::new(width, height)))
    }

    /// Forget the editor's record of an embed, so it no longer resolves to a range.
    pub fn untrack(&mut self, element: ElementId) {
        if let Some(node) = self.nodes.get_mut(&element) {
            node.tracked = false;
        }
    }

    /// Move an element's layout box.
    pub fn set_rect(&mut self, element: ElementId, rect: Rect) {
        if let Some(node) = self.nodes.get_mut(&element) {
            node.rect = rect;
            self.index.insert(element, rect);
        }
    }

    // ========================================================================
    // Inspection
    // ========================================================================

    pub fn editor(&self) -> &EditorModel {
        &self.editor
    }

    pub fn style(&self, element: ElementId, property: &str) -> Option<&str> {
        self.nodes
            .get(&element)
            .and_then(|n| n.styles.get(property))
            .map(String::as_str)
    }

    pub fn kind(&self, element: ElementId) -> Option<&ElementKind> {
        self.nodes.get(&element).map(|n| &n.kind)
    }

    pub fn children(&self, element: ElementId) -> &[ElementId] {
        self.nodes
            .get(&element)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Listeners registered at `target`.
    pub fn listeners_on(&self, target: ListenerTarget) -> usize {
        self.listeners.values().filter(|(t, _)| *t == target).count()
    }

    pub fn is_listening(&self, id: ListenerId) -> bool {
        self.listeners.contains_key(&id)
    }

    pub fn watch_count(&self) -> usize {
        self.watches.len()
    }

    pub fn is_watching(&self, watch: WatchId) -> bool {
        self.watches.contains_key(&watch)
    }

    pub fn pending_mutations(&self) -> usize {
        self.pending.len()
    }

    /// Attached overlay elements in the container.
    pub fn overlays(&self) -> Vec<ElementId> {
        self.children(self.container)
            .iter()
            .copied()
            .filter(|id| matches!(self.kind(*id), Some(ElementKind::Overlay)))
            .collect()
    }

    pub fn center_of(&self, element: ElementId) -> Point {
        let rect = self.bounding_rect(element).unwrap_or_default();
        Point::new(rect.left + rect.width / 2.0, rect.top + rect.height / 2.0)
    }

    // ========================================================================
    // Layout
    // ========================================================================

    fn depth(&self, element: ElementId) -> usize {
        let mut depth = 0;
        let mut current = self.nodes.get(&element).and_then(|n| n.parent);
        while let Some(id) = current {
            depth += 1;
            current = self.nodes.get(&id).and_then(|n| n.parent);
        }
        depth
    }

    fn is_scrolled(&self, element: ElementId) -> bool {
        element != self.root && self.contains(self.root, element)
    }

    fn style_px(&self, element: ElementId, property: &str) -> Option<f32> {
        self.style(element, property)
            .and_then(|v| v.strip_suffix("px"))
            .and_then(|v| v.parse().ok())
    }

    /// Client box of an absolutely positioned overlay, from its styles.
    fn overlay_rect(&self, overlay: ElementId) -> Rect {
        let container = self.nodes.get(&self.container).map(|n| n.rect).unwrap_or_default();
        Rect::new(
            container.left + self.style_px(overlay, "left").unwrap_or(0.0) - self.scroll.x,
            container.top + self.style_px(overlay, "top").unwrap_or(0.0) - self.scroll.y,
            self.style_px(overlay, "width").unwrap_or(0.0),
            self.style_px(overlay, "height").unwrap_or(0.0),
        )
    }

    /// Client box of a handle pinned to its overlay's corner edges.
    fn handle_rect(&self, handle: ElementId) -> Rect {
        let frame = self
            .nodes
            .get(&handle)
            .and_then(|n| n.parent)
            .map(|overlay| self.overlay_rect(overlay))
            .unwrap_or_default();
        let width = self.style_px(handle, "width").unwrap_or(0.0);
        let height = self.style_px(handle, "height").unwrap_or(0.0);

        let left = match (self.style_px(handle, "left"), self.style_px(handle, "right")) {
            (Some(left), _) => frame.left + left,
            (None, Some(right)) => frame.right() - width - right,
            (None, None) => frame.left,
        };
        let top = match (self.style_px(handle, "top"), self.style_px(handle, "bottom")) {
            (Some(top), _) => frame.top + top,
            (None, Some(bottom)) => frame.bottom() - height - bottom,
            (None, None) => frame.top,
        };
        Rect::new(left, top, width, height)
    }

    /// Topmost element under a client-space point.
    pub fn element_at(&self, point: Point) -> ElementId {
        for overlay in self.overlays().into_iter().rev() {
            for handle in self.children(overlay).iter().rev() {
                if self.handle_rect(*handle).contains(point) {
                    return *handle;
                }
            }
            if self.overlay_rect(overlay).contains(point) {
                return overlay;
            }
        }

        let content_point = Point::new(point.x + self.scroll.x, point.y + self.scroll.y);
        let hit = self
            .index
            .query_point(content_point)
            .into_iter()
            .filter(|id| self.is_attached(*id))
            .max_by_key(|id| (self.depth(*id), *id));
        if let Some(hit) = hit {
            return hit;
        }

        let root_rect = self.nodes.get(&self.root).map(|n| n.rect).unwrap_or_default();
        if root_rect.contains(point) {
            self.root
        } else {
            self.body
        }
    }

    // ========================================================================
    // Content Model
    // ========================================================================

    /// Walk the editable root in document order, counting content length.
    fn locate(&self, node: ElementId, target: ElementId, offset: &mut usize) -> Option<usize> {
        let data = self.nodes.get(&node)?;
        if node == target {
            return Some(*offset);
        }
        if data.kind.is_image() {
            *offset += 1;
            return None;
        }
        *offset += data.text_len;
        for child in &data.children {
            if let Some(found) = self.locate(*child, target, offset) {
                return Some(found);
            }
        }
        if matches!(&data.kind, ElementKind::Block(tag) if tag == "p") {
            // Paragraph break
            *offset += 1;
        }
        None
    }

    // ========================================================================
    // Dispatch
    // ========================================================================

    fn listeners_for(&self, target: ListenerTarget, kind: EventKind) -> Vec<(ListenerId, Binding)> {
        self.listeners
            .iter()
            .filter(|(_, (t, binding))| *t == target && binding.kind() == kind)
            .map(|(id, (_, binding))| (*id, *binding))
            .collect()
    }

    /// Propagation path for a mouse event: target up to body, then document.
    fn propagation_path(&self, target: ElementId, kind: EventKind) -> Vec<Vec<(ListenerId, Binding)>> {
        let mut levels = Vec::new();
        let mut current = Some(target);
        while let Some(id) = current {
            let mut level = self.listeners_for(ListenerTarget::Element(id), kind);
            if id == self.root {
                level.extend(self.listeners_for(ListenerTarget::Root, kind));
            }
            levels.push(level);
            current = self.nodes.get(&id).and_then(|n| n.parent);
        }
        levels.push(self.listeners_for(ListenerTarget::Document, kind));
        levels
    }

    fn dispatch(
        &mut self,
        resizer: &mut ImageResizer,
        levels: Vec<Vec<(ListenerId, Binding)>>,
        event: InputEvent,
    ) -> DispatchOutcome {
        let mut outcome = DispatchOutcome::default();
        for level in levels {
            let mut stopped = false;
            for (id, binding) in level {
                // Listeners removed by an earlier one in this dispatch do not fire
                if !self.listeners.contains_key(&id) {
                    continue;
                }
                let response = resizer.handle_event(self, binding, &event);
                outcome.delivered += 1;
                outcome.default_prevented |= response.prevent_default;
                stopped |= response.stop_propagation;
            }
            if stopped {
                break;
            }
        }
        outcome
    }

    /// Dispatch a mouse event of `kind` at the element under `position`.
    pub fn mouse(
        &mut self,
        resizer: &mut ImageResizer,
        kind: EventKind,
        position: Point,
        modifiers: Modifiers,
    ) -> DispatchOutcome {
        let target = self.element_at(position);
        let event = MouseEvent::new(target, position).with_modifiers(modifiers);
        let levels = self.propagation_path(target, kind);
        self.dispatch(resizer, levels, InputEvent::Mouse(event))
    }

    pub fn mouse_down(&mut self, resizer: &mut ImageResizer, position: Point) -> DispatchOutcome {
        self.mouse(resizer, EventKind::MouseDown, position, Modifiers::default())
    }

    pub fn mouse_move(
        &mut self,
        resizer: &mut ImageResizer,
        position: Point,
        modifiers: Modifiers,
    ) -> DispatchOutcome {
        self.mouse(resizer, EventKind::MouseMove, position, modifiers)
    }

    pub fn mouse_up(&mut self, resizer: &mut ImageResizer, position: Point) -> DispatchOutcome {
        self.mouse(resizer, EventKind::MouseUp, position, Modifiers::default())
    }

    /// Full press: mouse down, mouse up, click.
    pub fn click(&mut self, resizer: &mut ImageResizer, position: Point) {
        self.mouse_down(resizer, position);
        self.mouse_up(resizer, position);
        self.mouse(resizer, EventKind::Click, position, Modifiers::default());
    }

    /// Scroll the content and notify scroll listeners.
    pub fn scroll_to(&mut self, resizer: &mut ImageResizer, offset: Point) -> DispatchOutcome {
        self.scroll = offset;
        let level = self.listeners_for(ListenerTarget::ScrollContainer, EventKind::Scroll);
        self.dispatch(resizer, vec![level], InputEvent::Scroll)
    }

    /// Deliver queued mutation records to the resizer, like a microtask checkpoint.
    ///
    /// Returns the number of records delivered.
    pub fn flush_mutations(&mut self, resizer: &mut ImageResizer) -> usize {
        let mut delivered = 0;
        while let Some(record) = self.pending.pop_front() {
            if !self.watches.contains_key(&record.watch) {
                continue;
            }
            resizer.handle_mutation(self, &record);
            delivered += 1;
        }
        delivered
    }
}

// ============================================================================
// Host Capabilities
// ============================================================================

impl InputSource for MemoryDocument {
    fn listen(&mut self, target: ListenerTarget, binding: Binding) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.insert(id, (target, binding));
        id
    }

    fn unlisten(&mut self, id: ListenerId) {
        self.listeners.remove(&id);
    }
}

impl MutationSource for MemoryDocument {
    fn observe_children(&mut self, node: ElementId) -> WatchId {
        let id = WatchId(self.next_watch);
        self.next_watch += 1;
        self.watches.insert(id, node);
        id
    }

    fn disconnect(&mut self, watch: WatchId) {
        self.watches.remove(&watch);
        self.pending.retain(|record| record.watch != watch);
    }
}

impl DocumentSurface for MemoryDocument {
    fn container(&self) -> ElementId {
        self.container
    }

    fn scroll_offset(&self) -> Point {
        self.scroll
    }

    fn bounding_rect(&self, element: ElementId) -> Option<Rect> {
        let node = self.nodes.get(&element)?;
        let rect = match node.kind {
            ElementKind::Overlay => self.overlay_rect(element),
            ElementKind::Handle(_) => self.handle_rect(element),
            _ if self.is_scrolled(element) => Rect::new(
                node.rect.left - self.scroll.x,
                node.rect.top - self.scroll.y,
                node.rect.width,
                node.rect.height,
            ),
            _ => node.rect,
        };
        Some(rect)
    }

    fn is_attached(&self, element: ElementId) -> bool {
        self.contains(self.body, element)
    }

    fn contains(&self, ancestor: ElementId, element: ElementId) -> bool {
        let mut current = Some(element);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.nodes.get(&id).and_then(|n| n.parent);
        }
        false
    }

    fn parent(&self, element: ElementId) -> Option<ElementId> {
        self.nodes.get(&element).and_then(|n| n.parent)
    }

    fn is_image(&self, element: ElementId) -> bool {
        self.nodes.get(&element).is_some_and(|n| n.kind.is_image())
    }

    fn natural_size(&self, image: ElementId) -> Option<Dimensions> {
        self.nodes.get(&image).and_then(|n| n.natural)
    }

    fn attribute(&self, element: ElementId, name: &str) -> Option<String> {
        self.nodes
            .get(&element)
            .and_then(|n| n.attributes.get(name))
            .cloned()
    }

    fn set_attribute(&mut self, element: ElementId, name: &str, value: &str) {
        let Some(node) = self.nodes.get_mut(&element) else {
            return;
        };
        node.attributes.insert(name.to_string(), value.to_string());

        // Images lay out at their attribute size
        if node.kind.is_image() {
            if let Some(px) = parse_pixel_length(value) {
                match name {
                    WIDTH_ATTR => node.rect.width = px as f32,
                    HEIGHT_ATTR => node.rect.height = px as f32,
                    _ => return,
                }
                let rect = node.rect;
                self.index.insert(element, rect);
            }
        }
    }

    fn create_element(&mut self, parent: ElementId, kind: ElementKind) -> ElementId {
        self.insert_node(Some(parent), kind, Rect::default())
    }

    fn remove_element(&mut self, element: ElementId) {
        let Some(parent) = self.nodes.get(&element).and_then(|n| n.parent) else {
            return;
        };
        if let Some(node) = self.nodes.get_mut(&parent) {
            node.children.retain(|c| *c != element);
        }
        if let Some(node) = self.nodes.get_mut(&element) {
            node.parent = None;
        }

        let mut stack = vec![element];
        while let Some(id) = stack.pop() {
            self.index.remove(id);
            stack.extend(self.children(id).iter().copied());
        }
        self.queue_child_list(parent);
    }

    fn set_style(&mut self, element: ElementId, property: &str, value: &str) {
        if let Some(node) = self.nodes.get_mut(&element) {
            node.styles.insert(property.to_string(), value.to_string());
        }
    }
}

impl Editor for MemoryDocument {
    fn enable(&mut self) {
        self.editor.enabled = true;
    }

    fn disable(&mut self) {
        self.editor.enabled = false;
    }

    fn focus(&mut self) {
        self.editor.focus_count += 1;
    }

    fn find_range(&self, element: ElementId) -> Option<DocumentRange> {
        let node = self.nodes.get(&element)?;
        if !node.tracked || !self.contains(self.root, element) || element == self.root {
            return None;
        }
        let mut offset = 0;
        let index = self.locate(self.root, element, &mut offset)?;
        let length = if node.kind.is_image() { 1 } else { node.text_len };
        Some(DocumentRange::new(index, length))
    }

    fn set_selection(&mut self, range: DocumentRange) {
        self.editor.selection = Some(range);
    }

    fn format(&mut self, name: &str, value: &str) {
        self.editor.formats.push(FormatCall {
            range: self.editor.selection,
            name: name.to_string(),
            value: value.to_string(),
        });
    }
}
