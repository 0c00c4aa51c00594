//! Leptos DragDrop Utilities
//!
//! Free-positioning drag for Leptos using mouse events.
//! The state machine and clamping math are plain Rust; the `bind_*` and
//! `make_*` helpers wire them to DOM listeners.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Elements inside a draggable item that must keep their own mouse behaviour
const NO_DRAG_SELECTOR: &str = "textarea, button, input";

// ========================
// Geometry
// ========================

/// A point in CSS pixels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A width/height pair in CSS pixels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Scroll state of the canvas, sampled on every move
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CanvasScroll {
    /// `scrollLeft` / `scrollTop`
    pub offset: Point,
    /// `scrollWidth` / `scrollHeight`
    pub extent: Size,
}

/// Clamp one axis into `[0, extent - size]`.
///
/// When the extent is smaller than the item the lower bound wins.
pub fn clamp_axis(value: f64, extent: f64, size: f64) -> f64 {
    value.min(extent - size).max(0.0)
}

// ========================
// State Machine
// ========================

/// Data captured when a drag starts
#[derive(Clone, Debug, PartialEq)]
pub struct DragSession<K> {
    pub key: K,
    /// Pointer position relative to the item's top-left corner
    pub grab_offset: Point,
    /// Canvas bounding rectangle origin at drag start (client coordinates)
    pub canvas_origin: Point,
    pub item_size: Size,
}

impl<K> DragSession<K> {
    pub fn begin(key: K, pointer: Point, item_origin: Point, canvas_origin: Point, item_size: Size) -> Self {
        Self {
            key,
            grab_offset: Point::new(pointer.x - item_origin.x, pointer.y - item_origin.y),
            canvas_origin,
            item_size,
        }
    }

    /// Clamped item position within the canvas for a pointer position
    pub fn position_for(&self, pointer: Point, scroll: &CanvasScroll) -> Point {
        let left = pointer.x - self.canvas_origin.x - self.grab_offset.x + scroll.offset.x;
        let top = pointer.y - self.canvas_origin.y - self.grab_offset.y + scroll.offset.y;
        Point::new(
            clamp_axis(left, scroll.extent.width, self.item_size.width),
            clamp_axis(top, scroll.extent.height, self.item_size.height),
        )
    }
}

/// Idle / Dragging
#[derive(Clone, Debug, PartialEq)]
pub enum DragState<K> {
    Idle,
    Dragging(DragSession<K>),
}

impl<K> Default for DragState<K> {
    fn default() -> Self {
        DragState::Idle
    }
}

impl<K> DragState<K> {
    /// Enter Dragging, replacing any previous session
    pub fn start(&mut self, session: DragSession<K>) {
        *self = DragState::Dragging(session);
    }

    /// New position for the dragged item, or None when idle
    pub fn pointer_moved(&self, pointer: Point, scroll: &CanvasScroll) -> Option<(&K, Point)> {
        match self {
            DragState::Idle => None,
            DragState::Dragging(session) => Some((&session.key, session.position_for(pointer, scroll))),
        }
    }

    /// Return to Idle, yielding the key that was being dragged
    pub fn release(&mut self) -> Option<K> {
        match std::mem::take(self) {
            DragState::Idle => None,
            DragState::Dragging(session) => Some(session.key),
        }
    }

    pub fn active_key(&self) -> Option<&K> {
        match self {
            DragState::Idle => None,
            DragState::Dragging(session) => Some(&session.key),
        }
    }

    pub fn is_dragging(&self, key: &K) -> bool
    where
        K: PartialEq,
    {
        self.active_key() == Some(key)
    }
}

// ========================
// Leptos Bindings
// ========================

/// Drag state signals
pub struct DragSignals<K: Send + Sync + 'static> {
    pub state_read: ReadSignal<DragState<K>>,
    pub state_write: WriteSignal<DragState<K>>,
}

impl<K: Send + Sync + 'static> Clone for DragSignals<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: Send + Sync + 'static> Copy for DragSignals<K> {}

impl<K: PartialEq + Send + Sync + 'static> DragSignals<K> {
    /// Reactive check used for the `dragging` class
    pub fn is_dragging(&self, key: &K) -> bool {
        self.state_read.with(|state| state.is_dragging(key))
    }
}

pub fn create_drag_signals<K: Send + Sync + 'static>() -> DragSignals<K> {
    let (state_read, state_write) = signal(DragState::Idle);
    DragSignals { state_read, state_write }
}

fn pointer_of(ev: &web_sys::MouseEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

fn scroll_of(canvas: &web_sys::HtmlDivElement) -> CanvasScroll {
    CanvasScroll {
        offset: Point::new(f64::from(canvas.scroll_left()), f64::from(canvas.scroll_top())),
        extent: Size::new(f64::from(canvas.scroll_width()), f64::from(canvas.scroll_height())),
    }
}

/// Create mousedown handler for a draggable item.
///
/// Starts a session unless the press lands on a form control inside the item,
/// then calls `on_start` with the item key.
pub fn make_on_mousedown<K, F>(
    drag: DragSignals<K>,
    key: K,
    item_size: Size,
    canvas: NodeRef<leptos::html::Div>,
    on_start: F,
) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    K: Clone + Send + Sync + 'static,
    F: Fn(K) + Clone + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        if let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) {
            if matches!(target.closest(NO_DRAG_SELECTOR), Ok(Some(_))) {
                return;
            }
        }
        let Some(item) = ev.current_target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
            return;
        };
        let Some(canvas_el) = canvas.get_untracked() else {
            return;
        };
        ev.prevent_default();

        let item_rect = item.get_bounding_client_rect();
        let canvas_rect = canvas_el.get_bounding_client_rect();
        let session = DragSession::begin(
            key.clone(),
            pointer_of(&ev),
            Point::new(item_rect.left(), item_rect.top()),
            Point::new(canvas_rect.left(), canvas_rect.top()),
            item_size,
        );
        drag.state_write.update(|state| state.start(session));
        on_start(key.clone());
    }
}

/// Bind document mousemove/mouseup handlers for the whole drag lifecycle.
///
/// `on_move` receives every clamped position; mouseup anywhere ends the drag.
pub fn bind_global_drag<K, F>(drag: DragSignals<K>, canvas: NodeRef<leptos::html::Div>, on_move: F)
where
    K: Clone + Send + Sync + 'static,
    F: Fn(K, Point) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let Some(canvas_el) = canvas.get_untracked() else {
            return;
        };
        let pointer = pointer_of(&ev);
        let scroll = scroll_of(&canvas_el);
        let moved = drag.state_read.with_untracked(|state| {
            state.pointer_moved(pointer, &scroll).map(|(key, pos)| (key.clone(), pos))
        });
        if let Some((key, pos)) = moved {
            on_move(key, pos);
        }
    });

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        if drag.state_read.with_untracked(|state| state.active_key().is_some()) {
            drag.state_write.update(|state| {
                state.release();
            });
            log::debug!("[DRAG] released");
        }
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
    }
    // Listeners live as long as the page
    on_mousemove.forget();
    on_mouseup.forget();
}
