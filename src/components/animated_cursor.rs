use dioxus::prelude::*;

/// Pointer position and button state, updated by the root shell's mouse
/// handlers. One writer, read only by the cursor overlay.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    pub x: f64,
    pub y: f64,
    pub pressed: bool,
}

/// Custom cursor: a dot that tracks the pointer and a trailing ring that
/// shrinks while the button is held. Pure decoration, no hit testing.
#[component]
pub fn AnimatedCursor() -> Element {
    let pointer = use_context::<Signal<PointerState>>();
    let state = *pointer.read();

    let dot_scale = if state.pressed { 0.8 } else { 1.0 };
    let ring_scale = if state.pressed { 1.5 } else { 1.0 };
    let (dot_x, dot_y) = (state.x - 4.0, state.y - 4.0);
    let (ring_x, ring_y) = (state.x - 16.0, state.y - 16.0);

    rsx! {
        div {
            class: "cursor-dot fixed top-0 left-0 w-2 h-2 bg-emerald-400 rounded-full pointer-events-none z-[9999]",
            style: "transform: translate({dot_x}px, {dot_y}px) scale({dot_scale});",
        }
        div {
            class: "cursor-ring fixed top-0 left-0 w-8 h-8 border-2 border-emerald-400/50 rounded-full pointer-events-none z-[9998]",
            style: "transform: translate({ring_x}px, {ring_y}px) scale({ring_scale});",
        }
    }
}
