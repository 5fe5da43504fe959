use glam::Vec2;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

use crate::dispatch::{PointerInput, SessionCommand};
use crate::timing::TicksPerFrame;
use crate::App;

thread_local! {
    pub static APP: RefCell<Option<App>> = RefCell::new(None);
}

fn with_app<R>(f: impl FnOnce(&mut App) -> R) -> Option<R> {
    APP.with(|app| app.borrow_mut().as_mut().map(f))
}

/// Animation-frame callback target.
pub(crate) fn on_animation_frame(now: f64) {
    with_app(|app| {
        app.session.dispatch(SessionCommand::Frame { now });
        app.publish_frame_stats();
    });
}

#[wasm_bindgen]
pub fn on_canvas_click(client_x: f32, client_y: f32, shift: bool, ctrl: bool, meta: bool, alt: bool) {
    with_app(|app| {
        let surface = app.session.surface();
        let input = PointerInput {
            position: Vec2::new(client_x, client_y),
            canvas: surface.bounding_rect(),
            backing: surface.backing_size(),
            modifiers: types::Modifiers { shift, ctrl, meta, alt },
        };
        app.session.dispatch(SessionCommand::Edit(input));
    });
}

#[wasm_bindgen]
pub fn play() {
    with_app(|app| app.session.dispatch(SessionCommand::Play));
}

#[wasm_bindgen]
pub fn pause() {
    with_app(|app| app.session.dispatch(SessionCommand::Pause));
}

/// Returns true if the animation is running afterwards.
#[wasm_bindgen]
pub fn toggle_play() -> bool {
    with_app(|app| {
        app.session.dispatch(SessionCommand::TogglePlay);
        !app.session.is_paused()
    })
    .unwrap_or(false)
}

#[wasm_bindgen]
pub fn is_paused() -> bool {
    with_app(|app| app.session.is_paused()).unwrap_or(true)
}

#[wasm_bindgen]
pub fn single_step() {
    with_app(|app| app.session.dispatch(SessionCommand::Step));
}

#[wasm_bindgen]
pub fn reset() {
    with_app(|app| app.session.dispatch(SessionCommand::Reset));
}

/// Accepts whatever the numeric input holds; NaN and values below 1 run one tick.
#[wasm_bindgen]
pub fn set_ticks_per_frame(raw: f64) {
    with_app(|app| {
        app.session
            .dispatch(SessionCommand::SetTicksPerFrame(TicksPerFrame::from_raw(raw)))
    });
}

#[wasm_bindgen]
pub fn ticks_per_frame() -> u32 {
    with_app(|app| app.session.ticks_per_frame().get()).unwrap_or(1)
}

#[wasm_bindgen]
pub fn frame_stats() -> String {
    with_app(|app| app.frame_stats_text()).unwrap_or_default()
}

#[wasm_bindgen]
pub fn population() -> u32 {
    with_app(|app| app.session.engine().population() as u32).unwrap_or(0)
}

/// Drop the session, cancelling any pending frame.
#[wasm_bindgen]
pub fn shutdown() {
    let app = APP.with(|app| app.borrow_mut().take());
    if app.is_some() {
        log::info!("session shut down");
    }
}
