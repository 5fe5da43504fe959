pub mod bridge;
pub mod canvas;
pub mod controller;
pub mod dispatch;
pub mod error;
pub mod logger;
pub mod scheduler;
pub mod timing;

pub use controller::{AnimationState, FrameScheduler, Session};
pub use dispatch::{PointerInput, SessionCommand};
pub use error::HostError;
pub use timing::{FrameSnapshot, FrameStats, TicksPerFrame};

use canvas::CanvasSurface;
use renderer::CellLayout;
use scheduler::AnimationFrameScheduler;
use sim_core::{SimulationEngine, Universe};
use types::{InitialPattern, InitialState, SessionParams, UniverseParams};
use wasm_bindgen::prelude::*;

pub type BrowserSession = Session<Universe, AnimationFrameScheduler, CanvasSurface>;

pub struct App {
    pub session: BrowserSession,
    pub fps_element: Option<web_sys::Element>,
}

impl App {
    fn frame_stats_text(&self) -> String {
        self.session
            .frame_stats()
            .snapshot()
            .map(|snap| snap.to_string())
            .unwrap_or_default()
    }

    fn publish_frame_stats(&self) {
        if let Some(el) = &self.fps_element {
            el.set_text_content(Some(&self.frame_stats_text()));
        }
    }
}

/// Set up a session on the canvas with id `canvas_id`.
///
/// `fps_id` optionally names an element that receives the frame-rate
/// read-out. `pattern` is one of "empty", "checkered", "glider" or
/// "random" (the default). With `autoplay` false the session waits for
/// `play()`.
#[wasm_bindgen]
pub fn init(
    canvas_id: &str,
    fps_id: Option<String>,
    pattern: Option<String>,
    autoplay: bool,
) -> Result<(), JsValue> {
    logger::init(log::LevelFilter::Info);

    let window = web_sys::window().ok_or(HostError::NoWindow)?;
    let document = window.document().ok_or(HostError::NoDocument)?;
    let surface = CanvasSurface::from_element_id(&document, canvas_id)?;

    let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
    let pattern = initial_pattern(pattern.as_deref(), seed)?;
    let universe = Universe::new(&UniverseParams { pattern, ..Default::default() }).map_err(HostError::from)?;

    let params = SessionParams {
        initial_state: if autoplay { InitialState::Running } else { InitialState::Paused },
        ..Default::default()
    };

    // Size the canvas before the first paint; resizing clears it.
    let layout = CellLayout::new(universe.size(), params.cell_size, params.cell_border);
    surface.resize(layout.canvas_size());

    let fps_element = fps_id.and_then(|id| {
        let el = document.get_element_by_id(&id);
        if el.is_none() {
            log::warn!("no element with id '{id}' for frame stats");
        }
        el
    });

    // Drop any previous session first so its pending frame is cancelled.
    bridge::APP.with(|cell| cell.borrow_mut().take());

    let scheduler = AnimationFrameScheduler::new(window, bridge::on_animation_frame);
    let session = Session::new(universe, scheduler, surface, &params);

    bridge::APP.with(|cell| {
        *cell.borrow_mut() = Some(App { session, fps_element });
    });

    log::info!("life canvas initialized");
    Ok(())
}

fn initial_pattern(name: Option<&str>, seed: u64) -> Result<InitialPattern, HostError> {
    match name {
        None => Ok(InitialPattern::Random(seed)),
        Some(name) => InitialPattern::from_name(name, seed).ok_or_else(|| HostError::UnknownPattern(name.to_owned())),
    }
}
