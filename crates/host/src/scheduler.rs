use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::controller::FrameScheduler;
use crate::error::HostError;

/// `requestAnimationFrame` with one long-lived callback.
pub struct AnimationFrameScheduler {
    window: Window,
    callback: Closure<dyn FnMut(f64)>,
}

impl AnimationFrameScheduler {
    pub fn new(window: Window, on_frame: impl FnMut(f64) + 'static) -> Self {
        let callback = Closure::wrap(Box::new(on_frame) as Box<dyn FnMut(f64)>);
        Self { window, callback }
    }
}

impl FrameScheduler for AnimationFrameScheduler {
    type Handle = i32;

    fn request_frame(&mut self) -> Result<i32, HostError> {
        Ok(self
            .window
            .request_animation_frame(self.callback.as_ref().unchecked_ref())?)
    }

    fn cancel_frame(&mut self, handle: i32) {
        if let Err(err) = self.window.cancel_animation_frame(handle) {
            log::warn!("cancelAnimationFrame({handle}) failed: {}", HostError::from(err));
        }
    }
}
