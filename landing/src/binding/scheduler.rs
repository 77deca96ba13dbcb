//! `FrameScheduler` over `requestAnimationFrame`.

use std::cell::RefCell;
use std::rc::Rc;

use stellar::{FrameHandle, FrameScheduler, HeroError};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

/// The frame closure. Filled once the scene it drives exists, emptied on
/// teardown to break the closure <-> scene cycle.
pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

pub struct RafScheduler {
    window: Window,
    callback: FrameCallback,
}

impl RafScheduler {
    pub fn new(window: Window, callback: FrameCallback) -> Self {
        Self { window, callback }
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> stellar::Result<FrameHandle> {
        let callback = self.callback.borrow();
        let Some(callback) = callback.as_ref() else {
            return Err(HeroError::Scheduler("frame callback released".to_string()));
        };
        self.window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map(FrameHandle)
            .map_err(|e| HeroError::Scheduler(format!("{e:?}")))
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Err(e) = self.window.cancel_animation_frame(handle.0) {
            tracing::trace!(handle = handle.0, "cancel_animation_frame failed: {:?}", e);
        }
    }
}
