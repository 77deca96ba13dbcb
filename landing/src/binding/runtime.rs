//! Wires a `HeroScene` to the page: canvas, animation frames, pointer and
//! resize listeners, planet elements.
//!
//! Everything runs on the browser's event loop. The scene sits in an
//! `Rc<RefCell<_>>` shared by the frame closure and the listeners; callbacks
//! arrive one at a time so borrows never overlap.

use std::cell::RefCell;
use std::rc::Rc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use stellar::{
    ContainerRect, HeroConfig, HeroError, HeroScene, Painter, PointerPosition, SurfaceSize,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    CanvasRenderingContext2d, Element, Event, EventTarget, HtmlCanvasElement, MouseEvent, Window,
};

use super::canvas::CanvasPainter;
use super::planets::{self, DomTransformSink};
use super::scheduler::{FrameCallback, RafScheduler};

type SharedScene = Rc<RefCell<HeroScene<RafScheduler>>>;

/// An attached DOM listener, detached again on drop.
struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn attach(
        target: &EventTarget,
        event: &'static str,
        callback: Closure<dyn FnMut(Event)>,
    ) -> Result<Self, JsValue> {
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            tracing::trace!(event = self.event, "listener removal failed: {:?}", e);
        }
    }
}

/// A running hero. Dropping it cancels the pending frame and removes every
/// listener.
pub struct HeroRuntime {
    scene: SharedScene,
    frame_callback: FrameCallback,
    listeners: Vec<Listener>,
}

impl HeroRuntime {
    /// Size `canvas` to the viewport, register the planets found under
    /// `container` and start the frame loop.
    pub fn mount(
        canvas: HtmlCanvasElement,
        container: Element,
        config: HeroConfig,
    ) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str(&HeroError::SurfaceUnavailable.to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let planets = Rc::new(planets::discover(&container)?);
        let frame_callback: FrameCallback = Rc::new(RefCell::new(None));

        let mut scene = HeroScene::new(
            config,
            RafScheduler::new(window.clone(), frame_callback.clone()),
            StdRng::seed_from_u64(entropy_seed()),
        )
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
        for planet in planets.iter() {
            scene.register_element(planet.name.clone(), planet.depth);
        }
        let scene: SharedScene = Rc::new(RefCell::new(scene));

        {
            let scene = scene.clone();
            let canvas = canvas.clone();
            *frame_callback.borrow_mut() = Some(Closure::wrap(Box::new(move |time: f64| {
                let mut painter = canvas.is_connected().then(|| CanvasPainter::new(&ctx));
                scene
                    .borrow_mut()
                    .frame(time, painter.as_mut().map(|p| p as &mut dyn Painter));
            }) as Box<dyn FnMut(f64)>));
        }

        let pointer_callback = {
            let scene = scene.clone();
            let container = container.clone();
            let planets = planets.clone();
            Closure::wrap(Box::new(move |event: Event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let pointer = PointerPosition::new(event.client_x() as f64, event.client_y() as f64);
                let rect = container.get_bounding_client_rect();
                let rect = ContainerRect::new(rect.left(), rect.top(), rect.width(), rect.height());
                let mut sink = DomTransformSink::new(&planets);
                scene.borrow_mut().pointer_move(pointer, rect, &mut sink);
            }) as Box<dyn FnMut(Event)>)
        };

        let target: &EventTarget = window.as_ref();
        let listeners = vec![
            Listener::attach(target, "pointermove", pointer_callback)?,
            Listener::attach(target, "resize", resize_callback(&window, &canvas, &scene))?,
            Listener::attach(
                target,
                "orientationchange",
                resize_callback(&window, &canvas, &scene),
            )?,
        ];

        let size = fit_canvas(&window, &canvas);
        scene
            .borrow_mut()
            .mount(size)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        tracing::info!(
            width = size.width,
            height = size.height,
            planets = planets.len(),
            "hero mounted"
        );

        Ok(Self {
            scene,
            frame_callback,
            listeners,
        })
    }
}

impl Drop for HeroRuntime {
    fn drop(&mut self) {
        self.listeners.clear();
        match self.scene.try_borrow_mut() {
            Ok(mut scene) => scene.teardown(),
            Err(_) => tracing::warn!("hero scene busy during teardown"),
        }
        let callback = self.frame_callback.borrow_mut().take();
        drop(callback);
        tracing::debug!("hero torn down");
    }
}

fn resize_callback(
    window: &Window,
    canvas: &HtmlCanvasElement,
    scene: &SharedScene,
) -> Closure<dyn FnMut(Event)> {
    let window = window.clone();
    let canvas = canvas.clone();
    let scene = scene.clone();
    Closure::wrap(Box::new(move |_event: Event| {
        let size = fit_canvas(&window, &canvas);
        if let Err(e) = scene.borrow_mut().resize(size) {
            tracing::warn!("resize failed: {}", e);
        }
    }) as Box<dyn FnMut(Event)>)
}

/// Match the canvas backing store to the viewport and return the new size.
fn fit_canvas(window: &Window, canvas: &HtmlCanvasElement) -> SurfaceSize {
    let dimension = |value: Result<JsValue, JsValue>| {
        value
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0)
            .max(0.0)
            .floor()
    };
    let size = SurfaceSize::new(dimension(window.inner_width()), dimension(window.inner_height()));
    canvas.set_width(size.width as u32);
    canvas.set_height(size.height as u32);
    size
}

/// Runtime randomness for star placement; no reproducibility across loads.
fn entropy_seed() -> u64 {
    let random = (js_sys::Math::random() * u64::MAX as f64) as u64;
    random ^ js_sys::Date::now().to_bits()
}
