//! One mounted hero: context, starfield, parallax controller and frame loop
//! under a single owner.
//!
//! The host feeds it events in arrival order (`frame`, `resize`,
//! `pointer_move`, `teardown`); nothing here blocks or runs concurrently.

use rand::rngs::StdRng;

use crate::config::HeroConfig;
use crate::context::{HeroContext, PointerPosition, SurfaceSize};
use crate::error::Result;
use crate::frame_loop::{AnimationLoop, FrameOutcome, FrameScheduler, LoopState};
use crate::paint::Painter;
use crate::parallax::{ContainerRect, ParallaxController, TransformSink};
use crate::starfield::Starfield;

pub struct HeroScene<S> {
    context: HeroContext,
    starfield: Starfield,
    parallax: ParallaxController,
    frames: AnimationLoop<S>,
    rng: StdRng,
}

impl<S: FrameScheduler> HeroScene<S> {
    /// Build a scene from `config`. Fails with `InvalidConfig` before any
    /// state exists if the config would not render.
    pub fn new(config: HeroConfig, scheduler: S, rng: StdRng) -> Result<Self> {
        config.validate()?;
        let parallax = ParallaxController::new(config.parallax);
        Ok(Self {
            context: HeroContext::default(),
            starfield: Starfield::new(config),
            parallax,
            frames: AnimationLoop::new(scheduler),
            rng,
        })
    }

    /// Register a decorative element that follows the pointer.
    pub fn register_element(&mut self, name: impl Into<String>, depth: f64) {
        self.parallax.register(name, depth);
    }

    /// Generate stars for `size` and start the loop (Idle -> Running).
    pub fn mount(&mut self, size: SurfaceSize) -> Result<()> {
        self.context.surface = size;
        self.starfield.initialize(size, &mut self.rng);
        self.frames.start()
    }

    /// Handle one frame callback.
    ///
    /// `painter` is `None` when the host surface is gone: the loop stops and
    /// nothing is rescheduled. An empty surface skips painting but keeps the
    /// loop alive.
    pub fn frame(&mut self, time_ms: f64, painter: Option<&mut dyn Painter>) -> FrameOutcome {
        if !self.frames.begin_frame() {
            return FrameOutcome::Halted;
        }

        let Some(painter) = painter else {
            tracing::warn!("drawing surface gone, stopping frame loop");
            self.frames.stop();
            return FrameOutcome::Halted;
        };

        let outcome = self
            .starfield
            .render_frame(time_ms, self.context.pointer, painter);
        tracing::trace!(time_ms, ?outcome, "frame");

        if let Err(e) = self.frames.schedule_next() {
            tracing::warn!("could not schedule next frame, stopping: {}", e);
            self.frames.stop();
            return FrameOutcome::Halted;
        }
        outcome
    }

    /// New surface size: cancel the pending frame, regenerate every star,
    /// restart the loop.
    pub fn resize(&mut self, size: SurfaceSize) -> Result<()> {
        if self.frames.state() == LoopState::Stopped {
            return Ok(());
        }
        self.context.surface = size;
        self.frames.cancel_pending();
        self.starfield.initialize(size, &mut self.rng);
        self.frames.restart()
    }

    /// Record the pointer and push transforms for every registered element.
    pub fn pointer_move(
        &mut self,
        pointer: PointerPosition,
        container: ContainerRect,
        sink: &mut dyn TransformSink,
    ) {
        self.parallax
            .on_pointer_move(&mut self.context, pointer, container, sink);
    }

    /// Cancel the pending frame and stop for good (Running -> Stopped).
    pub fn teardown(&mut self) {
        self.frames.stop();
    }

    pub fn context(&self) -> &HeroContext {
        &self.context
    }

    pub fn starfield(&self) -> &Starfield {
        &self.starfield
    }

    pub fn parallax(&self) -> &ParallaxController {
        &self.parallax
    }

    pub fn state(&self) -> LoopState {
        self.frames.state()
    }

    pub fn scheduler(&self) -> &S {
        self.frames.scheduler()
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        self.frames.scheduler_mut()
    }
}
