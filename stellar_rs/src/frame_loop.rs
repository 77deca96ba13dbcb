//! Self-rescheduling frame loop.
//!
//! One frame is requested only after the previous one completed, so the loop
//! never overlaps itself. The host's frame primitive (`requestAnimationFrame`
//! in the browser) sits behind [`FrameScheduler`].
//!
//! ```text
//! Idle --start--> Running --frame--> Running
//!                    |
//!                  stop
//!                    v
//!                 Stopped
//! ```

use crate::error::Result;

/// Opaque id of a pending frame request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

pub trait FrameScheduler {
    /// Ask the host to call back once on its next display refresh.
    fn request_frame(&mut self) -> Result<FrameHandle>;

    /// Drop a pending request. Unknown or already-fired handles are ignored.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running,
    /// Terminal. Reached on teardown or when the surface disappears.
    Stopped,
}

/// What happened to one frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Painted,
    /// Surface has no area; nothing painted, next frame still scheduled.
    Skipped,
    /// Loop is not running or the surface is gone; nothing rescheduled.
    Halted,
}

#[derive(Debug)]
pub struct AnimationLoop<S> {
    scheduler: S,
    state: LoopState,
    pending: Option<FrameHandle>,
    frames: u64,
}

impl<S: FrameScheduler> AnimationLoop<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            state: LoopState::Idle,
            pending: None,
            frames: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Frame callbacks handled while running.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Enter `Running` and request the first frame. A stopped loop stays
    /// stopped; a running loop with a pending request is left alone.
    pub fn start(&mut self) -> Result<()> {
        match self.state {
            LoopState::Stopped => {
                tracing::debug!("frame loop already stopped, not restarting");
                Ok(())
            }
            LoopState::Idle | LoopState::Running => {
                self.state = LoopState::Running;
                self.request_if_idle()
            }
        }
    }

    /// Cancel the pending request and request a fresh one.
    pub fn restart(&mut self) -> Result<()> {
        self.cancel_pending();
        self.start()
    }

    /// Called at the top of a frame callback. The request that fired is no
    /// longer pending. Returns whether the frame should be handled.
    pub fn begin_frame(&mut self) -> bool {
        self.pending = None;
        if self.state != LoopState::Running {
            return false;
        }
        self.frames += 1;
        true
    }

    /// Called once the frame is painted (or skipped) to chain the next one.
    pub fn schedule_next(&mut self) -> Result<()> {
        if self.state != LoopState::Running {
            return Ok(());
        }
        self.request_if_idle()
    }

    pub fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
    }

    pub fn stop(&mut self) {
        self.cancel_pending();
        if self.state != LoopState::Stopped {
            tracing::debug!(frames = self.frames, "frame loop stopped");
        }
        self.state = LoopState::Stopped;
    }

    fn request_if_idle(&mut self) -> Result<()> {
        if self.pending.is_none() {
            self.pending = Some(self.scheduler.request_frame()?);
        }
        Ok(())
    }
}

/// Scheduler that only records requests. Frames fire when the caller says so.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: i32,
    pending: Vec<FrameHandle>,
    cancelled: Vec<FrameHandle>,
    requested: usize,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests not yet cancelled or fired.
    pub fn pending(&self) -> &[FrameHandle] {
        &self.pending
    }

    pub fn cancelled(&self) -> &[FrameHandle] {
        &self.cancelled
    }

    /// Total requests ever made.
    pub fn requested(&self) -> usize {
        self.requested
    }

    /// Mark the oldest pending request as fired.
    pub fn fire(&mut self) -> Option<FrameHandle> {
        if self.pending.is_empty() {
            None
        } else {
            Some(self.pending.remove(0))
        }
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> Result<FrameHandle> {
        self.next_id += 1;
        self.requested += 1;
        let handle = FrameHandle(self.next_id);
        self.pending.push(handle);
        Ok(handle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Some(pos) = self.pending.iter().position(|h| *h == handle) {
            self.pending.remove(pos);
            self.cancelled.push(handle);
        }
    }
}
