use crate::surface::Surface;
use thiserror::Error;

pub trait FrameScheduler {
    type Token: Copy + std::fmt::Debug;

    // None: the host refused the registration
    fn request_frame(&mut self) -> Option<Self::Token>;
    fn cancel_frame(&mut self, token: Self::Token);
}

pub trait Animation<S: Surface> {
    fn frame(&mut self, surface: &mut S, now_ms: f64);
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoopError {
    #[error("frame loop is already running")]
    AlreadyRunning,
    #[error("frame loop has been torn down")]
    Detached,
    #[error("host refused to schedule a frame")]
    Refused,
}

pub struct FrameLoop<A, S, F: FrameScheduler> {
    animation: A,
    surface: Option<S>,
    scheduler: F,
    pending: Option<F::Token>,
    frames: u64,
}

impl<A, S, F> FrameLoop<A, S, F>
where
    A: Animation<S>,
    S: Surface,
    F: FrameScheduler,
{
    pub fn new(animation: A, surface: S, scheduler: F) -> Self {
        Self {
            animation,
            surface: Some(surface),
            scheduler,
            pending: None,
            frames: 0,
        }
    }

    pub fn start(&mut self) -> Result<(), LoopError> {
        if self.surface.is_none() {
            return Err(LoopError::Detached);
        }
        if self.pending.is_some() {
            return Err(LoopError::AlreadyRunning);
        }
        self.pending = self.scheduler.request_frame();
        if self.pending.is_none() {
            return Err(LoopError::Refused);
        }
        Ok(())
    }

    pub fn tick(&mut self, now_ms: f64) {
        self.pending = None;
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        self.animation.frame(surface, now_ms);
        self.frames += 1;
        self.pending = self.scheduler.request_frame();
        if self.pending.is_none() {
            log::warn!("frame request refused after {} frames; loop stopped", self.frames);
        }
    }

    /// Cancels before releasing the surface, so a stale tick draws nothing.
    pub fn stop(&mut self) -> Option<S> {
        if let Some(token) = self.pending.take() {
            self.scheduler.cancel_frame(token);
        }
        self.surface.take()
    }

    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_detached(&self) -> bool {
        self.surface.is_none()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn animation(&self) -> &A {
        &self.animation
    }

    pub fn animation_mut(&mut self) -> &mut A {
        &mut self.animation
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }
}
