//! Cancellable animation loop.
//!
//! The host calls [`FrameLoop::step`] from its refresh callback and only asks
//! for another frame when the step returns `Continue`. Cancelling the token
//! stops the loop at the next step even if a frame was already requested.

use std::cell::Cell;
use std::ops::ControlFlow;
use std::rc::Rc;

use super::types::FrameHandle;

/// Shared stop flag for a [`FrameLoop`].
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
	/// Stop every loop sharing this token.
	pub fn cancel(&self) {
		self.0.set(true);
	}

	/// Whether [`CancelToken::cancel`] was called.
	pub fn is_cancelled(&self) -> bool {
		self.0.get()
	}
}

/// Frame counter and pending-request bookkeeping for one banner.
#[derive(Debug, Default)]
pub struct FrameLoop {
	token: CancelToken,
	pending: Option<FrameHandle>,
	frames: u64,
}

impl FrameLoop {
	/// Loop that has not run yet.
	pub fn new() -> Self {
		Self::default()
	}

	/// Handle that cancels this loop from outside.
	pub fn token(&self) -> CancelToken {
		self.token.clone()
	}

	/// Run one iteration unless cancelled.
	pub fn step(&mut self, frame: impl FnOnce()) -> ControlFlow<()> {
		self.pending = None;
		if self.token.is_cancelled() {
			return ControlFlow::Break(());
		}
		frame();
		self.frames += 1;
		ControlFlow::Continue(())
	}

	/// Remember the host's id for the next requested frame.
	pub fn frame_requested(&mut self, handle: FrameHandle) {
		self.pending = Some(handle);
	}

	/// Stop the loop. Returns the outstanding request, if any, so the host
	/// can cancel it.
	pub fn cancel(&mut self) -> Option<FrameHandle> {
		self.token.cancel();
		self.pending.take()
	}

	/// Whether the loop has stopped.
	pub fn is_cancelled(&self) -> bool {
		self.token.is_cancelled()
	}

	/// Frames run so far.
	pub fn frames(&self) -> u64 {
		self.frames
	}
}
