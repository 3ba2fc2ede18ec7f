//! Frame loop lifecycle
//!
//! A self-rescheduling frame callback chain. The browser driver asks this
//! state what to do at each step; the state guarantees a scheduled frame is
//! either run (and possibly rescheduled) or cancelled, never both, and that
//! nothing runs once the loop has stopped.

/// Where the loop is between frames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopPhase {
    /// Mounted, nothing scheduled yet
    #[default]
    Idle,
    /// A frame request is outstanding
    Pending { handle: i32 },
    /// Inside a frame callback
    Running,
    /// Unmounted; terminal
    Stopped,
}

/// Frame loop state
#[derive(Debug, Default)]
pub struct FrameLoop {
    phase: LoopPhase,
    frames: u64,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> LoopPhase {
        self.phase
    }

    /// Frames run so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn is_stopped(&self) -> bool {
        self.phase == LoopPhase::Stopped
    }

    /// Whether a new frame may be requested right now
    pub fn can_schedule(&self) -> bool {
        matches!(self.phase, LoopPhase::Idle | LoopPhase::Running)
    }

    /// Record an outstanding frame request.
    ///
    /// Returns false if the request should not have been made (already
    /// pending or stopped); the caller must cancel `handle` in that case.
    pub fn scheduled(&mut self, handle: i32) -> bool {
        if !self.can_schedule() {
            return false;
        }
        self.phase = LoopPhase::Pending { handle };
        true
    }

    /// Called at the top of a frame callback. Returns false if the frame
    /// must be skipped (the loop stopped while the frame was in flight).
    pub fn begin_frame(&mut self) -> bool {
        match self.phase {
            LoopPhase::Pending { .. } => {
                self.phase = LoopPhase::Running;
                self.frames += 1;
                true
            }
            _ => false,
        }
    }

    /// Stop the loop. Returns the outstanding request to cancel, if any.
    /// Idempotent.
    pub fn stop(&mut self) -> Option<i32> {
        let pending = match self.phase {
            LoopPhase::Pending { handle } => Some(handle),
            _ => None,
        };
        self.phase = LoopPhase::Stopped;
        pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_run_reschedule() {
        let mut lp = FrameLoop::new();
        assert!(lp.scheduled(1));
        assert_eq!(lp.phase(), LoopPhase::Pending { handle: 1 });

        assert!(lp.begin_frame());
        assert_eq!(lp.phase(), LoopPhase::Running);
        assert!(lp.scheduled(2));
        assert!(lp.begin_frame());
        assert_eq!(lp.frames(), 2);
    }

    #[test]
    fn test_double_schedule_rejected() {
        let mut lp = FrameLoop::new();
        assert!(lp.scheduled(1));
        assert!(!lp.scheduled(2));
        assert_eq!(lp.phase(), LoopPhase::Pending { handle: 1 });
    }

    #[test]
    fn test_stop_returns_pending_handle() {
        let mut lp = FrameLoop::new();
        lp.scheduled(7);
        assert_eq!(lp.stop(), Some(7));
        assert!(lp.is_stopped());
        // Second stop has nothing left to cancel
        assert_eq!(lp.stop(), None);
    }

    #[test]
    fn test_frame_after_stop_is_skipped() {
        let mut lp = FrameLoop::new();
        lp.scheduled(3);
        lp.stop();
        // The cancelled callback fires anyway (already queued by the host)
        assert!(!lp.begin_frame());
        assert!(!lp.scheduled(4));
        assert_eq!(lp.frames(), 0);
    }

    #[test]
    fn test_stop_inside_frame() {
        let mut lp = FrameLoop::new();
        lp.scheduled(1);
        assert!(lp.begin_frame());
        // Unmounted mid-frame: nothing to cancel, no reschedule
        assert_eq!(lp.stop(), None);
        assert!(!lp.can_schedule());
    }

    #[test]
    fn test_begin_without_schedule() {
        let mut lp = FrameLoop::new();
        assert!(!lp.begin_frame());
        assert_eq!(lp.phase(), LoopPhase::Idle);
    }
}
