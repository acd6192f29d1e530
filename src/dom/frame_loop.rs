use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_render::{request_animation_frame, AnimationFrame};

type FrameSlot = Rc<RefCell<Option<AnimationFrame>>>;

/// Requests the next frame, which runs `step` and then requests the one after.
///
/// Callbacks only hold a weak handle to the slot, so once the owner is gone
/// the chain ends at the next frame.
fn schedule<F>(slot: &FrameSlot, mut step: F)
where
    F: FnMut() + 'static,
{
    let weak: Weak<RefCell<Option<AnimationFrame>>> = Rc::downgrade(slot);
    let frame = request_animation_frame(move |_timestamp| {
        let Some(slot) = weak.upgrade() else {
            return;
        };
        slot.borrow_mut().take();
        step();
        schedule(&slot, step);
    });
    *slot.borrow_mut() = Some(frame);
}

/// A step run once per display refresh until stopped.
///
/// The next frame is requested only after the current step returns, so steps
/// never overlap. Dropping the loop cancels the pending frame.
pub struct FrameLoop {
    frame: FrameSlot,
}

impl FrameLoop {
    pub fn start<F>(step: F) -> Self
    where
        F: FnMut() + 'static,
    {
        let frame = Rc::new(RefCell::new(None));
        schedule(&frame, step);
        Self { frame }
    }

    /// Cancels the pending frame and releases the step.
    pub fn stop(self) {
        self.frame.borrow_mut().take();
    }
}
