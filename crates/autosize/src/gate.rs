/// Host hook: run work once the page is visible and laid out.
///
/// Layout questions asked before then — widths, heights, font metrics —
/// yield zeros or garbage, so the initial sizing pass must go through
/// this gate. How visibility is detected is entirely the host's
/// business.
///
/// The closure borrows caller state, so a gate either runs it
/// synchronously or drops it; it cannot be stored for later. A host
/// that learns about visibility asynchronously delays its
/// [`setup_all`](crate::setup_all) call instead and passes
/// [`Immediate`] once laid out.
pub trait DisplayGate {
    fn when_visible(&self, run: Box<dyn FnOnce() + '_>);
}

/// Gate for hosts that are already visible and laid out: runs the work
/// immediately.
#[derive(Clone, Copy, Debug, Default)]
pub struct Immediate;

impl DisplayGate for Immediate {
    fn when_visible(&self, run: Box<dyn FnOnce() + '_>) {
        run();
    }
}
