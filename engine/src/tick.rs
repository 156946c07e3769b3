//! The loop-termination signals a tick can produce (§4.1, §5, §7).

/// Everything but `Continue` tells the caller to stop calling `World::tick`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    /// Escape acknowledged from the (out-of-scope) pause menu.
    Quit,
    /// `win_counter` reached 1; hand off to the end-sequence collaborator.
    Victory,
    /// `lives` went negative after a death.
    GameOver,
}
