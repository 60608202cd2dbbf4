//! Progress notification port
//!
//! Defines the interface for reporting progress during a council round.

use council_domain::{CouncilMode, RoundPhase, Seat};

/// Callback for progress updates during a council round
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console, web UI, etc.)
pub trait ProgressNotifier: Send + Sync {
    /// Called when a running phase starts
    fn on_phase_start(&self, mode: CouncilMode, phase: &RoundPhase, total_seats: usize);

    /// Called when one seat's call settles within a phase
    fn on_seat_complete(&self, phase: &RoundPhase, seat: &Seat, success: bool);

    /// Called when a phase completes
    fn on_phase_complete(&self, phase: &RoundPhase);

    /// Called once when the round fails, whatever the cause.
    fn on_round_failed(&self, _reason: &str) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_phase_start(&self, _mode: CouncilMode, _phase: &RoundPhase, _total_seats: usize) {}
    fn on_seat_complete(&self, _phase: &RoundPhase, _seat: &Seat, _success: bool) {}
    fn on_phase_complete(&self, _phase: &RoundPhase) {}
}
