//! Progress reporting for council rounds

use colored::Colorize;
use council_application::ProgressNotifier;
use council_domain::{CouncilMode, RoundPhase, Seat};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::Mutex;

/// Reports progress during a round with progress bars
pub struct ProgressReporter {
    multi: MultiProgress,
    phase_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            phase_bar: Mutex::new(None),
        }
    }

    fn phase_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn phase_display_name(mode: CouncilMode, phase: &RoundPhase) -> String {
        let step = match phase {
            RoundPhase::SpecialistsRunning => "Specialists",
            RoundPhase::ChairRunning => "Chair",
            other => other.as_str(),
        };
        format!("{} / {}", mode, step)
    }

    fn phase_short_name(phase: &RoundPhase) -> &'static str {
        match phase {
            RoundPhase::SpecialistsRunning | RoundPhase::SpecialistsDone => "Specialists",
            RoundPhase::ChairRunning | RoundPhase::Complete => "Chair",
            _ => "Round",
        }
    }

    fn seat_status(seat: &Seat, success: bool) -> String {
        if success {
            format!("{} {}", "v".green(), seat)
        } else {
            format!("{} {}", "x".red(), seat)
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_phase_start(&self, mode: CouncilMode, phase: &RoundPhase, total_seats: usize) {
        let pb = self.multi.add(ProgressBar::new(total_seats as u64));
        pb.set_style(Self::phase_style());
        pb.set_prefix(Self::phase_display_name(mode, phase));
        pb.set_message("waiting...");
        pb.enable_steady_tick(std::time::Duration::from_millis(120));

        if let Ok(mut bar) = self.phase_bar.lock() {
            *bar = Some(pb);
        }
    }

    fn on_seat_complete(&self, _phase: &RoundPhase, seat: &Seat, success: bool) {
        if let Ok(bar) = self.phase_bar.lock()
            && let Some(pb) = bar.as_ref()
        {
            pb.set_message(Self::seat_status(seat, success));
            pb.inc(1);
        }
    }

    fn on_phase_complete(&self, phase: &RoundPhase) {
        if let Ok(mut bar) = self.phase_bar.lock()
            && let Some(pb) = bar.take()
        {
            pb.finish_with_message(format!("{} done", Self::phase_short_name(phase).green()));
        }
    }

    fn on_round_failed(&self, reason: &str) {
        if let Ok(mut bar) = self.phase_bar.lock()
            && let Some(pb) = bar.take()
        {
            pb.abandon_with_message(format!("{} {}", "failed:".red(), reason));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_phase_start(&self, mode: CouncilMode, phase: &RoundPhase, total_seats: usize) {
        eprintln!(
            "{} {} ({} seats)",
            "->".cyan(),
            ProgressReporter::phase_display_name(mode, phase).bold(),
            total_seats
        );
    }

    fn on_seat_complete(&self, _phase: &RoundPhase, seat: &Seat, success: bool) {
        eprintln!("  {}", ProgressReporter::seat_status(seat, success));
    }

    fn on_phase_complete(&self, _phase: &RoundPhase) {}

    fn on_round_failed(&self, reason: &str) {
        eprintln!("{} {}", "x round failed:".red(), reason);
    }
}
