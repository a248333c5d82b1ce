//! Countdown timer state machine and presets

use std::str::FromStr;

/// Smallest custom duration accepted at the input boundary, in minutes
pub const MIN_CUSTOM_MINUTES: u32 = 1;
/// Largest custom duration accepted at the input boundary, in minutes
pub const MAX_CUSTOM_MINUTES: u32 = 120;
/// Duration used when nothing else is configured, in minutes
pub const DEFAULT_MINUTES: u32 = 10;

/// Coarse view of where the timer is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerStatus {
    Idle,
    Running,
    Paused,
    Complete,
}

/// Events emitted by the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// The countdown reached zero while running. Emitted once per run.
    Completed,
}

/// Single-instance countdown ticking one second at a time.
///
/// Invariant: `0 <= remaining_seconds <= total_seconds`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownTimer {
    total_seconds: u32,
    remaining_seconds: u32,
    running: bool,
    complete: bool,
}

impl CountdownTimer {
    /// A stopped timer with the full duration remaining
    pub fn new(total_seconds: u32) -> Self {
        CountdownTimer {
            total_seconds,
            remaining_seconds: total_seconds,
            running: false,
            complete: false,
        }
    }

    /// Set a new duration. A running timer is stopped.
    pub fn configure(&mut self, total_seconds: u32) {
        self.total_seconds = total_seconds;
        self.remaining_seconds = total_seconds;
        self.running = false;
        self.complete = false;
    }

    /// Begin or resume counting down.
    ///
    /// Starting a finished timer rewinds it to the configured duration first.
    pub fn start(&mut self) {
        if self.running || self.total_seconds == 0 {
            return;
        }
        if self.complete || self.remaining_seconds == 0 {
            self.remaining_seconds = self.total_seconds;
        }
        self.complete = false;
        self.running = true;
    }

    /// Freeze the countdown at its current value
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Pause when running, start otherwise
    pub fn toggle(&mut self) {
        if self.running {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Advance by one second. Only a running timer moves.
    pub fn tick(&mut self) -> Option<TimerEvent> {
        if !self.running {
            return None;
        }

        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds == 0 {
            self.running = false;
            self.complete = true;
            return Some(TimerEvent::Completed);
        }
        None
    }

    /// Back to the configured duration, stopped
    pub fn reset(&mut self) {
        self.remaining_seconds = self.total_seconds;
        self.running = false;
        self.complete = false;
    }

    pub fn total_seconds(&self) -> u32 {
        self.total_seconds
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.total_seconds - self.remaining_seconds
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn status(&self) -> TimerStatus {
        if self.running {
            TimerStatus::Running
        } else if self.complete {
            TimerStatus::Complete
        } else if self.remaining_seconds < self.total_seconds {
            TimerStatus::Paused
        } else {
            TimerStatus::Idle
        }
    }

    /// Fraction of the duration already elapsed, in `0.0..=1.0`
    pub fn progress(&self) -> f64 {
        if self.total_seconds == 0 {
            return 0.0;
        }
        f64::from(self.elapsed_seconds()) / f64::from(self.total_seconds)
    }

    /// Short status line for display
    pub fn status_line(&self) -> &'static str {
        match self.status() {
            TimerStatus::Running => "Relaxing...",
            TimerStatus::Complete => "Time to rest more!",
            TimerStatus::Idle | TimerStatus::Paused => "Ready to unwind?",
        }
    }
}

impl Default for CountdownTimer {
    fn default() -> Self {
        CountdownTimer::new(DEFAULT_MINUTES * 60)
    }
}

/// Render seconds as `MM:SS`. Minutes are not wrapped into hours.
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Built-in durations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPreset {
    QuickBreak,
    LazySession,
    DeepRelax,
    PowerNap,
}

impl TimerPreset {
    pub const ALL: [TimerPreset; 4] = [
        TimerPreset::QuickBreak,
        TimerPreset::LazySession,
        TimerPreset::DeepRelax,
        TimerPreset::PowerNap,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TimerPreset::QuickBreak => "Quick Break",
            TimerPreset::LazySession => "Lazy Session",
            TimerPreset::DeepRelax => "Deep Relax",
            TimerPreset::PowerNap => "Power Nap",
        }
    }

    /// Name accepted on the command line
    pub fn slug(&self) -> &'static str {
        match self {
            TimerPreset::QuickBreak => "quick-break",
            TimerPreset::LazySession => "lazy-session",
            TimerPreset::DeepRelax => "deep-relax",
            TimerPreset::PowerNap => "power-nap",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            TimerPreset::QuickBreak => "☕",
            TimerPreset::LazySession => "🌿",
            TimerPreset::DeepRelax => "😌",
            TimerPreset::PowerNap => "😴",
        }
    }

    pub fn minutes(&self) -> u32 {
        match self {
            TimerPreset::QuickBreak => 5,
            TimerPreset::LazySession => 10,
            TimerPreset::DeepRelax => 20,
            TimerPreset::PowerNap => 30,
        }
    }

    pub fn seconds(&self) -> u32 {
        self.minutes() * 60
    }
}

impl FromStr for TimerPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        TimerPreset::ALL
            .into_iter()
            .find(|p| p.slug() == wanted)
            .ok_or_else(|| {
                format!(
                    "Invalid preset: '{}'. Valid presets are: quick-break, lazy-session, deep-relax, power-nap",
                    s
                )
            })
    }
}

/// Check a custom duration against the allowed minute range
pub fn validate_custom_minutes(minutes: u32) -> crate::error::Result<u32> {
    if (MIN_CUSTOM_MINUTES..=MAX_CUSTOM_MINUTES).contains(&minutes) {
        Ok(minutes)
    } else {
        Err(crate::error::LoungeError::DurationOutOfRange {
            minutes,
            min: MIN_CUSTOM_MINUTES,
            max: MAX_CUSTOM_MINUTES,
        })
    }
}
