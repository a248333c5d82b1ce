//! Countdown session driven by a repeating tick

use crate::domain::{CountdownTimer, TimerEvent, TimerStatus};
use crate::infrastructure::{CompletionCue, Ticker};
use log::{debug, info};
use std::str::FromStr;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;

/// One tick per second in normal use
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Commands accepted while a countdown is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerControl {
    /// Pause when running, resume otherwise
    Toggle,
    Reset,
    Quit,
}

impl FromStr for TimerControl {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "p" | "pause" | "resume" | "space" => Ok(TimerControl::Toggle),
            "r" | "reset" => Ok(TimerControl::Reset),
            "q" | "quit" => Ok(TimerControl::Quit),
            other => Err(format!(
                "Unknown control '{}' (p = pause/resume, r = reset, q = quit)",
                other
            )),
        }
    }
}

/// Owns a countdown and the tick signal feeding it.
///
/// The ticker is held only while the countdown runs: it is acquired on
/// start and released on pause, reset, reconfigure, completion and drop.
/// Starting requires a tokio runtime.
pub struct TimerSession<C: CompletionCue> {
    timer: CountdownTimer,
    ticker: Option<Ticker>,
    interval: Duration,
    cue: C,
}

impl<C: CompletionCue> TimerSession<C> {
    pub fn new(total_seconds: u32, interval: Duration, cue: C) -> Self {
        TimerSession {
            timer: CountdownTimer::new(total_seconds),
            ticker: None,
            interval,
            cue,
        }
    }

    pub fn timer(&self) -> &CountdownTimer {
        &self.timer
    }

    pub fn cue(&self) -> &C {
        &self.cue
    }

    /// Whether a tick signal is currently held
    pub fn is_ticking(&self) -> bool {
        self.ticker.is_some()
    }

    pub fn configure(&mut self, total_seconds: u32) {
        self.timer.configure(total_seconds);
        self.ticker = None;
    }

    pub fn start(&mut self) {
        self.timer.start();
        if self.timer.is_running() && self.ticker.is_none() {
            self.ticker = Some(Ticker::acquire(self.interval));
        }
    }

    pub fn pause(&mut self) {
        self.timer.pause();
        self.ticker = None;
    }

    pub fn toggle(&mut self) {
        if self.timer.is_running() {
            self.pause();
        } else {
            self.start();
        }
    }

    pub fn reset(&mut self) {
        self.timer.reset();
        self.ticker = None;
    }

    /// Feed one tick into the countdown, playing the cue on completion
    pub fn apply_tick(&mut self) -> Option<TimerEvent> {
        let event = self.timer.tick();
        if event == Some(TimerEvent::Completed) {
            self.ticker = None;
            info!(
                "Countdown of {} seconds complete",
                self.timer.total_seconds()
            );
            self.cue.play();
        }
        event
    }

    /// Apply a control command
    pub fn control(&mut self, control: TimerControl) {
        debug!("Timer control: {:?}", control);
        match control {
            TimerControl::Toggle => self.toggle(),
            TimerControl::Reset => self.reset(),
            TimerControl::Quit => self.pause(),
        }
    }

    /// Drive the countdown until it completes or is told to quit.
    ///
    /// `on_update` sees the timer after every tick (`None`) and after every
    /// control (`Some`). Once `controls` is closed the session stops as soon
    /// as it holds no tick signal.
    pub async fn run_with_controls<F>(
        &mut self,
        controls: &mut UnboundedReceiver<TimerControl>,
        mut on_update: F,
    ) -> TimerStatus
    where
        F: FnMut(&CountdownTimer, Option<TimerControl>),
    {
        let mut controls_open = true;

        loop {
            if self.ticker.is_none() && !controls_open {
                break;
            }

            tokio::select! {
                ticked = next_tick(&mut self.ticker) => {
                    if !ticked {
                        self.ticker = None;
                        continue;
                    }
                    let event = self.apply_tick();
                    on_update(&self.timer, None);
                    if event.is_some() {
                        break;
                    }
                }
                received = controls.recv(), if controls_open => {
                    let Some(control) = received else {
                        controls_open = false;
                        continue;
                    };
                    self.control(control);
                    on_update(&self.timer, Some(control));
                    if control == TimerControl::Quit {
                        break;
                    }
                }
            }
        }

        self.ticker = None;
        self.timer.status()
    }
}

/// Next tick of a held signal; never resolves when none is held
async fn next_tick(ticker: &mut Option<Ticker>) -> bool {
    match ticker {
        Some(ticker) => ticker.tick().await,
        None => std::future::pending().await,
    }
}
