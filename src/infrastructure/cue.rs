//! Completion cue played when the timer runs out

use std::io::Write;

/// Fire-and-forget notification for a finished countdown
pub trait CompletionCue {
    fn play(&mut self);
}

/// Rings the terminal bell on stderr
#[derive(Debug, Default)]
pub struct TerminalBell;

impl CompletionCue for TerminalBell {
    fn play(&mut self) {
        let mut stderr = std::io::stderr();
        // No acknowledgment: a closed stderr just means nobody hears it.
        let _ = stderr.write_all(b"\x07");
        let _ = stderr.flush();
    }
}

/// Used when sound is turned off
#[derive(Debug, Default)]
pub struct SilentCue;

impl CompletionCue for SilentCue {
    fn play(&mut self) {}
}

/// Pick the cue for the configured sound setting
pub fn cue_for(sound: bool) -> Box<dyn CompletionCue> {
    if sound {
        Box::new(TerminalBell)
    } else {
        Box::new(SilentCue)
    }
}

impl<C: CompletionCue + ?Sized> CompletionCue for Box<C> {
    fn play(&mut self) {
        (**self).play();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counting(usize);

    impl CompletionCue for Counting {
        fn play(&mut self) {
            self.0 += 1;
        }
    }

    #[test]
    fn test_boxed_cue_forwards() {
        let mut cue: Box<Counting> = Box::new(Counting(0));
        cue.play();
        CompletionCue::play(&mut cue);
        assert_eq!(cue.0, 2);
    }

    #[test]
    fn test_silent_cue_is_quiet() {
        let mut cue = cue_for(false);
        cue.play();
    }
}
