//! Small UI effects: typewriter headline and section fade-in
//!
//! Pure state structs updated with delta time, so they can be driven by
//! the frame loop and tested headlessly.

use std::collections::HashMap;

/// Cycles through a word list: type forward at `char_delay`, hold the
/// complete word, delete at double speed, move to the next word.
pub struct Typewriter {
    words: &'static [&'static str],
    word_index: usize,
    shown: usize,
    deleting: bool,
    timer: f32,
    char_delay: f32,
    hold: f32,
}

impl Typewriter {
    pub fn new(words: &'static [&'static str], char_delay: f32, hold: f32) -> Self {
        assert!(!words.is_empty(), "typewriter needs at least one word");
        Self {
            words,
            word_index: 0,
            shown: 0,
            deleting: false,
            timer: 0.0,
            char_delay,
            hold,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.timer += dt;
        let word = self.words[self.word_index];

        if self.deleting {
            while self.timer >= self.char_delay / 2.0 && self.shown > 0 {
                self.timer -= self.char_delay / 2.0;
                self.shown -= 1;
            }
            if self.shown == 0 {
                self.deleting = false;
                self.word_index = (self.word_index + 1) % self.words.len();
                self.timer = 0.0;
            }
        } else if self.shown < word.chars().count() {
            while self.timer >= self.char_delay && self.shown < word.chars().count() {
                self.timer -= self.char_delay;
                self.shown += 1;
            }
            // the hold is measured from completion, not from the last tick
            if self.shown == word.chars().count() {
                self.timer = 0.0;
            }
        } else if self.timer >= self.hold {
            self.deleting = true;
            self.timer = 0.0;
        }
    }

    /// Currently visible prefix of the active word
    pub fn text(&self) -> String {
        self.words[self.word_index].chars().take(self.shown).collect()
    }
}

/// Per-section fade-in: once a section has been seen it eases from 0 to 1
/// and stays there, like a scroll-triggered reveal.
#[derive(Default)]
pub struct Reveal {
    progress: HashMap<&'static str, f32>,
}

impl Reveal {
    const RATE: f32 = 3.0;

    /// Report visibility for `key` this frame and get its eased opacity.
    pub fn opacity(&mut self, key: &'static str, visible: bool, dt: f32) -> f32 {
        let p = self.progress.entry(key).or_insert(0.0);
        if visible || *p > 0.0 {
            *p += (1.0 - *p) * Self::RATE * dt;
            *p = p.min(1.0);
        }
        *p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: &[&str] = &["ab", "xyz"];

    #[test]
    fn typewriter_types_then_deletes_then_advances() {
        let mut tw = Typewriter::new(WORDS, 0.1, 0.5);
        assert_eq!(tw.text(), "");

        tw.update(0.1);
        assert_eq!(tw.text(), "a");
        tw.update(0.1);
        assert_eq!(tw.text(), "ab");

        // Hold, then delete at double speed
        tw.update(0.5);
        tw.update(0.05);
        assert_eq!(tw.text(), "a");
        tw.update(0.05);
        assert_eq!(tw.text(), "");

        // Next word starts typing
        tw.update(0.1);
        assert_eq!(tw.text(), "x");
    }

    #[test]
    fn typing_completion_does_not_shorten_the_hold() {
        let mut tw = Typewriter::new(WORDS, 0.1, 0.5);
        // Overshoot the per-char delay so a sub-delay remainder builds up
        tw.update(0.15);
        tw.update(0.15);
        assert_eq!(tw.text(), "ab");

        // The full hold elapses from completion before deletion starts
        tw.update(0.45);
        assert_eq!(tw.text(), "ab");
        tw.update(0.1);
        tw.update(0.05);
        assert_eq!(tw.text(), "a");
    }

    #[test]
    fn typewriter_wraps_around_the_word_list() {
        let mut tw = Typewriter::new(WORDS, 0.01, 0.1);
        for _ in 0..2000 {
            tw.update(0.016);
        }
        assert!(WORDS
            .iter()
            .any(|w| w.starts_with(&tw.text()) || tw.text().is_empty()));
    }

    #[test]
    fn reveal_is_monotonic_and_sticky() {
        let mut reveal = Reveal::default();
        assert_eq!(reveal.opacity("about", false, 0.016), 0.0);

        let mut last = 0.0;
        for _ in 0..60 {
            let o = reveal.opacity("about", true, 0.016);
            assert!(o >= last);
            last = o;
        }
        assert!(last > 0.9);

        // Scrolling away does not hide it again
        let after = reveal.opacity("about", false, 0.016);
        assert!(after >= last);
    }
}
