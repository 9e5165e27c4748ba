//! Delays and transforms for the staggered and scroll-driven effects.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

/// Stagger offset for the `index`-th item, saturating at `u32::MAX`.
#[must_use]
pub fn stagger_ms(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index).map_or(u32::MAX, |i| i.saturating_mul(step_ms))
}

/// CSS `animation-delay` value for the `index`-th project card.
#[must_use]
pub fn card_delay(index: usize, step_ms: u32) -> String {
    format!("{}ms", stagger_ms(index, step_ms))
}

/// Header transform for a page scrolled `scroll_y` pixels.
#[must_use]
pub fn parallax_transform(scroll_y: f64, factor: f64) -> String {
    format!("translateY({}px)", scroll_y * factor)
}

/// Successive prefixes of a heading, one more character per frame.
///
/// Yields nothing for empty text; the last frame is the full text.
#[derive(Clone, Debug)]
pub struct Typewriter {
    chars: Vec<char>,
    typed: usize,
}

impl Typewriter {
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self { chars: text.chars().collect(), typed: 0 }
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.typed >= self.chars.len()
    }
}

impl Iterator for Typewriter {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.is_done() {
            return None;
        }
        self.typed += 1;
        Some(self.chars[..self.typed].iter().collect())
    }
}
