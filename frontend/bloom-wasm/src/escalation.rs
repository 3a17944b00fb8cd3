use tracing::warn;

pub const DEFAULT_GROWTH: f64 = 1.5;
pub const DEFAULT_FONT_PX: f64 = 16.0;

/// The "no" button: each press shows the next prompt and makes "yes" bigger.
#[derive(Debug, Clone, PartialEq)]
pub struct EscalationButton {
    prompt_count: usize,
    cursor: usize,
    font_px: f64,
    growth: f64,
}

impl Default for EscalationButton {
    fn default() -> Self {
        Self::new(0, DEFAULT_FONT_PX, DEFAULT_GROWTH)
    }
}

impl EscalationButton {
    pub fn new(prompt_count: usize, base_font_px: f64, growth: f64) -> Self {
        let growth = if growth.is_finite() && growth > 1.0 {
            growth
        } else {
            warn!("Ignoring growth factor {}, using {}", growth, DEFAULT_GROWTH);
            DEFAULT_GROWTH
        };
        let font_px = if base_font_px.is_finite() && base_font_px > 0.0 {
            base_font_px
        } else {
            DEFAULT_FONT_PX
        };
        Self {
            prompt_count,
            cursor: 0,
            font_px,
            growth,
        }
    }

    pub fn prompt_count(&self) -> usize {
        self.prompt_count
    }

    /// Index of the prompt the next press will show.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn font_px(&self) -> f64 {
        self.font_px
    }

    pub fn growth(&self) -> f64 {
        self.growth
    }

    pub fn press(&mut self) -> Option<usize> {
        if self.prompt_count == 0 {
            return None;
        }
        let shown = self.cursor;
        self.cursor = (self.cursor + 1) % self.prompt_count;
        // stays at the largest finite size once growing would overflow
        let next = self.font_px * self.growth;
        if next.is_finite() {
            self.font_px = next;
        }
        Some(shown)
    }
}
