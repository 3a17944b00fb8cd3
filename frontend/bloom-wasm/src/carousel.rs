use tracing::debug;

pub const DEFAULT_DEBOUNCE_MS: f64 = 300.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

impl Direction {
    /// Positive values mean next, anything else previous.
    pub fn from_raw(raw: i32) -> Self {
        if raw > 0 {
            Direction::Next
        } else {
            Direction::Previous
        }
    }
}

/// Trailing-edge debounce: only the last request in a burst fires,
/// `delay_ms` after it was made.
#[derive(Debug, Clone)]
pub struct Debounce<T> {
    delay_ms: f64,
    pending: Option<(T, f64)>,
}

impl<T> Debounce<T> {
    pub fn new(delay_ms: f64) -> Self {
        Self {
            delay_ms: delay_ms.max(0.0),
            pending: None,
        }
    }

    pub fn request(&mut self, value: T, now_ms: f64) {
        self.pending = Some((value, now_ms + self.delay_ms));
    }

    pub fn poll(&mut self, now_ms: f64) -> Option<T> {
        let settled = matches!(self.pending, Some((_, deadline)) if now_ms >= deadline);
        if !settled {
            return None;
        }
        self.pending.take().map(|(value, _)| value)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Which of the page's messages is visible.
#[derive(Debug, Clone)]
pub struct MessageCarousel {
    len: usize,
    index: usize,
    debounce: Debounce<Direction>,
}

impl Default for MessageCarousel {
    fn default() -> Self {
        Self::new(0, DEFAULT_DEBOUNCE_MS)
    }
}

impl MessageCarousel {
    /// Starts on the most recent (last) message.
    pub fn new(len: usize, debounce_ms: f64) -> Self {
        Self {
            len,
            index: len.saturating_sub(1),
            debounce: Debounce::new(debounce_ms),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn show_next(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }

    pub fn show_previous(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
        self.index
    }

    pub fn step(&mut self, direction: Direction) -> usize {
        match direction {
            Direction::Next => self.show_next(),
            Direction::Previous => self.show_previous(),
        }
    }

    pub fn request(&mut self, direction: Direction, now_ms: f64) {
        self.debounce.request(direction, now_ms);
    }

    /// Applies a settled request, returning the newly visible index.
    pub fn poll(&mut self, now_ms: f64) -> Option<usize> {
        let direction = self.debounce.poll(now_ms)?;
        let index = self.step(direction);
        debug!("Carousel moved {:?} to {}", direction, index);
        Some(index)
    }
}
