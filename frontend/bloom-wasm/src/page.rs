use std::borrow::Cow;

use tracing::warn;

use crate::carousel::MessageCarousel;
use crate::clock::FrameClock;
use crate::escalation::EscalationButton;
use crate::scene::Scene;

pub const INBOX_CAPACITY: usize = 64 * 1024;

/// Scene plus the page widgets driven from the same frame loop.
pub struct Page {
    pub scene: Scene,
    pub clock: FrameClock,
    pub carousel: MessageCarousel,
    pub escalation: EscalationButton,
    inbox: Vec<u8>,
}

impl Page {
    pub fn new(width: f64, height: f64, seed: u64) -> Self {
        let mut page = Self {
            scene: Scene::new(width, height, seed),
            clock: FrameClock::new(),
            carousel: MessageCarousel::default(),
            escalation: EscalationButton::default(),
            inbox: vec![0; INBOX_CAPACITY],
        };
        page.scene.render();
        page
    }

    /// Runs however many ticks `delta_ms` is worth and refreshes the draw list.
    pub fn step(&mut self, delta_ms: f64) -> usize {
        let steps = self.clock.advance(delta_ms);
        for _ in 0..steps {
            self.scene.tick();
        }
        if steps > 0 {
            self.scene.render();
        }
        steps
    }

    pub fn inbox_mut(&mut self) -> &mut [u8] {
        &mut self.inbox
    }

    /// Takes the first `len` inbox bytes as newline separated lyric text.
    pub fn load_lyrics(&mut self, len: usize) {
        let bytes = &self.inbox[..len.min(INBOX_CAPACITY)];
        let text = match std::str::from_utf8(bytes) {
            Ok(text) => Cow::Borrowed(text),
            Err(e) => {
                warn!("Lyric text is not valid UTF-8: {}", e);
                String::from_utf8_lossy(bytes)
            }
        };
        self.scene.load_lyrics(&text);
        self.scene.render();
    }

    pub fn reset(&mut self) {
        self.clock.reset();
        self.scene.reset();
    }
}
