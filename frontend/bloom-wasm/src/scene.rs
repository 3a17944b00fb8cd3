use kurbo::Point;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::draw::DrawList;
use crate::particle::Particle;
use crate::pool::ParticlePool;

pub const FLOWER_EVERY: u64 = 20;
pub const HEART_EVERY: u64 = 30;

fn dimension(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value.max(1.0)
    } else {
        fallback
    }
}

/// Everything the animation needs between frames.
pub struct Scene {
    width: f64,
    height: f64,
    frame_count: u64,
    file_count: u32,
    lines: Vec<String>,
    flowers: ParticlePool,
    hearts: ParticlePool,
    rng: SmallRng,
    draw_list: DrawList,
}

impl Scene {
    pub fn new(width: f64, height: f64, seed: u64) -> Self {
        Self {
            width: dimension(width, 1.0),
            height: dimension(height, 1.0),
            frame_count: 0,
            file_count: 0,
            lines: Vec::new(),
            flowers: ParticlePool::new(),
            hearts: ParticlePool::new(),
            rng: SmallRng::seed_from_u64(seed),
            draw_list: DrawList::new(),
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn file_count(&self) -> u32 {
        self.file_count
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn flowers(&self) -> &ParticlePool {
        &self.flowers
    }

    pub fn hearts(&self) -> &ParticlePool {
        &self.hearts
    }

    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }

    /// One frame: age both pools, then spawn on the cadence.
    pub fn tick(&mut self) {
        self.frame_count += 1;
        self.flowers.tick();
        self.hearts.tick();
        if self.frame_count % FLOWER_EVERY == 0 {
            self.spawn_flower();
        }
        if self.frame_count % HEART_EVERY == 0 {
            self.spawn_heart();
        }
    }

    pub fn render(&mut self) {
        self.draw_list.clear();
        self.flowers.render(&mut self.draw_list);
        self.hearts.render(&mut self.draw_list);
    }

    /// Non-finite sizes keep the current dimension.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = dimension(width, self.width);
        self.height = dimension(height, self.height);
    }

    /// Replaces the lyric lines and starts over with empty pools.
    pub fn load_lyrics(&mut self, text: &str) {
        self.lines = text.lines().map(str::to_owned).collect();
        debug!("Loaded {} lyric lines", self.lines.len());
        self.flowers.clear();
        self.hearts.clear();
    }

    pub fn advance_resource(&mut self) -> u32 {
        self.file_count = self.file_count.wrapping_add(1);
        self.file_count
    }

    pub fn reset(&mut self) {
        self.frame_count = 0;
        self.flowers.clear();
        self.hearts.clear();
        self.draw_list.clear();
    }

    pub fn flower_text(&self) -> &str {
        if self.lines.is_empty() {
            return "";
        }
        &self.lines[self.file_count as usize % self.lines.len()]
    }

    fn random_position(&mut self) -> Point {
        Point::new(
            self.rng.gen_range(0.0..self.width),
            self.rng.gen_range(0.0..self.height),
        )
    }

    fn spawn_flower(&mut self) {
        let position = self.random_position();
        let text = self.flower_text().to_owned();
        let flower = Particle::random_flower(&mut self.rng, text, position);
        self.flowers.spawn(flower);
    }

    fn spawn_heart(&mut self) {
        let position = self.random_position();
        let heart = Particle::random_heart(&mut self.rng, position);
        self.hearts.spawn(heart);
    }
}
