use std::f64::consts::TAU;
use std::ops::Range;

use kurbo::{Affine, BezPath, Circle, Point, Shape as _};
use rand::Rng;

use crate::draw::{DrawList, Rgb};

pub const FULL_OPACITY: f64 = 255.0;
pub const PETAL_COUNT: Range<u32> = 5..12;
pub const FLOWER_TARGET_SIZE: Range<f64> = 20.0..50.0;
pub const HEART_SIZE: Range<f64> = 20.0..50.0;
pub const BLOOM_SPEED: Range<f64> = 0.18..0.54;
pub const FADE_SPEED: Range<f64> = 0.9..1.8;
pub const RED: Range<u8> = 150..255;
pub const GREEN: Range<u8> = 100..200;
pub const BLUE: Range<u8> = 150..255;
pub const CENTER_COLOR: Rgb = Rgb::new(255, 204, 0);
const HEART_STEP: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Blooming,
    Fading,
}

/// Growth parameters only flowers carry.
#[derive(Debug, Clone, PartialEq)]
pub struct Bloom {
    text: String,
    petal_count: u32,
    angle_step: f64,
    target_size: f64,
    bloom_speed: f64,
}

impl Bloom {
    pub fn new(
        text: impl Into<String>,
        petal_count: u32,
        target_size: f64,
        bloom_speed: f64,
    ) -> Self {
        let petal_count = petal_count.max(1);
        Self {
            text: text.into(),
            petal_count,
            angle_step: TAU / petal_count as f64,
            target_size,
            bloom_speed,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn petal_count(&self) -> u32 {
        self.petal_count
    }

    pub fn angle_step(&self) -> f64 {
        self.angle_step
    }

    pub fn target_size(&self) -> f64 {
        self.target_size
    }

    pub fn bloom_speed(&self) -> f64 {
        self.bloom_speed
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Variant {
    Flower(Bloom),
    Heart,
}

/// One flower or heart with its own bloom/fade timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    position: Point,
    color: Rgb,
    opacity: f64,
    fade_speed: f64,
    size: f64,
    variant: Variant,
}

pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Rgb {
    Rgb::new(rng.gen_range(RED), rng.gen_range(GREEN), rng.gen_range(BLUE))
}

impl Particle {
    pub fn flower(position: Point, color: Rgb, fade_speed: f64, bloom: Bloom) -> Self {
        Self {
            position,
            color,
            opacity: FULL_OPACITY,
            fade_speed,
            size: 0.0,
            variant: Variant::Flower(bloom),
        }
    }

    pub fn heart(position: Point, color: Rgb, size: f64, fade_speed: f64) -> Self {
        Self {
            position,
            color,
            opacity: FULL_OPACITY,
            fade_speed,
            size,
            variant: Variant::Heart,
        }
    }

    pub fn random_flower<R: Rng + ?Sized>(
        rng: &mut R,
        text: impl Into<String>,
        position: Point,
    ) -> Self {
        let petal_count = rng.gen_range(PETAL_COUNT);
        let target_size = rng.gen_range(FLOWER_TARGET_SIZE);
        let bloom_speed = rng.gen_range(BLOOM_SPEED);
        let color = random_color(rng);
        let fade_speed = rng.gen_range(FADE_SPEED);
        Self::flower(
            position,
            color,
            fade_speed,
            Bloom::new(text, petal_count, target_size, bloom_speed),
        )
    }

    pub fn random_heart<R: Rng + ?Sized>(rng: &mut R, position: Point) -> Self {
        let size = rng.gen_range(HEART_SIZE);
        let color = random_color(rng);
        let fade_speed = rng.gen_range(FADE_SPEED);
        Self::heart(position, color, size, fade_speed)
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn fade_speed(&self) -> f64 {
        self.fade_speed
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn variant(&self) -> &Variant {
        &self.variant
    }

    pub fn bloom(&self) -> Option<&Bloom> {
        match &self.variant {
            Variant::Flower(bloom) => Some(bloom),
            Variant::Heart => None,
        }
    }

    pub fn phase(&self) -> Phase {
        match &self.variant {
            Variant::Flower(bloom) if self.size < bloom.target_size => Phase::Blooming,
            _ => Phase::Fading,
        }
    }

    /// Advances one tick: flowers grow until they reach their target size,
    /// everything else loses `fade_speed` opacity.
    pub fn update(&mut self) {
        match &self.variant {
            Variant::Flower(bloom) if self.size < bloom.target_size => {
                self.size += bloom.bloom_speed;
            }
            _ => self.opacity -= self.fade_speed,
        }
    }

    pub fn is_faded(&self) -> bool {
        self.opacity <= 0.0
    }

    pub fn render(&self, out: &mut DrawList) {
        match &self.variant {
            Variant::Flower(bloom) => self.render_flower(bloom, out),
            Variant::Heart => self.render_heart(out),
        }
    }

    fn render_flower(&self, bloom: &Bloom, out: &mut DrawList) {
        let petal = petal_path(self.size);
        let center = Affine::translate(self.position.to_vec2());
        for i in 0..bloom.petal_count {
            let transform = center * Affine::rotate(i as f64 * bloom.angle_step);
            out.push_path(self.color, self.opacity, petal.iter().map(|el| transform * el));
        }
        let disc = Circle::new(self.position, self.size / 10.0);
        out.push_path(
            CENTER_COLOR,
            self.opacity,
            disc.path_elements(crate::draw::FLATTEN_TOLERANCE),
        );
    }

    fn render_heart(&self, out: &mut DrawList) {
        let r = self.size / 16.0;
        let origin = self.position;
        let outline = (0..)
            .map(|i| i as f64 * HEART_STEP)
            .take_while(|a| *a < TAU)
            .map(move |a| {
                let x = r * 16.0 * a.sin().powi(3);
                let y = -r
                    * (13.0 * a.cos() - 5.0 * (2.0 * a).cos() - 2.0 * (3.0 * a).cos()
                        - (4.0 * a).cos());
                Point::new(origin.x + x, origin.y + y)
            });
        out.push_polygon(self.color, self.opacity, outline);
    }
}

/// Petal pointing along +x from the flower center.
fn petal_path(size: f64) -> BezPath {
    let mut path = BezPath::new();
    path.move_to((0.0, 0.0));
    path.curve_to(
        (size / 2.0, -size / 3.0),
        (size, -size / 3.0),
        (size, 0.0),
    );
    path.curve_to((size, size / 3.0), (size / 2.0, size / 3.0), (0.0, 0.0));
    path.close_path();
    path
}
