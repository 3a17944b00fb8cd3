use kurbo::{PathEl, Point};

/// Floats in front of every shape: `r, g, b, alpha, point count`.
pub const SHAPE_HEADER: usize = 5;
pub const FLATTEN_TOLERANCE: f64 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Packs the color as `0xRRGGBB`.
    pub const fn packed(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

/// Flat polygon buffer handed to the page's canvas code once per frame.
///
/// Each shape is laid out as `[r, g, b, alpha, n, x0, y0, .., x(n-1), y(n-1)]`,
/// channels in `0..=255`, alpha in `0..=1`, and the polygon implicitly closed.
#[derive(Debug, Default)]
pub struct DrawList {
    data: Vec<f32>,
    shapes: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawShape<'a> {
    pub color: [f32; 3],
    pub alpha: f32,
    pub points: &'a [f32],
}

impl DrawShape<'_> {
    pub fn point_count(&self) -> usize {
        self.points.len() / 2
    }

    pub fn point(&self, index: usize) -> Point {
        Point::new(
            self.points[index * 2] as f64,
            self.points[index * 2 + 1] as f64,
        )
    }
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.data.clear();
        self.shapes = 0;
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn shape_count(&self) -> usize {
        self.shapes
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn as_ptr(&self) -> *const f32 {
        self.data.as_ptr()
    }

    pub fn push_polygon(
        &mut self,
        color: Rgb,
        opacity: f64,
        points: impl IntoIterator<Item = Point>,
    ) {
        let start = self.begin(color, opacity);
        for point in points {
            self.data.push(point.x as f32);
            self.data.push(point.y as f32);
        }
        self.finish(start);
    }

    /// Flattens a single closed subpath into one polygon.
    pub fn push_path(
        &mut self,
        color: Rgb,
        opacity: f64,
        elements: impl IntoIterator<Item = PathEl>,
    ) {
        let start = self.begin(color, opacity);
        let data = &mut self.data;
        kurbo::flatten(elements, FLATTEN_TOLERANCE, |el| {
            if let PathEl::MoveTo(p) | PathEl::LineTo(p) = el {
                data.push(p.x as f32);
                data.push(p.y as f32);
            }
        });
        self.finish(start);
    }

    pub fn shapes(&self) -> impl Iterator<Item = DrawShape<'_>> {
        let mut rest = self.data.as_slice();
        std::iter::from_fn(move || {
            if rest.len() < SHAPE_HEADER {
                return None;
            }
            let count = rest[4] as usize;
            let (shape, tail) = rest.split_at(SHAPE_HEADER + count * 2);
            rest = tail;
            Some(DrawShape {
                color: [shape[0], shape[1], shape[2]],
                alpha: shape[3],
                points: &shape[SHAPE_HEADER..],
            })
        })
    }

    fn begin(&mut self, color: Rgb, opacity: f64) -> usize {
        let start = self.data.len();
        let alpha = (opacity / 255.0).clamp(0.0, 1.0) as f32;
        self.data.extend_from_slice(&[
            color.r as f32,
            color.g as f32,
            color.b as f32,
            alpha,
            0.0,
        ]);
        start
    }

    fn finish(&mut self, start: usize) {
        let count = (self.data.len() - start - SHAPE_HEADER) / 2;
        if count == 0 {
            self.data.truncate(start);
            return;
        }
        self.data[start + 4] = count as f32;
        self.shapes += 1;
    }
}
