use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use region_segmenter::image::{RasterImage, Rgba};

pub const WHITE: Rgba = [255, 255, 255, 255];
pub const BLACK: Rgba = [0, 0, 0, 255];

/// White page builder for synthetic test images.
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Rgba>,
}

impl Canvas {
    pub fn white(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "image dimensions must be positive");
        Self {
            width,
            height,
            pixels: vec![WHITE; width * height],
        }
    }

    /// Fill `[x, x + w) × [y, y + h)`, clipped to the canvas.
    pub fn rect(mut self, x: usize, y: usize, w: usize, h: usize, color: Rgba) -> Self {
        for yy in y..(y + h).min(self.height) {
            for xx in x..(x + w).min(self.width) {
                self.pixels[yy * self.width + xx] = color;
            }
        }
        self
    }

    /// One-pixel horizontal rule of `len` pixels starting at `(x, y)`.
    pub fn hline(self, x: usize, y: usize, len: usize, color: Rgba) -> Self {
        self.rect(x, y, len, 1, color)
    }

    /// One-pixel vertical rule of `len` pixels starting at `(x, y)`.
    pub fn vline(self, x: usize, y: usize, len: usize, color: Rgba) -> Self {
        self.rect(x, y, 1, len, color)
    }

    /// Fill every pixel within `r` of `(cx, cy)`, clipped to the canvas.
    pub fn disc(mut self, cx: usize, cy: usize, r: usize, color: Rgba) -> Self {
        for yy in cy.saturating_sub(r)..(cy + r + 1).min(self.height) {
            for xx in cx.saturating_sub(r)..(cx + r + 1).min(self.width) {
                let (dx, dy) = (xx.abs_diff(cx), yy.abs_diff(cy));
                if dx * dx + dy * dy <= r * r {
                    self.pixels[yy * self.width + xx] = color;
                }
            }
        }
        self
    }

    /// Replace every pixel with seeded uniform noise.
    pub fn noise(mut self, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        for px in &mut self.pixels {
            *px = [rng.gen(), rng.gen(), rng.gen(), 255];
        }
        self
    }

    pub fn build(self) -> RasterImage {
        RasterImage::from_pixels(self.width, self.height, self.pixels)
            .expect("canvas dimensions are valid")
    }
}

/// Random page with `count` dark rectangles of random size and color.
pub fn random_blocks(rng: &mut StdRng, width: usize, height: usize, count: usize) -> RasterImage {
    let mut canvas = Canvas::white(width, height);
    for _ in 0..count {
        let w = rng.gen_range(5..width / 2);
        let h = rng.gen_range(5..height / 2);
        let x = rng.gen_range(0..width - w);
        let y = rng.gen_range(0..height - h);
        let color = [rng.gen_range(0..200), rng.gen_range(0..200), rng.gen_range(0..200), 255];
        canvas = canvas.rect(x, y, w, h, color);
    }
    canvas.build()
}
