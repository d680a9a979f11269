use crate::image::{luminance, Rgba};

/// Decides which pixels seed and join a flood fill.
pub trait FillCriterion {
    /// Whether `px` may start a new region.
    fn accepts_seed(&self, px: Rgba) -> bool;
    /// Whether `px` joins the region grown from `seed`.
    fn accepts(&self, seed: Rgba, px: Rgba) -> bool;
}

/// Edge intensity (red channel of an edge map) strictly above `threshold`.
#[derive(Clone, Copy, Debug)]
pub struct EdgeCriterion {
    pub threshold: u8,
}

impl FillCriterion for EdgeCriterion {
    #[inline]
    fn accepts_seed(&self, px: Rgba) -> bool {
        px[0] > self.threshold
    }

    #[inline]
    fn accepts(&self, _seed: Rgba, px: Rgba) -> bool {
        px[0] > self.threshold
    }
}

/// Euclidean RGB distance to the seed color within `delta`.
#[derive(Clone, Copy, Debug)]
pub struct ColorCriterion {
    pub delta: f32,
    /// Seeds at or above this luminance count as background.
    pub background_luma: f32,
}

impl FillCriterion for ColorCriterion {
    #[inline]
    fn accepts_seed(&self, px: Rgba) -> bool {
        luminance(px) < self.background_luma
    }

    #[inline]
    fn accepts(&self, seed: Rgba, px: Rgba) -> bool {
        rgb_distance_sq(seed, px) <= self.delta * self.delta
    }
}

#[inline]
fn rgb_distance_sq(a: Rgba, b: Rgba) -> f32 {
    let dr = a[0] as f32 - b[0] as f32;
    let dg = a[1] as f32 - b[1] as f32;
    let db = a[2] as f32 - b[2] as f32;
    dr * dr + dg * dg + db * db
}
