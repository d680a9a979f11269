//! Reusable edge-map cache.
//!
//! Re-running the pipeline on the same image (for example with different
//! classifier parameters) skips edge detection when the workspace already
//! holds the edge map for identical pixels. The cache holds one entry keyed
//! by dimensions and a hash of the pixel buffer.
use crate::edges::{detect_edges, EdgeMap};
use crate::image::RasterImage;
use log::debug;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct CacheKey {
    width: usize,
    height: usize,
    digest: u64,
}

impl CacheKey {
    fn of(image: &RasterImage) -> Self {
        let (width, height) = image.dimensions();
        let mut hasher = DefaultHasher::new();
        image.pixels().hash(&mut hasher);
        Self {
            width,
            height,
            digest: hasher.finish(),
        }
    }
}

/// Explicit cache object passed to
/// [`RegionSegmenter::process_with_workspace`](super::RegionSegmenter::process_with_workspace).
#[derive(Debug, Default)]
pub struct SegmenterWorkspace {
    key: Option<CacheKey>,
    edges: Option<EdgeMap>,
    hits: usize,
    misses: usize,
}

impl SegmenterWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Edge map for `image`, computed on a miss. The flag reports a hit.
    pub fn edge_map(&mut self, image: &RasterImage) -> (&EdgeMap, bool) {
        let key = CacheKey::of(image);
        let cached = match self.edges.take() {
            Some(map) if self.key == Some(key) => Some(map),
            _ => None,
        };
        let hit = cached.is_some();
        let map = match cached {
            Some(map) => {
                self.hits += 1;
                map
            }
            None => {
                self.misses += 1;
                self.key = Some(key);
                detect_edges(image)
            }
        };
        debug!(
            "SegmenterWorkspace::edge_map {}x{} hit={}",
            key.width, key.height, hit
        );
        (&*self.edges.insert(map), hit)
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn misses(&self) -> usize {
        self.misses
    }

    /// Drop the cached entry; counters are kept.
    pub fn clear(&mut self) {
        self.key = None;
        self.edges = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_pixels_hit_different_pixels_miss() {
        let a = RasterImage::filled(20, 20, [0, 0, 0, 255]).unwrap();
        let b = RasterImage::filled(20, 20, [9, 0, 0, 255]).unwrap();
        let mut ws = SegmenterWorkspace::new();
        assert!(!ws.edge_map(&a).1);
        assert!(ws.edge_map(&a).1);
        assert!(!ws.edge_map(&b).1);
        assert_eq!((ws.hits(), ws.misses()), (1, 2));
        ws.clear();
        assert!(!ws.edge_map(&b).1);
    }

    #[test]
    fn cached_map_matches_fresh_detection() {
        let mut px = vec![[255u8, 255, 255, 255]; 30 * 30];
        for p in px.iter_mut().skip(15 * 30) {
            *p = [0, 0, 0, 255];
        }
        let img = RasterImage::from_pixels(30, 30, px).unwrap();
        let mut ws = SegmenterWorkspace::new();
        ws.edge_map(&img);
        let (cached, hit) = ws.edge_map(&img);
        assert!(hit);
        assert_eq!(*cached, detect_edges(&img));
    }
}
