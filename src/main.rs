use region_segmenter::image::RasterImage;
use region_segmenter::{RegionSegmenter, SegmenterParams};

fn main() {
    // Demo stub: paints a dark block on a white page and segments it
    let (w, h) = (320usize, 240usize);
    let mut pixels = vec![[255u8, 255, 255, 255]; w * h];
    for y in 60..120 {
        for x in 40..200 {
            pixels[y * w + x] = [20, 40, 160, 255];
        }
    }
    let image = match RasterImage::from_pixels(w, h, pixels) {
        Ok(image) => image,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    let segmenter = RegionSegmenter::new(SegmenterParams::default());
    let report = segmenter.process(&image);
    println!("{}", report.summary());
    for c in &report.components {
        println!("{} [{}] {:?}", c.name, c.category, c.bounding_box);
    }
}
