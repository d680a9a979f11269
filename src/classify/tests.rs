use super::*;
use crate::contour::Point;
use crate::image::Rgba;

const WHITE: Rgba = [255, 255, 255, 255];

fn canvas(w: usize, h: usize) -> RasterImage {
    RasterImage::filled(w, h, WHITE).unwrap()
}

fn paint(img: &RasterImage, region: Region, f: impl Fn(usize, usize) -> Rgba) -> RasterImage {
    let (w, h) = img.dimensions();
    let mut px = img.pixels().to_vec();
    for y in region.y..region.bottom() {
        for x in region.x..region.right() {
            px[y * w + x] = f(x, y);
        }
    }
    RasterImage::from_pixels(w, h, px).unwrap()
}

fn run(img: &RasterImage, region: Region, evidence: RegionEvidence) -> CandidateRegion {
    let opts = ClassifierOptions::default();
    classify(region, &evidence, &ImageContext::new(img, &opts))
}

#[test]
fn wide_short_blob_is_text_with_full_bonus() {
    let img = canvas(400, 400);
    let c = run(&img, Region::new(10, 10, 200, 40), RegionEvidence::Blob);
    assert_eq!(c.kind(), RegionType::Text);
    assert!((c.confidence() - 1.0).abs() < 1e-6);
}

#[test]
fn text_without_bonuses_keeps_base() {
    let img = canvas(400, 400);
    // ratio 1.6 is outside (2, 15); height 60 is outside (10, 50).
    let c = run(&img, Region::new(0, 0, 96, 60), RegionEvidence::Blob);
    assert_eq!(c.kind(), RegionType::Image);
    let t = text_score(&Region::new(0, 0, 96, 60), &TextRule::default()).unwrap();
    assert!((t - 0.5).abs() < 1e-6);
}

#[test]
fn plain_square_blob_is_image() {
    let img = canvas(400, 400);
    let c = run(&img, Region::new(50, 50, 150, 150), RegionEvidence::Blob);
    assert_eq!(c.kind(), RegionType::Image);
    assert!((c.confidence() - 0.8).abs() < 1e-6);
}

#[test]
fn colorful_square_blob_gets_color_bonus() {
    let region = Region::new(50, 50, 150, 150);
    let img = paint(&canvas(400, 400), region, |x, y| {
        [(x * 5 % 256) as u8, (y * 7 % 256) as u8, ((x + y) * 3 % 256) as u8, 255]
    });
    let c = run(&img, region, RegionEvidence::Blob);
    assert_eq!(c.kind(), RegionType::Image);
    assert!((c.confidence() - 1.0).abs() < 1e-6);
}

#[test]
fn small_square_blob_is_icon() {
    let img = canvas(400, 400);
    let c = run(&img, Region::new(300, 300, 40, 40), RegionEvidence::Blob);
    assert_eq!(c.kind(), RegionType::Icon);
    assert!((c.confidence() - 0.7).abs() < 1e-6);
}

#[test]
fn compact_high_contrast_contour_near_top_is_logo() {
    let region = Region::new(20, 20, 60, 60);
    let img = paint(&canvas(400, 400), region, |x, _| {
        if x < 50 {
            [0, 0, 0, 255]
        } else {
            WHITE
        }
    });
    let c = run(&img, region, RegionEvidence::Contour { compactness: 16.0 });
    assert_eq!(c.kind(), RegionType::Logo);
    assert!((c.confidence() - 1.0).abs() < 1e-6);
}

#[test]
fn spread_out_contour_is_not_logo() {
    let img = canvas(400, 400);
    let region = Region::new(20, 300, 60, 60);
    let c = run(&img, region, RegionEvidence::Contour { compactness: 80.0 });
    assert_eq!(c.kind(), RegionType::Icon);
}

#[test]
fn blobs_are_never_logos() {
    let img = canvas(400, 400);
    let c = run(&img, Region::new(20, 20, 60, 60), RegionEvidence::Blob);
    assert_ne!(c.kind(), RegionType::Logo);
}

#[test]
fn tiny_region_falls_back_to_background() {
    let img = canvas(100, 100);
    let c = run(&img, Region::new(1, 1, 5, 5), RegionEvidence::Blob);
    assert_eq!(c.kind(), RegionType::Background);
    assert_eq!(c.confidence(), 0.0);
}

#[test]
fn table_and_chart_scores() {
    let img = canvas(400, 400);
    let region = Region::new(0, 0, 200, 100);
    let t = run(&img, region, RegionEvidence::Table { regularity: 0.2 });
    assert_eq!(t.kind(), RegionType::Table);
    assert!((t.confidence() - 0.8).abs() < 1e-6);
    let c = run(&img, region, RegionEvidence::Chart);
    assert_eq!(c.kind(), RegionType::Chart);
    assert!((c.confidence() - 0.8).abs() < 1e-6);

    let opts = ClassifierOptions {
        table: TableConfidence::GridRegularity {
            base: 0.5,
            span: 0.5,
        },
        ..ClassifierOptions::default()
    };
    let g = classify(
        region,
        &RegionEvidence::Table { regularity: 0.2 },
        &ImageContext::new(&img, &opts),
    );
    assert!((g.confidence() - 0.6).abs() < 1e-6);
}

#[test]
fn short_contours_are_skipped() {
    let img = canvas(100, 100);
    let opts = ClassifierOptions::default();
    let ctx = ImageContext::new(&img, &opts);
    let contour = Contour {
        points: (0..10).map(|i| Point { x: 10 + i, y: 10 }).collect(),
        closed: false,
    };
    assert!(classify_contour(&contour, 20, &ctx).is_none());
    assert!(classify_contour(&contour, 5, &ctx).is_some());
}

#[test]
fn table_confidence_deserializes_by_mode() {
    let fixed: TableConfidence = serde_json::from_str(r#"{"mode":"fixed","confidence":0.7}"#).unwrap();
    assert_eq!(fixed, TableConfidence::Fixed { confidence: 0.7 });
    let opts: ClassifierOptions =
        serde_json::from_str(r#"{"table":{"mode":"grid_regularity","base":0.4,"span":0.6}}"#).unwrap();
    assert!((opts.table.confidence(1.0) - 1.0).abs() < 1e-6);
    assert_eq!(opts.chart_confidence, 0.8);
}
