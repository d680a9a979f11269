use region_segmenter::budget::Deadline;
use region_segmenter::config::segment;
use region_segmenter::image::io::{load_rgba_image, save_edge_map, write_json_file};
use region_segmenter::{RegionSegmenter, SegmenterWorkspace};
use std::env;
use std::path::Path;
use std::time::Duration;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = segment::load_config(Path::new(&config_path))?;

    let image = load_rgba_image(&config.input)?;
    let deadline = match config.deadline_ms {
        Some(ms) => Deadline::after(Duration::from_millis(ms)),
        None => Deadline::none(),
    };
    let segmenter = RegionSegmenter::new(config.params);
    let mut workspace = SegmenterWorkspace::new();

    let mut report = segmenter.process_with_workspace(&image, &mut workspace, &deadline);
    if let Some(path) = &config.external {
        let external = segment::load_external_regions(path)?;
        report = segmenter.merge_external(report, external);
    }

    let (edges, _) = workspace.edge_map(&image);
    save_edge_map(edges, &config.output.edges_image)?;
    write_json_file(&config.output.components_json, &report)?;

    println!("{}", report.summary());
    println!("Saved edge map to {}", config.output.edges_image.display());
    println!(
        "Saved {} components to {}",
        report.components.len(),
        config.output.components_json.display()
    );

    Ok(())
}

fn usage() -> String {
    "Usage: segment_regions <config.json>".to_string()
}
