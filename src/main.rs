// Command-line runner for the ripeness engine: decode a photograph, analyze
// it, export the five visualization masks as PNGs next to the requested
// output directory, and print the report summary plus the handling
// recommendation.

use anyhow::Context;
use banana_vision::core_modules::utils::image_helper::image_helper;
use banana_vision::{analyze_image, for_ripeness};
use std::env;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        println!("Usage: banana_vision <input_image_path> <output_mask_dir>");
        return Ok(());
    }
    let input_path = &args[1];
    let output_dir = Path::new(&args[2]);

    let decoded = image::open(input_path)
        .with_context(|| format!("failed to open image {input_path}"))?
        .to_rgba8();
    let (width, height) = decoded.dimensions();

    let report = analyze_image(decoded.as_raw(), width, height)
        .with_context(|| format!("failed to analyze {input_path}"))?;

    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create {}", output_dir.display()))?;
    let masks = [
        ("value.png", &report.masks.value),
        ("green.png", &report.masks.green),
        ("yellow.png", &report.masks.yellow),
        ("brown.png", &report.masks.brown),
        ("combined.png", &report.masks.combined),
    ];
    for (name, buffer) in masks {
        let path = output_dir.join(name);
        image_helper::save(&path, width, height, buffer)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    println!("{}", serde_json::to_string_pretty(&report.summary())?);

    let recommendation = for_ripeness(report.ripeness);
    println!();
    println!("Status: {}", recommendation.status);
    println!("{}", recommendation.description);
    println!("Action: {}", recommendation.action);
    println!("Try:");
    for food in recommendation.food {
        println!("  - {food}");
    }

    Ok(())
}
