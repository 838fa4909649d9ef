// THEORY:
// The `pipeline` module is the final, top-level API for the entire ripeness
// engine. It encapsulates the full stack — pixel decode, HSV projection,
// category segmentation, mask rendering, statistics, verdict — into a single
// synchronous call: RGBA bytes in, `AnalysisReport` out.
//
// Key architectural principles:
// 1.  **Pure, validated entry point**: Input is checked (dimensions positive,
//     buffer exactly `width * height * 4` bytes) before any pixel work, and
//     the analysis retains nothing between calls. Identical input produces
//     byte-identical masks and identical statistics, regardless of worker
//     count.
// 2.  **Row-banded parallelism**: Per-pixel work has no cross-pixel
//     dependency, so the pixel range is partitioned into disjoint row bands,
//     one scoped worker thread per band. Each worker owns its slice of every
//     mask buffer (no locks on writes) and keeps a private `CategoryCounts`
//     tally; the tallies merge commutatively at the end. Small images skip
//     the fan-out entirely.
// 3.  **Advisory, not fatal, weak detections**: When fewer than 1000 pixels
//     segment as fruit, the report still carries full masks and statistics.
//     Only the verdict is pinned to the default and an advisory message is
//     attached; the caller decides whether to discard the result.

use crate::core_modules::hsv::hsv::HsvColor;
use crate::core_modules::mask::mask::{MaskBand, MaskSet};
use crate::core_modules::pixel::pixel::{CHANNELS, Pixel};
use crate::core_modules::ripeness::ripeness;
use crate::core_modules::segmentation::segmentation::classify;
use crate::core_modules::stats::stats::{CategoryCounts, SurfaceStats};
use crate::error::{AnalysisError, Result};
use serde::Serialize;
use tracing::{debug, warn};

// Re-export key data structures for the public API.
pub use crate::core_modules::ripeness::ripeness::{Detection, MIN_FRUIT_PIXELS, Ripeness};

/// Images at or below this pixel count are analyzed on the calling thread.
const SEQUENTIAL_PIXEL_THRESHOLD: usize = 64 * 64;

/// Advisory attached to a report when the detection guard trips.
pub const INSUFFICIENT_DETECTION_MESSAGE: &str =
    "Banana not detected clearly. Make sure the lighting is adequate.";

/// Configuration for the `RipenessPipeline`, allowing for tunable behavior.
///
/// The segmentation and decision thresholds are deliberately *not* here:
/// they are calibration constants, and exposing them would invite silent
/// changes to observable verdicts.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Upper bound on worker threads for one analysis. Defaults to the
    /// number of logical CPUs.
    pub worker_count: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            worker_count: num_cpus::get().max(1),
        }
    }
}

/// The complete output of one analysis call. Immutable after construction;
/// every buffer is owned by the report, never shared with the pipeline.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    /// The ripeness verdict.
    pub ripeness: Ripeness,
    /// Rounded surface composition percentages.
    pub stats: SurfaceStats,
    /// Raw per-category pixel tallies.
    pub counts: CategoryCounts,
    /// The five visualization masks.
    pub masks: MaskSet,
    /// Advisory message, present only when the detection guard tripped.
    pub detection_error: Option<String>,
}

impl AnalysisReport {
    /// The mask-free, serializable view of this report.
    pub fn summary(&self) -> ReportSummary {
        ReportSummary {
            ripeness: self.ripeness,
            stats: self.stats,
            fruit_pixels: self.counts.fruit_total(),
            detection_error: self.detection_error.clone(),
        }
    }
}

/// Serializable summary of an analysis, for logs and machine consumers.
#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    pub ripeness: Ripeness,
    pub stats: SurfaceStats,
    pub fruit_pixels: u64,
    pub detection_error: Option<String>,
}

/// The main, top-level struct for the ripeness engine.
pub struct RipenessPipeline {
    config: PipelineConfig,
}

impl RipenessPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Analyzes one RGBA image and produces the full report.
    ///
    /// `pixels` is row-major RGBA; its length must equal
    /// `width * height * 4` and both dimensions must be positive, otherwise
    /// the call fails with `AnalysisError` before any processing.
    pub fn analyze(&self, pixels: &[u8], width: u32, height: u32) -> Result<AnalysisReport> {
        if width == 0 || height == 0 {
            return Err(AnalysisError::ZeroDimensions { width, height });
        }
        // Checked arithmetic: dimensions near u32::MAX overflow the byte
        // count, and no real buffer can match an overflowed size anyway.
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|count| count.checked_mul(CHANNELS))
            .unwrap_or(usize::MAX);
        if pixels.len() != expected {
            return Err(AnalysisError::InvalidBufferLength {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        let pixel_count = pixels.len() / CHANNELS;

        debug!(width, height, "starting ripeness analysis");

        let mut masks = MaskSet::zeroed(pixel_count);
        let workers = self.plan_workers(pixel_count, height as usize);
        let counts = if workers <= 1 {
            let mut counts = CategoryCounts::default();
            process_band(pixels, &mut masks.as_band(), &mut counts);
            counts
        } else {
            process_banded(pixels, &mut masks, width as usize, height as usize, workers)
        };

        let stats = SurfaceStats::from_counts(&counts);
        let detection_error = match ripeness::detection_guard(&counts) {
            Detection::Clear => None,
            Detection::Insufficient => {
                warn!(
                    fruit_pixels = counts.fruit_total(),
                    minimum = MIN_FRUIT_PIXELS,
                    "insufficient fruit pixels for a reliable verdict"
                );
                Some(INSUFFICIENT_DETECTION_MESSAGE.to_string())
            }
        };
        let verdict = ripeness::classify(&counts);

        debug!(
            green = counts.green,
            yellow = counts.yellow,
            brown = counts.brown,
            background = counts.background,
            ?verdict,
            "analysis complete"
        );

        Ok(AnalysisReport {
            ripeness: verdict,
            stats,
            counts,
            masks,
            detection_error,
        })
    }

    /// Picks how many row bands to fan out over. Small images stay on the
    /// calling thread; bands never outnumber rows.
    fn plan_workers(&self, pixel_count: usize, rows: usize) -> usize {
        if pixel_count <= SEQUENTIAL_PIXEL_THRESHOLD {
            return 1;
        }
        self.config.worker_count.clamp(1, rows)
    }
}

impl Default for RipenessPipeline {
    fn default() -> Self {
        Self::new(PipelineConfig::default())
    }
}

/// Analyzes one image with the default pipeline configuration.
pub fn analyze_image(pixels: &[u8], width: u32, height: u32) -> Result<AnalysisReport> {
    RipenessPipeline::default().analyze(pixels, width, height)
}

/// Classifies and renders one contiguous pixel range. The band's pixel slice
/// and mask slices are index-aligned: pixel `i` of the slice is pixel `i` of
/// the band.
fn process_band(pixels: &[u8], band: &mut MaskBand<'_>, counts: &mut CategoryCounts) {
    for (i, bytes) in pixels.chunks_exact(CHANNELS).enumerate() {
        let pixel = Pixel::from(bytes);
        let hsv = HsvColor::from(&pixel);
        let category = classify(&hsv);
        counts.record(category);
        band.write_pixel(i, &hsv, category);
    }
}

/// Fans the image out over `workers` disjoint row bands on scoped threads
/// and merges the per-band tallies. The merge is a commutative sum, so the
/// result is identical to the sequential path regardless of band count or
/// completion order.
fn process_banded(
    pixels: &[u8],
    masks: &mut MaskSet,
    width: usize,
    height: usize,
    workers: usize,
) -> CategoryCounts {
    let rows_per_band = height.div_ceil(workers);
    let pixels_per_band = rows_per_band * width;

    // Carve the input and all five masks into per-band slices up front.
    let mut bands: Vec<(&[u8], MaskBand<'_>)> = Vec::with_capacity(workers);
    let mut remaining_pixels = pixels;
    let mut remaining_masks = masks.as_band();
    let mut remaining_count = width * height;
    while remaining_count > 0 {
        let band_pixels = pixels_per_band.min(remaining_count);
        let (pixel_band, pixel_rest) = remaining_pixels.split_at(band_pixels * CHANNELS);
        let (mask_band, mask_rest) = remaining_masks.split_at_pixel(band_pixels);
        bands.push((pixel_band, mask_band));
        remaining_pixels = pixel_rest;
        remaining_masks = mask_rest;
        remaining_count -= band_pixels;
    }

    let mut total = CategoryCounts::default();
    std::thread::scope(|scope| {
        let handles: Vec<_> = bands
            .into_iter()
            .map(|(pixel_band, mut mask_band)| {
                scope.spawn(move || {
                    let mut counts = CategoryCounts::default();
                    process_band(pixel_band, &mut mask_band, &mut counts);
                    counts
                })
            })
            .collect();

        for handle in handles {
            // Scoped worker panics indicate a bug in the band math; there is
            // no recoverable state to salvage at this point.
            let counts = handle.join().expect("analysis worker panicked");
            total.merge(&counts);
        }
    });
    total
}
