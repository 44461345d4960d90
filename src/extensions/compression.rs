use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-compression")]
use rayon::prelude::*;

use crate::core::{PixelSpan, SeriesPoint};
use crate::error::{NavError, NavResult};

/// Point-budget preset for series compression ahead of rendering.
///
/// Levels map to a target number of retained points per pixel of plot span.
/// `Auto` picks a concrete level from the series-length to span ratio, so
/// small series pass through untouched while dense ones are thinned
/// aggressively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CompressionLevel {
    /// Pass every point through unchanged.
    None,
    /// Up to four points per pixel.
    Low,
    /// Up to two points per pixel.
    #[default]
    Medium,
    /// Up to one point per pixel.
    High,
    /// One point per two pixels.
    Extreme,
    /// Level chosen from the density of the input series.
    Auto,
}

impl CompressionLevel {
    fn resolve(self, point_count: usize, pixel_span: PixelSpan) -> Self {
        if self != Self::Auto {
            return self;
        }

        let points_per_pixel = point_count as f64 / pixel_span.as_f64();
        if points_per_pixel < 2.0 {
            Self::None
        } else if points_per_pixel < 4.0 {
            Self::Low
        } else if points_per_pixel < 8.0 {
            Self::Medium
        } else if points_per_pixel < 32.0 {
            Self::High
        } else {
            Self::Extreme
        }
    }

    fn target_point_count(self, pixel_span: PixelSpan) -> Option<usize> {
        let span = pixel_span.length as usize;
        let target = match self {
            Self::None | Self::Auto => return None,
            Self::Low => span.saturating_mul(4),
            Self::Medium => span.saturating_mul(2),
            Self::High => span,
            Self::Extreme => span / 2,
        };
        // First, last, and at least one interior point.
        Some(target.max(3))
    }
}

/// Reduces a series to the pixel budget of the given level using
/// largest-triangle-three-buckets selection.
///
/// The first and last points are always retained and the output stays sorted
/// by x. Compression is shape-preserving rather than uniform: within each
/// bucket the point forming the largest triangle with its neighbors wins, so
/// spikes survive where a plain stride would drop them.
///
/// This never touches axis state; hosts call it on their own series data
/// before rendering.
pub fn compress_series(
    points: &[SeriesPoint],
    pixel_span: PixelSpan,
    level: CompressionLevel,
) -> NavResult<Vec<SeriesPoint>> {
    pixel_span.ensure_valid()?;
    for point in points {
        if !point.is_finite() {
            return Err(NavError::InvalidData(
                "series points must be finite".to_owned(),
            ));
        }
    }

    let mut sorted = points.to_vec();
    sorted.sort_by(|left, right| left.x.total_cmp(&right.x));

    let resolved = level.resolve(sorted.len(), pixel_span);
    let Some(target) = resolved.target_point_count(pixel_span) else {
        return Ok(sorted);
    };
    if sorted.len() <= target {
        return Ok(sorted);
    }

    Ok(largest_triangle_three_buckets(&sorted, target))
}

/// LTTB selection over an x-sorted series, `3 <= threshold < points.len()`.
fn largest_triangle_three_buckets(points: &[SeriesPoint], threshold: usize) -> Vec<SeriesPoint> {
    let total = points.len();
    let bucket_count = threshold - 2;
    let bucket_size = (total - 2) as f64 / bucket_count as f64;

    let averages = bucket_averages(points, bucket_count, bucket_size);

    let mut sampled = Vec::with_capacity(threshold);
    sampled.push(points[0]);

    let mut previous_selected = 0usize;
    for bucket in 0..bucket_count {
        let (start, end) = bucket_bounds(total, bucket, bucket_size);
        // Anchor the triangle on the following bucket's average; the final
        // bucket anchors on the last point, which is always retained.
        let next_anchor = if bucket + 1 < bucket_count {
            averages[bucket + 1]
        } else {
            points[total - 1]
        };

        let anchor = points[previous_selected];
        let best = (start..end)
            .max_by_key(|candidate| {
                OrderedFloat(triangle_area(anchor, points[*candidate], next_anchor))
            })
            .unwrap_or(start);

        sampled.push(points[best]);
        previous_selected = best;
    }

    sampled.push(points[total - 1]);
    sampled
}

/// Per-bucket mean points, precomputed so the parallel path and the serial
/// path feed identical anchors into the sequential selection loop.
fn bucket_averages(
    points: &[SeriesPoint],
    bucket_count: usize,
    bucket_size: f64,
) -> Vec<SeriesPoint> {
    #[cfg(feature = "parallel-compression")]
    {
        (0..bucket_count)
            .into_par_iter()
            .map(|bucket| bucket_average(points, bucket, bucket_size))
            .collect()
    }

    #[cfg(not(feature = "parallel-compression"))]
    {
        (0..bucket_count)
            .map(|bucket| bucket_average(points, bucket, bucket_size))
            .collect()
    }
}

fn bucket_average(points: &[SeriesPoint], bucket: usize, bucket_size: f64) -> SeriesPoint {
    let (start, end) = bucket_bounds(points.len(), bucket, bucket_size);
    let count = end - start;

    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    for point in &points[start..end] {
        sum_x += point.x;
        sum_y += point.y;
    }
    SeriesPoint::new(sum_x / count as f64, sum_y / count as f64)
}

/// Interior index window of one bucket; never empty, never reaches the
/// first or last point.
fn bucket_bounds(total: usize, bucket: usize, bucket_size: f64) -> (usize, usize) {
    let start = (1.0 + bucket as f64 * bucket_size).floor() as usize;
    let end = (1.0 + (bucket as f64 + 1.0) * bucket_size).floor() as usize;
    let start = start.min(total - 2);
    let end = end.clamp(start + 1, total - 1);
    (start, end)
}

fn triangle_area(a: SeriesPoint, candidate: SeriesPoint, c: SeriesPoint) -> f64 {
    ((a.x - candidate.x) * (c.y - a.y) - (a.x - c.x) * (candidate.y - a.y)).abs()
}
