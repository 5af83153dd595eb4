use kurbo::Point;

use crate::foundation::core::Rgb8;
use crate::foundation::math::Rng64;
use crate::sampling::pixels::PixelSample;

/// Everything needed to construct one particle: a paired source/target
/// sample, a jittered start position, and a draw size.
#[derive(Clone, Copy, Debug)]
pub struct ParticleSeed {
    pub start: Point,
    pub target: Point,
    pub source_color: Rgb8,
    pub target_color: Rgb8,
    pub size: u32,
}

/// Equalize the source list against the target length: truncate when longer,
/// cyclically repeat in blocks when shorter (the block is a prefix of the
/// growing list, so five sources against twelve targets yields the index
/// pattern `0 1 2 3 4 0 1 2 3 4 0 1`).
pub fn equalize_source(mut source: Vec<PixelSample>, target_len: usize) -> Vec<PixelSample> {
    if source.is_empty() {
        return source;
    }
    if source.len() > target_len {
        source.truncate(target_len);
        return source;
    }
    while source.len() < target_len {
        let need = target_len - source.len();
        let block: Vec<PixelSample> = source.iter().take(need).copied().collect();
        source.extend(block);
    }
    source
}

/// Pair each source sample with the nearest not-yet-used target sample.
///
/// Targets are pre-sorted by (y, x) so tie-breaking is deterministic; the
/// first-found minimum wins. This is a deliberate O(n²) heuristic, not exact
/// bipartite matching: nearby pixels pairing up reads better on screen than
/// an optimal assignment, and n is bounded by the sampling stride.
pub fn assign_targets(
    source: Vec<PixelSample>,
    mut target: Vec<PixelSample>,
    rng: &mut Rng64,
) -> Vec<ParticleSeed> {
    if source.is_empty() || target.is_empty() {
        return Vec::new();
    }

    target.sort_by(|a, b| {
        (a.position.y, a.position.x)
            .partial_cmp(&(b.position.y, b.position.x))
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let source = equalize_source(source, target.len());

    let mut used = vec![false; target.len()];
    let mut seeds = Vec::with_capacity(source.len());

    for src in &source {
        let mut best: Option<(usize, f64)> = None;
        for (i, tgt) in target.iter().enumerate() {
            if used[i] {
                continue;
            }
            let dx = src.position.x - tgt.position.x;
            let dy = src.position.y - tgt.position.y;
            let dist_sq = dx * dx + dy * dy;
            if best.is_none_or(|(_, d)| dist_sq < d) {
                best = Some((i, dist_sq));
            }
        }
        // Fallback: first unused target in sorted order.
        let idx = match best {
            Some((i, _)) => i,
            None => match used.iter().position(|u| !u) {
                Some(i) => i,
                None => break,
            },
        };
        used[idx] = true;

        let jitter_x = rng.range(-2.0, 2.0);
        let jitter_y = rng.range(-2.0, 2.0);
        let size = if rng.next_f64_01() < 0.8 {
            2
        } else {
            rng.range_i32(3, 5) as u32
        };

        seeds.push(ParticleSeed {
            start: Point::new(src.position.x + jitter_x, src.position.y + jitter_y),
            target: target[idx].position,
            source_color: src.color,
            target_color: target[idx].color,
            size,
        });
    }

    seeds
}

#[cfg(test)]
#[path = "../../tests/unit/assign/solver.rs"]
mod tests;
