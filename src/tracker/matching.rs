//! Candidate-to-track matching utilities.

use nalgebra::{Point2, distance};
use ndarray::Array2;

use crate::tracker::rect::Rect;

/// Candidate input for the tracker: a per-frame detected centroid not yet
/// associated with a track.
#[derive(Debug, Clone, Copy)]
pub struct Candidate {
    /// Centroid of the detected region
    pub centroid: Point2<f32>,
}

impl Candidate {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            centroid: Point2::new(x, y),
        }
    }

    /// Derive a candidate from a detected region's bounding box center.
    pub fn from_region(region: Rect) -> Self {
        Self {
            centroid: region.center(),
        }
    }
}

/// Compute the Euclidean distance matrix between track positions and
/// candidate centroids. Shape is (tracks, candidates).
pub fn distance_matrix(track_positions: &[Point2<f32>], candidates: &[Candidate]) -> Array2<f32> {
    let mut dists = Array2::zeros((track_positions.len(), candidates.len()));
    for (i, t) in track_positions.iter().enumerate() {
        for (j, c) in candidates.iter().enumerate() {
            dists[[i, j]] = distance(t, &c.centroid);
        }
    }
    dists
}

#[derive(Debug, Clone)]
pub struct AssignmentResult {
    pub matches: Vec<(usize, usize)>,
    pub unmatched_tracks: Vec<usize>,
    pub unmatched_candidates: Vec<usize>,
}

/// Greedy per-track nearest-neighbor assignment.
///
/// Tracks are scanned in row order; each picks the nearest unconsumed
/// candidate strictly inside the gate. A track processed earlier can steal
/// the shared nearest candidate from a later one, which then binds to a
/// farther candidate or goes unmatched. Suited to sparse, slow-moving
/// scenes; dense or fast scenes produce identity swaps.
pub fn greedy_assignment(cost_matrix: &Array2<f32>, gate: f32) -> AssignmentResult {
    let (num_tracks, num_candidates) = cost_matrix.dim();

    let mut matches = vec![];
    let mut unmatched_tracks = vec![];
    let mut consumed = vec![false; num_candidates];

    for i in 0..num_tracks {
        let mut best: Option<usize> = None;
        let mut best_dist = gate;
        for j in 0..num_candidates {
            if consumed[j] {
                continue;
            }
            let dist = cost_matrix[[i, j]];
            if dist < best_dist {
                best = Some(j);
                best_dist = dist;
            }
        }
        match best {
            Some(j) => {
                matches.push((i, j));
                consumed[j] = true;
            }
            None => unmatched_tracks.push(i),
        }
    }

    let unmatched_candidates = (0..num_candidates).filter(|&j| !consumed[j]).collect();

    AssignmentResult {
        matches,
        unmatched_tracks,
        unmatched_candidates,
    }
}

/// Globally optimal min-cost assignment over the same distance matrix,
/// gated by the same threshold.
///
/// Resolves the shared-candidate contention that greedy assignment decides
/// by track order. Opt-in via `AssignmentStrategy::MinCost`; never a silent
/// substitute for the greedy default, since it changes counting behavior on
/// ambiguous frames.
pub fn min_cost_assignment(cost_matrix: &Array2<f32>, gate: f32) -> AssignmentResult {
    let (num_tracks, num_candidates) = cost_matrix.dim();

    if num_tracks == 0 {
        return AssignmentResult {
            matches: vec![],
            unmatched_tracks: vec![],
            unmatched_candidates: (0..num_candidates).collect(),
        };
    }

    if num_candidates == 0 {
        return AssignmentResult {
            matches: vec![],
            unmatched_tracks: (0..num_tracks).collect(),
            unmatched_candidates: vec![],
        };
    }

    let size = num_tracks.max(num_candidates);
    let mut padded = Array2::<f64>::from_elem((size, size), 1e6);

    for i in 0..num_tracks {
        for j in 0..num_candidates {
            padded[[i, j]] = cost_matrix[[i, j]] as f64;
        }
    }

    let result = lapjv::lapjv(&padded);
    let mut matches = vec![];
    let mut unmatched_tracks = vec![];
    let mut unmatched_candidates_mask: Vec<bool> = vec![true; num_candidates];

    match result {
        Ok((row_to_col, _)) => {
            for (row_idx, &col_idx) in row_to_col.iter().enumerate() {
                if row_idx >= num_tracks {
                    continue;
                }
                if col_idx >= num_candidates {
                    unmatched_tracks.push(row_idx);
                } else if cost_matrix[[row_idx, col_idx]] < gate {
                    matches.push((row_idx, col_idx));
                    unmatched_candidates_mask[col_idx] = false;
                } else {
                    unmatched_tracks.push(row_idx);
                }
            }
        }
        Err(_) => {
            unmatched_tracks = (0..num_tracks).collect();
        }
    }

    let unmatched_candidates: Vec<usize> = unmatched_candidates_mask
        .iter()
        .enumerate()
        .filter_map(|(i, &u)| if u { Some(i) } else { None })
        .collect();

    AssignmentResult {
        matches,
        unmatched_tracks,
        unmatched_candidates,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f32, y: f32) -> Point2<f32> {
        Point2::new(x, y)
    }

    #[test]
    fn test_candidate_from_region() {
        let candidate = Candidate::from_region(Rect::new(10.0, 20.0, 30.0, 40.0));
        assert_eq!(candidate.centroid, p(25.0, 40.0));
    }

    #[test]
    fn test_distance_matrix() {
        let tracks = vec![p(0.0, 0.0), p(10.0, 0.0)];
        let candidates = vec![Candidate::new(3.0, 4.0)];
        let dists = distance_matrix(&tracks, &candidates);
        assert_eq!(dists.dim(), (2, 1));
        assert!((dists[[0, 0]] - 5.0).abs() < 1e-6);
        assert!((dists[[1, 0]] - (49.0f32 + 16.0).sqrt()).abs() < 1e-6);
    }

    #[test]
    fn test_greedy_picks_nearest() {
        let tracks = vec![p(0.0, 0.0)];
        let candidates = vec![Candidate::new(20.0, 0.0), Candidate::new(5.0, 0.0)];
        let dists = distance_matrix(&tracks, &candidates);

        let result = greedy_assignment(&dists, 35.0);
        assert_eq!(result.matches, vec![(0, 1)]);
        assert_eq!(result.unmatched_candidates, vec![0]);
    }

    #[test]
    fn test_greedy_gate_excludes_distant() {
        let tracks = vec![p(0.0, 0.0)];
        let candidates = vec![Candidate::new(35.0, 0.0)];
        let dists = distance_matrix(&tracks, &candidates);

        // Exactly on the gate is out.
        let result = greedy_assignment(&dists, 35.0);
        assert!(result.matches.is_empty());
        assert_eq!(result.unmatched_tracks, vec![0]);
        assert_eq!(result.unmatched_candidates, vec![0]);
    }

    #[test]
    fn test_greedy_first_track_steals() {
        let tracks = vec![p(0.0, 0.0), p(4.0, 0.0)];
        let candidates = vec![Candidate::new(3.0, 0.0)];
        let dists = distance_matrix(&tracks, &candidates);

        // The shared nearest candidate is closer to track 1, but track 0
        // is processed first and wins it.
        let result = greedy_assignment(&dists, 35.0);
        assert_eq!(result.matches, vec![(0, 0)]);
        assert_eq!(result.unmatched_tracks, vec![1]);
    }

    #[test]
    fn test_min_cost_resolves_contention() {
        let tracks = vec![p(0.0, 0.0), p(4.0, 0.0)];
        let candidates = vec![Candidate::new(3.0, 0.0)];
        let dists = distance_matrix(&tracks, &candidates);

        // Same scenario as the greedy steal: global assignment gives the
        // candidate to the genuinely nearer track.
        let result = min_cost_assignment(&dists, 35.0);
        assert_eq!(result.matches, vec![(1, 0)]);
        assert_eq!(result.unmatched_tracks, vec![0]);
    }

    #[test]
    fn test_min_cost_empty_inputs() {
        let empty = Array2::<f32>::zeros((0, 3));
        let result = min_cost_assignment(&empty, 35.0);
        assert!(result.matches.is_empty());
        assert_eq!(result.unmatched_candidates, vec![0, 1, 2]);

        let empty = Array2::<f32>::zeros((2, 0));
        let result = min_cost_assignment(&empty, 35.0);
        assert!(result.matches.is_empty());
        assert_eq!(result.unmatched_tracks, vec![0, 1]);
    }
}
