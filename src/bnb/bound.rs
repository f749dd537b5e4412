//! Completion estimates for partial tours.

use super::config::Bound;
use crate::geometry::DistanceMatrix;

/// Estimated cost of finishing a tour whose path currently ends at `last`.
///
/// `visited[i]` marks cities already on the path; `anchor` is the city the
/// tour must return to.
pub(crate) fn completion_estimate(
    bound: Bound,
    matrix: &DistanceMatrix,
    last: usize,
    anchor: usize,
    visited: &[bool],
) -> f64 {
    match bound {
        Bound::SpanningTree => spanning_tree(matrix, last, anchor, visited),
        Bound::NearestNeighbor => nearest_neighbor(matrix, last, visited),
    }
}

/// Prim's algorithm over `{last, anchor} ∪ unvisited`.
fn spanning_tree(matrix: &DistanceMatrix, last: usize, anchor: usize, visited: &[bool]) -> f64 {
    let mut nodes: Vec<usize> = Vec::with_capacity(visited.len() + 1);
    nodes.push(last);
    if anchor != last {
        nodes.push(anchor);
    }
    nodes.extend((0..visited.len()).filter(|&city| !visited[city]));

    let m = nodes.len();
    if m < 2 {
        return 0.0;
    }

    let mut in_tree = vec![false; m];
    let mut min_edge = vec![f64::INFINITY; m];
    in_tree[0] = true;
    for k in 1..m {
        min_edge[k] = matrix.get(nodes[0], nodes[k]);
    }

    let mut total = 0.0;
    for _ in 1..m {
        let mut next = usize::MAX;
        let mut next_edge = f64::INFINITY;
        for k in 0..m {
            if !in_tree[k] && min_edge[k] < next_edge {
                next_edge = min_edge[k];
                next = k;
            }
        }
        if next == usize::MAX {
            break;
        }

        in_tree[next] = true;
        total += next_edge;
        for k in 0..m {
            if !in_tree[k] {
                let d = matrix.get(nodes[next], nodes[k]);
                if d < min_edge[k] {
                    min_edge[k] = d;
                }
            }
        }
    }
    total
}

/// Greedy walk to the closest unvisited city until none remain.
///
/// Ties go to the lowest index.
fn nearest_neighbor(matrix: &DistanceMatrix, last: usize, visited: &[bool]) -> f64 {
    let mut remaining: Vec<usize> = (0..visited.len()).filter(|&city| !visited[city]).collect();
    let mut current = last;
    let mut total = 0.0;

    while !remaining.is_empty() {
        let mut nearest_pos = 0;
        let mut nearest_dist = f64::INFINITY;
        for (pos, &city) in remaining.iter().enumerate() {
            let d = matrix.get(current, city);
            if d < nearest_dist {
                nearest_dist = d;
                nearest_pos = pos;
            }
        }
        total += nearest_dist;
        current = remaining.remove(nearest_pos);
    }
    total
}
