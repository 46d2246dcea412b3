//! Crossed wires on a grid: two paths of axis-aligned segments traced from
//! a shared origin, compared by where they cross.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("empty step at position {0}")]
    EmptyStep(usize),
    #[error("`{0}` is not a valid direction")]
    BadDirection(char),
    #[error("invalid step length `{0}`")]
    BadLength(String),
}

/// One axis-aligned piece of a wire. `steps` is the wire length walked
/// before this segment starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    x1: i64,
    y1: i64,
    x2: i64,
    y2: i64,
    steps: i64,
}

impl Segment {
    fn is_vertical(&self) -> bool {
        self.x1 == self.x2
    }

    /// Where this segment crosses a perpendicular one, if it does.
    /// Returns the crossing point and the combined step count of both
    /// wires up to it. Parallel segments never cross.
    fn crossing(&self, other: &Segment) -> Option<(i64, i64, i64)> {
        let (v, h) = match (self.is_vertical(), other.is_vertical()) {
            (true, false) => (self, other),
            (false, true) => (other, self),
            _ => return None,
        };

        let x_hit = (v.x1 >= h.x1 && v.x1 <= h.x2) || (v.x1 >= h.x2 && v.x1 <= h.x1);
        let y_hit = (h.y1 >= v.y1 && h.y1 <= v.y2) || (h.y1 >= v.y2 && h.y1 <= v.y1);
        if !(x_hit && y_hit) {
            return None;
        }

        let steps = v.steps + (v.y1 - h.y1).abs() + h.steps + (h.x1 - v.x1).abs();
        Some((v.x1, h.y1, steps))
    }
}

/// Parses one wire path like `R75,D30,R83` into segments, accumulating
/// the step count along the way.
pub fn parse_path(path: &str) -> Result<Vec<Segment>, PathError> {
    let (mut x, mut y, mut steps) = (0i64, 0i64, 0i64);
    let mut segments = Vec::new();

    for (position, step) in path.trim_end().split(',').enumerate() {
        let step = step.trim();
        let mut chars = step.chars();
        let direction = chars.next().ok_or(PathError::EmptyStep(position))?;
        let length: i64 = chars
            .as_str()
            .parse()
            .map_err(|_| PathError::BadLength(step.to_string()))?;

        let (x2, y2) = match direction {
            'U' => (x, y + length),
            'R' => (x + length, y),
            'D' => (x, y - length),
            'L' => (x - length, y),
            other => return Err(PathError::BadDirection(other)),
        };

        segments.push(Segment {
            x1: x,
            y1: y,
            x2,
            y2,
            steps,
        });
        steps += length;
        x = x2;
        y = y2;
    }

    Ok(segments)
}

fn crossings<'a>(
    first: &'a [Segment],
    second: &'a [Segment],
) -> impl Iterator<Item = (i64, i64, i64)> + 'a {
    first
        .iter()
        .flat_map(move |a| second.iter().filter_map(move |b| a.crossing(b)))
}

/// Manhattan distance from the origin to the closest crossing of the two
/// wires. The origin itself does not count.
pub fn closest_crossing(first: &[Segment], second: &[Segment]) -> Option<i64> {
    crossings(first, second)
        .map(|(x, y, _)| x.abs() + y.abs())
        .filter(|&distance| distance != 0)
        .min()
}

/// Fewest combined steps both wires take to reach a crossing. The origin
/// itself does not count.
pub fn fewest_combined_steps(first: &[Segment], second: &[Segment]) -> Option<i64> {
    crossings(first, second)
        .map(|(_, _, steps)| steps)
        .filter(|&steps| steps != 0)
        .min()
}
