use crate::{Coordinates, PolygonGeometry, RingGeometry};

/// Orientation of `p2` relative to the directed line `p0 → p1`.
///
/// Positive if `p2` is to the left, negative if it is to the right, zero if
/// the three points are collinear.
#[must_use]
pub fn is_left(p0: &Coordinates, p1: &Coordinates, p2: &Coordinates) -> f64 {
	(p1.x() - p0.x()) * (p2.y() - p0.y()) - (p2.x() - p0.x()) * (p1.y() - p0.y())
}

/// Winding number of `ring` around `point`.
///
/// Walks the edges between consecutive positions. The ring is expected to be
/// closed, so the edge from the last position back to the first is not added.
/// An edge counts when it crosses the horizontal line through `point` with
/// `point` strictly on its inner side: upward edges (`y0 <= y < y1`) with
/// `point` to the left add one, downward edges (`y0 > y >= y1`) with `point`
/// to the right subtract one.
#[must_use]
pub fn winding_number(point: &Coordinates, ring: &RingGeometry) -> i32 {
	let mut wn = 0;
	for edge in ring.0.windows(2) {
		let (p0, p1) = (&edge[0], &edge[1]);
		if p0.y() <= point.y() {
			if p1.y() > point.y() && is_left(p0, p1, point) > 0.0 {
				wn += 1;
			}
		} else if p1.y() <= point.y() && is_left(p0, p1, point) < 0.0 {
			wn -= 1;
		}
	}
	wn
}

/// Whether `point` lies inside `polygon` by the non-zero winding rule.
///
/// Every ring is tested on its own and the first ring that winds around the
/// point decides, so additional rings extend the area rather than cutting
/// holes. Because of the strict sign test, points on the left or bottom edge
/// of a ring count as inside and points on the right or top edge as outside.
#[must_use]
pub fn point_in_polygon(point: &Coordinates, polygon: &PolygonGeometry) -> bool {
	polygon.0.iter().any(|ring| winding_number(point, ring) != 0)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::cmp::Ordering;

	fn square() -> PolygonGeometry {
		PolygonGeometry::from(&[[[0, 0], [4, 0], [4, 4], [0, 4], [0, 0]]])
	}

	#[rstest]
	#[case([0.0, 0.0], [1.0, 0.0], [0.5, 1.0], Ordering::Greater)]
	#[case([0.0, 0.0], [1.0, 0.0], [0.5, -1.0], Ordering::Less)]
	#[case([0.0, 0.0], [1.0, 1.0], [2.0, 2.0], Ordering::Equal)]
	fn orientation(#[case] p0: [f64; 2], #[case] p1: [f64; 2], #[case] p2: [f64; 2], #[case] expected: Ordering) {
		let value = is_left(&p0.into(), &p1.into(), &p2.into());
		assert_eq!(value.partial_cmp(&0.0), Some(expected));
	}

	#[rstest]
	#[case(2.0, 2.0, true)]
	#[case(0.1, 3.9, true)]
	#[case(5.0, 5.0, false)]
	#[case(-0.1, 2.0, false)]
	#[case(2.0, 4.1, false)]
	fn square_inside_outside(#[case] x: f64, #[case] y: f64, #[case] expected: bool) {
		assert_eq!(point_in_polygon(&Coordinates::new(x, y), &square()), expected);
	}

	#[rstest]
	#[case(0.0, 2.0, true)]
	#[case(2.0, 0.0, true)]
	#[case(4.0, 2.0, false)]
	#[case(2.0, 4.0, false)]
	fn square_boundary_is_half_open(#[case] x: f64, #[case] y: f64, #[case] expected: bool) {
		assert_eq!(point_in_polygon(&Coordinates::new(x, y), &square()), expected);
	}

	#[test]
	fn orientation_of_the_ring_does_not_matter() {
		let clockwise = PolygonGeometry::from(&[[[0, 0], [0, 4], [4, 4], [4, 0], [0, 0]]]);
		let point = Coordinates::new(2.0, 2.0);
		assert_eq!(winding_number(&point, &clockwise.0[0]), -1);
		assert_eq!(winding_number(&point, &square().0[0]), 1);
		assert!(point_in_polygon(&point, &clockwise));
	}

	#[test]
	fn concave_polygon() {
		// a "U" opening to the top
		let shape = PolygonGeometry::from(&[[[0, 0], [6, 0], [6, 6], [4, 6], [4, 2], [2, 2], [2, 6], [0, 6], [0, 0]]]);
		assert!(point_in_polygon(&Coordinates::new(1.0, 5.0), &shape));
		assert!(point_in_polygon(&Coordinates::new(5.0, 5.0), &shape));
		assert!(!point_in_polygon(&Coordinates::new(3.0, 5.0), &shape));
	}

	#[test]
	fn any_ring_counts() {
		let polygon = PolygonGeometry::from(&[
			[[0, 0], [4, 0], [4, 4], [0, 4], [0, 0]],
			[[10, 0], [14, 0], [14, 4], [10, 4], [10, 0]],
		]);
		assert!(point_in_polygon(&Coordinates::new(12.0, 2.0), &polygon));
		assert!(!point_in_polygon(&Coordinates::new(7.0, 2.0), &polygon));
	}

	#[test]
	fn degenerate_rings() {
		let polygon = PolygonGeometry(vec![RingGeometry(vec![]), RingGeometry::from(&[[1, 1]])]);
		assert!(!point_in_polygon(&Coordinates::new(1.0, 1.0), &polygon));
		assert!(!point_in_polygon(&Coordinates::new(0.0, 0.0), &PolygonGeometry(vec![])));
	}

	#[test]
	fn strictly_inside_convex_polygons() {
		let hexagon = PolygonGeometry::from(&[[[2, 0], [4, 0], [6, 3], [4, 6], [2, 6], [0, 3], [2, 0]]]);
		for (x, y) in [(3.0, 3.0), (1.0, 3.0), (5.0, 3.0), (3.0, 0.5), (3.0, 5.5), (2.5, 1.0)] {
			assert!(point_in_polygon(&Coordinates::new(x, y), &hexagon), "({x}, {y}) should be inside");
		}
		for (x, y) in [(-1.0, 3.0), (7.0, 3.0), (3.0, -1.0), (3.0, 7.0), (-5.0, -5.0)] {
			assert!(!point_in_polygon(&Coordinates::new(x, y), &hexagon), "({x}, {y}) should be outside");
		}
	}
}
