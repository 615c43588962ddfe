/// Twice the signed area of a ring of integer tile coordinates (shoelace formula).
///
/// Tile coordinates have y pointing down, so rings that appear clockwise on a
/// map come out positive. Computed in `i64`, so it is exact for any `i32` input.
pub fn signed_ring_area(ring: &[[i32; 2]]) -> i64 {
	let mut sum = 0i64;
	if let Some(mut p2) = ring.last() {
		for p1 in ring {
			sum += (i64::from(p2[0]) - i64::from(p1[0])) * (i64::from(p1[1]) + i64::from(p2[1]));
			p2 = p1;
		}
	}
	sum
}
