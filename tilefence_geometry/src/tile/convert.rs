use super::{FeatureType, GeometryTileFeature};
use crate::{
	Coordinates, Geometry, LineStringGeometry, MultiLineStringGeometry, MultiPointGeometry, MultiPolygonGeometry,
	PointGeometry, PolygonGeometry, RingGeometry, math::signed_ring_area,
};
use log::trace;
use tilefence_core::TileCoord;

/// Converts the tile-local geometry of `feature` on tile `tile` to longitude/latitude.
///
/// - point features become a `MultiPoint` of all points in all rings, or a
///   `Point` if there is exactly one;
/// - line features become one line per ring, collapsing to a `LineString`;
/// - polygon features have their rings grouped into polygons, see
///   [`classify_rings`], collapsing to a `Polygon`;
/// - features of unknown type become an empty `MultiPoint`.
///
/// An extent of 0 is treated as 1.
#[must_use]
pub fn convert_geometry(feature: &dyn GeometryTileFeature, tile: &TileCoord) -> Geometry {
	let projection = TileProjection::new(tile, feature.extent());
	let rings = feature.geometries();
	trace!("converting {:?} feature with {} rings on tile {tile}", feature.feature_type(), rings.len());

	match feature.feature_type() {
		FeatureType::Point => {
			let mut points = rings
				.iter()
				.flatten()
				.map(|p| PointGeometry(projection.project(*p)))
				.collect::<Vec<_>>();
			if points.len() == 1 {
				Geometry::Point(points.remove(0))
			} else {
				Geometry::MultiPoint(MultiPointGeometry(points))
			}
		}
		FeatureType::LineString => {
			let mut lines = rings
				.iter()
				.map(|ring| LineStringGeometry(projection.project_all(ring)))
				.collect::<Vec<_>>();
			if lines.len() == 1 {
				Geometry::LineString(lines.remove(0))
			} else {
				Geometry::MultiLineString(MultiLineStringGeometry(lines))
			}
		}
		FeatureType::Polygon => {
			let mut polygons = classify_rings(rings)
				.into_iter()
				.map(|polygon| {
					PolygonGeometry(
						polygon
							.into_iter()
							.map(|ring| RingGeometry(projection.project_all(ring)))
							.collect(),
					)
				})
				.collect::<Vec<_>>();
			if polygons.len() == 1 {
				Geometry::Polygon(polygons.remove(0))
			} else {
				Geometry::MultiPolygon(MultiPolygonGeometry(polygons))
			}
		}
		FeatureType::Unknown => Geometry::MultiPoint(MultiPointGeometry(Vec::new())),
	}
}

/// Groups the rings of a polygon feature into polygons.
///
/// The first ring with a non-zero area sets the orientation of outer rings.
/// Every ring with that orientation starts a new polygon, rings with the
/// opposite orientation are added to the current one. Rings without area are
/// dropped.
#[must_use]
pub fn classify_rings(rings: &[Vec<[i32; 2]>]) -> Vec<Vec<&[[i32; 2]]>> {
	let mut polygons = Vec::new();
	let mut polygon: Vec<&[[i32; 2]]> = Vec::new();
	let mut outer_is_negative: Option<bool> = None;

	for ring in rings {
		let area = signed_ring_area(ring);
		if area == 0 {
			continue;
		}
		let is_negative = area < 0;
		let outer = *outer_is_negative.get_or_insert(is_negative);
		if is_negative == outer && !polygon.is_empty() {
			polygons.push(std::mem::take(&mut polygon));
		}
		polygon.push(ring);
	}

	if !polygon.is_empty() {
		polygons.push(polygon);
	}
	polygons
}

struct TileProjection {
	level: u8,
	x: f64,
	y: f64,
	extent: f64,
}

impl TileProjection {
	fn new(tile: &TileCoord, extent: u32) -> Self {
		TileProjection {
			level: tile.level,
			x: f64::from(tile.x),
			y: f64::from(tile.y),
			extent: f64::from(extent.max(1)),
		}
	}

	fn project(&self, point: [i32; 2]) -> Coordinates {
		let [lon, lat] = TileCoord::coord_to_geo(
			self.level,
			self.x + f64::from(point[0]) / self.extent,
			self.y + f64::from(point[1]) / self.extent,
		);
		Coordinates::new(lon, lat)
	}

	fn project_all(&self, points: &[[i32; 2]]) -> Vec<Coordinates> {
		points.iter().map(|p| self.project(*p)).collect()
	}
}
