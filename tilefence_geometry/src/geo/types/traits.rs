use std::fmt::Debug;
use tilefence_core::json::JsonValue;

/// Shared interface of all geometry types.
pub trait GeometryTrait: Debug + Clone + Sized {
	/// The `coordinates` member of the GeoJSON representation.
	fn to_coord_json(&self) -> JsonValue;

	/// Whether the point `x`/`y` lies inside this geometry.
	///
	/// Always `false` for points and lines. Areas use the winding-number rule,
	/// see [`crate::math::point_in_polygon`] for how boundary points are treated.
	fn contains_point(&self, x: f64, y: f64) -> bool;
}

/// A geometry that can be wrapped into its multi counterpart.
pub trait SingleGeometryTrait<Multi>: Debug + Clone {
	fn into_multi(self) -> Multi;
}

/// A geometry made of simpler parts: a polygon of rings, a multi-point of points.
pub trait CompositeGeometryTrait<Item>: Debug + Clone {
	fn new() -> Self;

	fn as_vec(&self) -> &Vec<Item>;

	fn as_mut_vec(&mut self) -> &mut Vec<Item>;

	fn into_inner(self) -> Vec<Item>;

	fn into_iter(self) -> impl Iterator<Item = Item> {
		self.into_inner().into_iter()
	}

	/// Splits off the first part, e.g. the outer ring of a polygon.
	fn into_first_and_rest(self) -> Option<(Item, Vec<Item>)> {
		let mut iter = self.into_iter();
		iter.next().map(|first| (first, iter.collect()))
	}

	fn is_empty(&self) -> bool {
		self.as_vec().is_empty()
	}

	fn len(&self) -> usize {
		self.as_vec().len()
	}

	fn push(&mut self, item: Item) {
		self.as_mut_vec().push(item);
	}

	fn first(&self) -> Option<&Item> {
		self.as_vec().first()
	}

	fn last(&self) -> Option<&Item> {
		self.as_vec().last()
	}
}
