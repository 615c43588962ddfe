use crate::{Diagnostics, LogDiagnostics};
use std::fmt;
use tilefence_core::TileCoord;
use tilefence_geometry::GeometryTileFeature;

static LOG_DIAGNOSTICS: LogDiagnostics = LogDiagnostics;

/// What an expression is evaluated against: the current feature, the tile it
/// belongs to, and where to send notices.
///
/// Both the feature and the tile are optional; expressions that need them
/// evaluate to a neutral result when they are missing.
#[derive(Clone, Copy)]
pub struct EvaluationContext<'a> {
	pub feature: Option<&'a dyn GeometryTileFeature>,
	pub canonical: Option<TileCoord>,
	pub diagnostics: &'a dyn Diagnostics,
}

impl<'a> EvaluationContext<'a> {
	/// An empty context reporting notices through [`LogDiagnostics`].
	#[must_use]
	pub fn new() -> Self {
		EvaluationContext {
			feature: None,
			canonical: None,
			diagnostics: &LOG_DIAGNOSTICS,
		}
	}

	#[must_use]
	pub fn with_feature(mut self, feature: &'a dyn GeometryTileFeature) -> Self {
		self.feature = Some(feature);
		self
	}

	#[must_use]
	pub fn with_canonical(mut self, canonical: TileCoord) -> Self {
		self.canonical = Some(canonical);
		self
	}

	#[must_use]
	pub fn with_diagnostics(mut self, diagnostics: &'a dyn Diagnostics) -> Self {
		self.diagnostics = diagnostics;
		self
	}
}

impl Default for EvaluationContext<'_> {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Debug for EvaluationContext<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("EvaluationContext")
			.field("feature", &self.feature)
			.field("canonical", &self.canonical)
			.finish_non_exhaustive()
	}
}
