use crate::{ExpressionFactoryTrait, within};
use std::collections::HashMap;

/// All expression factories, indexed by operator name.
pub struct ExpressionRegistry {
	factories: HashMap<&'static str, Box<dyn ExpressionFactoryTrait>>,
}

impl ExpressionRegistry {
	#[must_use]
	pub fn new_empty() -> Self {
		ExpressionRegistry {
			factories: HashMap::new(),
		}
	}

	/// A registry with every built-in operator.
	#[must_use]
	pub fn new_default() -> Self {
		let mut registry = ExpressionRegistry::new_empty();
		for factory in get_expression_factories() {
			registry.add_factory(factory);
		}
		registry
	}

	pub fn add_factory(&mut self, factory: Box<dyn ExpressionFactoryTrait>) {
		self.factories.insert(factory.operator(), factory);
	}

	#[must_use]
	pub fn get(&self, operator: &str) -> Option<&dyn ExpressionFactoryTrait> {
		self.factories.get(operator).map(|factory| &**factory)
	}

	/// Registered operator names, sorted.
	#[must_use]
	pub fn operators(&self) -> Vec<&'static str> {
		let mut names = self.factories.keys().copied().collect::<Vec<_>>();
		names.sort_unstable();
		names
	}
}

impl Default for ExpressionRegistry {
	fn default() -> Self {
		Self::new_default()
	}
}

pub fn get_expression_factories() -> Vec<Box<dyn ExpressionFactoryTrait>> {
	vec![Box::new(within::Factory {})]
}
