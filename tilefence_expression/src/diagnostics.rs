use parking_lot::Mutex;

/// Receiver of non-fatal notices raised while evaluating expressions.
pub trait Diagnostics: Send + Sync {
	fn warn(&self, message: &str);
}

/// Forwards every notice to [`log::warn!`].
#[derive(Clone, Copy, Debug, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
	fn warn(&self, message: &str) {
		log::warn!("{message}");
	}
}

/// Keeps every notice in memory, e.g. to report them after a batch of evaluations.
#[derive(Debug, Default)]
pub struct CollectedDiagnostics {
	messages: Mutex<Vec<String>>,
}

impl CollectedDiagnostics {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn messages(&self) -> Vec<String> {
		self.messages.lock().clone()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.messages.lock().len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.messages.lock().is_empty()
	}

	/// Removes and returns all notices collected so far.
	pub fn take(&self) -> Vec<String> {
		std::mem::take(&mut *self.messages.lock())
	}
}

impl Diagnostics for CollectedDiagnostics {
	fn warn(&self, message: &str) {
		self.messages.lock().push(message.to_string());
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::thread;

	#[test]
	fn collects_in_order() {
		let diagnostics = CollectedDiagnostics::new();
		assert!(diagnostics.is_empty());
		diagnostics.warn("first");
		diagnostics.warn("second");
		assert_eq!(diagnostics.messages(), vec!["first", "second"]);
		assert_eq!(diagnostics.take(), vec!["first", "second"]);
		assert!(diagnostics.is_empty());
	}

	#[test]
	fn collects_across_threads() {
		let diagnostics = CollectedDiagnostics::new();
		thread::scope(|scope| {
			for i in 0..4 {
				let diagnostics = &diagnostics;
				scope.spawn(move || diagnostics.warn(&format!("thread {i}")));
			}
		});
		assert_eq!(diagnostics.len(), 4);
	}

	#[test]
	fn log_diagnostics_does_not_panic_without_logger() {
		LogDiagnostics.warn("nobody is listening");
	}
}
