//! A peeking iterator over an in-memory byte slice.
//!
//! Expressions and GeoJSON arrive as complete strings, so the iterator borrows
//! the input instead of pulling from a reader. Errors are formatted with the
//! current position and, in debug mode, a short window of the text just read.

use anyhow::{Error, anyhow};

const DEBUG_WINDOW_SIZE: usize = 16;

/// An iterator over bytes with one byte of lookahead.
pub struct ByteIterator<'a> {
	bytes: &'a [u8],
	position: usize,
	is_debug_enabled: bool,
}

impl<'a> ByteIterator<'a> {
	/// Creates an iterator over `bytes`. With `debug` enabled, errors include the preceding text.
	#[must_use]
	pub fn from_slice(bytes: &'a [u8], debug: bool) -> Self {
		ByteIterator {
			bytes,
			position: 0,
			is_debug_enabled: debug,
		}
	}

	/// Creates an iterator over the UTF-8 bytes of `text`.
	#[must_use]
	#[allow(clippy::should_implement_trait)]
	pub fn from_str(text: &'a str, debug: bool) -> Self {
		Self::from_slice(text.as_bytes(), debug)
	}

	/// Builds an error for the current position.
	#[must_use]
	pub fn format_error(&self, msg: &str) -> Error {
		if self.is_debug_enabled {
			let end = (self.position + 1).min(self.bytes.len());
			let start = end.saturating_sub(DEBUG_WINDOW_SIZE);
			let mut window = String::from_utf8_lossy(&self.bytes[start..end]).into_owned();
			if self.peek().is_none() {
				window.push_str("<EOF>");
			}
			anyhow!("{msg} at position {}: {window}", self.position)
		} else {
			anyhow!("{msg} at position {}", self.position)
		}
	}

	/// Index of the byte returned by the next [`peek`](Self::peek).
	#[inline]
	#[must_use]
	pub fn position(&self) -> usize {
		self.position
	}

	#[inline]
	#[must_use]
	pub fn peek(&self) -> Option<u8> {
		self.bytes.get(self.position).copied()
	}

	#[inline]
	pub fn advance(&mut self) {
		if self.position < self.bytes.len() {
			self.position += 1;
		}
	}

	/// Returns the current byte and moves past it.
	#[inline]
	pub fn consume(&mut self) -> Option<u8> {
		let byte = self.peek();
		self.advance();
		byte
	}

	/// Like [`consume`](Self::consume), but running out of input is an error.
	#[inline]
	pub fn expect_next_byte(&mut self) -> anyhow::Result<u8> {
		let byte = self.expect_peeked_byte()?;
		self.advance();
		Ok(byte)
	}

	/// Like [`peek`](Self::peek), but running out of input is an error.
	#[inline]
	pub fn expect_peeked_byte(&self) -> anyhow::Result<u8> {
		self.peek().ok_or_else(|| self.format_error("unexpected end"))
	}

	pub fn skip_whitespace(&mut self) {
		while let Some(byte) = self.peek() {
			if !byte.is_ascii_whitespace() {
				break;
			}
			self.advance();
		}
	}

	#[must_use]
	pub fn is_at_end(&self) -> bool {
		self.position >= self.bytes.len()
	}
}
