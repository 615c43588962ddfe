//! Procedural macros shared by the tilefence crates.
//!
//! The only macro is [`macro@context`], which wraps a function returning
//! `anyhow::Result` so that every error leaving it carries an additional
//! context line describing what the function was doing.

mod args;
mod expand;

use args::ContextArgs;
use proc_macro::TokenStream;
use syn::{ItemFn, parse_macro_input};

/// Adds `anyhow` context to every error returned by the annotated function.
///
/// ```ignore
/// #[context("while parsing ring {}", index)]
/// fn parse_ring(index: usize, value: &JsonValue) -> Result<RingGeometry> { ... }
/// ```
///
/// A leading `move,` moves captured arguments into the wrapping closure.
/// Only synchronous functions are supported.
#[proc_macro_attribute]
pub fn context(args: TokenStream, input: TokenStream) -> TokenStream {
	let args = parse_macro_input!(args as ContextArgs);
	let function = parse_macro_input!(input as ItemFn);
	expand::expand_context(args, function).into()
}
