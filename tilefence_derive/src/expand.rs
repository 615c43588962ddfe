use crate::args::ContextArgs;
use proc_macro2::{Ident, Span, TokenStream};
use quote::{ToTokens, quote};
use syn::ItemFn;

/// Rewrites `function` so that its body runs in a closure whose errors get
/// the context built from `args`.
pub fn expand_context(args: ContextArgs, mut function: ItemFn) -> TokenStream {
	if let Some(asyncness) = &function.sig.asyncness {
		return syn::Error::new_spanned(asyncness, "#[context] does not support async functions").to_compile_error();
	}

	let ContextArgs {
		move_token,
		format_args,
	} = args;
	let body = &function.block;
	let err = Ident::new("err", Span::mixed_site());
	let once = Ident::new("once", Span::mixed_site());
	let return_type = &function.sig.output;
	let wrapped = quote! {
		// Owning a non-Copy value forces the closure to be FnOnce.
		let #once = ::core::iter::empty::<()>();
		(#move_token || #return_type {
			::core::mem::drop(#once);
			#body
		})().map_err(|#err| #err.context(format!(#format_args)).into())
	};
	function.block.stmts = vec![syn::Stmt::Expr(syn::Expr::Verbatim(wrapped), None)];

	function.into_token_stream()
}
