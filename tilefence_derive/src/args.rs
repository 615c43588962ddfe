use proc_macro2::TokenStream as TokenStream2;
use syn::{
	Token,
	parse::{self, Parse, ParseStream},
};

/// Arguments of `#[context(...)]`: an optional leading `move,` followed by `format!` arguments.
#[derive(Debug)]
pub struct ContextArgs {
	pub move_token: Option<Token![move]>,
	pub format_args: TokenStream2,
}

impl Parse for ContextArgs {
	fn parse(input: ParseStream<'_>) -> parse::Result<Self> {
		let move_token = if input.peek(Token![move]) {
			let token = input.parse()?;
			input.parse::<Token![,]>()?;
			Some(token)
		} else {
			None
		};
		Ok(Self {
			move_token,
			format_args: input.parse()?,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::ContextArgs;
	use syn::parse_str;

	#[test]
	fn plain_message() {
		let args: ContextArgs = parse_str("\"while parsing\"").unwrap();
		assert!(args.move_token.is_none());
		assert_eq!(args.format_args.to_string(), "\"while parsing\"");
	}

	#[test]
	fn message_with_arguments() {
		let args: ContextArgs = parse_str("\"key {}\", key").unwrap();
		assert!(args.move_token.is_none());
		assert_eq!(args.format_args.to_string(), "\"key {}\" , key");
	}

	#[test]
	fn leading_move() {
		let args: ContextArgs = parse_str("move, \"tile {}\", coord").unwrap();
		assert!(args.move_token.is_some());
		assert_eq!(args.format_args.to_string(), "\"tile {}\" , coord");
	}

	#[test]
	fn move_without_comma_fails() {
		let err = parse_str::<ContextArgs>("move \"text\"").unwrap_err();
		assert!(err.to_string().contains(','), "unexpected error: {err}");
	}
}
