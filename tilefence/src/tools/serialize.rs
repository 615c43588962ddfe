use super::parse_expression_arg;
use anyhow::Result;
use clap::Args;

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// expression as JSON, or @path to a file containing it
	#[arg(required = true, allow_hyphen_values = true)]
	expression: String,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let expression = parse_expression_arg(&arguments.expression)?;
	println!("{}", expression.serialize().stringify());
	Ok(())
}
