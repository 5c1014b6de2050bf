use crate::commands::JsonArgs;
use crate::common::decode_input;
use anyhow::Result;

pub(crate) fn palette_json(args: &JsonArgs) -> Result<()> {
	let decoded = decode_input(&args.input, args.mode)?;

	let json = if args.pretty {
		serde_json::to_string_pretty(&decoded.palette)?
	} else {
		serde_json::to_string(&decoded.palette)?
	};
	println!("{json}");

	Ok(())
}
