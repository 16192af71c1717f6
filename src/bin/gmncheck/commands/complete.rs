use crate::error::Result;
use crate::output::Output;
use crate::{Context, Outcome};
use clap::Args;
use gmncheck::{add_check_characters, add_check_characters_for};

#[derive(Args)]
/// Internal struct.
pub struct CmdArgs {
    /// Partial GMN (or model reference with --company-prefix).
    #[arg(allow_hyphen_values = true)]
    pub part: String,

    /// GS1 Company Prefix (5-12 digits) supplied separately.
    #[arg(long, value_name = "DIGITS")]
    pub company_prefix: Option<String>,
}

/// Internal helper function.
pub fn run(ctx: &Context, args: &CmdArgs) -> Result<Outcome> {
    let gmn = match args.company_prefix.as_deref() {
        Some(prefix) => add_check_characters_for(prefix, &args.part)?,
        None => add_check_characters(&args.part)?,
    };

    ctx.out
        .info_diag(format!("complete GMN has {} characters", gmn.chars().count()));
    Output::result(gmn);
    Ok(Outcome::Pass)
}
