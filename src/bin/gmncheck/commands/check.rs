use crate::error::Result;
use crate::output::Output;
use crate::{Context, Outcome};
use clap::Args;
use gmncheck::{check_characters, check_characters_for};

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
    let pair = match args.company_prefix.as_deref() {
        Some(prefix) => {
            ctx.out.info_diag(format!(
                "company prefix {prefix}, model reference {}",
                args.part
            ));
            check_characters_for(prefix, &args.part)?
        }
        None => {
            ctx.out.info_diag(format!(
                "partial GMN {} ({} characters)",
                args.part,
                args.part.chars().count()
            ));
            check_characters(&args.part)?
        }
    };

    Output::result(pair);
    Ok(Outcome::Pass)
}
