use crate::error::Result;
use crate::util::split_trailing_pair;
use crate::{Context, Outcome};
use clap::Args;
use gmncheck::{verify_check_characters, verify_check_characters_for};

#[derive(Args)]
/// Internal struct.
pub struct CmdArgs {
    /// Complete GMN (or model reference + check pair with --company-prefix).
    #[arg(allow_hyphen_values = true)]
    pub gmn: String,

    /// GS1 Company Prefix (5-12 digits) supplied separately.
    #[arg(long, value_name = "DIGITS")]
    pub company_prefix: Option<String>,
}

/// Internal helper function.
pub fn run(ctx: &Context, args: &CmdArgs) -> Result<Outcome> {
    let valid = match args.company_prefix.as_deref() {
        Some(prefix) => {
            let (model_reference, check_pair) = split_trailing_pair(&args.gmn);
            ctx.out.info_diag(format!(
                "company prefix {prefix}, model reference {model_reference}, check pair {check_pair}"
            ));
            verify_check_characters_for(prefix, model_reference, check_pair)?
        }
        None => verify_check_characters(&args.gmn)?,
    };

    if valid {
        ctx.out.info_user("The check characters are valid");
        Ok(Outcome::Pass)
    } else {
        ctx.out.info_user("The check characters are NOT valid");
        Ok(Outcome::Fail)
    }
}
