use crate::error::Result;
use crate::output::Output;
use crate::util::marker_line;
use crate::{Context, Outcome};
use clap::Args;
use gmncheck::{good_character_positions, validate, Mode};

#[derive(Args)]
/// Internal struct.
pub struct CmdArgs {
    /// GMN to inspect.
    #[arg(allow_hyphen_values = true)]
    pub input: String,

    /// Treat the last two characters as the check character pair.
    #[arg(long)]
    pub complete: bool,
}

/// Internal helper function.
pub fn run(ctx: &Context, args: &CmdArgs) -> Result<Outcome> {
    let mode = if args.complete {
        Mode::Complete
    } else {
        Mode::Partial
    };

    if let Err(err) = validate(&args.input, mode) {
        ctx.out.warn_diag(err);
    }

    let positions = good_character_positions(&args.input, mode);
    if positions.iter().all(|&ok| ok) {
        ctx.out
            .info_user("All characters are valid for their positions");
        return Ok(Outcome::Pass);
    }

    Output::result(&args.input);
    Output::result(marker_line(&positions));
    Ok(Outcome::Fail)
}
