use crate::error::Result;
use crate::output::Output;
use crate::util::read_input;
use crate::{Context, Outcome};
use clap::{Args, ValueEnum};
use gmncheck::{check_characters, verify_check_characters};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
/// Internal enum.
pub enum BatchMode {
    /// Each line is a partial GMN; print its check character pair.
    Complete,
    /// Each line is a complete GMN; print whether its check pair is valid.
    Verify,
}

#[derive(Args)]
/// Internal struct.
pub struct CmdArgs {
    /// File with one GMN per line, or `-` for stdin.
    pub input: String,

    /// What to do with each line.
    #[arg(long, value_enum)]
    pub mode: BatchMode,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
/// Internal struct.
struct LineRecord {
    /// Internal field.
    input: String,
    /// Check character pair (complete mode).
    output: Option<String>,
    /// Check result (verify mode).
    valid: Option<bool>,
    /// Error text when the line is malformed.
    error: Option<String>,
}

impl LineRecord {
    /// Text form used by the non-JSON output.
    fn summary(&self) -> String {
        match (&self.output, self.valid, &self.error) {
            (_, _, Some(err)) => err.clone(),
            (Some(pair), _, None) => pair.clone(),
            (None, Some(true), None) => "*** Valid ***".to_string(),
            (None, Some(false) | None, None) => "*** Not valid ***".to_string(),
        }
    }
}

/// Internal helper function.
pub fn run(ctx: &Context, args: &CmdArgs) -> Result<Outcome> {
    let text = read_input(&args.input)?;

    let records: Vec<LineRecord> = text
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| process_line(line, args.mode))
        .collect();

    let failed = records.iter().filter(|r| r.error.is_some()).count();
    ctx.out.info_diag(format!(
        "processed {} line(s), {failed} malformed",
        records.len()
    ));
    if records.is_empty() {
        ctx.out.warn_diag("input contains no GMN lines");
    }

    if args.json {
        Output::result(serde_json::to_string_pretty(&records)?);
        return Ok(Outcome::Pass);
    }

    for record in &records {
        Output::result(format!("{} : {}", record.input, record.summary()));
    }
    Ok(Outcome::Pass)
}

/// Run one line; format errors become part of the record.
fn process_line(line: &str, mode: BatchMode) -> LineRecord {
    let mut record = LineRecord {
        input: line.to_string(),
        output: None,
        valid: None,
        error: None,
    };

    match mode {
        BatchMode::Complete => match check_characters(line) {
            Ok(pair) => record.output = Some(pair),
            Err(err) => record.error = Some(err.to_string()),
        },
        BatchMode::Verify => match verify_check_characters(line) {
            Ok(valid) => record.valid = Some(valid),
            Err(err) => record.error = Some(err.to_string()),
        },
    }

    record
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_do_not_abort_other_lines() {
        let lines = ["12345A", "12345", "1987654Ad4X4bL5ttr2310c"];
        let summaries: Vec<String> = lines
            .iter()
            .map(|line| process_line(line, BatchMode::Complete).summary())
            .collect();
        assert_eq!(summaries[0], "NJ");
        assert!(summaries[1].starts_with("The input is too short"));
        assert_eq!(summaries[2], "2K");
    }

    #[test]
    fn verify_mode_summaries() {
        assert_eq!(
            process_line("12345ANJ", BatchMode::Verify).summary(),
            "*** Valid ***"
        );
        assert_eq!(
            process_line("12345ANK", BatchMode::Verify).summary(),
            "*** Not valid ***"
        );
    }
}
