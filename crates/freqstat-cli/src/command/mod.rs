use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use freqstat_stats::{Analysis, AnalysisContext, AnalysisOptions, VarianceMethod, round};

use crate::{report, util};

use self::{binned::BinnedArg, grouped::GroupedArg, ungrouped::UngroupedArg};

mod binned;
mod grouped;
mod ungrouped;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Increase log verbosity (-v: info, -vv: debug). `RUST_LOG` takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Kind of data to analyze
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Statistics of raw observations
    Ungrouped(#[clap(flatten)] UngroupedArg),
    /// Statistics of user-defined class intervals with frequencies
    Grouped(#[clap(flatten)] GroupedArg),
    /// Statistics of raw observations grouped with Sturges' Rule
    Binned(#[clap(flatten)] BinnedArg),
}

/// Options shared by every subcommand.
#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ReportArg {
    /// Variance formula: `deviations` (two-pass) or `shortcut` (product sums)
    #[arg(long, default_value = "deviations")]
    variance: VarianceMethod,

    /// Decimal places shown in the text report
    #[arg(long, default_value_t = round::DISPLAY_DECIMALS)]
    decimals: u32,

    /// Print the full-precision results as JSON instead of a text report
    #[arg(long)]
    json: bool,

    /// Write the JSON results to this file instead of stdout
    #[arg(long, requires = "json")]
    output: Option<PathBuf>,
}

impl ReportArg {
    fn options(&self) -> AnalysisOptions {
        AnalysisOptions {
            variance: self.variance,
        }
    }

    /// Analyzes the entered data and prints or saves the results.
    pub(crate) fn emit(&self, context: &AnalysisContext) -> anyhow::Result<()> {
        let analysis: Analysis = context.analyze(&self.options())?;
        log::info!(
            "Computed {:?} statistics with {:?} variance",
            analysis.kind(),
            self.variance
        );
        if self.json {
            util::save_json(&analysis, self.output.as_deref())
        } else {
            report::print_analysis(&analysis, self.decimals);
            Ok(())
        }
    }
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    init_logger(args.verbose);
    match args.mode {
        Mode::Ungrouped(arg) => ungrouped::run(&arg)?,
        Mode::Grouped(arg) => grouped::run(&arg)?,
        Mode::Binned(arg) => binned::run(&arg)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_definition() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_parse_grouped_with_options() {
        let args = CommandArgs::try_parse_from([
            "freqstat",
            "-vv",
            "grouped",
            "--class",
            "10-20:5",
            "--class=20-30:3",
            "--variance",
            "shortcut",
            "--decimals",
            "2",
        ])
        .unwrap();
        assert_eq!(args.verbose, 2);
        assert!(matches!(args.mode, Mode::Grouped(_)));
    }

    #[test]
    fn test_parse_negative_class_bounds() {
        let args = CommandArgs::try_parse_from([
            "freqstat", "grouped", "--class", "-10--5:3", "--class", "-5-5:2",
        ])
        .unwrap();
        let Mode::Grouped(arg) = args.mode else {
            panic!("expected grouped mode");
        };
        let bounds = arg
            .classes
            .iter()
            .map(|class| (class.lower_bound, class.upper_bound, class.frequency))
            .collect::<Vec<_>>();
        assert_eq!(bounds, [(-10.0, -5.0, 3), (-5.0, 5.0, 2)]);
    }

    #[test]
    fn test_parse_rejects_malformed_class() {
        assert!(CommandArgs::try_parse_from(["freqstat", "grouped", "--class", "10-20"]).is_err());
    }

    #[test]
    fn test_output_requires_json() {
        assert!(
            CommandArgs::try_parse_from(["freqstat", "ungrouped", "1", "2", "--output", "out.json"])
                .is_err()
        );
        assert!(
            CommandArgs::try_parse_from([
                "freqstat", "ungrouped", "1", "2", "--json", "--output", "out.json"
            ])
            .is_ok()
        );
    }

    #[test]
    fn test_report_options() {
        let args =
            CommandArgs::try_parse_from(["freqstat", "binned", "1", "2", "3", "--variance", "shortcut"])
                .unwrap();
        let Mode::Binned(arg) = args.mode else {
            panic!("expected binned mode");
        };
        assert_eq!(arg.report.options().variance, VarianceMethod::Shortcut);
        assert_eq!(arg.report.decimals, round::DISPLAY_DECIMALS);
    }
}
