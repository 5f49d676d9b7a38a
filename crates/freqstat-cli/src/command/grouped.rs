use std::path::PathBuf;

use anyhow::Context as _;
use freqstat_stats::{AnalysisContext, DataKind, input, interval::ClassInterval};

use crate::{command::ReportArg, util};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct GroupedArg {
    /// Class interval as `LOWER-UPPER:FREQUENCY` (repeatable), e.g. `--class 10-20:5`
    /// or `--class -10--5:3`
    #[arg(
        long = "class",
        value_name = "L-U:F",
        allow_hyphen_values = true,
        value_parser = input::parse_class_interval
    )]
    pub(super) classes: Vec<ClassInterval>,

    /// Read class intervals from a JSON file
    /// (`[{"lower_bound": 10, "upper_bound": 20, "frequency": 5}, ...]`)
    #[arg(long)]
    input: Option<PathBuf>,

    #[clap(flatten)]
    report: ReportArg,
}

pub(crate) fn run(arg: &GroupedArg) -> anyhow::Result<()> {
    let mut intervals = arg.classes.clone();
    if let Some(path) = &arg.input {
        let loaded: Vec<ClassInterval> = util::read_json_file("class interval", path)?;
        log::info!("Loaded {} class intervals from {}", loaded.len(), path.display());
        intervals.extend(loaded);
    }
    if intervals.is_empty() {
        anyhow::bail!("No class intervals given; use --class or --input");
    }

    let mut context = AnalysisContext::new(DataKind::Grouped);
    for interval in intervals {
        context.add_interval(interval).with_context(|| {
            format!(
                "Rejected class interval {} - {} (frequency {})",
                interval.lower_bound, interval.upper_bound, interval.frequency
            )
        })?;
    }
    arg.report.emit(&context)
}
