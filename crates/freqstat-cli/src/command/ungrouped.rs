use std::path::PathBuf;

use anyhow::Context as _;
use freqstat_stats::{AnalysisContext, DataKind};

use crate::{command::ReportArg, util};

/// Raw observations given on the command line, in a file, or on stdin.
#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ObservationArg {
    /// Observations separated by spaces, commas or semicolons
    #[arg(allow_negative_numbers = true)]
    values: Vec<String>,

    /// Read observations from this text file
    #[arg(long)]
    input: Option<PathBuf>,
}

impl ObservationArg {
    /// Builds a context of the given kind holding the observations.
    pub(crate) fn load(&self, kind: DataKind) -> anyhow::Result<AnalysisContext> {
        let text = util::read_observation_text(&self.values, self.input.as_deref())?;
        let mut context = AnalysisContext::new(kind);
        context
            .push_text(&text)
            .context("Failed to parse observations")?;
        log::info!("Loaded {} observations", context.values().len());
        Ok(context)
    }
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct UngroupedArg {
    #[clap(flatten)]
    data: ObservationArg,
    #[clap(flatten)]
    report: ReportArg,
}

pub(crate) fn run(arg: &UngroupedArg) -> anyhow::Result<()> {
    let context = arg.data.load(DataKind::Ungrouped)?;
    arg.report.emit(&context)
}
