use freqstat_stats::DataKind;

use crate::command::{ReportArg, ungrouped::ObservationArg};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct BinnedArg {
    #[clap(flatten)]
    data: ObservationArg,
    #[clap(flatten)]
    pub(super) report: ReportArg,
}

pub(crate) fn run(arg: &BinnedArg) -> anyhow::Result<()> {
    let context = arg.data.load(DataKind::Binned)?;
    arg.report.emit(&context)
}
