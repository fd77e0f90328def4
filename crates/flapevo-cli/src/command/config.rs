use std::path::PathBuf;

use flapevo_training::config::EvolutionConfig;

use crate::util::Output;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct ConfigArg {
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &ConfigArg) -> anyhow::Result<()> {
    Output::save_json(&EvolutionConfig::default(), arg.output.clone())
}
