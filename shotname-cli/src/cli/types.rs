use clap::ValueEnum;

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

impl From<OutputFormat> for shotname_core::OutputFormat {
    fn from(arg: OutputFormat) -> Self {
        match arg {
            OutputFormat::Summary => Self::Summary,
            OutputFormat::Json => Self::Json,
        }
    }
}
