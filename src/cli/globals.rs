use crate::api::ApiConfig;
use clap::{builder::PossibleValue, ValueEnum};

/// How results are written to the terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl ValueEnum for OutputFormat {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Text, Self::Json]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Self::Text => PossibleValue::new("text").help("Human-readable line"),
            Self::Json => PossibleValue::new("json").help("Result serialized as JSON"),
        })
    }
}

/// Options shared by every subcommand.
#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub api: ApiConfig,
    pub output: OutputFormat,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(api: ApiConfig) -> Self {
        Self {
            api,
            output: OutputFormat::default(),
        }
    }

    pub fn set_output(&mut self, output: OutputFormat) {
        self.output = output;
    }
}
