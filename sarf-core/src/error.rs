use crate::params::{ConjugationParameters, Dialect, Stem};
use crate::root::Root;
use thiserror::Error;

/// Errors raised by root parsing, rendering, configuration and generation.
///
/// Every variant is terminal for the call that raised it: generation is
/// deterministic, so a retry reproduces the same error.
#[derive(Debug, Error)]
pub enum SarfError {
    #[error("stem {stem} is not modelled for dialect {dialect}")]
    UnsupportedStem { stem: Stem, dialect: Dialect },

    #[error("stem I requires a Stem1Context")]
    MissingStem1Context,

    #[error("a root of {radicals} radicals does not fit {}", describe_stem(.stem))]
    InvalidRootArity { radicals: usize, stem: Option<Stem> },

    #[error("no rule covers root {root} with {params}")]
    UnhandledMorphology {
        root: Root,
        params: ConjugationParameters,
    },

    #[error("invalid parameters: {reason}")]
    InvalidParameters { reason: String },

    #[error("'{0}' is not a supported Arabic letter")]
    InvalidLetter(char),

    #[error("'{0}' has no Buckwalter mapping")]
    InvalidBuckwalter(char),

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl SarfError {
    pub fn invalid_parameters(reason: impl Into<String>) -> Self {
        SarfError::InvalidParameters {
            reason: reason.into(),
        }
    }
}

fn describe_stem(stem: &Option<Stem>) -> String {
    match stem {
        Some(stem) => format!("stem {stem}"),
        None => "any stem".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, SarfError>;
