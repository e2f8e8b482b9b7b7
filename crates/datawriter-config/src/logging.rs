use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Output formats accepted for the writer's event log.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LogFormat {
    /// One flattened JSON object per event.
    #[default]
    Json,
    /// Single-line human readable events.
    Compact,
}

/// Error returned when a [`LogFormat`] cannot be parsed.
pub type LogFormatParseError = strum::ParseError;
