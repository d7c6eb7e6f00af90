//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod codes;
mod describe;
mod enums;
mod generate;
mod output;
mod ping;

pub use codes::CodesReport;
pub use describe::DescribeReport;
pub use enums::{EnumFailure, EnumReport, GeneratedEnum};
pub use generate::{
    ArtifactFile, GenerateOutcome, GenerateReport, PreviewFile, PreviewResult, WrittenResult,
};
#[cfg(test)]
pub use output::RecordingOutput;
pub use output::{Report, TerminalOutput};
pub use ping::PingReport;
