//! Enum command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Outcome of generating one or more code enums.
#[derive(Debug, Default)]
pub struct EnumReport {
    pub generated: Vec<GeneratedEnum>,
    pub failures: Vec<EnumFailure>,
}

#[derive(Debug)]
pub struct GeneratedEnum {
    pub code: String,
    pub path: PathBuf,
}

#[derive(Debug)]
pub struct EnumFailure {
    pub code: String,
    pub message: String,
}

impl EnumReport {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

impl Report for EnumReport {
    fn render(&self, out: &mut dyn Output) {
        if self.generated.is_empty() && self.failures.is_empty() {
            out.preformatted("No code selected");
            return;
        }

        for failure in &self.failures {
            out.warning(&format!("{}: {}", failure.code, failure.message));
        }

        if !self.generated.is_empty() {
            out.section("Generated enums");
            for generated in &self.generated {
                out.added_item(&format!("{} ({})", generated.path.display(), generated.code));
            }
        }

        out.newline();
        out.key_value(
            "Summary",
            &format!(
                "{} succeeded, {} failed",
                self.generated.len(),
                self.failures.len()
            ),
        );
    }
}
