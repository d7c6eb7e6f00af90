//! Codes command report.

use crudgen_core::CodeGroup;

use super::output::{Output, Report};

#[derive(Debug)]
pub struct CodesReport {
    pub codes: Vec<CodeGroup>,
}

impl Report for CodesReport {
    fn render(&self, out: &mut dyn Output) {
        if self.codes.is_empty() {
            out.preformatted("No codes defined");
            return;
        }

        out.section(&format!("Codes ({})", self.codes.len()));
        for group in &self.codes {
            let mut line = format!("{} {}", group.code, group.name);
            if let Some(description) = group.description.as_deref().filter(|d| !d.is_empty()) {
                line.push_str(&format!(" - {}", description));
            }
            out.list_item(&line);
        }
    }
}
