use crudgen_core::{CodeEnum, CodeGroup};

use crate::{CodeSource, Error, Result};

/// Reads the shared `code` / `code_item` tables.
pub struct CodeReader<'a, S: CodeSource + ?Sized> {
    source: &'a mut S,
}

impl<'a, S: CodeSource + ?Sized> CodeReader<'a, S> {
    pub fn new(source: &'a mut S) -> Self {
        Self { source }
    }

    pub fn list_codes(&mut self) -> Result<Vec<CodeGroup>> {
        self.source.list_codes()
    }

    /// Load a code group and its items, ordered by `sortOrder`.
    pub fn fetch_code_enum(&mut self, code: &str) -> Result<CodeEnum> {
        let group = self
            .source
            .fetch_code(code)?
            .ok_or_else(|| Box::new(Error::CodeNotFound { code: code.into() }))?;

        let items = self.source.fetch_code_items(code)?;
        if items.is_empty() {
            return Err(Box::new(Error::EmptyCode { code: code.into() }));
        }
        log::info!("Code '{}' has {} items", code, items.len());

        Ok(CodeEnum { group, items })
    }
}
