//! Java mapper interface mirroring the statements of the mapper XML.

use crudgen_core::TableDescriptor;
use indexmap::IndexSet;

use crate::{
    DegradationReason, GenerationResult, GeneratorOptions,
    builder::{CodeBuilder, CodeFragment},
};

pub struct MapperInterface<'a> {
    table: &'a TableDescriptor,
    options: &'a GeneratorOptions,
}

impl<'a> MapperInterface<'a> {
    pub fn new(table: &'a TableDescriptor, options: &'a GeneratorOptions) -> Self {
        Self { table, options }
    }

    /// Render the interface with one method per generated statement.
    pub fn render(&self) -> GenerationResult<String> {
        let table = &self.table.table_name;
        let entity = self.table.entity_class_name();
        let params = &self.options.type_placeholder;
        let has_key = self.table.has_primary_key();
        let has_update = has_key && self.table.has_update_audit_columns();

        let mut reasons = IndexSet::new();
        if !self.table.has_update_audit_columns() {
            reasons.insert(DegradationReason::NoUpdateAuditColumns);
        }
        if !has_key {
            reasons.insert(DegradationReason::NoPrimaryKey);
        }

        let mut methods = vec![method(
            format!("Insert one {} row.", table),
            "@param entity row to insert",
            "@return number of inserted rows",
            format!("int insert({} entity);", entity),
        )];
        if has_update {
            methods.push(method(
                format!("Update one {} row by primary key, skipping null fields.", table),
                "@param entity row values",
                "@return number of updated rows",
                format!("int update({} entity);", entity),
            ));
        }
        if has_key {
            methods.push(method(
                format!("Delete {} rows by primary key.", table),
                "@param params key values",
                "@return number of deleted rows",
                format!("int delete({} params);", params),
            ));
            methods.push(method(
                format!("Select one {} row by primary key (no joins).", table),
                "@param params key values",
                "@return the row, or null",
                format!("{} getByPk({} params);", entity, params),
            ));
            methods.push(method(
                format!("Select {} rows matching the given keys (no joins).", table),
                "@param params search conditions",
                "@return matching rows",
                format!("List<{}> search({} params);", entity, params),
            ));
        }

        let mut builder = CodeBuilder::new()
            .when(has_key, |b| b.line("import java.util.List;").blank())
            .line("/**")
            .line(&format!(" * MyBatis mapper for table {}", table))
            .line(" */")
            .line(&format!("public interface {} {{", self.table.mapper_name()))
            .indent();
        for (i, m) in methods.into_iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            builder.apply_fragment(m);
        }
        let code = builder.dedent().line("}").build();

        GenerationResult::new(code, reasons)
    }
}

fn method(summary: String, param: &str, returns: &str, signature: String) -> CodeFragment {
    CodeFragment::Sequence(vec![
        CodeFragment::javadoc([summary, String::new(), param.to_string(), returns.to_string()]),
        CodeFragment::Line(signature),
    ])
}

#[cfg(test)]
mod tests {
    use crudgen_core::{ColumnDescriptor, TargetType};

    use super::*;

    fn column(name: &str, pk: bool) -> ColumnDescriptor {
        ColumnDescriptor {
            source_name: name.to_string(),
            target_name: name.to_string(),
            target_type: TargetType::Long,
            nullable: !pk,
            is_primary_key: pk,
            is_auto_increment: pk,
            comment: String::new(),
            default_value: None,
            raw_column_type: "bigint(20)".to_string(),
        }
    }

    fn render(columns: Vec<ColumnDescriptor>) -> GenerationResult<String> {
        let table = TableDescriptor {
            table_name: "app_push".to_string(),
            columns,
            table_comment: String::new(),
        };
        MapperInterface::new(&table, &GeneratorOptions::default()).render()
    }

    #[test]
    fn test_full_interface() {
        let result = render(vec![
            column("id", true),
            column("updater", false),
            column("updateDt", false),
        ]);
        assert!(!result.is_degraded());
        let code = result.value();
        assert!(code.starts_with("import java.util.List;\n\n/**\n"));
        assert!(code.contains("public interface AppPushMapper {"));
        assert!(code.contains("    int insert(AppPushEntity entity);"));
        assert!(code.contains("    int update(AppPushEntity entity);"));
        assert!(code.contains("    int delete(FILL_THIS_TYPE params);"));
        assert!(code.contains("    AppPushEntity getByPk(FILL_THIS_TYPE params);"));
        assert!(code.contains("    List<AppPushEntity> search(FILL_THIS_TYPE params);"));
        assert!(code.ends_with("}\n"));
    }

    #[test]
    fn test_without_audit_columns_has_no_update() {
        let result = render(vec![column("id", true)]);
        assert_eq!(
            result.reasons().copied().collect::<Vec<_>>(),
            [DegradationReason::NoUpdateAuditColumns]
        );
        assert!(!result.value().contains("update("));
        assert!(result.value().contains("delete("));
    }

    #[test]
    fn test_without_key_only_insert() {
        let result = render(vec![
            column("updater", false),
            column("updateDt", false),
        ]);
        let code = result.value();
        assert!(code.contains("int insert("));
        assert!(!code.contains("update("));
        assert!(!code.contains("getByPk("));
        assert!(!code.contains("import java.util.List;"));
    }
}
