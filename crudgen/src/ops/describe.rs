//! Describe operation - resolved table metadata.

use crudgen_schema::{SchemaReader, SchemaSource};

use crate::reports::DescribeReport;

pub fn describe<S: SchemaSource + ?Sized>(
    source: &mut S,
    table: &str,
) -> crudgen_schema::Result<DescribeReport> {
    let table = SchemaReader::new(source).fetch_table_metadata(table)?;
    Ok(DescribeReport { table })
}

#[cfg(test)]
mod tests {
    use crudgen_core::RawColumn;
    use crudgen_schema::{Error, InMemorySource};

    use super::*;
    use crate::reports::{RecordingOutput, Report};

    fn source() -> InMemorySource {
        InMemorySource::new().with_table(
            "member_role",
            "Role grants",
            vec![
                RawColumn::new("member_id", "bigint(20)").primary_key(),
                RawColumn::new("role_id", "int(11)").primary_key(),
                RawColumn::new("granted_dt", "datetime").comment("Grant time"),
            ],
        )
    }

    #[test]
    fn test_describe_renders_columns() {
        let report = describe(&mut source(), "member_role").unwrap();

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(out.lines[0], "# member_role");
        assert!(out.lines.contains(&"Comment: Role grants".to_string()));
        assert!(out.lines.contains(&"Entity: MemberRoleEntity".to_string()));
        assert!(out.lines.contains(&"Columns (3):".to_string()));
        assert!(
            out.lines
                .iter()
                .any(|l| l.starts_with("- member_id -> memberId: ") && l.contains("[PK]"))
        );
        assert!(out.lines.iter().any(|l| l.ends_with(" - Grant time")));
        assert!(
            out.lines
                .contains(&"warning: no updater/updateDt columns, update will not be generated".to_string())
        );
    }

    #[test]
    fn test_describe_json() {
        let report = describe(&mut source(), "member_role").unwrap();
        let json: serde_json::Value = serde_json::to_value(&report.table).unwrap();

        assert_eq!(json["table_name"], "member_role");
        assert_eq!(json["columns"][1]["target_name"], "roleId");
        assert_eq!(json["columns"][1]["is_primary_key"], true);
    }

    #[test]
    fn test_describe_unknown_table() {
        let err = describe(&mut source(), "member").unwrap_err();
        match *err {
            Error::TableNotFound {
                ref suggestions, ..
            } => assert_eq!(suggestions, &vec!["member_role".to_string()]),
            _ => panic!("Expected TableNotFound"),
        }
    }
}
