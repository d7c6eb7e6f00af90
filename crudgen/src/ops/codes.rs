//! Codes operation - list the code table.

use crudgen_schema::{CodeReader, CodeSource};

use crate::reports::CodesReport;

pub fn codes<S: CodeSource + ?Sized>(source: &mut S) -> crudgen_schema::Result<CodesReport> {
    let codes = CodeReader::new(source).list_codes()?;
    Ok(CodesReport { codes })
}

#[cfg(test)]
mod tests {
    use crudgen_core::{CodeGroup, CodeItem};
    use crudgen_schema::InMemorySource;

    use super::*;
    use crate::reports::{RecordingOutput, Report};

    fn group(code: &str, name: &str, description: Option<&str>) -> CodeGroup {
        CodeGroup {
            code: code.to_string(),
            name: name.to_string(),
            description: description.map(String::from),
        }
    }

    #[test]
    fn test_codes_listed_in_order() {
        let item = CodeItem {
            key: "Y".to_string(),
            value: "Yes".to_string(),
            sort_order: 1,
        };
        let mut source = InMemorySource::new()
            .with_code(group("YN", "Yes/No", None), vec![item.clone()])
            .with_code(group("PAY_TYPE", "Payment", Some("How an order is paid")), vec![item]);

        let report = codes(&mut source).unwrap();
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "Codes (2):".to_string(),
                "- PAY_TYPE Payment - How an order is paid".to_string(),
                "- YN Yes/No".to_string(),
            ]
        );
    }

    #[test]
    fn test_no_codes() {
        let report = codes(&mut InMemorySource::new()).unwrap();
        let mut out = RecordingOutput::default();
        report.render(&mut out);
        assert_eq!(out.lines, vec!["No codes defined".to_string()]);
    }
}
