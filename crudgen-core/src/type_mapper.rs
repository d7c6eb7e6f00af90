//! Type mapping between database column types and Java types.

use std::{collections::HashMap, fmt, sync::LazyLock};

use serde::{Serialize, Serializer};

/// Java type a database column resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetType {
    Integer,
    Long,
    Float,
    Double,
    BigDecimal,
    String,
    LocalDate,
    LocalDateTime,
    LocalTime,
    Boolean,
    /// Fallback for anything the tables do not know.
    Object,
}

impl TargetType {
    /// Fully qualified Java type name (e.g. `java.lang.Long`).
    pub fn qualified_name(&self) -> &'static str {
        match self {
            TargetType::Integer => "java.lang.Integer",
            TargetType::Long => "java.lang.Long",
            TargetType::Float => "java.lang.Float",
            TargetType::Double => "java.lang.Double",
            TargetType::BigDecimal => "java.math.BigDecimal",
            TargetType::String => "java.lang.String",
            TargetType::LocalDate => "java.time.LocalDate",
            TargetType::LocalDateTime => "java.time.LocalDateTime",
            TargetType::LocalTime => "java.time.LocalTime",
            TargetType::Boolean => "java.lang.Boolean",
            TargetType::Object => "java.lang.Object",
        }
    }

    /// Name used in a field declaration.
    ///
    /// `java.lang` types are implicitly imported and use the simple name;
    /// `java.time` and `java.math` types keep the qualified name so the
    /// generated class needs no extra imports.
    pub fn declaration_name(&self) -> &'static str {
        let qualified = self.qualified_name();
        match qualified.strip_prefix("java.lang.") {
            Some(simple) => simple,
            None => qualified,
        }
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.qualified_name())
    }
}

impl Serialize for TargetType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.qualified_name())
    }
}

/// Prefix table for full `COLUMN_TYPE` strings, in priority order.
///
/// Order matters: longer types must come before the shorter prefixes they
/// start with (`bigint` before `int`, `datetime` before `date`,
/// `timestamp` before `time`).
static COLUMN_TYPE_PREFIXES: &[(&str, TargetType)] = &[
    ("tinyint", TargetType::Boolean),
    ("smallint", TargetType::Integer),
    ("mediumint", TargetType::Integer),
    ("bigint", TargetType::Long),
    ("int", TargetType::Integer),
    ("float", TargetType::Float),
    ("double", TargetType::Double),
    ("decimal", TargetType::BigDecimal),
    ("numeric", TargetType::BigDecimal),
    ("varchar", TargetType::String),
    ("char", TargetType::String),
    ("datetime", TargetType::LocalDateTime),
    ("date", TargetType::LocalDate),
    ("timestamp", TargetType::LocalDateTime),
    ("time", TargetType::LocalTime),
    ("longtext", TargetType::String),
    ("mediumtext", TargetType::String),
    ("tinytext", TargetType::String),
    ("text", TargetType::String),
    ("longblob", TargetType::String),
    ("mediumblob", TargetType::String),
    ("tinyblob", TargetType::String),
    ("blob", TargetType::String),
    ("binary", TargetType::String),
    ("varbinary", TargetType::String),
    ("enum", TargetType::String),
    ("set", TargetType::String),
    ("bool", TargetType::Boolean),
    ("bit", TargetType::Boolean),
];

/// Coarse table keyed on the bare `DATA_TYPE` name.
static BASE_TYPES: LazyLock<HashMap<&'static str, TargetType>> = LazyLock::new(|| {
    HashMap::from([
        ("int", TargetType::Integer),
        ("integer", TargetType::Integer),
        ("bigint", TargetType::Long),
        ("smallint", TargetType::Integer),
        ("tinyint", TargetType::Boolean),
        ("mediumint", TargetType::Integer),
        ("decimal", TargetType::BigDecimal),
        ("numeric", TargetType::BigDecimal),
        ("float", TargetType::Float),
        ("double", TargetType::Double),
        ("real", TargetType::Float),
        ("varchar", TargetType::String),
        ("char", TargetType::String),
        ("text", TargetType::String),
        ("longtext", TargetType::String),
        ("mediumtext", TargetType::String),
        ("tinytext", TargetType::String),
        ("enum", TargetType::String),
        ("set", TargetType::String),
        ("date", TargetType::LocalDate),
        ("datetime", TargetType::LocalDateTime),
        ("timestamp", TargetType::LocalDateTime),
        ("time", TargetType::LocalTime),
        ("boolean", TargetType::Boolean),
        ("bit", TargetType::Boolean),
        ("bool", TargetType::Boolean),
        ("blob", TargetType::String),
        ("tinyblob", TargetType::String),
        ("mediumblob", TargetType::String),
        ("longblob", TargetType::String),
        ("binary", TargetType::String),
        ("varbinary", TargetType::String),
    ])
});

/// Resolve a full column type declaration (e.g. `bigint(20) unsigned`).
///
/// The first matching prefix wins; unknown types map to
/// [`TargetType::Object`].
pub fn resolve_type(raw_column_type: &str) -> TargetType {
    let lowered = raw_column_type.to_lowercase();
    COLUMN_TYPE_PREFIXES
        .iter()
        .find(|(prefix, _)| lowered.starts_with(prefix))
        .map(|(_, ty)| *ty)
        .unwrap_or(TargetType::Object)
}

/// Resolve a bare data type name, ignoring any `(size)` suffix.
pub fn resolve_base_type(data_type: &str) -> Option<TargetType> {
    let lowered = data_type.to_lowercase();
    let base = match lowered.find('(') {
        Some(open) => {
            let close = lowered[open..]
                .find(')')
                .map(|i| open + i + 1)
                .unwrap_or(lowered.len());
            format!("{}{}", &lowered[..open], &lowered[close..])
        }
        None => lowered,
    };
    BASE_TYPES.get(base.trim()).copied()
}

/// Resolve a column from both its `COLUMN_TYPE` and `DATA_TYPE`.
///
/// The precise prefix match runs first; the coarse table catches aliases
/// the prefix table does not list.
pub fn resolve_column_type(column_type: &str, data_type: &str) -> TargetType {
    match resolve_type(column_type) {
        TargetType::Object => resolve_base_type(data_type).unwrap_or(TargetType::Object),
        resolved => resolved,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_depends_on_prefix_only() {
        assert_eq!(resolve_type("varchar(255)"), resolve_type("varchar(1)"));
        assert_eq!(resolve_type("decimal(10,2)"), TargetType::BigDecimal);
        assert_eq!(resolve_type("VARCHAR(20)"), TargetType::String);
    }

    #[test]
    fn test_prefix_priority() {
        assert_eq!(resolve_type("bigint(20)"), TargetType::Long);
        assert_eq!(resolve_type("int(11)"), TargetType::Integer);
        assert_eq!(resolve_type("datetime"), TargetType::LocalDateTime);
        assert_eq!(resolve_type("date"), TargetType::LocalDate);
        assert_eq!(resolve_type("timestamp"), TargetType::LocalDateTime);
        assert_eq!(resolve_type("time"), TargetType::LocalTime);
        assert_eq!(resolve_type("longtext"), TargetType::String);
        assert_eq!(resolve_type("varbinary(16)"), TargetType::String);
    }

    #[test]
    fn test_tinyint_is_boolean_regardless_of_width() {
        assert_eq!(resolve_type("tinyint(1)"), TargetType::Boolean);
        assert_eq!(resolve_type("tinyint(4)"), TargetType::Boolean);
    }

    #[test]
    fn test_unknown_falls_back_to_object() {
        assert_eq!(resolve_type("geometry"), TargetType::Object);
        assert_eq!(resolve_type(""), TargetType::Object);
    }

    #[test]
    fn test_resolve_base_type() {
        assert_eq!(resolve_base_type("integer"), Some(TargetType::Integer));
        assert_eq!(resolve_base_type("REAL"), Some(TargetType::Float));
        assert_eq!(resolve_base_type("varchar(32)"), Some(TargetType::String));
        assert_eq!(resolve_base_type("json"), None);
    }

    #[test]
    fn test_resolve_column_type_falls_back_to_base_table() {
        assert_eq!(resolve_column_type("real", "real"), TargetType::Float);
        assert_eq!(resolve_column_type("bigint(20)", "bigint"), TargetType::Long);
        assert_eq!(resolve_column_type("json", "json"), TargetType::Object);
    }

    #[test]
    fn test_declaration_name() {
        assert_eq!(TargetType::Long.declaration_name(), "Long");
        assert_eq!(TargetType::String.declaration_name(), "String");
        assert_eq!(
            TargetType::LocalDateTime.declaration_name(),
            "java.time.LocalDateTime"
        );
        assert_eq!(
            TargetType::BigDecimal.declaration_name(),
            "java.math.BigDecimal"
        );
    }
}
