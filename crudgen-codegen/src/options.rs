/// Literal tokens the generated code leaves for manual completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Package prefix of the entity in `resultType`.
    pub package_placeholder: String,
    /// Mapper namespace and query parameter type.
    pub type_placeholder: String,
    /// Base class holding the audit columns.
    pub audit_base_class: String,
    /// Fully qualified import of the base class, if any.
    pub audit_base_import: Option<String>,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            package_placeholder: "CHANGE_THIS_PACKAGE".to_string(),
            type_placeholder: "FILL_THIS_TYPE".to_string(),
            audit_base_class: "AuditColumns".to_string(),
            audit_base_import: Some("CHANGE_THIS_PACKAGE.AuditColumns".to_string()),
        }
    }
}
