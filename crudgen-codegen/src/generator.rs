use crudgen_core::TableDescriptor;
use indexmap::IndexSet;

use crate::{
    DegradationReason, FileKind, GeneratedArtifact, GenerationResult, GeneratorOptions,
    entity::EntityClass, interface::MapperInterface, mapper::MapperDocument,
};

/// The three artifacts generated for one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSet {
    pub mapper_xml: GenerationResult<GeneratedArtifact>,
    pub interface: GenerationResult<GeneratedArtifact>,
    pub entity: GenerationResult<GeneratedArtifact>,
}

impl GeneratedSet {
    /// Artifacts in emission order: mapper XML, interface, entity.
    pub fn artifacts(&self) -> [&GeneratedArtifact; 3] {
        [
            self.mapper_xml.value(),
            self.interface.value(),
            self.entity.value(),
        ]
    }

    pub fn into_artifacts(self) -> Vec<GeneratedArtifact> {
        vec![
            self.mapper_xml.into_value(),
            self.interface.into_value(),
            self.entity.into_value(),
        ]
    }

    /// Every distinct degradation across the set.
    pub fn degradations(&self) -> IndexSet<DegradationReason> {
        self.mapper_xml
            .reasons()
            .chain(self.interface.reasons())
            .chain(self.entity.reasons())
            .copied()
            .collect()
    }
}

/// Generates mapper XML, mapper interface and entity class for a table.
///
/// Output depends only on the descriptor and options, so generating twice
/// yields identical content.
pub struct Generator<'a> {
    table: &'a TableDescriptor,
    options: &'a GeneratorOptions,
}

impl<'a> Generator<'a> {
    pub fn new(table: &'a TableDescriptor, options: &'a GeneratorOptions) -> Self {
        Self { table, options }
    }

    pub fn generate(&self) -> GeneratedSet {
        let mapper_name = self.table.mapper_name();
        let entity_name = self.table.entity_class_name();

        let set = GeneratedSet {
            mapper_xml: MapperDocument::new(self.table, self.options)
                .render()
                .map(|xml| GeneratedArtifact::new(FileKind::Mapper, &mapper_name, xml)),
            interface: MapperInterface::new(self.table, self.options)
                .render()
                .map(|code| GeneratedArtifact::new(FileKind::Interface, &mapper_name, code)),
            entity: GenerationResult::Complete(GeneratedArtifact::new(
                FileKind::Entity,
                entity_name,
                EntityClass::new(self.table, self.options).render(),
            )),
        };

        for reason in set.degradations() {
            log::warn!("{}: {}", self.table.table_name, reason);
        }
        set
    }
}
