use crate::domain::{
    entities::{ProjectManifest, ProjectName},
    error::DomainError,
};

/// Centralized domain validation.
///
/// `tea new` checks the project name here before prompting for anything
/// else; the manifest reader re-checks manifests after deserialization.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_name(raw: &str) -> Result<ProjectName, DomainError> {
        ProjectName::parse(raw)
    }

    pub fn validate_manifest(manifest: &ProjectManifest) -> Result<(), DomainError> {
        manifest.validate()
    }
}
