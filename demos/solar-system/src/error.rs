//! Body catalog error types.

/// Errors that can occur when loading or validating a body catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog JSON could not be parsed.
    #[error("failed to parse body catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two bodies of the same category share a name.
    #[error("duplicate {category} name `{name}`")]
    DuplicateName { category: &'static str, name: String },

    /// A numeric field is out of its allowed range.
    #[error("{name}: {field} must be {requirement}, got {value}")]
    InvalidValue {
        name: String,
        field: &'static str,
        requirement: &'static str,
        value: f64,
    },

    /// A min/max pair of the asteroid belt is inverted.
    #[error("asteroid belt: {field} range is inverted ({min} > {max})")]
    InvertedRange { field: &'static str, min: f64, max: f64 },
}
