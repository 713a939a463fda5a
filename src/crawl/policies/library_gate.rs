use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct CycloneDxDocument {
    components: Vec<CycloneDxComponent>,
}

#[derive(Debug, Deserialize)]
struct CycloneDxComponent {
    /// Kept untyped so one malformed entry does not reject the whole document
    #[serde(rename = "type", default)]
    component_type: serde_json::Value,
}

/// Quality gate deciding whether a scan result is worth keeping
///
/// A CycloneDX JSON document passes when it parses and its `components` list
/// holds at least one entry of type `library`. The verdict applies to every
/// format generated for the same target.
pub struct LibraryComponentGate;

impl LibraryComponentGate {
    pub fn is_valid(cyclonedx_json: &str) -> bool {
        match serde_json::from_str::<CycloneDxDocument>(cyclonedx_json) {
            Ok(document) => document
                .components
                .iter()
                .any(|c| c.component_type.as_str() == Some("library")),
            Err(_) => false,
        }
    }
}
