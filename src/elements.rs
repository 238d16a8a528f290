//! Default element tree
//!
//! Elements every VIF document carries with a fixed value, such as the VIF
//! specification version and the editor identification. Each entry is an
//! [`ElementSpec`] that may hold text, attributes and nested children.

use crate::names::{
    APP_NAME, CERTIFICATION_TYPE, VALUE, VENDOR, VENDOR_NAME, VERSION, VIF_APP, VIF_PRODUCT_TYPE,
    VIF_SPECIFICATION,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// VIF specification version written into every document
pub const VIF_SPEC_VERSION: &str = "3.19";

/// Attribute mapping of an element
pub type AttributeMap = IndexMap<String, String>;

/// Child element mapping of an element
pub type ChildMap = IndexMap<String, ElementSpec>;

/// Default content of a single VIF element
///
/// Serializes to the `text` / `attributes` / `child` record shape, omitting
/// absent fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementSpec {
    /// Element text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Element attributes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<AttributeMap>,
    /// Nested child elements
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child: Option<ChildMap>,
}

impl ElementSpec {
    /// Create an empty element spec
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an element spec holding only text
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    /// Add an attribute
    pub fn attribute_value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes
            .get_or_insert_with(AttributeMap::new)
            .insert(name.into(), value.into());
        self
    }

    /// Add a child element
    pub fn with_child(mut self, name: impl Into<String>, child: ElementSpec) -> Self {
        self.child
            .get_or_insert_with(ChildMap::new)
            .insert(name.into(), child);
        self
    }

    /// Get the text
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Get an attribute value by name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .as_ref()
            .and_then(|attrs| attrs.get(name))
            .map(|s| s.as_str())
    }

    /// Get a child element by name
    pub fn child(&self, name: &str) -> Option<&ElementSpec> {
        self.child.as_ref().and_then(|children| children.get(name))
    }

    /// Iterate over the children in order
    pub fn children(&self) -> impl Iterator<Item = (&str, &ElementSpec)> {
        self.child
            .iter()
            .flat_map(|children| children.iter().map(|(k, v)| (k.as_str(), v)))
    }

    /// Visit every nested element depth-first, parents before children
    pub fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a str, &'a ElementSpec)) {
        for (name, child) in self.children() {
            visit(name, child);
            child.walk(visit);
        }
    }

    /// Convert to the JSON record shape
    pub fn to_json(&self) -> JsonValue {
        // Only string maps and options, which always serialize.
        serde_json::to_value(self).unwrap_or(JsonValue::Null)
    }
}

/// Build the hardcoded default element tree, in emission order
pub fn default_spec_elements() -> IndexMap<String, ElementSpec> {
    let mut elements = IndexMap::new();
    elements.insert(
        VIF_SPECIFICATION.to_string(),
        ElementSpec::with_text(VIF_SPEC_VERSION),
    );
    elements.insert(
        VIF_APP.to_string(),
        ElementSpec::new()
            .with_child(VENDOR, ElementSpec::with_text("USB-IF"))
            .with_child(APP_NAME, ElementSpec::with_text("VIF Editor"))
            .with_child(VERSION, ElementSpec::with_text("3.2.4.0")),
    );
    elements.insert(VENDOR_NAME.to_string(), ElementSpec::with_text("Google"));
    elements.insert(
        VIF_PRODUCT_TYPE.to_string(),
        ElementSpec::with_text("Port Product").attribute_value(VALUE, "0"),
    );
    elements.insert(
        CERTIFICATION_TYPE.to_string(),
        ElementSpec::with_text("End Product").attribute_value(VALUE, "0"),
    );
    elements
}

/// Look up the default spec of an element in the global tables
pub fn lookup(name: &str) -> Option<&'static ElementSpec> {
    crate::spec::VifSpec::global().element_spec(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_tree_order() {
        let elements = default_spec_elements();
        let names: Vec<&str> = elements.keys().map(|k| k.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "VIF_Specification",
                "VIF_App",
                "Vendor_Name",
                "VIF_Product_Type",
                "Certification_Type"
            ]
        );
    }

    #[test]
    fn test_accessors() {
        let elements = default_spec_elements();

        let product_type = &elements["VIF_Product_Type"];
        assert_eq!(product_type.text(), Some("Port Product"));
        assert_eq!(product_type.attribute("value"), Some("0"));
        assert_eq!(product_type.attribute("missing"), None);
        assert!(product_type.child("Vendor").is_none());

        let app = &elements["VIF_App"];
        assert_eq!(app.text(), None);
        assert_eq!(app.child("Name").and_then(|c| c.text()), Some("VIF Editor"));
        assert_eq!(app.child("Version").and_then(|c| c.text()), Some("3.2.4.0"));
    }

    #[test]
    fn test_walk_visits_nested_children() {
        let spec = ElementSpec::new().with_child(
            "outer",
            ElementSpec::new().with_child("inner", ElementSpec::with_text("x")),
        );

        let mut seen = Vec::new();
        spec.walk(&mut |name, _| seen.push(name));
        assert_eq!(seen, vec!["outer", "inner"]);
    }

    #[test]
    fn test_json_shape() {
        let elements = default_spec_elements();
        assert_eq!(
            elements["VIF_App"].to_json(),
            json!({
                "child": {
                    "Vendor": {"text": "USB-IF"},
                    "Name": {"text": "VIF Editor"},
                    "Version": {"text": "3.2.4.0"}
                }
            })
        );
        assert_eq!(
            elements["Certification_Type"].to_json(),
            json!({"text": "End Product", "attributes": {"value": "0"}})
        );
    }

    #[test]
    fn test_deserialize_record() {
        let spec: ElementSpec =
            serde_json::from_value(json!({"text": "Acme", "attributes": {"value": "1"}})).unwrap();
        assert_eq!(spec, ElementSpec::with_text("Acme").attribute_value("value", "1"));
    }
}
