//! VIF specification tables
//!
//! [`VifSpec`] owns every lookup table a generator needs. The hardcoded
//! tables are available through [`VifSpec::global`]; a generator that needs
//! different defaults builds its own instance with the `with_*` methods
//! before sharing it.

use crate::elements::{default_spec_elements, ElementSpec};
use crate::error::{Error, Result};
use crate::names::{DT_VIF_ELEMENTS, VIF_ELEMENTS};
use crate::namespaces::XML_ELEMENT_NAME_PREFIX;
use crate::pdo::PdoType;
use indexmap::{IndexMap, IndexSet};
use log::{debug, trace};
use once_cell::sync::Lazy;

static GLOBAL: Lazy<VifSpec> = Lazy::new(VifSpec::new);

/// Lookup tables for VIF generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VifSpec {
    /// Default element tree
    spec_elements: IndexMap<String, ElementSpec>,
    /// Recognized element names
    elements: IndexSet<String>,
    /// Device-tree to VIF renames
    renames: IndexMap<String, String>,
}

impl Default for VifSpec {
    fn default() -> Self {
        Self {
            spec_elements: default_spec_elements(),
            elements: VIF_ELEMENTS.iter().map(|s| s.to_string()).collect(),
            renames: DT_VIF_ELEMENTS
                .iter()
                .map(|(dt, vif)| (dt.to_string(), vif.to_string()))
                .collect(),
        }
    }
}

impl VifSpec {
    /// Create the hardcoded tables
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared instance holding the hardcoded tables
    pub fn global() -> &'static VifSpec {
        &GLOBAL
    }

    /// Replace or add the default spec of a registered element
    pub fn with_element_default(mut self, name: impl Into<String>, spec: ElementSpec) -> Result<Self> {
        let name = name.into();
        if !self.elements.contains(&name) {
            return Err(Error::Config(format!(
                "cannot set default for unregistered element '{}'",
                name
            )));
        }
        let mut unknown = None;
        spec.walk(&mut |child, _| {
            if unknown.is_none() && !self.elements.contains(child) {
                unknown = Some(child.to_string());
            }
        });
        if let Some(child) = unknown {
            return Err(Error::Config(format!(
                "default for '{}' contains unregistered child '{}'",
                name, child
            )));
        }
        debug!("overriding default for element {}", name);
        self.spec_elements.insert(name, spec);
        Ok(self)
    }

    /// Add or replace a device-tree rename
    pub fn with_rename(mut self, dt_name: impl Into<String>, vif_name: impl Into<String>) -> Self {
        self.renames.insert(dt_name.into(), vif_name.into());
        self
    }

    /// Get the default spec of an element, if it has one
    pub fn element_spec(&self, name: &str) -> Option<&ElementSpec> {
        let spec = self.spec_elements.get(name);
        if spec.is_none() {
            trace!("no default for element {}", name);
        }
        spec
    }

    /// Iterate over the default element tree in emission order
    pub fn default_elements(&self) -> impl Iterator<Item = (&str, &ElementSpec)> {
        self.spec_elements.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate over the recognized element names in order
    pub fn vif_elements(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().map(|s| s.as_str())
    }

    /// Check if a name is a recognized VIF element
    pub fn is_vif_element(&self, name: &str) -> bool {
        self.elements.contains(name)
    }

    /// Validate an element name and return an error if it is not recognized
    pub fn validate_element(&self, name: &str) -> Result<()> {
        if self.is_vif_element(name) {
            Ok(())
        } else {
            debug!("unknown VIF element {}", name);
            Err(Error::unknown_element(name))
        }
    }

    /// Map a device-tree field name to its VIF element name
    pub fn rename<'a>(&'a self, dt_name: &'a str) -> &'a str {
        match self.renames.get(dt_name) {
            Some(vif_name) => vif_name.as_str(),
            None => dt_name,
        }
    }

    /// Prefixed XML element name for a device-tree field
    pub fn vif_element_name(&self, dt_name: &str) -> String {
        format!("{}:{}", XML_ELEMENT_NAME_PREFIX, self.rename(dt_name))
    }

    /// Decode a PDO type code
    pub fn decode_pdo_type(&self, code: u32) -> Result<PdoType> {
        PdoType::from_code(code)
    }

    /// Check that every element of the default tree, at any depth, is
    /// a recognized element
    pub fn check_coverage(&self) -> Result<()> {
        for (name, spec) in &self.spec_elements {
            self.validate_element(name)?;
            let mut missing = None;
            spec.walk(&mut |child, _| {
                if missing.is_none() && !self.is_vif_element(child) {
                    missing = Some(child.to_string());
                }
            });
            if let Some(child) = missing {
                return Err(Error::UnknownElement(child));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::{COMPONENT, VENDOR_NAME, VIF_APP};

    #[test]
    fn test_global_is_default() {
        assert_eq!(VifSpec::global(), &VifSpec::new());
    }

    #[test]
    fn test_default_tables_are_covered() {
        assert!(VifSpec::new().check_coverage().is_ok());
    }

    #[test]
    fn test_element_spec_lookup() {
        let spec = VifSpec::new();
        assert_eq!(
            spec.element_spec("VIF_Specification").and_then(|s| s.text()),
            Some("3.19")
        );
        assert!(spec.element_spec(COMPONENT).is_none());
    }

    #[test]
    fn test_override_vendor_name() {
        let spec = VifSpec::new()
            .with_element_default(VENDOR_NAME, ElementSpec::with_text("Acme"))
            .unwrap();
        assert_eq!(spec.element_spec(VENDOR_NAME).and_then(|s| s.text()), Some("Acme"));
        assert_eq!(
            VifSpec::global().element_spec(VENDOR_NAME).and_then(|s| s.text()),
            Some("Google")
        );
        assert!(spec.check_coverage().is_ok());
    }

    #[test]
    fn test_override_rejects_unregistered() {
        let err = VifSpec::new()
            .with_element_default("Src_PDO_Voltage", ElementSpec::with_text("5000"))
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let bad_child = ElementSpec::new().with_child("Bogus", ElementSpec::with_text("x"));
        let err = VifSpec::new()
            .with_element_default(VIF_APP, bad_child)
            .unwrap_err();
        assert!(matches!(err, Error::Config(msg) if msg.contains("Bogus")));
    }

    #[test]
    fn test_rename_override() {
        let spec = VifSpec::new().with_rename("source-pdos", "SrcPdoList");
        assert_eq!(spec.rename("source-pdos"), "SrcPdoList");
        assert_eq!(spec.rename("sink-pdos"), "SnkPdoList");
        assert_eq!(spec.vif_element_name("source-pdos"), "vif:SrcPdoList");
    }

    #[test]
    fn test_decode_pdo_type() {
        let spec = VifSpec::global();
        assert_eq!(spec.decode_pdo_type(0), Ok(PdoType::Fixed));
        assert_eq!(spec.decode_pdo_type(4), Err(Error::InvalidPdoType(4)));
    }
}
