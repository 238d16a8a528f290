//! XML namespace and root element constants
//!
//! The generator substitutes these values verbatim into the XML declaration
//! and the opening tag of the VIF document.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use quick_xml::events::{BytesDecl, BytesStart};

/// Output document encoding
pub const XML_ENCODING: &str = "utf-8";

/// XML version written in the declaration
pub const XML_VERSION: &str = "1.0";

/// Prefix applied to every VIF element name
pub const XML_ELEMENT_NAME_PREFIX: &str = "vif";

/// Local name of the document root
pub const XML_ROOT_ELEMENT_NAME: &str = "VIF";

/// VIF optional content namespace
pub const VIF_OPTIONAL_NAMESPACE: &str = "http://usb.org/VendorInfoFileOptionalContent.xsd";

/// XML Schema instance namespace
pub const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// VIF namespace
pub const VIF_NAMESPACE: &str = "http://usb.org/VendorInfoFile.xsd";

/// Namespace attributes of the root element, in emission order
pub static XML_NAMESPACE_ATTRIBUTES: Lazy<IndexMap<&'static str, &'static str>> = Lazy::new(|| {
    IndexMap::from([
        ("xmlns:opt", VIF_OPTIONAL_NAMESPACE),
        ("xmlns:xsi", XSI_NAMESPACE),
        ("xmlns:vif", VIF_NAMESPACE),
    ])
});

/// Get the namespace URI bound to a prefix on the root element
pub fn namespace_for_prefix(prefix: &str) -> Option<&'static str> {
    XML_NAMESPACE_ATTRIBUTES
        .iter()
        .find(|(attr, _)| attr.strip_prefix("xmlns:") == Some(prefix))
        .map(|(_, uri)| *uri)
}

/// Prefixed root element name (`vif:VIF`)
pub fn root_element_name() -> String {
    format!("{}:{}", XML_ELEMENT_NAME_PREFIX, XML_ROOT_ELEMENT_NAME)
}

/// Opening tag of the root element with its namespace attributes
pub fn root_start() -> BytesStart<'static> {
    BytesStart::new(root_element_name())
        .with_attributes(XML_NAMESPACE_ATTRIBUTES.iter().map(|(k, v)| (*k, *v)))
}

/// XML declaration for the document
pub fn xml_declaration() -> BytesDecl<'static> {
    BytesDecl::new(XML_VERSION, Some(XML_ENCODING), None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_element_name() {
        assert_eq!(root_element_name(), "vif:VIF");
    }

    #[test]
    fn test_namespace_for_prefix() {
        assert_eq!(namespace_for_prefix("vif"), Some(VIF_NAMESPACE));
        assert_eq!(namespace_for_prefix("xsi"), Some(XSI_NAMESPACE));
        assert_eq!(namespace_for_prefix("xs"), None);
    }

    #[test]
    fn test_root_start_attributes() {
        let start = root_start();
        assert_eq!(start.name().as_ref(), b"vif:VIF");

        let attrs: Vec<(Vec<u8>, Vec<u8>)> = start
            .attributes()
            .map(|a| {
                let a = a.unwrap();
                (a.key.as_ref().to_vec(), a.value.to_vec())
            })
            .collect();
        assert_eq!(attrs.len(), 3);
        assert_eq!(attrs[0].0, b"xmlns:opt");
        assert_eq!(attrs[2].1, VIF_NAMESPACE.as_bytes());
    }

    #[test]
    fn test_xml_declaration() {
        let decl = xml_declaration();
        assert_eq!(decl.version().unwrap().as_ref(), b"1.0");
        assert_eq!(decl.encoding().unwrap().unwrap().as_ref(), b"utf-8");
    }
}
