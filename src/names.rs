//! VIF element names
//!
//! This module holds the element key constants, the registry of recognized
//! VIF element names and the rename table from device-tree field names to
//! VIF element names.

use crate::error::{Error, Result};
use crate::namespaces::XML_ELEMENT_NAME_PREFIX;
use indexmap::IndexSet;
use once_cell::sync::Lazy;

// Keys of the element record shape
pub const NAME: &str = "name";
pub const VALUE: &str = "value";
pub const TEXT: &str = "text";
pub const ATTRIBUTES: &str = "attributes";
pub const CHILD: &str = "child";

// Header elements
pub const VIF_SPECIFICATION: &str = "VIF_Specification";
pub const VIF_APP: &str = "VIF_App";
pub const VENDOR: &str = "Vendor";
pub const APP_NAME: &str = "Name";
pub const VERSION: &str = "Version";
pub const VENDOR_NAME: &str = "Vendor_Name";
pub const VIF_PRODUCT_TYPE: &str = "VIF_Product_Type";
pub const CERTIFICATION_TYPE: &str = "Certification_Type";

pub const COMPONENT: &str = "Component";

// Sink PDO elements
pub const SINK_PDOS: &str = "sink-pdos";
pub const SINK_PDO: &str = "sink-pdo";
pub const SINK_PDO_SUPPLY_TYPE: &str = "Snk_PDO_Supply_Type";
pub const SINK_PDO_VOLTAGE: &str = "Snk_PDO_Voltage";
pub const SINK_PDO_OP_CURRENT: &str = "Snk_PDO_Op_Current";
pub const SINK_PDO_MIN_VOLTAGE: &str = "Snk_PDO_Min_Voltage";
pub const SINK_PDO_MAX_VOLTAGE: &str = "Snk_PDO_Max_Voltage";
pub const SINK_PDO_OP_POWER: &str = "Snk_PDO_Op_Power";
pub const PD_POWER_AS_SINK: &str = "PD_Power_As_Sink";
pub const NUM_SINK_PDOS: &str = "Num_Snk_PDOs";

/// Recognized VIF element names, in emission order
pub const VIF_ELEMENTS: &[&str] = &[
    VIF_SPECIFICATION,
    VIF_APP,
    VENDOR,
    APP_NAME,
    VERSION,
    VENDOR_NAME,
    VIF_PRODUCT_TYPE,
    CERTIFICATION_TYPE,
    COMPONENT,
    SINK_PDOS,
    SINK_PDO,
    SINK_PDO_SUPPLY_TYPE,
    SINK_PDO_VOLTAGE,
    SINK_PDO_OP_CURRENT,
    SINK_PDO_MIN_VOLTAGE,
    SINK_PDO_MAX_VOLTAGE,
    SINK_PDO_OP_POWER,
    PD_POWER_AS_SINK,
    NUM_SINK_PDOS,
];

/// Device-tree field names whose VIF element name differs.
///
/// Fields not listed keep their name.
pub const DT_VIF_ELEMENTS: &[(&str, &str)] = &[(SINK_PDOS, "SnkPdoList"), (SINK_PDO, "SnkPDO")];

static REGISTRY: Lazy<IndexSet<&'static str>> =
    Lazy::new(|| VIF_ELEMENTS.iter().copied().collect());

/// Check if a name is a recognized VIF element
pub fn is_vif_element(name: &str) -> bool {
    REGISTRY.contains(name)
}

/// Validate an element name and return an error if it is not recognized
pub fn validate_element(name: &str) -> Result<()> {
    if is_vif_element(name) {
        Ok(())
    } else {
        Err(Error::unknown_element(name))
    }
}

/// Map a device-tree field name to its VIF element name.
///
/// Returns the input unchanged when no rename is defined.
pub fn rename(dt_name: &str) -> &str {
    DT_VIF_ELEMENTS
        .iter()
        .find(|(dt, _)| *dt == dt_name)
        .map(|(_, vif)| *vif)
        .unwrap_or(dt_name)
}

/// Prefixed XML element name for a device-tree field, e.g. `vif:SnkPdoList`
pub fn vif_element_name(dt_name: &str) -> String {
    format!("{}:{}", XML_ELEMENT_NAME_PREFIX, rename(dt_name))
}
