//! Describe types.
//!
//! Only the parts of the sObject describe payload the probes read are
//! modelled. Unknown keys in the response are ignored.

use serde::{Deserialize, Serialize};

/// SObject describe result from Salesforce API.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DescribeSObjectResult {
    pub name: String,
    pub label: String,
    #[serde(rename = "labelPlural")]
    pub label_plural: Option<String>,
    #[serde(rename = "keyPrefix")]
    pub key_prefix: Option<String>,
    #[serde(default)]
    pub custom: bool,
    #[serde(default)]
    pub queryable: bool,

    /// Fields in the order Salesforce reports them.
    #[serde(default)]
    pub fields: Vec<FieldDescribe>,
}

impl DescribeSObjectResult {
    /// Fields whose API name is in `names`, keeping describe order.
    pub fn fields_in<'a>(
        &'a self,
        names: &'a [&'a str],
    ) -> impl Iterator<Item = &'a FieldDescribe> + 'a {
        self.fields
            .iter()
            .filter(move |f| names.contains(&f.name.as_str()))
    }
}

/// Field metadata from an sObject describe.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FieldDescribe {
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(rename = "soapType")]
    pub soap_type: Option<String>,
    pub custom: Option<bool>,
    pub length: Option<i32>,
    #[serde(default)]
    pub nillable: bool,
    #[serde(default)]
    pub calculated: bool,
    #[serde(rename = "referenceTo", default)]
    pub reference_to: Vec<String>,
    #[serde(rename = "relationshipName")]
    pub relationship_name: Option<String>,
}
