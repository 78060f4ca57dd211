//! Financing schemes for renewable installations.

use serde::{Deserialize, Serialize};

use crate::domain::{RecordId, SchemeCategory};

/// Validated payload for publishing a financing scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFinancingScheme {
    pub name: String,
    pub description: String,
    pub category: SchemeCategory,
    /// Free text such as `Up to 60% of project cost`.
    pub funding_amount: String,
    pub eligibility: String,
    pub application_deadline: Option<String>,
    pub target_technology: Option<String>,
    pub contact_info: Option<String>,
}

/// Stored financing scheme. Schemes carry no creation timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancingScheme {
    pub id: RecordId,
    pub name: String,
    pub description: String,
    pub category: SchemeCategory,
    pub funding_amount: String,
    pub eligibility: String,
    pub application_deadline: Option<String>,
    pub target_technology: Option<String>,
    pub contact_info: Option<String>,
}

impl NewFinancingScheme {
    /// Attach the store-assigned identifier.
    pub fn into_record(self, id: RecordId) -> FinancingScheme {
        let Self {
            name,
            description,
            category,
            funding_amount,
            eligibility,
            application_deadline,
            target_technology,
            contact_info,
        } = self;
        FinancingScheme {
            id,
            name,
            description,
            category,
            funding_amount,
            eligibility,
            application_deadline,
            target_technology,
            contact_info,
        }
    }
}

impl FinancingScheme {
    /// The client-supplied part of the record.
    pub fn payload(&self) -> NewFinancingScheme {
        NewFinancingScheme {
            name: self.name.clone(),
            description: self.description.clone(),
            category: self.category,
            funding_amount: self.funding_amount.clone(),
            eligibility: self.eligibility.clone(),
            application_deadline: self.application_deadline.clone(),
            target_technology: self.target_technology.clone(),
            contact_info: self.contact_info.clone(),
        }
    }
}
