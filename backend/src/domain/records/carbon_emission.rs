//! Organizational carbon emission reports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{DecimalText, OrganizationType, RecordId};

/// Validated payload for filing an emissions report.
///
/// Emission amounts are tonnes of CO2 equivalent. `total_emissions` is taken
/// as supplied and is not checked against the component sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCarbonEmission {
    pub organization_name: String,
    pub organization_type: OrganizationType,
    pub state: String,
    pub reporting_period: String,
    pub energy_emissions: DecimalText,
    pub transport_emissions: DecimalText,
    pub waste_emissions: DecimalText,
    pub total_emissions: DecimalText,
}

/// Stored emissions report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarbonEmission {
    pub id: RecordId,
    pub organization_name: String,
    pub organization_type: OrganizationType,
    pub state: String,
    pub reporting_period: String,
    pub energy_emissions: DecimalText,
    pub transport_emissions: DecimalText,
    pub waste_emissions: DecimalText,
    pub total_emissions: DecimalText,
    pub created_at: DateTime<Utc>,
}

impl NewCarbonEmission {
    /// Attach store-assigned fields.
    pub fn into_record(self, id: RecordId, created_at: DateTime<Utc>) -> CarbonEmission {
        let Self {
            organization_name,
            organization_type,
            state,
            reporting_period,
            energy_emissions,
            transport_emissions,
            waste_emissions,
            total_emissions,
        } = self;
        CarbonEmission {
            id,
            organization_name,
            organization_type,
            state,
            reporting_period,
            energy_emissions,
            transport_emissions,
            waste_emissions,
            total_emissions,
            created_at,
        }
    }
}

impl CarbonEmission {
    /// The client-supplied part of the record.
    pub fn payload(&self) -> NewCarbonEmission {
        NewCarbonEmission {
            organization_name: self.organization_name.clone(),
            organization_type: self.organization_type,
            state: self.state.clone(),
            reporting_period: self.reporting_period.clone(),
            energy_emissions: self.energy_emissions,
            transport_emissions: self.transport_emissions,
            waste_emissions: self.waste_emissions,
            total_emissions: self.total_emissions,
        }
    }
}
