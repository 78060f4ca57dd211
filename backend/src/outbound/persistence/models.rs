//! Diesel row structs and their conversions to domain records.
//!
//! Rows are internal to the adapter. Text columns holding enumeration labels
//! are re-parsed on the way out; a label the domain does not recognise is
//! reported as [`StorageError::CorruptRow`] rather than guessed.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::schema::{carbon_emissions, financing_schemes, regional_capacity, renewable_projects};
use crate::domain::ports::StorageError;
use crate::domain::{
    CarbonEmission, DecimalText, FinancingScheme, NewCarbonEmission, NewFinancingScheme,
    NewProject, NewRegionalCapacity, Project, RecordId, RegionalCapacity, TextEnum,
};

fn parse_label<T: TextEnum>(column: &str, value: &str) -> Result<T, StorageError> {
    T::from_label(value)
        .map_err(|err| StorageError::corrupt_row(format!("column {column}: {err}")))
}

fn decimal_ref(value: &DecimalText) -> Decimal {
    value.as_decimal()
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = renewable_projects)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ProjectRow {
    pub id: Uuid,
    pub name: String,
    pub state: String,
    pub technology: String,
    pub capacity: Decimal,
    pub status: String,
    pub description: Option<String>,
    pub investment_amount: Option<Decimal>,
    pub completion_date: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = renewable_projects)]
pub(crate) struct NewProjectRow<'a> {
    pub name: &'a str,
    pub state: &'a str,
    pub technology: &'a str,
    pub capacity: Decimal,
    pub status: &'a str,
    pub description: Option<&'a str>,
    pub investment_amount: Option<Decimal>,
    pub completion_date: Option<&'a str>,
}

impl<'a> From<&'a NewProject> for NewProjectRow<'a> {
    fn from(payload: &'a NewProject) -> Self {
        Self {
            name: &payload.name,
            state: &payload.state,
            technology: payload.technology.as_str(),
            capacity: decimal_ref(&payload.capacity),
            status: payload.status.as_str(),
            description: payload.description.as_deref(),
            investment_amount: payload.investment_amount.as_ref().map(decimal_ref),
            completion_date: payload.completion_date.as_deref(),
        }
    }
}

impl TryFrom<ProjectRow> for Project {
    type Error = StorageError;

    fn try_from(row: ProjectRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: RecordId::from_uuid(row.id),
            technology: parse_label("technology", &row.technology)?,
            status: parse_label("status", &row.status)?,
            name: row.name,
            state: row.state,
            capacity: row.capacity.into(),
            description: row.description,
            investment_amount: row.investment_amount.map(Into::into),
            completion_date: row.completion_date,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = carbon_emissions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CarbonEmissionRow {
    pub id: Uuid,
    pub organization_name: String,
    pub organization_type: String,
    pub state: String,
    pub reporting_period: String,
    pub energy_emissions: Decimal,
    pub transport_emissions: Decimal,
    pub waste_emissions: Decimal,
    pub total_emissions: Decimal,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = carbon_emissions)]
pub(crate) struct NewCarbonEmissionRow<'a> {
    pub organization_name: &'a str,
    pub organization_type: &'a str,
    pub state: &'a str,
    pub reporting_period: &'a str,
    pub energy_emissions: Decimal,
    pub transport_emissions: Decimal,
    pub waste_emissions: Decimal,
    pub total_emissions: Decimal,
}

impl<'a> From<&'a NewCarbonEmission> for NewCarbonEmissionRow<'a> {
    fn from(payload: &'a NewCarbonEmission) -> Self {
        Self {
            organization_name: &payload.organization_name,
            organization_type: payload.organization_type.as_str(),
            state: &payload.state,
            reporting_period: &payload.reporting_period,
            energy_emissions: decimal_ref(&payload.energy_emissions),
            transport_emissions: decimal_ref(&payload.transport_emissions),
            waste_emissions: decimal_ref(&payload.waste_emissions),
            total_emissions: decimal_ref(&payload.total_emissions),
        }
    }
}

impl TryFrom<CarbonEmissionRow> for CarbonEmission {
    type Error = StorageError;

    fn try_from(row: CarbonEmissionRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: RecordId::from_uuid(row.id),
            organization_type: parse_label("organization_type", &row.organization_type)?,
            organization_name: row.organization_name,
            state: row.state,
            reporting_period: row.reporting_period,
            energy_emissions: row.energy_emissions.into(),
            transport_emissions: row.transport_emissions.into(),
            waste_emissions: row.waste_emissions.into(),
            total_emissions: row.total_emissions.into(),
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = financing_schemes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct FinancingSchemeRow {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub category: String,
    pub funding_amount: String,
    pub eligibility: String,
    pub application_deadline: Option<String>,
    pub target_technology: Option<String>,
    pub contact_info: Option<String>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = financing_schemes)]
pub(crate) struct NewFinancingSchemeRow<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub category: &'a str,
    pub funding_amount: &'a str,
    pub eligibility: &'a str,
    pub application_deadline: Option<&'a str>,
    pub target_technology: Option<&'a str>,
    pub contact_info: Option<&'a str>,
}

impl<'a> From<&'a NewFinancingScheme> for NewFinancingSchemeRow<'a> {
    fn from(payload: &'a NewFinancingScheme) -> Self {
        Self {
            name: &payload.name,
            description: &payload.description,
            category: payload.category.as_str(),
            funding_amount: &payload.funding_amount,
            eligibility: &payload.eligibility,
            application_deadline: payload.application_deadline.as_deref(),
            target_technology: payload.target_technology.as_deref(),
            contact_info: payload.contact_info.as_deref(),
        }
    }
}

impl TryFrom<FinancingSchemeRow> for FinancingScheme {
    type Error = StorageError;

    fn try_from(row: FinancingSchemeRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: RecordId::from_uuid(row.id),
            category: parse_label("category", &row.category)?,
            name: row.name,
            description: row.description,
            funding_amount: row.funding_amount,
            eligibility: row.eligibility,
            application_deadline: row.application_deadline,
            target_technology: row.target_technology,
            contact_info: row.contact_info,
        })
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = regional_capacity)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct RegionalCapacityRow {
    pub id: Uuid,
    pub state: String,
    pub solar_capacity: Decimal,
    pub wind_capacity: Decimal,
    pub hydro_capacity: Decimal,
    pub total_capacity: Decimal,
    pub target_capacity: Decimal,
    pub population: Option<i32>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = regional_capacity)]
pub(crate) struct NewRegionalCapacityRow<'a> {
    pub state: &'a str,
    pub solar_capacity: Decimal,
    pub wind_capacity: Decimal,
    pub hydro_capacity: Decimal,
    pub total_capacity: Decimal,
    pub target_capacity: Decimal,
    pub population: Option<i32>,
}

impl<'a> From<&'a NewRegionalCapacity> for NewRegionalCapacityRow<'a> {
    fn from(payload: &'a NewRegionalCapacity) -> Self {
        Self {
            state: &payload.state,
            solar_capacity: decimal_ref(&payload.solar_capacity),
            wind_capacity: decimal_ref(&payload.wind_capacity),
            hydro_capacity: decimal_ref(&payload.hydro_capacity),
            total_capacity: decimal_ref(&payload.total_capacity),
            target_capacity: decimal_ref(&payload.target_capacity),
            population: payload.population,
        }
    }
}

impl From<RegionalCapacityRow> for RegionalCapacity {
    fn from(row: RegionalCapacityRow) -> Self {
        Self {
            id: RecordId::from_uuid(row.id),
            state: row.state,
            solar_capacity: row.solar_capacity.into(),
            wind_capacity: row.wind_capacity.into(),
            hydro_capacity: row.hydro_capacity.into(),
            total_capacity: row.total_capacity.into(),
            target_capacity: row.target_capacity.into(),
            population: row.population,
        }
    }
}
