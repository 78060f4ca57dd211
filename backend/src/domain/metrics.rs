//! Dashboard aggregates derived from stored records.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use super::{
    CarbonEmission, DecimalOverflowError, DecimalText, Project, ProjectStatus, RegionalCapacity,
    Technology,
};

const PERCENT_PLACES: u32 = 1;
const AVERAGE_PLACES: u32 = 2;

/// Capacity totals across every region, in megawatts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapacitySummary {
    pub region_count: usize,
    pub solar: DecimalText,
    pub wind: DecimalText,
    pub hydro: DecimalText,
    pub total: DecimalText,
    pub target: DecimalText,
    /// `total / target * 100`, one decimal place; zero when the target is zero.
    pub target_progress_percent: DecimalText,
}

/// Project counts. Every status and technology label is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub total: usize,
    pub operational: usize,
    pub by_status: BTreeMap<&'static str, usize>,
    pub by_technology: BTreeMap<&'static str, usize>,
}

/// Emission report totals, in tonnes of CO2 equivalent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmissionSummary {
    pub report_count: usize,
    pub total: DecimalText,
    /// Mean of `totalEmissions`, two decimal places; zero with no reports.
    pub average: DecimalText,
    pub energy: DecimalText,
    pub transport: DecimalText,
    pub waste: DecimalText,
}

/// Aggregates shown on the dashboard landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub capacity: CapacitySummary,
    pub projects: ProjectSummary,
    pub emissions: EmissionSummary,
}

/// `numerator / denominator`, zero when the denominator is zero.
fn ratio(numerator: Decimal, denominator: Decimal) -> Result<Decimal, DecimalOverflowError> {
    if denominator.is_zero() {
        return Ok(Decimal::ZERO);
    }
    numerator
        .checked_div(denominator)
        .ok_or(DecimalOverflowError)
}

impl CapacitySummary {
    /// Sum capacity over `regions`.
    ///
    /// # Errors
    /// Returns [`DecimalOverflowError`] when a total leaves the decimal range.
    pub fn compute(regions: &[RegionalCapacity]) -> Result<Self, DecimalOverflowError> {
        let sum = |pick: fn(&RegionalCapacity) -> DecimalText| {
            DecimalText::checked_sum(regions.iter().map(pick))
        };
        let total = sum(|r| r.total_capacity)?;
        let target = sum(|r| r.target_capacity)?;
        let scaled = total
            .as_decimal()
            .checked_mul(Decimal::ONE_HUNDRED)
            .ok_or(DecimalOverflowError)?;
        let percent = ratio(scaled, target.as_decimal())?;
        Ok(Self {
            region_count: regions.len(),
            solar: sum(|r| r.solar_capacity)?,
            wind: sum(|r| r.wind_capacity)?,
            hydro: sum(|r| r.hydro_capacity)?,
            total,
            target,
            target_progress_percent: DecimalText::from(percent).round_to(PERCENT_PLACES),
        })
    }
}

impl ProjectSummary {
    /// Count `projects` by status and technology.
    pub fn compute(projects: &[Project]) -> Self {
        let mut by_status: BTreeMap<_, _> =
            ProjectStatus::ALL.iter().map(|s| (s.as_str(), 0)).collect();
        let mut by_technology: BTreeMap<_, _> =
            Technology::ALL.iter().map(|t| (t.as_str(), 0)).collect();
        for project in projects {
            *by_status.entry(project.status.as_str()).or_insert(0) += 1;
            *by_technology.entry(project.technology.as_str()).or_insert(0) += 1;
        }
        Self {
            total: projects.len(),
            operational: by_status
                .get(ProjectStatus::Operational.as_str())
                .copied()
                .unwrap_or(0),
            by_status,
            by_technology,
        }
    }
}

impl EmissionSummary {
    /// Sum and average `emissions`.
    ///
    /// # Errors
    /// Returns [`DecimalOverflowError`] when a total leaves the decimal range.
    pub fn compute(emissions: &[CarbonEmission]) -> Result<Self, DecimalOverflowError> {
        let sum = |pick: fn(&CarbonEmission) -> DecimalText| {
            DecimalText::checked_sum(emissions.iter().map(pick))
        };
        let total = sum(|e| e.total_emissions)?;
        let average = ratio(total.as_decimal(), Decimal::from(emissions.len()))?;
        Ok(Self {
            report_count: emissions.len(),
            total,
            average: DecimalText::from(average).round_to(AVERAGE_PLACES),
            energy: sum(|e| e.energy_emissions)?,
            transport: sum(|e| e.transport_emissions)?,
            waste: sum(|e| e.waste_emissions)?,
        })
    }
}

impl DashboardSummary {
    /// Compute every aggregate from full record listings.
    ///
    /// # Errors
    /// Returns [`DecimalOverflowError`] when a total leaves the decimal range.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::DashboardSummary;
    ///
    /// let summary = DashboardSummary::compute(&[], &[], &[]).expect("empty totals fit");
    /// assert_eq!(summary.projects.total, 0);
    /// assert_eq!(summary.capacity.target_progress_percent.to_string(), "0.0");
    /// assert_eq!(summary.emissions.average.to_string(), "0.00");
    /// ```
    pub fn compute(
        projects: &[Project],
        emissions: &[CarbonEmission],
        regions: &[RegionalCapacity],
    ) -> Result<Self, DecimalOverflowError> {
        Ok(Self {
            capacity: CapacitySummary::compute(regions)?,
            projects: ProjectSummary::compute(projects),
            emissions: EmissionSummary::compute(emissions)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use rstest::rstest;

    use super::*;
    use crate::domain::{NewCarbonEmission, NewRegionalCapacity, OrganizationType, RecordId};

    fn dec(text: &str) -> DecimalText {
        text.parse().expect("decimal")
    }

    fn region(state: &str, solar: &str, wind: &str, hydro: &str, target: &str) -> RegionalCapacity {
        let total = DecimalText::checked_sum([solar, wind, hydro].map(dec)).expect("in range");
        NewRegionalCapacity {
            state: state.to_owned(),
            solar_capacity: dec(solar),
            wind_capacity: dec(wind),
            hydro_capacity: dec(hydro),
            total_capacity: total,
            target_capacity: dec(target),
            population: None,
        }
        .into_record(RecordId::random())
    }

    fn emission(energy: &str, transport: &str, waste: &str, total: &str) -> CarbonEmission {
        NewCarbonEmission {
            organization_name: "Org".to_owned(),
            organization_type: OrganizationType::Ngo,
            state: "Kerala".to_owned(),
            reporting_period: "2024".to_owned(),
            energy_emissions: dec(energy),
            transport_emissions: dec(transport),
            waste_emissions: dec(waste),
            total_emissions: dec(total),
        }
        .into_record(RecordId::random(), Utc::now())
    }

    #[rstest]
    fn capacity_progress_rounds_to_one_place() {
        let regions = [
            region("A", "100", "50", "25", "300"),
            region("B", "10.5", "0", "0", "100"),
        ];
        let summary = CapacitySummary::compute(&regions).expect("in range");
        assert_eq!(summary.region_count, 2);
        assert_eq!(summary.total.to_string(), "185.5");
        assert_eq!(summary.target.to_string(), "400");
        // 185.5 / 400 * 100 = 46.375
        assert_eq!(summary.target_progress_percent.to_string(), "46.4");
    }

    #[rstest]
    fn zero_target_reports_zero_progress() {
        let summary =
            CapacitySummary::compute(&[region("A", "5", "0", "0", "0")]).expect("in range");
        assert_eq!(summary.target_progress_percent.to_string(), "0.0");
    }

    #[rstest]
    fn emission_average_rounds_to_two_places() {
        let emissions = [
            emission("1", "1", "1", "10"),
            emission("2", "0", "0", "10"),
            emission("0", "0", "0.5", "0.5"),
        ];
        let summary = EmissionSummary::compute(&emissions).expect("in range");
        assert_eq!(summary.report_count, 3);
        assert_eq!(summary.total.to_string(), "20.5");
        // 20.5 / 3 = 6.8333...
        assert_eq!(summary.average.to_string(), "6.83");
        assert_eq!(summary.energy.to_string(), "3");
        assert_eq!(summary.waste.to_string(), "1.5");
    }

    #[rstest]
    fn project_counts_list_every_label() {
        let summary = ProjectSummary::compute(&[]);
        assert_eq!(summary.by_status.len(), ProjectStatus::ALL.len());
        assert_eq!(summary.by_technology.len(), Technology::ALL.len());
        assert!(summary.by_status.values().all(|count| *count == 0));
    }

    const DECIMAL_MAX: &str = "79228162514264337593543950335";

    #[rstest]
    fn oversized_regions_report_overflow() {
        let huge = region("A", DECIMAL_MAX, "0", "0", "1");
        let twin = region("B", DECIMAL_MAX, "0", "0", "1");
        assert_eq!(
            DashboardSummary::compute(&[], &[], &[huge, twin]),
            Err(DecimalOverflowError)
        );
    }

    #[rstest]
    fn oversized_emissions_report_overflow() {
        let reports = [
            emission("0", "0", "0", DECIMAL_MAX),
            emission("0", "0", "0", DECIMAL_MAX),
        ];
        assert_eq!(
            EmissionSummary::compute(&reports),
            Err(DecimalOverflowError)
        );
    }

    #[rstest]
    fn progress_overflow_is_reported() {
        let full = region("A", DECIMAL_MAX, "0", "0", "1");
        assert_eq!(
            CapacitySummary::compute(&[full]),
            Err(DecimalOverflowError)
        );
    }
}
