//! Field-level validation of creation payloads.
//!
//! Validators take the raw JSON body and either build a `New*` payload or
//! report every violated field at once. They never stop at the first failure
//! and report fields in schema order. Unknown keys are ignored, which also
//! drops any client-supplied `id` or `createdAt`.
//!
//! Decimals must fit their storage column: `NUMERIC(10, 2)` for capacities
//! and emissions, `NUMERIC(15, 2)` for investment amounts.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

use super::{
    DecimalText, NewCarbonEmission, NewFinancingScheme, NewProject, NewRegionalCapacity,
    NumericBounds, OrganizationType, ProjectStatus, SchemeCategory, Technology, TextEnum,
};

/// Field name used when the payload itself is not a JSON object.
pub const ROOT_FIELD: &str = "$";

/// JSON primitive a field was expected to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonKind {
    String,
    Integer,
    Object,
}

impl JsonKind {
    /// Lower-case name used in violation reports.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Object => "object",
        }
    }
}

/// Reason a single field was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    /// Required field absent or `null`.
    Missing,
    /// Field present with the wrong JSON type.
    WrongType { expected: JsonKind },
    /// Required text empty after trimming.
    Blank,
    /// Text that is not a decimal number, or one its column cannot hold.
    InvalidDecimal,
    /// Label outside the field's value set.
    NotInEnumeration { allowed: &'static [&'static str] },
}

impl ViolationKind {
    /// Stable snake_case name of the violation.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::WrongType { .. } => "wrong_type",
            Self::Blank => "blank",
            Self::InvalidDecimal => "invalid_decimal",
            Self::NotInEnumeration { .. } => "not_in_enumeration",
        }
    }
}

/// A rejected field and the reason for rejection.
///
/// Serializes as `{"field": .., "kind": ..}` plus `expected` for type
/// mismatches and `allowed` for enumeration violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub kind: ViolationKind,
}

impl Serialize for FieldViolation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("field", self.field)?;
        map.serialize_entry("kind", self.kind.as_str())?;
        match &self.kind {
            ViolationKind::WrongType { expected } => {
                map.serialize_entry("expected", expected.as_str())?;
            }
            ViolationKind::NotInEnumeration { allowed } => {
                map.serialize_entry("allowed", allowed)?;
            }
            ViolationKind::Missing | ViolationKind::Blank | ViolationKind::InvalidDecimal => {}
        }
        map.end()
    }
}

/// Every violation found in one payload, in schema field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldViolation>);

impl ValidationErrors {
    /// The collected violations.
    pub fn violations(&self) -> &[FieldViolation] {
        &self.0
    }

    /// Names of the rejected fields, in report order.
    pub fn fields(&self) -> Vec<&'static str> {
        self.0.iter().map(|v| v.field).collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed:")?;
        for violation in &self.0 {
            write!(f, " {} ({})", violation.field, violation.kind.as_str())?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl Serialize for ValidationErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("fields", &self.0)?;
        map.end()
    }
}

/// Collects violations while reading fields from a JSON object.
struct FieldReader<'a> {
    object: &'a Map<String, Value>,
    violations: Vec<FieldViolation>,
}

impl<'a> FieldReader<'a> {
    fn for_payload(raw: &'a Value) -> Result<Self, ValidationErrors> {
        match raw {
            Value::Object(object) => Ok(Self {
                object,
                violations: Vec::new(),
            }),
            _ => Err(ValidationErrors(vec![FieldViolation {
                field: ROOT_FIELD,
                kind: ViolationKind::WrongType {
                    expected: JsonKind::Object,
                },
            }])),
        }
    }

    fn reject(&mut self, field: &'static str, kind: ViolationKind) {
        self.violations.push(FieldViolation { field, kind });
    }

    /// Present, non-null value of `field`.
    fn present(&self, field: &str) -> Option<&'a Value> {
        self.object.get(field).filter(|value| !value.is_null())
    }

    fn string(&mut self, field: &'static str, required: bool) -> Option<&'a str> {
        let Some(value) = self.present(field) else {
            if required {
                self.reject(field, ViolationKind::Missing);
            }
            return None;
        };
        let text = value.as_str();
        if text.is_none() {
            self.reject(
                field,
                ViolationKind::WrongType {
                    expected: JsonKind::String,
                },
            );
        }
        text
    }

    fn required_text(&mut self, field: &'static str) -> Option<String> {
        let text = self.string(field, true)?;
        if text.trim().is_empty() {
            self.reject(field, ViolationKind::Blank);
            return None;
        }
        Some(text.to_owned())
    }

    fn optional_text(&mut self, field: &'static str) -> Option<String> {
        self.string(field, false).map(str::to_owned)
    }

    fn decimal(
        &mut self,
        field: &'static str,
        required: bool,
        bounds: NumericBounds,
    ) -> Option<DecimalText> {
        let text = self.string(field, required)?;
        match text.parse() {
            Ok(value) if bounds.admits(value) => Some(value),
            _ => {
                self.reject(field, ViolationKind::InvalidDecimal);
                None
            }
        }
    }

    fn required_decimal(&mut self, field: &'static str) -> Option<DecimalText> {
        self.decimal(field, true, NumericBounds::MEASURE)
    }

    fn optional_amount(&mut self, field: &'static str) -> Option<DecimalText> {
        self.decimal(field, false, NumericBounds::AMOUNT)
    }

    fn required_label<T: TextEnum>(&mut self, field: &'static str) -> Option<T> {
        let text = self.string(field, true)?;
        match T::from_label(text) {
            Ok(value) => Some(value),
            Err(_) => {
                self.reject(
                    field,
                    ViolationKind::NotInEnumeration {
                        allowed: T::LABELS,
                    },
                );
                None
            }
        }
    }

    fn optional_i32(&mut self, field: &'static str) -> Option<i32> {
        let value = self.present(field)?;
        let parsed = value.as_i64().and_then(|n| i32::try_from(n).ok());
        if parsed.is_none() {
            self.reject(
                field,
                ViolationKind::WrongType {
                    expected: JsonKind::Integer,
                },
            );
        }
        parsed
    }

    /// Build the payload when no violation was recorded.
    fn finish<T>(self, build: impl FnOnce() -> Option<T>) -> Result<T, ValidationErrors> {
        if !self.violations.is_empty() {
            return Err(ValidationErrors(self.violations));
        }
        build().ok_or(ValidationErrors(self.violations))
    }
}

/// Validate a project creation payload.
///
/// # Errors
/// Returns [`ValidationErrors`] listing every rejected field.
///
/// # Examples
/// ```
/// use backend::domain::validation::validate_new_project;
/// use serde_json::json;
///
/// let err = validate_new_project(&json!({ "name": "Bhadla", "capacity": "lots" }))
///     .expect_err("incomplete payload");
/// assert_eq!(err.fields(), ["state", "technology", "capacity", "status"]);
/// ```
pub fn validate_new_project(raw: &Value) -> Result<NewProject, ValidationErrors> {
    let mut fields = FieldReader::for_payload(raw)?;
    let name = fields.required_text("name");
    let state = fields.required_text("state");
    let technology = fields.required_label::<Technology>("technology");
    let capacity = fields.required_decimal("capacity");
    let status = fields.required_label::<ProjectStatus>("status");
    let description = fields.optional_text("description");
    let investment_amount = fields.optional_amount("investmentAmount");
    let completion_date = fields.optional_text("completionDate");
    fields.finish(|| {
        Some(NewProject {
            name: name?,
            state: state?,
            technology: technology?,
            capacity: capacity?,
            status: status?,
            description,
            investment_amount,
            completion_date,
        })
    })
}

/// Validate an emissions report payload.
///
/// # Errors
/// Returns [`ValidationErrors`] listing every rejected field.
pub fn validate_new_carbon_emission(raw: &Value) -> Result<NewCarbonEmission, ValidationErrors> {
    let mut fields = FieldReader::for_payload(raw)?;
    let organization_name = fields.required_text("organizationName");
    let organization_type = fields.required_label::<OrganizationType>("organizationType");
    let state = fields.required_text("state");
    let reporting_period = fields.required_text("reportingPeriod");
    let energy_emissions = fields.required_decimal("energyEmissions");
    let transport_emissions = fields.required_decimal("transportEmissions");
    let waste_emissions = fields.required_decimal("wasteEmissions");
    let total_emissions = fields.required_decimal("totalEmissions");
    fields.finish(|| {
        Some(NewCarbonEmission {
            organization_name: organization_name?,
            organization_type: organization_type?,
            state: state?,
            reporting_period: reporting_period?,
            energy_emissions: energy_emissions?,
            transport_emissions: transport_emissions?,
            waste_emissions: waste_emissions?,
            total_emissions: total_emissions?,
        })
    })
}

/// Validate a financing scheme payload.
///
/// # Errors
/// Returns [`ValidationErrors`] listing every rejected field.
pub fn validate_new_financing_scheme(raw: &Value) -> Result<NewFinancingScheme, ValidationErrors> {
    let mut fields = FieldReader::for_payload(raw)?;
    let name = fields.required_text("name");
    let description = fields.required_text("description");
    let category = fields.required_label::<SchemeCategory>("category");
    let funding_amount = fields.required_text("fundingAmount");
    let eligibility = fields.required_text("eligibility");
    let application_deadline = fields.optional_text("applicationDeadline");
    let target_technology = fields.optional_text("targetTechnology");
    let contact_info = fields.optional_text("contactInfo");
    fields.finish(|| {
        Some(NewFinancingScheme {
            name: name?,
            description: description?,
            category: category?,
            funding_amount: funding_amount?,
            eligibility: eligibility?,
            application_deadline,
            target_technology,
            contact_info,
        })
    })
}

/// Validate a regional capacity payload.
///
/// # Errors
/// Returns [`ValidationErrors`] listing every rejected field.
pub fn validate_new_regional_capacity(
    raw: &Value,
) -> Result<NewRegionalCapacity, ValidationErrors> {
    let mut fields = FieldReader::for_payload(raw)?;
    let state = fields.required_text("state");
    let solar_capacity = fields.required_decimal("solarCapacity");
    let wind_capacity = fields.required_decimal("windCapacity");
    let hydro_capacity = fields.required_decimal("hydroCapacity");
    let total_capacity = fields.required_decimal("totalCapacity");
    let target_capacity = fields.required_decimal("targetCapacity");
    let population = fields.optional_i32("population");
    fields.finish(|| {
        Some(NewRegionalCapacity {
            state: state?,
            solar_capacity: solar_capacity?,
            wind_capacity: wind_capacity?,
            hydro_capacity: hydro_capacity?,
            total_capacity: total_capacity?,
            target_capacity: target_capacity?,
            population,
        })
    })
}

#[cfg(test)]
mod tests;
