//! Enumerated value sets used by the record schemas.
//!
//! Each value has exactly one textual label, which is what travels over the
//! wire and what the durable store keeps in its text columns. Labels are
//! matched case-sensitively.

use std::fmt;

/// Error returned when a label is outside an enumeration's value set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{input}' is not a valid {kind}")]
pub struct UnknownLabelError {
    /// Human-readable name of the enumeration.
    pub kind: &'static str,
    /// The rejected text.
    pub input: String,
}

/// Value sets whose members are identified by a fixed text label.
pub trait TextEnum: Copy + fmt::Display + Sized + 'static {
    /// Every label, in declaration order.
    const LABELS: &'static [&'static str];

    /// Parse a label, matching case-sensitively.
    ///
    /// # Errors
    /// Returns [`UnknownLabelError`] when `label` is outside the value set.
    fn from_label(label: &str) -> Result<Self, UnknownLabelError>;

    /// The wire label of this value.
    fn label(self) -> &'static str;
}

macro_rules! define_text_enum {
    (
        $(#[$outer:meta])*
        pub enum $name:ident ($kind:literal) {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $label:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $name {
            /// Every value, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The wire label of this value.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl TextEnum for $name {
            const LABELS: &'static [&'static str] = &[$($label),+];

            fn from_label(label: &str) -> Result<Self, UnknownLabelError> {
                match label {
                    $($label => Ok(Self::$variant),)+
                    _ => Err(UnknownLabelError {
                        kind: $kind,
                        input: label.to_owned(),
                    }),
                }
            }

            fn label(self) -> &'static str {
                self.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = UnknownLabelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as TextEnum>::from_label(s)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let label = <String as serde::Deserialize>::deserialize(deserializer)?;
                <Self as TextEnum>::from_label(&label).map_err(serde::de::Error::custom)
            }
        }
    };
}

define_text_enum! {
    /// Lifecycle stage of a renewable project.
    pub enum ProjectStatus ("project status") {
        /// Proposed, not yet approved.
        Planning => "Planning",
        /// Approved, construction not started.
        Approved => "Approved",
        /// Being built.
        UnderConstruction => "Under Construction",
        /// Generating power.
        Operational => "Operational",
    }
}

define_text_enum! {
    /// Generation technology.
    pub enum Technology ("technology") {
        /// Photovoltaic or solar thermal.
        Solar => "Solar",
        /// Onshore or offshore wind.
        Wind => "Wind",
        /// Hydroelectric.
        Hydro => "Hydro",
        /// Biomass combustion or digestion.
        Biomass => "Biomass",
        /// Nuclear fission.
        Nuclear => "Nuclear",
    }
}

define_text_enum! {
    /// Kind of organization filing an emissions report.
    pub enum OrganizationType ("organization type") {
        /// Small or medium enterprise.
        SmallBusiness => "Small Business",
        /// Municipal or state body.
        LocalGovernment => "Local Government",
        /// Large enterprise.
        LargeCorporation => "Large Corporation",
        /// Non-governmental organization.
        Ngo => "NGO",
    }
}

define_text_enum! {
    /// Financing instrument offered by a scheme.
    pub enum SchemeCategory ("scheme category") {
        /// Direct subsidy.
        Subsidies => "Subsidies",
        /// Concessional loan.
        Loans => "Loans",
        /// Grant funding.
        Grants => "Grants",
        /// Tax relief.
        TaxIncentives => "Tax Incentives",
    }
}
