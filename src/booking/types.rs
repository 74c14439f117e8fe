//! Booking request wire format and its closed vocabularies

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Booking form as submitted; every field is optional on the wire so that
/// validation can report each missing one individually.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingRequest {
    pub company_name: String,
    pub contact_name: String,
    pub email: String,
    pub phone_number: String,
    pub company_size: Option<String>,
    /// RFC 3339 timestamp or `YYYY-MM-DD`
    pub preferred_date: Option<String>,
    pub time_zone: Option<String>,
    pub preferred_time: Option<String>,
    pub message: Option<String>,
    pub services: Option<Vec<String>>,
}

/// Company headcount bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CompanySize {
    #[serde(rename = "1-10")]
    Micro,
    #[serde(rename = "11-50")]
    Small,
    #[serde(rename = "51-200")]
    Medium,
    #[serde(rename = "201-500")]
    Large,
    #[serde(rename = "500+")]
    Enterprise,
}

impl CompanySize {
    pub fn all() -> &'static [CompanySize] {
        &[
            CompanySize::Micro,
            CompanySize::Small,
            CompanySize::Medium,
            CompanySize::Large,
            CompanySize::Enterprise,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CompanySize::Micro => "1-10",
            CompanySize::Small => "11-50",
            CompanySize::Medium => "51-200",
            CompanySize::Large => "201-500",
            CompanySize::Enterprise => "500+",
        }
    }
}

/// Time zones offered by the booking form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TimeZone {
    #[serde(rename = "UTC-8")]
    Pacific,
    #[serde(rename = "UTC-7")]
    Mountain,
    #[serde(rename = "UTC-6")]
    Central,
    #[serde(rename = "UTC-5")]
    Eastern,
    #[serde(rename = "UTC")]
    Utc,
    #[serde(rename = "UTC+1")]
    CentralEuropean,
    #[serde(rename = "UTC+8")]
    ChinaStandard,
    #[serde(rename = "UTC+9")]
    JapanStandard,
}

impl TimeZone {
    pub fn all() -> &'static [TimeZone] {
        &[
            TimeZone::Pacific,
            TimeZone::Mountain,
            TimeZone::Central,
            TimeZone::Eastern,
            TimeZone::Utc,
            TimeZone::CentralEuropean,
            TimeZone::ChinaStandard,
            TimeZone::JapanStandard,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeZone::Pacific => "UTC-8",
            TimeZone::Mountain => "UTC-7",
            TimeZone::Central => "UTC-6",
            TimeZone::Eastern => "UTC-5",
            TimeZone::Utc => "UTC",
            TimeZone::CentralEuropean => "UTC+1",
            TimeZone::ChinaStandard => "UTC+8",
            TimeZone::JapanStandard => "UTC+9",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeZone::Pacific => "Pacific Time (PT)",
            TimeZone::Mountain => "Mountain Time (MT)",
            TimeZone::Central => "Central Time (CT)",
            TimeZone::Eastern => "Eastern Time (ET)",
            TimeZone::Utc => "Coordinated Universal Time (UTC)",
            TimeZone::CentralEuropean => "Central European Time (CET)",
            TimeZone::ChinaStandard => "China Standard Time (CST)",
            TimeZone::JapanStandard => "Japan Standard Time (JST)",
        }
    }
}

/// Half-hour meeting slot between 09:00 and 17:30
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeSlot {
    /// Minutes after midnight
    minutes: u16,
}

impl TimeSlot {
    const FIRST: u16 = 9 * 60;
    const LAST: u16 = 17 * 60 + 30;
    const STEP: u16 = 30;

    /// Every bookable slot in order
    pub fn all() -> impl Iterator<Item = TimeSlot> {
        (Self::FIRST..=Self::LAST)
            .step_by(Self::STEP as usize)
            .map(|minutes| TimeSlot { minutes })
    }

    pub fn hour(&self) -> u16 {
        self.minutes / 60
    }

    pub fn minute(&self) -> u16 {
        self.minutes % 60
    }
}

/// Text that is not one of the bookable `HH:MM` slots
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a bookable time slot")]
pub struct InvalidTimeSlot(pub String);

impl FromStr for TimeSlot {
    type Err = InvalidTimeSlot;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidTimeSlot(s.to_string());
        let two_digits = |part: &str| part.len() == 2 && part.bytes().all(|b| b.is_ascii_digit());

        let (h, m) = s.trim().split_once(':').ok_or_else(invalid)?;
        if !two_digits(h) || !two_digits(m) {
            return Err(invalid());
        }
        let h: u16 = h.parse().map_err(|_| invalid())?;
        let m: u16 = m.parse().map_err(|_| invalid())?;
        let minutes = h * 60 + m;
        if m >= 60 || !(Self::FIRST..=Self::LAST).contains(&minutes) || minutes % Self::STEP != 0 {
            return Err(invalid());
        }
        Ok(TimeSlot { minutes })
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for TimeSlot {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Services a prospect can ask about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Service {
    VirtualTryOn,
    CustomMannequin,
    EcommerceIntegration,
    WhiteLabelSolution,
    AnalyticsDashboard,
    ApiAccess,
}

impl Service {
    pub fn all() -> &'static [Service] {
        &[
            Service::VirtualTryOn,
            Service::CustomMannequin,
            Service::EcommerceIntegration,
            Service::WhiteLabelSolution,
            Service::AnalyticsDashboard,
            Service::ApiAccess,
        ]
    }

    pub fn id(&self) -> &'static str {
        match self {
            Service::VirtualTryOn => "virtual-try-on",
            Service::CustomMannequin => "custom-mannequin",
            Service::EcommerceIntegration => "ecommerce-integration",
            Service::WhiteLabelSolution => "white-label-solution",
            Service::AnalyticsDashboard => "analytics-dashboard",
            Service::ApiAccess => "api-access",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Service::VirtualTryOn => "3D Virtual Try-On Integration",
            Service::CustomMannequin => "Custom Mannequin Development",
            Service::EcommerceIntegration => "E-commerce Platform Integration",
            Service::WhiteLabelSolution => "White-Label Solution",
            Service::AnalyticsDashboard => "Custom Analytics Dashboard",
            Service::ApiAccess => "API Access & Development",
        }
    }

    /// Match either the id or the display label (the form submits labels)
    pub fn parse(value: &str) -> Option<Service> {
        let value = value.trim();
        Self::all()
            .iter()
            .copied()
            .find(|s| s.id() == value || s.label().eq_ignore_ascii_case(value))
    }
}
