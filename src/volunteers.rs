//! Volunteers for Salesforce records as the probes read them.

use serde::{Deserialize, Serialize};

/// Placeholder printed for absent values.
pub const NOT_AVAILABLE: &str = "N/A";

/// `GW_Volunteers__Volunteer_Job__c` projection.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct VolunteerJob {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "GW_Volunteers__Description__c")]
    pub description: Option<String>,
    #[serde(rename = "GW_Volunteers__Location__c")]
    pub location: Option<String>,
    /// Campaign record id.
    #[serde(rename = "GW_Volunteers__Campaign__c")]
    pub campaign: Option<String>,
    /// Multi-select picklist, `;` separated.
    #[serde(rename = "GW_Volunteers__Skills_Needed__c")]
    pub skills_needed: Option<String>,
    #[serde(rename = "GW_Volunteers__Display_on_Website__c")]
    pub display_on_website: Option<bool>,
}

/// `GW_Volunteers__Volunteer_Shift__c` projection.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct VolunteerShift {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: Option<String>,
    /// ISO-8601 timestamp exactly as Salesforce returns it.
    #[serde(rename = "GW_Volunteers__Start_Date_Time__c")]
    pub start: Option<String>,
    /// Hours. A record without the column counts as one hour.
    #[serde(rename = "GW_Volunteers__Duration__c", default = "one")]
    pub duration: Option<f64>,
    /// A record without the column counts as one spot; `null` stays `None`.
    #[serde(rename = "GW_Volunteers__Total_Volunteers__c", default = "one")]
    pub total_volunteers: Option<f64>,
    #[serde(rename = "GW_Volunteers__Number_of_Volunteers_Still_Needed__c")]
    pub still_needed: Option<f64>,
    #[serde(rename = "GW_Volunteers__Description__c")]
    pub description: Option<String>,
    #[serde(rename = "GW_Volunteers__Volunteer_Job__c", default)]
    pub volunteer_job: Option<String>,
}

fn one() -> Option<f64> {
    Some(1.0)
}

impl VolunteerShift {
    /// Spots already taken on this shift.
    pub fn filled_spots(&self) -> f64 {
        filled_spots(self.total_volunteers, self.still_needed)
    }

    /// `<start> (<duration>h) - <filled>/<total> spots`
    pub fn summary_line(&self) -> String {
        format!(
            "{} ({}h) - {}/{} spots",
            self.start.as_deref().unwrap_or(NOT_AVAILABLE),
            display_number(self.duration),
            format_number(self.filled_spots()),
            display_number(self.total_volunteers),
        )
    }
}

/// `total - still_needed`, where a missing `still_needed` counts as 0.
///
/// A missing or zero total yields 0. The result never goes below 0.
pub fn filled_spots(total: Option<f64>, still_needed: Option<f64>) -> f64 {
    match total {
        Some(total) if total != 0.0 => (total - still_needed.unwrap_or(0.0)).max(0.0),
        _ => 0.0,
    }
}

/// Render a number without a trailing `.0` when it is integral.
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// [`format_number`] for optional values, `N/A` when absent.
pub fn display_number(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), format_number)
}

/// Text value or `N/A`.
pub fn display_text(value: Option<&str>) -> &str {
    value.unwrap_or(NOT_AVAILABLE)
}
