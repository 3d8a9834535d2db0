//! Metadata and sample-data explorer for the Volunteers objects.
//!
//! Output is written section by section, so whatever was printed before a
//! failure stays on the writer.

use std::io::Write;

use tracing::{debug, instrument};
use volprobe_sf_client::security::url::is_valid_salesforce_id;
use volprobe_sf_rest::{FieldDescribe, QueryBuilder, SalesforceRestClient};

use crate::bootstrap::connect;
use crate::config::ProbeConfig;
use crate::error::{Error, Result};
use crate::volunteers::{display_text, VolunteerJob, VolunteerShift, NOT_AVAILABLE};

pub const JOB_OBJECT: &str = "GW_Volunteers__Volunteer_Job__c";
pub const SHIFT_OBJECT: &str = "GW_Volunteers__Volunteer_Shift__c";

/// Job fields listed in the field report.
pub const JOB_FIELD_ALLOW_LIST: [&str; 9] = [
    "Id",
    "Name",
    "GW_Volunteers__Description__c",
    "GW_Volunteers__Location__c",
    "GW_Volunteers__Campaign__c",
    "GW_Volunteers__Skills_Needed__c",
    "GW_Volunteers__Display_on_Website__c",
    "GW_Volunteers__Program__c",
    "GW_Volunteers__Status__c",
];

/// Shift fields listed in the field report.
pub const SHIFT_FIELD_ALLOW_LIST: [&str; 10] = [
    "Id",
    "Name",
    "GW_Volunteers__Start_Date_Time__c",
    "GW_Volunteers__Duration__c",
    "GW_Volunteers__Total_Volunteers__c",
    "GW_Volunteers__Number_of_Volunteers_Still_Needed__c",
    "GW_Volunteers__Description__c",
    "GW_Volunteers__System_Note__c",
    "GW_Volunteers__Volunteer_Job__c",
    "GW_Volunteers__Status__c",
];

/// Columns selected for sample jobs.
pub const JOB_QUERY_FIELDS: [&str; 7] = [
    "Id",
    "Name",
    "GW_Volunteers__Description__c",
    "GW_Volunteers__Location__c",
    "GW_Volunteers__Campaign__c",
    "GW_Volunteers__Skills_Needed__c",
    "GW_Volunteers__Display_on_Website__c",
];

/// Columns selected for each job's recent shifts.
pub const SHIFT_QUERY_FIELDS: [&str; 7] = [
    "Id",
    "Name",
    "GW_Volunteers__Start_Date_Time__c",
    "GW_Volunteers__Duration__c",
    "GW_Volunteers__Total_Volunteers__c",
    "GW_Volunteers__Number_of_Volunteers_Still_Needed__c",
    "GW_Volunteers__Description__c",
];

pub const SAMPLE_JOB_LIMIT: u32 = 5;
pub const RECENT_SHIFT_LIMIT: u32 = 3;

const SHIFT_PARENT_FIELD: &str = "GW_Volunteers__Volunteer_Job__c";
const SHIFT_START_FIELD: &str = "GW_Volunteers__Start_Date_Time__c";

/// `(name, label, type)` of one described field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSummary {
    pub name: String,
    pub label: String,
    pub field_type: String,
}

impl From<&FieldDescribe> for FieldSummary {
    fn from(field: &FieldDescribe) -> Self {
        Self {
            name: field.name.clone(),
            label: field.label.clone(),
            field_type: field.field_type.clone(),
        }
    }
}

impl std::fmt::Display for FieldSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} ({})", self.name, self.label, self.field_type)
    }
}

/// SOQL for the jobs sample.
pub fn job_query() -> Result<String> {
    let query = QueryBuilder::<VolunteerJob>::new(JOB_OBJECT)?
        .select(&JOB_QUERY_FIELDS)
        .limit(SAMPLE_JOB_LIMIT)
        .build()?;
    Ok(query)
}

/// SOQL for the latest shifts with a start time under `job_id`.
pub fn shift_query(job_id: &str) -> Result<String> {
    if !is_valid_salesforce_id(job_id) {
        return Err(Error::operation_failed(format!(
            "Invalid job id: {job_id}"
        )));
    }

    let query = QueryBuilder::<VolunteerShift>::new(SHIFT_OBJECT)?
        .select(&SHIFT_QUERY_FIELDS)
        .where_eq(SHIFT_PARENT_FIELD, job_id)?
        .where_not_null(SHIFT_START_FIELD)?
        .order_by(SHIFT_START_FIELD, false)?
        .limit(RECENT_SHIFT_LIMIT)
        .build()?;
    Ok(query)
}

/// Runs the describe and sample queries against one session.
pub struct Explorer<'a> {
    rest: &'a SalesforceRestClient,
}

impl<'a> Explorer<'a> {
    pub fn new(rest: &'a SalesforceRestClient) -> Self {
        Self { rest }
    }

    /// Describe `sobject` and keep the allow-listed fields in describe order.
    #[instrument(skip(self, allow_list))]
    pub async fn field_summaries(
        &self,
        sobject: &str,
        allow_list: &[&str],
    ) -> Result<Vec<FieldSummary>> {
        let describe = self.rest.describe_sobject(sobject).await?;
        let summaries: Vec<FieldSummary> = describe
            .fields_in(allow_list)
            .map(FieldSummary::from)
            .collect();
        debug!(
            described = describe.fields.len(),
            kept = summaries.len(),
            "Filtered fields"
        );
        Ok(summaries)
    }

    /// Up to five jobs.
    pub async fn sample_jobs(&self) -> Result<Vec<VolunteerJob>> {
        let jobs = self.rest.query_records(&job_query()?).await?;
        Ok(jobs)
    }

    /// Up to three shifts of `job_id`, newest start first, none without a start.
    #[instrument(skip(self))]
    pub async fn recent_shifts(&self, job_id: &str) -> Result<Vec<VolunteerShift>> {
        let shifts: Vec<VolunteerShift> = self.rest.query_records(&shift_query(job_id)?).await?;
        Ok(shifts
            .into_iter()
            .filter(|s| s.start.is_some())
            .take(RECENT_SHIFT_LIMIT as usize)
            .collect())
    }

    /// Write the field and sample sections.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "\n=== VOLUNTEER JOB FIELDS ===")?;
        for field in self.field_summaries(JOB_OBJECT, &JOB_FIELD_ALLOW_LIST).await? {
            writeln!(out, "{field}")?;
        }

        writeln!(out, "\n=== VOLUNTEER SHIFT FIELDS ===")?;
        for field in self.field_summaries(SHIFT_OBJECT, &SHIFT_FIELD_ALLOW_LIST).await? {
            writeln!(out, "{field}")?;
        }

        writeln!(out, "\n=== SAMPLE VOLUNTEER JOBS ===")?;
        let jobs = self.sample_jobs().await?;
        writeln!(out, "Found {} total jobs", jobs.len())?;

        for job in jobs {
            write_job(out, &job)?;
            let shifts = self.recent_shifts(&job.id).await?;
            writeln!(out, "  Recent Shifts: {}", shifts.len())?;
            for shift in &shifts {
                writeln!(out, "    - {}", shift.summary_line())?;
            }
        }

        Ok(())
    }
}

fn write_job<W: Write>(out: &mut W, job: &VolunteerJob) -> std::io::Result<()> {
    let display_on_website = job
        .display_on_website
        .map_or_else(|| NOT_AVAILABLE.to_string(), |v| v.to_string());

    writeln!(out, "\nJob: {}", job.name)?;
    writeln!(out, "  ID: {}", job.id)?;
    writeln!(out, "  Description: {}", display_text(job.description.as_deref()))?;
    writeln!(out, "  Location: {}", display_text(job.location.as_deref()))?;
    writeln!(out, "  Campaign: {}", display_text(job.campaign.as_deref()))?;
    writeln!(out, "  Skills Needed: {}", display_text(job.skills_needed.as_deref()))?;
    writeln!(out, "  Display on Website: {display_on_website}")
}

/// Connect with `config` and write the full report to `out`.
pub async fn explore<W: Write>(config: &ProbeConfig, out: &mut W) -> Result<()> {
    let session = connect(config).await?;
    writeln!(out, "✅ Connected to Salesforce!")?;
    Explorer::new(session.rest()).run(out).await
}
