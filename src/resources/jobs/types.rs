use crate::core::types::AttributeMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a job. Only `active` and `archived` exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Active,
    Archived,
}

impl JobStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Archived => "archived",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Data path for partial job responses, see [`GetJobOptions::paths`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobPath {
    Name,
    JobCreator,
    JobOwner,
    ProjectFolder,
    ProjectId,
    Status,
    Done,
    MapStyles,
    Metadata,
    Sharing,
}

impl JobPath {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::JobCreator => "job_creator",
            Self::JobOwner => "job_owner",
            Self::ProjectFolder => "project_folder",
            Self::ProjectId => "project_id",
            Self::Status => "status",
            Self::Done => "done",
            Self::MapStyles => "map_styles",
            Self::Metadata => "metadata",
            Self::Sharing => "sharing",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Job {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<JobStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_styles: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<AttributeMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sharing: Option<AttributeMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_creator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_folder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(default)]
    pub done: bool,
}

/// Body for `POST v3/jobs`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateJobRequest {
    pub name: String,
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_styles: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<AttributeMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sharing: Option<AttributeMap>,
}

impl CreateJobRequest {
    pub fn new(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
            ..Self::default()
        }
    }
}

/// Body for `POST v3/jobs/:job_id`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateJobRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_styles: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<AttributeMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sharing: Option<AttributeMap>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateJobStatusRequest {
    pub status: JobStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobStatusResponse {
    pub status: JobStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListJobsOptions {
    pub include_archived: bool,
    pub metadata_filter: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetJobOptions {
    /// Only return these fields; empty means the full job
    pub paths: Vec<JobPath>,
}

impl GetJobOptions {
    pub fn paths(paths: impl IntoIterator<Item = JobPath>) -> Self {
        Self {
            paths: paths.into_iter().collect(),
        }
    }

    pub(crate) fn joined_paths(&self) -> Option<String> {
        if self.paths.is_empty() {
            return None;
        }
        Some(
            self.paths
                .iter()
                .map(|path| path.as_str())
                .collect::<Vec<_>>()
                .join(","),
        )
    }
}
