use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{Result, SearchError};

/// A single job posting as returned by the search API.
///
/// The backend owns this shape, so every field is optional. A field that is
/// missing or of an unexpected type renders as blank.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Job {
    #[serde(rename = "_id", deserialize_with = "lenient")]
    pub object_id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub company: Option<Company>,
    #[serde(deserialize_with = "lenient")]
    pub location: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub job_type: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub experience_level: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub skills_required: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient")]
    pub posted_date: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub job_url: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub source: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub hashtags: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Company {
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub website: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub industry: Option<String>,
}

/// Decodes a field as `T`, falling back to `None` when the value has another type.
fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

impl Job {
    /// The backend's `_id`, or `id` when that is all the posting carries.
    pub fn id(&self) -> Option<&str> {
        self.object_id.as_deref().or(self.id.as_deref())
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    pub fn company_name(&self) -> &str {
        self.company
            .as_ref()
            .and_then(|company| company.name.as_deref())
            .unwrap_or_default()
    }

    pub fn location(&self) -> &str {
        self.location.as_deref().unwrap_or_default()
    }

    pub fn source(&self) -> &str {
        self.source.as_deref().unwrap_or_default()
    }
}

/// Body of `POST /api/jobs/search/hashtags`.
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest<'a> {
    pub hashtags: &'a [String],
}

/// Generic `{success, message, data}` envelope the backend wraps responses in.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Health {
    pub version: Option<String>,
    pub status: Option<String>,
}

/// Extracts the job list found at `data.jobs` in a search response body.
///
/// A missing or null `data.jobs` is an empty result, not an error. Each entry
/// is decoded on its own, so one odd posting never drops the rest; entries that
/// are not objects become blank jobs.
pub fn jobs_from_body(body: &str) -> Result<Vec<Job>> {
    let envelope: Value = serde_json::from_str(body)?;

    let jobs = match envelope.pointer("/data/jobs") {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(jobs)) => jobs,
        Some(other) => {
            return Err(SearchError::Malformed(format!(
                "expected `data.jobs` to be a list, got {other}"
            )));
        }
    };

    Ok(jobs
        .iter()
        .map(|job| Job::deserialize(job).unwrap_or_default())
        .collect())
}
