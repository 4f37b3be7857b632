use crate::config::Config;
use crate::errors::ClientError;
use crate::models::{Project, ProjectEnvelope};
use reqwest::multipart;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::time::Duration;

/// Client for the projects API.
///
/// Holds the once-read configuration and a shared `reqwest::Client`; there
/// is no other state, so cloning is cheap and operations never race. When no
/// base URL is configured, listing falls back to the local mock file and
/// write operations fail before any request is made.
#[derive(Clone)]
pub struct ProjectClient {
    http: reqwest::Client,
    config: Config,
}

impl ProjectClient {
    /// Creates a client with a default transport (30s request timeout).
    pub fn new(config: Config) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                ClientError::Transport(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { http, config })
    }

    /// Creates a client over a caller-supplied transport, so tests and
    /// embedders can control timeouts, proxies and connection reuse.
    pub fn with_http(config: Config, http: reqwest::Client) -> Self {
        Self { http, config }
    }

    /// The configured base URL, or the empty string when unconfigured.
    pub fn api_base(&self) -> &str {
        self.config.api_base.as_deref().unwrap_or("")
    }

    /// Lists all projects.
    ///
    /// With a configured base this issues `GET {base}/projects`; without one
    /// it reads the local mock file, supporting offline/demo use with no
    /// backend. Either way the payload goes through the same parse rules.
    pub async fn list_projects(&self) -> Result<Vec<Project>, ClientError> {
        self.list().await
    }

    /// Lists projects in the envelope schema revision, where each row wraps
    /// the record with its server-side processing state.
    pub async fn list_envelopes(
        &self,
    ) -> Result<Vec<ProjectEnvelope>, ClientError> {
        self.list().await
    }

    async fn list<T: DeserializeOwned>(&self) -> Result<Vec<T>, ClientError> {
        let body = match &self.config.api_base {
            Some(base) => {
                let url = format!("{}/projects", base);
                tracing::info!("Fetching projects from {}", url);

                let response = self
                    .http
                    .get(&url)
                    .header(reqwest::header::ACCEPT, "application/json")
                    .send()
                    .await?;

                if !response.status().is_success() {
                    return Err(ClientError::Http {
                        op: "fetch projects",
                        status: response.status().as_u16(),
                    });
                }

                response.json::<Value>().await.map_err(|e| {
                    ClientError::Format(format!("Response body is not JSON: {}", e))
                })?
            }
            None => {
                tracing::info!(
                    "No API base configured, reading mock listing {}",
                    self.config.mock_path.display()
                );
                let raw = tokio::fs::read_to_string(&self.config.mock_path)
                    .await
                    .map_err(|e| {
                        ClientError::MockResource(format!(
                            "Failed to read {}: {}",
                            self.config.mock_path.display(),
                            e
                        ))
                    })?;
                serde_json::from_str(&raw).map_err(|e| {
                    ClientError::MockResource(format!(
                        "{} is not valid JSON: {}",
                        self.config.mock_path.display(),
                        e
                    ))
                })?
            }
        };

        parse_listing(body)
    }

    /// Uploads a project file for the backend to process into a record.
    ///
    /// Posts a multipart form with the file under the `file` field to
    /// `{base}/projects/upload` and returns the created record. Fails up
    /// front when no base URL is configured; there is no mock fallback for
    /// writes.
    pub async fn upload_project(
        &self,
        filename: &str,
        contents: Vec<u8>,
    ) -> Result<Project, ClientError> {
        let base = self.require_base("cannot upload")?;
        let url = format!("{}/projects/upload", base);
        tracing::info!("Uploading {} to {}", filename, url);

        let form = multipart::Form::new().part(
            "file",
            multipart::Part::bytes(contents).file_name(filename.to_string()),
        );

        let response = self.http.post(&url).multipart(form).send().await?;

        if !response.status().is_success() {
            return Err(ClientError::Http {
                op: "upload",
                status: response.status().as_u16(),
            });
        }

        let created = response.json().await.map_err(|e| {
            ClientError::Format(format!("Failed to parse created project: {}", e))
        })?;

        tracing::info!("Upload of {} accepted", filename);
        Ok(created)
    }

    /// Deletes the project with the given id.
    ///
    /// Issues `DELETE {base}/project` with the JSON body `{"id": <id>}`.
    /// Fails up front when no base URL is configured.
    pub async fn delete_project(&self, id: &str) -> Result<(), ClientError> {
        let base = self.require_base("cannot delete")?;
        let url = format!("{}/project", base);
        tracing::info!("Deleting project {} via {}", id, url);

        let response = self
            .http
            .delete(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .json(&json!({ "id": id }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ClientError::Http {
                op: "delete",
                status: response.status().as_u16(),
            });
        }

        tracing::info!("Project {} deleted", id);
        Ok(())
    }

    fn require_base(&self, what: &str) -> Result<&str, ClientError> {
        self.config
            .api_base
            .as_deref()
            .ok_or_else(|| ClientError::Unconfigured(what.to_string()))
    }
}

/// Interprets a list-response payload.
///
/// Accepted shapes, for forward compatibility across backend revisions:
/// a bare array (taken as-is), an object with an `items` array (unwrapped),
/// or a single bare object (wrapped into a one-element vec). Anything else
/// is a format error. The wrap-single-object policy follows the canonical
/// schema revision; see DESIGN.md.
fn parse_listing<T: DeserializeOwned>(body: Value) -> Result<Vec<T>, ClientError> {
    let records = match body {
        Value::Array(_) => body,
        Value::Object(mut map) => {
            if matches!(map.get("items"), Some(Value::Array(_))) {
                map.remove("items").unwrap_or(Value::Null)
            } else {
                Value::Array(vec![Value::Object(map)])
            }
        }
        other => {
            return Err(ClientError::Format(format!(
                "Expected an array, an items object or a record, got {}",
                type_name(&other)
            )))
        }
    };

    serde_json::from_value(records)
        .map_err(|e| ClientError::Format(format!("Malformed project listing: {}", e)))
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
