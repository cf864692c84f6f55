use std::time::Duration;

use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::ports::outbound::{FieldMeta, IssueRef, IssueTypeMeta, TrackerClient};
use crate::shared::{Result, TicketError};

/// Jira REST v2 client implementing the TrackerClient port
///
/// Authenticates with a bearer access token (personal access token).
///
/// # Security
/// - Implements timeout (30 seconds)
/// - Does not retry failed requests (a rejected call aborts the run)
/// - Certificate verification can be disabled for self-signed servers
pub struct JiraClient {
    client: Client,
    base_url: String,
}

impl JiraClient {
    const TIMEOUT_SECONDS: u64 = 30;

    /// Creates a client for `server`, e.g. `https://jira.example.com`.
    pub fn new(server: &str, token: &str, verify_cert: bool) -> Result<Self> {
        let mut auth =
            HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|e| {
                TicketError::Configuration {
                    name: "jira_token".to_string(),
                    hint: format!("the token is not a valid header value: {}", e),
                }
            })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let version = env!("CARGO_PKG_VERSION");
        let client = Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(format!("rl-jira/{}", version))
            .default_headers(headers)
            .danger_accept_invalid_certs(!verify_cert)
            .build()?;

        Ok(Self {
            client,
            base_url: server.trim_end_matches('/').to_string(),
        })
    }

    fn api_url(&self, tail: &str) -> String {
        format!("{}/rest/api/2/{}", self.base_url, tail)
    }

    /// Sends the request, mapping transport errors and non-success status
    /// codes to `TicketError::TrackerRequest` with full context.
    fn execute(&self, method: &str, url: &str, request: RequestBuilder) -> Result<Response> {
        let response = request.send().map_err(|e| TicketError::TrackerRequest {
            method: method.to_string(),
            url: url.to_string(),
            details: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(TicketError::TrackerRequest {
                method: method.to_string(),
                url: url.to_string(),
                details: format!("{}: {}", status, body),
            }
            .into());
        }

        Ok(response)
    }

    fn get_json<T: for<'de> Deserialize<'de>>(&self, url: &str) -> Result<T> {
        let response = self.execute("GET", url, self.client.get(url))?;
        response.json().map_err(|e| {
            TicketError::TrackerRequest {
                method: "GET".to_string(),
                url: url.to_string(),
                details: format!("unexpected response body: {}", e),
            }
            .into()
        })
    }
}

impl TrackerClient for JiraClient {
    fn create_issue(&self, fields: &Value) -> Result<IssueRef> {
        let url = self.api_url("issue");
        let body = json!({ "fields": fields });
        let response = self.execute("POST", &url, self.client.post(&url).json(&body))?;

        let created: CreatedIssueDto = response.json().map_err(|e| TicketError::TrackerRequest {
            method: "POST".to_string(),
            url: url.clone(),
            details: format!("unexpected response body: {}", e),
        })?;
        Ok(IssueRef {
            id: created.id,
            key: created.key,
        })
    }

    fn add_attachment(&self, issue: &IssueRef, file_name: &str, content: &[u8]) -> Result<()> {
        let url = self.api_url(&format!("issue/{}/attachments", issue.key));
        let part = Part::bytes(content.to_vec()).file_name(file_name.to_string());
        let form = Form::new().part("file", part);

        let request = self
            .client
            .post(&url)
            // Jira rejects attachment posts without the XSRF opt-out header
            .header("X-Atlassian-Token", "no-check")
            .multipart(form);
        self.execute("POST", &url, request)?;
        Ok(())
    }

    fn search_issues(&self, jql: &str) -> Result<Vec<IssueRef>> {
        let url = self.api_url(&format!("search?jql={}", urlencoding::encode(jql)));
        let response: SearchResponseDto = self.get_json(&url)?;
        Ok(response
            .issues
            .into_iter()
            .map(|issue| IssueRef {
                id: issue.id,
                key: issue.key,
            })
            .collect())
    }

    fn project_issue_types(&self, project: &str) -> Result<Vec<IssueTypeMeta>> {
        let url = self.api_url(&format!("issue/createmeta/{}/issuetypes", project));
        let page: PageDto<IssueTypeDto> = self.get_json(&url)?;
        Ok(page
            .values
            .into_iter()
            .map(|issue_type| IssueTypeMeta {
                id: issue_type.id,
                name: issue_type.name,
            })
            .collect())
    }

    fn project_issue_fields(&self, project: &str, issue_type_id: &str) -> Result<Vec<FieldMeta>> {
        let url = self.api_url(&format!(
            "issue/createmeta/{}/issuetypes/{}",
            project, issue_type_id
        ));
        let page: PageDto<FieldDto> = self.get_json(&url)?;
        Ok(page.values.into_iter().map(FieldDto::into_meta).collect())
    }
}

// Jira REST request/response structures

#[derive(Debug, Deserialize)]
struct CreatedIssueDto {
    id: String,
    key: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponseDto {
    #[serde(default)]
    issues: Vec<SearchIssueDto>,
}

#[derive(Debug, Deserialize)]
struct SearchIssueDto {
    id: String,
    key: String,
}

#[derive(Debug, Deserialize)]
struct PageDto<T> {
    #[serde(default = "Vec::new")]
    values: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct IssueTypeDto {
    id: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct FieldDto {
    #[serde(rename = "fieldId")]
    field_id: String,
    name: String,
    #[serde(default)]
    required: bool,
    #[serde(rename = "hasDefaultValue", default)]
    has_default_value: bool,
    #[serde(rename = "allowedValues", default)]
    allowed_values: Vec<Value>,
}

impl FieldDto {
    fn into_meta(self) -> FieldMeta {
        FieldMeta {
            field_id: self.field_id,
            name: self.name,
            required: self.required,
            has_default_value: self.has_default_value,
            allowed_values: self
                .allowed_values
                .iter()
                .map(render_allowed_value)
                .collect(),
        }
    }
}

/// Renders one allowed value by its string form: plain strings as-is,
/// objects by their `value` or `name` member, anything else as raw JSON.
fn render_allowed_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Object(map) => map
            .get("value")
            .or_else(|| map.get("name"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| value.to_string()),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jira_client_creation() {
        let client = JiraClient::new("https://jira.example.com", "token", true);
        assert!(client.is_ok());
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = JiraClient::new("https://jira.example.com/", "token", true).unwrap();
        assert_eq!(
            client.api_url("issue"),
            "https://jira.example.com/rest/api/2/issue"
        );
    }

    #[test]
    fn test_search_url_encodes_jql() {
        let client = JiraClient::new("https://jira.example.com", "token", true).unwrap();
        let url = client.api_url(&format!(
            "search?jql={}",
            urlencoding::encode("summary ~ 'RL: x' AND project = 'SEC'")
        ));
        assert!(url.contains("summary%20~%20%27RL%3A%20x%27"));
        assert!(url.contains("project%20%3D%20%27SEC%27"));
    }

    #[test]
    fn test_created_issue_deserialize() {
        let json = r#"{"id": "10042", "key": "SEC-7", "self": "https://jira.example.com/rest/api/2/issue/10042"}"#;
        let created: CreatedIssueDto = serde_json::from_str(json).unwrap();
        assert_eq!(created.id, "10042");
        assert_eq!(created.key, "SEC-7");
    }

    #[test]
    fn test_search_response_deserialize_empty() {
        let json = r#"{"startAt": 0, "maxResults": 50, "total": 0, "issues": []}"#;
        let response: SearchResponseDto = serde_json::from_str(json).unwrap();
        assert!(response.issues.is_empty());
    }

    #[test]
    fn test_search_response_deserialize_with_issues() {
        let json = r#"{"issues": [{"id": "1", "key": "SEC-1", "fields": {"summary": "RL: x"}}]}"#;
        let response: SearchResponseDto = serde_json::from_str(json).unwrap();
        assert_eq!(response.issues.len(), 1);
        assert_eq!(response.issues[0].key, "SEC-1");
    }

    #[test]
    fn test_issue_type_page_deserialize() {
        let json = r#"{"maxResults": 50, "startAt": 0, "total": 2, "values": [
            {"id": "10001", "name": "Task", "subtask": false},
            {"id": "10002", "name": "Bug", "subtask": false}
        ]}"#;
        let page: PageDto<IssueTypeDto> = serde_json::from_str(json).unwrap();
        assert_eq!(page.values.len(), 2);
        assert_eq!(page.values[0].name, "Task");
    }

    #[test]
    fn test_field_dto_deserialize_and_convert() {
        let json = r#"{
            "fieldId": "customfield_10001",
            "name": "Severity",
            "required": true,
            "hasDefaultValue": false,
            "allowedValues": [
                {"value": "Critical", "id": "1"},
                {"name": "High", "id": "2"},
                "Low"
            ]
        }"#;
        let dto: FieldDto = serde_json::from_str(json).unwrap();
        let meta = dto.into_meta();
        assert_eq!(meta.field_id, "customfield_10001");
        assert!(meta.required);
        assert!(!meta.has_default_value);
        assert_eq!(meta.allowed_values, vec!["Critical", "High", "Low"]);
    }

    #[test]
    fn test_field_dto_defaults() {
        let json = r#"{"fieldId": "summary", "name": "Summary"}"#;
        let dto: FieldDto = serde_json::from_str(json).unwrap();
        let meta = dto.into_meta();
        assert!(!meta.required);
        assert!(!meta.has_default_value);
        assert!(meta.allowed_values.is_empty());
    }

    #[test]
    fn test_render_allowed_value_object_without_string_form() {
        let value = serde_json::json!({"id": 7});
        assert_eq!(render_allowed_value(&value), r#"{"id":7}"#);
    }
}
