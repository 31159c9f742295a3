//! # HTTP client wrapper and resource accessors
//!
//! [`ApiClient::request`] is the single place a request leaves the front end. It:
//!
//! 1. joins the path onto the configured base URL and attaches query pairs,
//! 2. sends JSON bodies with `Content-Type: application/json`,
//! 3. reads the body as text and parses it as JSON only when the trimmed text starts
//!    with `{` or `[` (anything else is kept as a JSON string),
//! 4. turns a non-2xx status into [`ApiError::Status`].
//!
//! Every other method is a thin accessor for one backend operation. List accessors
//! run the body through the matching [`envelope`] adapter and drop elements that do
//! not deserialize.
//!
//! No request is retried and no timeout is configured beyond the transport's own.

use reqwest::{Client, Method};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::ClientConfig;
use crate::envelope::{self, records};
use crate::error::{ApiError, Result};
use crate::models::{
    ChatReply, SearchFilters, Student, StudentPayload, Subject, Tutor, TutorPayload,
};

/// Handle to the backend. Cheap to clone; clones share the connection pool.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    student_id: i64,
    message: &'a str,
    use_ai: bool,
}

#[derive(Deserialize)]
struct RawChatReply {
    #[serde(default)]
    reply: String,
    #[serde(default)]
    tutors: Value,
}

impl ApiClient {
    /// Create a client for the API rooted at `base_url` (e.g. `http://host/api`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            base_url,
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Perform one request and return the parsed body.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Value>,
    ) -> Result<Value> {
        let url = self.url(path);
        tracing::debug!("{method} {url} {query:?}");

        let mut request = self.http.request(method.clone(), &url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            tracing::warn!("{method} {url} failed: {e}");
            ApiError::from(e)
        })?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let body = parse_body(&text).unwrap_or_else(|_| Value::String(text));
            let err = ApiError::from_status(status.as_u16(), body);
            tracing::warn!("{method} {url}: {err}");
            return Err(err);
        }

        Ok(parse_body(&text)?)
    }

    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Value> {
        self.request(Method::GET, path, query, None).await
    }

    async fn send_json<T: Serialize>(&self, method: Method, path: &str, payload: &T) -> Result<Value> {
        let body = serde_json::to_value(payload)?;
        self.request(method, path, &[], Some(body)).await
    }

    async fn delete(&self, path: &str) -> Result<()> {
        self.request(Method::DELETE, path, &[], None).await?;
        Ok(())
    }

    /// `GET /subjects`
    pub async fn list_subjects(&self) -> Result<Vec<Subject>> {
        let body = self.get("subjects", &[]).await?;
        Ok(records(envelope::bare_list(body), "subject"))
    }

    /// `GET /cities`
    pub async fn list_cities(&self) -> Result<Vec<String>> {
        let body = self.get("cities", &[]).await?;
        Ok(records(envelope::bare_list(body), "city"))
    }

    /// `GET /students`, flattened from whichever envelope the backend used.
    pub async fn list_students(&self) -> Result<Vec<Student>> {
        let body = self.get("students", &[]).await?;
        Ok(records(envelope::student_list(body), "student"))
    }

    /// `GET /tutors/search` with only the non-empty filters as query parameters.
    pub async fn search_tutors(&self, filters: &SearchFilters) -> Result<Vec<Tutor>> {
        let body = self.get("tutors/search", &filters.query_pairs()).await?;
        Ok(records(envelope::bare_list(body), "tutor"))
    }

    /// `GET /tutors/{id}`, including reviews.
    pub async fn get_tutor(&self, id: i64) -> Result<Tutor> {
        let body = self.get(&format!("tutors/{id}"), &[]).await?;
        Ok(serde_json::from_value(body)?)
    }

    /// `GET /tutors/{id}/similar`
    pub async fn similar_tutors(&self, id: i64) -> Result<Vec<Tutor>> {
        let body = self.get(&format!("tutors/{id}/similar"), &[]).await?;
        Ok(records(envelope::bare_list(body), "tutor"))
    }

    /// `GET /students/{id}/recommendations?use_ai=...`
    ///
    /// `use_ai` asks the backend for natural-language explanations on each tutor.
    pub async fn recommendations(&self, student_id: i64, use_ai: bool) -> Result<Vec<Tutor>> {
        let query = [("use_ai", use_ai.to_string())];
        let body = self
            .get(&format!("students/{student_id}/recommendations"), &query)
            .await?;
        Ok(records(envelope::recommendation_list(body), "tutor"))
    }

    /// `POST /chat`: ask the recommender about a student in free text.
    pub async fn chat(&self, student_id: i64, message: &str, use_ai: bool) -> Result<ChatReply> {
        let request = ChatRequest {
            student_id,
            message,
            use_ai,
        };
        let body = self.send_json(Method::POST, "chat", &request).await?;
        let raw: RawChatReply = serde_json::from_value(body)?;
        Ok(ChatReply {
            reply: raw.reply,
            tutors: records(envelope::bare_list(raw.tutors), "tutor"),
        })
    }

    /// `POST /tutors`
    pub async fn create_tutor(&self, payload: &TutorPayload) -> Result<Tutor> {
        let body = self.send_json(Method::POST, "tutors", payload).await?;
        Ok(serde_json::from_value(body)?)
    }

    /// `PUT /tutors/{id}`
    pub async fn update_tutor(&self, id: i64, payload: &TutorPayload) -> Result<Tutor> {
        let body = self
            .send_json(Method::PUT, &format!("tutors/{id}"), payload)
            .await?;
        Ok(serde_json::from_value(body)?)
    }

    /// `DELETE /tutors/{id}`
    pub async fn delete_tutor(&self, id: i64) -> Result<()> {
        self.delete(&format!("tutors/{id}")).await
    }

    /// `POST /students`
    pub async fn create_student(&self, payload: &StudentPayload) -> Result<Student> {
        let body = self.send_json(Method::POST, "students", payload).await?;
        Ok(serde_json::from_value(body)?)
    }

    /// `PUT /students/{id}`
    pub async fn update_student(&self, id: i64, payload: &StudentPayload) -> Result<Student> {
        let body = self
            .send_json(Method::PUT, &format!("students/{id}"), payload)
            .await?;
        Ok(serde_json::from_value(body)?)
    }

    /// `DELETE /students/{id}`
    pub async fn delete_student(&self, id: i64) -> Result<()> {
        self.delete(&format!("students/{id}")).await
    }
}

/// Parse a response body: JSON when it looks like JSON, raw text otherwise.
pub fn parse_body(text: &str) -> std::result::Result<Value, serde_json::Error> {
    let trimmed = text.trim();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        serde_json::from_str(trimmed)
    } else {
        Ok(Value::String(text.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_body() {
        assert_eq!(parse_body(" [1, 2]\n").unwrap(), json!([1, 2]));
        assert_eq!(parse_body(r#"{"a": 1}"#).unwrap(), json!({"a": 1}));
        assert_eq!(parse_body("plain text").unwrap(), json!("plain text"));
        assert_eq!(parse_body("").unwrap(), json!(""));
        // Numbers and literals are not sniffed as JSON.
        assert_eq!(parse_body("42").unwrap(), json!("42"));
        assert!(parse_body("{not json").is_err());
    }

    #[test]
    fn test_url_joining() {
        let client = ApiClient::new("http://localhost:8000/api/");
        assert_eq!(client.base_url(), "http://localhost:8000/api");
        assert_eq!(client.url("tutors/3"), "http://localhost:8000/api/tutors/3");
        assert_eq!(client.url("/subjects"), "http://localhost:8000/api/subjects");
    }

    #[test]
    fn test_from_config() {
        let config = ClientConfig::new("https://tutors.example.com/api");
        assert_eq!(
            ApiClient::from_config(&config).base_url(),
            "https://tutors.example.com/api"
        );
    }
}
