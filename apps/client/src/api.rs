//! Typed wrapper over a `Transport` for every portfolio endpoint.

use std::sync::Arc;

use portfolio_types::{BioRequest, BioResponse, Profile, Project, ProjectId, ProjectInput};
use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::transport::{Transport, TransportError};

#[derive(Clone)]
pub struct PortfolioApi {
    transport: Arc<dyn Transport>,
}

impl PortfolioApi {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub async fn get_profile(&self) -> Result<Profile, TransportError> {
        self.call(Method::GET, "/api/profile", None::<&()>).await
    }

    pub async fn update_profile(&self, profile: &Profile) -> Result<Profile, TransportError> {
        self.call(Method::PUT, "/api/profile", Some(profile)).await
    }

    pub async fn list_projects(&self) -> Result<Vec<Project>, TransportError> {
        self.call(Method::GET, "/api/projects", None::<&()>).await
    }

    pub async fn create_project(&self, input: &ProjectInput) -> Result<Project, TransportError> {
        self.call(Method::POST, "/api/projects", Some(input)).await
    }

    pub async fn update_project(
        &self,
        id: ProjectId,
        input: &ProjectInput,
    ) -> Result<Project, TransportError> {
        self.call(Method::PUT, &format!("/api/projects/{id}"), Some(input))
            .await
    }

    /// The server acknowledges with an empty body; any success status counts.
    pub async fn delete_project(&self, id: ProjectId) -> Result<(), TransportError> {
        self.transport
            .send(Method::DELETE, &format!("/api/projects/{id}"), None)
            .await
            .map(|_| ())
    }

    pub async fn generate_bio(
        &self,
        skills: &[String],
        title: &str,
    ) -> Result<String, TransportError> {
        let request = BioRequest {
            skills: skills.to_vec(),
            title: title.to_string(),
        };
        let response: BioResponse = self
            .call(Method::POST, "/api/generate-bio", Some(&request))
            .await?;
        Ok(response.bio)
    }

    async fn call<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, TransportError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = body
            .map(serde_json::to_value)
            .transpose()
            .map_err(|e| TransportError::Malformed(format!("request body: {e}")))?;
        let value = self.transport.send(method, path, body).await?;
        decode(path, value)
    }
}

fn decode<T: DeserializeOwned>(path: &str, value: Value) -> Result<T, TransportError> {
    serde_json::from_value(value).map_err(|e| TransportError::Malformed(format!("{path}: {e}")))
}
