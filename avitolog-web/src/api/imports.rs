use super::ApiClient;
use async_trait::async_trait;
use avitolog_common::{ApiFailure, ImportJob, ImportsApi};
use serde_json::json;

#[async_trait(?Send)]
impl ImportsApi for ApiClient {
    async fn create_import(&self, url: &str) -> Result<ImportJob, ApiFailure> {
        self.post("/imports/", json!({ "url": url })).await
    }

    async fn import_status(&self, job_id: &str) -> Result<ImportJob, ApiFailure> {
        self.get(&format!("/imports/{job_id}/")).await
    }
}
