//! HTTP client for the team builder backend.
//!
//! Three endpoints: two multipart PDF parsers returning name lists, and a
//! JSON team generator.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use web_sys::{File, FormData};

use crate::config::endpoint;
use crate::types::{
    AppError, AppResult, Categories, GenerateRequest, GenerateResponse, ParseResponse, RosterFiles,
};

/// Upload the per-category PDFs and get back the three name lists.
///
/// Each selected file goes under the `files` field, renamed to
/// `A.pdf`/`B.pdf`/`C.pdf` so the backend can tell the categories apart.
pub async fn parse_multiple(files: &RosterFiles) -> AppResult<Categories> {
    let form_data = new_form_data()?;

    for category in files.selected_categories() {
        if let Some(file) = files.get(category) {
            form_data
                .append_with_blob_and_filename("files", file, category.upload_filename())
                .map_err(|e| AppError::Browser(format!("Failed to append file: {:?}", e)))?;
        }
    }

    log::info!("📤 Uploading {} category PDF(s)", files.selected_categories().len());
    let response = send(Request::post(&endpoint("/api/parse-multiple")).body(form_data)).await?;
    decode::<ParseResponse>(response).await.map(|r| r.categories)
}

/// Upload one PDF holding all three categories.
pub async fn parse_single(file: &File) -> AppResult<Categories> {
    let form_data = new_form_data()?;
    form_data
        .append_with_blob("file", file)
        .map_err(|e| AppError::Browser(format!("Failed to append file: {:?}", e)))?;

    log::info!("📤 Uploading single PDF {}", file.name());
    let response = send(Request::post(&endpoint("/api/parse-single")).body(form_data)).await?;
    decode::<ParseResponse>(response).await.map(|r| r.categories)
}

/// Ask the backend to build teams from the reviewed lists.
pub async fn generate_teams(request: &GenerateRequest) -> AppResult<GenerateResponse> {
    log::info!(
        "⚙️ Generating teams for {} participants (team size {})",
        request.categories.total(),
        request.options.team_size
    );
    let response = send(Request::post(&endpoint("/api/generate-teams")).json(request)).await?;
    decode(response).await
}

fn new_form_data() -> AppResult<FormData> {
    FormData::new().map_err(|e| AppError::Browser(format!("Failed to create FormData: {:?}", e)))
}

async fn send(request: Result<Request, gloo_net::Error>) -> AppResult<Response> {
    let request = request.map_err(|e| AppError::Network(format!("Failed to build request: {}", e)))?;

    let response = request.send().await.map_err(|e| {
        log::error!("❌ HTTP request failed: {}", e);
        AppError::Network(e.to_string())
    })?;

    if !response.ok() {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        log::error!("❌ Server returned {}: {}", status, body);
        return Err(AppError::Server { status, body });
    }

    Ok(response)
}

async fn decode<T: DeserializeOwned>(response: Response) -> AppResult<T> {
    response
        .json::<T>()
        .await
        .map_err(|e| AppError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_response_deserialization() {
        let json = r#"{
            "categories": {
                "A": ["Asha Rao", "Ravi Kumar"],
                "B": ["Meena Iyer"],
                "C": []
            }
        }"#;

        let result: Result<ParseResponse, _> = serde_json::from_str(json);
        assert!(result.is_ok());

        let response = result.unwrap();
        assert_eq!(response.categories.a.len(), 2);
        assert_eq!(response.categories.b, vec!["Meena Iyer".to_string()]);
        assert!(response.categories.c.is_empty());
        assert_eq!(response.categories.total(), 3);
    }

    #[test]
    fn test_parse_response_requires_categories() {
        let result: Result<ParseResponse, _> = serde_json::from_str(r#"{"teams": []}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_generate_response_without_meta_count() {
        let json = r#"{ "teams": [], "meta": {} }"#;
        let response: GenerateResponse = serde_json::from_str(json).unwrap();
        assert!(response.teams.is_empty());
        assert_eq!(response.meta.incomplete_teams, 0);
    }
}
