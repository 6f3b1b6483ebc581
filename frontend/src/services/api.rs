use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::{
    decode_mutation_body, ApiError, CreateExpenseResponse, DeleteExpenseResponse, Expense,
    ExpenseListResponse, ExpenseQuery, ExpenseRequest, UpdateExpenseResponse,
};

use super::config::{normalize_base_url, AppConfig};
use super::logging::Logger;

const COMPONENT: &str = "api-client";

/// API client for the expenses REST service
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the configured base URL
    pub fn new() -> Self {
        Self::with_base_url(AppConfig::from_env().api_base_url)
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url: normalize_base_url(&base_url),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn record_url(&self, action: &str, id: &str) -> String {
        let encoded: String = js_sys::encode_uri_component(id).into();
        self.url(&format!("/expenses/{}/{}", action, encoded))
    }

    /// Create an expense; the server assigns its id
    pub async fn create_expense(&self, request: &ExpenseRequest) -> Result<CreateExpenseResponse, ApiError> {
        let url = self.url("/expenses/create");

        let response = Request::post(&url)
            .json(request)
            .map_err(|e| ApiError::Serialize(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        read_mutation(response).await
    }

    /// List expenses for a query, whatever shape the endpoint answers with.
    /// The server signals "no matches" with a 404 carrying a detail; that is an
    /// empty list here. A 404 without one is a wrong base URL and an error.
    pub async fn list_expenses(&self, query: &ExpenseQuery) -> Result<Vec<Expense>, ApiError> {
        let url = self.url(query.endpoint.path());

        let response = Request::get(&url)
            .query(query.params())
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        match read_json::<ExpenseListResponse>(response).await {
            Ok(list) => Ok(list.into_expenses()),
            Err(err) if err.is_no_matches() => {
                Logger::debug_with_component(COMPONENT, "List endpoint reported no matches");
                Ok(Vec::new())
            }
            Err(err) => Err(err),
        }
    }

    /// Replace the fields of an existing expense
    pub async fn update_expense(&self, id: &str, request: &ExpenseRequest) -> Result<UpdateExpenseResponse, ApiError> {
        let url = self.record_url("update-by-id", id);

        let response = Request::put(&url)
            .json(request)
            .map_err(|e| ApiError::Serialize(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        read_mutation(response).await
    }

    pub async fn delete_expense(&self, id: &str) -> Result<DeleteExpenseResponse, ApiError> {
        let url = self.record_url("delete-by-id", id);

        let response = Request::delete(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        read_mutation(response).await
    }
}

/// Body of a 2xx response, or `ApiError::Server` for any other status
async fn read_body(response: &Response) -> Result<String, ApiError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        let err = ApiError::from_response_body(status, &body);
        if !err.is_no_matches() {
            Logger::warn_with_component(COMPONENT, &format!("{} ({})", err, response.url()));
        }
        return Err(err);
    }

    Ok(body)
}

/// Decode a mutation reply. The change is committed on any 2xx, so a body
/// that does not decode only loses the informational fields.
async fn read_mutation<T: DeserializeOwned + Default>(response: Response) -> Result<T, ApiError> {
    let body = read_body(&response).await?;
    if !body.trim().is_empty() && serde_json::from_str::<serde_json::Value>(&body).is_err() {
        Logger::warn_with_component(COMPONENT, &format!("Ignoring non-JSON reply from {}", response.url()));
    }
    Ok(decode_mutation_body(&body))
}

/// Decode a 2xx body as `T`
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let body = read_body(&response).await?;

    serde_json::from_str(&body).map_err(|e| {
        Logger::error_with_component(COMPONENT, &format!("Undecodable response from {}: {}", response.url(), e));
        ApiError::Decode(e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_base_url_is_normalized() {
        let client = ApiClient::with_base_url("https://expenses.example.com/api/".to_string());
        assert_eq!(client.base_url(), "https://expenses.example.com/api");
        assert_eq!(
            client.url("/expenses/create"),
            "https://expenses.example.com/api/expenses/create"
        );
    }

    #[wasm_bindgen_test]
    fn test_record_urls() {
        let client = ApiClient::with_base_url("http://localhost:8000/api".to_string());
        assert_eq!(
            client.record_url("update-by-id", "65a1f0c2e4b0a1b2c3d4e5f6"),
            "http://localhost:8000/api/expenses/update-by-id/65a1f0c2e4b0a1b2c3d4e5f6"
        );
        assert_eq!(
            client.record_url("delete-by-id", "a/b"),
            "http://localhost:8000/api/expenses/delete-by-id/a%2Fb"
        );
    }

    #[wasm_bindgen_test]
    fn test_new_uses_configured_base_url() {
        let client = ApiClient::new();
        assert_eq!(client.base_url(), AppConfig::from_env().api_base_url);
        assert!(!client.base_url().ends_with('/'));
    }
}
