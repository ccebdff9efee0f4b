//! Live HTTP binding for the Trello REST API.
//!
//! Authentication uses the key+token query parameters the REST API supports
//! for single-user tools. The OAuth1 secrets from the config surface are not
//! part of request signing.

use crate::errors::GtdError;
use crate::trello::types::{Attachment, Board, BoardList, Card, Label};
use crate::trello::BoardApi;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

const DEFAULT_API_BASE: &str = "https://api.trello.com/1";

#[derive(Debug, Clone)]
pub struct TrelloClient {
    client: Client,
    api_base: String,
    api_key: String,
    token: String,
}

impl TrelloClient {
    pub fn new(api_key: String, token: String) -> Self {
        Self {
            client: Client::new(),
            api_base: DEFAULT_API_BASE.to_string(),
            api_key,
            token,
        }
    }

    /// Point the client at a different endpoint, for tests and mirrors.
    pub fn with_api_base(mut self, api_base: String) -> Self {
        self.api_base = api_base.trim_end_matches('/').to_string();
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    fn auth_query(&self) -> [(&'static str, &str); 2] {
        [("key", self.api_key.as_str()), ("token", self.token.as_str())]
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, GtdError> {
        let url = self.url(path);
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .query(&self.auth_query())
            .query(query)
            .send()
            .await
            .map_err(|e| GtdError::ApiError(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GtdError::ApiError(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(GtdError::ApiError(format!(
                "API request failed with status {}: {}",
                status, body
            )));
        }

        serde_json::from_str(&body)
            .map_err(|e| GtdError::ParsingError(format!("Invalid JSON response: {}", e)))
    }

    async fn send_mutation(&self, request: reqwest::RequestBuilder) -> Result<(), GtdError> {
        let response = request
            .query(&self.auth_query())
            .send()
            .await
            .map_err(|e| GtdError::ApiError(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GtdError::ApiError(format!(
                "API request failed with status {}: {}",
                status, body
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl BoardApi for TrelloClient {
    async fn find_board(&self, name: &str) -> Result<Board, GtdError> {
        let boards: Vec<Board> = self
            .get_json("/members/me/boards", &[("fields", "name")])
            .await?;
        log::debug!("Account has {} boards", boards.len());
        boards
            .into_iter()
            .find(|b| b.name == name)
            .ok_or_else(|| GtdError::NotFound {
                kind: "Board",
                name: name.to_string(),
            })
    }

    async fn open_lists(&self, board_id: &str) -> Result<Vec<BoardList>, GtdError> {
        self.get_json(
            &format!("/boards/{}/lists", board_id),
            &[("filter", "open"), ("fields", "name")],
        )
        .await
    }

    async fn labels(&self, board_id: &str) -> Result<Vec<Label>, GtdError> {
        self.get_json(
            &format!("/boards/{}/labels", board_id),
            &[("fields", "name,color")],
        )
        .await
    }

    async fn cards_in_list(&self, list_id: &str) -> Result<Vec<Card>, GtdError> {
        self.get_json(
            &format!("/lists/{}/cards", list_id),
            &[("fields", "name,due,idList,labels")],
        )
        .await
    }

    async fn attachments(&self, card_id: &str) -> Result<Vec<Attachment>, GtdError> {
        self.get_json(
            &format!("/cards/{}/attachments", card_id),
            &[("fields", "name,url")],
        )
        .await
    }

    async fn add_label(&self, card_id: &str, label_id: &str) -> Result<(), GtdError> {
        let url = self.url(&format!("/cards/{}/idLabels", card_id));
        log::debug!("POST {} value={}", url, label_id);
        self.send_mutation(self.client.post(&url).query(&[("value", label_id)]))
            .await
    }

    async fn move_card(&self, card_id: &str, list_id: &str) -> Result<(), GtdError> {
        let url = self.url(&format!("/cards/{}", card_id));
        log::debug!("PUT {} idList={}", url, list_id);
        self.send_mutation(self.client.put(&url).query(&[("idList", list_id)]))
            .await
    }

    async fn delete_card(&self, card_id: &str) -> Result<(), GtdError> {
        let url = self.url(&format!("/cards/{}", card_id));
        log::debug!("DELETE {}", url);
        self.send_mutation(self.client.delete(&url)).await
    }
}
