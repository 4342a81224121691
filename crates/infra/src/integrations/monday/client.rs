//! Board data source client

use async_trait::async_trait;
use reqwest::Method;
use serde::Deserialize;
use skylark_core::BoardSource;
use skylark_domain::constants::BOARD_ITEM_LIMIT;
use skylark_domain::{BoardSnapshot, MondayConfig, MondayCredentials, Result, SkylarkError};
use tracing::{debug, info, instrument};

use super::types::{BoardsData, GraphQLRequest, GraphQLResponse};
use crate::http::HttpClient;

/// GraphQL query for both boards in one round trip.
pub fn build_query(deals_board_id: u64, work_orders_board_id: u64) -> String {
    let board_fields = format!(
        "columns {{ id title }} items_page(limit: {BOARD_ITEM_LIMIT}) {{ items {{ id name column_values {{ id text }} }} }}"
    );
    format!(
        "query {{ deals: boards(ids: [{deals_board_id}]) {{ {board_fields} }} \
         work_orders: boards(ids: [{work_orders_board_id}]) {{ {board_fields} }} }}"
    )
}

/// GraphQL client for the deals and work orders boards
pub struct MondayClient {
    http_client: HttpClient,
    config: MondayConfig,
}

impl MondayClient {
    /// # Arguments
    /// * `config` - Data source settings; credentials are checked per fetch
    /// * `http_client` - HTTP client carrying the data source timeout
    pub fn new(config: MondayConfig, http_client: HttpClient) -> Self {
        Self { http_client, config }
    }

    /// Build a client with its own HTTP client using the configured timeout.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn from_config(config: MondayConfig) -> Result<Self> {
        let http_client = HttpClient::builder().timeout(config.timeout()).build()?;
        Ok(Self::new(config, http_client))
    }

    pub fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    /// Execute a GraphQL query against the configured endpoint
    async fn execute_graphql<T: for<'de> Deserialize<'de>>(
        &self,
        query: &str,
        api_key: &str,
    ) -> Result<T> {
        let request_builder = self
            .http_client
            .request(Method::POST, &self.config.api_url)
            .header("Authorization", api_key)
            .header("Content-Type", "application/json")
            .json(&GraphQLRequest { query });

        let response = self.http_client.send(request_builder).await?;

        let status = response.status();
        debug!(status = status.as_u16(), "Received board data source response");

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SkylarkError::Upstream(format!(
                "Monday API Failed: {} {} - {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or(""),
                error_text
            )));
        }

        let graphql_response: GraphQLResponse<T> = response.json().await.map_err(|e| {
            SkylarkError::Upstream(format!("Failed to parse GraphQL response: {e}"))
        })?;

        if let Some(errors) = graphql_response.errors.filter(|errors| !errors.is_empty()) {
            let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
            return Err(SkylarkError::Upstream(format!(
                "Monday GraphQL Error: {}",
                messages.join(", ")
            )));
        }

        graphql_response
            .data
            .ok_or_else(|| SkylarkError::Upstream("GraphQL response missing data field".into()))
    }
}

#[async_trait]
impl BoardSource for MondayClient {
    #[instrument(skip(self))]
    async fn fetch_boards(&self) -> Result<BoardSnapshot> {
        let MondayCredentials { api_key, deals_board_id, work_orders_board_id } =
            self.config.credentials()?;

        let query = build_query(deals_board_id, work_orders_board_id);
        let data: BoardsData = self.execute_graphql(&query, &api_key).await?;

        let deals = data.deals.and_then(|boards| boards.into_iter().next());
        let work_orders = data.work_orders.and_then(|boards| boards.into_iter().next());

        let (Some(deals), Some(work_orders)) = (deals, work_orders) else {
            return Err(SkylarkError::Upstream("Could not find boards. Check IDs.".into()));
        };

        let snapshot = BoardSnapshot { deals: deals.into(), work_orders: work_orders.into() };
        info!(
            deals = snapshot.deals.items.len(),
            work_orders = snapshot.work_orders.items.len(),
            "Fetched board data"
        );
        Ok(snapshot)
    }
}
