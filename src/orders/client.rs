//! Order service client.
//!
//! # Responsibilities
//! - Build `/orders/{orderId}?expired=NO` URLs against the configured base
//! - Fetch and decode [`OrderInfo`]
//! - Surface remote faults unchanged to callers

use tower::Service;
use url::Url;

use crate::config::ClientConfig;
use crate::http::{ClientError, ClientResult, InboundResponse, OutboundRequest, RestClient};
use crate::orders::types::OrderInfo;

/// Client for the remote order service.
#[derive(Debug, Clone)]
pub struct OrderServiceClient<S = crate::http::FaultTranslation<crate::http::ReqwestTransport>> {
    base_url: Url,
    rest: RestClient<S>,
}

impl OrderServiceClient {
    /// Build the transport and client from configuration.
    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        let base_url = Url::parse(&config.order_service.url)?;
        let rest = RestClient::from_config(config)?;
        Ok(Self::new(base_url, rest))
    }
}

impl<S> OrderServiceClient<S>
where
    S: Service<OutboundRequest, Response = InboundResponse, Error = ClientError> + Clone,
{
    pub fn new(base_url: Url, rest: RestClient<S>) -> Self {
        Self { base_url, rest }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL of a single order.
    pub fn order_url(&self, order_id: &str) -> ClientResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                ClientError::InvalidRequest(format!(
                    "base URL '{}' cannot take path segments",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(["orders", order_id]);
        url.query_pairs_mut().append_pair("expired", "NO");
        Ok(url)
    }

    /// Fetch an order. An empty success body yields `None`.
    pub async fn get_order_info(&self, order_id: &str) -> ClientResult<Option<OrderInfo>> {
        let url = self.order_url(order_id)?;
        tracing::debug!(order_id = %order_id, url = %url, "Fetching order");

        let request = OutboundRequest::get(url)
            .header("accept", "application/json")?
            .build();
        self.rest.exchange_json_opt(request).await
    }
}
