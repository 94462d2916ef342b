use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrder {
    pub customer: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: u64,
    pub customer: String,
    pub items: Vec<String>,
    pub status: String,
    pub created_at: String, // RFC 3339, millisecond precision
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned {status}: {message}")]
    Api { status: StatusCode, message: String },
}

impl ClientError {
    /// HTTP status of an API error, if the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Http(e) => e.status(),
        }
    }
}

pub struct OrdersClient {
    client: Client,
    base_url: String,
}

impl OrdersClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `GET /health`; returns the reported status string.
    pub async fn health(&self) -> Result<String, ClientError> {
        #[derive(Deserialize)]
        struct Health {
            status: String,
        }

        let resp = self.client.get(format!("{}/health", self.base_url)).send().await?;
        let health: Health = decode(resp).await?;
        Ok(health.status)
    }

    pub async fn list_restaurants(&self) -> Result<Vec<Restaurant>, ClientError> {
        let resp = self.client
            .get(format!("{}/api/restaurants", self.base_url))
            .send()
            .await?;
        decode(resp).await
    }

    /// Fetch one restaurant. `id` is sent as-is so malformed ids can be exercised.
    pub async fn get_restaurant(&self, id: &str) -> Result<Restaurant, ClientError> {
        let resp = self.client
            .get(format!("{}/api/restaurants/{}", self.base_url, id))
            .send()
            .await?;
        decode(resp).await
    }

    pub async fn create_order(&self, order: &CreateOrder) -> Result<Order, ClientError> {
        self.create_order_raw(&serde_json::to_value(order).unwrap_or_default()).await
    }

    /// Post an arbitrary JSON body to the order endpoint.
    pub async fn create_order_raw(&self, body: &serde_json::Value) -> Result<Order, ClientError> {
        let resp = self.client
            .post(format!("{}/api/orders", self.base_url))
            .json(body)
            .send()
            .await?;
        decode(resp).await
    }
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ClientError> {
    let status = resp.status();
    if !status.is_success() {
        let text = resp.text().await?;
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|b| b.message)
            .unwrap_or(text);
        return Err(ClientError::Api { status, message });
    }

    Ok(resp.json::<T>().await?)
}
