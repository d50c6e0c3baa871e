//! Backend API client.

use crate::config::ClientConfig;
use crate::error::{error_body_message, ClientError, Result};
use crate::notify::{NotificationKind, Notifier};
use async_trait::async_trait;
use blockwave_core::{ChainResponse, MineResponse, NewTransaction, TransactionResponse};
use reqwest::{Response, Url};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, error, info};

/// The three backend operations the explorer depends on.
#[async_trait]
pub trait ChainApi: Send + Sync {
    /// Fetch the full chain.
    ///
    /// Never fails: any error is reported and an empty chain is returned.
    async fn fetch_chain(&self) -> ChainResponse;

    /// Ask the backend to mine a new block.
    async fn mine_block(&self) -> Result<MineResponse>;

    /// Submit a transaction. `amount` is the raw user input; it is only
    /// checked to parse as a float before being sent.
    async fn create_transaction(
        &self,
        sender: &str,
        recipient: &str,
        amount: &str,
    ) -> Result<TransactionResponse>;
}

#[async_trait]
impl<A: ChainApi + ?Sized> ChainApi for Arc<A> {
    async fn fetch_chain(&self) -> ChainResponse {
        (**self).fetch_chain().await
    }

    async fn mine_block(&self) -> Result<MineResponse> {
        (**self).mine_block().await
    }

    async fn create_transaction(
        &self,
        sender: &str,
        recipient: &str,
        amount: &str,
    ) -> Result<TransactionResponse> {
        (**self).create_transaction(sender, recipient, amount).await
    }
}

/// Resolved endpoint URLs.
#[derive(Debug, Clone)]
struct Endpoints {
    chain: Url,
    mine: Url,
    new_transaction: Url,
}

impl Endpoints {
    fn resolve(base: &Url) -> Result<Self> {
        let join = |path: &str| {
            base.join(path)
                .map_err(|e| ClientError::InvalidBaseUrl(format!("{}{}: {}", base, path, e)))
        };

        Ok(Self {
            chain: join("chain")?,
            mine: join("mine")?,
            new_transaction: join("transactions/new")?,
        })
    }
}

/// HTTP implementation of [`ChainApi`].
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    endpoints: Endpoints,
    notifier: Arc<dyn Notifier>,
}

impl ApiClient {
    /// Create a client for the configured backend.
    pub fn new(config: &ClientConfig, notifier: Arc<dyn Notifier>) -> Result<Self> {
        Self::with_http_client(config, notifier, reqwest::Client::new())
    }

    /// Create a client reusing an existing reqwest client.
    pub fn with_http_client(
        config: &ClientConfig,
        notifier: Arc<dyn Notifier>,
        http: reqwest::Client,
    ) -> Result<Self> {
        let base_url = config.parsed_base_url()?;
        let endpoints = Endpoints::resolve(&base_url)?;

        Ok(Self {
            http,
            base_url,
            endpoints,
            notifier,
        })
    }

    /// The backend base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &Url) -> Result<T> {
        debug!(%url, "GET");
        let response = self.http.get(url.clone()).send().await?;
        Self::decode(response).await
    }

    async fn post_json<T: DeserializeOwned>(&self, url: &Url, body: &NewTransaction) -> Result<T> {
        debug!(%url, sender = %body.sender, recipient = %body.recipient, amount = body.amount, "POST");
        let response = self.http.post(url.clone()).json(body).send().await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                message: error_body_message(&body),
            });
        }
        Ok(response.json::<T>().await?)
    }

    fn success(&self, message: &str) {
        self.notifier
            .notify(NotificationKind::Success, "Success", message);
    }

    fn failure(&self, message: &str) {
        self.notifier.notify(NotificationKind::Error, "Error", message);
    }
}

#[async_trait]
impl ChainApi for ApiClient {
    async fn fetch_chain(&self) -> ChainResponse {
        match self.get_json::<ChainResponse>(&self.endpoints.chain).await {
            Ok(chain) => {
                debug!(length = chain.length, "fetched chain");
                chain
            }
            Err(e) => {
                error!(error = %e, "error fetching blockchain");
                self.failure("Failed to fetch blockchain data");
                ChainResponse::empty()
            }
        }
    }

    async fn mine_block(&self) -> Result<MineResponse> {
        match self.get_json::<MineResponse>(&self.endpoints.mine).await {
            Ok(mined) => {
                info!(message = %mined.message, "mined block");
                self.success("New block mined successfully");
                Ok(mined)
            }
            Err(e) => {
                error!(error = %e, "error mining block");
                self.failure("Failed to mine a new block");
                Err(e)
            }
        }
    }

    async fn create_transaction(
        &self,
        sender: &str,
        recipient: &str,
        amount: &str,
    ) -> Result<TransactionResponse> {
        let result = match amount.trim().parse::<f64>() {
            Ok(amount) => {
                let body = NewTransaction::new(sender, recipient, amount);
                self.post_json::<TransactionResponse>(&self.endpoints.new_transaction, &body)
                    .await
            }
            Err(_) => Err(ClientError::InvalidAmount(amount.to_string())),
        };

        match result {
            Ok(created) => {
                info!(message = %created.message, "created transaction");
                self.success("Transaction created successfully");
                Ok(created)
            }
            Err(e) => {
                error!(error = %e, "error creating transaction");
                self.failure("Failed to create transaction");
                Err(e)
            }
        }
    }
}
