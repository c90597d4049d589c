use reqwest::{Client, Response};
use serde::Deserialize;

use crate::domain::customer::{Customer, NewCustomer};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{CustomerReader, CustomerWriter};

/// Error body returned by the backend on a rejected request.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Customer repository backed by the `/customers` REST endpoints.
#[derive(Clone, Debug)]
pub struct HttpCustomerRepository {
    client: Client,
    base_url: String,
}

impl HttpCustomerRepository {
    /// Builds a repository with its own HTTP client.
    pub fn new(base_url: impl Into<String>) -> RepositoryResult<Self> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    fn customers_url(&self) -> String {
        format!("{}/customers", self.base_url)
    }
}

/// Turns a non-2xx response into [`RepositoryError::Rejected`].
async fn rejection(response: Response) -> RepositoryError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|body| body.message);

    RepositoryError::Rejected { status, message }
}

impl CustomerReader for HttpCustomerRepository {
    async fn list_customers(&self) -> RepositoryResult<Vec<Customer>> {
        let response = self.client.get(self.customers_url()).send().await?;

        if !response.status().is_success() {
            return Err(rejection(response).await);
        }

        let customers = response.json::<Vec<Customer>>().await?;
        Ok(customers)
    }
}

impl CustomerWriter for HttpCustomerRepository {
    async fn create_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<()> {
        let response = self
            .client
            .post(self.customers_url())
            .json(new_customer)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(rejection(response).await)
        }
    }
}
