//! Access to the customers collection of the REST backend.

use crate::{
    domain::customer::{Customer, NewCustomer},
    repository::errors::RepositoryResult,
};

pub mod customer;
pub mod errors;

pub use customer::HttpCustomerRepository;

#[allow(async_fn_in_trait)]
pub trait CustomerReader {
    async fn list_customers(&self) -> RepositoryResult<Vec<Customer>>;
}

#[allow(async_fn_in_trait)]
pub trait CustomerWriter {
    async fn create_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<()>;
}
