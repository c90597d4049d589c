use serde::{Deserialize, Serialize};

use crate::domain::types::{CustomerAge, CustomerEmail, CustomerName};

/// Sign-up record as returned by the backend list endpoint.
///
/// Read-only on the client, so the fields are kept as plain values rather
/// than the constrained types used for creation.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Customer {
    pub name: String,
    pub email: String,
    pub age: u32,
}

/// Payload sent to the backend to create a customer.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: CustomerName,
    pub email: CustomerEmail,
    pub age: CustomerAge,
}

impl NewCustomer {
    #[must_use]
    pub fn new(name: CustomerName, email: CustomerEmail, age: CustomerAge) -> Self {
        Self { name, email, age }
    }
}
