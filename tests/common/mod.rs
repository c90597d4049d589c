//! Stub `/customers` backend bound to an ephemeral local port.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use actix_web::http::StatusCode;
use actix_web::{App, HttpResponse, HttpServer, web};
use customer_signup::domain::customer::Customer;
use serde_json::Value;

#[derive(Default)]
pub struct StubState {
    pub customers: Mutex<Vec<Customer>>,
    pub posted: Mutex<Vec<Value>>,
    pub list_requests: AtomicUsize,
    /// Status and raw body answered to the next POSTs instead of 200.
    pub reject_with: Mutex<Option<(u16, String)>>,
}

impl StubState {
    pub fn list_requests(&self) -> usize {
        self.list_requests.load(Ordering::SeqCst)
    }

    pub fn posted(&self) -> Vec<Value> {
        self.posted.lock().unwrap().clone()
    }

    pub fn reject(&self, status: u16, body: &str) {
        *self.reject_with.lock().unwrap() = Some((status, body.to_string()));
    }
}

pub struct StubBackend {
    pub base_url: String,
    pub state: web::Data<StubState>,
}

async fn list(state: web::Data<StubState>) -> HttpResponse {
    state.list_requests.fetch_add(1, Ordering::SeqCst);
    let customers = state.customers.lock().unwrap().clone();
    HttpResponse::Ok().json(customers)
}

async fn create(state: web::Data<StubState>, body: web::Json<Value>) -> HttpResponse {
    let body = body.into_inner();
    state.posted.lock().unwrap().push(body.clone());

    if let Some((status, reply)) = state.reject_with.lock().unwrap().clone() {
        return HttpResponse::build(StatusCode::from_u16(status).unwrap())
            .content_type("application/json")
            .body(reply);
    }

    if let Ok(customer) = serde_json::from_value::<Customer>(body) {
        state.customers.lock().unwrap().push(customer);
    }
    HttpResponse::Created().finish()
}

/// Starts the stub on the current actix system.
pub fn start() -> StubBackend {
    let state = web::Data::new(StubState::default());
    let data = state.clone();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .route("/customers", web::get().to(list))
            .route("/customers", web::post().to(create))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("bind stub backend");

    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());

    StubBackend {
        base_url: format!("http://{addr}"),
        state,
    }
}

#[allow(dead_code)]
pub fn customer(name: &str, email: &str, age: u32) -> Customer {
    Customer {
        name: name.to_string(),
        email: email.to_string(),
        age,
    }
}
