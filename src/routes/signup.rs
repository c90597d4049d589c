use actix_web::{HttpResponse, Responder, get, post, web};
use tera::{Context, Tera};

use crate::dto::signup::SignupPageData;
use crate::forms::signup::SignupForm;
use crate::repository::HttpCustomerRepository;
use crate::routes::render_template;
use crate::services::signup as signup_service;
use crate::state::SignupState;

fn render_signup(tera: &Tera, state: &SignupState) -> HttpResponse {
    let mut context = Context::new();
    context.insert("page", &SignupPageData::from(state));
    render_template(tera, "signup/index.html", &context)
}

#[get("/")]
pub async fn show_signup(
    repo: web::Data<HttpCustomerRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let state = signup_service::mount(repo.get_ref()).await;
    render_signup(&tera, &state)
}

#[post("/")]
pub async fn submit_signup(
    repo: web::Data<HttpCustomerRepository>,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<SignupForm>,
) -> impl Responder {
    let state = signup_service::handle_submission(repo.get_ref(), form).await;
    render_signup(&tera, &state)
}
