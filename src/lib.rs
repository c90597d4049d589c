//! Customer sign-up component: validates, submits and lists customer records
//! against a REST backend.
//!
//! The `data` feature exposes the view-model only (`domain`, `forms`, `state`,
//! `dto`). The default `server` feature adds the HTTP repository, the async
//! services and an Actix-web host rendering the component page.

pub mod domain;
pub mod dto;
pub mod forms;
pub mod state;

#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

#[cfg(feature = "server")]
pub use server::run;

#[cfg(feature = "server")]
mod server {
    use actix_web::{App, HttpServer, middleware, web};
    use tera::Tera;

    use crate::models::config::ServerConfig;
    use crate::repository::HttpCustomerRepository;
    use crate::routes::signup::{show_signup, submit_signup};

    /// Builds and runs the Actix-Web HTTP server using the provided configuration.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        let repo = HttpCustomerRepository::new(&server_config.backend_url)
            .map_err(|e| std::io::Error::other(format!("Failed to build HTTP client: {e}")))?;

        let tera = Tera::new(&server_config.templates_dir)
            .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

        let bind_address = (server_config.address.clone(), server_config.port);
        log::info!(
            "Serving sign-up page on {}:{} against {}",
            bind_address.0,
            bind_address.1,
            server_config.backend_url
        );

        HttpServer::new(move || {
            App::new()
                .wrap(middleware::Logger::default())
                .service(show_signup)
                .service(submit_signup)
                .app_data(web::Data::new(tera.clone()))
                .app_data(web::Data::new(repo.clone()))
        })
        .bind(bind_address)?
        .run()
        .await
    }
}
