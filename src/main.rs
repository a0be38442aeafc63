use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use log::info;
use std::fs;
use std::io;

use employee_manager::config::Config;
use employee_manager::handlers;
use employee_manager::store::kv::FileBackend;
use employee_manager::store::{Store, StoreEvent};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    fs::create_dir_all(&config.data_dir)?;

    let backend = FileBackend::open(config.storage_file(), config.quota_bytes)
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err.to_string()))?;
    let store = web::Data::new(Store::new(Box::new(backend)));

    store.subscribe(|event| match event {
        StoreEvent::EmployeesChanged { count } => {
            info!("employee list now holds {} records", count)
        }
        StoreEvent::SessionChanged { authenticated } => {
            info!("session authenticated: {}", authenticated)
        }
    });

    info!("Starting server at {}", config.bind_addr);

    // All writes swap the whole list, so a single worker keeps them ordered.
    let data = store.clone();
    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .configure(handlers::configure)
    })
    .workers(1)
    .bind(config.bind_addr.as_str())?
    .run()
    .await
}
