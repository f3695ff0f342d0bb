use actix_web::{middleware, App, HttpServer};
use log::info;
use tail_chaser::config::ServerConfig;
use tail_chaser::server;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();
    info!("tail-chaser listening on {}:{}", config.host, config.port);

    HttpServer::new(|| {
        App::new()
            .wrap(middleware::Logger::default())
            .configure(server::configure)
    })
    .bind(config.address())?
    .run()
    .await
}
