use std::sync::Arc;
use std::time::Duration;

use actix_web::{App, HttpServer, web};
use dotenvy::dotenv;
use tracing::{error, info};

use geolookup::api::middleware::AccessLog;
use geolookup::api::services::lookup_routes;
use geolookup::config::Config;
use geolookup::services::geoip::{GeoDatabase, MaxMindReader};
use geolookup::system::init_logging;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    let _log_guard = init_logging();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err.format_colored());
            error!("Invalid configuration: {}", err);
            std::process::exit(1);
        }
    };

    // 数据库打不开时没有降级模式，直接退出
    let db: Arc<dyn GeoDatabase> = match MaxMindReader::open(&config.db_path) {
        Ok(reader) => Arc::new(reader),
        Err(err) => {
            eprintln!("{}", err.format_colored());
            error!("Failed to open GeoIP database: {}", err);
            std::process::exit(1);
        }
    };
    info!("GeoIP database loaded from {}", config.db_path);

    let bind_address = config.bind_address();
    info!("Starting server at http://{}", bind_address);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(AccessLog)
            .app_data(web::Data::new(db.clone()))
            .service(lookup_routes())
    })
    // 连接层面的宽松超时
    .keep_alive(Duration::from_secs(120))
    .client_request_timeout(Duration::from_secs(120))
    .client_disconnect_timeout(Duration::from_secs(1));

    let server = match server.bind(&bind_address) {
        Ok(server) => server,
        Err(err) => {
            error!("Failed to bind {}: {}", bind_address, err);
            std::process::exit(1);
        }
    };

    server.run().await
}
