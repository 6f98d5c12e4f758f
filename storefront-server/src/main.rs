use storefront_server::utils::logger;
use storefront_server::{Config, Server};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    logger::init_logger_with_file(
        std::env::var("LOG_LEVEL").ok().as_deref(),
        config.log_dir.as_deref(),
    );

    if let Err(e) = Server::new(config).run().await {
        tracing::error!("server exited with error: {e}");
        std::process::exit(1);
    }
}
