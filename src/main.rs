use axum::serve;
use news_dispatch::{routes::make_app, utils::config::Config};
use tokio::net::TcpListener;
use tokio::time::Duration;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    let config = Config::init();
    let bind_addr = config.bind_addr.clone();
    let refresh_every = Duration::from_secs(config.refresh_interval_secs);

    let (app, state) = make_app(config);

    let controller = state.controller.clone();
    tokio::spawn(async move {
        controller.refresh().await;
    });
    let refresh = state.controller.spawn_refresh(refresh_every);

    let listener = TcpListener::bind(bind_addr.as_str()).await?;
    info!("Listening on http://{}", bind_addr);

    serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;

    refresh.stop();
    info!("Shut down");
    Ok(())
}
