use axum::Router;
use tokio::net::TcpListener;

use hello_axum_app::core::{logging, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_tracing();

    let app: Router = server::create_app();
    let listener: TcpListener = server::setup_listener().await?;

    println!("Server listening on: {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(server::shutdown_signal())
        .await?;

    Ok(())
}
