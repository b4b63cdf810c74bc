use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use krishiarogya_api::{
    application::{
        http::server::http_server::{router, state},
        logging::init_logger,
    },
    args::Args,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log);

    let state = state(args.clone())?;
    let router = router(state)?;

    let addr: SocketAddr = format!("{}:{}", args.server.host, args.server.port).parse()?;
    info!(
        chat_configured = args.llm.api_key.as_deref().is_some_and(|k| !k.trim().is_empty()),
        ml_service = %args.ml_service.predict_url,
        "KrishiArogya API listening on http://{}",
        addr
    );

    axum_server::bind(addr)
        .serve(router.into_make_service())
        .await?;

    Ok(())
}
