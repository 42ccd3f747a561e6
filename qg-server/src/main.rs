use clap::Parser;
use inference::{HUB_API_BASE, HostedModelClient, OPENAI_API_BASE, OpenAiChatClient};
use qg_server::{AppState, app};
use qgen::Orchestrator;
use std::{net::SocketAddr, sync::Arc};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Address to bind the HTTP server
    #[arg(long, default_value = "127.0.0.1:3000")]
    addr: String,
    /// Bearer token for the hosted inference API
    #[arg(long, env = "HF_TOKEN", hide_env_values = true)]
    hf_token: String,
    /// API key for the chat-completion endpoint
    #[arg(long, env = "OPENAI_TOKEN", hide_env_values = true)]
    openai_token: String,
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let generator = Arc::new(HostedModelClient::new(HUB_API_BASE, cli.hf_token));
    let chat = Arc::new(OpenAiChatClient::new(OPENAI_API_BASE, cli.openai_token));
    let state = AppState {
        orchestrator: Arc::new(Orchestrator::new(generator, chat)),
    };
    let app = app(state);

    let addr: SocketAddr = cli.addr.parse()?;
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
