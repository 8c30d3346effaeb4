use std::sync::Arc;
use std::time::Duration;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use homespa::catalog::Catalog;
use homespa::config::AppConfig;
use homespa::handlers;
use homespa::services::ai::gemini::GeminiProvider;
use homespa::services::ai::groq::GroqProvider;
use homespa::services::ai::ollama::OllamaProvider;
use homespa::services::ai::LlmProvider;
use homespa::services::messaging::whatsapp::WhatsAppChannel;
use homespa::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let catalog = match &config.catalog_path {
        Some(path) => {
            tracing::info!("loading catalog from {path}");
            Catalog::from_json_file(path)?
        }
        None => Catalog::builtin(),
    };
    tracing::info!(services = catalog.len(), "catalog loaded");

    let timeout = Duration::from_secs(config.llm_timeout_secs);
    let llm: Box<dyn LlmProvider> = match config.llm_provider.as_str() {
        "groq" => {
            anyhow::ensure!(!config.groq_api_key.is_empty(), "GROQ_API_KEY must be set when LLM_PROVIDER=groq");
            tracing::info!("using Groq LLM provider (model: {})", config.groq_model);
            Box::new(GroqProvider::new(config.groq_api_key.clone(), config.groq_model.clone(), timeout)?)
        }
        "ollama" => {
            tracing::info!("using Ollama LLM provider (url: {})", config.ollama_url);
            Box::new(OllamaProvider::new(config.ollama_url.clone(), config.ollama_model.clone(), timeout)?)
        }
        _ => {
            anyhow::ensure!(!config.gemini_api_key.is_empty(), "GEMINI_API_KEY must be set when LLM_PROVIDER=gemini");
            tracing::info!("using Gemini LLM provider (model: {})", config.gemini_model);
            Box::new(GeminiProvider::new(config.gemini_api_key.clone(), config.gemini_model.clone(), timeout)?)
        }
    };
    let messaging = WhatsAppChannel::new(config.whatsapp_number.clone());

    let state = Arc::new(AppState {
        config: config.clone(),
        catalog,
        llm,
        messaging: Box::new(messaging),
    });

    let app = handlers::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
