use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;

use speech_bot::application::ports::{KnowledgeBase, TokenProvider};
use speech_bot::application::services::{BotService, MessageRouter, SystemEventHandler};
use speech_bot::domain::{AnswerPolicy, TrustedHostPolicy};
use speech_bot::infrastructure::audio::TranscriptionEngineFactory;
use speech_bot::infrastructure::connector::{
    BotConnectorClient, ClientCredentialsTokenProvider, HttpAttachmentFetcher, StaticTokenProvider,
};
use speech_bot::infrastructure::knowledge_base::QnaMakerClient;
use speech_bot::infrastructure::observability::{TracingConfig, init_tracing};
use speech_bot::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load configuration")?;

    init_tracing(&TracingConfig::new(
        environment.as_str(),
        settings.logging.json,
        &settings.logging.level,
    ));

    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(settings.http.request_timeout_secs))
        .build()
        .context("Failed to build HTTP client")?;

    let token_provider: Arc<dyn TokenProvider> = if settings.bot.has_credentials() {
        Arc::new(ClientCredentialsTokenProvider::new(
            http_client.clone(),
            &settings.bot.token_endpoint,
            &settings.bot.app_id,
            &settings.bot.app_password,
            &settings.bot.oauth_scope,
        ))
    } else {
        tracing::warn!("No bot app id configured; connector calls are unauthenticated");
        Arc::new(StaticTokenProvider::anonymous())
    };

    let transcription_engine = TranscriptionEngineFactory::create(
        settings.speech.provider,
        http_client.clone(),
        &settings.speech.endpoint,
        &settings.speech.subscription_key,
        &settings.speech.language,
        &settings.speech.model,
    )
    .context("Failed to configure speech service")?;

    let knowledge_base: Arc<dyn KnowledgeBase> = Arc::new(QnaMakerClient::new(
        http_client.clone(),
        &settings.knowledge_base.endpoint,
        &settings.knowledge_base.knowledgebase_id,
        &settings.knowledge_base.subscription_key,
        settings.knowledge_base.top,
    ));

    let message_router = MessageRouter::new(
        Arc::new(HttpAttachmentFetcher::new(
            http_client.clone(),
            Arc::clone(&token_provider),
        )),
        transcription_engine,
        knowledge_base,
        TrustedHostPolicy::new(
            &settings.attachments.trusted_domains,
            &settings.attachments.trusted_schemes,
        ),
        AnswerPolicy::new(settings.knowledge_base.min_score),
    );

    let bot_service = Arc::new(BotService::new(
        message_router,
        SystemEventHandler::new(),
        Arc::new(BotConnectorClient::new(http_client, token_provider)),
    ));

    let router = create_router(AppState::new(bot_service));

    let host = settings
        .server
        .host
        .parse::<std::net::IpAddr>()
        .context("Invalid server host")?;
    let addr = SocketAddr::new(host, settings.server.port);
    tracing::info!(%addr, speech_provider = ?settings.speech.provider, "Listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
