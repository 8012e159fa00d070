mod bot_connector_client;
mod client_credentials_token_provider;
mod http_attachment_fetcher;
mod static_token_provider;

pub use bot_connector_client::BotConnectorClient;
pub use client_credentials_token_provider::ClientCredentialsTokenProvider;
pub use http_attachment_fetcher::HttpAttachmentFetcher;
pub use static_token_provider::StaticTokenProvider;
