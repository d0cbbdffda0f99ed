mod config;
mod repos;
mod services;
mod system;

pub use config::Config;
pub use repos::{IReminderRepo, Repos};
pub use services::{
    HttpIdentityVerifier, IIdentityVerifier, TokenSubjectVerifier, VerifiedIdentity,
};
use std::sync::Arc;
pub use system::ISys;
use system::RealSys;
use tracing::info;

/// Process-scoped resources initialized once at startup and injected
/// into every request handler
#[derive(Clone)]
pub struct BillwatchContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub verifier: Arc<dyn IIdentityVerifier>,
}

impl BillwatchContext {
    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            sys: Arc::new(RealSys {}),
            verifier: Arc::new(TokenSubjectVerifier {}),
        }
    }

    async fn create_mongodb(connection_string: &str, db_name: &str) -> Self {
        let repos = Repos::create_mongodb(connection_string, db_name)
            .await
            .expect("Mongodb credentials must be set and valid");
        let config = Config::new();
        let verifier = create_verifier(&config);
        Self {
            repos,
            config,
            sys: Arc::new(RealSys {}),
            verifier,
        }
    }
}

fn create_verifier(config: &Config) -> Arc<dyn IIdentityVerifier> {
    match (
        config.identity_provider_url.clone(),
        config.identity_provider_key.clone(),
    ) {
        (Some(url), Some(key)) => Arc::new(HttpIdentityVerifier::new(url, key)),
        _ => {
            info!("IDENTITY_PROVIDER_URL and IDENTITY_PROVIDER_KEY env vars was not provided. Going to accept tokens as subjects.");
            Arc::new(TokenSubjectVerifier {})
        }
    }
}

/// Will setup the correct infra context given the environment
pub async fn setup_context() -> BillwatchContext {
    const MONGODB_CONNECTION_STRING: &str = "MONGODB_CONNECTION_STRING";
    const MONGODB_NAME: &str = "MONGODB_NAME";

    let connection_string = std::env::var(MONGODB_CONNECTION_STRING);
    let db_name = std::env::var(MONGODB_NAME);

    match (connection_string, db_name) {
        (Ok(connection_string), Ok(db_name)) => {
            info!(
                "{} and {} env vars was provided. Going to use mongodb.",
                MONGODB_CONNECTION_STRING, MONGODB_NAME
            );
            BillwatchContext::create_mongodb(&connection_string, &db_name).await
        }
        _ => {
            info!(
                "{} and {} env vars was not provided. Going to use inmemory infra.",
                MONGODB_CONNECTION_STRING, MONGODB_NAME
            );
            BillwatchContext::create_inmemory()
        }
    }
}
