use serde::Deserialize;
use tracing::warn;

/// Caller identity as confirmed by the external identity provider.
/// The rest of the system trusts the subject opaquely.
#[derive(Debug, Clone)]
pub struct VerifiedIdentity {
    pub user_id: String,
}

#[async_trait::async_trait]
pub trait IIdentityVerifier: Send + Sync {
    /// Exchanges a bearer token for a verified user identity, `None`
    /// when the token is invalid or the provider rejects it
    async fn verify(&self, token: &str) -> Option<VerifiedIdentity>;
}

/// Verifier backed by the user endpoint of the identity provider
pub struct HttpIdentityVerifier {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl HttpIdentityVerifier {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            base_url,
            api_key,
            client: reqwest::Client::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ProviderUser {
    id: String,
}

#[async_trait::async_trait]
impl IIdentityVerifier for HttpIdentityVerifier {
    async fn verify(&self, token: &str) -> Option<VerifiedIdentity> {
        let url = format!("{}/auth/v1/user", self.base_url);
        let res = match self
            .client
            .get(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(token)
            .send()
            .await
        {
            Ok(res) => res,
            Err(e) => {
                warn!("Identity provider request failed: {:?}", e);
                return None;
            }
        };
        if !res.status().is_success() {
            return None;
        }

        match res.json::<ProviderUser>().await {
            Ok(user) if !user.id.is_empty() => Some(VerifiedIdentity { user_id: user.id }),
            Ok(_) => None,
            Err(e) => {
                warn!("Unexpected identity provider response: {:?}", e);
                None
            }
        }
    }
}

/// Verifier for the inmemory setup: accepts every non-empty token and
/// uses the token itself as the subject
pub struct TokenSubjectVerifier {}

#[async_trait::async_trait]
impl IIdentityVerifier for TokenSubjectVerifier {
    async fn verify(&self, token: &str) -> Option<VerifiedIdentity> {
        if token.is_empty() {
            return None;
        }
        Some(VerifiedIdentity {
            user_id: token.to_string(),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn token_subject_verifier_rejects_empty_tokens() {
        let verifier = TokenSubjectVerifier {};
        assert!(verifier.verify("").await.is_none());
    }

    #[tokio::test]
    async fn token_subject_verifier_uses_token_as_subject() {
        let verifier = TokenSubjectVerifier {};
        let identity = verifier.verify("alice").await.unwrap();
        assert_eq!(identity.user_id, "alice");
    }
}
