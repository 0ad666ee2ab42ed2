//! Connection configuration.
//!
//! Credentials are resolved in this order: the explicit [`Config::credentials`], then the
//! standard AWS environment variables, then the shared config and credentials files.
//! The last two steps are the `aws-config` default chain.

use crate::error::{Error, Result};

use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_credential_types::{Credentials, provider::ProvideCredentials};
use std::fmt;

const PROVIDER_NAME: &str = "dynamodb-dict";

/// Explicit access key pair.
///
/// ```rust
/// use dynamodb_dict::config;
///
/// let credentials = config::StaticCredentials {
///     access_key_id: "AKIDEXAMPLE".to_string(),
///     secret_access_key: "secret".to_string(),
///     ..Default::default()
/// };
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct StaticCredentials {
    /// The access key id.
    pub access_key_id: String,
    /// The secret access key.
    pub secret_access_key: String,
    /// Optional session token for temporary credentials.
    pub session_token: Option<String>,
}

impl fmt::Debug for StaticCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticCredentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"** redacted **")
            .field(
                "session_token",
                &self.session_token.as_ref().map(|_| "** redacted **"),
            )
            .finish()
    }
}

impl From<StaticCredentials> for Credentials {
    fn from(credentials: StaticCredentials) -> Self {
        Credentials::new(
            credentials.access_key_id,
            credentials.secret_access_key,
            credentials.session_token,
            None,
            PROVIDER_NAME,
        )
    }
}

/// Database configuration.
///
/// ```rust
/// use dynamodb_dict::config;
///
/// let config = config::Config {
///     table_name_prefix: "app_".to_string(),
///     region: Some("eu-west-1".to_string()),
///     ..Default::default()
/// };
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Explicit credentials. `None` falls back to the environment and the shared files.
    pub credentials: Option<StaticCredentials>,
    /// Prepended to every logical table name, e.g. `"app_"` turns `user` into `app_user`.
    pub table_name_prefix: String,
    /// AWS region. `None` uses the default region chain.
    pub region: Option<String>,
    /// Custom endpoint, e.g. a local DynamoDB.
    pub endpoint_url: Option<String>,
}

impl Config {
    /// Load the SDK configuration, applying the explicit overrides of this config.
    pub(crate) async fn load_sdk_config(&self) -> SdkConfig {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &self.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(endpoint_url) = &self.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }
        if let Some(credentials) = &self.credentials {
            loader = loader.credentials_provider(Credentials::from(credentials.clone()));
        }
        loader.load().await
    }
}

/// Resolve credentials through the configured provider chain.
pub(crate) async fn resolve_credentials(sdk_config: &SdkConfig) -> Result<Credentials> {
    let provider = sdk_config
        .credentials_provider()
        .ok_or_else(|| Error::Authentication {
            message: "no credentials provider configured".to_string(),
            source: None,
        })?;
    provider
        .provide_credentials()
        .await
        .map_err(|err| Error::Authentication {
            message: err.to_string(),
            source: Some(Box::new(err)),
        })
}
