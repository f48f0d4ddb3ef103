// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! The [`Etherscan`] facade and its builder

use std::{fmt, path::Path, time::Duration};

use etherscan_endpoints::{EndpointResult, PREFIX, fields::Field};
use etherscan_types::ChainId;
use serde_json::Value;
use tracing::{debug, info, warn};
use url::Url;

use crate::{
    api_key::ApiKey,
    config::EndpointConfig,
    error::{ConfigError, EtherscanError, EtherscanResult},
    parser::parse_response,
    registry::{EndpointArgs, EndpointSpec, EndpointTable},
    transport::{HttpTransport, Transport},
};

/// Per-call options
///
/// A chain id given here applies to one call only; without one the facade's
/// default chain is used.
///
/// ```rust
/// use etherscan::CallOptions;
/// use etherscan_types::ChainId;
///
/// assert_eq!(CallOptions::default().chain_id, None);
/// assert_eq!(CallOptions::from(ChainId::BASE_MAINNET).chain_id, Some(ChainId::BASE_MAINNET));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallOptions {
    /// Chain to query instead of the facade default
    pub chain_id: Option<ChainId>,
}

impl CallOptions {
    /// Options targeting `chain_id`
    pub const fn on(chain_id: ChainId) -> Self {
        Self {
            chain_id: Some(chain_id),
        }
    }
}

impl From<ChainId> for CallOptions {
    fn from(chain_id: ChainId) -> Self {
        Self::on(chain_id)
    }
}

impl From<Option<ChainId>> for CallOptions {
    fn from(chain_id: Option<ChainId>) -> Self {
        Self { chain_id }
    }
}

impl From<()> for CallOptions {
    fn from((): ()) -> Self {
        Self::default()
    }
}

/// Client for the Etherscan v2 API
///
/// The set of callable endpoints is fixed at construction by the endpoint
/// configuration. The facade holds no mutable state and can be shared across
/// tasks by reference.
///
/// ```rust,no_run
/// use etherscan::Etherscan;
/// use etherscan_types::ChainId;
///
/// # async fn run() -> etherscan::EtherscanResult<()> {
/// let client = Etherscan::builder("YourApiKeyToken")
///     .default_chain(ChainId::ETHEREUM_MAINNET)
///     .build()?;
///
/// let price = client.get_eth_last_price(()).await?;
/// let gas = client.get_gas_oracle(ChainId::POLYGON_MAINNET).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Etherscan<T = HttpTransport> {
    api_key: ApiKey,
    default_chain: ChainId,
    prefix: String,
    endpoints: EndpointTable,
    transport: T,
}

impl Etherscan<HttpTransport> {
    /// Facade with the bundled configuration on Ethereum mainnet
    pub fn new(api_key: impl Into<String>) -> EtherscanResult<Self> {
        Self::builder(api_key).build()
    }

    /// Start configuring a facade
    pub fn builder(api_key: impl Into<String>) -> EtherscanBuilder {
        EtherscanBuilder::new(api_key)
    }

    /// Facade bound from a configuration file
    pub async fn from_config_path(
        api_key: impl Into<String>,
        path: impl AsRef<Path>,
    ) -> EtherscanResult<Self> {
        let config = EndpointConfig::from_file(path).await?;
        Self::builder(api_key).config(config).build()
    }
}

impl<T: Transport> Etherscan<T> {
    /// Chain used when a call does not name one
    pub fn default_chain(&self) -> ChainId {
        self.default_chain
    }

    /// Names of the bound endpoints, in configuration order
    pub fn endpoint_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.endpoints.names()
    }

    /// Whether `name` is bound on this facade
    pub fn is_enabled(&self, name: &str) -> bool {
        self.endpoints.get(name).is_some()
    }

    /// Registry entry of a bound endpoint
    pub fn endpoint(&self, name: &str) -> Option<&'static EndpointSpec> {
        self.endpoints.get(name)
    }

    /// The underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Build the URL a call would request, without sending it
    ///
    /// The returned URL contains the API key.
    pub fn request_url(
        &self,
        name: &str,
        args: &EndpointArgs,
        options: impl Into<CallOptions>,
    ) -> EtherscanResult<String> {
        let spec = self.bound(name)?;
        let fragment = spec.fragment(args)?;
        Ok(self.signed_url(&self.unsigned_url(&fragment, options.into())))
    }

    /// Call an endpoint by name with untyped arguments
    pub async fn call(
        &self,
        name: &str,
        args: &EndpointArgs,
        options: impl Into<CallOptions>,
    ) -> EtherscanResult<Value> {
        self.invoke(name, options.into(), |spec| spec.fragment(args))
            .await
    }

    /// Gate on the endpoint table, build the fragment, send, parse
    pub(crate) async fn invoke<F>(
        &self,
        name: &str,
        options: CallOptions,
        fragment: F,
    ) -> EtherscanResult<Value>
    where
        F: FnOnce(&EndpointSpec) -> EndpointResult<String>,
    {
        let spec = self.bound(name)?;
        let fragment = fragment(spec)?;
        let unsigned = self.unsigned_url(&fragment, options);

        debug!(
            endpoint = spec.name,
            module = %spec.module,
            url = %unsigned,
            "sending Etherscan request"
        );

        let response = self.transport.get(&self.signed_url(&unsigned)).await?;
        if !response.is_success() {
            warn!(
                endpoint = spec.name,
                status = response.status,
                "Etherscan request failed"
            );
        }
        parse_response(response)
    }

    fn bound(&self, name: &str) -> EtherscanResult<&'static EndpointSpec> {
        self.endpoints
            .get(name)
            .ok_or_else(|| EtherscanError::EndpointUnavailable {
                name: name.to_string(),
            })
    }

    /// Everything but the API key, safe to log
    fn unsigned_url(&self, fragment: &str, options: CallOptions) -> String {
        let chain_id = options.chain_id.unwrap_or(self.default_chain);
        format!(
            "{}{fragment}{}{chain_id}",
            self.prefix,
            Field::ChainId.marker()
        )
    }

    fn signed_url(&self, unsigned: &str) -> String {
        format!(
            "{unsigned}{}{}",
            Field::ApiKey.marker(),
            self.api_key.expose()
        )
    }
}

/// Builder for [`Etherscan`]
pub struct EtherscanBuilder {
    api_key: String,
    default_chain: ChainId,
    config: Option<EndpointConfig>,
    base_url: String,
    timeout: Option<Duration>,
}

impl fmt::Debug for EtherscanBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EtherscanBuilder")
            .field("default_chain", &self.default_chain)
            .field("config", &self.config)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl EtherscanBuilder {
    /// Builder with the bundled configuration, mainnet and the public API prefix
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            default_chain: ChainId::default(),
            config: None,
            base_url: PREFIX.to_string(),
            timeout: None,
        }
    }

    /// Chain used by calls that do not name one
    #[must_use]
    pub fn default_chain(mut self, chain_id: ChainId) -> Self {
        self.default_chain = chain_id;
        self
    }

    /// Use a loaded configuration instead of the bundled one
    #[must_use]
    pub fn config(mut self, config: EndpointConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Request prefix, for mirrors and tests
    ///
    /// A `?` (or `&` when the prefix already has a query) is appended when the
    /// prefix does not end with one.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Per-request timeout of the HTTP transport
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build a facade over the reqwest transport
    pub fn build(self) -> EtherscanResult<Etherscan<HttpTransport>> {
        let transport = match self.timeout {
            Some(timeout) => HttpTransport::with_timeout(timeout)?,
            None => HttpTransport::new()?,
        };
        self.build_with_transport(transport)
    }

    /// Build a facade over a custom transport
    ///
    /// The timeout set on the builder only applies to [`HttpTransport`] and
    /// is ignored here.
    pub fn build_with_transport<T: Transport>(self, transport: T) -> EtherscanResult<Etherscan<T>> {
        let api_key = ApiKey::new(self.api_key)?;
        let prefix = normalize_prefix(&self.base_url)?;
        let config = match self.config {
            Some(config) => config,
            None => EndpointConfig::bundled()?,
        };
        let endpoints = EndpointTable::resolve(&config)?;

        if endpoints.is_empty() {
            warn!("endpoint configuration enables no endpoints");
        }
        info!(
            enabled = endpoints.len(),
            disabled = config.disabled().count(),
            default_chain = %self.default_chain,
            "Etherscan client ready"
        );

        Ok(Etherscan {
            api_key,
            default_chain: self.default_chain,
            prefix,
            endpoints,
            transport,
        })
    }
}

fn normalize_prefix(base_url: &str) -> Result<String, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidBaseUrl {
        url: base_url.to_string(),
        reason,
    };

    let url = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme `{}`", url.scheme())));
    }

    let mut prefix = base_url.to_string();
    if !prefix.ends_with('?') && !prefix.ends_with('&') {
        prefix.push(if url.query().is_some() { '&' } else { '?' });
    }
    Ok(prefix)
}
