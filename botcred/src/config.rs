// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Service configuration sourced from command-line flags and the environment.
//!
//! [`ServiceArgs`] mirrors the raw inputs accepted by the binary. Converting
//! it into a [`ServiceConfig`] validates the invariants the request pipeline
//! relies on: the Moltbook credential is present and non-blank, and both
//! upstream base URLs are absolute HTTP(S) URLs. The resulting configuration is
//! built once at startup and never mutated afterwards.

use std::net::SocketAddr;

use clap::Args;

use crate::error::Error;

/// Default base URL of the Moltbook agent API.
pub const DEFAULT_MOLTBOOK_API_URL: &str = "https://www.moltbook.com/api/v1";
/// Default base URL of the GitHub REST API.
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
/// Default listener address.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";

/// Raw configuration inputs accepted on the command line.
#[derive(Debug, Clone, Args,)]
pub struct ServiceArgs
{
    /// Socket address the HTTP listener binds to.
    #[arg(long = "bind", env = "BOTCRED_BIND", value_name = "ADDR", default_value = DEFAULT_BIND_ADDRESS)]
    pub bind: SocketAddr,

    /// Bearer credential attached to Moltbook requests.
    #[arg(long = "moltbook-api-key", env = "MOLTBOOK_API_KEY", value_name = "KEY", hide_env_values = true)]
    pub moltbook_api_key: Option<String,>,

    /// Base URL of the Moltbook agent API.
    #[arg(long = "moltbook-api-url", env = "MOLTBOOK_API_URL", value_name = "URL", default_value = DEFAULT_MOLTBOOK_API_URL)]
    pub moltbook_api_url: String,

    /// Base URL of the GitHub REST API.
    #[arg(long = "github-api-url", env = "GITHUB_API_URL", value_name = "URL", default_value = DEFAULT_GITHUB_API_URL)]
    pub github_api_url: String,
}

/// Validated configuration shared read-only by every request.
#[derive(Clone, PartialEq, Eq,)]
pub struct ServiceConfig
{
    /// Socket address the HTTP listener binds to.
    pub bind:             SocketAddr,
    /// Bearer credential attached to Moltbook requests.
    pub moltbook_api_key: String,
    /// Base URL of the Moltbook agent API without a trailing slash.
    pub moltbook_api_url: String,
    /// Base URL of the GitHub REST API without a trailing slash.
    pub github_api_url:   String,
}

impl std::fmt::Debug for ServiceConfig
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_,>,) -> std::fmt::Result
    {
        f.debug_struct("ServiceConfig",)
            .field("bind", &self.bind,)
            .field("moltbook_api_key", &"<redacted>",)
            .field("moltbook_api_url", &self.moltbook_api_url,)
            .field("github_api_url", &self.github_api_url,)
            .finish()
    }
}

impl TryFrom<ServiceArgs,> for ServiceConfig
{
    type Error = Error;

    fn try_from(args: ServiceArgs,) -> Result<Self, Self::Error,>
    {
        let moltbook_api_key = args
            .moltbook_api_key
            .as_deref()
            .map(str::trim,)
            .filter(|value| !value.is_empty(),)
            .ok_or_else(|| {
                Error::config(
                    "a Moltbook API key is required; pass --moltbook-api-key or set MOLTBOOK_API_KEY",
                )
            },)?
            .to_owned();

        Ok(Self {
            bind: args.bind,
            moltbook_api_key,
            moltbook_api_url: normalize_base_url("moltbook-api-url", &args.moltbook_api_url,)?,
            github_api_url: normalize_base_url("github-api-url", &args.github_api_url,)?,
        },)
    }
}

/// Trims whitespace and trailing slashes from a base URL and checks its scheme.
///
/// # Errors
///
/// Returns [`Error::Config`](Error::Config) when the value is blank or does not
/// start with `http://` or `https://`.
fn normalize_base_url(flag: &str, raw: &str,) -> Result<String, Error,>
{
    let trimmed = raw.trim().trim_end_matches('/',);
    if trimmed.is_empty() {
        return Err(Error::config(format!("--{flag} cannot be empty"),),);
    }

    if !(trimmed.starts_with("http://",) || trimmed.starts_with("https://",)) {
        return Err(Error::config(format!(
            "--{flag} must be an absolute http(s) URL, got '{trimmed}'"
        ),),);
    }

    Ok(trimmed.to_owned(),)
}

#[cfg(test)]
mod tests
{
    use clap::Parser;

    use super::{DEFAULT_GITHUB_API_URL, DEFAULT_MOLTBOOK_API_URL, ServiceArgs, ServiceConfig};
    use crate::Error;

    #[derive(Debug, Parser,)]
    struct TestCli
    {
        #[command(flatten)]
        service: ServiceArgs,
    }

    fn parse(args: &[&str],) -> ServiceArgs
    {
        let mut argv = vec!["botcred"];
        argv.extend_from_slice(args,);
        TestCli::try_parse_from(argv,).expect("failed to parse CLI",).service
    }

    #[test]
    fn resolves_defaults_with_explicit_key()
    {
        let config = ServiceConfig::try_from(parse(&["--moltbook-api-key", "moltbook_sk_test",],),)
            .expect("expected valid configuration",);

        assert_eq!(config.moltbook_api_key, "moltbook_sk_test");
        assert_eq!(config.moltbook_api_url, DEFAULT_MOLTBOOK_API_URL);
        assert_eq!(config.github_api_url, DEFAULT_GITHUB_API_URL);
        assert_eq!(config.bind.port(), 8000);
    }

    #[test]
    fn rejects_missing_key()
    {
        let args = ServiceArgs {
            moltbook_api_key: None,
            ..parse(&["--moltbook-api-key", "placeholder",],)
        };

        let error = ServiceConfig::try_from(args,).expect_err("expected missing key error",);
        match error {
            Error::Config {
                message,
            } => {
                assert!(message.contains("Moltbook API key is required"));
            }
            other => panic!("unexpected error variant: {other:?}"),
        }
    }

    #[test]
    fn rejects_blank_key()
    {
        let error = ServiceConfig::try_from(parse(&["--moltbook-api-key", "   ",],),)
            .expect_err("expected blank key error",);
        assert!(matches!(error, Error::Config { .. }));
    }

    #[test]
    fn strips_trailing_slashes_from_base_urls()
    {
        let config = ServiceConfig::try_from(parse(&[
            "--moltbook-api-key",
            "key",
            "--moltbook-api-url",
            "http://127.0.0.1:9000/api/v1/",
            "--github-api-url",
            " http://127.0.0.1:9001// ",
        ],),)
        .expect("expected valid configuration",);

        assert_eq!(config.moltbook_api_url, "http://127.0.0.1:9000/api/v1");
        assert_eq!(config.github_api_url, "http://127.0.0.1:9001");
    }

    #[test]
    fn rejects_relative_base_url()
    {
        let error = ServiceConfig::try_from(parse(&[
            "--moltbook-api-key",
            "key",
            "--github-api-url",
            "api.github.com",
        ],),)
        .expect_err("expected scheme validation error",);

        match error {
            Error::Config {
                message,
            } => {
                assert_eq!(
                    message,
                    "--github-api-url must be an absolute http(s) URL, got 'api.github.com'"
                );
            }
            other => panic!("unexpected error variant: {other:?}"),
        }
    }

    #[test]
    fn debug_output_redacts_key()
    {
        let config = ServiceConfig::try_from(parse(&["--moltbook-api-key", "super-secret",],),)
            .expect("expected valid configuration",);
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
