#![allow(non_shorthand_field_patterns)]
#![doc = "Error handling primitives shared across the badge service."]
// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! The derive emitted by [`masterror::Error`] expands pattern matches that
//! trigger the `non_shorthand_field_patterns` lint. The lint is disabled for
//! the module to keep the generated implementations warning-free.
//!
//! Two error surfaces exist. [`FetchError`] describes why a single upstream
//! read failed and is narrow enough for callers to decide whether a failure is
//! fatal (primary agent) or degrades a section of the response (secondary
//! GitHub account). [`Error`] covers startup and serving failures of the
//! process itself.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Failure of a single outbound profile read.
///
/// `NotFound` maps to HTTP 404 on the primary path; every other variant is an
/// upstream failure and maps to HTTP 500.
#[derive(Debug, masterror::Error,)]
pub enum FetchError
{
    /// The upstream platform has no account with the requested identifier.
    #[error("{platform} account '{identifier}' was not found")]
    NotFound {
        /// Human readable platform name.
        platform:   &'static str,
        /// Identifier that was looked up.
        identifier: String,
    },
    /// The identifier cannot name an account on the platform, so no request
    /// was sent.
    #[error("'{identifier}' is not a valid {platform} username")]
    InvalidIdentifier {
        /// Human readable platform name.
        platform:   &'static str,
        /// Identifier that was rejected.
        identifier: String,
    },
    /// The upstream answered with a status other than 200 or 404.
    #[error("{platform} responded with unexpected status {status}")]
    Status {
        /// Human readable platform name.
        platform: &'static str,
        /// Numeric HTTP status returned by the upstream.
        status:   u16,
    },
    /// The request never produced a response (DNS, connect, reset, ...).
    #[error("failed to reach {platform}: {message}")]
    Transport {
        /// Human readable platform name.
        platform: &'static str,
        /// Transport level diagnostic.
        message:  String,
    },
    /// The response body could not be decoded into the expected shape.
    #[error("failed to decode {platform} response: {source}")]
    Decode {
        /// Human readable platform name.
        platform: &'static str,
        /// Underlying JSON decoding error.
        source:   serde_json::Error,
    },
    /// The upstream envelope reported an unsuccessful lookup.
    #[error("{platform} reported an unsuccessful lookup: {message}")]
    Unsuccessful {
        /// Human readable platform name.
        platform: &'static str,
        /// Diagnostic supplied by the upstream or synthesized locally.
        message:  String,
    },
}

impl FetchError
{
    /// Constructs a [`FetchError::NotFound`] for the given identifier.
    pub fn not_found<I,>(platform: &'static str, identifier: I,) -> Self
    where
        I: Into<String,>,
    {
        Self::NotFound {
            platform,
            identifier: identifier.into(),
        }
    }

    /// Constructs a [`FetchError::Transport`] from any displayable fault.
    pub fn transport<M,>(platform: &'static str, message: M,) -> Self
    where
        M: std::fmt::Display,
    {
        Self::Transport {
            platform,
            message: message.to_string(),
        }
    }

    /// Constructs a [`FetchError::Unsuccessful`] from the provided message.
    pub fn unsuccessful<M,>(platform: &'static str, message: M,) -> Self
    where
        M: Into<String,>,
    {
        Self::Unsuccessful {
            platform,
            message: message.into(),
        }
    }

    /// Returns `true` when the upstream reported a missing account.
    pub fn is_not_found(&self,) -> bool
    {
        matches!(self, Self::NotFound { .. })
    }

    /// HTTP status used when the error terminates a request.
    pub fn status_code(&self,) -> StatusCode
    {
        if self.is_not_found() { StatusCode::NOT_FOUND } else { StatusCode::INTERNAL_SERVER_ERROR }
    }
}

impl IntoResponse for FetchError
{
    fn into_response(self,) -> Response
    {
        let status = self.status_code();
        (status, Json(json!({ "detail": self.to_string() }),),).into_response()
    }
}

/// Unified error type returned while configuring and running the service.
#[derive(Debug, masterror::Error,)]
pub enum Error
{
    /// Returned when the configuration violates invariants.
    #[error("invalid configuration: {message}")]
    Config {
        /// Human readable message describing the configuration problem.
        message: String,
    },
    /// Returned when an upstream HTTP client cannot be constructed.
    #[error("failed to build {platform} client: {message}")]
    Client {
        /// Human readable platform name.
        platform: &'static str,
        /// Diagnostic reported by the client builder.
        message:  String,
    },
    /// Wraps I/O errors raised while binding or serving the listener.
    #[error("failed to serve on {address}: {source}")]
    Io {
        /// Address the listener was bound to.
        address: String,
        /// Underlying I/O error.
        source:  std::io::Error,
    },
}

impl Error
{
    /// Constructs a configuration error from the provided message.
    ///
    /// # Parameters
    ///
    /// * `message` - Human-readable description of the configuration failure.
    pub fn config<M,>(message: M,) -> Self
    where
        M: Into<String,>,
    {
        Self::Config {
            message: message.into(),
        }
    }

    /// Constructs a client construction error.
    pub fn client<M,>(platform: &'static str, message: M,) -> Self
    where
        M: std::fmt::Display,
    {
        Self::Client {
            platform,
            message: message.to_string(),
        }
    }

    /// Formats the error for diagnostics without the variant name.
    ///
    /// The returned string matches the [`std::fmt::Display`] implementation.
    pub fn to_display_string(&self,) -> String
    {
        format!("{self}")
    }
}

/// Creates an [`Error::Io`] variant capturing the listener address and source.
///
/// # Parameters
///
/// * `address` - Address the service attempted to bind or serve on.
/// * `source` - I/O error reported by the operating system.
pub fn io_error(address: impl std::fmt::Display, source: std::io::Error,) -> Error
{
    Error::Io {
        address: address.to_string(),
        source,
    }
}
