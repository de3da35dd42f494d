// Copyright (c) 2025 Centavo Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Failures surfaced by [`crate::api::ApiClient`]. The client never
/// retries and never swallows; every variant propagates to the caller.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx response carrying a parsable `{"message": ...}` body.
    /// Displays as exactly the server-provided message.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Non-2xx response whose body was absent or not parsable JSON.
    #[error("HTTP error! status: {0}")]
    Http(u16),

    /// DNS, connection, or timeout failure from the transport.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// 2xx response whose body did not match the expected shape.
    #[error("malformed response body: {0}")]
    Decode(#[source] serde_json::Error),

    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Failures from the local session store.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session store I/O: {0}")]
    Io(#[from] std::io::Error),

    #[error("session store contents invalid: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not determine platform data directory")]
    NoDataDir,
}

impl ApiError {
    /// HTTP status of the failed request, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            ApiError::Http(status) => Some(*status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
