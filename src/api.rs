// Copyright (c) 2025 Centavo Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::ApiError;
use crate::models::{
    AuthResponse, Credentials, Debt, DebtPage, DebtPatch, Expense, ExpensePage, ExpensePatch,
    NewDebt, NewExpense, NewPayment, Payment, PaymentPage, PaymentPatch, ProfilePatch,
    Registration, Session, UserProfile,
};
use crate::session::SessionStore;
use reqwest::{Method, StatusCode};
use rust_decimal::Decimal;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub const DEFAULT_API_URL: &str = "http://localhost:3001";

const UA: &str = concat!(
    "centavo/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/centavo-app/centavo)"
);

/// Typed client for the Centavo REST backend. Owns the bearer-token
/// lifecycle through the injected [`SessionStore`]; everything else is a
/// straight relay, with server-side rules (for example a payment reducing
/// its debt's remainder) reflected only in subsequent reads.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    store: Box<dyn SessionStore>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, store: Box<dyn SessionStore>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(15))
            .user_agent(UA)
            .build()?;
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Ok(Self {
            http,
            base_url,
            store,
        })
    }

    /// Base URL from `CENTAVO_API_URL`, falling back to the local default.
    pub fn from_env(store: Box<dyn SessionStore>) -> Result<Self, ApiError> {
        let url = std::env::var("CENTAVO_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(url, store)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// True iff a session with a non-empty token is persisted. Purely
    /// local; the token's server-side validity is never checked. An
    /// unreadable store is an error here just as it is on a request.
    pub fn is_authenticated(&self) -> Result<bool, ApiError> {
        Ok(matches!(self.store.load()?, Some(s) if !s.token.is_empty()))
    }

    /// The cached session, if any. No network round-trip.
    pub fn session(&self) -> Result<Option<Session>, ApiError> {
        Ok(self.store.load()?)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        let body = Credentials {
            email: email.to_string(),
            password: password.to_string(),
        };
        let auth: AuthResponse = self
            .request(Method::POST, "/auth/login", Some(&body))
            .await?;
        let session = Session {
            token: auth.access_token,
            user: auth.user,
        };
        self.store.save(&session)?;
        Ok(session)
    }

    pub async fn register(
        &self,
        email: &str,
        password: &str,
        salary: Decimal,
    ) -> Result<Session, ApiError> {
        let body = Registration {
            email: email.to_string(),
            password: password.to_string(),
            salary,
        };
        let auth: AuthResponse = self
            .request(Method::POST, "/auth/register", Some(&body))
            .await?;
        let session = Session {
            token: auth.access_token,
            user: auth.user,
        };
        self.store.save(&session)?;
        Ok(session)
    }

    /// Drops the persisted session. Safe to call when none exists.
    pub fn logout(&self) -> Result<(), ApiError> {
        self.store.clear()?;
        Ok(())
    }

    pub async fn list_expenses(&self) -> Result<Vec<Expense>, ApiError> {
        let page: ExpensePage = self.request(Method::GET, "/expenses", NO_BODY).await?;
        Ok(page.expenses)
    }

    pub async fn create_expense(&self, new: &NewExpense) -> Result<Expense, ApiError> {
        self.request(Method::POST, "/expenses", Some(new)).await
    }

    pub async fn update_expense(&self, id: &str, patch: &ExpensePatch) -> Result<Expense, ApiError> {
        self.request(Method::PATCH, &format!("/expenses/{id}"), Some(patch))
            .await
    }

    pub async fn delete_expense(&self, id: &str) -> Result<(), ApiError> {
        self.request_unit(Method::DELETE, &format!("/expenses/{id}"))
            .await
    }

    pub async fn list_debts(&self) -> Result<Vec<Debt>, ApiError> {
        let page: DebtPage = self.request(Method::GET, "/debts", NO_BODY).await?;
        Ok(page.debts)
    }

    pub async fn create_debt(&self, new: &NewDebt) -> Result<Debt, ApiError> {
        self.request(Method::POST, "/debts", Some(new)).await
    }

    pub async fn update_debt(&self, id: &str, patch: &DebtPatch) -> Result<Debt, ApiError> {
        self.request(Method::PATCH, &format!("/debts/{id}"), Some(patch))
            .await
    }

    pub async fn delete_debt(&self, id: &str) -> Result<(), ApiError> {
        self.request_unit(Method::DELETE, &format!("/debts/{id}"))
            .await
    }

    pub async fn list_payments(&self) -> Result<Vec<Payment>, ApiError> {
        let page: PaymentPage = self.request(Method::GET, "/payments", NO_BODY).await?;
        Ok(page.payments)
    }

    pub async fn create_payment(&self, new: &NewPayment) -> Result<Payment, ApiError> {
        self.request(Method::POST, "/payments", Some(new)).await
    }

    pub async fn update_payment(&self, id: &str, patch: &PaymentPatch) -> Result<Payment, ApiError> {
        self.request(Method::PATCH, &format!("/payments/{id}"), Some(patch))
            .await
    }

    pub async fn delete_payment(&self, id: &str) -> Result<(), ApiError> {
        self.request_unit(Method::DELETE, &format!("/payments/{id}"))
            .await
    }

    pub async fn profile(&self) -> Result<UserProfile, ApiError> {
        self.request(Method::GET, "/users/profile", NO_BODY).await
    }

    pub async fn update_profile(&self, patch: &ProfilePatch) -> Result<UserProfile, ApiError> {
        self.request(Method::PUT, "/users/profile", Some(patch))
            .await
    }

    /// Builds, sends, and gates a request: JSON content type always, a
    /// bearer token when one is stored, and non-2xx turned into an error
    /// carrying the server's message field when the body yields one.
    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<reqwest::Response, ApiError> {
        let mut req = self
            .http
            .request(method, format!("{}{}", self.base_url, path))
            .header(reqwest::header::CONTENT_TYPE, "application/json");
        if let Some(session) = self.store.load()? {
            if !session.token.is_empty() {
                req = req.bearer_auth(&session.token);
            }
        }
        if let Some(b) = body {
            req = req.json(b);
        }
        let resp = req.send().await?;
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        Err(error_from_response(status, resp).await)
    }

    async fn request<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError> {
        let resp = self.send(method, path, body).await?;
        let bytes = resp.bytes().await?;
        serde_json::from_slice(&bytes).map_err(ApiError::Decode)
    }

    /// For DELETE endpoints, whose success responses carry no body.
    async fn request_unit(&self, method: Method, path: &str) -> Result<(), ApiError> {
        self.send(method, path, NO_BODY).await?;
        Ok(())
    }
}

/// Type hint for body-less requests.
const NO_BODY: Option<&Value> = None;

async fn error_from_response(status: StatusCode, resp: reqwest::Response) -> ApiError {
    let message = match resp.bytes().await {
        Ok(bytes) => serde_json::from_slice::<Value>(&bytes)
            .ok()
            .and_then(|v| v.get("message").and_then(Value::as_str).map(String::from)),
        Err(_) => None,
    };
    match message {
        Some(message) => ApiError::Api {
            status: status.as_u16(),
            message,
        },
        None => ApiError::Http(status.as_u16()),
    }
}
