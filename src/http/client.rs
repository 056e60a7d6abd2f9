//! HTTP client with scope enforcement, rate limiting, and redirect following

use crate::core::rate_limit::RateLimiter;
use crate::core::scope::Scope;
use crate::http::request::HttpRequest;
use crate::http::response::HttpResponse;
use anyhow::Result;
use reqwest::{redirect::Policy, Client};
use std::time::Instant;

const MAX_REDIRECTS: usize = 10;

/// Anything that can carry a request to the login endpoint and hand back the response.
///
/// The live implementation is [`HttpClient`]; tests substitute an in-memory login app.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn execute(&self, req: HttpRequest) -> Result<HttpResponse>;
}

pub struct HttpClient {
    client: Client,
    scope: Scope,
    limiter: RateLimiter,
}

impl HttpClient {
    pub fn new(scope: Scope, limiter: RateLimiter) -> Result<Self> {
        let client = Client::builder()
            .danger_accept_invalid_certs(true)
            .redirect(scoped_redirects(scope.clone()))
            .build()?;

        Ok(Self {
            client,
            scope,
            limiter,
        })
    }
}

/// Follow redirects within scope; an off-scope hop fails before it is requested
fn scoped_redirects(scope: Scope) -> Policy {
    Policy::custom(move |attempt| {
        if attempt.previous().len() >= MAX_REDIRECTS {
            attempt.error("too many redirects")
        } else if !scope.is_in_scope(attempt.url()) {
            let blocked = format!("Blocked out-of-scope redirect to {}", attempt.url());
            attempt.error(blocked)
        } else {
            attempt.follow()
        }
    })
}

impl Transport for HttpClient {
    async fn execute(&self, req: HttpRequest) -> Result<HttpResponse> {
        self.limiter.wait().await;

        if !self.scope.is_in_scope(&req.url) {
            anyhow::bail!("Blocked out-of-scope request: {}", req.url);
        }

        let start = Instant::now();

        let mut request = self
            .client
            .request(req.method, req.url.clone())
            .headers(req.headers);

        if let Some(body) = req.body {
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        tracing::trace!(
            status,
            body_len = body.len(),
            elapsed_ms = %start.elapsed().as_millis(),
            "response"
        );

        Ok(HttpResponse::new(status, body))
    }
}
