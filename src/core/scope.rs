use url::Url;

/// Host allow-list for the run: the login endpoint's host and nothing else.
#[derive(Debug, Clone)]
pub struct Scope {
    allowed_hosts: Vec<String>,
}

impl Scope {
    pub fn new(target: &Url) -> anyhow::Result<Self> {
        let host = target
            .host_str()
            .ok_or_else(|| anyhow::anyhow!("Invalid target host: {}", target))?;

        Ok(Self {
            allowed_hosts: vec![host.to_string()],
        })
    }

    pub fn is_in_scope(&self, url: &Url) -> bool {
        if let Some(host) = url.host_str() {
            self.allowed_hosts.iter().any(|h| h == host)
        } else {
            false
        }
    }
}
