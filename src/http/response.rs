#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body_len: usize,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: Vec<u8>) -> Self {
        Self {
            status,
            body_len: body.len(),
            body,
        }
    }

    /// Build a response from a status and body, as the in-memory transports do
    pub fn from_text(status: u16, body: &str) -> Self {
        Self::new(status, body.as_bytes().to_vec())
    }

    /// Get body as UTF-8 string (lossy conversion)
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }

    pub fn body_contains(&self, needle: &str) -> bool {
        self.body_text().contains(needle)
    }
}
