pub mod client;
pub mod request;
pub mod response;

pub use client::{HttpClient, Transport};
pub use request::HttpRequest;
pub use response::HttpResponse;
