//! Job board client: HTTP transport and a background request runner.
mod engine;
mod http;
mod types;

pub use engine::{ChannelEventSink, ClientHandle, EventSink, StartError};
pub use http::{ClientSettings, ReqwestTransport, Transport, DEFAULT_BASE_URL};
pub use types::{ApiReply, ClientEvent, FailureKind, HttpMethod, RequestError, RequestId, RequestSpec};
