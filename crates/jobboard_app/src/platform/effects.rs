use std::sync::{mpsc, Arc};

use jobboard_client::{
    ClientEvent, ClientHandle, ClientSettings, EventSink, FailureKind, RequestError, RequestSpec,
    StartError,
};
use jobboard_core::{
    ApiReply, ApiRequest, ApiResult, Effect, Method, Msg, RequestFailure, TransportFailure,
};
use jobboard_logging::board_debug;

use super::ui::input::Command;

/// Executes core effects through the HTTP client.
pub struct EffectRunner {
    client: ClientHandle,
}

impl EffectRunner {
    pub fn new(
        settings: ClientSettings,
        inbox: mpsc::Sender<Command>,
    ) -> Result<Self, StartError> {
        let client = ClientHandle::new(settings, Arc::new(MsgSink { inbox }))?;
        Ok(Self { client })
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Send { id, request } => {
                    board_debug!("Send request {} to {}", id, request.path());
                    self.client.send(id, request_spec(&request));
                }
                Effect::Cancel { id } => self.client.cancel(id),
            }
        }
    }
}

/// Feeds completed requests back into the app loop as messages.
struct MsgSink {
    inbox: mpsc::Sender<Command>,
}

impl EventSink for MsgSink {
    fn emit(&self, event: ClientEvent) {
        let msg = match event {
            ClientEvent::Completed { id, result } => Msg::ResponseReceived {
                id,
                result: map_result(result),
            },
        };
        let _ = self.inbox.send(Command::Dispatch(msg));
    }
}

fn request_spec(request: &ApiRequest) -> RequestSpec {
    match request.method() {
        Method::Get => RequestSpec::get(request.path(), request.query()),
        Method::Post => RequestSpec::post(
            request.path(),
            request.body().unwrap_or(serde_json::Value::Null),
        ),
    }
}

fn map_result(result: Result<jobboard_client::ApiReply, RequestError>) -> ApiResult {
    result
        .map(|reply| ApiReply::new(reply.status, reply.body))
        .map_err(|err| RequestFailure::new(map_failure(&err.kind), err.message))
}

fn map_failure(kind: &FailureKind) -> TransportFailure {
    match kind {
        FailureKind::Timeout => TransportFailure::Timeout,
        FailureKind::Cancelled => TransportFailure::Cancelled,
        FailureKind::InvalidUrl
        | FailureKind::TooLarge { .. }
        | FailureKind::Decode
        | FailureKind::Network => TransportFailure::Network,
    }
}
