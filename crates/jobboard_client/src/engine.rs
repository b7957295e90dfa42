use std::collections::HashMap;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use jobboard_logging::{board_debug, board_error};
use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::http::{ClientSettings, ReqwestTransport, Transport};
use crate::{ClientEvent, FailureKind, RequestError, RequestId, RequestSpec};

/// Receives completed requests. Called from runtime worker threads.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: ClientEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<ClientEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<ClientEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: ClientEvent) {
        let _ = self.tx.send(event);
    }
}

#[derive(Debug, Error)]
pub enum StartError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("failed to build http client: {0}")]
    Http(#[from] RequestError),
}

enum ClientCommand {
    Send { id: RequestId, spec: RequestSpec },
    Cancel { id: RequestId },
}

type InFlight = Arc<Mutex<HashMap<RequestId, CancellationToken>>>;

/// Runs API calls on a background tokio runtime and reports each one to the sink.
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
}

impl ClientHandle {
    pub fn new(settings: ClientSettings, sink: Arc<dyn EventSink>) -> Result<Self, StartError> {
        let transport = Arc::new(ReqwestTransport::new(settings)?);
        Self::with_transport(transport, sink)
    }

    pub fn with_transport(
        transport: Arc<dyn Transport>,
        sink: Arc<dyn EventSink>,
    ) -> Result<Self, StartError> {
        let runtime = tokio::runtime::Runtime::new()?;
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let in_flight: InFlight = Arc::new(Mutex::new(HashMap::new()));

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                match command {
                    ClientCommand::Send { id, spec } => {
                        let token = CancellationToken::new();
                        if let Ok(mut map) = in_flight.lock() {
                            map.insert(id, token.clone());
                        }
                        let transport = transport.clone();
                        let sink = sink.clone();
                        let in_flight = in_flight.clone();
                        runtime.spawn(async move {
                            let result = run_request(transport.as_ref(), &spec, &token).await;
                            if let Ok(mut map) = in_flight.lock() {
                                map.remove(&id);
                            }
                            sink.emit(ClientEvent::Completed { id, result });
                        });
                    }
                    ClientCommand::Cancel { id } => {
                        let token = in_flight.lock().ok().and_then(|mut map| map.remove(&id));
                        match token {
                            Some(token) => {
                                board_debug!("Cancelling request {}", id);
                                token.cancel();
                            }
                            None => board_debug!("Request {} already finished", id),
                        }
                    }
                }
            }
            board_debug!("Client command channel closed; stopping runtime");
        });

        Ok(Self { cmd_tx })
    }

    pub fn send(&self, id: RequestId, spec: RequestSpec) {
        if self.cmd_tx.send(ClientCommand::Send { id, spec }).is_err() {
            board_error!("Client worker is gone; request {} dropped", id);
        }
    }

    pub fn cancel(&self, id: RequestId) {
        let _ = self.cmd_tx.send(ClientCommand::Cancel { id });
    }
}

async fn run_request(
    transport: &dyn Transport,
    spec: &RequestSpec,
    token: &CancellationToken,
) -> Result<crate::ApiReply, RequestError> {
    tokio::select! {
        _ = token.cancelled() => Err(RequestError::new(FailureKind::Cancelled, "request cancelled")),
        result = transport.send(spec) => result,
    }
}
