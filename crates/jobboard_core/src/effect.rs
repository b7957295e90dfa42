use crate::{ApiRequest, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue `request`; the outcome comes back as `Msg::ResponseReceived { id, .. }`.
    Send { id: RequestId, request: ApiRequest },
    /// Abandon an in-flight request.
    Cancel { id: RequestId },
}
