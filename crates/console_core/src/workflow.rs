/// Identity of an issued request. Increases monotonically per `AppState`.
pub type RequestId = u64;

/// Collapsed failure of a workflow request. Transport errors, bad statuses
/// and undecodable bodies all end up here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestFailed;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState<T> {
    #[default]
    Idle,
    Pending {
        request_id: RequestId,
    },
    Succeeded(T),
    Failed,
}

/// What happened to a completion handed to [`Workflow::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    /// The completion belongs to a request that has since been superseded,
    /// or was already resolved.
    Stale,
}

/// Request bookkeeping for one workflow.
///
/// Only the most recently issued request may change the state; completions
/// for older requests are dropped regardless of arrival order.
#[derive(Debug, Clone, PartialEq)]
pub struct Workflow<T> {
    latest: Option<RequestId>,
    state: RequestState<T>,
}

impl<T> Default for Workflow<T> {
    fn default() -> Self {
        Self {
            latest: None,
            state: RequestState::Idle,
        }
    }
}

impl<T> Workflow<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &RequestState<T> {
        &self.state
    }

    pub fn latest_request(&self) -> Option<RequestId> {
        self.latest
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, RequestState::Pending { .. })
    }

    /// Enters Pending for `request_id`, abandoning any earlier request.
    pub fn begin(&mut self, request_id: RequestId) {
        self.latest = Some(request_id);
        self.state = RequestState::Pending { request_id };
    }

    pub fn resolve(
        &mut self,
        request_id: RequestId,
        result: Result<T, RequestFailed>,
    ) -> Resolution {
        match self.state {
            RequestState::Pending { request_id: pending } if pending == request_id => {
                self.state = match result {
                    Ok(value) => RequestState::Succeeded(value),
                    Err(RequestFailed) => RequestState::Failed,
                };
                Resolution::Applied
            }
            _ => Resolution::Stale,
        }
    }
}
