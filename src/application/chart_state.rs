// Per-chart view state with a stale-response guard
use crate::application::reading_repository::FetchError;
use crate::domain::chart::ChartPayload;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;

/// What the presentation layer gets to render for one chart.
///
/// There is no error state: a failed fetch leaves the previous state in
/// place, so a chart that never loaded shows `Loading` indefinitely and a
/// chart that did keeps its stale payload.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartState {
    Loading,
    Ready(ChartPayload),
}

/// Holds one chart's state, last fetch error, and the token of the newest
/// in-flight request. A completion only commits if its token is still the
/// newest, so a slow response from an older selection cannot overwrite a
/// newer one.
pub(crate) struct ChartCell {
    inner: Mutex<CellInner>,
    token: AtomicU64,
}

struct CellInner {
    state: ChartState,
    last_error: Option<FetchError>,
}

impl ChartCell {
    pub(crate) fn new() -> Self {
        Self {
            inner: Mutex::new(CellInner {
                state: ChartState::Loading,
                last_error: None,
            }),
            token: AtomicU64::new(0),
        }
    }

    /// Issue a token for a new fetch, superseding any in-flight one.
    pub(crate) fn issue(&self) -> u64 {
        self.token.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, token: u64) -> bool {
        self.token.load(Ordering::SeqCst) == token
    }

    /// Store a freshly built payload. Returns false if the token was
    /// superseded and the payload discarded. The token is checked while
    /// holding the state lock: a commit that re-checked before locking
    /// could be overtaken by a newer commit and still write last.
    pub(crate) async fn commit(&self, token: u64, payload: ChartPayload) -> bool {
        let mut inner = self.inner.lock().await;
        if !self.is_current(token) {
            tracing::debug!("discarding superseded chart payload (token {token})");
            return false;
        }
        inner.state = ChartState::Ready(payload);
        inner.last_error = None;
        true
    }

    /// Record a fetch failure; the visible state is left untouched.
    pub(crate) async fn fail(&self, token: u64, error: FetchError) {
        let mut inner = self.inner.lock().await;
        if !self.is_current(token) {
            return;
        }
        inner.last_error = Some(error);
    }

    pub(crate) async fn snapshot(&self) -> ChartState {
        self.inner.lock().await.state.clone()
    }

    pub(crate) async fn last_error(&self) -> Option<FetchError> {
        self.inner.lock().await.last_error.clone()
    }
}
