use std::sync::Arc;

use axum::extract::FromRef;
use gamedex_dal::Pool;

#[derive(Clone)]
pub struct AppState {
    state: Arc<AppStateInner>,
}

// `axum_valid::Garde` extracts its validation context via `FromRef<AppState>`.
// For the empty `()` context used by these payloads the library requires this
// glue impl (see axum-valid's `Garde` docs) when the router carries state.
impl FromRef<AppState> for () {
    fn from_ref(_: &AppState) -> Self {}
}

impl AppState {
    pub fn new(pool: Pool) -> Self {
        AppState {
            state: Arc::new(AppStateInner { pool }),
        }
    }

    pub fn pool(&self) -> &Pool {
        &self.state.pool
    }
}

struct AppStateInner {
    pool: Pool,
}
