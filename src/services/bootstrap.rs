use std::sync::Arc;

use crate::backend::{BootstrapPayload, DocumentQa};
use crate::models::Scope;

/// Recover prior session state at view mount. Pure best-effort hydration:
/// any backend or parse failure degrades to an empty session, logged but
/// never raised, and no retry is attempted.
pub async fn load_initial_state(backend: &Arc<dyn DocumentQa>, scope: Scope) -> BootstrapPayload {
    match backend.fetch_bootstrap(scope).await {
        Ok(payload) => payload,
        Err(e) => {
            tracing::warn!(
                "Bootstrap failed for {} scope, starting empty: {}",
                scope,
                e
            );
            BootstrapPayload::default()
        }
    }
}
