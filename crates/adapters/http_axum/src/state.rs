//! Shared application state for axum handlers.

use std::sync::Arc;

use lumen_app::control_surface::ControlSurface;
use lumen_app::ports::{ActionTransport, DiscoveryProvider, PropertyTransport};

/// Application state shared across all axum handlers.
///
/// Generic over the discovery provider and both transports to avoid dynamic
/// dispatch. `Clone` is implemented manually so the underlying types do not
/// need to be `Clone`; only the `Arc` is cloned.
pub struct AppState<D, A, P> {
    /// Roster discovery and command dispatch.
    pub surface: Arc<ControlSurface<D, A, P>>,
}

impl<D, A, P> Clone for AppState<D, A, P> {
    fn clone(&self) -> Self {
        Self {
            surface: Arc::clone(&self.surface),
        }
    }
}

impl<D, A, P> AppState<D, A, P>
where
    D: DiscoveryProvider + Send + Sync + 'static,
    A: ActionTransport + Send + Sync + 'static,
    P: PropertyTransport + Send + Sync + 'static,
{
    pub fn new(surface: ControlSurface<D, A, P>) -> Self {
        Self::from_arc(Arc::new(surface))
    }

    /// Use a surface that is already shared elsewhere.
    pub fn from_arc(surface: Arc<ControlSurface<D, A, P>>) -> Self {
        Self { surface }
    }
}
