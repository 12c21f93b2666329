//! Async coordination
//!
//! Requests run on `spawn_local` in the browser and on a tokio runtime
//! natively. Results land in an `Arc<Mutex<Option<Result<..>>>>` slot that
//! the UI drains from `update()` - widgets never await.

use std::future::Future;
use std::sync::{Arc, Mutex};

use crate::error::{AppError, InspectError};

/// Slot filled once the spawned request finishes
pub type Pending<T> = Arc<Mutex<Option<Result<T, InspectError>>>>;

/// Take the result out of a slot if the request has finished
pub fn take_ready<T>(slot: &Pending<T>) -> Option<Result<T, InspectError>> {
    slot.try_lock().ok().and_then(|mut guard| guard.take())
}

#[derive(Clone)]
pub struct Spawner {
    #[cfg(not(target_arch = "wasm32"))]
    handle: tokio::runtime::Handle,
    // Keeps an owned runtime alive for as long as any spawner clone exists
    #[cfg(not(target_arch = "wasm32"))]
    _runtime: Option<Arc<tokio::runtime::Runtime>>,
}

impl Spawner {
    /// Spawner backed by its own multi-threaded runtime
    #[cfg(not(target_arch = "wasm32"))]
    pub fn new() -> Result<Self, AppError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;
        Ok(Self {
            handle: runtime.handle().clone(),
            _runtime: Some(Arc::new(runtime)),
        })
    }

    /// Spawner running on an existing runtime
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_handle(handle: tokio::runtime::Handle) -> Self {
        Self {
            handle,
            _runtime: None,
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn new() -> Result<Self, AppError> {
        Ok(Self {})
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn spawn<T, F>(&self, request: F) -> Pending<T>
    where
        T: Send + 'static,
        F: Future<Output = Result<T, InspectError>> + Send + 'static,
    {
        let slot: Pending<T> = Arc::new(Mutex::new(None));
        let writer = slot.clone();

        self.handle.spawn(async move {
            let result = request.await;
            if let Ok(mut guard) = writer.lock() {
                *guard = Some(result);
            }
        });

        slot
    }

    #[cfg(target_arch = "wasm32")]
    pub fn spawn<T, F>(&self, request: F) -> Pending<T>
    where
        T: 'static,
        F: Future<Output = Result<T, InspectError>> + 'static,
    {
        let slot: Pending<T> = Arc::new(Mutex::new(None));
        let writer = slot.clone();

        wasm_bindgen_futures::spawn_local(async move {
            let result = request.await;
            if let Ok(mut guard) = writer.lock() {
                *guard = Some(result);
            }
        });

        slot
    }
}
