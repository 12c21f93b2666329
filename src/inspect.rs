//! Inspection client
//!
//! Owns the lifted [`InspectState`] shared by the form and result panels.
//! Each call to [`InspectClient::inspect`] issues exactly one request; requests
//! are never cancelled, and whichever finishes last decides the state.

use inspector_types::QueryParams;
use serde_json::Value;

use crate::api::ApiClient;
use crate::spawn::{take_ready, Pending, Spawner};
use crate::state::InspectState;

pub struct InspectClient {
    api: ApiClient,
    spawner: Spawner,
    state: InspectState,
    in_flight: Vec<Pending<Value>>,
    /// Bumped on every state transition so views can cache on it
    revision: u64,
}

impl InspectClient {
    pub fn new(api: ApiClient, spawner: Spawner) -> Self {
        Self {
            api,
            spawner,
            state: InspectState::default(),
            in_flight: Vec::new(),
            revision: 0,
        }
    }

    pub fn state(&self) -> &InspectState {
        &self.state
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Any request still waiting for a response
    pub fn has_pending(&self) -> bool {
        !self.in_flight.is_empty()
    }

    pub fn inspect(&mut self, params: QueryParams) {
        tracing::info!(
            world = %params.world,
            obj = %params.obj,
            perspective = %params.perspective,
            context = %params.context,
            "inspecting object"
        );

        self.state.begin(&params);
        self.revision += 1;

        let api = self.api.clone();
        let slot = self
            .spawner
            .spawn(async move { api.inspect(&params).await });
        self.in_flight.push(slot);
    }

    /// Apply finished requests. Returns true when the state changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;

        for slot in std::mem::take(&mut self.in_flight) {
            match take_ready(&slot) {
                Some(result) => {
                    match &result {
                        Ok(_) => tracing::info!("inspection completed"),
                        Err(err) => tracing::warn!(error = %err, "inspection failed"),
                    }
                    self.state.complete(result);
                    self.revision += 1;
                    changed = true;
                }
                None => self.in_flight.push(slot),
            }
        }

        changed
    }

    /// Clear data, error and query. In-flight requests keep running.
    pub fn reset(&mut self) {
        self.state.reset();
        self.revision += 1;
    }
}
