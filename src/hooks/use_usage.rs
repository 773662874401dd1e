use std::rc::Rc;
use yew::prelude::*;

use crate::models::usage::UsagePayload;
use crate::services::api::fetch_usage;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, PartialEq, Debug)]
pub enum DataState {
    Loading,
    Loaded(Rc<UsagePayload>),
    Error(String),
}

impl DataState {
    /// Returns true if the state is loading
    pub fn is_loading(&self) -> bool {
        matches!(self, DataState::Loading)
    }

    /// Returns the payload if it is loaded
    pub fn data(&self) -> Option<&Rc<UsagePayload>> {
        match self {
            DataState::Loaded(payload) => Some(payload),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            DataState::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Fetches the usage payload once per mount. No polling.
#[hook]
pub fn use_usage() -> UseStateHandle<DataState> {
    let state = use_state(|| DataState::Loading);

    {
        let state = state.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                match fetch_usage().await {
                    Ok(payload) => {
                        gloo::console::log!(&format!(
                            "Loaded {} usage records",
                            payload.usage.len()
                        ));
                        state.set(DataState::Loaded(Rc::new(payload)));
                    }
                    Err(e) => {
                        gloo::console::error!(&format!("Error loading data: {e}"));
                        state.set(DataState::Error(e.to_string()));
                    }
                }
            });

            || () // Cleanup
        });
    }

    state
}
