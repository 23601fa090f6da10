//! Mount-time data loading for pages.
//!
//! Every page fetches on mount and again whenever its key changes. There is
//! no cache. A result is only written if it belongs to the newest request
//! and the owning page is still alive.

use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

use crate::shared::api_utils::ApiError;

#[derive(Clone, Debug, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            FetchState::Ready(value) => Some(value),
            _ => None,
        }
    }
}

pub struct Fetch<T: Send + Sync + 'static> {
    pub state: RwSignal<FetchState<T>>,
    reloads: RwSignal<u32>,
}

impl<T: Send + Sync + 'static> Clone for Fetch<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for Fetch<T> {}

impl<T: Send + Sync + 'static> Fetch<T> {
    pub fn reload(&self) {
        self.reloads.update(|n| *n = n.wrapping_add(1));
    }

    /// Local edit of loaded data, e.g. after a successful status change.
    pub fn update_ready(&self, f: impl FnOnce(&mut T)) {
        self.state.update(|state| {
            if let FetchState::Ready(value) = state {
                f(value);
            }
        });
    }
}

pub fn use_fetch<K, T, F, Fut>(key: impl Fn() -> K + 'static, load: F) -> Fetch<T>
where
    K: 'static,
    T: Send + Sync + 'static,
    F: Fn(K) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let state = RwSignal::new(FetchState::Loading);
    let reloads = RwSignal::new(0u32);
    let generation = StoredValue::new(0u64);

    Effect::new(move |_| {
        let request = load(key());
        reloads.track();

        let current = generation.get_value().wrapping_add(1);
        generation.set_value(current);
        state.set(FetchState::Loading);

        spawn_local(async move {
            let result = request.await;
            if generation.try_get_value() != Some(current) {
                return;
            }
            let next = match result {
                Ok(value) => FetchState::Ready(value),
                Err(err) => {
                    log::error!("fetch failed: {}", err);
                    FetchState::Failed(err.to_string())
                }
            };
            let _ = state.try_set(next);
        });
    });

    Fetch { state, reloads }
}
