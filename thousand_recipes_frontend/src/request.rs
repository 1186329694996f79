use leptos::logging::{log, warn};
use leptos::*;
use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;
use web_sys::{AbortController, AbortSignal};

use crate::api::Error;

/// What a page knows about its current request.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T> {
    pub value: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState {
            value: None,
            loading: true,
            error: None,
        }
    }
}

impl<T> FetchState<T> {
    /// The previous value stays around so derived views (the pager) keep their shape.
    pub fn start(&mut self) {
        self.loading = true;
    }

    pub fn resolve(&mut self, result: Result<T, String>) {
        match result {
            Ok(value) => {
                self.value = Some(value);
                self.error = None;
            }
            Err(message) => self.error = Some(message),
        }
        self.loading = false;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Generation counter: only the newest ticket may publish its response.
#[derive(Debug, Clone, Default)]
pub struct RequestGate {
    generation: Rc<Cell<u64>>,
    closed: Rc<Cell<bool>>,
}

impl RequestGate {
    pub fn begin(&self) -> Ticket {
        let next = self.generation.get() + 1;
        self.generation.set(next);
        Ticket(next)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        !self.closed.get() && self.generation.get() == ticket.0
    }

    pub fn close(&self) {
        self.closed.set(true);
    }
}

/// The abort handle of the request currently on the wire.
#[derive(Debug, Clone, Default)]
pub struct InFlight {
    controller: Rc<RefCell<Option<AbortController>>>,
}

impl InFlight {
    pub fn replace(&self) -> Option<AbortSignal> {
        self.abort();
        match AbortController::new() {
            Ok(controller) => {
                let signal = controller.signal();
                *self.controller.borrow_mut() = Some(controller);
                Some(signal)
            }
            Err(err) => {
                warn!("Failed to create abort controller: {err:?}");
                None
            }
        }
    }

    pub fn abort(&self) {
        if let Some(controller) = self.controller.borrow_mut().take() {
            controller.abort();
        }
    }
}

/// Re-fetches whenever `source` changes. Older responses are dropped and their
/// requests aborted; unmounting the owning component cancels whatever is left.
pub fn use_fetch<K, T, F, Fut>(
    source: impl Fn() -> K + 'static,
    fetcher: F,
) -> ReadSignal<FetchState<T>>
where
    K: 'static,
    T: 'static,
    F: Fn(K, Option<AbortSignal>) -> Fut + 'static,
    Fut: Future<Output = Result<T, Error>> + 'static,
{
    let (state, set_state) = create_signal(FetchState::default());
    let gate = RequestGate::default();
    let in_flight = InFlight::default();

    {
        let gate = gate.clone();
        let in_flight = in_flight.clone();
        create_effect(move |_| {
            let key = source();
            let ticket = gate.begin();
            let request = fetcher(key, in_flight.replace());
            set_state.update(FetchState::start);

            let gate = gate.clone();
            spawn_local(async move {
                let result = request.await;
                if !gate.is_current(ticket) {
                    log!("Dropping stale response");
                    return;
                }
                match result {
                    Err(err) if err.is_aborted() => (),
                    Err(err) => {
                        warn!("Request failed: {err}");
                        set_state.update(|state| state.resolve(Err(err.to_string())));
                    }
                    Ok(value) => set_state.update(|state| state.resolve(Ok(value))),
                }
            });
        });
    }

    on_cleanup(move || {
        gate.close();
        in_flight.abort();
    });

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_ticket_wins() {
        let gate = RequestGate::default();
        let first = gate.begin();
        let second = gate.begin();
        assert!(!gate.is_current(first));
        assert!(gate.is_current(second));
    }

    #[test]
    fn closing_invalidates_everything() {
        let gate = RequestGate::default();
        let ticket = gate.begin();
        gate.close();
        assert!(!gate.is_current(ticket));
        assert!(!gate.is_current(gate.begin()));
    }

    #[test]
    fn gate_clones_share_generation() {
        let gate = RequestGate::default();
        let handle = gate.clone();
        let ticket = gate.begin();
        handle.begin();
        assert!(!gate.is_current(ticket));
    }

    #[test]
    fn error_keeps_previous_value() {
        let mut state = FetchState::default();
        assert!(state.loading);
        state.resolve(Ok(50));
        assert_eq!(state.value, Some(50));
        assert!(!state.loading);

        state.start();
        assert!(state.loading);
        state.resolve(Err("HTTP 500 at https://dummyjson.com/recipes".to_string()));
        assert_eq!(state.value, Some(50));
        assert_eq!(
            state.error.as_deref(),
            Some("HTTP 500 at https://dummyjson.com/recipes")
        );
        assert!(!state.loading);
    }

    #[test]
    fn success_clears_error() {
        let mut state = FetchState::default();
        state.resolve(Err("boom".to_string()));
        state.start();
        state.resolve(Ok("ok"));
        assert_eq!(state.error, None);
        assert_eq!(state.value, Some("ok"));
    }
}
