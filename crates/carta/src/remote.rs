//! View state for a single asynchronous fetch.
//!
//! Every screen tracks each of its fetches with a [`Remote`]: idle until
//! triggered, loading while a request is in flight, then ready or failed.
//! A new trigger from any state returns to loading, so the controller is
//! re-entrant.
//!
//! There is no request cancellation. Instead, [`Remote::begin`] hands out a
//! generation token and [`Remote::resolve`] discards any result whose token
//! is no longer current, so a fetch that outlives its screen (or is
//! superseded by a newer trigger) settles into a no-op rather than
//! clobbering fresher state. A request that never settles leaves the state
//! loading indefinitely; there is no timeout.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
enum State<T> {
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Remote<T> {
    state: State<T>,
    generation: u64,
}

impl<T> Default for Remote<T> {
    fn default() -> Self {
        Self {
            state: State::Idle,
            generation: 0,
        }
    }
}

impl<T> Remote<T> {
    /// Transition to loading and return the generation token the caller
    /// must attach to the completion message.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.state = State::Loading;
        self.generation
    }

    /// Store the outcome of the fetch tagged with `generation`. Returns
    /// false (and changes nothing) when the token is stale or no request
    /// is in flight.
    pub fn resolve<E: fmt::Display>(&mut self, generation: u64, result: Result<T, E>) -> bool {
        if generation != self.generation || !matches!(self.state, State::Loading) {
            return false;
        }
        self.state = match result {
            Ok(value) => State::Ready(value),
            Err(reason) => State::Failed(reason.to_string()),
        };
        true
    }

    /// Is `generation` still the in-flight request? Used by multi-step
    /// flows that need to check staleness between steps without settling.
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation && self.is_loading()
    }

    /// Back to idle. Also invalidates any in-flight request, so a late
    /// resolution after a reset is discarded.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.state = State::Idle;
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, State::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, State::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match &self.state {
            State::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            State::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begins_loading_and_resolves_ready() {
        let mut remote: Remote<Vec<u32>> = Remote::default();
        assert!(remote.is_idle());

        let generation = remote.begin();
        assert!(remote.is_loading());

        assert!(remote.resolve::<String>(generation, Ok(vec![1, 2])));
        assert_eq!(remote.ready(), Some(&vec![1, 2]));
    }

    #[test]
    fn resolves_failure_with_reason() {
        let mut remote: Remote<()> = Remote::default();
        let generation = remote.begin();
        assert!(remote.resolve(generation, Err("boom")));
        assert_eq!(remote.error(), Some("boom"));
    }

    #[test]
    fn stale_generation_is_discarded() {
        let mut remote: Remote<u32> = Remote::default();
        let first = remote.begin();
        let second = remote.begin();

        // The superseded request settles late; its result must not land.
        assert!(!remote.resolve::<String>(first, Ok(1)));
        assert!(remote.is_loading());

        assert!(remote.resolve::<String>(second, Ok(2)));
        assert_eq!(remote.ready(), Some(&2));
    }

    #[test]
    fn retrigger_from_terminal_states() {
        let mut remote: Remote<u32> = Remote::default();
        let generation = remote.begin();
        assert!(remote.resolve::<String>(generation, Ok(1)));

        let generation = remote.begin();
        assert!(remote.is_loading());
        assert!(remote.resolve(generation, Err("later failure")));
        assert!(remote.error().is_some());

        remote.begin();
        assert!(remote.is_loading());
    }

    #[test]
    fn resolution_after_reset_is_discarded() {
        let mut remote: Remote<u32> = Remote::default();
        let generation = remote.begin();
        remote.reset();

        assert!(!remote.resolve::<String>(generation, Ok(9)));
        assert!(remote.is_idle());
    }

    #[test]
    fn duplicate_resolution_is_discarded() {
        let mut remote: Remote<u32> = Remote::default();
        let generation = remote.begin();
        assert!(remote.resolve::<String>(generation, Ok(1)));
        assert!(!remote.resolve::<String>(generation, Ok(2)));
        assert_eq!(remote.ready(), Some(&1));
    }

    #[test]
    fn is_current_tracks_in_flight_request() {
        let mut remote: Remote<u32> = Remote::default();
        let generation = remote.begin();
        assert!(remote.is_current(generation));

        let newer = remote.begin();
        assert!(!remote.is_current(generation));
        assert!(remote.is_current(newer));
    }
}
