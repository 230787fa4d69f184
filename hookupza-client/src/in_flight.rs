/// Tracks the single request a form or link may have outstanding. A submit that arrives while
/// one is in flight is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InFlight {
    busy: bool,
}

impl InFlight {
    /// Claim the slot. Returns false when a request is already in flight.
    pub fn try_begin(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        true
    }

    /// Release the slot, whatever the outcome of the request
    pub fn finish(&mut self) {
        self.busy = false;
    }

    pub const fn is_busy(&self) -> bool {
        self.busy
    }
}

#[cfg(test)]
mod test {
    use rstest::{fixture, rstest};

    use super::InFlight;

    #[fixture]
    fn guard() -> InFlight {
        InFlight::default()
    }

    #[rstest]
    fn first_submit_should_begin(mut guard: InFlight) {
        assert!(!guard.is_busy());
        assert!(guard.try_begin());
        assert!(guard.is_busy());
    }

    #[rstest]
    fn duplicate_submit_should_be_rejected(mut guard: InFlight) {
        assert!(guard.try_begin());

        assert!(!guard.try_begin());
        assert!(guard.is_busy());
    }

    #[rstest]
    fn finish_should_allow_the_next_submit(mut guard: InFlight) {
        assert!(guard.try_begin());
        guard.finish();

        assert!(!guard.is_busy());
        assert!(guard.try_begin());
    }

    #[rstest]
    fn finish_without_begin_should_be_harmless(mut guard: InFlight) {
        guard.finish();

        assert_eq!(guard, InFlight::default());
    }
}
