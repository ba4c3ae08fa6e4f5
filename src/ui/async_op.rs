//! Loading/error/data state for one asynchronous operation.
//!
//! Each call site owns one `AsyncOp<T>` per logical operation. `start`
//! hands out a generation token; a completion only lands if its token still
//! matches, so a stale response can never clobber the state of a newer call.

/// Token identifying one started operation.
pub type OpToken = u64;

#[derive(Debug, Clone)]
pub struct AsyncOp<T> {
    data: Option<T>,
    loading: bool,
    error: Option<String>,
    generation: OpToken,
}

impl<T> Default for AsyncOp<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
            generation: 0,
        }
    }
}

impl<T> AsyncOp<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a new call: sets `loading`, clears any prior error, leaves the
    /// previous data in place, and returns the token the completion must
    /// present.
    pub fn start(&mut self) -> OpToken {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        self.generation
    }

    /// Record a successful completion. Returns false (and changes nothing)
    /// when the token is stale.
    pub fn resolve(&mut self, token: OpToken, value: T) -> bool {
        if token != self.generation {
            return false;
        }
        self.loading = false;
        self.error = None;
        self.data = Some(value);
        true
    }

    /// Record a failed completion. Prior data stays untouched. Returns false
    /// when the token is stale.
    pub fn reject(&mut self, token: OpToken, message: impl Into<String>) -> bool {
        if token != self.generation {
            return false;
        }
        self.loading = false;
        self.error = Some(message.into());
        true
    }

    /// Back to idle. Also invalidates any in-flight call.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.data = None;
        self.error = None;
        self.loading = false;
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_ends_with_data_and_no_error() {
        let mut op: AsyncOp<u32> = AsyncOp::new();
        let token = op.start();
        assert!(op.is_loading());
        assert!(op.resolve(token, 7));
        assert!(!op.is_loading());
        assert_eq!(op.data(), Some(&7));
        assert_eq!(op.error(), None);
    }

    #[test]
    fn failure_keeps_prior_data() {
        let mut op: AsyncOp<u32> = AsyncOp::new();
        let first = op.start();
        op.resolve(first, 1);

        let second = op.start();
        assert_eq!(op.error(), None, "start clears the previous error");
        assert!(op.reject(second, "backend unreachable"));
        assert!(!op.is_loading());
        assert_eq!(op.data(), Some(&1));
        assert_eq!(op.error(), Some("backend unreachable"));
    }

    #[test]
    fn stale_completion_is_ignored() {
        let mut op: AsyncOp<u32> = AsyncOp::new();
        let old = op.start();
        let new = op.start();
        assert!(!op.resolve(old, 1));
        assert_eq!(op.data(), None);
        assert!(op.is_loading());
        assert!(op.resolve(new, 2));
        assert_eq!(op.data(), Some(&2));
    }

    #[test]
    fn reset_invalidates_in_flight_calls() {
        let mut op: AsyncOp<u32> = AsyncOp::new();
        let token = op.start();
        op.reset();
        assert!(!op.resolve(token, 9));
        assert_eq!(op.data(), None);
        assert!(!op.is_loading());
    }
}
