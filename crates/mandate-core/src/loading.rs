//! One-shot mock loading.
//!
//! The constituency map pretends to fetch its results: it mounts in
//! [`LoadPhase::Loading`], and a single timer later resolves it with the
//! static dataset. There is no error path, retry or cancellation.

/// Loading state of a value that resolves exactly once.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadPhase<T> {
    Loading,
    Ready(T),
}

// Manual impl: the derive would demand `T: Default`.
impl<T> Default for LoadPhase<T> {
    fn default() -> Self {
        LoadPhase::Loading
    }
}

impl<T> LoadPhase<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadPhase::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadPhase::Ready(value) => Some(value),
            LoadPhase::Loading => None,
        }
    }

    /// Stores `value` if still loading. Returns `true` if this call resolved
    /// the phase; later calls leave the first value in place.
    pub fn resolve(&mut self, value: T) -> bool {
        if self.is_loading() {
            *self = LoadPhase::Ready(value);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_loading() {
        let phase: LoadPhase<u8> = LoadPhase::default();
        assert!(phase.is_loading());
        assert_eq!(phase.ready(), None);
    }

    #[test]
    fn test_resolves_once() {
        let mut phase = LoadPhase::Loading;
        assert!(phase.resolve("first"));
        assert!(!phase.is_loading());
        assert!(!phase.resolve("second"));
        assert_eq!(phase.ready(), Some(&"first"));
    }
}
