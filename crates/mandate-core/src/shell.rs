//! Top-level page visibility.
//!
//! The page opens on the splash screen. Entering the site switches to the main
//! body for the rest of the session; there is no transition back.

/// Which top-level surface is visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShellPhase {
    /// Entry screen, shown on load
    #[default]
    Splash,
    /// Header, intro, visualizations and footer
    Main,
}

impl ShellPhase {
    /// Moves to [`ShellPhase::Main`].
    ///
    /// Returns `true` if the phase changed. Once in `Main` this is a no-op.
    pub fn enter(&mut self) -> bool {
        match self {
            ShellPhase::Splash => {
                *self = ShellPhase::Main;
                true
            }
            ShellPhase::Main => false,
        }
    }

    pub fn shows_splash(self) -> bool {
        self == ShellPhase::Splash
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_splash() {
        assert!(ShellPhase::default().shows_splash());
    }

    #[test]
    fn test_enter_is_one_shot() {
        let mut phase = ShellPhase::default();
        assert!(phase.enter());
        assert!(!phase.shows_splash());

        for _ in 0..5 {
            assert!(!phase.enter());
            assert!(!phase.shows_splash());
        }
    }
}
