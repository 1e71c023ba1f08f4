use crate::models::Button;
use std::time::Duration;

/// How long an armed button waits for its confirming click.
pub const CONFIRM_WINDOW: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Press {
    /// First click: the button is now armed; `generation` tags its expiry.
    Armed { button: Button, generation: u64 },
    /// Second click on the armed button; state is cleared.
    Confirmed(Button),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appearance {
    Default,
    Armed,
    Dimmed,
}

/// At most one button is armed at any time.
#[derive(Debug, Default)]
pub struct ConfirmationToggle {
    armed: Option<Button>,
    generation: u64,
}

impl ConfirmationToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, button: Button) -> Press {
        if self.armed == Some(button) {
            self.armed = None;
            return Press::Confirmed(button);
        }

        self.generation = self.generation.wrapping_add(1);
        self.armed = Some(button);
        Press::Armed {
            button,
            generation: self.generation,
        }
    }

    /// Reverts the toggle if `generation` is still the current arming.
    pub fn expire(&mut self, generation: u64) -> bool {
        if self.armed.is_some() && self.generation == generation {
            self.armed = None;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.armed = None;
    }

    pub fn armed(&self) -> Option<Button> {
        self.armed
    }

    pub fn appearance(&self, button: Button) -> Appearance {
        match self.armed {
            None => Appearance::Default,
            Some(armed) if armed == button => Appearance::Armed,
            Some(_) => Appearance::Dimmed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WalkingStatus;

    const MED: Button = Button::Medication;
    const GOOD: Button = Button::Walking(WalkingStatus::Good);

    #[test]
    fn second_press_on_armed_button_confirms() {
        let mut toggle = ConfirmationToggle::new();
        assert!(matches!(toggle.press(MED), Press::Armed { button: MED, .. }));
        assert_eq!(toggle.press(MED), Press::Confirmed(MED));
        assert_eq!(toggle.armed(), None);
    }

    #[test]
    fn pressing_another_button_rearms_it() {
        let mut toggle = ConfirmationToggle::new();
        toggle.press(MED);
        assert!(matches!(toggle.press(GOOD), Press::Armed { button: GOOD, .. }));
        assert_eq!(toggle.armed(), Some(GOOD));
        assert_eq!(toggle.appearance(GOOD), Appearance::Armed);
        assert_eq!(toggle.appearance(MED), Appearance::Dimmed);

        // The medication button is no longer armed, so this arms it again.
        assert!(matches!(toggle.press(MED), Press::Armed { .. }));
    }

    #[test]
    fn stale_expiry_is_ignored() {
        let mut toggle = ConfirmationToggle::new();
        let Press::Armed { generation: first, .. } = toggle.press(MED) else {
            panic!("expected arm");
        };
        let Press::Armed { generation: second, .. } = toggle.press(GOOD) else {
            panic!("expected arm");
        };

        assert!(!toggle.expire(first));
        assert_eq!(toggle.armed(), Some(GOOD));
        assert!(toggle.expire(second));
        assert!(!toggle.expire(second));
        assert_eq!(toggle.armed(), None);
    }

    #[test]
    fn expiry_after_confirm_does_nothing() {
        let mut toggle = ConfirmationToggle::new();
        let Press::Armed { generation, .. } = toggle.press(MED) else {
            panic!("expected arm");
        };
        toggle.press(MED);
        assert!(!toggle.expire(generation));
    }

    #[test]
    fn default_appearance_when_nothing_armed() {
        let toggle = ConfirmationToggle::new();
        for button in Button::ALL {
            assert_eq!(toggle.appearance(button), Appearance::Default);
        }
    }
}
