use super::physics::Vec2;

pub const TRANSITION_SECONDS: f32 = 0.5;

/// A positionable full-screen or sprite layer the gameplay shows and
/// hides (stage darkness, speech bubbles, HUD text). Compositing is a
/// renderer concern; this is only the state the renderer would read.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Overlay {
    pub visible: bool,
    pub position: Vec2,
}

impl Overlay {
    pub fn shown_at(position: Vec2) -> Self {
        Self {
            visible: true,
            position,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeEvent {
    FlashFinished,
    FadeFinished,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Transition {
    Flash { remaining_seconds: f32 },
    Fade { remaining_seconds: f32 },
}

/// Scene camera with flash (from black) and fade (to black) transitions.
/// `step` reports the finishing transition exactly once.
#[derive(Debug, Default)]
pub struct Camera {
    transition: Option<Transition>,
}

impl Camera {
    pub fn flash(&mut self) {
        self.transition = Some(Transition::Flash {
            remaining_seconds: TRANSITION_SECONDS,
        });
    }

    pub fn fade(&mut self) {
        self.transition = Some(Transition::Fade {
            remaining_seconds: TRANSITION_SECONDS,
        });
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    pub fn step(&mut self, dt_seconds: f32) -> Option<FadeEvent> {
        let transition = self.transition.as_mut()?;
        let (remaining, event) = match transition {
            Transition::Flash { remaining_seconds } => (remaining_seconds, FadeEvent::FlashFinished),
            Transition::Fade { remaining_seconds } => (remaining_seconds, FadeEvent::FadeFinished),
        };
        *remaining -= dt_seconds;
        if *remaining > 0.0 {
            return None;
        }
        self.transition = None;
        Some(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_completes_exactly_once() {
        let mut camera = Camera::default();
        camera.fade();

        assert_eq!(camera.step(TRANSITION_SECONDS * 0.5), None);
        assert_eq!(camera.step(TRANSITION_SECONDS), Some(FadeEvent::FadeFinished));
        assert_eq!(camera.step(TRANSITION_SECONDS), None);
        assert!(!camera.is_transitioning());
    }

    #[test]
    fn flash_reports_flash_event() {
        let mut camera = Camera::default();
        camera.flash();

        assert_eq!(camera.step(TRANSITION_SECONDS), Some(FadeEvent::FlashFinished));
    }

    #[test]
    fn new_transition_replaces_pending_one() {
        let mut camera = Camera::default();
        camera.flash();
        camera.fade();

        assert_eq!(camera.step(TRANSITION_SECONDS), Some(FadeEvent::FadeFinished));
    }

    #[test]
    fn overlay_defaults_hidden() {
        let overlay = Overlay::default();
        assert!(!overlay.visible);

        let shown = Overlay::shown_at(Vec2 { x: 3.0, y: 4.0 });
        assert!(shown.visible);
        assert_eq!(shown.position, Vec2 { x: 3.0, y: 4.0 });
    }
}
