use tracing::warn;

#[derive(Debug, Clone)]
struct Clip {
    name: &'static str,
    frames: Vec<u32>,
    fps: f32,
    looped: bool,
}

impl Clip {
    fn duration_seconds(&self) -> f32 {
        self.frames.len().max(1) as f32 / self.fps.max(f32::EPSILON)
    }
}

/// Named-clip playback. Completion of a non-looping clip is reported by
/// `step` exactly once; looping clips never complete. Restarting any clip
/// discards a pending completion, so a superseded transition is silent.
#[derive(Debug, Default)]
pub struct Animator {
    clips: Vec<Clip>,
    current: Option<usize>,
    elapsed_seconds: f32,
    completed: bool,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_clip(&mut self, name: &'static str, frames: &[u32], fps: f32, looped: bool) {
        self.clips.retain(|clip| clip.name != name);
        self.clips.push(Clip {
            name,
            frames: frames.to_vec(),
            fps,
            looped,
        });
    }

    /// Restarts playback of the named clip from its first frame.
    pub fn play(&mut self, name: &str) -> bool {
        match self.clips.iter().position(|clip| clip.name == name) {
            Some(index) => {
                self.current = Some(index);
                self.elapsed_seconds = 0.0;
                self.completed = false;
                true
            }
            None => {
                warn!(clip = name, "unknown animation clip");
                false
            }
        }
    }

    /// Name of the clip currently playing. Callers that re-select the same
    /// state each frame check this before calling `play` so a running clip
    /// is not restarted.
    pub fn current(&self) -> Option<&'static str> {
        self.current.map(|index| self.clips[index].name)
    }

    pub fn elapsed_seconds(&self) -> f32 {
        self.elapsed_seconds
    }

    /// Advances playback; returns the clip name the first time a
    /// non-looping clip runs past its end.
    pub fn step(&mut self, dt_seconds: f32) -> Option<&'static str> {
        let index = self.current?;
        let clip = &self.clips[index];
        self.elapsed_seconds += dt_seconds;

        if clip.looped {
            let duration = clip.duration_seconds();
            while self.elapsed_seconds >= duration {
                self.elapsed_seconds -= duration;
            }
            return None;
        }

        if !self.completed && self.elapsed_seconds >= clip.duration_seconds() {
            self.completed = true;
            return Some(clip.name);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animator() -> Animator {
        let mut animator = Animator::new();
        animator.add_clip("walk", &[0, 1, 2, 3], 8.0, true);
        animator.add_clip("die", &[4, 5, 6], 12.0, false);
        animator
    }

    #[test]
    fn completion_fires_exactly_once() {
        let mut animator = animator();
        animator.play("die");

        assert_eq!(animator.step(1.0), Some("die"));
        assert_eq!(animator.step(1.0), None);
        assert_eq!(animator.step(1.0), None);
    }

    #[test]
    fn looping_clip_never_completes() {
        let mut animator = animator();
        animator.play("walk");

        for _ in 0..100 {
            assert_eq!(animator.step(0.25), None);
        }
    }

    #[test]
    fn replay_resets_elapsed_and_rearms_completion() {
        let mut animator = animator();
        animator.play("die");
        assert_eq!(animator.step(1.0), Some("die"));

        animator.play("die");
        assert_eq!(animator.elapsed_seconds(), 0.0);
        assert_eq!(animator.step(1.0), Some("die"));
    }

    #[test]
    fn superseded_clip_does_not_report_completion() {
        let mut animator = animator();
        animator.play("die");
        animator.step(0.2);
        animator.play("walk");

        assert_eq!(animator.current(), Some("walk"));
        assert_eq!(animator.step(5.0), None);
    }

    #[test]
    fn unknown_clip_leaves_playback_unchanged() {
        let mut animator = animator();
        animator.play("walk");
        assert!(!animator.play("missing"));
        assert_eq!(animator.current(), Some("walk"));
    }

    #[test]
    fn step_without_clip_is_inert() {
        let mut animator = Animator::new();
        assert_eq!(animator.step(1.0), None);
        assert_eq!(animator.current(), None);
    }
}
