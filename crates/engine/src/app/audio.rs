/// One-shot sound requests keyed by asset key. The mixer only queues;
/// the loop runner drains the queue each frame (decoding and output are
/// a backend concern, not simulated here).
#[derive(Debug, Default)]
pub struct AudioMixer {
    queued: Vec<&'static str>,
}

impl AudioMixer {
    pub fn play(&mut self, key: &'static str) {
        self.queued.push(key);
    }

    pub fn queued(&self) -> &[&'static str] {
        &self.queued
    }

    pub fn take_queued(&mut self) -> Vec<&'static str> {
        std::mem::take(&mut self.queued)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queued_requests_preserve_order() {
        let mut mixer = AudioMixer::default();
        mixer.play("sfx:jump");
        mixer.play("sfx:coin");

        assert_eq!(mixer.queued(), &["sfx:jump", "sfx:coin"]);
    }

    #[test]
    fn take_queued_drains_the_queue() {
        let mut mixer = AudioMixer::default();
        mixer.play("sfx:stomp");

        assert_eq!(mixer.take_queued(), vec!["sfx:stomp"]);
        assert!(mixer.queued().is_empty());
    }
}
