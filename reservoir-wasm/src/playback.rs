/// Frame cursor over a history of `len` frames.
///
/// Play/pause timing belongs to the host; it only calls `next_frame` per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playback {
    len: usize,
    current: usize,
}

impl Playback {
    pub fn new(len: usize) -> Playback {
        Playback { len, current: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Advances one frame, wrapping to 0 after the last.
    pub fn next_frame(&mut self) -> usize {
        self.current = if self.current + 1 < self.len {
            self.current + 1
        } else {
            0
        };
        self.current
    }

    /// Moves to `step`, clamped to the last frame.
    pub fn seek(&mut self, step: usize) -> usize {
        self.current = step.min(self.len.saturating_sub(1));
        self.current
    }

    pub fn reset(&mut self) {
        self.current = 0;
    }

    /// New history loaded: cursor goes back to the first frame.
    pub fn reload(&mut self, len: usize) {
        self.len = len;
        self.current = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_frame_wraps() {
        let mut p = Playback::new(3);
        assert_eq!(p.next_frame(), 1);
        assert_eq!(p.next_frame(), 2);
        assert_eq!(p.next_frame(), 0);
    }

    #[test]
    fn seek_clamps_and_reset_rewinds() {
        let mut p = Playback::new(201);
        assert_eq!(p.seek(50), 50);
        assert_eq!(p.seek(10_000), 200);
        p.reset();
        assert_eq!(p.current(), 0);
    }

    #[test]
    fn reload_rewinds_to_first_frame() {
        let mut p = Playback::new(10);
        p.seek(7);
        p.reload(4);
        assert_eq!((p.len(), p.current()), (4, 0));
    }

    #[test]
    fn single_frame_stays_put() {
        let mut p = Playback::new(1);
        assert_eq!(p.next_frame(), 0);
        assert_eq!(p.seek(3), 0);
    }
}
