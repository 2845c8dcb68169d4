use crate::grid::Grid;

/// Summary of one snapshot, as shown alongside a rendered frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

/// Ordered snapshots of a run: the initial field followed by one grid per
/// step. Every snapshot is an independent copy.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldHistory {
    frames: Vec<Grid>,
}

impl FieldHistory {
    pub(crate) fn from_frames(frames: Vec<Grid>) -> FieldHistory {
        FieldHistory { frames }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn get(&self, step: usize) -> Option<&Grid> {
        self.frames.get(step)
    }

    pub fn first(&self) -> Option<&Grid> {
        self.frames.first()
    }

    pub fn last(&self) -> Option<&Grid> {
        self.frames.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Grid> {
        self.frames.iter()
    }

    pub fn frames(&self) -> &[Grid] {
        &self.frames
    }

    pub fn into_frames(self) -> Vec<Grid> {
        self.frames
    }

    pub fn stats(&self, step: usize) -> Option<FrameStats> {
        self.frames.get(step).map(|g| FrameStats {
            min: g.min(),
            max: g.max(),
            mean: g.mean(),
        })
    }
}

impl<'a> IntoIterator for &'a FieldHistory {
    type Item = &'a Grid;
    type IntoIter = std::slice::Iter<'a, Grid>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}
