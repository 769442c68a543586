use crate::core::data::iteration_plane::IterationPlane;

/// One rendered step of a zoom.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    index: u32,
    scale: f64,
    plane: IterationPlane,
}

impl Frame {
    #[must_use]
    pub fn new(index: u32, scale: f64, plane: IterationPlane) -> Self {
        Self { index, scale, plane }
    }

    #[must_use]
    pub fn index(&self) -> u32 {
        self.index
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn plane(&self) -> &IterationPlane {
        &self.plane
    }

    #[must_use]
    pub fn into_plane(self) -> IterationPlane {
        self.plane
    }
}

/// Frames of a zoom in rendering order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrameSequence {
    frames: Vec<Frame>,
}

impl FrameSequence {
    #[must_use]
    pub fn new(frames: Vec<Frame>) -> Self {
        Self { frames }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn scales(&self) -> impl Iterator<Item = f64> + '_ {
        self.frames.iter().map(Frame::scale)
    }
}

impl IntoIterator for FrameSequence {
    type Item = Frame;
    type IntoIter = std::vec::IntoIter<Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.into_iter()
    }
}
