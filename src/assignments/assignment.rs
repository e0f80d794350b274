use crate::{DecisionLevel, Sign};

/// The value held by one variable slot, and the frame that owns it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Assignment {
    sign: Sign,
    frame: Option<DecisionLevel>,
}

impl Assignment {
    /// A permanent assignment made while no decision frame was live.
    pub fn base(sign: Sign) -> Self {
        Self { sign, frame: None }
    }

    /// An assignment released when decision frame `level` is popped.
    pub fn owned(sign: Sign, level: DecisionLevel) -> Self {
        Self {
            sign,
            frame: Some(level),
        }
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Depth of the owning frame, `None` at the base level.
    pub fn frame(&self) -> Option<DecisionLevel> {
        self.frame
    }

    pub fn is_permanent(&self) -> bool {
        self.frame.is_none()
    }
}
