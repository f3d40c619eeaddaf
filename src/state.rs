use egui::Pos2;

/// Whether a stroke is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum EditorState {
    #[default]
    Idle,
    Drawing {
        /// Canvas-local end of the last segment
        last: Pos2,
        /// Segments drawn so far in this stroke
        segments: usize,
    },
}

impl EditorState {
    pub fn begin(start: Pos2) -> Self {
        Self::Drawing {
            last: start,
            segments: 0,
        }
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing { .. })
    }

    pub fn last_point(&self) -> Option<Pos2> {
        match self {
            Self::Drawing { last, .. } => Some(*last),
            Self::Idle => None,
        }
    }
}
