//! Reorder intents produced by the admin UI

/// Single-step nudge direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward the start of the global order
    Up,
    /// Toward the end of the global order
    Down,
}

/// What the user asked for, expressed in global terms
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReorderIntent {
    /// Move one entity a single position
    Nudge { id: String, direction: Direction },

    /// New relative order of a contiguous window starting at `window_start`
    Drag { window_start: usize, ids: Vec<String> },

    /// Move one entity to a 0-based global index. Out-of-range targets,
    /// negative ones included, are clamped.
    Jump { id: String, target: i64 },
}

impl ReorderIntent {
    pub fn nudge(id: impl Into<String>, direction: Direction) -> Self {
        Self::Nudge {
            id: id.into(),
            direction,
        }
    }

    pub fn jump(id: impl Into<String>, target: i64) -> Self {
        Self::Jump {
            id: id.into(),
            target,
        }
    }

    /// Jump to a 1-based position as typed into the position input
    pub fn jump_to_position(id: impl Into<String>, position: i64) -> Self {
        Self::jump(id, position.saturating_sub(1))
    }
}
