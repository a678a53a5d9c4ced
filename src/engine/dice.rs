//! Die kinds and their face counts.

use std::fmt;

/// One of the six supported polyhedral dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DieKind {
    D4,
    D6,
    D8,
    D10,
    D12,
    D20,
}

impl DieKind {
    /// All die kinds in display order (top-left to bottom-right on the grid).
    pub const ALL: [DieKind; 6] = [
        DieKind::D4,
        DieKind::D6,
        DieKind::D8,
        DieKind::D10,
        DieKind::D12,
        DieKind::D20,
    ];

    /// Number of faces on this die.
    pub fn faces(self) -> u16 {
        match self {
            DieKind::D4 => 4,
            DieKind::D6 => 6,
            DieKind::D8 => 8,
            DieKind::D10 => 10,
            DieKind::D12 => 12,
            DieKind::D20 => 20,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DieKind::D4 => "D4",
            DieKind::D6 => "D6",
            DieKind::D8 => "D8",
            DieKind::D10 => "D10",
            DieKind::D12 => "D12",
            DieKind::D20 => "D20",
        }
    }

    /// Parse a label like `"d20"` or `"D20"`.
    pub fn parse(s: &str) -> Option<DieKind> {
        match s.to_ascii_lowercase().as_str() {
            "d4" => Some(DieKind::D4),
            "d6" => Some(DieKind::D6),
            "d8" => Some(DieKind::D8),
            "d10" => Some(DieKind::D10),
            "d12" => Some(DieKind::D12),
            "d20" => Some(DieKind::D20),
            _ => None,
        }
    }
}

impl fmt::Display for DieKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
