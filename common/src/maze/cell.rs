use strum::{Display, EnumIter};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum CellKind {
    Wall,
    Passage,
    Entrance,
    Exit,
    /// A passage that is part of the path currently being explored.
    OnPath,
}

impl CellKind {
    /// Maps an input character to a cell kind. Unrecognized characters are
    /// treated as passages.
    pub fn classify(ch: char) -> CellKind {
        match ch {
            '1' => CellKind::Wall,
            '0' => CellKind::Passage,
            'B' | 'b' => CellKind::Entrance,
            'E' | 'e' => CellKind::Exit,
            'P' | 'p' => CellKind::OnPath,
            _ => CellKind::Passage,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            CellKind::Wall => '1',
            CellKind::Passage => '0',
            CellKind::Entrance => 'B',
            CellKind::Exit => 'E',
            CellKind::OnPath => 'P',
        }
    }

    pub fn is_wall(self) -> bool {
        self == CellKind::Wall
    }
}
