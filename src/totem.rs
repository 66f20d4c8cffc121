use std::fmt;

/// Name given to Pete on every board.
pub const PETE: &str = "X";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: isize,
    pub col: isize,
}

impl Position {
    pub fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }

    pub fn step(self, direction: Direction) -> Self {
        let (dr, dc) = direction.as_offset();
        Self::new(self.row + dr, self.col + dc)
    }
}

impl From<[isize; 2]> for Position {
    fn from([row, col]: [isize; 2]) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Left,
    Down,
    Right,
}

impl Direction {
    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Left => (0, -1),
            Direction::Down => (1, 0),
            Direction::Right => (0, 1),
        }
    }

    /// Direction of a single orthogonal move from `past` to `future`.
    ///
    /// Rows take precedence over columns; anything that is not down, up or
    /// right is reported as left.
    pub fn between(past: Position, future: Position) -> Self {
        if past.row < future.row {
            Direction::Down
        } else if past.row > future.row {
            Direction::Up
        } else if past.col < future.col {
            Direction::Right
        } else {
            Direction::Left
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Direction::Up => 'U',
            Direction::Left => 'L',
            Direction::Down => 'D',
            Direction::Right => 'R',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Goat,
    Pete,
}

/// A named piece on the board. Pete moves by the same rules as the goats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Totem {
    name: String,
    role: Role,
    position: Position,
}

impl Totem {
    pub fn goat(name: impl Into<String>, row: isize, col: isize) -> Self {
        Self {
            name: name.into(),
            role: Role::Goat,
            position: Position::new(row, col),
        }
    }

    pub fn pete(row: isize, col: isize) -> Self {
        Self {
            name: PETE.to_string(),
            role: Role::Pete,
            position: Position::new(row, col),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    /// Whether `self` can pull `pulled` given every totem on the `board`.
    ///
    /// Both totems must share a row or a column without already being
    /// adjacent, and no other totem may sit strictly between them.
    pub fn can_pull(&self, pulled: &Totem, board: &[Totem]) -> bool {
        let (a, b) = (self.position, pulled.position);

        let aligned = (a.row == b.row && (a.col - b.col).abs() > 1)
            || (a.col == b.col && (a.row - b.row).abs() > 1);
        if !aligned {
            return false;
        }

        let between = |x: isize, lo: isize, hi: isize| lo.min(hi) < x && x < lo.max(hi);

        board
            .iter()
            .filter(|other| other.name != self.name && other.name != pulled.name)
            .all(|other| {
                let o = other.position;
                if o.row == a.row && between(o.col, a.col, b.col) {
                    return false;
                }
                !(o.col == a.col && between(o.row, a.row, b.row))
            })
    }

    /// Cell where `pulled` comes to rest: next to `self`, on `pulled`'s side.
    ///
    /// # Panics
    ///
    /// If the totems share neither a row nor a column. Callers must check
    /// [`Totem::can_pull`] first.
    pub fn pull_destination(&self, pulled: &Totem) -> Position {
        let (a, b) = (self.position, pulled.position);

        let toward = if a.row == b.row {
            if a.col < b.col {
                Direction::Right
            } else {
                Direction::Left
            }
        } else if a.col == b.col {
            if a.row < b.row {
                Direction::Down
            } else {
                Direction::Up
            }
        } else {
            panic!("invalid move: {} tried to pull {}", self, pulled);
        };

        a.step(toward)
    }
}

impl fmt::Display for Totem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.name, self.position)
    }
}
