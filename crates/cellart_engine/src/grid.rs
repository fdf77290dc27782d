use std::collections::{BTreeMap, HashMap};

use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};

use crate::{find_matching_cells, Cell, MatchCriteria, Position, Rectangle, Result, Size};

/// Plain coordinate → cell map exchanged with the frame store and the undo stack.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GridSnapshot {
    cells: HashMap<Position, Cell>,
}

impl GridSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, pos: impl Into<Position>) -> Option<&Cell> {
        self.cells.get(&pos.into())
    }

    pub fn insert(&mut self, pos: impl Into<Position>, cell: Cell) {
        self.cells.insert(pos.into(), cell);
    }

    pub fn remove(&mut self, pos: impl Into<Position>) -> Option<Cell> {
        self.cells.remove(&pos.into())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Position, &Cell)> {
        self.cells.iter()
    }

    /// Entries in row major order.
    pub fn sorted(&self) -> Vec<(Position, Cell)> {
        let mut entries: Vec<_> = self.cells.iter().map(|(p, c)| (*p, *c)).collect();
        entries.sort_by_key(|(p, _)| *p);
        entries
    }

    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// # Errors
    ///
    /// Returns an error on malformed JSON, coordinate keys or cells.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl FromIterator<(Position, Cell)> for GridSnapshot {
    fn from_iter<T: IntoIterator<Item = (Position, Cell)>>(iter: T) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for GridSnapshot {
    type Item = (Position, Cell);
    type IntoIter = std::collections::hash_map::IntoIter<Position, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

impl Serialize for GridSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let sorted: BTreeMap<Position, &Cell> = self.cells.iter().map(|(p, c)| (*p, c)).collect();
        serializer.collect_map(sorted.into_iter().map(|(p, c)| (p.to_key(), c)))
    }
}

impl<'de> Deserialize<'de> for GridSnapshot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = HashMap::<String, Cell>::deserialize(deserializer)?;
        let mut cells = HashMap::with_capacity(raw.len());
        for (key, cell) in raw {
            let pos = Position::from_key(&key).map_err(D::Error::custom)?;
            cells.insert(pos, cell);
        }
        Ok(Self { cells })
    }
}

/// Sparse cell storage for one frame.
///
/// Only non blank cells are stored. Every write outside of `0..width` x `0..height`
/// is ignored.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Grid {
    size: Size,
    cells: HashMap<Position, Cell>,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            size: Size::new(width.max(0), height.max(0)),
            cells: HashMap::new(),
        }
    }

    pub fn width(&self) -> i32 {
        self.size.width
    }

    pub fn height(&self) -> i32 {
        self.size.height
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn rectangle(&self) -> Rectangle {
        Rectangle::from_min_size(Position::ZERO, self.size)
    }

    pub fn is_valid(&self, pos: impl Into<Position>) -> bool {
        let pos = pos.into();
        pos.x >= 0 && pos.y >= 0 && pos.x < self.size.width && pos.y < self.size.height
    }

    /// The cell at `pos`; absent and out of bounds cells read as the default cell.
    pub fn get_cell(&self, pos: impl Into<Position>) -> Cell {
        self.cells.get(&pos.into()).copied().unwrap_or_default()
    }

    /// The stored cell at `pos`, `None` for blank cells.
    pub fn cell(&self, pos: impl Into<Position>) -> Option<&Cell> {
        self.cells.get(&pos.into())
    }

    /// Writes `cell`. Blank cells are removed from storage, out of bounds writes are ignored.
    /// Returns whether the stored content changed.
    pub fn set_cell(&mut self, pos: impl Into<Position>, cell: Cell) -> bool {
        let pos = pos.into();
        if !self.is_valid(pos) {
            return false;
        }
        if cell.is_blank() {
            return self.cells.remove(&pos).is_some();
        }
        self.cells.insert(pos, cell) != Some(cell)
    }

    pub fn clear_cell(&mut self, pos: impl Into<Position>) -> bool {
        self.cells.remove(&pos.into()).is_some()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Number of stored (non blank) cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> impl Iterator<Item = (&Position, &Cell)> {
        self.cells.iter()
    }

    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot { cells: self.cells.clone() }
    }

    /// Replaces the whole content. Blank and out of bounds entries are dropped.
    pub fn set_canvas_data(&mut self, snapshot: GridSnapshot) {
        let size = self.size;
        let before = snapshot.len();
        self.cells = snapshot
            .into_iter()
            .filter(|(pos, cell)| pos.x >= 0 && pos.y >= 0 && pos.x < size.width && pos.y < size.height && !cell.is_blank())
            .collect();
        if self.cells.len() != before {
            log::debug!("set_canvas_data dropped {} blank or out of bounds cells", before - self.cells.len());
        }
    }

    /// Writes `cell` to every cell matching the cell at `pos` under `criteria`.
    /// Returns the number of matched cells.
    pub fn fill_area(&mut self, pos: impl Into<Position>, cell: Cell, contiguous: bool, criteria: MatchCriteria) -> usize {
        let matched = find_matching_cells(self, pos.into(), contiguous, criteria);
        for p in &matched {
            self.set_cell(*p, cell);
        }
        matched.len()
    }

    /// Plain text rendering of `rect`, one line per row with trailing blanks trimmed.
    pub fn to_text(&self, rect: Rectangle) -> String {
        let mut lines = Vec::new();
        for y in rect.y_range() {
            let line: String = rect.x_range().map(|x| self.get_cell((x, y)).ch).collect();
            lines.push(line.trim_end().to_string());
        }
        lines.join("\n")
    }
}
