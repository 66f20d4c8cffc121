//! JSON game descriptions.
//!
//! ```json
//! { "goats": { "A": [0, 2], "B": [2, 0] }, "pete": [4, 0], "target": [1, 2] }
//! ```
//!
//! Goats keep the order in which they appear in the file, which fixes the
//! order the search tries pulls in.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use log::debug;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;

use crate::error::LoadError;
use crate::game::Game;
use crate::totem::{Position, Totem, PETE};

#[derive(Debug, Clone, Deserialize)]
pub struct GameDescription {
    /// Every goat entry as written, repeated names included.
    #[serde(deserialize_with = "map_entries")]
    pub goats: Vec<(String, [isize; 2])>,
    pub pete: [isize; 2],
    pub target: [isize; 2],
}

impl GameDescription {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Validates the description and builds a game ready to search.
    pub fn into_game(self) -> Result<Game, LoadError> {
        if self.goats.is_empty() {
            return Err(LoadError::NoGoats);
        }

        let mut named: IndexMap<String, [isize; 2]> = IndexMap::with_capacity(self.goats.len());
        for (name, position) in self.goats {
            if name == PETE || named.contains_key(&name) {
                return Err(LoadError::DuplicateName { name });
            }
            named.insert(name, position);
        }

        let goats: Vec<Totem> = named
            .into_iter()
            .map(|(name, [row, col])| Totem::goat(name, row, col))
            .collect();
        let pete = Totem::pete(self.pete[0], self.pete[1]);

        check_overlaps(&goats, &pete)?;

        Ok(Game::new(goats, pete, Position::from(self.target)))
    }
}

/// Reads a JSON object as its key/value pairs in file order. Unlike a map
/// type, repeated keys are all kept so they can be reported.
fn map_entries<'de, D>(deserializer: D) -> Result<Vec<(String, [isize; 2])>, D::Error>
where
    D: Deserializer<'de>,
{
    struct EntriesVisitor;

    impl<'de> Visitor<'de> for EntriesVisitor {
        type Value = Vec<(String, [isize; 2])>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of goat names to [row, col]")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(entry) = map.next_entry()? {
                entries.push(entry);
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(EntriesVisitor)
}

fn check_overlaps(goats: &[Totem], pete: &Totem) -> Result<(), LoadError> {
    let mut occupied: HashMap<Position, &str> = HashMap::new();
    for totem in goats.iter().chain(std::iter::once(pete)) {
        if let Some(first) = occupied.insert(totem.position(), totem.name()) {
            let Position { row, col } = totem.position();
            return Err(LoadError::Overlap {
                first: first.to_string(),
                second: totem.name().to_string(),
                row,
                col,
            });
        }
    }
    Ok(())
}

pub fn load_game(path: impl AsRef<Path>) -> Result<Game, LoadError> {
    let path = path.as_ref();
    debug!("Loading game model {}", path.display());

    let json = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let description = GameDescription::from_json(&json).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    description.into_game()
}
