//! Data-driven victory rules.
//!
//! A [`RuleSet`] maps an ordered `(winner, loser)` pair of moves to the text
//! describing that victory. It is built once from a rule source and is
//! read-only afterwards, so a single instance can be shared between sessions.
//!
//! Rule sources are TOML by default, JSON when the path ends in `.json`, and
//! XML when it ends in `.xml`:
//!
//! ```toml
//! [[victory]]
//! choice  = "Rock"
//! against = "Scissors"
//! text    = "Rock crushes Scissors"
//! ```
//!
//! ```xml
//! <victories>
//!     <victory choice="Rock" against="Scissors">Rock crushes Scissors</victory>
//! </victories>
//! ```
//!
//! Every format goes through the same checks: both names must be known moves,
//! a move cannot beat itself, and the text must not be blank.
//!
//! Loading does not require the rules to form a complete tournament. Custom
//! rule files may leave pairs unresolved; use [`RuleSet::unresolved_pairs`]
//! and [`RuleSet::contradictory_pairs`] to inspect coverage.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::errors::RuleError;
use crate::moves::Move;

#[derive(Debug, Deserialize)]
struct RuleDocument {
    victory: Vec<VictoryEntry>,
}

#[derive(Debug, Deserialize)]
struct VictoryEntry {
    choice: String,
    against: String,
    text: String,
}

#[derive(Debug, Deserialize)]
struct XmlRuleDocument {
    #[serde(default)]
    victory: Vec<XmlVictoryEntry>,
}

#[derive(Debug, Deserialize)]
struct XmlVictoryEntry {
    #[serde(rename = "@choice")]
    choice: String,
    #[serde(rename = "@against")]
    against: String,
    #[serde(rename = "$text", default)]
    text: String,
}

impl From<XmlVictoryEntry> for VictoryEntry {
    fn from(e: XmlVictoryEntry) -> Self {
        Self {
            choice: e.choice,
            against: e.against,
            text: e.text,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    victories: BTreeMap<(Move, Move), String>,
}

impl RuleSet {
    /// Load a rule set from a file on disk.
    ///
    /// # Errors
    ///
    /// - [`RuleError::SourceNotFound`] if the file cannot be read
    /// - [`RuleError::SourceMalformed`] if it does not parse, an entry lacks a
    ///   field, a description is blank, or there are no entries at all
    /// - [`RuleError::UnknownMoveName`] if an entry names a move outside the
    ///   fixed enumeration
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use rpsls_engine::ruleset::RuleSet;
    ///
    /// let rules = RuleSet::load("victories.toml").expect("rules");
    /// assert!(rules.is_tournament());
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, RuleError> {
        let path = path.as_ref();
        let origin = path.display().to_string();
        let text = fs::read_to_string(path).map_err(|e| RuleError::SourceNotFound {
            path: origin.clone(),
            reason: e.to_string(),
        })?;
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Self::from_json_str(&text, &origin),
            Some("xml") => Self::from_xml_str(&text, &origin),
            _ => Self::from_toml_str(&text, &origin),
        }
    }

    /// Parse a TOML rule document. `origin` only labels error messages.
    pub fn from_toml_str(text: &str, origin: &str) -> Result<Self, RuleError> {
        let doc: RuleDocument =
            toml::from_str(text).map_err(|e| malformed(origin, e.to_string()))?;
        Self::from_document(doc, origin)
    }

    /// Parse a JSON rule document. `origin` only labels error messages.
    pub fn from_json_str(text: &str, origin: &str) -> Result<Self, RuleError> {
        let doc: RuleDocument =
            serde_json::from_str(text).map_err(|e| malformed(origin, e.to_string()))?;
        Self::from_document(doc, origin)
    }

    /// Parse an XML rule document of `<victory choice=".." against="..">`
    /// elements. `origin` only labels error messages.
    pub fn from_xml_str(text: &str, origin: &str) -> Result<Self, RuleError> {
        let doc: XmlRuleDocument =
            quick_xml::de::from_str(text).map_err(|e| malformed(origin, e.to_string()))?;
        let doc = RuleDocument {
            victory: doc.victory.into_iter().map(VictoryEntry::from).collect(),
        };
        Self::from_document(doc, origin)
    }

    /// Build a rule set directly from `(winner, loser, description)` triples.
    ///
    /// Applies the same checks as file loading: a move beating itself or a
    /// blank description is [`RuleError::SourceMalformed`]. Later duplicates
    /// win. An empty iterator gives an empty rule set.
    ///
    /// ```
    /// use rpsls_engine::moves::Move;
    /// use rpsls_engine::ruleset::RuleSet;
    ///
    /// let rules = RuleSet::from_rules([(Move::Rock, Move::Scissors, "Rock crushes Scissors")])?;
    /// assert!(rules.beats(Move::Rock, Move::Scissors));
    /// assert!(!rules.beats(Move::Scissors, Move::Rock));
    ///
    /// assert!(RuleSet::from_rules([(Move::Rock, Move::Rock, "Rock crushes Rock")]).is_err());
    /// # Ok::<(), rpsls_engine::errors::RuleError>(())
    /// ```
    pub fn from_rules<I, S>(rules: I) -> Result<Self, RuleError>
    where
        I: IntoIterator<Item = (Move, Move, S)>,
        S: Into<String>,
    {
        let mut victories = BTreeMap::new();
        for (i, (winner, loser, text)) in rules.into_iter().enumerate() {
            insert_victory(&mut victories, i, winner, loser, text.into(), "rules")?;
        }
        Ok(Self { victories })
    }

    fn from_document(doc: RuleDocument, origin: &str) -> Result<Self, RuleError> {
        if doc.victory.is_empty() {
            return Err(malformed(origin, "no victory entries".to_string()));
        }
        let mut victories = BTreeMap::new();
        for (i, entry) in doc.victory.into_iter().enumerate() {
            let winner = resolve(&entry.choice)?;
            let loser = resolve(&entry.against)?;
            insert_victory(&mut victories, i, winner, loser, entry.text, origin)?;
        }
        Ok(Self { victories })
    }

    /// Description of `winner` beating `loser`, if such a rule exists.
    pub fn describe(&self, winner: Move, loser: Move) -> Option<&str> {
        self.victories.get(&(winner, loser)).map(String::as_str)
    }

    pub fn beats(&self, winner: Move, loser: Move) -> bool {
        self.victories.contains_key(&(winner, loser))
    }

    /// Every move with a recorded victory over `target`, in ordinal order.
    pub fn winners_against(&self, target: Move) -> Vec<Move> {
        self.victories
            .keys()
            .filter(|(_, loser)| *loser == target)
            .map(|(winner, _)| *winner)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.victories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.victories.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Move, Move, &str)> {
        self.victories
            .iter()
            .map(|(&(winner, loser), text)| (winner, loser, text.as_str()))
    }

    /// Distinct pairs with no rule in either direction, lower ordinal first.
    pub fn unresolved_pairs(&self) -> Vec<(Move, Move)> {
        distinct_pairs()
            .filter(|&(a, b)| !self.beats(a, b) && !self.beats(b, a))
            .collect()
    }

    /// Distinct pairs with rules in both directions, lower ordinal first.
    pub fn contradictory_pairs(&self) -> Vec<(Move, Move)> {
        distinct_pairs()
            .filter(|&(a, b)| self.beats(a, b) && self.beats(b, a))
            .collect()
    }

    /// True when every distinct pair has exactly one winning direction.
    pub fn is_tournament(&self) -> bool {
        self.unresolved_pairs().is_empty() && self.contradictory_pairs().is_empty()
    }
}

fn distinct_pairs() -> impl Iterator<Item = (Move, Move)> {
    Move::ALL
        .into_iter()
        .flat_map(|a| Move::ALL.into_iter().filter(move |&b| a < b).map(move |b| (a, b)))
}

fn insert_victory(
    victories: &mut BTreeMap<(Move, Move), String>,
    index: usize,
    winner: Move,
    loser: Move,
    text: String,
    origin: &str,
) -> Result<(), RuleError> {
    if winner == loser {
        return Err(malformed(
            origin,
            format!("victory #{}: {} cannot beat itself", index + 1, winner),
        ));
    }
    let text = text.trim();
    if text.is_empty() {
        return Err(malformed(
            origin,
            format!("victory #{}: text is empty", index + 1),
        ));
    }
    victories.insert((winner, loser), text.to_string());
    Ok(())
}

fn resolve(name: &str) -> Result<Move, RuleError> {
    name.parse().map_err(|_| RuleError::UnknownMoveName {
        name: name.to_string(),
    })
}

fn malformed(origin: &str, reason: String) -> RuleError {
    RuleError::SourceMalformed {
        origin: origin.to_string(),
        reason,
    }
}
