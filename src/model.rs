use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Proficiency tiers plus the two catch-all buckets, in display order.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum LevelName {
    N5,
    N4,
    N3,
    N2,
    N1,
    #[serde(rename = "Non-JLPT")]
    NonJlpt,
    #[serde(rename = "Unknown N-Level")]
    Unknown,
}

impl LevelName {
    pub const ALL: [LevelName; 7] = [
        LevelName::N5,
        LevelName::N4,
        LevelName::N3,
        LevelName::N2,
        LevelName::N1,
        LevelName::NonJlpt,
        LevelName::Unknown,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LevelName::N5 => "N5",
            LevelName::N4 => "N4",
            LevelName::N3 => "N3",
            LevelName::N2 => "N2",
            LevelName::N1 => "N1",
            LevelName::NonJlpt => "Non-JLPT",
            LevelName::Unknown => "Unknown N-Level",
        }
    }

    /// Name with spaces replaced, usable inside keys and ids.
    pub fn slug(self) -> &'static str {
        match self {
            LevelName::Unknown => "Unknown-N-Level",
            other => other.name(),
        }
    }

    /// False for the two catch-all buckets.
    pub fn is_curriculum(self) -> bool {
        !matches!(self, LevelName::NonJlpt | LevelName::Unknown)
    }
}

impl fmt::Display for LevelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLevel(pub String);

impl FromStr for LevelName {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        LevelName::ALL
            .into_iter()
            .find(|level| level.name() == trimmed || level.slug() == trimmed)
            .ok_or_else(|| UnknownLevel(trimmed.to_string()))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GrammarPoint {
    pub text: String,
    #[serde(default)]
    pub link: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    pub lesson_num: u32,
    #[serde(default)]
    pub grammar_points: Vec<GrammarPoint>,
}

/// Read-only catalogue: level → ordered lessons → ordered grammar points.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalogue {
    levels: BTreeMap<LevelName, Vec<Lesson>>,
}

impl Catalogue {
    pub fn from_levels(levels: impl IntoIterator<Item = (LevelName, Vec<Lesson>)>) -> Self {
        Self {
            levels: levels.into_iter().collect(),
        }
    }

    /// Levels in display order, skipping those without lessons.
    pub fn levels(&self) -> impl Iterator<Item = (LevelName, &[Lesson])> {
        self.levels
            .iter()
            .filter(|(_, lessons)| !lessons.is_empty())
            .map(|(level, lessons)| (*level, lessons.as_slice()))
    }

    pub fn level(&self, level: LevelName) -> Option<&[Lesson]> {
        self.levels.get(&level).map(Vec::as_slice)
    }

    pub fn lesson(&self, level: LevelName, lesson_num: u32) -> Option<&Lesson> {
        self.level(level)?
            .iter()
            .find(|lesson| lesson.lesson_num == lesson_num)
    }

    pub fn grammar_point_count(&self) -> usize {
        self.levels
            .values()
            .flatten()
            .map(|lesson| lesson.grammar_points.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.grammar_point_count() == 0
    }
}

/// Stable identifier of a grammar point, used as the progress store key.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[serde(transparent)]
pub struct GrammarPointKey(String);

impl GrammarPointKey {
    pub fn derive(level: LevelName, lesson_num: u32, index: usize) -> Self {
        Self(format!("{}_{}_{}", level.slug(), lesson_num, index))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GrammarPointKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A Lesson or a Level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum ContainerId {
    Level(LevelName),
    Lesson { level: LevelName, lesson_num: u32 },
}

impl ContainerId {
    pub fn label(&self) -> String {
        match self {
            ContainerId::Level(level) => format!("{level} Grammar"),
            ContainerId::Lesson { level, lesson_num } => format!("{level} Lesson {lesson_num}"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressRecord {
    #[serde(default)]
    pub bookmarked: bool,
    #[serde(default)]
    pub completed: bool,
}

impl ProgressRecord {
    pub const UNMARKED: ProgressRecord = ProgressRecord {
        bookmarked: false,
        completed: false,
    };
    pub const BOOKMARKED: ProgressRecord = ProgressRecord {
        bookmarked: true,
        completed: false,
    };
    pub const COMPLETED: ProgressRecord = ProgressRecord {
        bookmarked: false,
        completed: true,
    };

    pub fn is_unmarked(&self) -> bool {
        !self.bookmarked && !self.completed
    }

    /// Resolves a record with both flags set. The flag that was off in
    /// `previous` is the one the caller just turned on; with no history,
    /// completion wins.
    pub fn normalized(self, previous: ProgressRecord) -> ProgressRecord {
        if !(self.bookmarked && self.completed) {
            return self;
        }
        if previous.completed && !previous.bookmarked {
            ProgressRecord::BOOKMARKED
        } else {
            ProgressRecord::COMPLETED
        }
    }

    pub fn state(&self) -> PointState {
        if self.completed {
            PointState::Completed
        } else if self.bookmarked {
            PointState::Bookmarked
        } else {
            PointState::Unmarked
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointState {
    Unmarked,
    Bookmarked,
    Completed,
}

impl PointState {
    pub fn record(self) -> ProgressRecord {
        match self {
            PointState::Unmarked => ProgressRecord::UNMARKED,
            PointState::Bookmarked => ProgressRecord::BOOKMARKED,
            PointState::Completed => ProgressRecord::COMPLETED,
        }
    }

    pub fn toggle_bookmark(self) -> PointState {
        match self {
            PointState::Bookmarked => PointState::Unmarked,
            PointState::Unmarked | PointState::Completed => PointState::Bookmarked,
        }
    }

    pub fn toggle_complete(self) -> PointState {
        match self {
            PointState::Completed => PointState::Unmarked,
            PointState::Unmarked | PointState::Bookmarked => PointState::Completed,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    Tree,
    Statistics,
    LoadFailed,
}
