// src/data.rs

use crate::error::CatalogueError;
use crate::model::{Catalogue, Lesson, LevelName};
use log::{info, warn};
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

const EMBEDDED_CATALOGUE: &str = include_str!("data/grammar_catalogue.json");

#[derive(Deserialize)]
struct RawCatalogue(BTreeMap<String, Vec<Lesson>>);

/// Sample catalogue compiled into the binary, used when no file is configured.
pub fn read_catalogue_embedded() -> Result<Catalogue, CatalogueError> {
    parse_catalogue(EMBEDDED_CATALOGUE)
}

pub fn read_catalogue_file(path: &Path) -> Result<Catalogue, CatalogueError> {
    let json = std::fs::read_to_string(path).map_err(|source| CatalogueError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let catalogue = parse_catalogue(&json)?;
    info!(
        "loaded catalogue from {}: {} grammar points",
        path.display(),
        catalogue.grammar_point_count()
    );
    Ok(catalogue)
}

/// Parses the `{level: [lesson, ..]}` JSON layout.
///
/// Unknown level names, a level given twice (by name and by slug) and
/// repeated lesson numbers are dropped with a warning; everything else is taken as given.
pub fn parse_catalogue(json: &str) -> Result<Catalogue, CatalogueError> {
    let RawCatalogue(raw) =
        serde_json::from_str(json).map_err(|source| CatalogueError::Parse { source })?;

    let mut levels = Vec::with_capacity(raw.len());
    let mut seen_levels = HashSet::new();
    for (name, lessons) in raw {
        let level = match name.parse::<LevelName>() {
            Ok(level) => level,
            Err(_) => {
                warn!("skipping unknown level {name:?} ({} lessons)", lessons.len());
                continue;
            }
        };
        // A level may be spelled by name or by slug; the first spelling wins.
        if !seen_levels.insert(level) {
            warn!("skipping {name:?}: level {level} is already defined");
            continue;
        }

        let mut seen = HashSet::new();
        let lessons: Vec<Lesson> = lessons
            .into_iter()
            .filter(|lesson| {
                let fresh = seen.insert(lesson.lesson_num);
                if !fresh {
                    warn!("skipping duplicate lesson {} in {level}", lesson.lesson_num);
                }
                fresh
            })
            .collect();
        levels.push((level, lessons));
    }

    Ok(Catalogue::from_levels(levels))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalogue_parses() {
        let catalogue = read_catalogue_embedded().unwrap();
        assert!(!catalogue.is_empty());
        let first = catalogue.levels().next().map(|(level, _)| level);
        assert_eq!(first, Some(LevelName::N5));
    }

    #[test]
    fn unknown_levels_and_duplicate_lessons_are_dropped() {
        let json = r#"{
            "N6": [{"lesson_num": 1, "grammar_points": [{"text": "x", "link": ""}]}],
            "Unknown N-Level": [
                {"lesson_num": 4, "grammar_points": [{"text": "a"}]},
                {"lesson_num": 4, "grammar_points": [{"text": "b"}]},
                {"lesson_num": 5, "grammar_points": []}
            ]
        }"#;
        let catalogue = parse_catalogue(json).unwrap();
        let levels: Vec<_> = catalogue.levels().collect();
        assert_eq!(levels.len(), 1);
        let (level, lessons) = levels[0];
        assert_eq!(level, LevelName::Unknown);
        assert_eq!(lessons.len(), 2);
        assert_eq!(lessons[0].grammar_points[0].text, "a");
        assert_eq!(lessons[0].grammar_points[0].link, "");
    }

    #[test]
    fn level_spelled_twice_keeps_first_spelling() {
        let json = r#"{
            "Unknown-N-Level": [{"lesson_num": 2, "grammar_points": [{"text": "slug"}]}],
            "Unknown N-Level": [{"lesson_num": 1, "grammar_points": [{"text": "name"}]}]
        }"#;
        let catalogue = parse_catalogue(json).unwrap();
        let lessons = catalogue.level(LevelName::Unknown).unwrap();
        assert_eq!(lessons.len(), 1);
        assert_eq!(lessons[0].lesson_num, 1);
        assert_eq!(lessons[0].grammar_points[0].text, "name");
        assert_eq!(catalogue.grammar_point_count(), 1);
    }

    #[test]
    fn lesson_order_is_preserved() {
        let json = r#"{"N2": [
            {"lesson_num": 9, "grammar_points": []},
            {"lesson_num": 2, "grammar_points": []}
        ]}"#;
        let catalogue = parse_catalogue(json).unwrap();
        let nums: Vec<u32> = catalogue
            .level(LevelName::N2)
            .unwrap()
            .iter()
            .map(|lesson| lesson.lesson_num)
            .collect();
        assert_eq!(nums, vec![9, 2]);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            parse_catalogue("{\"N5\": 3"),
            Err(CatalogueError::Parse { .. })
        ));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = read_catalogue_file(Path::new("/nonexistent/grammar.json")).unwrap_err();
        assert!(matches!(err, CatalogueError::Read { .. }));
    }
}
