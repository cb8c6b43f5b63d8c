// src/view_models.rs

use crate::engine::Aggregates;
use crate::model::{ContainerId, GrammarPointKey, LevelName, PointState};
use crate::stats::LevelStats;

#[derive(Clone, Debug, PartialEq)]
pub struct PointRow {
    pub key: GrammarPointKey,
    pub number: usize, // 1-based position in the lesson
    pub text: String,
    pub link: String,
    pub state: PointState,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LessonInfo {
    pub id: ContainerId,
    pub lesson_num: u32,
    pub aggregates: Aggregates,
    pub completed: usize,
    pub points: Vec<PointRow>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LevelInfo {
    pub id: ContainerId,
    pub level: LevelName,
    pub aggregates: Aggregates,
    pub stats: LevelStats,
    pub lessons: Vec<LessonInfo>,
}

fn badges(aggregates: &Aggregates) -> String {
    let mut out = String::new();
    if aggregates.all_complete {
        out.push_str(" ✅");
    }
    if aggregates.has_bookmarked {
        out.push_str(" 🔖");
    }
    out
}

impl PointRow {
    pub fn number_label(&self) -> String {
        format!("{}.", self.number)
    }
}

impl LessonInfo {
    pub fn total(&self) -> usize {
        self.points.len()
    }

    pub fn label(&self) -> String {
        format!(
            "Lesson {}{} ({}/{})",
            self.lesson_num,
            badges(&self.aggregates),
            self.completed,
            self.total()
        )
    }
}

impl LevelInfo {
    pub fn title(&self) -> String {
        format!("{} Grammar", self.level)
    }

    pub fn label(&self) -> String {
        format!(
            "{}{} ({}/{})",
            self.title(),
            badges(&self.aggregates),
            self.stats.completed,
            self.stats.grammar_points
        )
    }
}
