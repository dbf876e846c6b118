// Planning table: the tab-separated list of articles to write.
//
// The table is loaded once, completions are applied to the in-memory copy,
// and `PlanningTable::save` writes the whole file back in one go. Lines the
// parser does not understand (header, blank lines, short rows) are kept
// verbatim so a save never disturbs them.

use std::fs;
use std::path::Path;

use crate::error::PlanningError;
use crate::models::{ArticleTask, VolumeTier};

pub const DONE_MARK: &str = "✅";

const MIN_COLUMNS: usize = 8;
const SLUG_COLUMN: usize = 7;
const DONE_COLUMN: usize = 8;

#[derive(Debug, Clone)]
pub struct PlanningTable {
    lines: Vec<String>,
    tasks: Vec<ArticleTask>,
    /// Line index of each entry in `tasks`
    task_lines: Vec<usize>,
    dirty: bool,
}

impl PlanningTable {
    pub fn load(path: &Path) -> Result<Self, PlanningError> {
        let content = fs::read_to_string(path).map_err(|source| PlanningError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let table = Self::parse(&content);
        tracing::debug!(
            path = %path.display(),
            tasks = table.tasks.len(),
            "Loaded planning table"
        );
        Ok(table)
    }

    pub fn parse(content: &str) -> Self {
        let lines: Vec<String> = content.split('\n').map(str::to_string).collect();
        let mut tasks = Vec::new();
        let mut task_lines = Vec::new();
        let mut seen_header = false;

        for (index, line) in lines.iter().enumerate() {
            let (body, _) = split_line_ending(line);
            if body.trim().is_empty() {
                continue;
            }
            if !seen_header {
                seen_header = true;
                continue;
            }

            let columns: Vec<&str> = body.split('\t').collect();
            if columns.len() < MIN_COLUMNS {
                tracing::debug!(line = index + 1, "Skipping short planning row");
                continue;
            }

            tasks.push(ArticleTask {
                pillar_category: columns[0].to_string(),
                title_primary: columns[1].to_string(),
                title_secondary: columns[2].to_string(),
                keyword_primary: columns[3].to_string(),
                keyword_secondary: columns[4].to_string(),
                volume: VolumeTier::parse(columns[5]),
                intent: columns[6].to_string(),
                slug: columns[SLUG_COLUMN].to_string(),
                is_complete: columns.get(DONE_COLUMN) == Some(&DONE_MARK),
            });
            task_lines.push(index);
        }

        Self {
            lines,
            tasks,
            task_lines,
            dirty: false,
        }
    }

    pub fn tasks(&self) -> &[ArticleTask] {
        &self.tasks
    }

    pub fn find(&self, slug: &str) -> Option<&ArticleTask> {
        self.tasks.iter().find(|task| task.slug == slug)
    }

    /// Whether there are completions not yet written to disk
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Set the completion column of the row for `slug`.
    ///
    /// The row whose slug column equals `slug` wins; otherwise the first line
    /// that contains `slug` and has enough columns is used. Marking a row that
    /// is already complete changes nothing.
    pub fn mark_complete(&mut self, slug: &str) -> Result<(), PlanningError> {
        let line_index = self
            .tasks
            .iter()
            .position(|task| task.slug == slug)
            .map(|i| self.task_lines[i])
            .or_else(|| {
                self.lines.iter().position(|line| {
                    let (body, _) = split_line_ending(line);
                    body.contains(slug) && body.split('\t').count() >= MIN_COLUMNS
                })
            })
            .ok_or_else(|| PlanningError::TaskNotFound(slug.to_string()))?;

        let (body, ending) = split_line_ending(&self.lines[line_index]);
        let mut columns: Vec<&str> = body.split('\t').collect();
        if columns.len() > DONE_COLUMN {
            columns[DONE_COLUMN] = DONE_MARK;
        } else {
            columns.push(DONE_MARK);
        }
        let updated = format!("{}{}", columns.join("\t"), ending);

        if updated != self.lines[line_index] {
            self.lines[line_index] = updated;
            self.dirty = true;
        }

        if let Some(pos) = self.task_lines.iter().position(|&l| l == line_index) {
            self.tasks[pos].is_complete = true;
        }

        Ok(())
    }

    pub fn render(&self) -> String {
        self.lines.join("\n")
    }

    /// Write the table back to `path` and clear the dirty flag
    pub fn save(&mut self, path: &Path) -> Result<(), PlanningError> {
        fs::write(path, self.render()).map_err(|source| PlanningError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        self.dirty = false;
        tracing::debug!(path = %path.display(), "Saved planning table");
        Ok(())
    }
}

fn split_line_ending(line: &str) -> (&str, &str) {
    match line.strip_suffix('\r') {
        Some(body) => (body, "\r"),
        None => (line, ""),
    }
}
