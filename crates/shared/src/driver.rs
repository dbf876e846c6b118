// Batch driver: select pending rows, generate their articles, and record
// completions.
//
// Each task moves `pending -> (skipped | generated) -> marked complete`. A
// task that fails anywhere stays pending in the table and is retried by the
// next run. Completions are applied to the in-memory table and flushed once.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Serialize;
use std::path::PathBuf;

use crate::article::assemble;
use crate::config::Config;
use crate::io;
use crate::links::plan_internal_links;
use crate::models::ArticleTask;
use crate::planning::PlanningTable;
use crate::research::ResearchBundle;
use crate::selector::select_pending;

pub const DEFAULT_BATCH_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TaskOutcome {
    /// Both documents were already on disk
    Skipped,
    /// Documents written at these paths
    Generated(Vec<PathBuf>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskFailure {
    pub slug: String,
    pub error: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    /// Slugs picked by the selector, in processing order
    pub selected: Vec<String>,
    pub generated: Vec<String>,
    pub skipped: Vec<String>,
    pub failed: Vec<TaskFailure>,
}

impl BatchReport {
    pub fn completed(&self) -> usize {
        self.generated.len() + self.skipped.len()
    }
}

/// Load the planning table, run one batch, and flush completions
pub fn run(config: &Config, batch_size: usize, date: NaiveDate) -> Result<BatchReport> {
    let planning_file = config.planning_file();
    let mut table = PlanningTable::load(&planning_file)
        .context("Could not load the planning table")?;

    let report = run_batch(&mut table, config, batch_size, date);

    if table.is_dirty() {
        table
            .save(&planning_file)
            .context("Failed to record completed articles")?;
    }

    Ok(report)
}

/// Process up to `batch_size` pending tasks against an in-memory table.
///
/// Per-task failures are logged and reported; they never stop the batch.
pub fn run_batch(
    table: &mut PlanningTable,
    config: &Config,
    batch_size: usize,
    date: NaiveDate,
) -> BatchReport {
    let selected: Vec<ArticleTask> =
        select_pending(table.tasks(), config.variant.priority_topics(), batch_size)
            .into_iter()
            .cloned()
            .collect();

    let mut report = BatchReport {
        selected: selected.iter().map(|t| t.slug.clone()).collect(),
        ..BatchReport::default()
    };

    for task in &selected {
        tracing::info!(slug = %task.slug, "Processing article");

        let outcome = process_task(task, table.tasks(), config, date).and_then(|outcome| {
            table
                .mark_complete(&task.slug)
                .with_context(|| format!("Failed to mark {} complete", task.slug))?;
            Ok(outcome)
        });

        match outcome {
            Ok(TaskOutcome::Skipped) => {
                tracing::info!(slug = %task.slug, "Skipped existing article");
                report.skipped.push(task.slug.clone());
            }
            Ok(TaskOutcome::Generated(paths)) => {
                tracing::info!(slug = %task.slug, files = paths.len(), "Generated article");
                report.generated.push(task.slug.clone());
            }
            Err(e) => {
                let message = format!("{:#}", e);
                tracing::error!(slug = %task.slug, error = %message, "Article failed");
                report.failed.push(TaskFailure {
                    slug: task.slug.clone(),
                    error: message,
                });
            }
        }
    }

    report
}

fn process_task(
    task: &ArticleTask,
    all_tasks: &[ArticleTask],
    config: &Config,
    date: NaiveDate,
) -> Result<TaskOutcome> {
    if io::article_exists(&config.content_root, &task.slug) {
        return Ok(TaskOutcome::Skipped);
    }

    let research = ResearchBundle::compile(task, config.variant);
    research.log_plan(&task.slug);
    let links = plan_internal_links(task, all_tasks);
    let article = assemble(task, Some(&research), &links, config.variant, date);

    io::prepare_image_dir(&config.public_root, config.variant, &task.slug)?;
    let paths = io::save_article(&config.content_root, &article)?;

    Ok(TaskOutcome::Generated(paths))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Locale, Variant};
    use crate::planning::DONE_MARK;
    use std::fs;
    use std::path::Path;

    const HEADER: &str = "Pillar\tTitle JP\tTitle EN\tKW JP\tKW EN\tVolume\tIntent\tSlug\tDone";

    fn row(title_ja: &str, title_en: &str, volume: &str, slug: &str, done: &str) -> String {
        format!(
            "Proxy & Web-Scraping\t{}\t{}\tkw\tkw\t{}\tCommercial\t{}\t{}",
            title_ja, title_en, volume, slug, done
        )
    }

    fn setup(rows: &[String]) -> (tempfile::TempDir, Config) {
        let dir = tempfile::tempdir().unwrap();
        let content_root = dir.path().join("content");
        fs::create_dir_all(&content_root).unwrap();
        fs::write(
            content_root.join("design.md"),
            format!("{}\n{}\n", HEADER, rows.join("\n")),
        )
        .unwrap();

        let config = Config {
            content_root,
            planning_file: None,
            public_root: dir.path().join("public"),
            variant: Variant::Enhanced,
        };
        (dir, config)
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn table_text(config: &Config) -> String {
        fs::read_to_string(config.planning_file()).unwrap()
    }

    #[test]
    fn test_end_to_end_priority_batch() {
        let (_dir, config) = setup(&[
            row("住宅プロキシとは", "What Is a Residential Proxy", "Low", "residential-proxy", ""),
            row("スクレイピング入門", "Web Scraping Basics", "Mid", "scraping-basics", ""),
            row("HubSpot の料金", "HubSpot Pricing", "Low", "hubspot-pricing", ""),
        ]);

        let report = run(&config, 2, date()).unwrap();

        assert_eq!(report.selected, vec!["hubspot-pricing", "scraping-basics"]);
        assert_eq!(report.generated, vec!["hubspot-pricing", "scraping-basics"]);
        assert!(report.failed.is_empty());

        for slug in ["hubspot-pricing", "scraping-basics"] {
            for locale in Locale::ALL {
                assert!(io::document_path(&config.content_root, locale, slug).exists());
            }
        }
        assert!(!io::article_exists(&config.content_root, "residential-proxy"));
        assert!(config.public_root.join("images/hubspot-pricing").is_dir());

        let table = PlanningTable::parse(&table_text(&config));
        assert!(table.find("hubspot-pricing").unwrap().is_complete);
        assert!(table.find("scraping-basics").unwrap().is_complete);
        assert!(!table.find("residential-proxy").unwrap().is_complete);
        assert_eq!(table_text(&config).matches(DONE_MARK).count(), 2);
    }

    #[test]
    fn test_existing_articles_are_skipped_but_marked() {
        let (_dir, config) = setup(&[row("HubSpot の料金", "HubSpot Pricing", "High", "hs", "")]);
        for locale in Locale::ALL {
            let path = io::document_path(&config.content_root, locale, "hs");
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, "hand written").unwrap();
        }

        let report = run(&config, 5, date()).unwrap();

        assert_eq!(report.skipped, vec!["hs"]);
        assert!(report.generated.is_empty());
        let ja = fs::read_to_string(io::document_path(&config.content_root, Locale::Ja, "hs")).unwrap();
        assert_eq!(ja, "hand written");
        assert!(PlanningTable::parse(&table_text(&config)).find("hs").unwrap().is_complete);
    }

    #[test]
    fn test_failed_task_stays_pending_and_batch_continues() {
        let (dir, mut config) = setup(&[
            row("HubSpot の料金", "HubSpot Pricing", "High", "hs", ""),
            row("1Password の料金", "1Password Pricing", "High", "onepw", ""),
        ]);
        // A plain file where the image directory tree should go makes every
        // image-directory creation fail.
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        config.public_root = blocker;

        let report = run(&config, 5, date()).unwrap();

        assert_eq!(report.failed.len(), 2);
        assert_eq!(report.selected, vec!["onepw", "hs"]);
        assert!(report.failed[0].error.contains("image directory"));
        assert!(!table_text(&config).contains(DONE_MARK));
    }

    #[test]
    fn test_nothing_pending_leaves_table_untouched() {
        let (_dir, config) = setup(&[row("HubSpot の料金", "HubSpot Pricing", "High", "hs", DONE_MARK)]);
        let before = table_text(&config);

        let report = run(&config, 5, date()).unwrap();

        assert!(report.selected.is_empty());
        assert_eq!(report.completed(), 0);
        assert_eq!(table_text(&config), before);
    }

    #[test]
    fn test_missing_planning_table_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            content_root: dir.path().join("nope"),
            ..Config::default()
        };
        assert!(run(&config, 5, date()).is_err());
    }

    #[test]
    fn test_rerun_is_idempotent() {
        let (_dir, config) = setup(&[row("HubSpot の料金", "HubSpot Pricing", "High", "hs", "")]);

        run(&config, 5, date()).unwrap();
        let after_first = table_text(&config);
        let second = run(&config, 5, date()).unwrap();

        assert!(second.selected.is_empty());
        assert_eq!(table_text(&config), after_first);
    }

    #[test]
    fn test_related_links_include_articles_completed_earlier_in_batch() {
        let (_dir, config) = setup(&[
            row("HubSpot の料金", "HubSpot Pricing", "High", "hs", ""),
            row("スクレイピング入門", "Web Scraping Basics", "High", "basics", ""),
        ]);

        run(&config, 2, date()).unwrap();

        let en = fs::read_to_string(io::document_path(&config.content_root, Locale::En, "basics")).unwrap();
        assert!(en.contains("- [HubSpot Pricing](/hs)"));
    }

    #[test]
    fn test_run_batch_in_memory_reports_unflushed_changes() {
        let (_dir, config) = setup(&[row("HubSpot の料金", "HubSpot Pricing", "High", "hs", "")]);
        let mut table = PlanningTable::load(Path::new(&config.planning_file())).unwrap();

        let report = run_batch(&mut table, &config, 1, date());

        assert_eq!(report.generated, vec!["hs"]);
        assert!(table.is_dirty());
        assert!(!table_text(&config).contains(DONE_MARK));
    }
}
