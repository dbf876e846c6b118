// Fixed sample article used to preview the enhanced templates. It only writes
// documents and the image directory; the planning table is never involved.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

use crate::article::assemble;
use crate::io;
use crate::models::{ArticleTask, Variant, VolumeTier};
use crate::research::{ImageTarget, ResearchBundle};

pub const SAMPLE_VARIANT: Variant = Variant::Enhanced;

#[derive(Debug)]
pub struct SampleOutput {
    pub written: Vec<PathBuf>,
    pub image_dir: PathBuf,
    /// Capture targets whose file is not yet in `image_dir`
    pub missing_images: Vec<ImageTarget>,
}

pub fn sample_task() -> ArticleTask {
    ArticleTask {
        pillar_category: "Proxy & Web-Scraping Cluster".to_string(),
        title_primary: "市場調査のためのスクレイピング事例".to_string(),
        title_secondary: "Case Study: Web Scraping for Market Research".to_string(),
        keyword_primary: "スクレイピング 事例".to_string(),
        keyword_secondary: "web scraping case study".to_string(),
        volume: VolumeTier::Low,
        intent: "Informational".to_string(),
        slug: "case-study-web-scraping-for-market-research".to_string(),
        is_complete: false,
    }
}

pub fn generate_sample(
    content_root: &Path,
    public_root: &Path,
    date: NaiveDate,
) -> Result<SampleOutput> {
    let task = sample_task();
    let research = ResearchBundle::compile(&task, SAMPLE_VARIANT);
    research.log_plan(&task.slug);
    let article = assemble(&task, Some(&research), &[], SAMPLE_VARIANT, date);

    let image_dir = io::prepare_image_dir(public_root, SAMPLE_VARIANT, &task.slug)?;
    let written =
        io::save_article(content_root, &article).context("Failed to write the sample article")?;

    let missing_images = research
        .images
        .into_iter()
        .filter(|image| !image_dir.join(&image.filename).exists())
        .collect();

    Ok(SampleOutput {
        written,
        image_dir,
        missing_images,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::collections::BTreeSet;
    use std::fs;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 3).unwrap()
    }

    /// Image files under `/images/{slug}/` that a document links to
    fn referenced_images(text: &str, slug: &str) -> BTreeSet<String> {
        let prefix = format!("/images/{}/", slug);
        text.match_indices(&prefix)
            .filter_map(|(i, _)| {
                let rest = &text[i + prefix.len()..];
                rest.find(".webp").map(|end| rest[..end + ".webp".len()].to_string())
            })
            .collect()
    }

    #[test]
    fn test_every_referenced_image_has_a_capture_target() {
        let dir = tempfile::tempdir().unwrap();
        let output = generate_sample(&dir.path().join("content"), &dir.path().join("public"), date())
            .unwrap();
        let slug = sample_task().slug;

        let targets: BTreeSet<String> = output
            .missing_images
            .iter()
            .map(|image| image.filename.clone())
            .collect();

        assert_eq!(output.written.len(), 2);
        for path in &output.written {
            let referenced = referenced_images(&fs::read_to_string(path).unwrap(), &slug);
            assert!(referenced.contains("cover.webp"));
            assert!(
                referenced.is_subset(&targets),
                "{:?} not covered by {:?}",
                referenced,
                targets
            );
        }
    }

    #[test]
    fn test_captured_images_are_not_listed() {
        let dir = tempfile::tempdir().unwrap();
        let public = dir.path().join("public");
        let image_dir = io::image_dir(&public, SAMPLE_VARIANT, &sample_task().slug);
        fs::create_dir_all(&image_dir).unwrap();
        fs::write(image_dir.join("cover.webp"), b"webp").unwrap();

        let output = generate_sample(&dir.path().join("content"), &public, date()).unwrap();

        assert_eq!(output.image_dir, image_dir);
        let names: Vec<&str> = output
            .missing_images
            .iter()
            .map(|image| image.filename.as_str())
            .collect();
        assert_eq!(names, vec!["image-1.webp", "image-2.webp", "image-3.webp"]);
    }

    #[test]
    fn test_sample_never_touches_planning_table() {
        let dir = tempfile::tempdir().unwrap();
        let content = dir.path().join("content");
        let config = Config {
            content_root: content.clone(),
            ..Config::default()
        };

        generate_sample(&content, &dir.path().join("public"), date()).unwrap();
        assert!(!config.planning_file().exists());

        let table = "Pillar\tTitle JP\tTitle EN\tKW JP\tKW EN\tVolume\tIntent\tSlug\tDone\n";
        fs::write(config.planning_file(), table).unwrap();
        generate_sample(&content, &dir.path().join("public"), date()).unwrap();
        assert_eq!(fs::read_to_string(config.planning_file()).unwrap(), table);
    }
}
