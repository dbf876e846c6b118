use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::article::{GeneratedArticle, DOCUMENT_EXTENSION};
use crate::models::{Locale, Variant};

/// Where the document for `slug` in `locale` lives under the content root
pub fn document_path(content_root: &Path, locale: Locale, slug: &str) -> PathBuf {
    content_root
        .join(locale.tag())
        .join("media")
        .join(format!("{}.{}", slug, DOCUMENT_EXTENSION))
}

/// True when both locale documents for `slug` are already on disk
pub fn article_exists(content_root: &Path, slug: &str) -> bool {
    Locale::ALL
        .iter()
        .all(|&locale| document_path(content_root, locale, slug).exists())
}

/// Write both documents of an article, creating the locale directories
pub fn save_article(content_root: &Path, article: &GeneratedArticle) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    for document in article.documents() {
        let filepath = document_path(content_root, document.locale, &document.frontmatter.slug);

        if let Some(dir) = filepath.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create content directory: {}", dir.display()))?;
        }

        fs::write(&filepath, document.render())
            .with_context(|| format!("Failed to write article file: {}", filepath.display()))?;

        tracing::debug!(path = %filepath.display(), "Wrote article document");
        written.push(filepath);
    }

    Ok(written)
}

/// Directory that holds the cover and section images for `slug`
pub fn image_dir(public_root: &Path, variant: Variant, slug: &str) -> PathBuf {
    let prefix = variant.image_prefix().trim_start_matches('/');
    if prefix.is_empty() {
        public_root.join(slug)
    } else {
        public_root.join(prefix).join(slug)
    }
}

/// Create the image directory for `slug` so captured screenshots have a home
pub fn prepare_image_dir(public_root: &Path, variant: Variant, slug: &str) -> Result<PathBuf> {
    let dir = image_dir(public_root, variant, slug);
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create image directory: {}", dir.display()))?;
    Ok(dir)
}
