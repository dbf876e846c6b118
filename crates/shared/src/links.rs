use serde::Serialize;

use crate::models::{ArticleTask, Locale};

const MAX_RELATED: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LinkKind {
    /// Hub article of the cluster, linked from the introduction
    Pillar,
    /// Finished sibling article, linked from the conclusion
    Related,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InternalLink {
    pub kind: LinkKind,
    pub slug: String,
    pub title_primary: String,
    pub title_secondary: String,
}

impl InternalLink {
    fn new(kind: LinkKind, task: &ArticleTask) -> Self {
        Self {
            kind,
            slug: task.slug.clone(),
            title_primary: task.title_primary.clone(),
            title_secondary: task.title_secondary.clone(),
        }
    }

    pub fn title(&self, locale: Locale) -> &str {
        match locale {
            Locale::Ja => &self.title_primary,
            Locale::En => &self.title_secondary,
        }
    }

    /// Markdown link to the article
    pub fn markdown(&self, locale: Locale) -> String {
        format!("[{}](/{})", self.title(locale), self.slug)
    }
}

/// Plan internal links for `task` from the rest of the planning table.
///
/// The pillar page is the first pillar article whose category shares the
/// task's leading category word. Related links are completed articles of
/// the same category, in table order.
pub fn plan_internal_links(task: &ArticleTask, all_tasks: &[ArticleTask]) -> Vec<InternalLink> {
    let mut links = Vec::new();

    let cluster_word = task.pillar_category.split(' ').next().unwrap_or_default();
    let pillar = all_tasks.iter().find(|candidate| {
        candidate.is_pillar()
            && candidate.slug != task.slug
            && candidate.pillar_category.contains(cluster_word)
    });
    if let Some(pillar) = pillar {
        links.push(InternalLink::new(LinkKind::Pillar, pillar));
    }

    links.extend(
        all_tasks
            .iter()
            .filter(|candidate| {
                candidate.pillar_category == task.pillar_category
                    && candidate.slug != task.slug
                    && candidate.is_complete
            })
            .take(MAX_RELATED)
            .map(|candidate| InternalLink::new(LinkKind::Related, candidate)),
    );

    links
}
