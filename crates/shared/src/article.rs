// Assembly of the two localized MDX documents for one planned article.
//
// Assembly is pure: the publish date is passed in, so the same task, research
// bundle, links and date always produce byte-identical documents.

use chrono::NaiveDate;
use serde::Serialize;

use crate::catalog::{self, Product};
use crate::links::InternalLink;
use crate::models::{ArticleTask, Locale, Variant};
use crate::research::ResearchBundle;
use crate::sections;

/// File extension of generated documents
pub const DOCUMENT_EXTENSION: &str = "mdx";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SectionKind {
    Tldr,
    Introduction,
    TableOfContents,
    Pricing,
    Features,
    Implementation,
    Comparison,
    CaseStudy,
    Faq,
    Conclusion,
    Footnotes,
}

/// Sections in document order for each variant. Pricing and features are
/// dropped at assembly time when the research bundle has no data for them.
pub fn section_plan(variant: Variant) -> &'static [SectionKind] {
    use SectionKind::*;
    match variant {
        Variant::Basic => &[
            Tldr,
            Introduction,
            Pricing,
            Features,
            Implementation,
            Faq,
            Conclusion,
        ],
        Variant::Enhanced => &[
            Tldr,
            Introduction,
            TableOfContents,
            Pricing,
            Features,
            Implementation,
            Comparison,
            CaseStudy,
            Faq,
            Conclusion,
            Footnotes,
        ],
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frontmatter {
    pub title: String,
    pub date: NaiveDate,
    pub summary: String,
    pub slug: String,
    pub lang: Locale,
    pub tags: Vec<String>,
    pub cover: String,
    pub word_count_target: u32,
    pub pillar_slug: String,
}

impl Frontmatter {
    pub fn render(&self) -> String {
        let tags: Vec<String> = self.tags.iter().map(|t| quote(t)).collect();

        let mut out = String::new();
        out.push_str("---\n");
        out.push_str(&format!("title: {}\n", quote(&self.title)));
        out.push_str(&format!(
            "date: {}\n",
            quote(&self.date.format("%Y-%m-%d").to_string())
        ));
        out.push_str(&format!("summary: {}\n", quote(&self.summary)));
        out.push_str(&format!("slug: {}\n", quote(&self.slug)));
        out.push_str(&format!("lang: {}\n", quote(self.lang.tag())));
        out.push_str(&format!("tags: [{}]\n", tags.join(", ")));
        out.push_str(&format!("cover: {}\n", quote(&self.cover)));
        out.push_str(&format!("wordCountTarget: {}\n", self.word_count_target));
        out.push_str(&format!("pillarSlug: {}\n", quote(&self.pillar_slug)));
        out.push_str("---");
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub kind: SectionKind,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub locale: Locale,
    pub frontmatter: Frontmatter,
    pub sections: Vec<Section>,
}

impl Document {
    pub fn render(&self) -> String {
        let body: Vec<&str> = self.sections.iter().map(|s| s.body.as_str()).collect();
        format!("{}\n\n{}", self.frontmatter.render(), body.join("\n\n"))
    }

    pub fn has_section(&self, kind: SectionKind) -> bool {
        self.sections.iter().any(|s| s.kind == kind)
    }
}

/// Both localized documents for one task
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedArticle {
    pub ja: Document,
    pub en: Document,
}

impl GeneratedArticle {
    pub fn documents(&self) -> [&Document; 2] {
        [&self.ja, &self.en]
    }
}

/// Everything a section template may draw on
pub struct ArticleContext<'a> {
    pub task: &'a ArticleTask,
    pub locale: Locale,
    pub variant: Variant,
    pub product: Product,
    pub research: Option<&'a ResearchBundle>,
    pub links: &'a [InternalLink],
}

impl ArticleContext<'_> {
    pub fn title(&self) -> &str {
        self.task.title(self.locale)
    }

    /// Title with any subtitle after a full-width colon removed
    pub fn base_title(&self) -> &str {
        cut_at(self.title(), "：")
    }

    pub fn image(&self, file: &str) -> String {
        format!("{}/{}/{}", self.variant.image_prefix(), self.task.slug, file)
    }
}

pub fn assemble(
    task: &ArticleTask,
    research: Option<&ResearchBundle>,
    links: &[InternalLink],
    variant: Variant,
    date: NaiveDate,
) -> GeneratedArticle {
    let product = research
        .map(|r| r.product)
        .unwrap_or_else(|| Product::detect(task));

    let build = |locale: Locale| {
        let ctx = ArticleContext {
            task,
            locale,
            variant,
            product,
            research,
            links,
        };
        Document {
            locale,
            frontmatter: frontmatter(&ctx, date),
            sections: section_plan(variant)
                .iter()
                .filter_map(|&kind| {
                    sections::render(kind, &ctx).map(|body| Section { kind, body })
                })
                .collect(),
        }
    };

    GeneratedArticle {
        ja: build(Locale::Ja),
        en: build(Locale::En),
    }
}

fn frontmatter(ctx: &ArticleContext<'_>, date: NaiveDate) -> Frontmatter {
    let task = ctx.task;
    Frontmatter {
        title: ctx.title().to_string(),
        date,
        summary: summary(ctx),
        slug: task.slug.clone(),
        lang: ctx.locale,
        tags: tags(ctx),
        cover: ctx.image("cover.webp"),
        word_count_target: task.word_count_target(),
        pillar_slug: catalog::pillar_slug(task).to_string(),
    }
}

fn summary(ctx: &ArticleContext<'_>) -> String {
    match (ctx.variant, ctx.locale) {
        (Variant::Basic, Locale::Ja) => format!(
            "{}について詳しく解説。料金プラン、機能、導入方法まで実践的な情報をお届けします。",
            ctx.base_title()
        ),
        (Variant::Basic, Locale::En) => format!(
            "Complete guide to {}. Detailed analysis of pricing, features, and implementation strategies.",
            ctx.title()
        ),
        (Variant::Enhanced, Locale::Ja) => format!(
            "{}の料金、機能、導入方法を詳しく解説。実際の使用例と最新情報をお届けします。",
            cut_at(ctx.base_title(), "の")
        ),
        (Variant::Enhanced, Locale::En) => format!(
            "Complete guide to {} including pricing, features, and implementation with real-world examples.",
            cut_at(ctx.base_title(), ": ")
        ),
    }
}

fn tags(ctx: &ArticleContext<'_>) -> Vec<String> {
    let keyword = ctx.task.keyword(ctx.locale).to_string();
    let intent = ctx.task.intent.clone();
    let products = Product::mentioned_in(ctx.task, ctx.locale, ctx.variant)
        .into_iter()
        .map(|p| p.display_name(ctx.locale).to_string());

    let mut tags = vec![keyword];
    match ctx.variant {
        Variant::Basic => {
            tags.extend(products);
            tags.push(intent);
        }
        Variant::Enhanced => {
            tags.push(intent);
            tags.extend(products);
        }
    }
    tags
}

fn cut_at<'a>(text: &'a str, pattern: &str) -> &'a str {
    text.find(pattern).map_or(text, |i| &text[..i])
}

/// Double-quoted scalar, escaped the same way as a JSON string
fn quote(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}
