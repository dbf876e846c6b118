// Research bundle for an article.
//
// Everything here is compiled from the static product catalog. The search
// plan and image targets describe what an operator would look up or capture
// by hand; nothing is fetched.

use serde::Serialize;

use crate::catalog::{Competitors, PriceTiers, Product};
use crate::models::{ArticleTask, Locale, Variant};

/// A value in both output locales
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PerLocale<T> {
    pub ja: T,
    pub en: T,
}

impl<T> PerLocale<T> {
    pub fn get(&self, locale: Locale) -> &T {
        match locale {
            Locale::Ja => &self.ja,
            Locale::En => &self.en,
        }
    }
}

pub type Localized = PerLocale<String>;

impl Localized {
    pub fn new(ja: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            ja: ja.into(),
            en: en.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SearchIntent {
    Pricing,
    Features,
    Comparison,
    CaseStudy,
    General,
}

impl SearchIntent {
    pub fn categorize(query: &str) -> Self {
        if query.contains("料金") || query.contains("pricing") {
            SearchIntent::Pricing
        } else if query.contains("機能") || query.contains("features") {
            SearchIntent::Features
        } else if query.contains("比較") || query.contains("comparison") {
            SearchIntent::Comparison
        } else if query.contains("事例") || query.contains("case") {
            SearchIntent::CaseStudy
        } else {
            SearchIntent::General
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchQuery {
    pub query: String,
    pub intent: SearchIntent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub name: Localized,
    pub detail: Localized,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureSet {
    pub core: Vec<Feature>,
    pub advanced: Vec<Feature>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaqPair {
    pub question: Localized,
    pub answer: Localized,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductUpdate {
    pub date: String,
    pub title: Localized,
}

/// A screenshot to capture for one image the documents reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageTarget {
    pub filename: String,
    pub url: String,
    /// Page element to frame, e.g. `pricing-table`
    pub element: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Citation {
    pub source: String,
    pub description: Localized,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResearchBundle {
    pub product: Product,
    pub search_plan: Vec<SearchQuery>,
    pub pricing: Option<PriceTiers>,
    pub features: Option<FeatureSet>,
    pub competitors: PerLocale<Competitors>,
    pub updates: Vec<ProductUpdate>,
    pub faqs: Vec<FaqPair>,
    pub images: Vec<ImageTarget>,
    pub citations: Vec<Citation>,
}

impl ResearchBundle {
    pub fn compile(task: &ArticleTask, variant: Variant) -> Self {
        let product = Product::detect(task);
        tracing::debug!(slug = %task.slug, ?product, %variant, "Compiling research bundle");

        let updates = match variant {
            Variant::Basic => Vec::new(),
            Variant::Enhanced => recent_updates(),
        };

        Self {
            product,
            search_plan: search_plan(task, variant),
            pricing: Some(product.prices()),
            features: Some(feature_set()),
            competitors: PerLocale {
                ja: product.competitors(Locale::Ja),
                en: product.competitors(Locale::En),
            },
            updates,
            faqs: default_faqs(product),
            images: image_targets(product),
            citations: citations(product),
        }
    }

    /// Emit the search plan and update log as debug diagnostics
    pub fn log_plan(&self, slug: &str) {
        for query in &self.search_plan {
            tracing::debug!(slug, query = %query.query, intent = ?query.intent, "Planned search");
        }
        for update in &self.updates {
            tracing::debug!(slug, date = %update.date, title = %update.title.en, "Product update");
        }
    }
}

fn search_plan(task: &ArticleTask, variant: Variant) -> Vec<SearchQuery> {
    let ja = &task.keyword_primary;
    let en = &task.keyword_secondary;

    let queries = match variant {
        Variant::Basic => vec![
            format!("{} 料金 最新 2025", ja),
            format!("{} 機能 比較 口コミ", ja),
            format!("{} 使い方 導入事例", ja),
            format!("{} pricing features 2025", en),
        ],
        Variant::Enhanced => vec![
            format!("{} 基本情報 概要 2025", ja),
            format!("{} overview features 2025", en),
            format!("{} 料金 価格 プラン 最新", ja),
            format!("{} pricing plans cost 2025", en),
            format!("{} 機能 特徴 使い方", ja),
            format!("{} features benefits tutorial", en),
            format!("{} 比較 評価 口コミ レビュー", ja),
            format!("{} comparison review evaluation", en),
            format!("{} 導入事例 成功事例", ja),
            format!("{} case study success story", en),
            format!("{} 問題 課題 解決策", ja),
            format!("{} issues problems solutions", en),
        ],
    };

    queries
        .into_iter()
        .map(|query| SearchQuery {
            intent: SearchIntent::categorize(&query),
            query,
        })
        .collect()
}

fn feature_set() -> FeatureSet {
    let feature = |ja: &str, en: &str, ja_detail: &str, en_detail: &str| Feature {
        name: Localized::new(ja, en),
        detail: Localized::new(ja_detail, en_detail),
    };

    FeatureSet {
        core: vec![
            feature("機能A", "Feature A", "詳細な説明とメリット", "Detailed description and benefits"),
            feature("機能B", "Feature B", "実用的な使用例", "Practical use cases"),
            feature("機能C", "Feature C", "他社との差別化ポイント", "Differentiation points"),
        ],
        advanced: vec![
            feature("高度機能A", "Advanced Feature A", "エンタープライズ向け", "Enterprise-focused"),
            feature(
                "高度機能B",
                "Advanced Feature B",
                "大規模運用対応",
                "Large-scale operation support",
            ),
        ],
    }
}

fn recent_updates() -> Vec<ProductUpdate> {
    vec![
        ProductUpdate {
            date: "2025-01-01".to_string(),
            title: Localized::new("最新アップデート情報", "Latest update"),
        },
        ProductUpdate {
            date: "2024-12-01".to_string(),
            title: Localized::new("新機能追加", "New features added"),
        },
    ]
}

/// FAQ pairs every article carries, filled in with the product's trial length
pub fn default_faqs(product: Product) -> Vec<FaqPair> {
    let days = product.trial_days();
    vec![
        FaqPair {
            question: Localized::new("無料トライアルはありますか？", "Is there a free trial available?"),
            answer: Localized::new(
                format!("はい、{}日間の無料トライアルを提供しています。", days),
                format!("Yes, a {}-day free trial is available.", days),
            ),
        },
        FaqPair {
            question: Localized::new(
                "料金プランはどのように選べばよいですか？",
                "How should I choose a pricing plan?",
            ),
            answer: Localized::new(
                "利用規模と必要な機能に応じて選択することをお勧めします。",
                "We recommend choosing based on your usage scale and required features.",
            ),
        },
        FaqPair {
            question: Localized::new("サポート体制はどうなっていますか？", "What about support?"),
            answer: Localized::new(
                "24時間365日のサポートを提供しています。",
                "24/7 support is provided.",
            ),
        },
    ]
}

fn image_targets(product: Product) -> Vec<ImageTarget> {
    let plan = [
        ("cover.webp", product.official_site().to_string(), "viewport", "メインページ"),
        ("image-1.webp", product.page_url("pricing"), "pricing-table", "料金表"),
        ("image-2.webp", product.page_url("features"), "features-section", "機能一覧"),
        ("image-3.webp", product.page_url("docs"), "setup-guide", "設定画面"),
    ];

    plan.into_iter()
        .map(|(filename, url, element, description)| ImageTarget {
            filename: filename.to_string(),
            url,
            element: element.to_string(),
            description: description.to_string(),
        })
        .collect()
}

/// Sources cited in the footnotes, in footnote order
pub fn citations(product: Product) -> Vec<Citation> {
    vec![
        Citation {
            source: product.official_site().to_string(),
            description: Localized::new("公式ドキュメント", "Official Documentation"),
        },
        Citation {
            source: product.page_url("pricing"),
            description: Localized::new("料金プラン詳細", "Pricing Details"),
        },
        Citation {
            source: product.page_url("features"),
            description: Localized::new("機能仕様書", "Feature Specifications"),
        },
    ]
}
