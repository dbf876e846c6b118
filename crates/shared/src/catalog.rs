// Static lookup tables for the affiliate products covered by the site.

use serde::Serialize;

use crate::models::{ArticleTask, Locale, Variant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Product {
    BrightData,
    OnePassword,
    HubSpot,
    NextEngine,
    Generic,
}

/// Known products in detection order
pub const KNOWN_PRODUCTS: [Product; 4] = [
    Product::BrightData,
    Product::OnePassword,
    Product::HubSpot,
    Product::NextEngine,
];

/// Monthly prices for the three standard plans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceTiers {
    pub basic: u32,
    pub standard: u32,
    pub enterprise: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Competitors {
    pub main: Vec<String>,
    pub alternatives: Vec<String>,
    pub comparison: String,
}

impl Product {
    /// Detect the product an article is about from its titles
    pub fn detect(task: &ArticleTask) -> Self {
        KNOWN_PRODUCTS
            .iter()
            .copied()
            .find(|p| task.title_primary.contains(p.display_name(Locale::Ja)))
            .or_else(|| {
                KNOWN_PRODUCTS
                    .iter()
                    .copied()
                    .find(|p| task.title_secondary.contains(p.display_name(Locale::En)))
            })
            .unwrap_or(Product::Generic)
    }

    /// Products the variant tags articles with, in tag order
    pub fn taggable(variant: Variant) -> &'static [Product] {
        match variant {
            Variant::Basic => &[Product::BrightData, Product::OnePassword, Product::HubSpot],
            Variant::Enhanced => &KNOWN_PRODUCTS,
        }
    }

    /// Taggable products named in the title of `locale`
    pub fn mentioned_in(task: &ArticleTask, locale: Locale, variant: Variant) -> Vec<Product> {
        let title = task.title(locale);
        Self::taggable(variant)
            .iter()
            .copied()
            .filter(|p| title.contains(p.display_name(locale)))
            .collect()
    }

    pub fn display_name(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Product::BrightData, _) => "Bright Data",
            (Product::OnePassword, _) => "1Password",
            (Product::HubSpot, _) => "HubSpot",
            (Product::NextEngine, Locale::Ja) => "ネクストエンジン",
            (Product::NextEngine, Locale::En) => "Next Engine",
            (Product::Generic, Locale::Ja) => "製品",
            (Product::Generic, Locale::En) => "Product",
        }
    }

    /// Identifier understood by the site's affiliate CTA component
    pub fn cta_id(&self) -> &'static str {
        match self {
            Product::BrightData => "BrightData",
            Product::OnePassword => "1Password",
            Product::HubSpot => "HubSpot",
            Product::NextEngine => "NextEngine",
            Product::Generic => "Product",
        }
    }

    pub fn trial_days(&self) -> u32 {
        match self {
            Product::BrightData => 7,
            Product::OnePassword => 14,
            Product::HubSpot => 30,
            Product::NextEngine => 15,
            Product::Generic => 7,
        }
    }

    pub fn prices(&self) -> PriceTiers {
        let (basic, standard, enterprise) = match self {
            Product::BrightData => (15, 150, 500),
            Product::OnePassword => (3, 8, 15),
            Product::HubSpot => (0, 45, 1200),
            Product::NextEngine => (10_000, 20_000, 50_000),
            Product::Generic => (10, 50, 200),
        };
        PriceTiers {
            basic,
            standard,
            enterprise,
        }
    }

    pub fn official_site(&self) -> &'static str {
        match self {
            Product::BrightData => "https://brightdata.com",
            Product::OnePassword => "https://1password.com",
            Product::HubSpot => "https://hubspot.com",
            Product::NextEngine => "https://next-engine.net",
            Product::Generic => "https://example.com",
        }
    }

    /// Currency symbol prices are quoted in
    pub fn currency(&self) -> &'static str {
        match self {
            Product::NextEngine => "¥",
            _ => "$",
        }
    }

    /// URL of a page under the official site, e.g. `pricing`
    pub fn page_url(&self, page: &str) -> String {
        format!("{}/{}", self.official_site(), page)
    }

    pub fn competitors(&self, locale: Locale) -> Competitors {
        let (main, alternatives, comparison): (&[&str], &[&str], &str) = match (self, locale) {
            (Product::BrightData, _) => (
                &["Oxylabs", "Smartproxy", "ProxyMesh"],
                &["Luminati", "Storm Proxies"],
                "Bright Data vs Oxylabs",
            ),
            (Product::OnePassword, _) => (
                &["LastPass", "Bitwarden", "Dashlane"],
                &["KeePass", "RoboForm"],
                "1Password vs LastPass",
            ),
            (Product::HubSpot, _) => (
                &["Salesforce", "Pipedrive", "Zoho"],
                &["Marketo", "Pardot"],
                "HubSpot vs Salesforce",
            ),
            (Product::NextEngine, Locale::Ja) => (
                &["Logizard", "アシスト", "CROSS MALL"],
                &["楽楽販売", "flam"],
                "ネクストエンジン vs Logizard",
            ),
            (Product::NextEngine, Locale::En) => (
                &["Logizard", "Assist", "CROSS MALL"],
                &["Rakuraku Hanbai", "flam"],
                "Next Engine vs Logizard",
            ),
            (Product::Generic, Locale::Ja) => {
                (&["競合A", "競合B"], &["代替A", "代替B"], "比較記事")
            }
            (Product::Generic, Locale::En) => (
                &["Competitor A", "Competitor B"],
                &["Alternative A", "Alternative B"],
                "comparison article",
            ),
        };

        Competitors {
            main: main.iter().map(|s| s.to_string()).collect(),
            alternatives: alternatives.iter().map(|s| s.to_string()).collect(),
            comparison: comparison.to_string(),
        }
    }
}

/// Business field an article belongs to, derived from its primary title
pub fn service_category(task: &ArticleTask, locale: Locale) -> &'static str {
    let title = &task.title_primary;
    let (ja, en) = if title.contains("プロキシ") {
        ("プロキシ・Web スクレイピング", "proxy & web scraping")
    } else if title.contains("パスワード") {
        ("パスワード管理", "password management")
    } else if title.contains("EC") || title.contains("ネクストエンジン") {
        ("EC 一元管理", "e-commerce order management")
    } else if title.contains("HubSpot") {
        ("CRM・マーケティング", "CRM & marketing")
    } else {
        ("ビジネスツール", "business tools")
    };

    match locale {
        Locale::Ja => ja,
        Locale::En => en,
    }
}

/// Slug of the pillar page for a cluster article; empty for pillar articles
/// and unknown clusters.
pub fn pillar_slug(task: &ArticleTask) -> &'static str {
    if task.is_pillar() {
        return "";
    }

    match task.pillar_category.as_str() {
        "Proxy & Web-Scraping" => "proxy-guide",
        "EC OMS & Next Engine" => "oms-guide",
        "Password Manager" => "password-manager-guide",
        "HubSpot CRM & Platform" => "hubspot-crm-platform-guide",
        "HubSpot Marketing Hub" => "hubspot-marketing-hub-guide",
        "HubSpot Sales & Service" => "hubspot-sales-service-guide",
        "HubSpot CMS & Operations" => "hubspot-cms-operations-guide",
        _ => "",
    }
}
