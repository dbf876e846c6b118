use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Search-volume tier of a planned article
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeTier {
    High,
    Mid,
    Low,
    Unknown,
}

impl VolumeTier {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "High" => VolumeTier::High,
            "Mid" => VolumeTier::Mid,
            "Low" => VolumeTier::Low,
            _ => VolumeTier::Unknown,
        }
    }

    /// Sort rank used by the selector (lower comes first)
    pub fn rank(&self) -> u8 {
        match self {
            VolumeTier::High => 0,
            VolumeTier::Mid => 1,
            VolumeTier::Low => 2,
            VolumeTier::Unknown => 3,
        }
    }
}

/// One row of the planning table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleTask {
    pub pillar_category: String,
    pub title_primary: String,
    pub title_secondary: String,
    pub keyword_primary: String,
    pub keyword_secondary: String,
    pub volume: VolumeTier,
    pub intent: String,
    pub slug: String,
    pub is_complete: bool,
}

impl ArticleTask {
    pub fn is_pillar(&self) -> bool {
        self.pillar_category.contains("Pillar")
    }

    pub fn word_count_target(&self) -> u32 {
        if self.is_pillar() {
            1700
        } else {
            1100
        }
    }

    pub fn title(&self, locale: Locale) -> &str {
        match locale {
            Locale::Ja => &self.title_primary,
            Locale::En => &self.title_secondary,
        }
    }

    pub fn keyword(&self, locale: Locale) -> &str {
        match locale {
            Locale::Ja => &self.keyword_primary,
            Locale::En => &self.keyword_secondary,
        }
    }

    /// Text the priority topics are matched against
    pub fn combined_titles(&self) -> String {
        format!("{} {}", self.title_primary, self.title_secondary)
    }
}

/// Output locale of a generated document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    Ja,
    En,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::Ja, Locale::En];

    pub fn tag(&self) -> &'static str {
        match self {
            Locale::Ja => "ja",
            Locale::En => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Which generator pipeline to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Variant {
    Basic,
    Enhanced,
}

impl Variant {
    pub fn priority_topics(&self) -> &'static [&'static str] {
        match self {
            Variant::Basic => &["Bright Data", "1Password", "HubSpot"],
            Variant::Enhanced => &["Bright Data", "1Password", "HubSpot", "ネクストエンジン"],
        }
    }

    /// Site-relative prefix for cover and section images
    pub fn image_prefix(&self) -> &'static str {
        match self {
            Variant::Basic => "",
            Variant::Enhanced => "/images",
        }
    }
}

impl FromStr for Variant {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(Variant::Basic),
            "enhanced" => Ok(Variant::Enhanced),
            other => anyhow::bail!("Invalid variant: {}. Use 'basic' or 'enhanced'", other),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Basic => f.write_str("basic"),
            Variant::Enhanced => f.write_str("enhanced"),
        }
    }
}
