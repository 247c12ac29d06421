//! Category taxonomy: alias resolution and icon lookup.
//!
//! Heterogeneous data sources each arrive with their own ad hoc category
//! vocabulary. The taxonomy maps that open-ended set of labels onto a small
//! canonical display set, while still accepting genuinely novel labels as
//! their own categories (pass-through policy, no data loss).

use std::collections::BTreeMap;

/// Icon shown for categories with no entry in the icon table.
pub const UNKNOWN_ICON: &str = "❓";

/// Built-in alias table: lowercased free-text label → canonical name.
const DEFAULT_ALIASES: &[(&str, &str)] = &[
    ("science", "Science & Nature"),
    ("sci", "Science & Nature"),
    ("nature", "Science & Nature"),
    ("biology", "Science & Nature"),
    ("physics", "Science & Nature"),
    ("chemistry", "Science & Nature"),
    ("history", "History"),
    ("hist", "History"),
    ("world history", "History"),
    ("ancient history", "History"),
    ("geography", "Geography"),
    ("geo", "Geography"),
    ("capitals", "Geography"),
    ("entertainment", "Entertainment"),
    ("movies", "Entertainment"),
    ("film", "Entertainment"),
    ("music", "Entertainment"),
    ("tv", "Entertainment"),
    ("television", "Entertainment"),
    ("sports", "Sports"),
    ("sport", "Sports"),
    ("art", "Art & Literature"),
    ("literature", "Art & Literature"),
    ("books", "Art & Literature"),
    ("poetry", "Art & Literature"),
    ("technology", "Technology"),
    ("tech", "Technology"),
    ("computers", "Technology"),
    ("computer science", "Technology"),
    ("programming", "Technology"),
    ("general", "General Knowledge"),
    ("general knowledge", "General Knowledge"),
    ("misc", "General Knowledge"),
    ("trivia", "General Knowledge"),
];

/// Built-in icon table: canonical name → icon.
const DEFAULT_ICONS: &[(&str, &str)] = &[
    ("Science & Nature", "🔬"),
    ("History", "📜"),
    ("Geography", "🌍"),
    ("Entertainment", "🎬"),
    ("Sports", "⚽"),
    ("Art & Literature", "🎨"),
    ("Technology", "💻"),
    ("General Knowledge", "💡"),
];

/// Immutable category normalization tables.
///
/// Built once at startup and passed by reference; tests substitute their own
/// tables. BTreeMaps keep seeding order deterministic.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    aliases: BTreeMap<String, String>,
    icons: BTreeMap<String, String>,
}

impl Taxonomy {
    /// Build a taxonomy from explicit alias and icon pairs.
    ///
    /// Alias keys are lowercased on the way in so lookups are always exact
    /// matches on the lowercased label.
    pub fn new<'a>(
        aliases: impl IntoIterator<Item = (&'a str, &'a str)>,
        icons: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        Self {
            aliases: aliases
                .into_iter()
                .map(|(a, c)| (a.to_lowercase(), c.to_string()))
                .collect(),
            icons: icons
                .into_iter()
                .map(|(n, i)| (n.to_string(), i.to_string()))
                .collect(),
        }
    }

    /// The built-in taxonomy.
    pub fn default_set() -> Self {
        Self::new(DEFAULT_ALIASES.iter().copied(), DEFAULT_ICONS.iter().copied())
    }

    /// Resolve a raw label to its canonical category name.
    ///
    /// Lookup is on the lowercased, trimmed label. A miss returns the
    /// trimmed input unchanged: unknown labels become their own canonical
    /// category rather than being rejected.
    pub fn normalize(&self, raw: &str) -> String {
        let trimmed = raw.trim();
        match self.aliases.get(&trimmed.to_lowercase()) {
            Some(canonical) => canonical.clone(),
            None => trimmed.to_string(),
        }
    }

    /// Icon for a canonical category name, or [`UNKNOWN_ICON`].
    pub fn icon_for(&self, canonical: &str) -> &str {
        self.icons
            .get(canonical)
            .map(String::as_str)
            .unwrap_or(UNKNOWN_ICON)
    }

    /// All canonical categories with their icons, in name order.
    pub fn categories(&self) -> impl Iterator<Item = (&str, &str)> {
        self.icons.iter().map(|(n, i)| (n.as_str(), i.as_str()))
    }

    /// All aliases with their canonical targets, in alias order.
    pub fn aliases(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases.iter().map(|(a, c)| (a.as_str(), c.as_str()))
    }
}
