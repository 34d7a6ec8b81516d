use crate::model::EventRecord;

/// Case-insensitive substring matcher over a set of name spellings.
///
/// Upstream data uses both diacritic and transliterated spellings, so each
/// variant is matched as a fragment rather than a full name.
#[derive(Debug, Clone)]
pub struct PlayerMatcher {
    variants: Vec<String>,
}

impl PlayerMatcher {
    pub fn new<I, S>(variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let variants = variants
            .into_iter()
            .map(|v| v.as_ref().trim().to_lowercase())
            .filter(|v| !v.is_empty())
            .collect();
        Self { variants }
    }

    pub fn variants(&self) -> &[String] {
        &self.variants
    }

    pub fn matches_name(&self, name: &str) -> bool {
        let lowered = name.to_lowercase();
        self.variants.iter().any(|v| lowered.contains(v.as_str()))
    }

    pub fn matches(&self, event: &EventRecord) -> bool {
        event.player().is_some_and(|name| self.matches_name(name))
    }

    pub fn filter_goals<'a>(&self, goals: &'a [EventRecord]) -> Vec<&'a EventRecord> {
        goals.iter().filter(|g| self.matches(g)).collect()
    }
}
