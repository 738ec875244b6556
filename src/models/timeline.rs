//! Timeline records (work history and education)

/// Category tags used by the work timeline
pub const FULL_TIME: &str = "full-time";
pub const INTERNSHIP: &str = "internship";
pub const FREELANCE: &str = "freelance";

/// One work or education record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineEntry {
    pub id: u32,
    pub title: String,
    pub organization: String,
    /// Free-form label such as "2022 - 2023"; never parsed
    pub date: String,
    pub location: String,
    pub category: String,
    pub description: String,
    pub tags: Vec<String>,
}

impl TimelineEntry {
    pub fn new(id: u32, title: &str, organization: &str, category: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            organization: organization.to_string(),
            date: String::new(),
            location: String::new(),
            category: category.to_string(),
            description: String::new(),
            tags: Vec::new(),
        }
    }

    pub fn with_date(mut self, date: &str) -> Self {
        self.date = date.to_string();
        self
    }

    pub fn with_location(mut self, location: &str) -> Self {
        self.location = location.to_string();
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }
}

/// Rough kind of a technology tag, used to pick its glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TechKind {
    Layout,
    Database,
    Server,
    Generic,
}

impl TechKind {
    pub fn classify(tag: &str) -> Self {
        if tag.contains("React") || tag.contains("Next") {
            TechKind::Layout
        } else if tag.contains("Postgre") || tag.contains("SQL") {
            TechKind::Database
        } else if tag.contains("Django") || tag.contains("Node") {
            TechKind::Server
        } else {
            TechKind::Generic
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            TechKind::Layout => "▣",
            TechKind::Database => "◍",
            TechKind::Server => "▤",
            TechKind::Generic => "◌",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tech_kind_classify() {
        assert_eq!(TechKind::classify("React"), TechKind::Layout);
        assert_eq!(TechKind::classify("Next.js"), TechKind::Layout);
        assert_eq!(TechKind::classify("PostgreSQL"), TechKind::Database);
        assert_eq!(TechKind::classify("MySQL"), TechKind::Database);
        assert_eq!(TechKind::classify("Node.js"), TechKind::Server);
        assert_eq!(TechKind::classify("Stripe"), TechKind::Generic);
    }

    #[test]
    fn test_entry_builder() {
        let entry = TimelineEntry::new(7, "Dev", "Acme", FULL_TIME)
            .with_date("2024")
            .with_tags(&["Rust", "SQL"]);
        assert_eq!(entry.id, 7);
        assert_eq!(entry.date, "2024");
        assert_eq!(entry.tags, vec!["Rust".to_string(), "SQL".to_string()]);
        assert!(entry.location.is_empty());
    }
}
