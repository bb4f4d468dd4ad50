/// A selectable item. The picker only reads records; it never mutates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: String,               // Unique key (e.g., "404")
    pub label: String,            // Display name
    pub category: Option<String>, // Secondary classification, also searched
    pub detail: Option<String>,   // Preview-only text
    pub link: Option<String>,     // Preview-only reference URL
}

impl Record {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            category: None,
            detail: None,
            link: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Text the fuzzy matcher runs against: `"<id> <label> <category>"`.
    pub fn search_key(&self) -> String {
        match &self.category {
            Some(category) => format!("{} {} {}", self.id, self.label, category),
            None => format!("{} {}", self.id, self.label),
        }
    }

    /// Text shown for the record in the result list.
    pub fn display_line(&self) -> String {
        format!("{}  {}", self.id, self.label)
    }
}
