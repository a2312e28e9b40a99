//! Tags and the rules that derive a tag label from a ticket.

use std::collections::BTreeMap;

use super::ticket::Ticket;

/// A row of the Notion tags database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    /// Notion page id.
    pub id: String,
    pub name: String,
}

/// Rules turning a ticket's type and parent into a tag label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRules {
    /// Issue type whose tag is derived from the parent summary.
    pub story_type: String,
    /// Prefix for parent-derived labels.
    pub feature_prefix: String,
    /// Issue type name to tag label. Unlisted types pass through.
    pub type_tags: BTreeMap<String, String>,
}

impl Default for TagRules {
    fn default() -> Self {
        Self {
            story_type: "Story".to_string(),
            feature_prefix: "Feat - ".to_string(),
            type_tags: BTreeMap::from([("Bug".to_string(), "Fix".to_string())]),
        }
    }
}

impl TagRules {
    /// Tag label for `ticket`. An empty string means "no tag".
    pub fn tag_for(&self, ticket: &Ticket) -> String {
        if ticket.issue_type == self.story_type {
            return ticket
                .parent
                .as_ref()
                .map(|parent| format!("{}{}", self.feature_prefix, parent.summary))
                .unwrap_or_default();
        }

        self.type_tags
            .get(&ticket.issue_type)
            .cloned()
            .unwrap_or_else(|| ticket.issue_type.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_story_without_parent_has_no_tag() {
        let ticket = Ticket::new("SHOP-1", "Add cart", "Open", "Story");
        assert_eq!(TagRules::default().tag_for(&ticket), "");
    }

    #[test]
    fn test_story_with_parent_uses_feature_prefix() {
        let ticket = Ticket::new("SHOP-1", "Add cart", "Open", "Story")
            .with_parent("SHOP-100", "Checkout Redesign");
        assert_eq!(
            TagRules::default().tag_for(&ticket),
            "Feat - Checkout Redesign"
        );
    }

    #[test]
    fn test_bug_maps_to_fix() {
        let ticket = Ticket::new("SHOP-2", "Crash on pay", "Open", "Bug")
            .with_parent("SHOP-100", "Checkout Redesign");
        assert_eq!(TagRules::default().tag_for(&ticket), "Fix");
    }

    #[test]
    fn test_unmapped_type_passes_through() {
        let ticket = Ticket::new("SHOP-3", "Bump deps", "Open", "Task");
        assert_eq!(TagRules::default().tag_for(&ticket), "Task");
    }
}
