//! Jira tickets as seen by the sync.

/// Sprint state value Jira uses for the running sprint.
pub const ACTIVE_SPRINT_STATE: &str = "active";

/// A ticket's membership in one sprint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SprintMembership {
    pub name: String,
    /// `active`, `closed`, `future`, ...
    pub state: String,
}

impl SprintMembership {
    pub fn new(name: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: state.into(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.state == ACTIVE_SPRINT_STATE
    }
}

/// Reference to a ticket's parent (usually an epic).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentRef {
    pub key: String,
    pub summary: String,
}

/// A Jira issue, read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    /// Issue key, e.g. `"SHOP-142"`.
    pub key: String,
    pub summary: String,
    /// Raw Jira status name, before mapping.
    pub status: String,
    /// Issue type name, e.g. `"Story"` or `"Bug"`.
    pub issue_type: String,
    pub parent: Option<ParentRef>,
    /// Sprint memberships in the order Jira reports them.
    pub sprints: Vec<SprintMembership>,
}

impl Ticket {
    pub fn new(
        key: impl Into<String>,
        summary: impl Into<String>,
        status: impl Into<String>,
        issue_type: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            summary: summary.into(),
            status: status.into(),
            issue_type: issue_type.into(),
            parent: None,
            sprints: Vec::new(),
        }
    }

    pub fn with_parent(mut self, key: impl Into<String>, summary: impl Into<String>) -> Self {
        self.parent = Some(ParentRef {
            key: key.into(),
            summary: summary.into(),
        });
        self
    }

    pub fn with_sprint(mut self, name: impl Into<String>, state: impl Into<String>) -> Self {
        self.sprints.push(SprintMembership::new(name, state));
        self
    }

    /// Whether this ticket is in `sprint` and that sprint is the active one.
    pub fn is_active_in(&self, sprint: &str) -> bool {
        self.sprints
            .iter()
            .any(|membership| membership.is_active() && membership.name == sprint)
    }
}

/// Name of the first active sprint found, scanning tickets and their
/// memberships in order.
pub fn active_sprint_name(tickets: &[Ticket]) -> Option<String> {
    tickets
        .iter()
        .flat_map(|ticket| ticket.sprints.iter())
        .find(|membership| membership.is_active())
        .map(|membership| membership.name.clone())
}
