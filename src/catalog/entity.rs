//! Entity classification by tag.

use super::frontmatter::Tag;
use std::fmt;

/// Role of a catalog page, derived from its tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityType {
    Event,
    Command,
    Aggregate,
    Projector,
    ProcessManager,
    Notifier,
    Unknown,
}

impl EntityType {
    /// Classify an event page. `command` wins over `event`.
    pub fn of_event(tags: &[Tag]) -> Self {
        first_match(tags, &[("command", Self::Command), ("event", Self::Event)])
    }

    /// Classify a service page.
    pub fn of_service(tags: &[Tag]) -> Self {
        first_match(
            tags,
            &[
                ("aggregate", Self::Aggregate),
                ("procman", Self::ProcessManager),
                ("projector", Self::Projector),
                ("notifier", Self::Notifier),
            ],
        )
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Event => "event",
            Self::Command => "command",
            Self::Aggregate => "aggregate",
            Self::Projector => "projector",
            Self::ProcessManager => "process manager",
            Self::Notifier => "notifier",
            Self::Unknown => "unknown",
        }
    }
}

/// First type in `order` whose label appears among `tags`.
fn first_match(tags: &[Tag], order: &[(&str, EntityType)]) -> EntityType {
    order
        .iter()
        .find(|(label, _)| tags.iter().any(|t| t.label == *label))
        .map_or(EntityType::Unknown, |(_, ty)| *ty)
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An event flowing into or out of a service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub name: String,
    pub description: String,
    pub entity_type: EntityType,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(labels: &[&str]) -> Vec<Tag> {
        labels
            .iter()
            .map(|l| Tag {
                label: l.to_string(),
            })
            .collect()
    }

    #[test]
    fn command_wins_over_event() {
        assert_eq!(EntityType::of_event(&tags(&["event", "command"])), EntityType::Command);
        assert_eq!(EntityType::of_event(&tags(&["event"])), EntityType::Event);
        assert_eq!(EntityType::of_event(&tags(&["aggregate"])), EntityType::Unknown);
    }

    #[test]
    fn service_precedence() {
        assert_eq!(
            EntityType::of_service(&tags(&["projector", "aggregate"])),
            EntityType::Aggregate
        );
        assert_eq!(EntityType::of_service(&tags(&["procman"])), EntityType::ProcessManager);
        assert_eq!(EntityType::of_service(&[]), EntityType::Unknown);
    }
}
