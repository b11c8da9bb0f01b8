//! What changed during a run, and the commit message describing it

/// A product moved from one version to another
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionChange {
    pub name: String,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateSummary {
    pub changes: Vec<VersionChange>,
    pub up_to_date: Vec<String>,
    /// Skipped products with the reason they failed
    pub failures: Vec<(String, String)>,
}

impl UpdateSummary {
    pub fn has_changes(&self) -> bool {
        !self.changes.is_empty()
    }

    /// Commit message listing each change as `{prefix}.{name}: from -> to`.
    ///
    /// With several changes a headline spanning the lowest previous version
    /// and the highest new one comes first.
    pub fn commit_message(&self, prefix: &str) -> Option<String> {
        let mut message = String::new();

        if self.changes.len() > 1 {
            let lowest = self.changes.iter().min_by(|a, b| a.from.cmp(&b.from))?;
            let highest = self.changes.iter().max_by(|a, b| a.to.cmp(&b.to))?;
            message.push_str(&format!(
                "{prefix}: {} ({}) -> {} ({})\n\n",
                lowest.name, lowest.from, highest.name, highest.to
            ));
        }

        for change in &self.changes {
            message.push_str(&format!(
                "{prefix}.{}: {} -> {}\n",
                change.name, change.from, change.to
            ));
        }

        (!message.is_empty()).then_some(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn change(name: &str, from: &str, to: &str) -> VersionChange {
        VersionChange {
            name: name.to_string(),
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    #[test]
    fn commit_message_is_none_without_changes() {
        assert_eq!(UpdateSummary::default().commit_message("jetbrains"), None);
    }

    #[test]
    fn commit_message_for_single_change_has_no_headline() {
        let summary = UpdateSummary {
            changes: vec![change("goland", "2024.1", "2024.1.1")],
            ..Default::default()
        };

        assert_eq!(
            summary.commit_message("jetbrains").as_deref(),
            Some("jetbrains.goland: 2024.1 -> 2024.1.1\n")
        );
    }

    #[test]
    fn commit_message_for_several_changes_spans_version_range() {
        let summary = UpdateSummary {
            changes: vec![
                change("goland", "2024.1", "2024.1.1"),
                change("clion", "2023.3.4", "2024.1"),
                change("rider", "2024.1.1", "2024.1.2"),
            ],
            ..Default::default()
        };

        assert_eq!(
            summary.commit_message("jetbrains").as_deref(),
            Some(
                "jetbrains: clion (2023.3.4) -> rider (2024.1.2)\n\n\
                 jetbrains.goland: 2024.1 -> 2024.1.1\n\
                 jetbrains.clion: 2023.3.4 -> 2024.1\n\
                 jetbrains.rider: 2024.1.1 -> 2024.1.2\n"
            )
        );
    }
}
