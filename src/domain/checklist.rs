use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One entry in the fixed publish guide. The catalog itself is never
/// persisted; only completed step ids are.
#[derive(Debug, Clone, Copy)]
pub struct PublishStep {
    pub id: u8,
    pub title: &'static str,
    pub desc: &'static str,
    /// External action link for the step, if one applies
    pub link: Option<&'static str>,
}

/// The five-step publish catalog, in order
pub const PUBLISH_STEPS: [PublishStep; 5] = [
    PublishStep {
        id: 1,
        title: "GitHub account & repo",
        desc: "Create a new public repository on GitHub for the site.",
        link: Some("https://github.com/new"),
    },
    PublishStep {
        id: 2,
        title: "Upload the files",
        desc: "Drag the project files into the repository and commit them.",
        link: Some("https://github.com"),
    },
    PublishStep {
        id: 3,
        title: "Connect Vercel",
        desc: "Sign in to Vercel with GitHub and pick the new repository.",
        link: Some("https://vercel.com/new"),
    },
    PublishStep {
        id: 4,
        title: "Deploy",
        desc: "Press deploy and the site goes live within seconds.",
        link: Some("https://vercel.com"),
    },
    PublishStep {
        id: 5,
        title: "Check the result",
        desc: "Open the live site and test both mobile and desktop views.",
        link: None,
    },
];

/// Daily self-check affirmations. Deliberately session-only state.
pub const SELF_CHECK_ITEMS: [&str; 3] = [
    "Learned something new",
    "Kept trying",
    "Was patient with myself",
];

/// Completion state for the publish checklist, persisted as a plain
/// list of step ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Checklist {
    completed: BTreeSet<u8>,
}

impl Checklist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a step: remove it if completed, add it otherwise.
    /// Returns the new completion state of the step.
    pub fn toggle(&mut self, id: u8) -> bool {
        if self.completed.remove(&id) {
            false
        } else {
            self.completed.insert(id);
            true
        }
    }

    pub fn is_done(&self, id: u8) -> bool {
        self.completed.contains(&id)
    }

    /// Count of completed steps that exist in the catalog. Ids outside
    /// the catalog (from a hand-edited record) are not counted.
    pub fn completed_count(&self) -> usize {
        PUBLISH_STEPS
            .iter()
            .filter(|step| self.completed.contains(&step.id))
            .count()
    }

    /// Completion percentage, rounded to the nearest integer
    pub fn completion_percent(&self) -> u8 {
        let done = self.completed_count() as f64;
        let total = PUBLISH_STEPS.len() as f64;
        (done / total * 100.0).round() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_toggle_adds_and_removes() {
        let mut checklist = Checklist::new();
        assert!(checklist.toggle(1));
        assert!(checklist.is_done(1));
        assert!(!checklist.toggle(1));
        assert!(!checklist.is_done(1));
    }

    #[test]
    fn test_toggle_twice_restores_original() {
        let mut checklist = Checklist::new();
        checklist.toggle(2);
        checklist.toggle(4);
        let before = checklist.clone();

        checklist.toggle(3);
        checklist.toggle(3);
        assert_eq!(checklist, before);
    }

    #[test]
    fn test_completion_percent() {
        let mut checklist = Checklist::new();
        assert_eq!(checklist.completion_percent(), 0);

        checklist.toggle(1);
        assert_eq!(checklist.completion_percent(), 20);

        checklist.toggle(2);
        checklist.toggle(3);
        assert_eq!(checklist.completion_percent(), 60);

        checklist.toggle(4);
        checklist.toggle(5);
        assert_eq!(checklist.completion_percent(), 100);
    }

    #[test]
    fn test_unknown_ids_do_not_count() {
        let mut checklist = Checklist::new();
        checklist.toggle(99);
        assert_eq!(checklist.completed_count(), 0);
        assert_eq!(checklist.completion_percent(), 0);
    }

    #[test]
    fn test_serializes_as_id_list() {
        let mut checklist = Checklist::new();
        checklist.toggle(3);
        checklist.toggle(1);

        let json = serde_json::to_string(&checklist).unwrap();
        assert_eq!(json, "[1,3]");

        let parsed: Checklist = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, checklist);
    }

    #[test]
    fn test_catalog_ids_are_one_through_five() {
        let ids: Vec<u8> = PUBLISH_STEPS.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }
}
