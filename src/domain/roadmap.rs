use serde::{Deserialize, Serialize};

/// Free-text scratchpad persisted as one record. Fields are edited
/// independently; the record is rewritten whole on every save.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roadmap {
    #[serde(default)]
    pub learn: String,
    #[serde(default)]
    pub struggle: String,
    #[serde(default)]
    pub next_step: String,
}

/// Field labels shown by the roadmap pane, in edit order
pub const ROADMAP_FIELDS: [&str; 3] = ["Learning", "Struggling with", "Next step"];

impl Roadmap {
    pub fn field(&self, index: usize) -> &str {
        match index {
            0 => &self.learn,
            1 => &self.struggle,
            _ => &self.next_step,
        }
    }

    pub fn field_mut(&mut self, index: usize) -> &mut String {
        match index {
            0 => &mut self.learn,
            1 => &mut self.struggle,
            _ => &mut self.next_step,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_field_edit_preserves_siblings() {
        let mut roadmap = Roadmap {
            learn: "rust".to_string(),
            struggle: "lifetimes".to_string(),
            next_step: String::new(),
        };

        roadmap.field_mut(2).push_str("ship the site");
        assert_eq!(roadmap.learn, "rust");
        assert_eq!(roadmap.struggle, "lifetimes");
        assert_eq!(roadmap.field(2), "ship the site");
    }

    #[test]
    fn test_defaults_are_empty() {
        let roadmap = Roadmap::default();
        for idx in 0..ROADMAP_FIELDS.len() {
            assert_eq!(roadmap.field(idx), "");
        }
    }

    #[test]
    fn test_partial_record_fills_missing_fields() {
        // Older records may miss fields; serde defaults keep the load lossless
        let roadmap: Roadmap = serde_json::from_str(r#"{"learn":"css"}"#).unwrap();
        assert_eq!(roadmap.learn, "css");
        assert_eq!(roadmap.struggle, "");
        assert_eq!(roadmap.next_step, "");
    }
}
