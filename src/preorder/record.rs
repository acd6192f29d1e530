use serde::{Deserialize, Serialize};

use crate::config;

/// Raw field values as they come off the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PreorderInput {
    pub name: String,
    pub contact: String,
    pub qty: String,
    /// Value of the visible pack `<select>`.
    pub pack_select: String,
    /// Value of the hidden pack input kept in sync by the selector.
    pub pack: String,
    pub note: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreorderRecord {
    pub name: String,
    pub contact: String,
    pub qty: String,
    pub pack: String,
    pub note: String,
    /// Submission time, epoch milliseconds.
    pub ts: i64,
}

fn first_filled<'a>(candidates: &[&'a str], fallback: &'a str) -> &'a str {
    candidates
        .iter()
        .map(|c| c.trim())
        .find(|c| !c.is_empty())
        .unwrap_or(fallback)
}

impl PreorderRecord {
    pub fn from_input(input: &PreorderInput, ts: i64) -> Self {
        Self {
            name: input.name.trim().to_string(),
            contact: input.contact.trim().to_string(),
            qty: first_filled(&[input.qty.as_str()], config::DEFAULT_QTY).to_string(),
            pack: first_filled(&[input.pack_select.as_str(), input.pack.as_str()], config::DEFAULT_PACK).to_string(),
            note: input.note.trim().to_string(),
            ts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_are_trimmed_and_defaulted() {
        let input = PreorderInput {
            name: "  Ana ".into(),
            contact: "ana@x.com\n".into(),
            note: "   ".into(),
            ..Default::default()
        };
        let record = PreorderRecord::from_input(&input, 42);
        assert_eq!(record.name, "Ana");
        assert_eq!(record.contact, "ana@x.com");
        assert_eq!(record.qty, "1");
        assert_eq!(record.pack, "11");
        assert_eq!(record.note, "");
        assert_eq!(record.ts, 42);
    }

    #[test]
    fn select_wins_over_hidden_pack() {
        let input = PreorderInput {
            pack_select: "24".into(),
            pack: "6".into(),
            ..Default::default()
        };
        assert_eq!(PreorderRecord::from_input(&input, 0).pack, "24");

        let input = PreorderInput { pack: " 6 ".into(), ..Default::default() };
        assert_eq!(PreorderRecord::from_input(&input, 0).pack, "6");
    }

    #[test]
    fn stored_shape_uses_short_timestamp_key() {
        let record = PreorderRecord::from_input(&PreorderInput::default(), 1_700_000_000_000);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["ts"], 1_700_000_000_000_i64);
        assert_eq!(json["pack"], "11");
    }
}
