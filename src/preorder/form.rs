use super::history::{self, KeyValueStore};
use super::mailto;
use super::pack::{select_pack, PackSource};
use super::record::{PreorderInput, PreorderRecord};
use crate::analytics::{AnalyticsEvent, EventSink};
use crate::config;

/// Current values of the preorder form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreorderForm {
    pub name: String,
    pub contact: String,
    pub qty: String,
    pub pack: String,
    pub note: String,
}

impl Default for PreorderForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            contact: String::new(),
            qty: config::DEFAULT_QTY.to_string(),
            pack: config::DEFAULT_PACK.to_string(),
            note: String::new(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Contact,
    Qty,
    Note,
}

/// What the page shows after a successful submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub record: PreorderRecord,
    pub confirmation: String,
    pub mailto: String,
}

impl PreorderForm {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Contact => self.contact = value,
            Field::Qty => self.qty = value,
            Field::Note => self.note = value,
        }
    }

    pub fn input(&self) -> PreorderInput {
        PreorderInput {
            name: self.name.clone(),
            contact: self.contact.clone(),
            qty: self.qty.clone(),
            pack_select: self.pack.clone(),
            pack: self.pack.clone(),
            note: self.note.clone(),
        }
    }

    /// Records the order locally and reports it. The form is left as is.
    pub fn submit(&self, store: &dyn KeyValueStore, sink: &dyn EventSink, now_ms: i64) -> Submission {
        let record = PreorderRecord::from_input(&self.input(), now_ms);

        if let Err(e) = history::append(store, record.clone()) {
            log::warn!("preorder not saved locally: {}", e);
        }

        sink.track(
            AnalyticsEvent::new("preorder_submit")
                .with("pack", record.pack.as_str())
                .with("qty", record.qty.as_str()),
        );

        Submission {
            confirmation: mailto::confirmation(&record),
            mailto: mailto::mailto_href(&record),
            record,
        }
    }

    /// Clears the form for the next order. The submitted pack stays selected.
    pub fn reset_keeping_pack(&mut self, pack: &str, sink: &dyn EventSink) {
        *self = PreorderForm::default();
        select_pack(&mut self.pack, pack, PackSource::SubmitKeep, sink);
    }
}
