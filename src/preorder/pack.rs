use crate::analytics::{AnalyticsEvent, EventSink};

/// Where a packaging choice came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PackSource {
    Choice,
    PackSection,
    Select,
    Init,
    SubmitKeep,
}

impl PackSource {
    pub fn as_str(self) -> &'static str {
        match self {
            PackSource::Choice => "choice",
            PackSource::PackSection => "pack_section",
            PackSource::Select => "select",
            PackSource::Init => "init",
            PackSource::SubmitKeep => "submit_keep",
        }
    }
}

/// Makes `value` the active pack everywhere it is shown and reports it.
pub fn select_pack(current: &mut String, value: &str, source: PackSource, sink: &dyn EventSink) {
    *current = value.to_string();
    sink.track(
        AnalyticsEvent::new("pack_selected")
            .with("pack", value)
            .with("source", source.as_str()),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::RecordingSink;
    use serde_json::json;

    #[test]
    fn selection_is_tracked_with_its_source() {
        let sink = RecordingSink::default();
        let mut pack = String::from("11");
        select_pack(&mut pack, "24", PackSource::Choice, &sink);
        assert_eq!(pack, "24");

        let events = sink.events();
        assert_eq!(events[0].field("pack"), Some(&json!("24")));
        assert_eq!(events[0].field("source"), Some(&json!("choice")));
    }
}
