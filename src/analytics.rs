use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnalyticsEvent {
    pub event: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl AnalyticsEvent {
    pub fn new(event: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            fields: Map::new(),
        }
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    #[cfg(test)]
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

/// Append-only destination for analytics events.
pub trait EventSink {
    fn track(&self, event: AnalyticsEvent);
}

#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("no window")]
    NoWindow,
    #[error("javascript error: {0}")]
    Js(String),
    #[error("could not serialize event: {0}")]
    Serialize(#[from] serde_wasm_bindgen::Error),
}

impl From<JsValue> for AnalyticsError {
    fn from(value: JsValue) -> Self {
        AnalyticsError::Js(format!("{:?}", value))
    }
}

/// The page-wide `window.dataLayer` queue read by the tag loader.
///
/// Every event is mirrored to the developer console.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DataLayer;

impl DataLayer {
    fn push(event: &AnalyticsEvent) -> Result<JsValue, AnalyticsError> {
        let window = web_sys::window().ok_or(AnalyticsError::NoWindow)?;
        let key = JsValue::from_str("dataLayer");
        let existing = Reflect::get(&window, &key)?;
        let queue: Array = if Array::is_array(&existing) {
            existing.unchecked_into()
        } else {
            let queue = Array::new();
            Reflect::set(&window, &key, &queue)?;
            queue
        };

        let value = event.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?;
        queue.push(&value);
        Ok(value)
    }
}

impl EventSink for DataLayer {
    fn track(&self, event: AnalyticsEvent) {
        match Self::push(&event) {
            Ok(payload) => gloo_console::log!("[track]", event.event.as_str(), payload),
            Err(e) => {
                log::debug!("dataLayer push failed for {}: {}", event.event, e);
                let fields = Value::Object(event.fields.clone()).to_string();
                gloo_console::log!("[track]", event.event.as_str(), fields);
            }
        }
    }
}

/// Shorthand for widgets that always report to the page queue.
pub fn track(event: AnalyticsEvent) {
    DataLayer.track(event);
}

#[cfg(test)]
#[derive(Default)]
pub struct RecordingSink {
    events: std::cell::RefCell<Vec<AnalyticsEvent>>,
}

#[cfg(test)]
impl RecordingSink {
    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.events.borrow().clone()
    }

    pub fn names(&self) -> Vec<String> {
        self.events.borrow().iter().map(|e| e.event.clone()).collect()
    }
}

#[cfg(test)]
impl EventSink for RecordingSink {
    fn track(&self, event: AnalyticsEvent) {
        self.events.borrow_mut().push(event);
    }
}
