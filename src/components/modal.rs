use web_sys::Element;
use yew::prelude::*;

use crate::analytics::{AnalyticsEvent, EventSink};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModalState {
    pub open: bool,
    pub text: String,
    pub mailto: String,
}

impl Default for ModalState {
    fn default() -> Self {
        Self {
            open: false,
            text: String::new(),
            mailto: "#".to_string(),
        }
    }
}

impl ModalState {
    pub fn open(&mut self, text: String, mailto: Option<String>, sink: &dyn EventSink) {
        self.text = text;
        self.mailto = mailto.unwrap_or_else(|| "#".to_string());
        self.open = true;
        sink.track(AnalyticsEvent::new("modal_open"));
    }

    pub fn close(&mut self, sink: &dyn EventSink) {
        self.open = false;
        sink.track(AnalyticsEvent::new("modal_close"));
    }
}

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub state: ModalState,
    pub on_close: Callback<()>,
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let onclick = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            // Backdrop and close button both carry data-close.
            let closes = e
                .target_dyn_into::<Element>()
                .map(|target| target.has_attribute("data-close"))
                .unwrap_or(false);
            if closes {
                on_close.emit(());
            }
        })
    };

    let state = &props.state;
    html! {
        <div
            id="modal"
            class={classes!("modal", state.open.then_some("is-on"))}
            aria-hidden={if state.open { "false" } else { "true" }}
            {onclick}
        >
            <div class="modal__backdrop" data-close="1"></div>
            <div class="modal__dialog" role="dialog" aria-modal="true" aria-labelledby="modalTitle">
                <button class="modal__close" data-close="1" aria-label="Chiudi">{"×"}</button>
                <h3 id="modalTitle">{"Pre-ordine ricevuto"}</h3>
                <p id="modalText">{ &state.text }</p>
                <a id="mailtoLink" class="btn" href={state.mailto.clone()}>{"Invia anche via email"}</a>
            </div>
        </div>
    }
}
