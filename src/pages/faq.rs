use yew::prelude::*;
use yew::{Children, Properties};
use yew_hooks::use_toggle;

use crate::analytics::{track, AnalyticsEvent};
use crate::config;

/// Event for an FAQ item that just became `expanded`.
pub fn faq_toggle_event(question: &str, expanded: bool) -> AnalyticsEvent {
    let question: String = question
        .trim()
        .chars()
        .take(config::FAQ_QUESTION_TRACK_LEN)
        .collect();
    AnalyticsEvent::new("faq_toggle")
        .with("expanded", expanded)
        .with("question", question)
}

#[derive(Properties, PartialEq)]
pub struct FaqItemProps {
    pub question: String,
    pub children: Children,
}

#[function_component(FaqItem)]
pub fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_toggle(false, true);

    let toggle = {
        let is_open = is_open.clone();
        let question = props.question.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            track(faq_toggle_event(&question, !*is_open));
            is_open.toggle();
        })
    };

    html! {
        <div class={classes!("faq__item", (*is_open).then_some("open"))}>
            <button
                class="faq__q"
                aria-expanded={if *is_open { "true" } else { "false" }}
                onclick={toggle}
            >
                <span class="question-text">{ &props.question }</span>
                <span class="toggle-icon">{ if *is_open { "−" } else { "+" } }</span>
            </button>
            <div class="faq__a" hidden={!*is_open}>
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    html! {
        <section id="faq" class="faq">
            <h2>{"Domande frequenti"}</h2>

            <FaqItem question="Da dove arrivano le uova?">
                <p>{"Da galline allevate all'aperto nella nostra cascina, raccolte a mano ogni mattina."}</p>
            </FaqItem>

            <FaqItem question="Quando vengono consegnate?">
                <p>{"Raccogliamo i pre-ordini durante la settimana e consegniamo il sabato mattina in zona."}</p>
            </FaqItem>

            <FaqItem question="Posso cambiare confezione dopo aver ordinato?">
                <p>{"Certo: rispondi alla mail di conferma o scrivici prima del venerdì sera."}</p>
            </FaqItem>

            <FaqItem question="Come si paga?">
                <p>{"Alla consegna, in contanti o con carta. Nessun pagamento online."}</p>
            </FaqItem>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn long_questions_are_cut_at_sixty_chars() {
        let question = format!("  {}  ", "è".repeat(80));
        let event = faq_toggle_event(&question, true);
        let tracked = event.field("question").and_then(|q| q.as_str()).unwrap();
        assert_eq!(tracked.chars().count(), 60);
        assert_eq!(event.field("expanded"), Some(&json!(true)));
    }

    #[test]
    fn short_questions_are_kept_whole() {
        let event = faq_toggle_event("Come si paga?", false);
        assert_eq!(event.field("question"), Some(&json!("Come si paga?")));
        assert_eq!(event.field("expanded"), Some(&json!(false)));
    }
}
