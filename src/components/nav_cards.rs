use yew::prelude::*;

use crate::analytics::{track, AnalyticsEvent};
use crate::dom;

pub fn nav_click_event(name: &str, target: &str) -> AnalyticsEvent {
    AnalyticsEvent::new("nav_click")
        .with("name", name)
        .with("target", target)
}

/// Enter and Space activate a card like a click.
pub fn activates(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

#[derive(Properties, PartialEq)]
pub struct NavCardProps {
    pub title: AttrValue,
    pub blurb: AttrValue,
    /// Selector of the section to scroll to.
    pub target: AttrValue,
    #[prop_or(AttrValue::from("nav_card"))]
    pub track_name: AttrValue,
}

#[function_component(NavCard)]
pub fn nav_card(props: &NavCardProps) -> Html {
    let go = {
        let name = props.track_name.clone();
        let target = props.target.clone();
        move || {
            track(nav_click_event(&name, &target));
            if !dom::scroll_to(&target) {
                log::debug!("nav target {} not on the page", target);
            }
        }
    };

    let onclick = {
        let go = go.clone();
        Callback::from(move |_: MouseEvent| go())
    };
    let onkeydown = Callback::from(move |e: KeyboardEvent| {
        if activates(&e.key()) {
            e.prevent_default();
            go();
        }
    });

    html! {
        <div
            class="card"
            role="button"
            tabindex="0"
            data-target={props.target.clone()}
            {onclick}
            {onkeydown}
        >
            <h3>{ &props.title }</h3>
            <p>{ &props.blurb }</p>
        </div>
    }
}

#[function_component(NavCards)]
pub fn nav_cards() -> Html {
    html! {
        <div class="cards__row">
            <NavCard title="Le confezioni" blurb="Da 6, 11 o 24 uova" target="#confezioni" track_name="nav_packs" />
            <NavCard title="Domande" blurb="Consegna, pagamento, freschezza" target="#faq" track_name="nav_faq" />
            <NavCard title="Ordina" blurb="Prenota per sabato" target="#ordina" track_name="nav_order" />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TrackedLinkProps {
    pub href: AttrValue,
    pub name: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// An anchor that reports `click {name}` before following its href.
#[function_component(TrackedLink)]
pub fn tracked_link(props: &TrackedLinkProps) -> Html {
    let onclick = {
        let name = props.name.clone();
        Callback::from(move |_: MouseEvent| {
            track(AnalyticsEvent::new("click").with("name", name.to_string()));
        })
    };

    html! {
        <a href={props.href.clone()} class={props.class.clone()} data-track={props.name.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn enter_and_space_activate() {
        assert!(activates("Enter"));
        assert!(activates(" "));
        assert!(!activates("Tab"));
        assert!(!activates("Escape"));
    }

    #[test]
    fn nav_event_carries_name_and_target() {
        let event = nav_click_event("nav_order", "#ordina");
        assert_eq!(event.event, "nav_click");
        assert_eq!(event.field("target"), Some(&json!("#ordina")));
    }
}
