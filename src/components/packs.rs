use yew::prelude::*;

use crate::config;
use crate::preorder::PackSource;

pub type OnPack = Callback<(String, PackSource)>;

fn blurb(pack: &str) -> &'static str {
    match pack {
        "6" => "Per provarle",
        "11" => "La scelta della settimana",
        _ => "Per famiglie e pasticceri",
    }
}

#[derive(Properties, PartialEq)]
pub struct PackSectionProps {
    pub active: String,
    pub on_select: OnPack,
}

/// Packaging overview; each card preselects its pack in the order form.
#[function_component(PackSection)]
pub fn pack_section(props: &PackSectionProps) -> Html {
    html! {
        <section id="confezioni" class="packs">
            <h2>{"Le confezioni"}</h2>
            <div class="packs__grid">
                { for config::PACKS.iter().map(|&pack| {
                    let onclick = {
                        let on_select = props.on_select.clone();
                        Callback::from(move |_: MouseEvent| {
                            on_select.emit((pack.to_string(), PackSource::PackSection));
                        })
                    };
                    html! {
                        <article class={classes!("pack", (props.active == pack).then_some("is-active"))}>
                            <h3>{ format!("Confezione da {}", pack) }</h3>
                            <p>{ blurb(pack) }</p>
                            <a class="btn" href="#ordina" data-pack={pack} {onclick}>{"Scegli"}</a>
                        </article>
                    }
                }) }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct PackChoicesProps {
    pub active: String,
    pub on_select: OnPack,
}

/// Quick-select buttons next to the order form.
#[function_component(PackChoices)]
pub fn pack_choices(props: &PackChoicesProps) -> Html {
    html! {
        <div class="choices" role="group" aria-label="Confezione">
            { for config::PACKS.iter().map(|&pack| {
                let onclick = {
                    let on_select = props.on_select.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        on_select.emit((pack.to_string(), PackSource::Choice));
                    })
                };
                html! {
                    <button
                        type="button"
                        class={classes!("choice", (props.active == pack).then_some("active"))}
                        data-pack={pack}
                        {onclick}
                    >
                        { pack }
                    </button>
                }
            }) }
        </div>
    }
}
