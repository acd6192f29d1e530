use yew::prelude::*;

use super::nav_cards::NavCards;
use crate::animation::layer::LayerSpec;
use crate::animation::{LayerRole, PageVariant};

fn role_class(role: LayerRole) -> &'static str {
    match role {
        LayerRole::WholeObject => "layer--whole",
        LayerRole::CrackOverlay => "layer--crack",
        LayerRole::Fragments => "layer--fragments",
        LayerRole::Shell => "layer--shell",
        LayerRole::Inside => "layer--inside",
        LayerRole::Container => "layer--stage",
        LayerRole::Navigation => "layer--nav",
    }
}

fn layer_body(layer: &LayerSpec) -> Html {
    match (layer.role, layer.id) {
        (LayerRole::Navigation, "cards") => html! { <NavCards /> },
        (LayerRole::Navigation, _) => html! {
            <>
                <span class="arrow arrow--left">{"↙"}</span>
                <span class="arrow arrow--down">{"↓"}</span>
                <span class="arrow arrow--right">{"↘"}</span>
            </>
        },
        (LayerRole::Fragments, _) => {
            let count = layer.dispersal.as_ref().map_or(0, |d| d.fragments.len());
            html! {
                <>
                    { for (0..count).map(|i| html! {
                        <span class={classes!("fragment", format!("fragment--{}", i % 4))}></span>
                    }) }
                </>
            }
        }
        (LayerRole::Inside, _) => html! {
            <div class="inside__content">
                <h1>{"Uova fresche di cascina"}</h1>
                <p>{"Raccolte al mattino, a casa tua il sabato."}</p>
            </div>
        },
        _ => html! {},
    }
}

fn render_layer(layer: &LayerSpec) -> Html {
    let decorative = !matches!(layer.role, LayerRole::Inside | LayerRole::Navigation);
    html! {
        <div
            id={layer.id}
            class={classes!("layer", role_class(layer.role))}
            aria-hidden={decorative.then_some("true")}
        >
            { layer_body(layer) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub variant: PageVariant,
}

/// Render targets for the reveal; the animator only fades and moves them.
#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let spec = props.variant.spec();
    let (containers, layers): (Vec<&LayerSpec>, Vec<&LayerSpec>) = spec
        .layers
        .iter()
        .partition(|layer| layer.role == LayerRole::Container);

    let inner: Html = layers.into_iter().map(render_layer).collect();
    let body = match containers.first() {
        Some(stage) => html! {
            <div id={stage.id} class={classes!("layer", role_class(stage.role))}>{ inner }</div>
        },
        None => inner,
    };

    html! {
        <section id={spec.hero_id} class={classes!("hero", format!("hero--{}", spec.name))}>
            <div class="hero__sticky">
                { body }
            </div>
        </section>
    }
}
