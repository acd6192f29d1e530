use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::packs::{OnPack, PackChoices};
use crate::config;
use crate::preorder::{Field, PackSource, PreorderForm};

#[derive(Properties, PartialEq)]
pub struct PreorderFormProps {
    pub form: PreorderForm,
    pub on_field: Callback<(Field, String)>,
    pub on_pack: OnPack,
    pub on_submit: Callback<()>,
}

fn input_handler(on_field: &Callback<(Field, String)>, field: Field) -> Callback<InputEvent> {
    let on_field = on_field.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        on_field.emit((field, input.value()));
    })
}

#[function_component(PreorderFormView)]
pub fn preorder_form_view(props: &PreorderFormProps) -> Html {
    let form = &props.form;

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let on_note = {
        let on_field = props.on_field.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            on_field.emit((Field::Note, area.value()));
        })
    };

    let on_select = {
        let on_pack = props.on_pack.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_pack.emit((select.value(), PackSource::Select));
        })
    };

    html! {
        <section id="ordina" class="order">
            <h2>{"Prenota le tue uova"}</h2>
            <PackChoices active={form.pack.clone()} on_select={props.on_pack.clone()} />

            <form id="preorderForm" class="order__form" {onsubmit}>
                <input id="packInput" type="hidden" name="pack" value={form.pack.clone()} />

                <label>
                    {"Nome"}
                    <input name="name" required=true autocomplete="name"
                        value={form.name.clone()} oninput={input_handler(&props.on_field, Field::Name)} />
                </label>

                <label>
                    {"Email o telefono"}
                    <input name="contact" required=true
                        value={form.contact.clone()} oninput={input_handler(&props.on_field, Field::Contact)} />
                </label>

                <label>
                    {"Confezione"}
                    <select id="packSelect" name="packSelect" onchange={on_select}>
                        { for config::PACKS.iter().map(|&pack| html! {
                            <option value={pack} selected={form.pack == pack}>{ format!("Da {}", pack) }</option>
                        }) }
                    </select>
                </label>

                <label>
                    {"Quantità"}
                    <input name="qty" type="number" min="1" inputmode="numeric"
                        value={form.qty.clone()} oninput={input_handler(&props.on_field, Field::Qty)} />
                </label>

                <label>
                    {"Note"}
                    <textarea name="note" rows="3" value={form.note.clone()} oninput={on_note} />
                </label>

                <button type="submit" class="btn btn--primary">{"Invia pre-ordine"}</button>
            </form>
        </section>
    }
}
