use std::cell::RefCell;
use std::rc::Rc;

use chrono::{Datelike, Local, Utc};
use yew::prelude::*;
use yew_hooks::use_mount;

use super::faq::Faq;
use crate::analytics::{track, AnalyticsEvent, DataLayer};
use crate::animation::{tick, Animator, PageVariant};
use crate::audio::{SoundBoard, WebAudio};
use crate::components::hero::Hero;
use crate::components::modal::{Modal, ModalState};
use crate::components::nav_cards::TrackedLink;
use crate::components::packs::PackSection;
use crate::components::preorder_form::PreorderFormView;
use crate::config;
use crate::dom::{DomSurface, FrameLoop};
use crate::preorder::{select_pack, Field, LocalStore, PackSource, PreorderForm};

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub variant: PageVariant,
}

/// Starts the reveal for `variant` and keeps it running while mounted.
#[hook]
fn use_reveal(variant: PageVariant, sound: Rc<RefCell<SoundBoard>>) {
    use_effect_with_deps(
        move |variant| {
            let spec = variant.spec();
            log::info!("starting {} reveal", spec.name);
            let frame_loop = DomSurface::bind(&spec).map(|mut surface| {
                let mut animator = Animator::new(spec);
                FrameLoop::start(move || {
                    let mut sound = sound.borrow_mut();
                    tick(&mut animator, &mut surface, &DataLayer, &mut *sound);
                })
            });
            move || {
                if let Some(frame_loop) = frame_loop {
                    frame_loop.stop();
                }
            }
        },
        variant,
    );
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let form = use_state(PreorderForm::default);
    let modal = use_state(ModalState::default);
    let sound = use_mut_ref(SoundBoard::<WebAudio>::default);
    let sound_on = use_state(|| false);

    use_reveal(props.variant, sound.clone());

    let on_pack = {
        let form = form.clone();
        Callback::from(move |(value, source): (String, PackSource)| {
            let mut next = (*form).clone();
            select_pack(&mut next.pack, &value, source, &DataLayer);
            form.set(next);
        })
    };

    {
        let on_pack = on_pack.clone();
        let pack = form.pack.clone();
        use_mount(move || on_pack.emit((pack, PackSource::Init)));
    }

    let on_field = {
        let form = form.clone();
        Callback::from(move |(field, value): (Field, String)| {
            let mut next = (*form).clone();
            next.set(field, value);
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let modal = modal.clone();
        Callback::from(move |_| {
            let submission = form.submit(&LocalStore::from_window(), &DataLayer, Utc::now().timestamp_millis());

            let mut dialog = (*modal).clone();
            dialog.open(submission.confirmation, Some(submission.mailto), &DataLayer);
            modal.set(dialog);

            let mut next = (*form).clone();
            next.reset_keeping_pack(&submission.record.pack, &DataLayer);
            form.set(next);
        })
    };

    let on_close = {
        let modal = modal.clone();
        Callback::from(move |_| {
            let mut dialog = (*modal).clone();
            dialog.close(&DataLayer);
            modal.set(dialog);
        })
    };

    let on_sound = {
        let sound = sound.clone();
        let sound_on = sound_on.clone();
        Callback::from(move |_: MouseEvent| {
            let enabled = sound.borrow_mut().toggle();
            track(AnalyticsEvent::new("sound_toggle").with("enabled", enabled));
            sound_on.set(enabled);
        })
    };

    let on_sticky = Callback::from(|_: MouseEvent| {
        track(AnalyticsEvent::new("click").with("name", "sticky_cta"));
    });

    html! {
        <div class={classes!("landing", format!("landing--{:?}", props.variant).to_lowercase())}>
            <Hero variant={props.variant} />

            if props.variant.has_sound() {
                <button
                    class={classes!("sound-toggle", (*sound_on).then_some("is-on"))}
                    aria-pressed={if *sound_on { "true" } else { "false" }}
                    onclick={on_sound}
                >
                    { if *sound_on { "🔊 Suono attivo" } else { "🔈 Attiva suono" } }
                </button>
            }

            <PackSection active={form.pack.clone()} on_select={on_pack.clone()} />
            <Faq />
            <PreorderFormView
                form={(*form).clone()}
                {on_field}
                on_pack={on_pack}
                {on_submit}
            />

            // Shown and hidden by the reveal loop, not by re-renders.
            <a
                id={config::STICKY_CTA_ID}
                class="sticky-cta"
                href={format!("#{}", config::ORDER_SECTION_ID)}
                aria-hidden="true"
                data-track="sticky_cta"
                onclick={on_sticky}
            >
                {"Prenota ora"}
            </a>

            <Modal state={(*modal).clone()} {on_close} />

            <footer class="footer">
                <p>
                    {"© "}<span id="year">{ Local::now().year().to_string() }</span>{" Cascina — uova di galline felici"}
                </p>
                <TrackedLink href={format!("mailto:{}", config::ORDER_EMAIL)} name="footer_email">
                    {"Scrivici"}
                </TrackedLink>
            </footer>
        </div>
    }
}
