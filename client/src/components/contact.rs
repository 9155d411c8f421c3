//! Contact section: channel cards and the message form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form state lives in a `ContactFlow` signal. Submitting hands it to
//! `state::contact::submit` with the EmailJS relay, tied to a `TaskGuard`
//! cancelled on unmount so a response or timer arriving after teardown is
//! dropped. A form that fails validation gets the reason attached to the
//! offending control through the browser's constraint validation.

use leptos::prelude::*;

use crate::content::CONTACT_CHANNELS;
use crate::state::contact::{ContactField, ContactFlow, SubmissionState};
use crate::util::task::TaskGuard;

#[component]
pub fn Contact() -> impl IntoView {
    let flow = RwSignal::new(ContactFlow::default());
    let guard = TaskGuard::new();
    {
        let guard = guard.clone();
        on_cleanup(move || guard.cancel());
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if flow.with_untracked(ContactFlow::is_sending) {
            return;
        }
        if let Some((field, reason)) = flow.with_untracked(|f| f.form().first_invalid()) {
            report_invalid(field, reason);
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            use crate::net::relay::EmailJsRelay;
            use crate::state::contact::submit;
            use crate::util::task::schedule_once;

            let guard = guard.clone();
            leptos::task::spawn_local(async move {
                let relay = EmailJsRelay::from_build_env();
                submit(flow, &relay, &guard, |delay_ms, expire| schedule_once(&guard, delay_ms, expire)).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &guard;
        }
    };

    let channels = CONTACT_CHANNELS
        .iter()
        .map(|channel| {
            view! {
                <a class="contact-card" href=channel.href>
                    <span class="contact-card__title">{channel.title}</span>
                    <span class="contact-card__value">{channel.value}</span>
                </a>
            }
        })
        .collect_view();

    view! {
        <section id="contact" class="contact">
            <div class="section__header">
                <h2 class="section__title">"Get In Touch"</h2>
                <div class="section__rule"></div>
                <p class="section__lede">
                    "Ready to collaborate or have a question? Reach out and I'll respond as soon as possible!"
                </p>
            </div>
            <div class="contact__layout">
                <div class="contact__channels">{channels}</div>
                <form class="contact-form" on:submit=on_submit>
                    <h3 class="contact-form__title">"Send Me a Message"</h3>
                    <FormInput flow field=ContactField::Name input_type="text" placeholder="Your Name"/>
                    <FormInput flow field=ContactField::Email input_type="email" placeholder="Your Email"/>
                    <FormInput flow field=ContactField::Subject input_type="text" placeholder="Subject"/>
                    <textarea
                        class="contact-form__input contact-form__input--message"
                        name=ContactField::Message.name()
                        rows="5"
                        placeholder="Your Message"
                        required=true
                        prop:value=move || flow.with(|f| f.form().message.clone())
                        on:input=move |ev| {
                            clear_invalid(&ev);
                            flow.update(|f| f.set_field(ContactField::Message, event_target_value(&ev)));
                        }
                    ></textarea>
                    <button class="contact-form__submit" type="submit" disabled=move || flow.with(ContactFlow::is_sending)>
                        {move || if flow.with(ContactFlow::is_sending) { "Sending..." } else { "Send Message" }}
                    </button>
                    <StatusBanner flow/>
                </form>
            </div>
        </section>
    }
}

#[component]
fn FormInput(
    flow: RwSignal<ContactFlow>,
    field: ContactField,
    input_type: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <input
            class="contact-form__input"
            type=input_type
            name=field.name()
            placeholder=placeholder
            required=true
            prop:value=move || flow.with(|f| f.form().field(field).to_owned())
            on:input=move |ev| {
                clear_invalid(&ev);
                flow.update(|f| f.set_field(field, event_target_value(&ev)));
            }
        />
    }
}

/// Attach `reason` to the named control and let the browser show it.
fn report_invalid(field: ContactField, reason: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast as _;

        let selector = format!(".contact-form [name=\"{}\"]", field.name());
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector(&selector).ok().flatten())
        else {
            return;
        };
        if let Some(input) = el.dyn_ref::<web_sys::HtmlInputElement>() {
            input.set_custom_validity(reason);
            let _ = input.report_validity();
        } else if let Some(area) = el.dyn_ref::<web_sys::HtmlTextAreaElement>() {
            area.set_custom_validity(reason);
            let _ = area.report_validity();
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (field, reason);
    }
}

/// Editing a control clears any reason set by `report_invalid`.
fn clear_invalid(ev: &leptos::ev::Event) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast as _;

        let Some(target) = ev.target() else {
            return;
        };
        if let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>() {
            input.set_custom_validity("");
        } else if let Some(area) = target.dyn_ref::<web_sys::HtmlTextAreaElement>() {
            area.set_custom_validity("");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ev;
    }
}

/// Success or failure message for the last attempt, with a manual dismiss.
#[component]
fn StatusBanner(flow: RwSignal<ContactFlow>) -> impl IntoView {
    move || {
        let (modifier, text) = match flow.with(|f| f.state().clone()) {
            SubmissionState::Idle | SubmissionState::Sending => return None,
            SubmissionState::Succeeded => (
                "contact-status--success",
                "Thanks! Your message has been sent successfully. I'll respond soon.".to_owned(),
            ),
            SubmissionState::Failed(reason) => ("contact-status--error", reason),
        };
        Some(view! {
            <div class=format!("contact-status {modifier}") role="status">
                <span>{text}</span>
                <button
                    class="contact-status__dismiss"
                    type="button"
                    aria-label="Dismiss"
                    on:click=move |_| flow.update(ContactFlow::dismiss)
                >
                    "✕"
                </button>
            </div>
        })
    }
}
