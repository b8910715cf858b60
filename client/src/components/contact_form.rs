//! Contact form with inline validation and a self-clearing success notice.
//!
//! SYSTEM CONTEXT
//! ==============
//! Nothing is sent anywhere: a valid submission resets the fields and shows
//! a thank-you line for a few seconds. The component owns the expiry timer
//! and cancels it when it unmounts.

use leptos::prelude::*;

use crate::state::contact::{ContactField, ContactFormState};
use crate::util::notice_timer::{NoticeGuard, schedule_expiry};

#[component]
pub fn ContactForm() -> impl IntoView {
    let contact = expect_context::<RwSignal<ContactFormState>>();
    let guard = NoticeGuard::default();

    on_cleanup({
        let guard = guard.clone();
        move || {
            guard.cancel();
            contact.try_update(ContactFormState::cancel_notice);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(Ok(ticket)) = contact.try_update(ContactFormState::submit) {
            schedule_expiry(contact, ticket, guard.clone());
        }
    };

    let value_of = move |field: ContactField| contact.with(|form| form.record.get(field).to_owned());

    view! {
        <section id="contact" class="contact">
            <h2 class="contact__title">"Contact"</h2>
            <p class="contact__subtitle">"Have a message to send? Fill the form below."</p>

            <form class="contact-form" on:submit=on_submit>
                <div class="contact-form__field">
                    <label class="contact-form__label" for="contact-name">"Name"</label>
                    <input
                        id="contact-name"
                        class="contact-form__input"
                        name="name"
                        required
                        placeholder="Your name"
                        prop:value=move || value_of(ContactField::Name)
                        on:input=move |ev| contact.update(|form| form.edit(ContactField::Name, event_target_value(&ev)))
                    />
                </div>

                <div class="contact-form__field">
                    <label class="contact-form__label" for="contact-email">"Email"</label>
                    <input
                        id="contact-email"
                        class="contact-form__input"
                        name="email"
                        type="email"
                        required
                        placeholder="you@domain.com"
                        prop:value=move || value_of(ContactField::Email)
                        on:input=move |ev| contact.update(|form| form.edit(ContactField::Email, event_target_value(&ev)))
                    />
                </div>

                <div class="contact-form__field contact-form__field--wide">
                    <label class="contact-form__label" for="contact-message">"Message"</label>
                    <textarea
                        id="contact-message"
                        class="contact-form__input"
                        name="message"
                        rows="5"
                        required
                        placeholder="Your message"
                        prop:value=move || value_of(ContactField::Message)
                        on:input=move |ev| {
                            contact.update(|form| form.edit(ContactField::Message, event_target_value(&ev)));
                        }
                    ></textarea>
                </div>

                <div class="contact-form__actions">
                    <button type="submit" class="btn contact-form__submit">"Send message"</button>
                    <div class="contact-form__success" role="status">
                        {move || contact.with(|form| form.status.success_text())}
                    </div>
                    <div class="contact-form__error" role="alert">
                        {move || contact.with(|form| form.status.error_text())}
                    </div>
                </div>
            </form>
        </section>
    }
}
