use boutique_commerce::prelude::*;
use boutique_core::StorePage;
use boutique_observability::StructuredLogger;
use chrono::{Datelike, Utc};
use leptos::prelude::*;

#[component]
pub fn Header(page: StorePage) -> impl IntoView {
    let shop = expect_context::<RwSignal<ShopState>>();
    let badge_page = page.clone();
    let badge = move || badge_page.cart_badge(shop.with(|s| s.cart().len()));

    view! {
        <header>
            <div>
                <h1>{page.store_name}</h1>
                <p class="tagline">{page.tagline}</p>
            </div>
            <div>
                <span>{badge}</span>
            </div>
        </header>
    }
}

#[component]
pub fn About(text: String) -> impl IntoView {
    view! {
        <section class="panel about">
            <h2>"About Us"</h2>
            <p>{text}</p>
        </section>
    }
}

#[component]
pub fn Follow(handle: String) -> impl IntoView {
    view! {
        <section class="centered">
            <h2>"Follow Us"</h2>
            <p>{handle}</p>
        </section>
    }
}

/// Contact form. There is nowhere to send messages, so a valid one is logged
/// and acknowledged.
#[component]
pub fn ContactSection() -> impl IntoView {
    let logger = expect_context::<StructuredLogger>().for_component("contact");

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (status, set_status) = signal(None::<Result<String, String>>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = ContactForm::new(
            name.get_untracked(),
            email.get_untracked(),
            message.get_untracked(),
        );
        match form.validate() {
            Ok(valid) => {
                logger
                    .info_builder("contact message received")
                    .field("name", valid.name.clone())
                    .field("email", valid.email.clone())
                    .field_i64("length", valid.message.chars().count() as i64)
                    .emit();
                set_name.set(String::new());
                set_email.set(String::new());
                set_message.set(String::new());
                set_status.set(Some(Ok(valid.acknowledgement())));
            }
            Err(err) => {
                logger
                    .debug_builder("contact form rejected")
                    .field("error", err.to_string())
                    .emit();
                set_status.set(Some(Err(err.to_string())));
            }
        }
    };

    view! {
        <section class="panel">
            <h2>"Contact Us"</h2>
            <form class="contact" on:submit=on_submit>
                <input
                    placeholder="Your Name"
                    prop:value=name
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <input
                    placeholder="Your Email"
                    type="email"
                    prop:value=email
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <textarea
                    placeholder="Your Message"
                    rows="4"
                    prop:value=message
                    on:input=move |ev| set_message.set(event_target_value(&ev))
                ></textarea>
                <button type="submit" class="btn">"Send Message"</button>
            </form>
            {move || match status.get() {
                Some(Ok(ack)) => view! { <p class="status ok">{ack}</p> }.into_any(),
                Some(Err(reason)) => view! { <p class="status">{reason}</p> }.into_any(),
                None => ().into_any(),
            }}
        </section>
    }
}

#[component]
pub fn Footer(page: StorePage) -> impl IntoView {
    let line = page.footer(Utc::now().year());
    view! {
        <footer>
            <p>{line}</p>
        </footer>
    }
}
