use boutique_core::prelude::*;
use leptos::prelude::*;

use crate::settings;

mod catalog;
mod checkout;
mod console;
mod sections;
mod stripe;

use catalog::{FilterSelect, ProductGrid};
use checkout::CartSummary;
use console::ConsoleSink;
use sections::{About, ContactSection, Follow, Footer, Header};

/// Build the session from the embedded config and mount the page.
pub fn start() {
    console_error_panic_hook::set_once();

    let session = match settings::store_config().and_then(|config| {
        StoreApp::new(config).with_sink(ConsoleSink).build()
    }) {
        Ok(session) => session,
        Err(err) => {
            web_sys::console::error_1(&format!("storefront failed to start: {err}").into());
            return;
        }
    };

    mount_to_body(move || view! { <App session=session /> });
}

#[component]
fn App(session: StoreSession) -> impl IntoView {
    let StoreSession {
        config,
        logger,
        shop,
        page,
    } = session;

    provide_context(RwSignal::new(shop));
    provide_context(logger);
    provide_context(config);

    let arrivals_heading = page.arrivals_heading.clone();
    let about = page.about.clone();
    let social = page.social.clone();
    let header = page.clone();

    view! {
        <Header page=header />
        <main>
            <section class="centered">
                <h2>{arrivals_heading}</h2>
                <FilterSelect />
                <ProductGrid />
            </section>
            <CartSummary />
            <About text=about />
            <Follow handle=social />
            <ContactSection />
        </main>
        <Footer page=page />
    }
}
