use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use boutique_commerce::prelude::*;
use boutique_core::StoreConfig;
use boutique_observability::StructuredLogger;
use leptos::prelude::*;
use tokio_util::sync::CancellationToken;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::stripe::{CardElement, StripeGateway, StripeSdk};
use crate::sdk_retry::SdkRetry;

/// Cart entries, the total, and the checkout form once something is in the cart.
#[component]
pub fn CartSummary() -> impl IntoView {
    let shop = expect_context::<RwSignal<ShopState>>();
    let lines = move || {
        shop.with(|s| {
            s.cart()
                .entries()
                .iter()
                .map(|entry| (entry.id.clone(), entry.summary_line()))
                .collect::<Vec<_>>()
        })
    };
    let has_items = move || shop.with(|s| s.checkout_summary().is_visible());

    view! {
        <section class="panel">
            <h2>"Shopping Cart"</h2>
            <ul>
                <For each=lines key=|(id, _)| id.clone() let:line>
                    <li>{line.1}</li>
                </For>
            </ul>
            <Show when=has_items>
                <CheckoutForm />
            </Show>
        </section>
    }
}

/// Shows the created payment method id in a browser alert.
struct AlertNotifier;

impl PaymentNotifier for AlertNotifier {
    fn payment_method_created(&self, id: &PaymentMethodId) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(&format!("Payment method created: {id}"));
        }
    }
}

#[component]
fn CheckoutForm() -> impl IntoView {
    let shop = expect_context::<RwSignal<ShopState>>();
    let logger = expect_context::<StructuredLogger>();
    let config = expect_context::<StoreConfig>();
    let timeout = config.tokenization_timeout();

    let (phase, set_phase) = signal(PaymentPhase::Idle);
    let (ready, set_ready) = signal(false);
    let (status, set_status) = signal(String::new());

    let adapter = Rc::new(
        PaymentAdapter::<StripeGateway, _>::new(AlertNotifier, &logger)
            .with_phase_observer(move |p| set_phase.set(p)),
    );
    let card: Rc<RefCell<Option<CardElement>>> = Rc::new(RefCell::new(None));
    let card_host = NodeRef::<leptos::html::Div>::new();

    // Cancels every submission still pending when the form goes away.
    let unmounted = CancellationToken::new();
    on_cleanup({
        let unmounted = unmounted.clone();
        move || unmounted.cancel()
    });

    Effect::new({
        let adapter = adapter.clone();
        let card = card.clone();
        let unmounted = unmounted.clone();
        move |_| {
            let Some(host) = card_host.get() else {
                return;
            };
            if adapter.is_ready() {
                return;
            }
            let key = match config.publishable_key() {
                Ok(key) => key,
                Err(err) => {
                    logger.error_with("payment form disabled", &[("error", &err)]);
                    return;
                }
            };
            let host: web_sys::Element = host.into();
            if mount_card(&adapter, &card, &host, &key, &logger) {
                set_ready.set(true);
                return;
            }

            // Stripe.js may still be loading; try again for a while.
            set_status.set("Loading the payment form...".to_string());
            let attempt: Rc<dyn Fn() -> bool> = Rc::new({
                let adapter = adapter.clone();
                let card = card.clone();
                let logger = logger.clone();
                let unmounted = unmounted.clone();
                move || {
                    if unmounted.is_cancelled() {
                        return true;
                    }
                    let attached = mount_card(&adapter, &card, &host, &key, &logger);
                    if attached {
                        set_ready.set(true);
                        set_status.set(String::new());
                    }
                    attached
                }
            });
            retry_mount(attempt, SdkRetry::DEFAULT, logger.clone(), set_status);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(element) = card.borrow().clone() else {
            return;
        };

        let adapter = adapter.clone();
        let cancel = unmounted.child_token();
        if let Some(timeout) = timeout {
            cancel_after(&cancel, timeout);
        }
        set_status.set(String::new());

        spawn_local(async move {
            match adapter.submit(&element, &cancel).await {
                Submission::Completed(PaymentOutcome::Failed(err)) => {
                    set_status.set(err.user_message().to_string());
                }
                Submission::Cancelled => {
                    set_status.set("Payment timed out. Please try again.".to_string());
                }
                _ => {}
            }
        });
    };

    let pay_label = move || shop.with(|s| s.checkout_summary().pay_label());
    let disabled = move || !ready.get() || phase.get() == PaymentPhase::Submitting;

    view! {
        <form class="checkout" on:submit=on_submit>
            <div id="card-element" node_ref=card_host></div>
            <button type="submit" class="btn pay" disabled=disabled>
                {pay_label}
            </button>
            <p class="status">{move || status.get()}</p>
        </form>
    }
}

/// Create and mount the card widget. False while Stripe.js is not loaded.
fn mount_card(
    adapter: &PaymentAdapter<StripeGateway, AlertNotifier>,
    card: &RefCell<Option<CardElement>>,
    host: &web_sys::Element,
    key: &PublishableKey,
    logger: &StructuredLogger,
) -> bool {
    let Some(gateway) = StripeSdk::new(logger).initialize(key) else {
        return false;
    };
    let element = gateway.create_card();
    element.mount(host);
    *card.borrow_mut() = Some(element);
    adapter.attach(gateway);
    true
}

/// Run `attempt` on a timer until it succeeds or `retry` is spent.
fn retry_mount(
    attempt: Rc<dyn Fn() -> bool>,
    retry: SdkRetry,
    logger: StructuredLogger,
    set_status: WriteSignal<String>,
) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let delay = retry.delay_ms();
    let callback = Closure::once_into_js(move || {
        if attempt() {
            return;
        }
        match retry.next() {
            Some(next) => retry_mount(attempt, next, logger, set_status),
            None => {
                logger.warn("Stripe.js never loaded; payment form disabled");
                set_status.set("Payments are unavailable right now.".to_string());
            }
        }
    });
    let _ = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay);
}

/// Cancel `token` after `timeout` unless it finishes first.
fn cancel_after(token: &CancellationToken, timeout: Duration) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let token = token.clone();
    let callback = Closure::once_into_js(move || token.cancel());
    let millis = i32::try_from(timeout.as_millis()).unwrap_or(i32::MAX);
    let _ = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), millis);
}
