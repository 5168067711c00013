//! End-to-end flows through the shop store and the payment adapter.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use async_trait::async_trait;
use boutique_commerce::prelude::*;
use boutique_observability::{LogLevel, MemorySink, SessionId, StructuredLogger};
use tokio_util::sync::CancellationToken;

/// Card widget stand-in. The adapter only ever sees this handle.
struct CardWidget {
    mount_id: &'static str,
}

/// Gateway answering from a scripted list of replies.
struct ScriptedGateway {
    replies: RefCell<Vec<Result<PaymentMethodId, TokenizationError>>>,
    seen_mounts: RefCell<Vec<String>>,
}

impl ScriptedGateway {
    fn new(replies: Vec<Result<PaymentMethodId, TokenizationError>>) -> Self {
        Self {
            replies: RefCell::new(replies),
            seen_mounts: RefCell::new(Vec::new()),
        }
    }
}

#[async_trait(?Send)]
impl PaymentGateway for ScriptedGateway {
    type CardInput = CardWidget;

    async fn create_payment_method(
        &self,
        card: &CardWidget,
    ) -> Result<PaymentMethodId, TokenizationError> {
        self.seen_mounts.borrow_mut().push(card.mount_id.to_string());
        let mut replies = self.replies.borrow_mut();
        if replies.is_empty() {
            return Err(TokenizationError::Sdk("script exhausted".to_string()));
        }
        replies.remove(0)
    }
}

/// SDK that becomes available only once `loaded` is set.
struct LazySdk {
    loaded: Cell<bool>,
    replies: Vec<Result<PaymentMethodId, TokenizationError>>,
}

impl PaymentSdk for LazySdk {
    type Gateway = ScriptedGateway;

    fn initialize(&self, _key: &PublishableKey) -> Option<ScriptedGateway> {
        self.loaded
            .get()
            .then(|| ScriptedGateway::new(self.replies.clone()))
    }
}

fn logger(sink: &MemorySink) -> StructuredLogger {
    StructuredLogger::new(SessionId::from_string("flow"))
        .with_min_level(LogLevel::Debug)
        .with_sink(sink.clone())
}

fn shop_with_belt_and_dress(logger: &StructuredLogger) -> ShopState {
    let mut shop = ShopState::new(Catalog::boutique(), logger);
    shop.select_filter("Accessories");
    let visible: Vec<_> = shop.visible_products().iter().map(|p| p.title.clone()).collect();
    assert_eq!(visible, ["Turquoise Concho Belt"]);

    let belt = shop.visible_products()[0].id.clone();
    shop.add_to_cart(&belt);
    shop.add_to_cart(&ProductId::new("boho-western-dress"));
    shop
}

#[test]
fn filter_then_add_produces_expected_total() {
    let sink = MemorySink::new();
    let shop = shop_with_belt_and_dress(&logger(&sink));

    assert_eq!(shop.cart().len(), 2);
    assert_eq!(shop.cart().total_display(), "$116.00");
    assert_eq!(shop.checkout_summary().pay_label(), "Pay $116.00");
}

#[test]
fn total_always_matches_entries() {
    let sink = MemorySink::new();
    let mut shop = ShopState::new(Catalog::boutique(), &logger(&sink));
    let ids: Vec<_> = shop.catalog().products().iter().map(|p| p.id.clone()).collect();

    let mut expected = 0;
    for round in 0..25 {
        let id = &ids[(round * 7) % ids.len()];
        let entry = shop.add_to_cart(id).unwrap();
        expected += entry.price.amount_cents;

        let summed: i64 = shop.cart().entries().iter().map(|e| e.price.amount_cents).sum();
        assert_eq!(shop.cart().total().amount_cents, summed);
        assert_eq!(shop.cart().total().amount_cents, expected);
        assert_eq!(shop.cart().len(), round + 1);
    }
}

#[tokio::test]
async fn tokenization_error_leaves_cart_unchanged() {
    let sink = MemorySink::new();
    let logger = logger(&sink);
    let shop = shop_with_belt_and_dress(&logger);
    let cart_before = shop.cart().clone();

    let notified = Rc::new(Cell::new(0));
    let counter = notified.clone();
    let adapter: PaymentAdapter<ScriptedGateway, _> = PaymentAdapter::new(
        move |_: &PaymentMethodId| counter.set(counter.get() + 1),
        &logger,
    );
    adapter.attach(ScriptedGateway::new(vec![Err(TokenizationError::card(
        "incomplete_number",
        "Your card number is incomplete.",
    ))]));

    let card = CardWidget { mount_id: "#card-element" };
    let result = adapter.submit(&card, &CancellationToken::new()).await;

    let err = match result {
        Submission::Completed(PaymentOutcome::Failed(err)) => err,
        other => panic!("expected a failed outcome, got {other:?}"),
    };
    assert_eq!(err.user_message(), "Your card number is incomplete.");
    assert_eq!(adapter.phase(), PaymentPhase::Idle);
    assert_eq!(notified.get(), 0);
    assert_eq!(shop.cart(), &cart_before);
    assert_eq!(sink.at_level(LogLevel::Error).len(), 1);
}

#[tokio::test]
async fn tokenization_success_notifies_once_and_keeps_cart() {
    let sink = MemorySink::new();
    let logger = logger(&sink);
    let shop = shop_with_belt_and_dress(&logger);
    let cart_before = shop.cart().clone();

    let notified = Rc::new(RefCell::new(Vec::new()));
    let seen = notified.clone();
    let adapter: PaymentAdapter<ScriptedGateway, _> = PaymentAdapter::new(
        move |id: &PaymentMethodId| seen.borrow_mut().push(id.clone()),
        &logger,
    );

    let sdk = LazySdk {
        loaded: Cell::new(false),
        replies: vec![Ok(PaymentMethodId::new("pm_1Nf3")), Ok(PaymentMethodId::new("pm_2Qx9"))],
    };
    let key = PublishableKey::parse("pk_test_12345").unwrap();
    let card = CardWidget { mount_id: "#card-element" };
    let cancel = CancellationToken::new();

    // The SDK script has not loaded yet: the pay button is inert.
    assert!(sdk.initialize(&key).is_none());
    assert_eq!(adapter.submit(&card, &cancel).await, Submission::NotReady);

    sdk.loaded.set(true);
    adapter.attach(sdk.initialize(&key).unwrap());

    let first = adapter.submit(&card, &cancel).await;
    assert_eq!(
        first,
        Submission::Completed(PaymentOutcome::Succeeded(PaymentMethodId::new("pm_1Nf3")))
    );
    assert_eq!(notified.borrow().len(), 1);

    let second = adapter.submit(&card, &cancel).await;
    assert!(matches!(second, Submission::Completed(PaymentOutcome::Succeeded(_))));
    assert_eq!(
        *notified.borrow(),
        [PaymentMethodId::new("pm_1Nf3"), PaymentMethodId::new("pm_2Qx9")]
    );

    assert_eq!(shop.cart(), &cart_before);
    assert_eq!(adapter.phase(), PaymentPhase::Idle);
}
