//! Payment initiation state machine.
//!
//! ```text
//!            submit()                 Ok(id)
//!   Idle ───────────────► Submitting ───────► Succeeded ──► Idle
//!    ▲                        │  │
//!    │         Err(e)         │  │ cancel token fired
//!    └──── Failed ◄───────────┘  └──────────────────────────► Idle
//! ```
//!
//! Everything runs on one cooperative event loop. The only suspension point is
//! the gateway's tokenization future; while it is pending further submissions
//! are rejected rather than queued.

use std::cell::{Cell, RefCell};
use std::pin::pin;
use std::rc::Rc;

use boutique_observability::StructuredLogger;
use futures::future::{select, Either};
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use crate::checkout::{PaymentGateway, PaymentNotifier, PaymentOutcome};

/// Where a checkout attempt currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentPhase {
    /// No tokenization in flight.
    #[default]
    Idle,
    /// Waiting on the SDK.
    Submitting,
    /// The SDK returned a payment method; about to return to idle.
    Succeeded,
    /// The SDK returned an error; about to return to idle.
    Failed,
}

impl PaymentPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentPhase::Idle => "idle",
            PaymentPhase::Submitting => "submitting",
            PaymentPhase::Succeeded => "succeeded",
            PaymentPhase::Failed => "failed",
        }
    }
}

/// What a call to [`PaymentAdapter::submit`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// The SDK is not initialized yet; nothing happened.
    NotReady,
    /// Another submission is still pending; nothing happened.
    InFlight,
    /// The cancellation token fired before the SDK answered.
    Cancelled,
    /// The SDK answered.
    Completed(PaymentOutcome),
}

type PhaseObserver = Box<dyn Fn(PaymentPhase)>;

/// Drives one payment form.
pub struct PaymentAdapter<G: PaymentGateway, N: PaymentNotifier> {
    gateway: RefCell<Option<Rc<G>>>,
    notifier: N,
    phase: Cell<PaymentPhase>,
    observer: Option<PhaseObserver>,
    logger: StructuredLogger,
}

impl<G: PaymentGateway, N: PaymentNotifier> PaymentAdapter<G, N> {
    /// Create an adapter with no SDK attached yet.
    pub fn new(notifier: N, logger: &StructuredLogger) -> Self {
        Self {
            gateway: RefCell::new(None),
            notifier,
            phase: Cell::new(PaymentPhase::Idle),
            observer: None,
            logger: logger.for_component("payment"),
        }
    }

    /// Call `observer` on every phase transition.
    pub fn with_phase_observer(mut self, observer: impl Fn(PaymentPhase) + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Attach the initialized SDK. Submissions are no-ops until this happens.
    pub fn attach(&self, gateway: G) {
        *self.gateway.borrow_mut() = Some(Rc::new(gateway));
        self.logger.debug("payment sdk ready");
    }

    pub fn is_ready(&self) -> bool {
        self.gateway.borrow().is_some()
    }

    pub fn phase(&self) -> PaymentPhase {
        self.phase.get()
    }

    /// Whether the pay button should be enabled.
    pub fn can_submit(&self) -> bool {
        self.is_ready() && self.phase.get() == PaymentPhase::Idle
    }

    /// Tokenize the card held by `card`, unless `cancel` fires first.
    pub async fn submit(&self, card: &G::CardInput, cancel: &CancellationToken) -> Submission {
        let Some(gateway) = self.gateway.borrow().clone() else {
            self.logger.debug("submit ignored: payment sdk not ready");
            return Submission::NotReady;
        };
        if self.phase.get() == PaymentPhase::Submitting {
            self.logger.debug("submit ignored: tokenization already in flight");
            return Submission::InFlight;
        }
        if cancel.is_cancelled() {
            return Submission::Cancelled;
        }

        let guard = SubmittingGuard::enter(self);
        self.logger.info("creating payment method");

        let call = pin!(gateway.create_payment_method(card));
        let cancelled = pin!(cancel.cancelled());
        let result = match select(call, cancelled).await {
            Either::Left((result, _)) => result,
            Either::Right(_) => {
                self.logger.warn("payment method creation cancelled");
                drop(guard);
                return Submission::Cancelled;
            }
        };

        let outcome = match result {
            Ok(id) => {
                self.transition(PaymentPhase::Succeeded);
                self.logger
                    .info_builder("payment method created")
                    .field("payment_method", id.as_str())
                    .emit();
                self.notifier.payment_method_created(&id);
                PaymentOutcome::Succeeded(id)
            }
            Err(err) => {
                self.transition(PaymentPhase::Failed);
                self.logger
                    .error_with("payment method creation failed", &[("error", &err)]);
                PaymentOutcome::Failed(err)
            }
        };
        drop(guard);
        Submission::Completed(outcome)
    }

    fn transition(&self, phase: PaymentPhase) {
        if self.phase.replace(phase) != phase {
            self.logger
                .debug_builder("payment phase changed")
                .field("phase", phase.as_str())
                .emit();
            if let Some(observer) = &self.observer {
                observer(phase);
            }
        }
    }
}

/// Holds the adapter in `Submitting` and returns it to `Idle` when dropped,
/// including when the submit future itself is dropped mid-flight.
struct SubmittingGuard<'a, G: PaymentGateway, N: PaymentNotifier> {
    adapter: &'a PaymentAdapter<G, N>,
}

impl<'a, G: PaymentGateway, N: PaymentNotifier> SubmittingGuard<'a, G, N> {
    fn enter(adapter: &'a PaymentAdapter<G, N>) -> Self {
        adapter.transition(PaymentPhase::Submitting);
        Self { adapter }
    }
}

impl<G: PaymentGateway, N: PaymentNotifier> Drop for SubmittingGuard<'_, G, N> {
    fn drop(&mut self) {
        self.adapter.transition(PaymentPhase::Idle);
    }
}
