//! Payment checkout contract.
//!
//! The real payment widget is an external SDK. This module fixes the shape of
//! what the application hands it and guarantees that each attempt resolves
//! to exactly one of "succeeded with a reference" or "closed by the payer".

use crate::error::{PanelError, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// A purchasable plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionPlan {
    pub id: String,
    pub name: String,
    /// Price in the currency's minor unit (cents, kobo, ...)
    pub amount_minor_units: u64,
    /// ISO 4217 code
    pub currency: String,
}

/// Returns the built-in plan catalog.
pub fn default_plans() -> Vec<SubscriptionPlan> {
    vec![
        SubscriptionPlan {
            id: "single".to_string(),
            name: "Single Session".to_string(),
            amount_minor_units: 500_000,
            currency: "NGN".to_string(),
        },
        SubscriptionPlan {
            id: "monthly".to_string(),
            name: "Monthly Unlimited".to_string(),
            amount_minor_units: 1_500_000,
            currency: "NGN".to_string(),
        },
    ]
}

/// Input handed to the payment widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub payer_email: String,
    pub amount_minor_units: u64,
    pub payer_name: String,
    pub plan_id: String,
}

impl PaymentRequest {
    /// Builds a request for `plan`.
    pub fn for_plan(
        plan: &SubscriptionPlan,
        payer_email: impl Into<String>,
        payer_name: impl Into<String>,
    ) -> Self {
        Self {
            payer_email: payer_email.into(),
            amount_minor_units: plan.amount_minor_units,
            payer_name: payer_name.into(),
            plan_id: plan.id.clone(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let email = self.payer_email.trim();
        let well_formed = email
            .split_once('@')
            .is_some_and(|(user, domain)| !user.is_empty() && domain.contains('.'));
        if !well_formed {
            return Err(PanelError::validation(format!(
                "invalid payer email '{}'",
                self.payer_email
            )));
        }
        if self.amount_minor_units == 0 {
            return Err(PanelError::validation("payment amount must be positive"));
        }
        if self.plan_id.trim().is_empty() {
            return Err(PanelError::validation("plan id must not be empty"));
        }
        Ok(())
    }
}

/// How a single payment attempt ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PaymentOutcome {
    /// Payment captured; `reference` identifies the transaction.
    Success { reference: String },
    /// The payer dismissed the widget.
    Closed,
}

/// External payment widget.
#[async_trait::async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Runs one attempt. `Err` means the gateway itself failed.
    async fn initiate(&self, request: &PaymentRequest) -> Result<PaymentOutcome>;
}

/// Drives one checkout attempt against a gateway.
pub struct Checkout<'a> {
    gateway: &'a dyn PaymentGateway,
}

impl<'a> Checkout<'a> {
    pub fn new(gateway: &'a dyn PaymentGateway) -> Self {
        Self { gateway }
    }

    /// Validates `request`, runs the attempt and calls exactly one of
    /// `on_success` / `on_close`.
    ///
    /// Validation and gateway failures call neither and are returned for the
    /// caller to display. They are not retried.
    pub async fn run<S, C>(
        &self,
        request: &PaymentRequest,
        on_success: S,
        on_close: C,
    ) -> Result<PaymentOutcome>
    where
        S: FnOnce(&str),
        C: FnOnce(),
    {
        request.validate()?;

        let outcome = self.gateway.initiate(request).await.map_err(|e| {
            warn!(plan_id = %request.plan_id, error = %e, "Payment attempt failed");
            match e {
                PanelError::Payment(_) => e,
                other => PanelError::payment(other.to_string()),
            }
        })?;

        match &outcome {
            PaymentOutcome::Success { reference } => {
                info!(plan_id = %request.plan_id, reference = %reference, "Payment succeeded");
                on_success(reference);
            }
            PaymentOutcome::Closed => {
                info!(plan_id = %request.plan_id, "Payment closed by payer");
                on_close();
            }
        }

        Ok(outcome)
    }
}
