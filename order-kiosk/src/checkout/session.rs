//! Checkout session state machine
//!
//! ```text
//!            validate ok                 submitter ok
//! Editing ──────────────→ Processing ──────────────→ Placed
//!    ↑                        │
//!    └──── submitter error ───┤
//!                             │ cancelled
//!                             └──────────────→ Abandoned
//! ```
//!
//! While `Processing`, the ledger and form are frozen. Entering `Placed`
//! consumes the ledger.

use super::error::{CheckoutError, SubmissionError, ValidationError};
use super::submitter::{OrderSubmitter, SubmissionAck};
use crate::cart::{CartLedger, CartLine, CartTotals, TaxRate, cart_lines};
use crate::catalog::Catalog;
use crate::menu::CheckoutHandoff;
use shared::error::AppError;
use shared::order::{
    CheckoutOutcome, CheckoutStatus, OrderDraft, OrderForm, OrderReceipt, PaymentMethod,
    ReadyWindow, normalize_optional,
};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Checkout pricing and ready-time parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckoutSettings {
    pub tax_rate: TaxRate,
    pub ready_min_minutes: u32,
    pub ready_max_minutes: u32,
}

impl Default for CheckoutSettings {
    fn default() -> Self {
        Self {
            tax_rate: TaxRate::default(),
            ready_min_minutes: 15,
            ready_max_minutes: 20,
        }
    }
}

/// Checkout stage: owns its copy of the ledger, the form and the payment choice
#[derive(Debug)]
pub struct CheckoutSession {
    catalog: Arc<Catalog>,
    ledger: CartLedger,
    form: OrderForm,
    payment_method: Option<PaymentMethod>,
    status: CheckoutStatus,
    settings: CheckoutSettings,
    /// Draft in flight while `Processing`
    pending: Option<OrderDraft>,
    receipt: Option<OrderReceipt>,
    /// Last rejection, cleared on the next submit attempt
    last_rejection: Option<AppError>,
}

impl CheckoutSession {
    pub fn new(handoff: CheckoutHandoff, settings: CheckoutSettings) -> Self {
        let CheckoutHandoff { ledger, catalog } = handoff;
        tracing::debug!(
            items = ledger.item_count(),
            lines = ledger.len(),
            "Checkout session opened"
        );
        Self {
            catalog,
            ledger,
            form: OrderForm::default(),
            payment_method: None,
            status: CheckoutStatus::Editing,
            settings,
            pending: None,
            receipt: None,
            last_rejection: None,
        }
    }

    // ========== Queries ==========

    pub fn status(&self) -> CheckoutStatus {
        self.status
    }

    pub fn ledger(&self) -> &CartLedger {
        &self.ledger
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn form(&self) -> &OrderForm {
        &self.form
    }

    pub fn payment_method(&self) -> Option<PaymentMethod> {
        self.payment_method
    }

    pub fn receipt(&self) -> Option<&OrderReceipt> {
        self.receipt.as_ref()
    }

    pub fn last_rejection(&self) -> Option<&AppError> {
        self.last_rejection.as_ref()
    }

    /// Order summary rows
    pub fn lines(&self) -> Vec<CartLine<'_>> {
        cart_lines(&self.ledger, &self.catalog)
    }

    pub fn totals(&self) -> CartTotals {
        CartTotals::compute(&self.ledger, &self.catalog, self.settings.tax_rate)
    }

    /// Whether the place-order action should be enabled
    pub fn can_submit(&self) -> bool {
        self.status == CheckoutStatus::Editing && self.validate().is_ok()
    }

    /// Check the submit preconditions without changing state
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.form.has_customer_name() {
            return Err(ValidationError::MissingCustomerName);
        }
        if self.payment_method.is_none() {
            return Err(ValidationError::MissingPaymentMethod);
        }
        if self.ledger.is_empty() {
            return Err(ValidationError::EmptyCart);
        }
        Ok(())
    }

    // ========== Mutations (Editing only) ==========

    fn ensure_editable(&self) -> Result<(), CheckoutError> {
        match self.status {
            CheckoutStatus::Editing => Ok(()),
            CheckoutStatus::Processing => Err(CheckoutError::Frozen),
            CheckoutStatus::Placed => Err(CheckoutError::Finalized),
            CheckoutStatus::Abandoned => Err(CheckoutError::Abandoned),
        }
    }

    /// "+" on a summary row
    pub fn increment(&mut self, id: &str) -> Result<u32, CheckoutError> {
        self.ensure_editable()?;
        Ok(self.ledger.add(id))
    }

    /// "−" on a summary row; the row disappears at zero
    pub fn decrement(&mut self, id: &str) -> Result<u32, CheckoutError> {
        self.ensure_editable()?;
        Ok(self.ledger.remove(id))
    }

    pub fn set_quantity(&mut self, id: &str, quantity: u32) -> Result<(), CheckoutError> {
        self.ensure_editable()?;
        self.ledger.set_quantity(id, quantity);
        Ok(())
    }

    pub fn set_customer_name(&mut self, name: impl Into<String>) -> Result<(), CheckoutError> {
        self.ensure_editable()?;
        self.form.customer_name = name.into();
        Ok(())
    }

    /// Blank input clears the field
    pub fn set_table_number(&mut self, table: impl Into<String>) -> Result<(), CheckoutError> {
        self.ensure_editable()?;
        self.form.table_number = normalize_optional(table.into());
        Ok(())
    }

    /// Blank input clears the field
    pub fn set_special_requirements(
        &mut self,
        note: impl Into<String>,
    ) -> Result<(), CheckoutError> {
        self.ensure_editable()?;
        self.form.special_requirements = normalize_optional(note.into());
        Ok(())
    }

    pub fn select_payment_method(&mut self, method: PaymentMethod) -> Result<(), CheckoutError> {
        self.ensure_editable()?;
        self.payment_method = Some(method);
        Ok(())
    }

    // ========== Transitions ==========

    /// `Editing → Processing`
    ///
    /// Validates the form, freezes the session and returns the priced draft to
    /// hand to a submitter. On validation failure the state stays `Editing`.
    pub fn begin_submission(&mut self) -> Result<OrderDraft, CheckoutError> {
        self.ensure_editable()?;
        self.last_rejection = None;

        if let Err(reason) = self.validate() {
            tracing::warn!(reason = %reason, "Submit attempt rejected");
            self.last_rejection = Some(reason.into());
            return Err(reason.into());
        }
        let Some(payment_method) = self.payment_method else {
            return Err(ValidationError::MissingPaymentMethod.into());
        };

        let totals = self.totals();
        let lines = self.lines().iter().map(CartLine::to_order_line).collect();
        let mut form = self.form.clone();
        form.customer_name = form.trimmed_name().to_string();

        let draft = OrderDraft {
            order_id: uuid::Uuid::new_v4().to_string(),
            form,
            payment_method,
            lines,
            item_count: totals.item_count,
            subtotal: totals.subtotal,
            tax: totals.tax,
            total: totals.total,
        };

        self.status = CheckoutStatus::Processing;
        self.pending = Some(draft.clone());
        tracing::info!(
            order_id = %draft.order_id,
            payment_method = %payment_method,
            total = draft.total,
            "Order submission started"
        );
        Ok(draft)
    }

    /// `Processing → Placed` on success, `Processing → Editing` on failure
    pub fn complete_submission(
        &mut self,
        result: Result<SubmissionAck, SubmissionError>,
    ) -> Result<CheckoutOutcome, CheckoutError> {
        if self.status != CheckoutStatus::Processing {
            return Err(CheckoutError::NotProcessing);
        }
        let Some(draft) = self.pending.take() else {
            return Err(CheckoutError::NotProcessing);
        };

        match result {
            Ok(ack) => {
                let receipt = OrderReceipt {
                    order_id: draft.order_id,
                    customer_name: draft.form.customer_name,
                    table_number: draft.form.table_number,
                    payment_method: draft.payment_method,
                    item_count: draft.item_count,
                    subtotal: draft.subtotal,
                    tax: draft.tax,
                    total: draft.total,
                    placed_at: ack.placed_at,
                    ready: ReadyWindow::after(
                        ack.placed_at,
                        self.settings.ready_min_minutes,
                        self.settings.ready_max_minutes,
                    ),
                };
                self.ledger.clear();
                self.status = CheckoutStatus::Placed;
                self.receipt = Some(receipt.clone());
                tracing::info!(
                    order_id = %receipt.order_id,
                    total = receipt.total,
                    "Order placed"
                );
                Ok(CheckoutOutcome::Confirmed { receipt })
            }
            Err(err) => {
                tracing::warn!(
                    order_id = %draft.order_id,
                    failure = ?err.failure,
                    error = %err,
                    "Order submission failed, back to editing"
                );
                self.status = CheckoutStatus::Editing;
                let reason: AppError = err.into();
                self.last_rejection = Some(reason.clone());
                Ok(CheckoutOutcome::Rejected { reason })
            }
        }
    }

    /// Leave the session; any in-flight submission result is discarded
    pub fn abandon(&mut self) {
        if self.status.is_terminal() {
            return;
        }
        if let Some(draft) = self.pending.take() {
            tracing::info!(order_id = %draft.order_id, "Order submission abandoned");
        }
        self.status = CheckoutStatus::Abandoned;
    }

    /// Validate, submit and settle in one step
    ///
    /// Validation failures and gateway failures come back as
    /// [`CheckoutOutcome::Rejected`]; calling from a non-editable state or
    /// cancelling via `cancel` is an error.
    pub async fn submit<S>(
        &mut self,
        submitter: &S,
        cancel: &CancellationToken,
    ) -> Result<CheckoutOutcome, CheckoutError>
    where
        S: OrderSubmitter + ?Sized,
    {
        let draft = match self.begin_submission() {
            Ok(draft) => draft,
            Err(CheckoutError::Validation(reason)) => {
                return Ok(CheckoutOutcome::Rejected {
                    reason: reason.into(),
                });
            }
            Err(e) => return Err(e),
        };

        let result = tokio::select! {
            _ = cancel.cancelled() => None,
            result = submitter.submit(&draft) => Some(result),
        };

        match result {
            Some(result) => self.complete_submission(result),
            None => {
                self.abandon();
                Err(CheckoutError::Cancelled)
            }
        }
    }
}
