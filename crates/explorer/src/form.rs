//! Transaction form.
//!
//! Mirrors a modal dialog: it is opened, filled in, submitted, and closed
//! only after the backend accepted the transaction. A rejected submission
//! leaves the form open with its values so the user can retry.

use crate::controller::Explorer;
use blockwave_client::{ChainApi, NotificationKind};
use blockwave_core::{validate_transaction_input, TransactionResponse, ValidationError};
use tracing::warn;

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Input was rejected locally; nothing was sent.
    Invalid(ValidationError),
    /// The backend call failed; the form is still open.
    Failed,
    /// The backend accepted the transaction; the form is closed and cleared.
    Submitted(TransactionResponse),
}

/// State of the "create transaction" modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionForm {
    pub sender: String,
    pub recipient: String,
    pub amount: String,
    open: bool,
    submitting: bool,
}

impl TransactionForm {
    /// Create a closed, empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an open form with the given values.
    pub fn filled(
        sender: impl Into<String>,
        recipient: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            sender: sender.into(),
            recipient: recipient.into(),
            amount: amount.into(),
            open: true,
            submitting: false,
        }
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close the modal. Field values are kept.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Clear all fields.
    pub fn reset(&mut self) {
        self.sender.clear();
        self.recipient.clear();
        self.amount.clear();
    }

    /// Validate and submit the form.
    ///
    /// Invalid input is reported through the explorer's notifier and never
    /// reaches the network. On success the explorer re-fetches the chain,
    /// then the form closes and resets.
    pub async fn submit<A: ChainApi>(&mut self, explorer: &Explorer<A>) -> SubmitOutcome {
        let draft = match validate_transaction_input(&self.sender, &self.recipient, &self.amount) {
            Ok(draft) => draft,
            Err(e) => {
                explorer
                    .notifier()
                    .notify(NotificationKind::Error, "Validation Error", &e.to_string());
                return SubmitOutcome::Invalid(e);
            }
        };

        self.submitting = true;
        let result = explorer
            .api()
            .create_transaction(&draft.sender, &draft.recipient, &self.amount)
            .await;
        self.submitting = false;

        match result {
            Ok(response) => {
                explorer.transaction_completed().await;
                self.close();
                self.reset();
                SubmitOutcome::Submitted(response)
            }
            Err(e) => {
                warn!(error = %e, "failed to create transaction");
                SubmitOutcome::Failed
            }
        }
    }
}
