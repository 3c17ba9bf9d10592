//! Transaction controller
//!
//! Three independent concerns share this screen:
//!
//! 1. the account list, loaded once when the screen opens;
//! 2. the sender's balance, looked up every time the sender changes;
//! 3. the submission itself, validated locally before any request.
//!
//! Balance lookups are stamped with the address they were issued for and a
//! generation number. A completion is committed only if both still match the
//! current selection, so the last selection always wins regardless of the
//! order in which responses arrive.

use crate::error::{ClientError, ClientResult};
use crate::models::{Account, Address, Balance, TransactionReceipt, TransactionRequest};

use super::accounts_list::LOAD_FAILED_MESSAGE;
use super::text_field::TextField;

/// Fallback message when the backend gives no reason
pub const SUBMIT_FAILED_MESSAGE: &str = "Transaction failed";

/// Validation message when a field is missing
pub const FIELDS_REQUIRED_MESSAGE: &str = "All fields are required";

/// Form fields in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionField {
    #[default]
    From,
    To,
    Amount,
}

impl TransactionField {
    pub fn next(self) -> Self {
        match self {
            Self::From => Self::To,
            Self::To => Self::Amount,
            Self::Amount => Self::From,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::From => Self::Amount,
            Self::To => Self::From,
            Self::Amount => Self::To,
        }
    }
}

/// Loading state of the account list used by both selectors
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AccountsLoad {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

/// What the sender balance line shows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SenderBalance {
    #[default]
    Unselected,
    Loading,
    Loaded(Balance),
    Failed,
}

/// Why a balance lookup was issued
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupPurpose {
    /// The sender selection changed
    Selection,
    /// Best-effort refresh after a successful transfer
    AfterTransfer,
}

/// A sender balance lookup to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceLookup {
    pub address: Address,
    pub generation: u64,
    pub purpose: LookupPurpose,
}

/// Lifecycle of the submit button
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Submission {
    #[default]
    Idle,
    Submitting,
    Submitted(TransactionReceipt),
    Rejected(String),
}

/// State of the send-transaction screen
#[derive(Debug, Clone)]
pub struct TransactionController {
    accounts_load: AccountsLoad,
    accounts: Vec<Account>,
    from: Option<Address>,
    to: Option<Address>,
    pub amount_input: TextField,
    pub focused_field: TransactionField,
    sender_balance: SenderBalance,
    generation: u64,
    submission: Submission,
}

impl Default for TransactionController {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionController {
    pub fn new() -> Self {
        Self {
            accounts_load: AccountsLoad::Loading,
            accounts: Vec::new(),
            from: None,
            to: None,
            amount_input: TextField::new(),
            focused_field: TransactionField::From,
            sender_balance: SenderBalance::Unselected,
            generation: 0,
            submission: Submission::Idle,
        }
    }

    // -- account list -------------------------------------------------------

    /// Commit the one-time account load
    pub fn apply_accounts(&mut self, result: ClientResult<Vec<Account>>) {
        match result {
            Ok(accounts) => {
                self.accounts = accounts;
                self.accounts_load = AccountsLoad::Ready;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load accounts for transfer form");
                self.accounts.clear();
                self.accounts_load = AccountsLoad::Failed(LOAD_FAILED_MESSAGE.to_string());
            }
        }
    }

    pub fn is_loading_accounts(&self) -> bool {
        self.accounts_load == AccountsLoad::Loading
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    // -- selection ----------------------------------------------------------

    pub fn from(&self) -> Option<&Address> {
        self.from.as_ref()
    }

    pub fn to(&self) -> Option<&Address> {
        self.to.as_ref()
    }

    /// Every account may send
    pub fn sender_options(&self) -> &[Account] {
        &self.accounts
    }

    /// Recipients exclude whichever account is currently the sender
    pub fn recipient_options(&self) -> Vec<&Account> {
        self.accounts
            .iter()
            .filter(|account| Some(&account.address) != self.from.as_ref())
            .collect()
    }

    /// Change the sender
    ///
    /// Returns the balance lookup to execute, or `None` when the selection is
    /// cleared (no request is needed) or unchanged.
    pub fn select_sender(&mut self, address: Option<Address>) -> Option<BalanceLookup> {
        if self.from == address {
            return None;
        }

        self.from = address;
        if self.to.is_some() && self.to == self.from {
            self.to = None;
        }

        // Any lookup still in flight is now stale.
        self.generation += 1;

        match &self.from {
            None => {
                self.sender_balance = SenderBalance::Unselected;
                None
            }
            Some(address) => {
                self.sender_balance = SenderBalance::Loading;
                Some(BalanceLookup {
                    address: address.clone(),
                    generation: self.generation,
                    purpose: LookupPurpose::Selection,
                })
            }
        }
    }

    /// Change the recipient; the sender can never be chosen
    pub fn select_recipient(&mut self, address: Option<Address>) {
        if address.is_some() && address == self.from {
            return;
        }
        self.to = address;
    }

    /// Step through sender options; the empty option sits before the first account
    pub fn cycle_sender(&mut self, forward: bool) -> Option<BalanceLookup> {
        let options: Vec<Address> = self
            .sender_options()
            .iter()
            .map(|a| a.address.clone())
            .collect();
        let next = cycle(&options, self.from.as_ref(), forward);
        self.select_sender(next)
    }

    /// Step through recipient options
    pub fn cycle_recipient(&mut self, forward: bool) {
        let options: Vec<Address> = self
            .recipient_options()
            .iter()
            .map(|a| a.address.clone())
            .collect();
        let next = cycle(&options, self.to.as_ref(), forward);
        self.select_recipient(next);
    }

    // -- sender balance -----------------------------------------------------

    pub fn sender_balance(&self) -> &SenderBalance {
        &self.sender_balance
    }

    /// Commit a balance lookup if it still matches the selection
    ///
    /// Returns whether the outcome was committed. Stale completions are
    /// dropped silently.
    pub fn apply_balance(&mut self, lookup: &BalanceLookup, result: ClientResult<Balance>) -> bool {
        if self.from.as_ref() != Some(&lookup.address) || lookup.generation != self.generation {
            tracing::debug!(
                address = %lookup.address,
                generation = lookup.generation,
                current = self.generation,
                "discarding stale balance lookup"
            );
            return false;
        }

        match (result, lookup.purpose) {
            (Ok(balance), _) => self.sender_balance = SenderBalance::Loaded(balance),
            (Err(e), LookupPurpose::Selection) => {
                tracing::warn!(address = %lookup.address, error = %e, "sender balance lookup failed");
                self.sender_balance = SenderBalance::Failed;
            }
            (Err(e), LookupPurpose::AfterTransfer) => {
                tracing::debug!(address = %lookup.address, error = %e, "post-transfer balance refresh failed");
                // A superseded selection lookup may have left the line loading.
                if self.sender_balance == SenderBalance::Loading {
                    self.sender_balance = SenderBalance::Failed;
                }
            }
        }
        true
    }

    // -- submission ---------------------------------------------------------

    pub fn submission(&self) -> &Submission {
        &self.submission
    }

    pub fn is_submitting(&self) -> bool {
        self.submission == Submission::Submitting
    }

    /// Check the form without touching any state
    pub fn validate(&self) -> ClientResult<TransactionRequest> {
        let amount = self.amount_input.value().trim();
        match (&self.from, &self.to) {
            (Some(from), Some(to)) if !amount.is_empty() => {
                TransactionRequest::new(from.clone(), to.clone(), amount)
            }
            _ => Err(ClientError::Validation(FIELDS_REQUIRED_MESSAGE.into())),
        }
    }

    /// Start a submission
    ///
    /// Returns the request to send, or `None` when validation failed (the
    /// message is in [`Submission::Rejected`]) or a submission is in flight.
    pub fn submit(&mut self) -> Option<TransactionRequest> {
        if self.is_submitting() {
            return None;
        }

        match self.validate() {
            Ok(request) => {
                self.submission = Submission::Submitting;
                Some(request)
            }
            Err(e) => {
                self.submission = Submission::Rejected(e.user_message());
                None
            }
        }
    }

    /// Commit the outcome of `send_transaction`
    ///
    /// On success the amount is cleared and, if the sender is still selected,
    /// a best-effort balance refresh is returned for the caller to execute.
    /// On rejection every field keeps its value.
    pub fn apply_submission(
        &mut self,
        request: &TransactionRequest,
        result: ClientResult<TransactionReceipt>,
    ) -> Option<BalanceLookup> {
        match result {
            Ok(receipt) => {
                self.submission = Submission::Submitted(receipt);
                self.amount_input.clear();

                if self.from.as_ref() != Some(&request.from) {
                    return None;
                }
                self.generation += 1;
                Some(BalanceLookup {
                    address: request.from.clone(),
                    generation: self.generation,
                    purpose: LookupPurpose::AfterTransfer,
                })
            }
            Err(e) => {
                tracing::warn!(error = %e, "transaction rejected");
                self.submission = Submission::Rejected(e.message_or(SUBMIT_FAILED_MESSAGE));
                None
            }
        }
    }

    // -- alerts -------------------------------------------------------------

    /// Page-level or submission error, if any
    pub fn errors(&self) -> Vec<&str> {
        let mut errors = Vec::new();
        if let AccountsLoad::Failed(message) = &self.accounts_load {
            errors.push(message.as_str());
        }
        if let Submission::Rejected(message) = &self.submission {
            errors.push(message.as_str());
        }
        errors
    }

    pub fn success_message(&self) -> Option<String> {
        match &self.submission {
            Submission::Submitted(receipt) => Some(format!(
                "Transaction submitted! Hash: {}",
                receipt.tx_hash
            )),
            _ => None,
        }
    }

    /// Dismiss the visible alerts
    pub fn dismiss_alerts(&mut self) {
        if matches!(self.accounts_load, AccountsLoad::Failed(_)) {
            self.accounts_load = AccountsLoad::Ready;
        }
        if matches!(
            self.submission,
            Submission::Rejected(_) | Submission::Submitted(_)
        ) {
            self.submission = Submission::Idle;
        }
    }
}

/// Next option in `[None, options...]`, wrapping around
fn cycle(options: &[Address], current: Option<&Address>, forward: bool) -> Option<Address> {
    let slots = options.len() + 1;
    let index = current
        .and_then(|c| options.iter().position(|o| o == c))
        .map(|i| i + 1)
        .unwrap_or(0);
    let next = if forward {
        (index + 1) % slots
    } else {
        (index + slots - 1) % slots
    };
    if next == 0 {
        None
    } else {
        options.get(next - 1).cloned()
    }
}
