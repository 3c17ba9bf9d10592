//! Application state for the TUI
//!
//! The App struct holds the current route, the controller of the mounted
//! screen, and everything the views need for rendering. Screens are
//! remounted on navigation: the old controller is dropped and any of its
//! requests still in flight are ignored when they complete.

use crate::controllers::{
    AccountsListController, BalanceLookup, CreateAccountController, TransactionController,
};

use super::dispatch::Dispatcher;
use super::event::ApiEvent;
use super::router::Route;

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Controller of the mounted screen
#[derive(Debug, Clone)]
pub enum Screen {
    Accounts(AccountsListController),
    CreateAccount(CreateAccountController),
    Transaction(TransactionController),
}

impl Screen {
    fn for_route(route: Route) -> Self {
        match route {
            Route::Accounts => Screen::Accounts(AccountsListController::new()),
            Route::CreateAccount => Screen::CreateAccount(CreateAccountController::new()),
            Route::Transaction => Screen::Transaction(TransactionController::new()),
        }
    }
}

/// Main application state
pub struct App {
    /// Whether the app should quit
    pub should_quit: bool,

    /// Current input mode
    pub input_mode: InputMode,

    /// Transient message for the status bar
    pub status_message: Option<String>,

    /// Backend shown in the status bar
    pub api_base_url: String,

    /// Animation frame counter for spinners
    pub tick: usize,

    route: Route,
    screen: Screen,
    mount: u64,
    dispatcher: Dispatcher,
}

impl App {
    /// Create the app and mount the screen for `route`
    pub fn new(dispatcher: Dispatcher, route: Route, api_base_url: impl Into<String>) -> Self {
        let mut app = Self {
            should_quit: false,
            input_mode: InputMode::default(),
            status_message: None,
            api_base_url: api_base_url.into(),
            tick: 0,
            route,
            screen: Screen::for_route(route),
            mount: 0,
            dispatcher,
        };
        app.mount_screen();
        app
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }

    /// Switch to another route; the current route is left as is
    pub fn navigate(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        tracing::debug!(from = %self.route, to = %route, "navigate");
        self.route = route;
        self.screen = Screen::for_route(route);
        self.input_mode = InputMode::Normal;
        self.status_message = None;
        self.mount_screen();
    }

    fn mount_screen(&mut self) {
        self.mount += 1;
        match self.screen {
            Screen::Accounts(_) => self.refresh_accounts(),
            Screen::Transaction(_) => self.dispatcher.load_transfer_accounts(self.mount),
            Screen::CreateAccount(_) => self.input_mode = InputMode::Editing,
        }
    }

    /// Reload the accounts list unless a load is already running
    pub fn refresh_accounts(&mut self) {
        if let Screen::Accounts(controller) = &mut self.screen {
            if controller.begin_load() {
                self.dispatcher.list_accounts_with_balances(self.mount);
            }
        }
    }

    /// Submit the create-account form
    pub fn submit_create_account(&mut self) {
        if let Screen::CreateAccount(controller) = &mut self.screen {
            if let Some(request) = controller.submit() {
                self.dispatcher.create_account(self.mount, request);
            }
        }
    }

    /// Step the sender selector
    pub fn cycle_sender(&mut self, forward: bool) {
        if let Screen::Transaction(controller) = &mut self.screen {
            if let Some(lookup) = controller.cycle_sender(forward) {
                self.dispatcher.lookup_balance(self.mount, lookup);
            }
        }
    }

    /// Submit the transaction form
    pub fn submit_transaction(&mut self) {
        if let Screen::Transaction(controller) = &mut self.screen {
            if let Some(request) = controller.submit() {
                self.dispatcher.send_transaction(self.mount, request);
            }
        }
    }

    /// Dismiss whatever alert the current screen shows
    pub fn dismiss_alerts(&mut self) {
        self.status_message = None;
        match &mut self.screen {
            Screen::Accounts(controller) => controller.dismiss_error(),
            Screen::CreateAccount(controller) => controller.dismiss_error(),
            Screen::Transaction(controller) => controller.dismiss_alerts(),
        }
    }

    /// Apply an API completion
    ///
    /// Completions for a screen that has since been unmounted are dropped.
    pub fn handle_api_event(&mut self, mount: u64, event: ApiEvent) {
        if mount != self.mount {
            tracing::debug!(mount, current = self.mount, "dropping result for unmounted screen");
            return;
        }

        let mut follow_up: Option<BalanceLookup> = None;
        let mut status: Option<String> = None;

        match (&mut self.screen, event) {
            (Screen::Accounts(controller), ApiEvent::AccountsListed(result)) => {
                if let Ok(snapshot) = &result {
                    status = Some(format!("Loaded {} account(s)", snapshot.accounts.len()));
                }
                controller.apply(result);
            }
            (Screen::CreateAccount(controller), ApiEvent::AccountCreated(result)) => {
                controller.apply(result);
            }
            (Screen::Transaction(controller), ApiEvent::TransferAccountsLoaded(result)) => {
                controller.apply_accounts(result);
            }
            (Screen::Transaction(controller), ApiEvent::SenderBalance { lookup, result }) => {
                controller.apply_balance(&lookup, result);
            }
            (Screen::Transaction(controller), ApiEvent::TransactionSent { request, result }) => {
                follow_up = controller.apply_submission(&request, result);
            }
            (_, event) => {
                tracing::warn!(?event, "api event does not match mounted screen");
            }
        }

        if let Some(message) = status {
            self.set_status(message);
        }
        if let Some(lookup) = follow_up {
            self.dispatcher.lookup_balance(self.mount, lookup);
        }
    }

    /// Advance spinner animation
    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }
}

/// Drives an [`App`] against a fake backend on a real runtime
#[cfg(test)]
pub(crate) struct Harness {
    _runtime: tokio::runtime::Runtime,
    receiver: std::sync::mpsc::Receiver<super::event::Event>,
    pub app: App,
}

#[cfg(test)]
impl Harness {
    pub fn new(api: crate::api::fake::FakeApi, route: Route) -> Self {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .unwrap();
        let (sender, receiver) = std::sync::mpsc::channel();
        let dispatcher = Dispatcher::new(std::sync::Arc::new(api), runtime.handle().clone(), sender);
        let app = App::new(dispatcher, route, "http://test");
        Self {
            _runtime: runtime,
            receiver,
            app,
        }
    }

    /// Deliver the next API completion to the app
    pub fn pump(&mut self) {
        use super::event::Event;
        match self.receiver.recv_timeout(std::time::Duration::from_secs(5)) {
            Ok(Event::Api { mount, event }) => self.app.handle_api_event(mount, event),
            Ok(other) => panic!("unexpected event {:?}", other),
            Err(e) => panic!("no event: {}", e),
        }
    }

    pub fn assert_idle(&self) {
        assert!(self
            .receiver
            .recv_timeout(std::time::Duration::from_millis(100))
            .is_err());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::FakeApi;
    use crate::controllers::{BalanceCell, CreateState, SenderBalance, Submission};
    use crate::error::ClientError;
    use crate::models::{Account, Balance, PrivateKey, TransactionReceipt};

    fn accounts() -> Vec<Account> {
        vec![
            Account::new("0xa", Some("Alice".into())),
            Account::new("0xb", None),
        ]
    }

    #[test]
    fn test_accounts_screen_loads_on_mount() {
        let api = FakeApi::new()
            .with_accounts(Ok(accounts()))
            .with_balance("0xa", Ok(Balance::parse("7").unwrap()))
            .with_balance("0xb", Err(ClientError::server(500, "boom")));
        let mut harness = Harness::new(api, Route::Accounts);

        harness.pump();

        let Screen::Accounts(controller) = harness.app.screen() else {
            panic!("expected accounts screen");
        };
        assert_eq!(controller.accounts().len(), 2);
        assert_eq!(controller.balance_for(&"0xb".into()), Some(&BalanceCell::Error));
        assert!(controller.error().is_none());
        assert_eq!(harness.app.status_message.as_deref(), Some("Loaded 2 account(s)"));
    }

    #[test]
    fn test_failed_listing_sets_no_status() {
        let api = FakeApi::new().with_accounts(Err(ClientError::Network("refused".into())));
        let mut harness = Harness::new(api, Route::Accounts);

        harness.pump();

        assert!(harness.app.status_message.is_none());
        let Screen::Accounts(controller) = harness.app.screen() else {
            panic!("expected accounts screen");
        };
        assert!(controller.error().is_some());
    }

    #[test]
    fn test_navigation_clears_status() {
        let api = FakeApi::new().with_accounts(Ok(accounts()));
        let mut harness = Harness::new(api, Route::Accounts);
        harness.pump();
        assert!(harness.app.status_message.is_some());

        harness.app.navigate(Route::CreateAccount);
        assert!(harness.app.status_message.is_none());
    }

    #[test]
    fn test_results_for_unmounted_screen_are_dropped() {
        let api = FakeApi::new().with_accounts(Ok(accounts()));
        let mut harness = Harness::new(api, Route::Accounts);

        harness.app.navigate(Route::CreateAccount);
        // The accounts listing started on mount still completes...
        harness.pump();

        // ...but the create screen is untouched by it.
        let Screen::CreateAccount(controller) = harness.app.screen() else {
            panic!("expected create screen");
        };
        assert_eq!(controller.state(), &CreateState::Idle);
    }

    #[test]
    fn test_create_account_flow() {
        let api = FakeApi::new().with_created(Ok(Account {
            address: "0xnew".into(),
            name: Some("Carol".into()),
            private_key: Some(PrivateKey::new("0xkey")),
        }));
        let mut harness = Harness::new(api, Route::CreateAccount);
        harness.assert_idle();

        harness.app.submit_create_account();
        harness.pump();

        let Screen::CreateAccount(controller) = harness.app.screen() else {
            panic!("expected create screen");
        };
        assert_eq!(controller.created().map(|a| a.address.as_str()), Some("0xnew"));

        // Leaving and coming back shows a fresh form.
        harness.app.navigate(Route::Accounts);
        harness.pump();
        harness.app.navigate(Route::CreateAccount);
        let Screen::CreateAccount(controller) = harness.app.screen() else {
            panic!("expected create screen");
        };
        assert!(controller.created().is_none());
    }

    #[test]
    fn test_transaction_flow_refreshes_sender_after_success() {
        let api = FakeApi::new()
            .with_accounts(Ok(accounts()))
            .with_balance("0xa", Ok(Balance::parse("3").unwrap()))
            .with_receipt(Ok(TransactionReceipt {
                tx_hash: "0xhash".into(),
            }));
        let mut harness = Harness::new(api, Route::Transaction);
        harness.pump();

        harness.app.cycle_sender(true);
        harness.pump();

        if let Screen::Transaction(controller) = harness.app.screen_mut() {
            assert_eq!(
                controller.sender_balance(),
                &SenderBalance::Loaded(Balance::parse("3").unwrap())
            );
            controller.cycle_recipient(true);
            controller.amount_input = controller.amount_input.clone().content("1");
        }

        harness.app.submit_transaction();
        harness.pump();
        // Best-effort sender refresh follows the submission.
        harness.pump();

        let Screen::Transaction(controller) = harness.app.screen() else {
            panic!("expected transaction screen");
        };
        assert!(matches!(controller.submission(), Submission::Submitted(_)));
        assert_eq!(controller.amount_input.value(), "");
        assert_eq!(controller.to().map(|a| a.as_str()), Some("0xb"));
    }

    #[test]
    fn test_invalid_transaction_sends_nothing() {
        let api = FakeApi::new().with_accounts(Ok(accounts()));
        let mut harness = Harness::new(api, Route::Transaction);
        harness.pump();

        harness.app.submit_transaction();
        harness.assert_idle();

        let Screen::Transaction(controller) = harness.app.screen() else {
            panic!("expected transaction screen");
        };
        assert_eq!(controller.errors(), vec!["All fields are required"]);
    }

    #[test]
    fn test_navigate_to_current_route_is_noop() {
        let api = FakeApi::new().with_accounts(Ok(vec![]));
        let mut harness = Harness::new(api, Route::Accounts);
        harness.app.navigate(Route::Accounts);

        harness.pump();
        harness.assert_idle();
    }
}
