//! Event handler for the TUI
//!
//! Routes keyboard events to the mounted screen based on the current input
//! mode, and hands API completions to the app.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, InputMode, Screen};
use super::event::Event;
use super::router::Route;
use crate::controllers::{TextField, TransactionField};

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.on_tick();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
        Event::Api { mount, event } => {
            app.handle_api_event(mount, event);
            Ok(())
        }
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Ctrl-C quits from anywhere, even while typing
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_key(app, key),
        InputMode::Editing => handle_editing_key(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    // Global keys (work on every screen)
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
            return Ok(());
        }
        KeyCode::Char(c @ '1'..='3') => {
            if let Some(route) = Route::from_shortcut(c) {
                app.navigate(route);
            }
            return Ok(());
        }
        KeyCode::Char(']') => {
            app.navigate(app.route().next());
            return Ok(());
        }
        KeyCode::Char('[') => {
            app.navigate(app.route().prev());
            return Ok(());
        }
        KeyCode::Esc => {
            app.dismiss_alerts();
            return Ok(());
        }
        // Outside the transaction form Tab moves between screens
        KeyCode::Tab | KeyCode::BackTab if app.route() != Route::Transaction => {
            let route = if key.code == KeyCode::Tab {
                app.route().next()
            } else {
                app.route().prev()
            };
            app.navigate(route);
            return Ok(());
        }
        _ => {}
    }

    match app.screen() {
        Screen::Accounts(_) => handle_accounts_key(app, key),
        Screen::CreateAccount(_) => handle_create_key(app, key),
        Screen::Transaction(_) => handle_transaction_key(app, key),
    }
}

/// Handle keys on the accounts screen
fn handle_accounts_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::F(5) => app.refresh_accounts(),
        KeyCode::Char('j') | KeyCode::Down => {
            if let Screen::Accounts(controller) = app.screen_mut() {
                controller.move_down();
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            if let Screen::Accounts(controller) = app.screen_mut() {
                controller.move_up();
            }
        }
        _ => {}
    }
    Ok(())
}

/// Handle keys on the create screen outside of editing
fn handle_create_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('i') | KeyCode::Char('e') => app.input_mode = InputMode::Editing,
        KeyCode::Enter => app.submit_create_account(),
        _ => {}
    }
    Ok(())
}

/// Handle keys on the transaction screen outside of editing
fn handle_transaction_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let focused = match app.screen() {
        Screen::Transaction(controller) => controller.focused_field,
        _ => return Ok(()),
    };

    match key.code {
        KeyCode::Tab | KeyCode::Char('j') => move_focus(app, true),
        KeyCode::BackTab | KeyCode::Char('k') => move_focus(app, false),
        KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down
        | KeyCode::Char('h') | KeyCode::Char('l') => {
            let forward = matches!(
                key.code,
                KeyCode::Right | KeyCode::Down | KeyCode::Char('l')
            );
            match focused {
                TransactionField::From => app.cycle_sender(forward),
                TransactionField::To => {
                    if let Screen::Transaction(controller) = app.screen_mut() {
                        controller.cycle_recipient(forward);
                    }
                }
                TransactionField::Amount => move_focus(app, forward),
            }
        }
        KeyCode::Char('i') | KeyCode::Char('e') => {
            focus_field(app, TransactionField::Amount);
            app.input_mode = InputMode::Editing;
        }
        KeyCode::Enter if focused == TransactionField::Amount => {
            app.input_mode = InputMode::Editing;
        }
        KeyCode::Enter | KeyCode::Char('s') => app.submit_transaction(),
        _ => {}
    }
    Ok(())
}

/// Handle keys while a text field has the keyboard
fn handle_editing_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            return Ok(());
        }
        KeyCode::Enter => {
            match app.screen() {
                Screen::CreateAccount(_) => app.submit_create_account(),
                Screen::Transaction(_) => {
                    app.input_mode = InputMode::Normal;
                    app.submit_transaction();
                }
                Screen::Accounts(_) => app.input_mode = InputMode::Normal,
            }
            return Ok(());
        }
        KeyCode::Tab | KeyCode::BackTab => {
            if let Screen::Transaction(_) = app.screen() {
                app.input_mode = InputMode::Normal;
                move_focus(app, key.code == KeyCode::Tab);
            }
            return Ok(());
        }
        _ => {}
    }

    match app.screen_mut() {
        Screen::CreateAccount(controller) => {
            edit_input(&mut controller.name_input, key, |_| true);
        }
        Screen::Transaction(controller) => {
            edit_input(&mut controller.amount_input, key, |c| {
                c.is_ascii_digit() || c == '.'
            });
        }
        Screen::Accounts(_) => {}
    }
    Ok(())
}

/// Apply an editing key to a text input; `accept` filters typed characters
fn edit_input(input: &mut TextField, key: KeyEvent, accept: impl Fn(char) -> bool) {
    match key.code {
        KeyCode::Char(c) if accept(c) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        _ => {}
    }
}

fn move_focus(app: &mut App, forward: bool) {
    if let Screen::Transaction(controller) = app.screen_mut() {
        controller.focused_field = if forward {
            controller.focused_field.next()
        } else {
            controller.focused_field.prev()
        };
    }
}

fn focus_field(app: &mut App, field: TransactionField) {
    if let Screen::Transaction(controller) = app.screen_mut() {
        controller.focused_field = field;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::FakeApi;
    use crate::models::Account;
    use crate::tui::app::Harness;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            handle_event(app, key(KeyCode::Char(c))).unwrap();
        }
    }

    #[test]
    fn test_quit_keys() {
        let mut harness = Harness::new(FakeApi::new(), Route::CreateAccount);
        // 'q' is text while editing
        handle_event(&mut harness.app, key(KeyCode::Char('q'))).unwrap();
        assert!(!harness.app.should_quit);

        handle_event(
            &mut harness.app,
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        )
        .unwrap();
        assert!(harness.app.should_quit);
    }

    #[test]
    fn test_number_keys_navigate_in_normal_mode() {
        let mut harness = Harness::new(FakeApi::new(), Route::CreateAccount);
        handle_event(&mut harness.app, key(KeyCode::Esc)).unwrap();
        assert_eq!(harness.app.input_mode, InputMode::Normal);

        handle_event(&mut harness.app, key(KeyCode::Char('3'))).unwrap();
        assert_eq!(harness.app.route(), Route::Transaction);
    }

    #[test]
    fn test_typing_name_then_submit() {
        let api = FakeApi::new().with_created(Ok(Account::new("0xnew", Some("Bob".into()))));
        let mut harness = Harness::new(api, Route::CreateAccount);

        type_text(&mut harness.app, "Bob");
        handle_event(&mut harness.app, key(KeyCode::Enter)).unwrap();
        harness.pump();

        let Screen::CreateAccount(controller) = harness.app.screen() else {
            panic!("expected create screen");
        };
        assert_eq!(controller.name_input.value(), "Bob");
        assert_eq!(
            controller.created().and_then(|a| a.label()),
            Some("Bob")
        );
    }

    #[test]
    fn test_amount_field_rejects_letters() {
        let api = FakeApi::new().with_accounts(Ok(vec![]));
        let mut harness = Harness::new(api, Route::Transaction);
        harness.pump();

        handle_event(&mut harness.app, key(KeyCode::Char('i'))).unwrap();
        assert_eq!(harness.app.input_mode, InputMode::Editing);
        type_text(&mut harness.app, "1a.5");

        let Screen::Transaction(controller) = harness.app.screen() else {
            panic!("expected transaction screen");
        };
        assert_eq!(controller.amount_input.value(), "1.5");
        assert_eq!(controller.focused_field, TransactionField::Amount);
    }

    #[test]
    fn test_tab_cycles_transaction_focus() {
        let api = FakeApi::new().with_accounts(Ok(vec![]));
        let mut harness = Harness::new(api, Route::Transaction);
        harness.pump();

        handle_event(&mut harness.app, key(KeyCode::Tab)).unwrap();
        handle_event(&mut harness.app, key(KeyCode::Tab)).unwrap();
        let Screen::Transaction(controller) = harness.app.screen() else {
            panic!("expected transaction screen");
        };
        assert_eq!(controller.focused_field, TransactionField::Amount);
    }

    #[test]
    fn test_tab_switches_screens_outside_forms() {
        let api = FakeApi::new().with_accounts(Ok(vec![]));
        let mut harness = Harness::new(api, Route::Accounts);
        harness.pump();

        handle_event(&mut harness.app, key(KeyCode::Tab)).unwrap();
        assert_eq!(harness.app.route(), Route::CreateAccount);
    }

    #[test]
    fn test_arrow_keys_cycle_sender() {
        let api = FakeApi::new().with_accounts(Ok(vec![
            Account::new("0xa", Some("Alice".into())),
            Account::new("0xb", None),
        ]));
        let mut harness = Harness::new(api, Route::Transaction);
        harness.pump();

        handle_event(&mut harness.app, key(KeyCode::Right)).unwrap();
        // Balance lookup for the new sender (unconfigured, so it fails)
        harness.pump();

        let Screen::Transaction(controller) = harness.app.screen() else {
            panic!("expected transaction screen");
        };
        assert_eq!(controller.from().map(|a| a.as_str()), Some("0xa"));
        assert_eq!(
            controller.sender_balance(),
            &crate::controllers::SenderBalance::Failed
        );
    }

    #[test]
    fn test_refresh_key_reloads_accounts() {
        let api = FakeApi::new().with_accounts(Ok(vec![]));
        let mut harness = Harness::new(api, Route::Accounts);
        harness.pump();

        handle_event(&mut harness.app, key(KeyCode::Char('r'))).unwrap();
        harness.pump();

        let Screen::Accounts(controller) = harness.app.screen() else {
            panic!("expected accounts screen");
        };
        assert!(!controller.is_loading());
    }
}
