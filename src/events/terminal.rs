use crate::state::{ContactField, Focus, Page, State, MENU_PAGES};
use anyhow::Result;
use clipboard::{ClipboardContext, ClipboardProvider};
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            loop {
                match event::poll(tick_rate) {
                    Ok(true) => match event::read() {
                        Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                            if tx_clone.send(Event::Input(key)).is_err() {
                                break;
                            }
                        }
                        Ok(_) => (),
                        Err(e) => {
                            error!("Failed to read terminal event: {}", e);
                            break;
                        }
                    },
                    Ok(false) => (),
                    Err(e) => {
                        error!("Failed to poll terminal events: {}", e);
                        break;
                    }
                }
                if tx_clone.send(Event::Tick).is_err() {
                    break;
                }
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(key) => Ok(handle_key(state, key)),
            Event::Tick => {
                state.tick();
                Ok(true)
            }
        }
    }
}

impl Default for Handler {
    fn default() -> Self {
        Handler::new()
    }
}

/// Apply a key press to state. Returns false if exit was requested.
///
pub fn handle_key(state: &mut State, key: KeyEvent) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        debug!("Processing exit terminal event '{:?}'...", key);
        return false;
    }

    if state.is_typing() {
        handle_typing_key(state, key);
        return true;
    }

    match key.code {
        KeyCode::Char('q') => {
            debug!("Processing exit terminal event '{:?}'...", key);
            return false;
        }
        KeyCode::Char('t') => {
            state.toggle_theme();
        }
        KeyCode::Char('d') => {
            state.toggle_log();
        }
        KeyCode::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            state.navigate_to(MENU_PAGES[index]).focus_page();
        }
        KeyCode::Tab | KeyCode::BackTab => match state.current_focus() {
            Focus::Menu => {
                state.focus_page();
            }
            Focus::Page => {
                state.focus_menu();
            }
        },
        KeyCode::Esc => {
            if !state.go_back() {
                state.focus_menu();
            }
        }
        _ => match state.current_focus() {
            Focus::Menu => handle_menu_key(state, key),
            Focus::Page => handle_page_key(state, key),
        },
    }
    true
}

/// Keys while a contact field receives input.
///
fn handle_typing_key(state: &mut State, key: KeyEvent) {
    match key.code {
        KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.toggle_theme();
        }
        KeyCode::Char(c)
            if key.modifiers == KeyModifiers::NONE || key.modifiers == KeyModifiers::SHIFT =>
        {
            state.add_field_char(c);
        }
        KeyCode::Backspace => {
            state.remove_field_char();
        }
        KeyCode::Tab => {
            state.next_field();
        }
        KeyCode::BackTab => {
            state.previous_field();
        }
        KeyCode::Enter => {
            state.submit_contact();
        }
        KeyCode::Esc => {
            state.blur_field();
        }
        _ => debug!("Ignoring key '{:?}' while typing.", key.code),
    }
}

/// Keys while the top menu has focus.
///
fn handle_menu_key(state: &mut State, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => {
            state.previous_menu_item();
        }
        KeyCode::Right | KeyCode::Char('l') => {
            state.next_menu_item();
        }
        KeyCode::Enter => {
            state.select_menu_item();
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.focus_page();
        }
        _ => (),
    }
}

/// Keys while the page body has focus.
///
fn handle_page_key(state: &mut State, key: KeyEvent) {
    match (state.current_page(), key.code) {
        (Page::Intro, KeyCode::Enter | KeyCode::Char(' ')) => {
            if state.intro_ready() {
                state.navigate_to(Page::Main);
            }
        }
        (Page::Main, KeyCode::Down | KeyCode::Char('j')) => {
            state.next_section();
        }
        (Page::Main, KeyCode::Up | KeyCode::Char('k')) => {
            state.previous_section();
        }
        (Page::Main, KeyCode::Enter) => {
            state.open_section();
        }
        (Page::Projects, KeyCode::Down | KeyCode::Char('j')) => {
            state.next_project();
        }
        (Page::Projects, KeyCode::Up | KeyCode::Char('k')) => {
            state.previous_project();
        }
        (Page::Contact, KeyCode::Down | KeyCode::Char('j')) => {
            state.next_contact_method();
        }
        (Page::Contact, KeyCode::Up | KeyCode::Char('k')) => {
            state.previous_contact_method();
        }
        (Page::Contact, KeyCode::Enter | KeyCode::Char('i')) => {
            state.focus_field(ContactField::Name);
        }
        (Page::Contact, KeyCode::Char('y')) => copy_contact_method(state),
        (Page::NotFound, KeyCode::Enter) => {
            state.navigate_to(Page::Main);
        }
        _ => (),
    }
}

/// Copy the selected contact method to the clipboard.
///
fn copy_contact_method(state: &State) {
    let method = match state.selected_contact_method() {
        Some(method) => method,
        None => return,
    };
    let contents = method.link.clone().unwrap_or_else(|| method.value.clone());
    match ClipboardContext::new() {
        Ok(mut ctx) => match ctx.set_contents(contents) {
            Ok(_) => {
                info!("{} copied to clipboard", method.title);
            }
            Err(e) => {
                warn!("Failed to copy to clipboard: {}", e);
            }
        },
        Err(e) => {
            warn!("Failed to initialize clipboard: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SubmitStatus;
    use crate::theme::Theme;

    fn press(state: &mut State, code: KeyCode) -> bool {
        handle_key(state, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn contact_state() -> State {
        let mut state = State::default();
        state.navigate_to(Page::Contact).focus_page();
        state
    }

    #[test]
    fn quit_keys() {
        let mut state = State::default();
        assert!(!press(&mut state, KeyCode::Char('q')));
        assert!(!handle_key(
            &mut state,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
        ));
    }

    #[test]
    fn toggle_theme_key() {
        let mut state = State::default();
        assert!(press(&mut state, KeyCode::Char('t')));
        assert_eq!(state.get_theme(), Theme::Light);
    }

    #[test]
    fn typing_captures_letters() {
        let mut state = contact_state();
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.get_active_field(), Some(ContactField::Name));
        for c in "tq".chars() {
            assert!(press(&mut state, KeyCode::Char(c)));
        }
        assert_eq!(state.get_contact_form().value(ContactField::Name), "tq");
        assert_eq!(state.get_theme(), Theme::Dark);

        handle_key(
            &mut state,
            KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL),
        );
        assert_eq!(state.get_theme(), Theme::Light);
    }

    #[test]
    fn tab_touches_left_field() {
        let mut state = contact_state();
        press(&mut state, KeyCode::Enter);
        press(&mut state, KeyCode::Tab);
        assert_eq!(state.get_active_field(), Some(ContactField::Email));
        assert!(state.get_contact_form().is_touched(ContactField::Name));
        press(&mut state, KeyCode::BackTab);
        assert_eq!(state.get_active_field(), Some(ContactField::Name));
        press(&mut state, KeyCode::Esc);
        assert_eq!(state.get_active_field(), None);
        assert_eq!(state.current_page(), Page::Contact);
    }

    #[test]
    fn enter_submits_invalid_form() {
        let mut state = contact_state();
        press(&mut state, KeyCode::Enter);
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.get_submit_status(), SubmitStatus::Idle);
        assert!(state.get_contact_form().error(ContactField::Email).is_some());
    }

    #[test]
    fn menu_navigation() {
        let mut state = State::default();
        state.focus_menu();
        press(&mut state, KeyCode::Right);
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.current_page(), Page::Projects);
        assert_eq!(state.current_focus(), Focus::Page);
        press(&mut state, KeyCode::Esc);
        assert_eq!(state.current_page(), Page::Intro);
    }

    #[test]
    fn number_keys_jump_to_pages() {
        let mut state = State::default();
        press(&mut state, KeyCode::Char('3'));
        assert_eq!(state.current_page(), Page::About);
    }

    #[test]
    fn intro_waits_before_continuing() {
        let mut state = State::default();
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.current_page(), Page::Intro);
    }
}
