use super::error::StateError;
use super::form::{contact_record, contact_schema, ContactField, SubmitStatus};
use super::navigation::{Focus, Page, MENU_PAGES};
use crate::app::NetworkEventSender;
use crate::content::{sub_sections, ContactMethod, Content};
use crate::events::network::Event as NetworkEvent;
use crate::logger::LogEntries;
use crate::relay::RelayStatus;
use crate::theme::{RootSurface, Theme, ThemeStore};
use crate::ui::widgets::fireflies::Fireflies;
use crate::validation::Form;
use log::*;
use ratatui::layout::Rect;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Time before the intro offers to continue.
///
pub const INTRO_DELAY: Duration = Duration::from_secs(2);

/// Number of fireflies drawn behind the intro and landing pages.
///
const FIREFLY_COUNT: usize = 24;

/// Houses data representative of application state.
///
pub struct State {
    net_sender: Option<NetworkEventSender>,
    theme: ThemeStore,
    content: Content,
    relay_status: RelayStatus,
    terminal_size: Rect,
    page_stack: Vec<Page>,
    current_focus: Focus,
    menu_index: usize,
    section_index: usize,
    project_index: usize,
    contact_method_index: usize,
    contact_form: Form<ContactField>,
    active_field: Option<ContactField>,
    submit_status: SubmitStatus,
    submit_error: Option<String>,
    started_at: Instant,
    fireflies: Fireflies,
    show_log: bool,
    log_entries: LogEntries,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> Self {
        State {
            net_sender: None,
            theme: ThemeStore::default(),
            content: Content::default(),
            relay_status: RelayStatus::default(),
            terminal_size: Rect::default(),
            page_stack: vec![Page::Intro],
            current_focus: Focus::Page,
            menu_index: 0,
            section_index: 0,
            project_index: 0,
            contact_method_index: 0,
            contact_form: Form::new(contact_schema()),
            active_field: None,
            submit_status: SubmitStatus::Idle,
            submit_error: None,
            started_at: Instant::now(),
            fireflies: Fireflies::new(FIREFLY_COUNT, &mut rand::thread_rng()),
            show_log: false,
            log_entries: Arc::new(Mutex::new(vec![])),
        }
    }
}

impl State {
    pub fn new(
        net_sender: NetworkEventSender,
        content: Content,
        theme: Theme,
        start_page: Page,
        relay_status: RelayStatus,
        log_entries: LogEntries,
    ) -> Self {
        let mut theme = ThemeStore::new(theme);
        theme.subscribe(|theme| info!("Switched to {} theme.", theme));
        let current_focus = match start_page {
            Page::Intro => Focus::Page,
            _ => Focus::Menu,
        };
        State {
            net_sender: Some(net_sender),
            theme,
            content,
            relay_status,
            page_stack: vec![start_page],
            current_focus,
            menu_index: MENU_PAGES
                .iter()
                .position(|page| *page == start_page)
                .unwrap_or(0),
            log_entries,
            ..State::default()
        }
    }

    /// Get the current theme.
    ///
    pub fn get_theme(&self) -> Theme {
        self.theme.get_theme()
    }

    /// Flip between dark and light.
    ///
    pub fn toggle_theme(&mut self) -> &mut Self {
        self.theme.toggle_theme();
        self
    }

    /// Set an explicit theme.
    ///
    pub fn set_theme(&mut self, theme: Theme) -> &mut Self {
        self.theme.set_theme(theme);
        self
    }

    /// Get the root surface markers for the current theme.
    ///
    pub fn get_surface(&self) -> &RootSurface {
        self.theme.surface()
    }

    /// Get the theme store, mainly to manage subscriptions.
    ///
    pub fn theme_store_mut(&mut self) -> &mut ThemeStore {
        &mut self.theme
    }

    /// Get the portfolio content.
    ///
    pub fn get_content(&self) -> &Content {
        &self.content
    }

    /// Get the relay configuration summary.
    ///
    pub fn get_relay_status(&self) -> &RelayStatus {
        &self.relay_status
    }

    /// Get the terminal size.
    ///
    pub fn get_terminal_size(&self) -> Rect {
        self.terminal_size
    }

    /// Set the terminal size.
    ///
    pub fn set_terminal_size(&mut self, size: Rect) -> &mut Self {
        self.terminal_size = size;
        self
    }

    /// Return the page currently displayed.
    ///
    pub fn current_page(&self) -> Page {
        self.page_stack.last().copied().unwrap_or(Page::NotFound)
    }

    /// Show a page, keeping the previous one for going back.
    ///
    pub fn navigate_to(&mut self, page: Page) -> &mut Self {
        if self.current_page() == page {
            return self;
        }
        debug!("Navigating to {}...", page.route());
        self.active_field = None;
        self.page_stack.push(page);
        if let Some(index) = MENU_PAGES.iter().position(|p| *p == page) {
            self.menu_index = index;
        }
        self
    }

    /// Resolve a route and show its page.
    ///
    pub fn navigate_to_route(&mut self, route: &str) -> &mut Self {
        self.navigate_to(Page::from_route(route))
    }

    /// Return to the previous page. Returns false at the first page.
    ///
    pub fn go_back(&mut self) -> bool {
        if self.page_stack.len() <= 1 {
            return false;
        }
        self.active_field = None;
        self.page_stack.pop();
        if let Some(index) = MENU_PAGES.iter().position(|p| *p == self.current_page()) {
            self.menu_index = index;
        }
        true
    }

    /// Get the current focus.
    ///
    pub fn current_focus(&self) -> Focus {
        self.current_focus
    }

    /// Move focus to the top menu.
    ///
    pub fn focus_menu(&mut self) -> &mut Self {
        self.current_focus = Focus::Menu;
        self.active_field = None;
        self
    }

    /// Move focus to the page body.
    ///
    pub fn focus_page(&mut self) -> &mut Self {
        self.current_focus = Focus::Page;
        self
    }

    /// Get the selected menu index.
    ///
    pub fn get_menu_index(&self) -> usize {
        self.menu_index
    }

    /// Select the next menu item, wrapping around.
    ///
    pub fn next_menu_item(&mut self) -> &mut Self {
        self.menu_index = (self.menu_index + 1) % MENU_PAGES.len();
        self
    }

    /// Select the previous menu item, wrapping around.
    ///
    pub fn previous_menu_item(&mut self) -> &mut Self {
        self.menu_index = (self.menu_index + MENU_PAGES.len() - 1) % MENU_PAGES.len();
        self
    }

    /// Open the page of the selected menu item.
    ///
    pub fn select_menu_item(&mut self) -> &mut Self {
        let page = MENU_PAGES[self.menu_index];
        self.navigate_to(page).focus_page()
    }

    /// Get the selected landing page card.
    ///
    pub fn get_section_index(&self) -> usize {
        self.section_index
    }

    pub fn next_section(&mut self) -> &mut Self {
        self.section_index = next_index(self.section_index, sub_sections().len());
        self
    }

    pub fn previous_section(&mut self) -> &mut Self {
        self.section_index = previous_index(self.section_index, sub_sections().len());
        self
    }

    /// Open the page linked from the selected landing page card.
    ///
    pub fn open_section(&mut self) -> &mut Self {
        if let Some(section) = sub_sections().get(self.section_index) {
            let page = section.page;
            self.navigate_to(page);
        }
        self
    }

    /// Get the selected project.
    ///
    pub fn get_project_index(&self) -> usize {
        self.project_index
    }

    pub fn next_project(&mut self) -> &mut Self {
        self.project_index = next_index(self.project_index, self.content.projects.len());
        self
    }

    pub fn previous_project(&mut self) -> &mut Self {
        self.project_index = previous_index(self.project_index, self.content.projects.len());
        self
    }

    /// Get the selected contact method index.
    ///
    pub fn get_contact_method_index(&self) -> usize {
        self.contact_method_index
    }

    /// Get the selected contact method.
    ///
    pub fn selected_contact_method(&self) -> Option<&ContactMethod> {
        self.content.contact_methods.get(self.contact_method_index)
    }

    pub fn next_contact_method(&mut self) -> &mut Self {
        self.contact_method_index = next_index(
            self.contact_method_index,
            self.content.contact_methods.len(),
        );
        self
    }

    pub fn previous_contact_method(&mut self) -> &mut Self {
        self.contact_method_index = previous_index(
            self.contact_method_index,
            self.content.contact_methods.len(),
        );
        self
    }

    /// Get the contact form.
    ///
    pub fn get_contact_form(&self) -> &Form<ContactField> {
        &self.contact_form
    }

    /// Get the contact field receiving input, if any.
    ///
    pub fn get_active_field(&self) -> Option<ContactField> {
        self.active_field
    }

    /// True while keystrokes go into the contact form.
    ///
    pub fn is_typing(&self) -> bool {
        self.active_field.is_some() && self.current_page() == Page::Contact
    }

    /// Start typing into a field.
    ///
    pub fn focus_field(&mut self, field: ContactField) -> &mut Self {
        self.active_field = Some(field);
        self.current_focus = Focus::Page;
        self
    }

    /// Leave the active field, touching it.
    ///
    pub fn blur_field(&mut self) -> &mut Self {
        if let Some(field) = self.active_field.take() {
            self.contact_form.touch(field);
        }
        self
    }

    /// Move to the next field, touching the one being left.
    ///
    pub fn next_field(&mut self) -> &mut Self {
        let next = match self.active_field {
            Some(field) => {
                self.contact_form.touch(field);
                field.next()
            }
            None => ContactField::Name,
        };
        self.focus_field(next)
    }

    /// Move to the previous field, touching the one being left.
    ///
    pub fn previous_field(&mut self) -> &mut Self {
        let previous = match self.active_field {
            Some(field) => {
                self.contact_form.touch(field);
                field.previous()
            }
            None => ContactField::Message,
        };
        self.focus_field(previous)
    }

    /// Append a character to the active field.
    ///
    pub fn add_field_char(&mut self, c: char) -> &mut Self {
        if let Some(field) = self.active_field {
            let mut value = self.contact_form.value(field).to_owned();
            value.push(c);
            self.contact_form.set_value(field, &value);
        }
        self
    }

    /// Remove the last character of the active field.
    ///
    pub fn remove_field_char(&mut self) -> &mut Self {
        if let Some(field) = self.active_field {
            let mut value = self.contact_form.value(field).to_owned();
            value.pop();
            self.contact_form.set_value(field, &value);
        }
        self
    }

    /// Store a value by input name as the form would receive it.
    ///
    pub fn change_field(&mut self, name: &str, value: &str) -> Result<&mut Self, StateError> {
        self.contact_form.handle_change(name, value)?;
        Ok(self)
    }

    /// Get the submission status.
    ///
    pub fn get_submit_status(&self) -> SubmitStatus {
        self.submit_status
    }

    /// Get the reason the last submission failed.
    ///
    pub fn get_submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    /// Validate the whole form and hand a valid record to the network thread.
    /// Returns true if a submission was dispatched.
    ///
    pub fn submit_contact(&mut self) -> bool {
        if self.submit_status == SubmitStatus::Sending {
            debug!("Skipping submit while a message is being sent.");
            return false;
        }
        if !self.contact_form.validate_form() {
            info!("Contact form has errors, not sending.");
            return false;
        }
        self.submit_status = SubmitStatus::Sending;
        self.submit_error = None;
        self.active_field = None;
        self.dispatch(NetworkEvent::SendContact(contact_record(&self.contact_form)));
        true
    }

    /// Record a delivered message and clear the form.
    ///
    pub fn on_submit_success(&mut self) -> &mut Self {
        self.submit_status = SubmitStatus::Success;
        self.submit_error = None;
        self.contact_form.reset();
        self
    }

    /// Record a failed delivery. Form values are kept for another attempt.
    ///
    pub fn on_submit_failure(&mut self, reason: String) -> &mut Self {
        self.submit_status = SubmitStatus::Error;
        self.submit_error = Some(reason);
        self
    }

    /// True once the intro delay has passed.
    ///
    pub fn intro_ready(&self) -> bool {
        self.started_at.elapsed() >= INTRO_DELAY
    }

    /// Get the fireflies.
    ///
    pub fn get_fireflies(&self) -> &Fireflies {
        &self.fireflies
    }

    /// Advance animations by one tick.
    ///
    pub fn tick(&mut self) -> &mut Self {
        self.fireflies.step(&mut rand::thread_rng());
        self
    }

    /// Check if the log panel is shown.
    ///
    pub fn is_log_visible(&self) -> bool {
        self.show_log
    }

    pub fn toggle_log(&mut self) -> &mut Self {
        self.show_log = !self.show_log;
        self
    }

    /// Get a copy of the captured log entries.
    ///
    pub fn get_log_entries(&self) -> Vec<String> {
        match self.log_entries.lock() {
            Ok(entries) => entries.clone(),
            Err(_) => vec![],
        }
    }

    /// Send a network event, logging failures.
    ///
    pub fn dispatch(&self, event: NetworkEvent) {
        if let Err(err) = self.try_dispatch(event) {
            error!("Received error from network dispatch: {}", err);
        }
    }

    fn try_dispatch(&self, event: NetworkEvent) -> Result<(), StateError> {
        let net_sender = self.net_sender.as_ref().ok_or(StateError::SenderNotSet)?;
        net_sender
            .send(event)
            .map_err(|err| StateError::DispatchFailed(err.to_string()))
    }
}

fn next_index(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (index + 1) % len
    }
}

fn previous_index(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (index + len - 1) % len
    }
}
