use crate::config::Config;
use crate::conversation::Conversation;
use crate::navigation::{Destination, HubEntry, Navigator, Router};
use crate::ui::{AssetDetailWidget, ChatView, HubView, InputBox, ProfileWidget, SettingsView, StatusBar};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind},
    execute, queue,
    terminal::{disable_raw_mode, enable_raw_mode, BeginSynchronizedUpdate, EndSynchronizedUpdate, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    Terminal,
};
use std::io::{self, Stdout, Write};
use std::time::Duration;

const APP_NAME: &str = "CryptoBot";
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const PAGE_LINES: usize = 10;

/// Input modes determine which keybindings are active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputMode {
    /// Static screens: selection, navigation triggers
    Browse,
    /// Chat screen: keys go to the draft buffer
    Editing,
}

/// Actions that can be triggered by key events
#[derive(Debug, Clone, PartialEq, Eq)]
enum Action {
    InsertChar(char),
    DeleteBack,
    DeleteForward,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    Submit,
    Cancel,
    SelectPrev,
    SelectNext,
    Activate,
    OpenChat,
    OpenSettings,
    OpenProfile,
    Back,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    Quit,
}

/// Submit the draft to the conversation. The buffer is drained only when
/// the conversation accepts; a blank draft stays as typed.
fn submit_draft(input: &mut InputBox, conversation: &mut Conversation) -> bool {
    if conversation.submit(input.content()).is_some() {
        input.clear();
        true
    } else {
        false
    }
}

/// Map a key event to an action based on the current input mode
fn map_key(mode: InputMode, key: KeyEvent) -> Option<Action> {
    // Global shortcuts (work in all modes)
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('c') = key.code {
            return Some(Action::Quit);
        }
    }

    match mode {
        InputMode::Browse => map_key_browse(key),
        InputMode::Editing => map_key_editing(key),
    }
}

fn map_key_browse(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('s') => Some(Action::OpenSettings),
        KeyCode::Char('p') => Some(Action::OpenProfile),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::SelectPrev),
        KeyCode::Char('j') | KeyCode::Down => Some(Action::SelectNext),
        KeyCode::Tab => Some(Action::OpenChat),
        KeyCode::Enter => Some(Action::Activate),
        KeyCode::Esc => Some(Action::Back),
        KeyCode::PageUp => Some(Action::PageUp),
        KeyCode::PageDown => Some(Action::PageDown),
        _ => None,
    }
}

fn map_key_editing(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char(c) => Some(Action::InsertChar(c)),
        KeyCode::Backspace => Some(Action::DeleteBack),
        KeyCode::Delete => Some(Action::DeleteForward),
        KeyCode::Left => Some(Action::CursorLeft),
        KeyCode::Right => Some(Action::CursorRight),
        KeyCode::Home => Some(Action::CursorHome),
        KeyCode::End => Some(Action::CursorEnd),
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Esc => Some(Action::Cancel),
        KeyCode::Tab => Some(Action::Back),
        KeyCode::Up => Some(Action::ScrollUp),
        KeyCode::Down => Some(Action::ScrollDown),
        KeyCode::PageUp => Some(Action::PageUp),
        KeyCode::PageDown => Some(Action::PageDown),
        _ => None,
    }
}

/// Application state
pub struct App {
    config: Config,
    terminal: Terminal<CrosstermBackend<Stdout>>,
    router: Router,
    conversation: Conversation,
    input: InputBox,
    chat: ChatView,
    hub: HubView,
    settings: SettingsView,
    should_quit: bool,
}

impl App {
    /// Create a new application
    pub async fn new(config: Config, start: Destination) -> Result<Self> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            EnterAlternateScreen,
            EnableMouseCapture,
            crossterm::terminal::SetTitle(format!("{} v{}", APP_NAME, APP_VERSION)),
        )
        .context("Failed to setup terminal")?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).context("Failed to create terminal")?;

        let conversation = Conversation::new(config.assistant.reply.clone());
        let input = InputBox::new(config.assistant.input_placeholder.clone());

        Ok(Self {
            config,
            terminal,
            router: Router::new(start),
            conversation,
            input,
            chat: ChatView::new(),
            hub: HubView::new(),
            settings: SettingsView::new(),
            should_quit: false,
        })
    }

    /// Run the main event loop - purely event-driven rendering
    pub async fn run(&mut self) -> Result<()> {
        tracing::info!(start = ?self.router.current(), "starting UI");

        // Initial render
        self.draw()?;

        // Main event loop - only renders on actual events
        loop {
            // Block until we get an event - no polling when idle
            if event::poll(Duration::from_secs(60))? {
                let needs_redraw = match event::read()? {
                    Event::Key(key) => {
                        if key.kind != KeyEventKind::Release {
                            if let Some(action) = map_key(self.input_mode(), key) {
                                self.handle_action(action);
                            }
                        }
                        true
                    }
                    Event::Mouse(mouse) => {
                        self.handle_mouse_event(mouse);
                        true
                    }
                    Event::Resize(_, _) => true,
                    _ => false,
                };

                if needs_redraw {
                    self.draw()?;
                }
            }

            if self.should_quit {
                break;
            }
        }

        self.cleanup()
    }

    /// Which keybinding table is active, derived from the current screen
    fn input_mode(&self) -> InputMode {
        match self.router.current() {
            Destination::Chat => InputMode::Editing,
            _ => InputMode::Browse,
        }
    }

    /// Status bar hints for the current screen
    fn hints(&self) -> &'static str {
        match self.router.current() {
            Destination::Home => "↑↓ select · enter open · tab chat · q quit",
            Destination::Chat => "enter send · esc clear/back · tab home",
            Destination::Asset(_) => "esc back · q quit",
            Destination::Settings => "↑↓ scroll · esc back",
            Destination::Profile => "s account settings · esc back",
        }
    }

    /// Draw the UI with synchronized updates to prevent tearing
    fn draw(&mut self) -> Result<()> {
        let screen = self.router.current();
        let hints = self.hints();
        let size = self.terminal.size()?;

        // Input height grows with the draft, capped at half the screen
        let input_height = self
            .input
            .required_height(size.width)
            .min(size.height / 2)
            .max(3);

        let config = &self.config;
        let conversation = &self.conversation;
        let input = &self.input;
        let chat = &self.chat;
        let hub = &self.hub;
        let settings = &self.settings;

        // Begin synchronized update - terminal buffers all changes
        queue!(self.terminal.backend_mut(), BeginSynchronizedUpdate)?;

        self.terminal.draw(|frame| {
            let chunks = Layout::vertical([
                Constraint::Min(1),    // Screen content
                Constraint::Length(1), // Status bar
            ])
            .split(frame.area());

            match screen {
                Destination::Home => {
                    frame.render_widget(
                        hub.widget(&config.market.quotes, &config.assistant.hub_prompt),
                        chunks[0],
                    );
                }
                Destination::Chat => {
                    let rows = Layout::vertical([
                        Constraint::Min(5),               // Conversation
                        Constraint::Length(input_height), // Draft input
                    ])
                    .split(chunks[0]);
                    frame.render_widget(
                        chat.widget(conversation, config.general.show_timestamps),
                        rows[0],
                    );
                    frame.render_widget(input.widget(), rows[1]);
                }
                Destination::Asset(asset) => {
                    frame.render_widget(AssetDetailWidget::new(asset), chunks[0]);
                }
                Destination::Settings => {
                    frame.render_widget(settings.widget(), chunks[0]);
                }
                Destination::Profile => {
                    frame.render_widget(ProfileWidget::new(&config.profile), chunks[0]);
                }
            }

            frame.render_widget(
                StatusBar::new(APP_NAME, APP_VERSION, screen.title(), hints),
                chunks[1],
            );
        })?;

        // End synchronized update - terminal renders atomically
        queue!(self.terminal.backend_mut(), EndSynchronizedUpdate)?;
        self.terminal.backend_mut().flush()?;

        Ok(())
    }

    /// Handle an action
    fn handle_action(&mut self, action: Action) {
        match action {
            Action::InsertChar(c) => self.input.insert_char(c),
            Action::DeleteBack => self.input.delete_char(),
            Action::DeleteForward => self.input.delete_char_forward(),
            Action::CursorLeft => self.input.move_cursor_left(),
            Action::CursorRight => self.input.move_cursor_right(),
            Action::CursorHome => self.input.move_cursor_start(),
            Action::CursorEnd => self.input.move_cursor_end(),
            Action::Submit => {
                if submit_draft(&mut self.input, &mut self.conversation) {
                    self.chat.enable_auto_scroll();
                }
            }
            Action::Cancel => {
                if self.input.is_empty() {
                    self.router.back();
                } else {
                    self.input.clear();
                }
            }
            Action::SelectPrev => match self.router.current() {
                Destination::Home => self.hub.select_prev(),
                Destination::Settings => self.settings.scroll_up(),
                _ => {}
            },
            Action::SelectNext => match self.router.current() {
                Destination::Home => self.hub.select_next(self.config.market.quotes.len()),
                Destination::Settings => self.settings.scroll_down(),
                _ => {}
            },
            Action::Activate => match self.router.current() {
                Destination::Home => {
                    let selected = self
                        .config
                        .market
                        .quotes
                        .get(self.hub.selected())
                        .map(|quote| quote.asset);
                    if let Some(asset) = selected {
                        HubEntry::Asset(asset).activate(&mut self.router);
                    }
                }
                // The profile's "Account Settings" button
                Destination::Profile => HubEntry::Settings.activate(&mut self.router),
                _ => {}
            },
            Action::OpenChat => self.router.navigate_to(Destination::Chat),
            Action::OpenSettings => HubEntry::Settings.activate(&mut self.router),
            Action::OpenProfile => HubEntry::Profile.activate(&mut self.router),
            Action::Back => {
                self.router.back();
            }
            Action::ScrollUp => self.scroll_current(1, true),
            Action::ScrollDown => self.scroll_current(1, false),
            Action::PageUp => self.scroll_current(PAGE_LINES, true),
            Action::PageDown => self.scroll_current(PAGE_LINES, false),
            Action::Quit => self.should_quit = true,
        }
    }

    /// Route scrolling to whichever screen owns a scrollable view
    fn scroll_current(&mut self, lines: usize, up: bool) {
        match self.router.current() {
            Destination::Chat => {
                if up {
                    self.chat.page_up(lines);
                } else {
                    self.chat.page_down(lines);
                }
            }
            Destination::Settings => {
                for _ in 0..lines {
                    if up {
                        self.settings.scroll_up();
                    } else {
                        self.settings.scroll_down();
                    }
                }
            }
            _ => {}
        }
    }

    /// Handle mouse events
    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.scroll_current(1, true),
            MouseEventKind::ScrollDown => self.scroll_current(1, false),
            _ => {}
        }
    }

    /// Cleanup terminal
    fn cleanup(&mut self) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture,
        )
        .context("Failed to cleanup terminal")?;
        self.terminal
            .show_cursor()
            .context("Failed to show cursor")?;

        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
