//! Application state: the selection screen, the game screen hosting one
//! session, and the developer error panel.
//!
//! Input arrives as UI-agnostic [`AppInput`] values and time as `tick` calls,
//! so the whole flow runs without a terminal.

use crate::challenges::{ActiveMinigame, ChoiceInput};
use crate::core::constants::{MAX_CONSECUTIVE_IO_FAILURES, RESULT_BANNER_MS};
use crate::core::{AnswerResult, Category, GameLoop, SessionConfig, SessionListener, Task};
use crate::diagnostics::{DiagnosticsSink, ErrorContext, ErrorLog, SubscriptionId};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::io;
use std::rc::Rc;
use std::time::Duration;

/// A game offered on the selection screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameEntry {
    pub category: Category,
    pub icon: &'static str,
    pub description: &'static str,
}

pub const GAMES: [GameEntry; 3] = [
    GameEntry {
        category: Category::ColorHop,
        icon: "◐",
        description: "Match the colors and hop!",
    },
    GameEntry {
        category: Category::Math,
        icon: "±",
        description: "Solve the math questions!",
    },
    GameEntry {
        category: Category::Language,
        icon: "Aa",
        description: "Find the words!",
    },
];

/// Input actions for the app (UI-agnostic).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppInput {
    Up,
    Down,
    Left,
    Right,
    Select,
    /// Number key, zero-based.
    Digit(usize),
    Back,
    ToggleErrors,
    ClearErrors,
    ExportErrors,
    Quit,
    Other,
}

/// Session event queued for the game screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Task(Task),
    Result(AnswerResult),
}

/// Listener that queues session events until the screen drains them.
#[derive(Debug, Default)]
pub struct SessionEvents {
    pending: Vec<SessionEvent>,
}

impl SessionEvents {
    pub fn drain(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.pending)
    }
}

impl SessionListener for SessionEvents {
    fn on_task(&mut self, task: &Task) {
        self.pending.push(SessionEvent::Task(task.clone()));
    }

    fn on_result(&mut self, result: &AnswerResult) {
        self.pending.push(SessionEvent::Result(*result));
    }
}

/// The screen playing one session.
pub struct GameScreen {
    pub session: GameLoop<SessionEvents>,
    /// Minigame for the current task; `None` if its category has none.
    pub minigame: Option<ActiveMinigame>,
    pub last_result: Option<AnswerResult>,
    pub banner_remaining: Duration,
    rng: StdRng,
}

impl GameScreen {
    fn open(category: Category, seed: Option<u64>, diagnostics: Box<dyn DiagnosticsSink>) -> Self {
        let config = SessionConfig {
            seed,
            ..SessionConfig::for_category(Some(category))
        };
        let mut session = GameLoop::with_config(SessionEvents::default(), config);
        session.attach_diagnostics(diagnostics);

        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
            None => StdRng::from_entropy(),
        };

        let mut screen = Self {
            session,
            minigame: None,
            last_result: None,
            banner_remaining: Duration::ZERO,
            rng,
        };
        if let Err(e) = screen.session.start() {
            tracing::warn!("could not start session: {}", e);
        }
        screen.drain_events();
        screen
    }

    pub fn category(&self) -> Option<Category> {
        self.session.category()
    }

    pub fn current_task(&self) -> Option<&Task> {
        self.session.current_task()
    }

    pub fn showing_result(&self) -> bool {
        self.last_result.is_some() && !self.banner_remaining.is_zero()
    }

    fn process_input(&mut self, input: ChoiceInput) {
        if let Some(game) = self.minigame.as_mut() {
            game.process_input(input);
        }
    }

    fn tick(&mut self, elapsed: Duration) {
        self.banner_remaining = self.banner_remaining.saturating_sub(elapsed);
        self.session.tick(elapsed);

        let answer = self.minigame.as_mut().and_then(|game| game.tick(elapsed));
        if let Some(correct) = answer {
            // Rejections are already reported to the session's diagnostics.
            if let Err(e) = self.session.submit_answer(correct) {
                tracing::debug!("answer not accepted: {}", e);
            }
        }

        self.drain_events();
    }

    fn drain_events(&mut self) {
        for event in self.session.listener_mut().drain() {
            match event {
                SessionEvent::Task(task) => {
                    self.minigame = ActiveMinigame::for_task(&task, &mut self.rng);
                }
                SessionEvent::Result(result) => {
                    self.last_result = Some(result);
                    self.banner_remaining = Duration::from_millis(RESULT_BANNER_MS);
                }
            }
        }
    }

    fn close(&mut self) {
        self.session.dispose();
        self.minigame = None;
    }
}

/// Map app input onto a minigame choice.
fn choice_input(input: AppInput) -> ChoiceInput {
    match input {
        AppInput::Left | AppInput::Up => ChoiceInput::Left,
        AppInput::Right | AppInput::Down => ChoiceInput::Right,
        AppInput::Select => ChoiceInput::Select,
        AppInput::Digit(index) => ChoiceInput::Pick(index),
        _ => ChoiceInput::Other,
    }
}

pub enum Screen {
    Selection,
    Game(Box<GameScreen>),
}

pub struct App {
    pub screen: Screen,
    pub selected_index: usize,
    pub show_errors: bool,
    /// One-line feedback shown in the footer.
    pub status: Option<String>,
    pub should_quit: bool,
    error_log: Rc<RefCell<ErrorLog>>,
    unseen_errors: Rc<Cell<usize>>,
    subscription: Option<SubscriptionId>,
    seed: Option<u64>,
    io_failures: u32,
}

impl App {
    /// `seed` fixes every random choice (for tests and replays).
    pub fn new(error_log: Rc<RefCell<ErrorLog>>, seed: Option<u64>) -> Self {
        let unseen_errors = Rc::new(Cell::new(0));
        let counter = unseen_errors.clone();
        let subscription = error_log
            .borrow_mut()
            .subscribe(Box::new(move |entry| match entry {
                Some(_) => counter.set(counter.get() + 1),
                None => counter.set(0),
            }));

        Self {
            screen: Screen::Selection,
            selected_index: 0,
            show_errors: false,
            status: None,
            should_quit: false,
            error_log,
            unseen_errors,
            subscription: Some(subscription),
            seed,
            io_failures: 0,
        }
    }

    pub fn error_log(&self) -> &Rc<RefCell<ErrorLog>> {
        &self.error_log
    }

    /// Errors reported since the panel was last opened.
    pub fn unseen_errors(&self) -> usize {
        self.unseen_errors.get()
    }

    pub fn game(&self) -> Option<&GameScreen> {
        match &self.screen {
            Screen::Game(game) => Some(game),
            Screen::Selection => None,
        }
    }

    pub fn open_game(&mut self, category: Category) {
        self.close_game();
        tracing::info!(category = %category, "opening game");
        let diagnostics = Box::new(self.error_log.clone());
        self.screen = Screen::Game(Box::new(GameScreen::open(category, self.seed, diagnostics)));
        self.status = None;
    }

    pub fn close_game(&mut self) {
        if let Screen::Game(game) = &mut self.screen {
            game.close();
        }
        self.screen = Screen::Selection;
    }

    pub fn process_input(&mut self, input: AppInput) {
        if input == AppInput::ToggleErrors {
            self.show_errors = !self.show_errors;
            self.unseen_errors.set(0);
            return;
        }

        if self.show_errors {
            self.process_error_panel_input(input);
            return;
        }

        if matches!(self.screen, Screen::Selection) {
            self.process_selection_input(input);
            return;
        }

        match input {
            AppInput::Back => self.close_game(),
            AppInput::Quit => self.quit(),
            _ => {
                if let Screen::Game(game) = &mut self.screen {
                    game.process_input(choice_input(input));
                }
            }
        }
    }

    fn process_selection_input(&mut self, input: AppInput) {
        match input {
            AppInput::Up => {
                self.selected_index = self.selected_index.saturating_sub(1);
            }
            AppInput::Down => {
                if self.selected_index + 1 < GAMES.len() {
                    self.selected_index += 1;
                }
            }
            AppInput::Select => self.open_game(GAMES[self.selected_index].category),
            AppInput::Digit(index) if index < GAMES.len() => {
                self.selected_index = index;
                self.open_game(GAMES[index].category);
            }
            AppInput::Quit | AppInput::Back => self.quit(),
            _ => {}
        }
    }

    fn process_error_panel_input(&mut self, input: AppInput) {
        match input {
            AppInput::ClearErrors => {
                self.error_log.borrow_mut().clear();
                self.status = Some("Error log cleared".to_string());
            }
            AppInput::ExportErrors => self.export_errors(),
            AppInput::Back => self.show_errors = false,
            AppInput::Quit => self.quit(),
            _ => {}
        }
    }

    fn export_errors(&mut self) {
        let exported = self.error_log.borrow().export_to_file();
        match exported {
            Ok(path) => {
                self.status = Some(format!("Exported to {}", path.display()));
            }
            Err(e) => {
                self.error_log
                    .borrow_mut()
                    .report(&e, ErrorContext::new("ErrorPanel", "export"));
                self.status = Some("Export failed".to_string());
            }
        }
    }

    /// Record a failed terminal draw or input read in the error log.
    ///
    /// Returns false once failures have repeated `MAX_CONSECUTIVE_IO_FAILURES`
    /// times in a row; the caller should stop then.
    pub fn report_io_failure(&mut self, action: &'static str, error: &io::Error) -> bool {
        self.io_failures += 1;
        self.error_log.borrow_mut().report(
            error,
            ErrorContext::new("App", action).with("consecutive", self.io_failures),
        );
        self.io_failures < MAX_CONSECUTIVE_IO_FAILURES
    }

    /// A loop iteration went through cleanly.
    pub fn clear_io_failures(&mut self) {
        self.io_failures = 0;
    }

    fn quit(&mut self) {
        self.close_game();
        self.should_quit = true;
    }

    /// Advance timers by `elapsed`.
    pub fn tick(&mut self, elapsed: Duration) {
        if let Screen::Game(game) = &mut self.screen {
            game.tick(elapsed);
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.close_game();
        if let Some(id) = self.subscription.take() {
            if let Ok(mut log) = self.error_log.try_borrow_mut() {
                log.unsubscribe(id);
            }
        }
    }
}
