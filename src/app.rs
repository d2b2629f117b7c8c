//! Dashboard controller
//!
//! Owns the session state and every component, plus the one scheduler all
//! timers live in. Frontends feed it [`Input`]s, call [`Dashboard::tick`]
//! from whatever timer they have, and read back [`DashboardEvent`]s.
//!
//! ```text
//! start() ──► stats every 30 s ──► token bump, redraw dashboard charts
//!         ──► log every 15 s   ──► new entry (dashboard section only)
//!         ──► clock every 1 s  ──► header date/time/uptime
//! ChatSend ─► +500 ms typing placeholder ─► +1500 ms canned reply
//! ToggleTheme ─► +100 ms redraw of every chart
//! ```

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::chart::{ChartId, ChartRenderer, SeriesSource, Surface};
use crate::chat::{choose_reply, ChatMessage, ChatSimulator, ReplyTicket};
use crate::clock::{format_date, format_hm, Clock, Millis};
use crate::config::Config;
use crate::scheduler::Scheduler;
use crate::session::{format_uptime, SessionState, Theme};
use crate::ticker::{token_bump, Counter, CounterBoard, LogEntry, LogFeed};
use crate::view::{Navigation, NavigationController, SettingsTabs, DASHBOARD};

/// Delay between a theme flip and the full chart redraw (ms)
pub const THEME_REDRAW_DELAY_MS: Millis = 100;

/// User interaction routed into the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Sidebar link carrying a section id
    NavClick(String),
    /// Any other element that declares a target section
    ActionClick(String),
    SelectTab(String),
    ToggleTheme,
    /// Composer contents changed
    ChatInput(String),
    /// Send button pressed
    ChatSend,
    /// Key pressed in the composer
    ChatKey { key: String, shift: bool },
}

/// Something observers may want to react to
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DashboardEvent {
    SectionChanged { section: String, shown: bool },
    TabChanged { tab: String, found: bool },
    ThemeChanged { theme: Theme },
    MessageAppended { message: ChatMessage },
    TypingStarted { ticket: ReplyTicket },
    TypingFinished { ticket: ReplyTicket },
    LogEntryAdded { entry: LogEntry },
    CounterUpdated { counter: Counter, value: u64 },
    ChartsRedrawn { charts: Vec<ChartId> },
}

/// Header date and time plus the uptime card
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Header {
    pub date: String,
    pub time: String,
    pub uptime: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Task {
    Stats,
    Log,
    HeaderClock,
    ChatTyping(ReplyTicket),
    ChatReply(ReplyTicket),
    RedrawAll,
}

pub struct Dashboard {
    config: Config,
    clock: Box<dyn Clock>,
    source: Box<dyn SeriesSource>,
    rng: StdRng,
    session: SessionState,
    nav: NavigationController,
    tabs: SettingsTabs,
    charts: ChartRenderer,
    chat: ChatSimulator,
    log: LogFeed,
    counters: CounterBoard,
    scheduler: Scheduler<Task>,
    header: Header,
    started_at: Option<Millis>,
    events: Vec<DashboardEvent>,
}

impl Dashboard {
    /// Build a stopped dashboard with no surfaces bound
    pub fn new(config: Config, clock: Box<dyn Clock>, source: Box<dyn SeriesSource>) -> Self {
        let rng = match config.dashboard.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let session = SessionState::new(
            config.dashboard.default_section.clone(),
            config.dashboard.theme,
        );
        let log = LogFeed::new(config.ticker.log_capacity);

        Self {
            config,
            clock,
            source,
            rng,
            session,
            nav: NavigationController::new(),
            tabs: SettingsTabs::new(),
            charts: ChartRenderer::new(),
            chat: ChatSimulator::new(),
            log,
            counters: CounterBoard::new(),
            scheduler: Scheduler::new(),
            header: Header::default(),
            started_at: None,
            events: Vec::new(),
        }
    }

    /// Attach the drawing surface for `chart`
    ///
    /// A surface bound while running is drawn right away.
    pub fn bind_surface(&mut self, chart: ChartId, surface: Box<dyn Surface>) {
        self.charts.bind(chart, surface);
        if self.is_running() {
            self.redraw(&[chart]);
        }
    }

    pub fn unbind_surface(&mut self, chart: ChartId) {
        self.charts.unbind(chart);
    }

    /// Show the initial section, start the counters and arm the tickers
    pub fn start(&mut self) {
        if self.is_running() {
            tracing::warn!("Dashboard already running");
            return;
        }
        let now = self.clock.now_ms();
        self.started_at = Some(now);

        let section = self.session.current_section().to_string();
        self.navigate(&section, now);

        let duration = self.config.ticker.counter_duration_ms;
        let user = self.session.user();
        let (tokens, tasks) = (user.tokens_used, user.tasks_completed);
        self.counters.animate(Counter::TokensUsed, tokens, now, duration);
        self.counters.animate(Counter::TasksCompleted, tasks, now, duration);

        self.refresh_header(now);
        self.redraw(&ChartId::ALL);

        let ticker = &self.config.ticker;
        self.scheduler
            .schedule_every(now, ticker.stats_interval_ms, Task::Stats);
        self.scheduler
            .schedule_every(now, ticker.log_interval_ms, Task::Log);
        self.scheduler
            .schedule_every(now, ticker.clock_interval_ms, Task::HeaderClock);

        tracing::info!(section = %section, theme = %self.session.theme(), "Dashboard started");
    }

    /// Cancel every pending timer, including in-flight chat replies
    pub fn stop(&mut self) {
        let cancelled = self.scheduler.len();
        self.scheduler.clear();
        for ticket in self.chat.cancel_pending() {
            self.events.push(DashboardEvent::TypingFinished { ticket });
        }
        self.started_at = None;
        tracing::info!(cancelled, "Dashboard stopped");
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Run every task due by now, then step the animations
    ///
    /// Each task sees its own due time as the current time, so a late tick
    /// replays missed occurrences with their original timestamps. Returns
    /// the number of tasks run.
    pub fn tick(&mut self) -> usize {
        let now = self.clock.now_ms();
        let mut ran = 0;
        while let Some(due) = self.scheduler.pop_due(now) {
            self.run(due.task, due.due);
            ran += 1;
        }

        for (counter, value) in self.counters.advance(now) {
            self.events.push(DashboardEvent::CounterUpdated { counter, value });
        }
        ran
    }

    /// Dispatch one user input
    ///
    /// Returns true when the input was consumed, i.e. the frontend should
    /// suppress the element's default behavior.
    pub fn handle(&mut self, input: Input) -> bool {
        let now = self.clock.now_ms();
        match input {
            Input::NavClick(section) | Input::ActionClick(section) => {
                self.navigate(&section, now);
                true
            }
            Input::SelectTab(tab) => {
                let found = self.tabs.select_tab(&tab);
                self.events.push(DashboardEvent::TabChanged { tab, found });
                true
            }
            Input::ToggleTheme => {
                self.toggle_theme(now);
                true
            }
            Input::ChatInput(text) => {
                self.chat.set_input(text);
                false
            }
            Input::ChatSend => {
                self.send_chat(now);
                true
            }
            // Shift+Enter falls through so the composer gets its newline
            Input::ChatKey { key, shift } if key == "Enter" && !shift => {
                self.send_chat(now);
                true
            }
            Input::ChatKey { .. } => false,
        }
    }

    /// Events accumulated since the previous drain
    pub fn drain_events(&mut self) -> Vec<DashboardEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn theme(&self) -> Theme {
        self.session.theme()
    }

    pub fn navigation(&self) -> &NavigationController {
        &self.nav
    }

    pub fn tabs(&self) -> &SettingsTabs {
        &self.tabs
    }

    pub fn chat(&self) -> &ChatSimulator {
        &self.chat
    }

    pub fn log(&self) -> &LogFeed {
        &self.log
    }

    pub fn counters(&self) -> &CounterBoard {
        &self.counters
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Opacity of `section` right now (0.0 when hidden)
    pub fn opacity(&self, section: &str) -> f64 {
        self.nav.opacity(section, self.clock.now_ms())
    }

    /// Whether a counter or fade-in is still moving
    pub fn is_animating(&self) -> bool {
        self.counters.is_animating() || self.nav.is_fading(self.clock.now_ms())
    }

    /// Number of pending timers
    pub fn pending_tasks(&self) -> usize {
        self.scheduler.len()
    }

    fn run(&mut self, task: Task, now: Millis) {
        match task {
            Task::Stats => {
                let bump = token_bump(&mut self.rng);
                let user = self.session.user_mut();
                user.tokens_used += bump;
                let value = user.tokens_used;
                self.counters.set(Counter::TokensUsed, value);
                self.events.push(DashboardEvent::CounterUpdated {
                    counter: Counter::TokensUsed,
                    value,
                });
                self.redraw(&ChartId::DASHBOARD);
            }
            Task::Log => {
                if self.session.current_section() != DASHBOARD {
                    tracing::trace!(section = self.session.current_section(), "Log tick skipped");
                    return;
                }
                let entry = LogEntry::random(&mut self.rng, now);
                self.log.push(entry.clone());
                self.events.push(DashboardEvent::LogEntryAdded { entry });
            }
            Task::HeaderClock => self.refresh_header(now),
            Task::ChatTyping(ticket) => {
                if self.chat.start_typing(ticket) {
                    self.events.push(DashboardEvent::TypingStarted { ticket });
                    self.scheduler.schedule_at(
                        now + self.config.chat.reply_delay_ms,
                        Task::ChatReply(ticket),
                    );
                }
            }
            Task::ChatReply(ticket) => {
                let reply = choose_reply(&mut self.rng);
                if let Some(message) = self.chat.deliver_reply(ticket, reply, now).cloned() {
                    self.events.push(DashboardEvent::TypingFinished { ticket });
                    self.events.push(DashboardEvent::MessageAppended { message });
                }
            }
            Task::RedrawAll => self.redraw(&ChartId::ALL),
        }
    }

    fn navigate(&mut self, section: &str, now: Millis) {
        let shown = self.nav.navigate(&mut self.session, section, now) == Navigation::Shown;
        self.events.push(DashboardEvent::SectionChanged {
            section: section.to_string(),
            shown,
        });
    }

    fn toggle_theme(&mut self, now: Millis) {
        let theme = self.session.theme().flipped();
        self.session.set_theme(theme);
        self.events.push(DashboardEvent::ThemeChanged { theme });
        self.scheduler
            .schedule_at(now + THEME_REDRAW_DELAY_MS, Task::RedrawAll);
        tracing::info!(%theme, "Theme toggled");
    }

    fn send_chat(&mut self, now: Millis) {
        let Some(ticket) = self.chat.submit(now) else {
            return;
        };
        if let Some(message) = self.chat.messages().last().cloned() {
            self.events.push(DashboardEvent::MessageAppended { message });
        }
        self.scheduler.schedule_at(
            now + self.config.chat.typing_delay_ms,
            Task::ChatTyping(ticket),
        );
    }

    fn refresh_header(&mut self, now: Millis) {
        self.header.date = format_date(now);
        self.header.time = format_hm(now);
        if let Some(started_at) = self.started_at {
            self.header.uptime = format_uptime(now.saturating_sub(started_at));
        }
    }

    fn redraw(&mut self, charts: &[ChartId]) {
        let theme = self.session.theme();
        let drawn = self.charts.draw_many(charts, theme, self.source.as_mut());
        if !drawn.is_empty() {
            tracing::trace!(count = drawn.len(), "Charts redrawn");
            self.events.push(DashboardEvent::ChartsRedrawn { charts: drawn });
        }
    }
}

impl std::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("session", &self.session)
            .field("charts", &self.charts)
            .field("pending_tasks", &self.scheduler.len())
            .field("started_at", &self.started_at)
            .finish()
    }
}
