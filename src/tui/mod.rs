//! Ratatui-based terminal UI.
//!
//! The TUI shows the live toll board for a chosen vehicle class, a
//! fare-profile chart for the selected tunnel, and refreshes itself every
//! minute so the displayed fares track the Hong Kong clock.

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Terminal,
};

use crate::app::pipeline::{self, BoardOutput};
use crate::board::format::{context_label, weekday_label};
use crate::cli::BoardArgs;
use crate::data::clock::hhmm;
use crate::data::holidays::{HolidayCache, HolidayClient, HolidaySource};
use crate::domain::{Locale, TollInput, TunnelId, VehicleClass};
use crate::error::AppError;
use crate::prefs::{self, Preferences};
use crate::schedule;
use crate::schedule::table::MINUTES_PER_DAY;

mod plotters_chart;

use plotters_chart::FareProfileChart;

/// How often the board re-reads the clock without user input.
const REFRESH_INTERVAL: Duration = Duration::from_secs(60);

/// Start the TUI.
pub fn run(args: BoardArgs) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::runtime(format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(args);
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::runtime(format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::runtime(format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

struct App {
    vehicle: VehicleClass,
    locale: Locale,
    selected: usize,
    client: HolidayClient,
    cache: HolidayCache,
    run: BoardOutput,
    status: String,
    last_refresh: Instant,
}

impl App {
    fn new(args: BoardArgs) -> Self {
        let stored = prefs::load();
        let vehicle = args.vehicle.unwrap_or(stored.vehicle);
        let locale = args.locale.unwrap_or(stored.locale);
        let client = if args.offline {
            HolidayClient::offline()
        } else {
            HolidayClient::from_env()
        };

        let mut cache = HolidayCache::new();
        let run = pipeline::evaluate_live(vehicle, &client, &mut cache);
        let status = holiday_status(&cache);

        Self {
            vehicle,
            locale,
            selected: 0,
            client,
            cache,
            run,
            status,
            last_refresh: Instant::now(),
        }
    }

    fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if self.last_refresh.elapsed() >= REFRESH_INTERVAL {
                self.refresh();
                needs_redraw = true;
            }

            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::runtime(format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(250))
                .map_err(|e| AppError::runtime(format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| AppError::runtime(format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Returns true when the app should quit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Up => {
                if self.selected > 0 {
                    self.selected -= 1;
                }
            }
            KeyCode::Down => {
                if self.selected + 1 < TunnelId::ALL.len() {
                    self.selected += 1;
                }
            }
            KeyCode::Left => {
                self.vehicle = self.vehicle.prev();
                self.on_vehicle_changed();
            }
            KeyCode::Right | KeyCode::Char('v') => {
                self.vehicle = self.vehicle.next();
                self.on_vehicle_changed();
            }
            KeyCode::Char('l') => {
                self.locale = self.locale.toggle();
                self.persist();
                self.status = match self.locale {
                    Locale::En => "language: English".to_string(),
                    Locale::ZhHk => "語言：繁體中文".to_string(),
                };
            }
            KeyCode::Char('h') => {
                self.cache.invalidate();
                self.refresh();
                self.status = holiday_status(&self.cache);
            }
            KeyCode::Char('r') => {
                self.refresh();
                self.status = format!("refreshed at {}", hhmm(self.run.input.minute_of_day));
            }
            _ => {}
        }
        false
    }

    fn on_vehicle_changed(&mut self) {
        self.refresh();
        self.persist();
        self.status = format!("vehicle: {}", self.vehicle.label(self.locale));
    }

    fn persist(&self) {
        prefs::store(Preferences {
            vehicle: self.vehicle,
            locale: self.locale,
        });
    }

    /// Re-read the clock and rebuild the board.
    fn refresh(&mut self) {
        self.run = pipeline::evaluate_live(self.vehicle, &self.client, &mut self.cache);
        self.last_refresh = Instant::now();
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0), Constraint::Length(3)])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_body(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let title = match self.locale {
            Locale::En => " — Hong Kong tunnel toll board",
            Locale::ZhHk => " — 香港隧道現時收費",
        };
        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(vec![
            Span::styled("tolls", Style::default().fg(Color::Cyan)),
            Span::raw(title),
        ]));

        let input = &self.run.input;
        lines.push(Line::from(Span::styled(
            format!(
                "{} ({}) {} | {} | {}",
                self.run.reading.date,
                weekday_label(input.day_of_week, self.locale),
                hhmm(input.minute_of_day),
                context_label(input, self.locale),
                self.vehicle.label(self.locale),
            ),
            Style::default().fg(Color::Gray),
        )));

        let p = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_body(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(46), Constraint::Min(0)])
            .split(area);

        self.draw_board(frame, chunks[0]);
        self.draw_chart(frame, chunks[1]);
    }

    fn draw_board(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let title = match self.locale {
            Locale::En => "Tunnels",
            Locale::ZhHk => "隧道",
        };

        let mut items = Vec::new();
        for item in &self.run.items {
            let mut text = format!("{:<32} ${:>3}", item.display_name(self.locale), item.toll);
            if item.note.is_some() {
                text.push('*');
            }
            items.push(ListItem::new(text));
        }

        let list = List::new(items)
            .block(Block::default().title(title).borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ratatui::widgets::ListState::default();
        state.select(Some(self.selected));
        frame.render_stateful_widget(list, area, &mut state);

        // Expand the asterisk for the selected row.
        if let Some(item) = self.run.items.get(self.selected) {
            if let Some(note) = item.note {
                let hint = Paragraph::new(format!("* {}", note.label(self.locale)))
                    .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
                let rect = Rect {
                    x: area.x + 2,
                    y: area.y + area.height.saturating_sub(2),
                    width: area.width.saturating_sub(4),
                    height: 1,
                };
                frame.render_widget(hint, rect);
            }
        }
    }

    fn draw_chart(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let tunnel = TunnelId::ALL[self.selected.min(TunnelId::ALL.len() - 1)];
        let block = Block::default()
            .title(tunnel.name(self.locale))
            .borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        let (profile, now, x_bounds, y_bounds) = profile_series(tunnel, &self.run.input);

        let y_label = match self.locale {
            Locale::En => "toll (HK$)".to_string(),
            Locale::ZhHk => "收費（港元）".to_string(),
        };

        let widget = FareProfileChart {
            profile: &profile,
            now,
            x_bounds,
            y_bounds,
            x_label: "",
            y_label,
            fmt_x: fmt_axis_hour,
            fmt_y: fmt_axis_dollars,
        };
        frame.render_widget(widget, inner);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "↑/↓ tunnel  ←/→ vehicle  l language  h refetch holidays  r refresh  q quit";
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

fn holiday_status(cache: &HolidayCache) -> String {
    match cache.peek() {
        Some(list) => {
            let source = match list.source {
                HolidaySource::Feed => "1823 feed",
                HolidaySource::Bundled => "bundled snapshot",
            };
            format!("holidays: {} known ({source})", list.dates.len())
        }
        None => "holidays: not loaded".to_string(),
    }
}

/// Build the day's fare profile for one tunnel under the current context.
///
/// X is hours of the day, Y is the fare the current vehicle would pay at
/// that minute. The current time is returned as a separate highlight point.
fn profile_series(
    tunnel: TunnelId,
    input: &TollInput,
) -> (Vec<(f64, f64)>, (f64, f64), [f64; 2], [f64; 2]) {
    let mut profile = Vec::with_capacity(MINUTES_PER_DAY as usize);
    let mut y_max = 0.0_f64;

    for minute in 0..MINUTES_PER_DAY {
        let probe = TollInput {
            minute_of_day: minute,
            ..*input
        };
        let fare = f64::from(schedule::resolve(tunnel, &probe));
        y_max = y_max.max(fare);
        profile.push((f64::from(minute) / 60.0, fare));
    }

    let now = (
        f64::from(input.minute_of_day) / 60.0,
        f64::from(schedule::resolve(tunnel, input)),
    );

    let x_bounds = [0.0, 24.0];
    // Headroom above the peak keeps the top band visually distinct.
    let y_bounds = [0.0, y_max + 5.0];

    (profile, now, x_bounds, y_bounds)
}

fn fmt_axis_hour(v: f64) -> String {
    format!("{:02}:00", v.round() as u32 % 24)
}

fn fmt_axis_dollars(v: f64) -> String {
    format!("${v:.0}")
}
