//! Ratatui-based terminal UI.
//!
//! The TUI owns the mutable slider state (inflation, output gap, region) and
//! re-runs the simulation on every change, then renders the implied rate, the
//! rate-versus-inflation curve and the confidence density.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use crate::app::pipeline::{Simulation, simulate};
use crate::cli::RuleArgs;
use crate::config::{GAP_BOUNDS, INFLATION_BOUNDS, nudge};
use crate::domain::{RuleInput, Stance};
use crate::error::{AppError, EXIT_RUNTIME};
use crate::report::{StanceAssessment, assess_stance};
use crate::rule::{CURVE_INFLATION_MAX, CURVE_INFLATION_MIN, DENSITY_STD_DEV};

mod plotters_chart;

use plotters_chart::{RulePlottersChart, SeriesStyle};

/// Number of editable settings rows.
const FIELD_COUNT: usize = 3;

/// Start the TUI.
pub fn run(args: RuleArgs) -> Result<(), AppError> {
    // Resolve before touching the terminal so input errors print normally.
    let input = crate::app::resolve_input(&args)?;

    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::new(EXIT_RUNTIME, format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(input, args.actual);
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode()
            .map_err(|e| AppError::new(EXIT_RUNTIME, format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::new(
                EXIT_RUNTIME,
                format!("Failed to enter alternate screen: {e}"),
            ));
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
    input: RuleInput,
    initial: RuleInput,
    observed_rate: Option<f64>,
    selected_field: usize,
    status: String,
    sim: Simulation,
}

impl App {
    fn new(input: RuleInput, observed_rate: Option<f64>) -> Self {
        // Sliders cannot represent values outside their ranges.
        let input = RuleInput {
            inflation: nudge(input.inflation, 0, INFLATION_BOUNDS),
            output_gap: nudge(input.output_gap, 0, GAP_BOUNDS),
            region: input.region,
        };
        Self {
            input,
            initial: input,
            observed_rate,
            selected_field: 0,
            status: "Ready.".to_string(),
            sim: simulate(&input),
        }
    }

    fn stance(&self) -> Option<StanceAssessment> {
        self.observed_rate
            .map(|observed| assess_stance(self.sim.implied_rate, observed))
    }

    fn recompute(&mut self) {
        self.sim = simulate(&self.input);
    }

    fn event_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::new(EXIT_RUNTIME, format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::new(EXIT_RUNTIME, format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| AppError::new(EXIT_RUNTIME, format!("Event read error: {e}")))? {
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

    /// Apply one key press. Returns `true` when the app should exit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Up => {
                self.selected_field = self.selected_field.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.selected_field + 1 < FIELD_COUNT {
                    self.selected_field += 1;
                }
            }
            KeyCode::Left => self.adjust_field(-1),
            KeyCode::Right => self.adjust_field(1),
            KeyCode::Char('t') => {
                self.input.region = self.input.region.toggle();
                self.recompute();
                self.status = format!("region: {}", self.input.region.display_name());
            }
            KeyCode::Char('0') => {
                self.input = self.initial;
                self.recompute();
                self.status = "Reset to initial inputs.".to_string();
            }
            _ => {}
        }
        false
    }

    fn adjust_field(&mut self, delta: i32) {
        match self.selected_field {
            0 => {
                self.input.inflation = nudge(self.input.inflation, delta, INFLATION_BOUNDS);
                self.status = format!("inflation: {:.2}%", self.input.inflation);
            }
            1 => {
                self.input.output_gap = nudge(self.input.output_gap, delta, GAP_BOUNDS);
                self.status = format!("output gap: {:.2}%", self.input.output_gap);
            }
            2 => {
                self.input.region = self.input.region.toggle();
                self.status = format!("region: {}", self.input.region.display_name());
            }
            _ => return,
        }
        self.recompute();
    }

    fn draw(&self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(0), Constraint::Length(3)])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_body(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(vec![
            Span::styled("taylor", Style::default().fg(Color::Cyan)),
            Span::raw(format!(": {} policy rule", self.input.region.bank_name())),
        ]));

        lines.push(Line::from(vec![
            Span::raw("implied: "),
            Span::styled(
                format!("{:.2}%", self.sim.implied_rate),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(
                    " | {} | r*={:.2}% | target={:.2}%",
                    self.sim.regime.display_name(),
                    self.sim.params.neutral_rate,
                    self.sim.params.target,
                ),
                Style::default().fg(Color::Gray),
            ),
        ]));

        let stance_line = match self.stance() {
            Some(a) => Line::from(vec![
                Span::styled(
                    format!("observed {:.2}% | {:+.0}bp | ", a.observed_rate, a.deviation_bps),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(a.stance.display_name(), Style::default().fg(stance_color(a.stance))),
            ]),
            None => Line::from(Span::styled(
                "observed rate: - (pass --actual to assess stance)",
                Style::default().fg(Color::DarkGray),
            )),
        };
        lines.push(stance_line);

        let p = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_body(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
            .split(area);
        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(FIELD_COUNT as u16 + 2), Constraint::Min(0)])
            .split(columns[0]);

        self.draw_settings(frame, left[0]);
        self.draw_density(frame, left[1]);
        self.draw_curve(frame, columns[1]);
    }

    fn draw_curve(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default()
            .title("Implied rate vs inflation")
            .borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        let (series, marker, x_bounds, y_bounds) = curve_series(&self.sim);
        let widget = RulePlottersChart {
            series: &series,
            style: SeriesStyle::Line,
            marker,
            x_bounds,
            y_bounds,
            x_label: "inflation (%)",
            y_label: "policy rate (%)",
            fmt_x: fmt_pct,
            fmt_y: fmt_pct,
        };
        frame.render_widget(widget, inner);
    }

    fn draw_density(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default()
            .title(format!("Confidence density (sd {DENSITY_STD_DEV:.1})"))
            .borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        let Some((series, x_bounds, y_bounds)) = density_series(&self.sim) else {
            let msg = Paragraph::new("Rate is not finite.").style(Style::default().fg(Color::Yellow));
            frame.render_widget(msg, inner);
            return;
        };
        let widget = RulePlottersChart {
            series: &series,
            style: SeriesStyle::Area,
            marker: None,
            x_bounds,
            y_bounds,
            x_label: "rate (%)",
            y_label: "density",
            fmt_x: fmt_pct,
            fmt_y: fmt_density,
        };
        frame.render_widget(widget, inner);
    }

    fn draw_settings(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let items = vec![
            ListItem::new(format!(
                "Inflation: {:.2}%  [{:.0}, {:.0}]",
                self.input.inflation, INFLATION_BOUNDS.0, INFLATION_BOUNDS.1
            )),
            ListItem::new(format!(
                "Output gap: {:+.2}%  [{:.0}, {:.0}]",
                self.input.output_gap, GAP_BOUNDS.0, GAP_BOUNDS.1
            )),
            ListItem::new(format!(
                "Region: {} (r*={:.2}%)",
                self.input.region.display_name(),
                self.input.region.neutral_rate()
            )),
        ];

        let list = List::new(items)
            .block(Block::default().title("Inputs").borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ListState::default();
        state.select(Some(self.selected_field));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "↑/↓ select  ←/→ adjust  t region  0 reset  q quit";
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

fn stance_color(stance: Stance) -> Color {
    match stance {
        Stance::Restrictive => Color::Red,
        Stance::Neutral => Color::Green,
        Stance::Accommodative => Color::Yellow,
    }
}

/// Curve line, highlighted sample and padded bounds.
fn curve_series(sim: &Simulation) -> (Vec<(f64, f64)>, Option<(f64, f64)>, [f64; 2], [f64; 2]) {
    let series: Vec<(f64, f64)> = sim.curve.iter().map(|p| (p.inflation, p.rate)).collect();
    let marker = sim
        .current_index
        .and_then(|i| sim.curve.get(i))
        .and_then(|p| p.current_sample.map(|rate| (p.inflation, rate)));

    let x_bounds = [CURVE_INFLATION_MIN, CURVE_INFLATION_MAX];
    let y_bounds = padded_bounds(series.iter().map(|&(_, y)| y)).unwrap_or([0.0, 1.0]);
    (series, marker, x_bounds, y_bounds)
}

/// Density area with a zero baseline; `None` when the rate is not finite.
fn density_series(sim: &Simulation) -> Option<(Vec<(f64, f64)>, [f64; 2], [f64; 2])> {
    let first = sim.density.first()?;
    let last = sim.density.last()?;
    if !(first.x.is_finite() && last.x.is_finite() && last.x > first.x) {
        return None;
    }

    let series: Vec<(f64, f64)> = sim.density.iter().map(|p| (p.x, p.density)).collect();
    let peak = series.iter().map(|&(_, d)| d).fold(f64::NEG_INFINITY, f64::max);
    if !(peak.is_finite() && peak > 0.0) {
        return None;
    }
    Some((series, [first.x, last.x], [0.0, peak * 1.1]))
}

fn padded_bounds(values: impl Iterator<Item = f64>) -> Option<[f64; 2]> {
    let (mut lo, mut hi) = (f64::INFINITY, f64::NEG_INFINITY);
    for v in values.filter(|v| v.is_finite()) {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if !(lo.is_finite() && hi.is_finite() && hi > lo) {
        return None;
    }
    let pad = ((hi - lo) * 0.05).max(1e-12);
    Some([lo - pad, hi + pad])
}

fn fmt_pct(v: f64) -> String {
    format!("{v:.2}")
}

fn fmt_density(v: f64) -> String {
    format!("{v:.1}")
}
