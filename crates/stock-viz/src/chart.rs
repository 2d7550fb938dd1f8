//! Terminal chart viewer using ratatui.

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;
use stock_analysis::{AnalysisFrame, IndicatorSettings};
use stock_core::IndicatorSeries;

/// Which chart is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    /// Close with SMA and EMA overlays
    Price,
    Rsi,
    Macd,
    Returns,
}

impl Panel {
    const ALL: [Panel; 4] = [Panel::Price, Panel::Rsi, Panel::Macd, Panel::Returns];

    fn index(self) -> usize {
        Self::ALL.iter().position(|p| *p == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn title(self) -> &'static str {
        match self {
            Panel::Price => "Close Price with SMA & EMA",
            Panel::Rsi => "Relative Strength Index (RSI)",
            Panel::Macd => "MACD & Signal Line",
            Panel::Returns => "Daily Returns",
        }
    }
}

/// Defined positions of a series as `(index, value)` chart points.
pub fn series_points(series: &IndicatorSeries) -> Vec<(f64, f64)> {
    series
        .iter()
        .enumerate()
        .filter_map(|(i, v)| v.map(|v| (i as f64, v)))
        .collect()
}

/// Y-axis bounds covering every point, padded by 5%.
pub fn bounds(sets: &[&[(f64, f64)]]) -> [f64; 2] {
    let (min, max) = sets
        .iter()
        .flat_map(|s| s.iter())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(_, y)| {
            (lo.min(y), hi.max(y))
        });

    if !min.is_finite() || !max.is_finite() {
        return [0.0, 1.0];
    }
    if min == max {
        return [min - 1.0, max + 1.0];
    }
    let pad = (max - min) * 0.05;
    [min - pad, max + pad]
}

/// One dataset to draw, owning its points.
struct PlotLine {
    name: String,
    points: Vec<(f64, f64)>,
    color: Color,
    graph: GraphType,
}

/// Interactive viewer for an analysis frame.
pub struct ChartViewer<'a> {
    table: &'a AnalysisFrame,
    settings: IndicatorSettings,
    refresh_ms: u64,
    panel: Panel,
}

impl<'a> ChartViewer<'a> {
    /// Create a new viewer.
    pub fn new(table: &'a AnalysisFrame, settings: IndicatorSettings, refresh_ms: u64) -> Self {
        Self {
            table,
            settings,
            refresh_ms,
            panel: Panel::Price,
        }
    }

    pub fn panel(&self) -> Panel {
        self.panel
    }

    pub fn show(mut self, panel: Panel) -> Self {
        self.panel = panel;
        self
    }

    /// Apply a key press; returns true when the viewer should close.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Tab | KeyCode::Right => self.panel = self.panel.next(),
            KeyCode::BackTab | KeyCode::Left => self.panel = self.panel.prev(),
            KeyCode::Char('1') => self.panel = Panel::Price,
            KeyCode::Char('2') => self.panel = Panel::Rsi,
            KeyCode::Char('3') => self.panel = Panel::Macd,
            KeyCode::Char('4') => self.panel = Panel::Returns,
            _ => {}
        }
        false
    }

    /// Run the viewer until the user quits.
    pub fn run(mut self) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let res = self.run_loop(&mut terminal);

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        res
    }

    fn run_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(self.refresh_ms))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press && self.handle_key(key.code) {
                        return Ok(());
                    }
                }
            }
        }
    }

    /// Draw the current panel.
    pub fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(10),   // Chart
            ])
            .split(frame.area());

        self.render_header(frame, chunks[0]);
        self.render_chart(frame, chunks[1]);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(
                self.table.symbol().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
        ];
        for (i, panel) in Panel::ALL.iter().enumerate() {
            let style = if *panel == self.panel {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(format!("[{}] {:?} ", i + 1, panel), style));
        }
        spans.push(Span::raw("| Tab: next, q: quit"));

        let header = Paragraph::new(Line::from(spans))
            .block(Block::default().borders(Borders::ALL).title("Stock Charts"));
        frame.render_widget(header, area);
    }

    fn column_line(&self, name: &str, color: Color, graph: GraphType) -> Option<PlotLine> {
        self.table.column(name).map(|c| PlotLine {
            name: name.to_string(),
            points: series_points(c),
            color,
            graph,
        })
    }

    fn guide(&self, name: &str, y: f64, color: Color) -> PlotLine {
        let end = self.table.len().saturating_sub(1) as f64;
        PlotLine {
            name: name.to_string(),
            points: vec![(0.0, y), (end, y)],
            color,
            graph: GraphType::Line,
        }
    }

    fn lines(&self) -> Vec<PlotLine> {
        let s = &self.settings;
        match self.panel {
            Panel::Price => {
                let close = PlotLine {
                    name: "Close".to_string(),
                    points: self
                        .table
                        .series()
                        .iter()
                        .enumerate()
                        .map(|(i, p)| (i as f64, p.close))
                        .collect(),
                    color: Color::White,
                    graph: GraphType::Line,
                };
                std::iter::once(close)
                    .chain(self.column_line(&format!("SMA_{}", s.sma_window), Color::Yellow, GraphType::Line))
                    .chain(self.column_line(&format!("EMA_{}", s.ema_span), Color::Cyan, GraphType::Line))
                    .collect()
            }
            Panel::Rsi => self
                .column_line("RSI", Color::Magenta, GraphType::Line)
                .into_iter()
                .chain([
                    self.guide("Overbought", s.rsi_overbought, Color::Red),
                    self.guide("Oversold", s.rsi_oversold, Color::Green),
                ])
                .collect(),
            Panel::Macd => [
                self.column_line("MACD_hist", Color::DarkGray, GraphType::Bar),
                self.column_line("MACD", Color::Blue, GraphType::Line),
                self.column_line("MACD_signal", Color::Yellow, GraphType::Line),
            ]
            .into_iter()
            .flatten()
            .collect(),
            Panel::Returns => self
                .column_line("Returns", Color::LightBlue, GraphType::Line)
                .into_iter()
                .collect(),
        }
    }

    fn date_labels(&self) -> Vec<String> {
        let points = self.table.series().points();
        let fmt = |i: usize| points[i].timestamp.format("%Y-%m-%d").to_string();
        match points.len() {
            0 => vec![],
            1 => vec![fmt(0)],
            n => vec![fmt(0), fmt(n / 2), fmt(n - 1)],
        }
    }

    fn render_chart(&self, frame: &mut Frame, area: Rect) {
        let lines = self.lines();

        let y_bounds = match self.panel {
            Panel::Rsi => [0.0, 100.0],
            _ => {
                let sets: Vec<&[(f64, f64)]> = lines.iter().map(|l| l.points.as_slice()).collect();
                bounds(&sets)
            }
        };
        let x_max = self.table.len().saturating_sub(1).max(1) as f64;

        let datasets: Vec<Dataset> = lines
            .iter()
            .map(|l| {
                Dataset::default()
                    .name(l.name.clone())
                    .marker(symbols::Marker::Braille)
                    .graph_type(l.graph)
                    .style(Style::default().fg(l.color))
                    .data(&l.points)
            })
            .collect();

        let y_labels = vec![
            format!("{:.2}", y_bounds[0]),
            format!("{:.2}", (y_bounds[0] + y_bounds[1]) / 2.0),
            format!("{:.2}", y_bounds[1]),
        ];

        let chart = Chart::new(datasets)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("{} - {}", self.panel.title(), self.table.symbol())),
            )
            .x_axis(
                Axis::default()
                    .title("Date")
                    .style(Style::default().fg(Color::Gray))
                    .bounds([0.0, x_max])
                    .labels(self.date_labels()),
            )
            .y_axis(
                Axis::default()
                    .style(Style::default().fg(Color::Gray))
                    .bounds(y_bounds)
                    .labels(y_labels),
            );

        frame.render_widget(chart, area);
    }
}
