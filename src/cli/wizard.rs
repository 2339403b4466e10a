//! Interactive terminal wizard
//!
//! Renders whichever flow the user picks as a boxed, step-by-step form with a
//! live plan summary beside it. All state lives in [`crate::wizard::Wizard`];
//! this module only maps key presses to patches and draws the result.
//!
//! # Keys
//!
//! - `Up`/`Down`/`Tab` move between fields (and through multi-select lists)
//! - `Left`/`Right` change the focused choice or slider, `Space` toggles
//! - `Enter` continues, or opens the chosen delivery on the review step
//! - `Backspace` deletes typed text, or goes back a step when there is none
//! - `Esc` asks before quitting, starting over or picking the other plan

use std::io::{stdout, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    prelude::*,
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, ListState, Paragraph},
    Terminal,
};
use tracing::info;

use super::fields;
use crate::config::ConciergeConfig;
use crate::delivery::{ContactField, DeliveryKind, MailLink};
use crate::flows::{AnswerSheet, FieldOf, Flow, FlowVariant, Relocation, ViewingTrip};
use crate::wizard::{
    Answers, DerivedSummary, Edit, FieldKind, FieldSpec, FieldValue, StepOutcome, Wizard,
    UNANSWERED,
};

const SLIDER_STEP: u8 = 5;
const SUMMARY_WIDTH: u16 = 42;

/// What the wizard ended with
#[derive(Debug, Clone)]
pub enum WizardResult {
    Submitted {
        variant: FlowVariant,
        kind: DeliveryKind,
        summary: DerivedSummary,
        link: MailLink,
    },
    /// Back to the flow picker with the answers discarded
    SwitchFlow,
    Quit,
}

/// Outcome of a single key press
#[derive(Debug, Clone)]
pub enum StepAction {
    NextStep,
    PrevStep,
    Quit,
    Stay,
    Complete(WizardResult),
}

// ============================================================================
// Screen State
// ============================================================================

/// Wizard plus the cursor state only the terminal needs
pub struct FlowScreen<F: Flow> {
    pub wizard: Wizard<F>,
    pub config: ConciergeConfig,
    /// Focused field on the current step
    focus: usize,
    /// Highlighted option inside a focused multi-select
    option_cursor: usize,
    /// 0 = email summary, 1 = booking
    review_choice: usize,
    modal_focus: usize,
    /// Show the modal's validation message once the user has typed or tried to submit
    modal_touched: bool,
    pub show_quit_confirm: bool,
}

impl<F: Flow> FlowScreen<F> {
    pub fn new(config: ConciergeConfig) -> Self {
        Self::with_wizard(Wizard::new(), config)
    }

    pub fn with_wizard(wizard: Wizard<F>, config: ConciergeConfig) -> Self {
        Self {
            wizard,
            config,
            focus: 0,
            option_cursor: 0,
            review_choice: 0,
            modal_focus: 0,
            modal_touched: false,
            show_quit_confirm: false,
        }
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn option_cursor(&self) -> usize {
        self.option_cursor
    }

    /// Whether Enter would move on from the current step
    pub fn continue_enabled(&self) -> bool {
        self.wizard.delivery().is_none() && self.wizard.can_advance()
    }

    fn reset_cursor(&mut self) {
        self.focus = 0;
        self.option_cursor = 0;
        self.review_choice = 0;
    }

    fn focused_spec(&self) -> Option<&'static FieldSpec<FieldOf<F>>> {
        self.wizard.current_step().fields.get(self.focus)
    }

    fn focused_is_text(&self) -> bool {
        self.wizard.delivery().is_some()
            || self.focused_spec().is_some_and(|spec| spec.kind.is_text())
    }

    /// Feed one key press through the overlays, the modal and the step
    pub fn process(&mut self, key: KeyEvent) -> Option<WizardResult> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        if self.show_quit_confirm {
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => return Some(WizardResult::Quit),
                KeyCode::Char('r') | KeyCode::Char('R') => {
                    self.wizard.reset();
                    self.reset_cursor();
                    self.show_quit_confirm = false;
                }
                KeyCode::Char('p') | KeyCode::Char('P') => {
                    self.wizard.reset();
                    self.reset_cursor();
                    self.show_quit_confirm = false;
                    return Some(WizardResult::SwitchFlow);
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    self.show_quit_confirm = false;
                }
                _ => {}
            }
            return None;
        }

        let action = if self.wizard.delivery().is_some() {
            self.handle_modal(key)
        } else if key.code == KeyCode::Esc
            || (matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
                && !self.focused_is_text())
        {
            StepAction::Quit
        } else if self.wizard.is_last_step() {
            self.handle_review(key)
        } else {
            self.handle_step(key)
        };

        match action {
            StepAction::NextStep => {
                if let StepOutcome::Advanced { .. } = self.wizard.advance() {
                    self.reset_cursor();
                }
            }
            StepAction::PrevStep => {
                if self.wizard.retreat() {
                    self.reset_cursor();
                }
            }
            StepAction::Quit => self.show_quit_confirm = true,
            StepAction::Complete(result) => return Some(result),
            StepAction::Stay => {}
        }
        None
    }

    fn move_focus(&mut self, forward: bool) {
        let count = self.wizard.current_step().fields.len();
        if count == 0 {
            return;
        }
        self.focus = if forward {
            (self.focus + 1) % count
        } else {
            (self.focus + count - 1) % count
        };
        self.option_cursor = 0;
    }

    fn handle_step(&mut self, key: KeyEvent) -> StepAction {
        let Some(spec) = self.focused_spec() else {
            return match key.code {
                KeyCode::Enter => StepAction::NextStep,
                KeyCode::Backspace => StepAction::PrevStep,
                _ => StepAction::Stay,
            };
        };

        // Multi-select lists take Up/Down until the cursor runs off either end
        if let FieldKind::MultiSelect(options) = &spec.kind {
            match key.code {
                KeyCode::Down if self.option_cursor + 1 < options.len() => {
                    self.option_cursor += 1;
                    return StepAction::Stay;
                }
                KeyCode::Up if self.option_cursor > 0 => {
                    self.option_cursor -= 1;
                    return StepAction::Stay;
                }
                _ => {}
            }
        }

        match key.code {
            KeyCode::Enter => StepAction::NextStep,
            KeyCode::Tab | KeyCode::Down => {
                self.move_focus(true);
                StepAction::Stay
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.move_focus(false);
                StepAction::Stay
            }
            _ => self.edit_field(spec, key),
        }
    }

    fn edit_field(&mut self, spec: &FieldSpec<FieldOf<F>>, key: KeyEvent) -> StepAction {
        let field = spec.field;
        match &spec.kind {
            FieldKind::Segmented(options) | FieldKind::Select(options) => {
                let current = self
                    .wizard
                    .answers()
                    .value(field)
                    .choice_key()
                    .and_then(|selected| options.iter().position(|o| o.key == selected));
                let last = options.len().saturating_sub(1);
                let next = match (key.code, current) {
                    (KeyCode::Right, Some(index)) => (index + 1).min(last),
                    (KeyCode::Left, Some(index)) => index.saturating_sub(1),
                    (KeyCode::Right | KeyCode::Char(' '), None) => 0,
                    (KeyCode::Left, None) => last,
                    (KeyCode::Backspace, _) => return StepAction::PrevStep,
                    _ => return StepAction::Stay,
                };
                if let Some(option) = options.get(next) {
                    self.wizard.patch((field, Edit::select(option.key)));
                }
                StepAction::Stay
            }
            FieldKind::MultiSelect(options) => match key.code {
                KeyCode::Char(' ') | KeyCode::Right | KeyCode::Left => {
                    if let Some(option) = options.get(self.option_cursor) {
                        self.wizard.patch((field, Edit::toggle(option.key)));
                    }
                    StepAction::Stay
                }
                KeyCode::Backspace => StepAction::PrevStep,
                _ => StepAction::Stay,
            },
            FieldKind::Slider { .. } => {
                let position = match self.wizard.answers().value(field) {
                    FieldValue::Slider(position) => position,
                    _ => return StepAction::Stay,
                };
                let next = match key.code {
                    KeyCode::Right => position.saturating_add(SLIDER_STEP).min(100),
                    KeyCode::Left => position.saturating_sub(SLIDER_STEP),
                    KeyCode::Backspace => return StepAction::PrevStep,
                    _ => return StepAction::Stay,
                };
                self.wizard.patch((field, Edit::Slider(next)));
                StepAction::Stay
            }
            FieldKind::Text { .. } | FieldKind::Amount { .. } => {
                let mut text = match self.wizard.answers().value(field) {
                    FieldValue::Text(text) => text.to_string(),
                    _ => return StepAction::Stay,
                };
                match key.code {
                    KeyCode::Char(c) => text.push(c),
                    KeyCode::Backspace => {
                        if text.is_empty() {
                            return StepAction::PrevStep;
                        }
                        text.pop();
                    }
                    _ => return StepAction::Stay,
                }
                self.wizard.patch((field, Edit::Text(text)));
                StepAction::Stay
            }
        }
    }

    fn handle_review(&mut self, key: KeyEvent) -> StepAction {
        match key.code {
            KeyCode::Up | KeyCode::Left => {
                self.review_choice = 0;
                StepAction::Stay
            }
            KeyCode::Down | KeyCode::Right => {
                self.review_choice = 1;
                StepAction::Stay
            }
            KeyCode::Tab => {
                self.review_choice = 1 - self.review_choice;
                StepAction::Stay
            }
            KeyCode::Enter => {
                let kind = if self.review_choice == 0 {
                    DeliveryKind::EmailSummary
                } else {
                    DeliveryKind::Booking
                };
                self.wizard.open_delivery(kind);
                self.modal_focus = 0;
                self.modal_touched = false;
                StepAction::Stay
            }
            KeyCode::Backspace => StepAction::PrevStep,
            _ => StepAction::Stay,
        }
    }

    fn handle_modal(&mut self, key: KeyEvent) -> StepAction {
        let (fields, kind) = match self.wizard.delivery() {
            Some(form) => (form.fields(), form.kind()),
            None => return StepAction::Stay,
        };
        let last = fields.len() - 1;
        let field = fields[self.modal_focus.min(last)];

        match key.code {
            KeyCode::Esc => {
                self.wizard.close_delivery();
                StepAction::Stay
            }
            KeyCode::Tab | KeyCode::Down => {
                self.modal_focus = (self.modal_focus + 1) % fields.len();
                StepAction::Stay
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.modal_focus = (self.modal_focus + last) % fields.len();
                StepAction::Stay
            }
            KeyCode::Enter if self.modal_focus < last => {
                self.modal_focus += 1;
                StepAction::Stay
            }
            KeyCode::Enter => {
                self.modal_touched = true;
                match self.wizard.submit_delivery(&self.config.recipients) {
                    Ok(link) => {
                        info!(flow = F::VARIANT.key(), ?kind, "delivery submitted");
                        StepAction::Complete(WizardResult::Submitted {
                            variant: F::VARIANT,
                            kind,
                            summary: self.wizard.summary().clone(),
                            link,
                        })
                    }
                    Err(_) => StepAction::Stay,
                }
            }
            KeyCode::Char(c) => {
                self.edit_modal(field, |value| value.push(c));
                StepAction::Stay
            }
            KeyCode::Backspace => {
                self.edit_modal(field, |value| {
                    value.pop();
                });
                StepAction::Stay
            }
            _ => StepAction::Stay,
        }
    }

    fn edit_modal(&mut self, field: ContactField, change: impl FnOnce(&mut String)) {
        if let Some(form) = self.wizard.delivery_mut() {
            let mut value = form.value(field).to_string();
            change(&mut value);
            form.set(field, value);
            self.modal_touched = true;
        }
    }
}

// ============================================================================
// Terminal Setup
// ============================================================================

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;

    // Install panic hook for clean terminal restoration
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        teardown_terminal();
        original_hook(panic_info);
    }));

    let backend = CrosstermBackend::new(stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn teardown_terminal() {
    let _ = disable_raw_mode();
    let _ = stdout().execute(LeaveAlternateScreen);
}

// ============================================================================
// Entry Point
// ============================================================================

/// Run the wizard. `sheet` prefills answers and fixes the flow.
pub fn run_wizard(
    flow: Option<FlowVariant>,
    sheet: Option<AnswerSheet>,
    config: &ConciergeConfig,
) -> Result<WizardResult> {
    let mut terminal = setup_terminal()?;
    let result = run_session(&mut terminal, flow, sheet, config);
    teardown_terminal();
    result
}

fn run_session(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    flow: Option<FlowVariant>,
    sheet: Option<AnswerSheet>,
    config: &ConciergeConfig,
) -> Result<WizardResult> {
    let (mut flow, mut sheet) = (flow, sheet);
    loop {
        let variant = match (&sheet, flow.take()) {
            (Some(sheet), _) => sheet.variant(),
            (None, Some(variant)) => variant,
            (None, None) => match pick_flow(terminal, config)? {
                Some(variant) => variant,
                None => return Ok(WizardResult::Quit),
            },
        };
        info!(flow = variant.key(), prefilled = sheet.is_some(), "wizard opened");

        let result = match (variant, sheet.take()) {
            (_, Some(AnswerSheet::Relocation(answers))) => run_flow(
                terminal,
                FlowScreen::<Relocation>::with_wizard(Wizard::from_answers(answers), config.clone()),
            )?,
            (_, Some(AnswerSheet::ViewingTrip(answers))) => run_flow(
                terminal,
                FlowScreen::<ViewingTrip>::with_wizard(Wizard::from_answers(answers), config.clone()),
            )?,
            (FlowVariant::Relocation, None) => {
                run_flow(terminal, FlowScreen::<Relocation>::new(config.clone()))?
            }
            (FlowVariant::ViewingTrip, None) => {
                run_flow(terminal, FlowScreen::<ViewingTrip>::new(config.clone()))?
            }
        };
        match result {
            WizardResult::SwitchFlow => info!(from = variant.key(), "back to the flow picker"),
            other => return Ok(other),
        }
    }
}

// ============================================================================
// Event Loops
// ============================================================================

fn run_flow<F: Flow>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut screen: FlowScreen<F>,
) -> Result<WizardResult> {
    loop {
        terminal.draw(|f| render_flow(f, &screen))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if let Some(result) = screen.process(key) {
                    return Ok(result);
                }
            }
        }
    }
}

fn pick_flow(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: &ConciergeConfig,
) -> Result<Option<FlowVariant>> {
    let mut selected = 0usize;
    loop {
        terminal.draw(|f| render_flow_picker(f, config, selected))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Up => selected = selected.saturating_sub(1),
                    KeyCode::Down => selected = (selected + 1).min(FlowVariant::ALL.len() - 1),
                    KeyCode::Enter => return Ok(Some(FlowVariant::ALL[selected])),
                    KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(None),
                    _ => {}
                }
            }
        }
    }
}

// ============================================================================
// Rendering
// ============================================================================

fn centered_fixed_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Semantic colour per step position
fn step_color(index: usize) -> Color {
    const PALETTE: [Color; 4] = [Color::Cyan, Color::Magenta, Color::Yellow, Color::Green];
    PALETTE[index % PALETTE.len()]
}

fn render_header(f: &mut Frame, area: Rect, config: &ConciergeConfig, subtitle: &str) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            config.brand.clone(),
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(Span::styled(
            subtitle.to_string(),
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(header, area);
}

/// Contact line pinned under every screen
fn render_contact_dock(f: &mut Frame, area: Rect, config: &ConciergeConfig) {
    let dock = Paragraph::new(Line::from(vec![
        Span::styled("Questions? ", Style::default().fg(Color::DarkGray)),
        Span::styled(config.dock_phone.clone(), Style::default().fg(Color::Cyan)),
        Span::styled("  \u{00b7}  ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            config.recipients.primary.clone(),
            Style::default().fg(Color::Cyan),
        ),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(dock, area);
}

fn render_flow_picker(f: &mut Frame, config: &ConciergeConfig, selected: usize) {
    let area = f.area();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(8),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(f, rows[0], config, "Plan your move with us");

    let box_area = centered_fixed_rect(66, 10, rows[1]);
    f.render_widget(Clear, box_area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Choose a plan ")
        .title_style(Style::default().fg(Color::Cyan).bold())
        .title_alignment(Alignment::Center);
    let inner = block.inner(box_area);
    f.render_widget(block, box_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(inner);
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "  What would you like to plan?",
            Style::default().fg(Color::DarkGray),
        ))),
        chunks[0],
    );

    let items: Vec<ListItem> = FlowVariant::ALL
        .iter()
        .enumerate()
        .map(|(i, variant)| {
            let style = if i == selected {
                Style::default().fg(Color::Black).bg(Color::Cyan).bold()
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(vec![
                Line::from(format!("  {}", variant.label())),
                Line::from(Span::styled(
                    format!("    {}", variant.tagline()),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
            .style(style)
        })
        .collect();
    let mut list_state = ListState::default();
    list_state.select(Some(selected));
    f.render_stateful_widget(List::new(items), chunks[1], &mut list_state);

    let help = Paragraph::new(Line::from(vec![
        Span::styled("  \u{2191}\u{2193}", Style::default().fg(Color::Cyan)),
        Span::styled(" choose  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::styled(" start  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Q/Esc", Style::default().fg(Color::Cyan)),
        Span::styled(" quit", Style::default().fg(Color::DarkGray)),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(help, rows[2]);
    render_contact_dock(f, rows[3], config);
}

/// Render the complete wizard with its persistent shell
fn render_flow<F: Flow>(f: &mut Frame, screen: &FlowScreen<F>) {
    let area = f.area();
    let wizard = &screen.wizard;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(12),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(f, rows[0], &screen.config, wizard.variant().label());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(50), Constraint::Length(SUMMARY_WIDTH)])
        .split(rows[1]);

    let index = wizard.current_index();
    let color = step_color(index);
    let step = wizard.current_step();
    let title_text = format!(
        " Step {}/{} \u{00b7} {} ",
        index + 1,
        wizard.step_count(),
        step.title
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(title_text)
        .title_style(Style::default().fg(color).bold())
        .title_alignment(Alignment::Center);
    let inner = block.inner(columns[0]);
    f.render_widget(block, columns[0]);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("  {}", step.question),
            Style::default().fg(Color::White).bold(),
        ))),
        chunks[0],
    );

    let ratio = (index + 1) as f64 / wizard.step_count() as f64;
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(color).bg(Color::Black))
        .ratio(ratio)
        .label(format!("{}%", (ratio * 100.0).round()));
    f.render_widget(gauge, chunks[1]);

    if wizard.is_last_step() {
        render_review(f, chunks[3], screen, color);
    } else {
        render_fields(f, chunks[3], screen, color);
    }

    if let Some(error) = wizard.error() {
        f.render_widget(Paragraph::new(fields::error_line(error.message())), chunks[4]);
    }

    render_summary_panel(f, columns[1], wizard.summary());
    render_help_bar(f, rows[2], screen);
    render_contact_dock(f, rows[3], &screen.config);

    if wizard.delivery().is_some() {
        render_delivery_modal(f, screen);
    }
    if screen.show_quit_confirm {
        render_quit_confirm_overlay(f);
    }
}

fn render_fields<F: Flow>(f: &mut Frame, area: Rect, screen: &FlowScreen<F>, color: Color) {
    let answers = screen.wizard.answers();
    let mut lines = Vec::new();
    let mut focus_span = (0usize, 0usize);

    for (i, spec) in screen.wizard.current_step().fields.iter().enumerate() {
        let focused = i == screen.focus;
        let value = answers.value(spec.field);
        let field_lines = fields::render_field(spec, &value, focused, screen.option_cursor, color);
        if focused {
            focus_span = (lines.len(), field_lines.len());
        }
        lines.extend(field_lines);
        lines.push(Line::from(""));
    }

    // Keep the focused field on screen
    let height = area.height as usize;
    let (start, len) = focus_span;
    let offset = (start + len).saturating_sub(height);
    f.render_widget(Paragraph::new(lines).scroll((offset as u16, 0)), area);
}

fn render_review<F: Flow>(f: &mut Frame, area: Rect, screen: &FlowScreen<F>, color: Color) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    f.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(
                "  Your plan is on the right. How should we follow up?",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
        ]),
        chunks[0],
    );

    let options = [DeliveryKind::EmailSummary, DeliveryKind::Booking];
    let items: Vec<ListItem> = options
        .iter()
        .enumerate()
        .map(|(i, kind)| {
            let style = if i == screen.review_choice {
                Style::default().fg(Color::Black).bg(color).bold()
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(format!("  {}", kind.title())).style(style)
        })
        .collect();
    let mut list_state = ListState::default();
    list_state.select(Some(screen.review_choice));
    f.render_stateful_widget(List::new(items), chunks[1], &mut list_state);
}

/// Live summary, recomputed by the controller after every edit
fn render_summary_panel(f: &mut Frame, area: Rect, summary: &DerivedSummary) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" {} ", summary.title))
        .title_style(Style::default().fg(Color::White).bold());

    let lines: Vec<Line> = summary
        .lines
        .iter()
        .map(|line| {
            let value_style = if line.value == UNANSWERED {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(vec![
                Span::styled(
                    format!(" {}: ", line.label),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(line.value.clone(), value_style),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}

/// Render help bar with context-appropriate shortcuts
fn render_help_bar<F: Flow>(f: &mut Frame, area: Rect, screen: &FlowScreen<F>) {
    f.render_widget(
        Paragraph::new(Line::from(help_spans(screen))).alignment(Alignment::Center),
        area,
    );
}

fn help_spans<F: Flow>(screen: &FlowScreen<F>) -> Vec<Span<'static>> {
    let key = |text: &'static str| Span::styled(text, Style::default().fg(Color::Cyan));
    let hint = |text: &'static str| Span::styled(text, Style::default().fg(Color::DarkGray));
    let disabled = |text: &'static str| {
        Span::styled(
            text,
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM | Modifier::CROSSED_OUT),
        )
    };

    let mut spans = vec![];
    if screen.wizard.delivery().is_some() {
        spans.extend([key("  Tab"), hint(" next field  "), key("Enter"), hint(" submit  ")]);
        spans.extend([key("Esc"), hint(" cancel")]);
    } else if screen.wizard.is_last_step() {
        spans.extend([key("  \u{2191}\u{2193}"), hint(" choose  "), key("Enter"), hint(" open  ")]);
        spans.extend([key("Bksp"), hint(" back  "), key("Q/Esc"), hint(" quit")]);
    } else {
        let kind = screen.focused_spec().map(|spec| &spec.kind);
        if screen.continue_enabled() {
            spans.extend([key("  Enter"), hint(" continue  ")]);
        } else {
            spans.extend([disabled("  Enter"), disabled(" continue"), hint("  ")]);
        }
        spans.extend([key("\u{2191}\u{2193}"), hint(" field  ")]);
        match kind {
            Some(FieldKind::MultiSelect(_)) => spans.extend([key("Space"), hint(" toggle  ")]),
            Some(FieldKind::Text { .. } | FieldKind::Amount { .. }) => {
                spans.extend([key("Type"), hint(" edit  ")])
            }
            Some(_) => spans.extend([key("\u{2190}\u{2192}"), hint(" change  ")]),
            None => {}
        }
        if screen.wizard.current_index() > 0 {
            spans.extend([key("Bksp"), hint(" back  ")]);
        }
        spans.extend([key("Esc"), hint(" quit")]);
    }
    spans
}

fn render_delivery_modal<F: Flow>(f: &mut Frame, screen: &FlowScreen<F>) {
    let Some(form) = screen.wizard.delivery() else {
        return;
    };
    let height = form.fields().len() as u16 * 2 + 7;
    let popup = centered_fixed_rect(58, height, f.area());
    f.render_widget(Clear, popup);

    let color = Color::Green;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(format!(" {} ", form.kind().title()))
        .title_style(Style::default().fg(color).bold())
        .title_alignment(Alignment::Center)
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let mut content = vec![Line::from("")];
    for (i, field) in form.fields().iter().enumerate() {
        let focused = i == screen.modal_focus;
        let label_style = if focused {
            Style::default().fg(Color::White).bold()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        content.push(Line::from(Span::styled(
            format!("  {}", field.label()),
            label_style,
        )));
        content.push(fields::input_line(
            form.value(*field),
            field.placeholder(),
            focused,
            color,
        ));
    }

    content.push(Line::from(""));
    match form.validate() {
        Some(error) if screen.modal_touched => content.push(fields::error_line(error.message())),
        _ => content.push(Line::from("")),
    }
    let button_style = if form.can_submit() {
        Style::default().fg(Color::Black).bg(color).bold()
    } else {
        Style::default().fg(Color::DarkGray)
    };
    content.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(format!(" {} ", form.kind().action()), button_style),
    ]));

    f.render_widget(Paragraph::new(content), inner);
}

/// Render quit confirmation overlay
fn render_quit_confirm_overlay(f: &mut Frame) {
    let popup = centered_fixed_rect(58, 8, f.area());
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" Leave the planner? ")
        .title_style(Style::default().fg(Color::Red).bold())
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Your answers will be discarded.",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("    ", Style::default()),
            Span::styled("Y", Style::default().fg(Color::Cyan)),
            Span::styled(" quit  ", Style::default().fg(Color::DarkGray)),
            Span::styled("R", Style::default().fg(Color::Cyan)),
            Span::styled(" start over  ", Style::default().fg(Color::DarkGray)),
            Span::styled("P", Style::default().fg(Color::Cyan)),
            Span::styled(" other plan  ", Style::default().fg(Color::DarkGray)),
            Span::styled("N", Style::default().fg(Color::Cyan)),
            Span::styled(" stay", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    f.render_widget(Paragraph::new(content), inner);
}
