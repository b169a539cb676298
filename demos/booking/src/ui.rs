//! Booking screen: date, time and tournament pickers
//!
//! Events go to every picker; each one decides from its props whether the
//! event concerns it (keys only reach the focused picker, mouse input only
//! the picker under the cursor). Focus itself lives in [`BookingState`].

use crossterm::event::{KeyCode, MouseButton, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use scroll_picker::{
    CenteredOptionSelector, CenteredProps, DualAxisProps, DualAxisTimePicker, DualFocus,
    Orientation, PickerLayout,
};
use scroll_picker_core::{rect_contains, Component, EventKind, PickerCommand, PickerKeymap};

use crate::action::BookingAction;
use crate::config::BookingConfig;
use crate::state::{BookingState, Focus, Screen, MONTHS, PERIODS};

const SUMMARY_HELP: &str = "Esc/b: back  q: quit";

/// Help line naming the picker keys the keymap actually binds
fn help_line(keymap: &PickerKeymap) -> String {
    let key = |command| keymap.display_key(command).unwrap_or_else(|| "?".to_string());
    format!(
        "1/2/3: focus  {}: next  {}/{}: scroll  {}: pick  c: confirm  q: quit",
        key(PickerCommand::FocusNext),
        key(PickerCommand::Prev),
        key(PickerCommand::Next),
        key(PickerCommand::Commit),
    )
}

fn date_props<'a>(
    state: &'a BookingState,
    config: &'a BookingConfig,
) -> DualAxisProps<'a, u32, &'static str, BookingAction> {
    DualAxisProps {
        primary_items: &state.days,
        secondary_items: &MONTHS,
        value: (&state.day, &state.month),
        layout: &config.layout,
        keymap: &config.keymap,
        is_focused: state.focus == Focus::Date,
        on_change: BookingAction::DateChange,
    }
}

fn time_props<'a>(
    state: &'a BookingState,
    config: &'a BookingConfig,
) -> DualAxisProps<'a, String, &'static str, BookingAction> {
    DualAxisProps {
        primary_items: &state.times,
        secondary_items: &PERIODS,
        value: (&state.time, &state.period),
        layout: &config.layout,
        keymap: &config.keymap,
        is_focused: state.focus == Focus::Time,
        on_change: BookingAction::TimeChange,
    }
}

fn tournament_props<'a>(
    state: &'a BookingState,
    config: &'a BookingConfig,
) -> CenteredProps<'a, String, BookingAction> {
    CenteredProps {
        items: &state.tournaments,
        value: &state.tournament,
        layout: &config.centered_layout,
        keymap: &config.keymap,
        centering: config.centering,
        is_focused: state.focus == Focus::Tournament,
        on_change: BookingAction::TournamentChange,
    }
}

/// Height of a bordered picker box for a layout
fn box_height(layout: &PickerLayout) -> u16 {
    let inner = match layout.orientation {
        Orientation::Vertical => layout.viewport_length.round().clamp(1.0, 100.0) as u16,
        Orientation::Horizontal => 1,
    };
    inner + 2
}

fn picker_block(title: &str, focused: bool) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        })
}

/// Areas the pickers were last drawn into, borders included
#[derive(Debug, Default, Clone, Copy)]
struct PickerAreas {
    date: Rect,
    time: Rect,
    tournament: Rect,
}

impl PickerAreas {
    fn focus_at(&self, column: u16, row: u16) -> Option<Focus> {
        [
            (Focus::Date, self.date),
            (Focus::Time, self.time),
            (Focus::Tournament, self.tournament),
        ]
        .into_iter()
        .find(|(_, area)| rect_contains(*area, column, row))
        .map(|(focus, _)| focus)
    }
}

/// View state of the booking screen
#[derive(Default)]
pub struct BookingUi {
    date: DualAxisTimePicker<u32, &'static str>,
    time: DualAxisTimePicker<String, &'static str>,
    tournament: CenteredOptionSelector<String>,
    areas: PickerAreas,
}

impl BookingUi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether every picker is at rest (no frame ticks needed)
    pub fn is_at_rest(&self) -> bool {
        self.date.is_at_rest() && self.time.is_at_rest() && self.tournament.is_at_rest()
    }

    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &BookingState,
        config: &BookingConfig,
    ) {
        match state.screen {
            Screen::Booking => self.render_booking(frame, area, state, config),
            Screen::Summary => {
                // Pickers leave the screen; they remount at the held values.
                self.date.unmount();
                self.time.unmount();
                self.tournament.unmount();
                self.areas = PickerAreas::default();
                render_summary(frame, area, state);
            }
        }
    }

    fn render_booking(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &BookingState,
        config: &BookingConfig,
    ) {
        let [pickers, tournament, summary, _, help] = Layout::vertical([
            Constraint::Length(box_height(&config.layout)),
            Constraint::Length(box_height(&config.centered_layout)),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);
        let [date, time] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(pickers);

        self.areas = PickerAreas {
            date,
            time,
            tournament,
        };

        let block = picker_block(" Date ", state.focus == Focus::Date);
        let inner = block.inner(date);
        frame.render_widget(block, date);
        self.date.render(frame, inner, date_props(state, config));

        let block = picker_block(" Time ", state.focus == Focus::Time);
        let inner = block.inner(time);
        frame.render_widget(block, time);
        self.time.render(frame, inner, time_props(state, config));

        let block = picker_block(" Tournament ", state.focus == Focus::Tournament);
        let inner = block.inner(tournament);
        frame.render_widget(block, tournament);
        self.tournament
            .render(frame, inner, tournament_props(state, config));

        frame.render_widget(
            Paragraph::new(state.summary()).alignment(Alignment::Center),
            summary,
        );
        frame.render_widget(
            Paragraph::new(help_line(&config.keymap))
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray)),
            help,
        );
    }

    /// Map one event to booking actions
    pub fn handle_event(
        &mut self,
        event: &EventKind,
        state: &BookingState,
        config: &BookingConfig,
    ) -> Vec<BookingAction> {
        if event.is_quit() {
            return vec![BookingAction::Quit];
        }
        match state.screen {
            Screen::Booking => self.handle_booking(event, state, config),
            Screen::Summary => match event {
                EventKind::Key(key) => match key.code {
                    KeyCode::Char('b') | KeyCode::Esc => vec![BookingAction::ScreenBack],
                    KeyCode::Char('q') => vec![BookingAction::Quit],
                    _ => Vec::new(),
                },
                _ => Vec::new(),
            },
        }
    }

    fn handle_booking(
        &mut self,
        event: &EventKind,
        state: &BookingState,
        config: &BookingConfig,
    ) -> Vec<BookingAction> {
        let mut actions = Vec::new();

        match event {
            EventKind::Key(key) => {
                match key.code {
                    KeyCode::Char('q') => return vec![BookingAction::Quit],
                    KeyCode::Char('c') => return vec![BookingAction::ScreenConfirm],
                    KeyCode::Char('1') => return vec![BookingAction::FocusSet(Focus::Date)],
                    KeyCode::Char('2') => return vec![BookingAction::FocusSet(Focus::Time)],
                    KeyCode::Char('3') => return vec![BookingAction::FocusSet(Focus::Tournament)],
                    _ => {}
                }
                // Focus keys walk through the axes and then on to the next picker.
                match config.keymap.command(*key) {
                    Some(PickerCommand::FocusNext) if self.at_edge(state.focus, DualFocus::Secondary) => {
                        self.enter(state.focus.next(), DualFocus::Primary);
                        return vec![BookingAction::FocusNext];
                    }
                    Some(PickerCommand::FocusPrev) if self.at_edge(state.focus, DualFocus::Primary) => {
                        self.enter(state.focus.prev(), DualFocus::Secondary);
                        return vec![BookingAction::FocusPrev];
                    }
                    _ => {}
                }
            }
            EventKind::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                if let Some(focus) = self.areas.focus_at(mouse.column, mouse.row) {
                    if focus != state.focus {
                        actions.push(BookingAction::FocusSet(focus));
                    }
                }
            }
            _ => {}
        }

        actions.extend(self.date.handle_event(event, date_props(state, config)));
        actions.extend(self.time.handle_event(event, time_props(state, config)));
        actions.extend(
            self.tournament
                .handle_event(event, tournament_props(state, config)),
        );
        actions
    }

    /// Whether focus would leave `focus` past its `edge` axis
    fn at_edge(&self, focus: Focus, edge: DualFocus) -> bool {
        match focus {
            Focus::Date => self.date.focus() == edge,
            Focus::Time => self.time.focus() == edge,
            Focus::Tournament => true,
        }
    }

    fn enter(&mut self, focus: Focus, axis: DualFocus) {
        match focus {
            Focus::Date => self.date.set_focus(axis),
            Focus::Time => self.time.set_focus(axis),
            Focus::Tournament => {}
        }
    }
}

fn render_summary(frame: &mut Frame, area: Rect, state: &BookingState) {
    let [_, center, _, help] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(area);
    let [center] = Layout::horizontal([Constraint::Length(48)])
        .flex(Flex::Center)
        .areas(center);

    let block = Block::default()
        .title(" Booking ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(
        Paragraph::new(state.summary())
            .alignment(Alignment::Center)
            .block(block),
        center,
    );
    frame.render_widget(
        Paragraph::new(SUMMARY_HELP)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        help,
    );
}
