use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use super::app::{MessageType, Route, StatusMessage};
use super::layout::{AppLayout, centered_column};
use crate::utils::{display_line, format_timestamp};
use crate::views::{
    Feedback, FormField, NO_RESULTS_HINT, NO_RESULTS_TITLE, ResultRow, ResultsView, SearchForm,
};

const FOOTER_TEXT: &str = "© 2023 CAESAR - Contact Finder";
const FORM_WIDTH: u16 = 64;

const BRIGHT: Color = Color::Rgb(250, 250, 250);
const MUTED: Color = Color::Rgb(113, 113, 122);
const ACCENT: Color = Color::Rgb(16, 185, 129);
const ERROR: Color = Color::Rgb(239, 68, 68);
const INFO: Color = Color::Rgb(245, 158, 11);
const BAR_BG: Color = Color::Rgb(24, 24, 27);

/// Everything a frame needs, borrowed from the app
pub struct RenderState<'a> {
    pub route: Route,
    pub form: &'a SearchForm,
    pub results: &'a ResultsView,
    pub filter_editing: bool,
    pub in_flight: usize,
    pub status_message: Option<&'a StatusMessage>,
}

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, state: &RenderState) {
    let layout = AppLayout::new(frame.area());

    render_header(frame, layout.header_area, state.route);
    match state.route {
        Route::Search => render_search_form(frame, layout.body_area, state.form),
        Route::Results => {
            render_results(frame, layout.body_area, state.results, state.filter_editing)
        }
    }
    render_status_bar(frame, layout.status_area, state);
    render_footer(frame, layout.footer_area);
}

fn render_header(frame: &mut Frame, area: Rect, route: Route) {
    let nav_item = |label: &'static str, active: bool| {
        let style = if active {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(MUTED)
        };
        Span::styled(label, style)
    };

    let line = Line::from(vec![
        Span::styled(" CAESAR ", Style::default().fg(BRIGHT).add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        nav_item("Home", route == Route::Search),
        Span::raw("  "),
        nav_item("Resultaten", route == Route::Results),
    ]);

    frame.render_widget(Paragraph::new(line).style(Style::default().bg(BAR_BG)), area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(FOOTER_TEXT)
        .alignment(Alignment::Center)
        .style(Style::default().fg(MUTED));
    frame.render_widget(footer, area);
}

fn render_search_form(frame: &mut Frame, area: Rect, form: &SearchForm) {
    let column = centered_column(area, FORM_WIDTH);

    let mut constraints = vec![Constraint::Length(1)];
    constraints.extend(FormField::ALL.iter().map(|_| Constraint::Length(3)));
    constraints.extend([Constraint::Length(1), Constraint::Min(0)]);
    let chunks = Layout::default().direction(Direction::Vertical).constraints(constraints).split(column);

    let title = Paragraph::new("Zoek bedrijven")
        .style(Style::default().fg(BRIGHT).add_modifier(Modifier::BOLD));
    frame.render_widget(title, chunks[0]);

    for (i, field) in FormField::ALL.iter().enumerate() {
        render_field(frame, chunks[i + 1], form, *field);
    }

    let button_idx = FormField::ALL.len() + 1;
    let button = if form.is_pending() {
        Span::styled("[ Zoeken... ]", Style::default().fg(MUTED))
    } else {
        Span::styled("[ Zoeken ]", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
    };
    frame.render_widget(Paragraph::new(Line::from(button)), chunks[button_idx]);

    if let Some(notice) = form.notice() {
        let color = if notice.is_error() { ERROR } else { INFO };
        let paragraph = Paragraph::new(display_line(notice.text()))
            .style(Style::default().fg(color))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, chunks[button_idx + 1]);
    }
}

fn render_field(frame: &mut Frame, area: Rect, form: &SearchForm, field: FormField) {
    let focused = form.focus() == field;
    let value = form.value(field);

    let content = if value.is_empty() {
        Line::from(Span::styled(field.placeholder(), Style::default().fg(MUTED)))
    } else if focused {
        Line::from(vec![Span::raw(value), Span::styled("▏", Style::default().fg(ACCENT))])
    } else {
        Line::from(value)
    };

    let title = if field.is_required() {
        format!(" {} * ", field.label())
    } else {
        format!(" {} ", field.label())
    };
    let border = if focused { ACCENT } else { MUTED };

    let paragraph = Paragraph::new(content).block(
        Block::default().borders(Borders::ALL).border_style(Style::default().fg(border)).title(title),
    );
    frame.render_widget(paragraph, area);
}

fn render_results(frame: &mut Frame, area: Rect, results: &ResultsView, filter_editing: bool) {
    if results.is_empty() {
        render_no_results(frame, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    frame.render_widget(Paragraph::new(results_summary(results, filter_editing)), chunks[0]);

    let selected = results.selected_index();
    let items: Vec<ListItem> = results
        .visible_rows()
        .enumerate()
        .map(|(pos, row)| result_item(row, pos == results.selected_position() && selected.is_some()))
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(MUTED))
            .title(" Resultaten "),
    );

    let mut list_state = ListState::default();
    list_state.select(selected.map(|_| results.selected_position()));
    frame.render_stateful_widget(list, chunks[1], &mut list_state);
}

fn results_summary(results: &ResultsView, filter_editing: bool) -> Line<'static> {
    let mut parts = vec![format!("{} bedrijven", results.rows().len())];
    if let Some(criteria) = results.criteria() {
        parts.push(display_line(&criteria.summary()));
    }
    if let Some(saved_at) = results.saved_at() {
        parts.push(format!("opgeslagen {}", format_timestamp(saved_at)));
    }

    let mut spans = vec![Span::styled(format!(" {}", parts.join(" · ")), Style::default().fg(MUTED))];
    if filter_editing || !results.filter_query().is_empty() {
        let cursor = if filter_editing { "▏" } else { "" };
        let filter = format!(
            "  filter: {}{} ({}/{})",
            results.filter_query(),
            cursor,
            results.visible_count(),
            results.rows().len()
        );
        spans.push(Span::styled(filter, Style::default().fg(ACCENT)));
    }
    Line::from(spans)
}

fn result_item(row: &ResultRow, is_selected: bool) -> ListItem<'static> {
    let name_style = if is_selected {
        Style::default().fg(BRIGHT).bg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(BRIGHT).add_modifier(Modifier::BOLD)
    };

    let mut method = vec![
        Span::styled("  Methode: ", Style::default().fg(MUTED)),
        Span::raw(format!("◀ {} ▶", row.selector.selected().label())),
    ];
    if row.in_flight > 0 {
        method.push(Span::styled("  bezig...", Style::default().fg(INFO)));
    }

    let mut lines = vec![
        Line::from(Span::styled(display_line(&row.company.name), name_style)),
        Line::from(vec![
            Span::styled("  Contact: ", Style::default().fg(MUTED)),
            Span::raw(display_line(row.company.display_contact())),
        ]),
        Line::from(method),
    ];

    if let Some(feedback) = &row.feedback {
        let color = match feedback {
            Feedback::Success(_) => ACCENT,
            Feedback::Error(_) => ERROR,
        };
        lines.push(Line::from(Span::styled(
            format!("  {}", display_line(feedback.text())),
            Style::default().fg(color),
        )));
    }
    lines.push(Line::from(""));

    ListItem::new(Text::from(lines))
}

fn render_no_results(frame: &mut Frame, area: Rect) {
    let text = Text::from(vec![
        Line::from(""),
        Line::from(Span::styled(
            NO_RESULTS_TITLE,
            Style::default().fg(BRIGHT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(NO_RESULTS_HINT, Style::default().fg(MUTED))),
    ]);

    let paragraph = Paragraph::new(text).alignment(Alignment::Center).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &RenderState) {
    let (status_text, style) = if let Some(msg) = state.status_message {
        let color = match msg.message_type {
            MessageType::Success => ACCENT,
            MessageType::Error => ERROR,
        };
        (format!(" {} ", display_line(&msg.text)), Style::default().fg(color).bg(BAR_BG))
    } else {
        let mut parts = vec![state.route.path().to_string()];
        if state.in_flight > 0 {
            parts.push(format!("{} verzoek(en) bezig", state.in_flight));
        }
        parts.push(key_hints(state).to_string());
        (format!(" {} ", parts.join(" | ")), Style::default().fg(BRIGHT).bg(BAR_BG))
    };

    frame.render_widget(Paragraph::new(status_text).style(style), area);
}

fn key_hints(state: &RenderState) -> &'static str {
    match state.route {
        Route::Search => "Tab: veld | Enter: zoeken | F2: resultaten | Esc/Ctrl+C: stoppen",
        Route::Results if state.results.is_empty() => "F1/Esc: zoeken | Ctrl+C: stoppen",
        Route::Results if state.filter_editing => "Enter: klaar | Esc: filter wissen",
        Route::Results => {
            "↑↓: kies | ←→: methode | Enter: contact | Ctrl+Y: kopieer | /: filter | Esc: zoeken | q: stoppen"
        }
    }
}
