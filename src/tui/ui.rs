use super::app::{App, MENU_ACTIONS};
use crate::keybindings::{footer_hints, generate_help};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_header(f, app, chunks[0]);
    draw_body(f, app, chunks[1]);
    draw_input(f, app, chunks[2]);
    draw_footer(f, app, chunks[3]);

    if app.menu.is_some() {
        draw_menu(f, app);
    }
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Line::from(vec![
        Span::styled(" keyscope ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("│ scope: "),
        Span::styled(
            app.shortcuts.scope().to_string(),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(" │ focus: "),
        Span::styled(format!("{:?}", app.focus), Style::default().fg(Color::Yellow)),
        Span::raw(format!(" │ bindings: {}", app.shortcuts.bindings().len())),
    ]);
    f.render_widget(Paragraph::new(header), area);
}

fn draw_body(f: &mut Frame, app: &App, area: Rect) {
    let (log_area, help_area) = if app.show_help {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);
        (cols[0], Some(cols[1]))
    } else {
        (area, None)
    };

    let visible = log_area.height.saturating_sub(2) as usize;
    let start = app.log.len().saturating_sub(visible);
    let items: Vec<ListItem> = app.log[start..]
        .iter()
        .map(|entry| ListItem::new(entry.as_str()))
        .collect();
    let log = List::new(items).block(Block::default().borders(Borders::ALL).title(" Events "));
    f.render_widget(log, log_area);

    if let Some(help_area) = help_area {
        let lines: Vec<Line> = generate_help(&app.shortcuts.scoped_bindings())
            .into_iter()
            .map(Line::from)
            .collect();
        let help = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(" Active shortcuts "));
        f.render_widget(help, help_area);
    }
}

fn draw_input(f: &mut Frame, app: &App, area: Rect) {
    let style = if app.focus.is_editable() {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let input = Paragraph::new(app.input.as_str())
        .style(style)
        .block(Block::default().borders(Borders::ALL).title(" Input (i to focus) "));
    f.render_widget(input, area);
}

fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    let hints = format!("  {}", footer_hints(&app.shortcuts.scoped_bindings()));
    let footer = Paragraph::new(hints)
        .style(Style::default().fg(Color::DarkGray))
        .wrap(Wrap { trim: true });
    f.render_widget(footer, area);
}

fn draw_menu(f: &mut Frame, app: &App) {
    let Some(menu) = &app.menu else {
        return;
    };
    let area = centered_rect(30, MENU_ACTIONS.len() as u16 + 2, f.area());

    let items: Vec<ListItem> = MENU_ACTIONS
        .iter()
        .enumerate()
        .map(|(idx, action)| {
            let style = if idx == menu.selected {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            ListItem::new(format!(" {}", action.label())).style(style)
        })
        .collect();

    f.render_widget(Clear, area);
    f.render_widget(
        List::new(items).block(Block::default().borders(Borders::ALL).title(" Menu ")),
        area,
    );
}

fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 2,
        width,
        height,
    }
}
