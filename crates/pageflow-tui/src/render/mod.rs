//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use pageflow_app::layout::ChromeLayout;
use pageflow_app::state::{AppState, LoopStyle};
use pageflow_core::{Rgb, Section, TextContrast};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// Foreground matching the resolved contrast mode for the active section.
fn text_color(contrast: TextContrast) -> Color {
    match contrast {
        TextContrast::Light => Color::White,
        TextContrast::Dark => Color::Black,
    }
}

/// Render the complete UI (View function in TEA)
///
/// This is a pure rendering function: it reads the derived UI state and
/// never modifies it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let style = state.active_style();
    let fg = text_color(style.contrast);
    let mut base = Style::default().fg(fg);
    if let Some(bg) = style.background {
        base = base.bg(to_color(bg));
    }

    // Fill the whole viewport with the section background
    frame.render_widget(Block::default().style(base), area);

    let chrome = ChromeLayout::compute(area.width, area.height, &state.deck);

    render_menu(frame, state, &chrome, base);
    render_content(frame, state, area, base);
    render_arrows(frame, state, &chrome, base);
    render_status(frame, state, area, base);
}

/// Section menu across the top row, active entry highlighted.
fn render_menu(frame: &mut Frame, state: &AppState, chrome: &ChromeLayout, base: Style) {
    for entry in &chrome.menu {
        let section = &state.deck.sections[entry.index];
        let style = if entry.index == state.ui.menu_active {
            base.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            base
        };
        let zone = Rect::new(entry.zone.x, entry.zone.y, entry.zone.width, 1);
        frame.render_widget(
            Paragraph::new(format!(" {} ", section.title)).style(style),
            zone,
        );
    }
}

fn render_content(frame: &mut Frame, state: &AppState, area: Rect, base: Style) {
    let section = state.active_section();
    let slide = state.nav.slide_index(state.nav.current_vertical);

    // Leave the menu row and status row to their own renderers
    let inner = Rect::new(
        area.x,
        area.y + 1,
        area.width,
        area.height.saturating_sub(2),
    );

    let [_, middle, _] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(content_height(section)),
            Constraint::Fill(1),
        ])
        .areas(inner);

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            section.title.clone(),
            base.add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];

    if let Some(url) = &section.media {
        // Media sections show a framed placeholder instead of body text
        let panel = Paragraph::new(vec![
            Line::default(),
            Line::from("▶ media"),
            Line::from(url.as_str()),
            Line::default(),
        ])
        .alignment(Alignment::Center)
        .style(base)
        .block(Block::default().borders(Borders::ALL).style(base));
        let panel_area = centered_panel(inner, 6);
        frame.render_widget(panel, panel_area);
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center).style(base),
            middle,
        );
        return;
    }

    if !section.body.is_empty() {
        for row in section.body.lines() {
            lines.push(Line::from(row.to_string()));
        }
    }

    if !section.slides.is_empty() {
        let active = &section.slides[slide.min(section.slides.len() - 1)];
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            active.title.clone(),
            base.add_modifier(Modifier::ITALIC),
        )));
        for row in active.body.lines() {
            lines.push(Line::from(row.to_string()));
        }
        lines.push(Line::default());
        lines.push(Line::from(format!("{} / {}", slide + 1, section.slides.len())));
    }

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).style(base),
        middle,
    );
}

fn content_height(section: &Section) -> u16 {
    let mut height = 2 + section.body.lines().count();
    if !section.slides.is_empty() {
        let slide_body_max = section
            .slides
            .iter()
            .map(|s| s.body.lines().count())
            .max()
            .unwrap_or(0);
        height += 4 + slide_body_max;
    }
    height.min(u16::MAX as usize) as u16
}

fn centered_panel(area: Rect, height: u16) -> Rect {
    let width = (area.width / 2).max(20).min(area.width);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2 + 2;
    Rect::new(x, y, width, height.min(area.height))
}

/// Directional affordances at the viewport edges, plus the wrap marker.
fn render_arrows(frame: &mut Frame, state: &AppState, chrome: &ChromeLayout, base: Style) {
    let draw = |frame: &mut Frame, zone: pageflow_app::layout::Zone, glyph: &str| {
        let rect = Rect::new(zone.x, zone.y, zone.width, zone.height);
        frame.render_widget(
            Paragraph::new(glyph).alignment(Alignment::Center).style(base),
            rect,
        );
    };

    if state.ui.show_vertical_arrows {
        draw(frame, chrome.arrow_up, "▲");
        draw(frame, chrome.arrow_down, "▼");
    }
    if state.ui.show_horizontal_arrows {
        draw(frame, chrome.arrow_left, "◀");
        draw(frame, chrome.arrow_right, "▶");
    }

    if let Some(style) = state.nav.loop_style {
        let glyph = match style {
            LoopStyle::VerticalForward | LoopStyle::HorizontalForward => "↻",
            LoopStyle::VerticalBackward | LoopStyle::HorizontalBackward => "↺",
        };
        let rect = Rect::new(chrome.arrow_up.x + 1, 0, 1, 1);
        frame.render_widget(Paragraph::new(glyph).style(base), rect);
    }
}

/// Bottom row: fragment on the left, breakpoint class on the right.
fn render_status(frame: &mut Frame, state: &AppState, area: Rect, base: Style) {
    let row = Rect::new(area.x, area.y + area.height.saturating_sub(1), area.width, 1);
    let dim = base.add_modifier(Modifier::DIM);

    frame.render_widget(
        Paragraph::new(format!(" #{}", state.ui.fragment)).style(dim),
        row,
    );
    frame.render_widget(
        Paragraph::new(format!("{} ", state.breakpoint.as_str()))
            .alignment(Alignment::Right)
            .style(dim),
        row,
    );
}
