//! Footer widget: brand, navigation, newsletter, social links, back to top

use super::components::{render_button, BUTTON_HEIGHT};
use super::newsletter::{self, NEWSLETTER_HEIGHT};
use crate::config::FooterConfig;
use crate::state::{FooterFocus, NewsletterView};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use std::rc::Rc;

/// Decorative wave along the top edge
const WAVE: &str = "◠◡";

const BACK_TO_TOP_LABEL: &str = "↑ Back to Top";
const BACK_TO_TOP_WIDTH: u16 = 19;

/// Accent colour of the footer
const ACCENT: Color = Color::Magenta;

/// Row layout of the footer, top to bottom
const SECTIONS: [u16; 9] = [
    1,                 // Wave
    2,                 // Brand, copyright and navigation
    1,                 // Divider
    NEWSLETTER_HEIGHT, // Newsletter
    1,                 // Divider
    1,                 // Social links
    1,                 // Divider
    BUTTON_HEIGHT,     // Back to top
    1,                 // Bottom padding
];

/// Total rows the footer occupies
pub const FOOTER_HEIGHT: u16 = {
    let mut total = 0;
    let mut i = 0;
    while i < SECTIONS.len() {
        total += SECTIONS[i];
        i += 1;
    }
    total
};

/// The footer as a ratatui widget
pub struct Footer<'a> {
    pub config: &'a FooterConfig,
    pub newsletter: &'a NewsletterView,
    pub focus: FooterFocus,
}

fn section_areas(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints(SECTIONS.map(Constraint::Length))
        .split(area)
}

fn back_to_top_area(section: Rect) -> Rect {
    let button_width = BACK_TO_TOP_WIDTH.min(section.width);
    Rect {
        x: section.x + (section.width - button_width) / 2,
        width: button_width,
        ..section
    }
}

/// Footer control under `position`, for a footer drawn in `area`.
/// The form controls only count while the form is shown.
pub fn control_at(area: Rect, position: Position, form_visible: bool) -> Option<FooterFocus> {
    let chunks = section_areas(area);

    if back_to_top_area(chunks[7]).contains(position) {
        return Some(FooterFocus::BackToTop);
    }

    if form_visible {
        let (field_area, button_area) = newsletter::form_areas(chunks[3]);
        if field_area.contains(position) {
            return Some(FooterFocus::EmailField);
        }
        if button_area.contains(position) {
            return Some(FooterFocus::SubscribeButton);
        }
    }

    None
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = section_areas(area);

        render_wave(buf, chunks[0]);
        render_brand_and_nav(buf, chunks[1], self.config);
        render_divider(buf, chunks[2]);
        newsletter::render(buf, chunks[3], self.newsletter, self.focus);
        render_divider(buf, chunks[4]);
        render_social_links(buf, chunks[5], self.config);
        render_divider(buf, chunks[6]);

        render_button(
            buf,
            back_to_top_area(chunks[7]),
            BACK_TO_TOP_LABEL,
            self.focus == FooterFocus::BackToTop,
            ACCENT,
        );
    }
}

fn render_wave(buf: &mut Buffer, area: Rect) {
    let wave: String = WAVE.repeat(area.width as usize / 2 + 1);
    Paragraph::new(Span::styled(wave, Style::default().fg(ACCENT))).render(area, buf);
}

fn render_divider(buf: &mut Buffer, area: Rect) {
    Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::LightMagenta))
        .render(area, buf);
}

fn render_brand_and_nav(buf: &mut Buffer, area: Rect, config: &FooterConfig) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let brand = vec![
        Line::from(Span::styled(
            config.brand_name().to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            config.copyright_line(),
            Style::default().fg(Color::LightMagenta),
        )),
    ];
    Paragraph::new(brand).render(columns[0], buf);

    let mut nav = Vec::new();
    for (idx, link) in config.nav_links().into_iter().enumerate() {
        if idx > 0 {
            nav.push(Span::raw("  "));
        }
        nav.push(Span::styled(
            link.label,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::UNDERLINED),
        ));
    }
    Paragraph::new(Line::from(nav))
        .alignment(Alignment::Right)
        .render(columns[1], buf);
}

fn render_social_links(buf: &mut Buffer, area: Rect, config: &FooterConfig) {
    let mut spans = Vec::new();
    for (idx, link) in config.social_links().into_iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(link.label, Style::default().fg(Color::White)));
    }
    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .render(area, buf);
}
