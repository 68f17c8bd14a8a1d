use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::header::model::{HeaderModel, HeaderWidth, LeftSide, ProfileButton};

impl HeaderModel {
    pub fn widget(&self) -> Paragraph<'static> {
        let palette = self.theme.palette();
        let text_style = Style::default().fg(palette.text);
        let separator_style = Style::default().fg(palette.separator);
        let button_style = Style::default()
            .fg(palette.text)
            .bg(palette.button)
            .add_modifier(Modifier::BOLD);

        let mut spans = vec![Span::styled("  ", text_style)];
        match &self.left {
            LeftSide::Greeting { name } => {
                spans.push(Span::styled(name.clone(), text_style.add_modifier(Modifier::BOLD)));
            }
            LeftSide::Back { title, .. } => {
                spans.push(Span::styled(" < ", button_style));
                if let Some(title) = title {
                    spans.push(Span::styled("  ", text_style));
                    spans.push(Span::styled(*title, text_style));
                }
            }
        }

        spans.push(Span::styled("  │  ", separator_style));
        spans.push(Span::styled(" Notifications ", button_style));
        spans.push(Span::styled("  ", text_style));
        let profile_label = match self.profile_button {
            ProfileButton::Settings => " Settings ",
            ProfileButton::Profile { .. } => " Profile ",
        };
        spans.push(Span::styled(profile_label, button_style));

        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(palette.background))
            .block(
                Block::default()
                    .borders(Borders::TOP | Borders::BOTTOM)
                    .border_style(Style::default().fg(palette.border)),
            )
    }

    /// Portion of `area` the header occupies, with `cell_width` viewport
    /// pixels per terminal column.
    pub fn area(&self, area: Rect, cell_width: u32) -> Rect {
        match self.width {
            HeaderWidth::Full => area,
            HeaderWidth::Fixed(pixels) => {
                let columns = (pixels / cell_width.max(1)).max(1);
                let columns = u16::try_from(columns).unwrap_or(u16::MAX);
                Rect {
                    width: area.width.min(columns),
                    ..area
                }
            }
        }
    }
}
