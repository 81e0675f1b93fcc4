use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    prelude::{Line, Span},
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::{
    App,
    form_state::FormField,
    rain_overlay, ui_helpers,
    view_style::{
        field_label_style, placeholder_style, section_title_style, status_style, totals_style,
    },
};

const LABEL_WIDTH: usize = 14;

impl App {
    pub(super) fn draw_frame(&mut self, f: &mut Frame) {
        let size = f.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(FormField::ALL.len() as u16 + 3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(2),
            ])
            .split(size);

        self.render_form(f, chunks[0]);

        f.render_widget(
            Paragraph::new(Span::styled(
                "Registros do Agricultor",
                section_title_style(),
            )),
            chunks[1],
        );

        if let Some(status) = self.tracker.status() {
            f.render_widget(
                Paragraph::new(Span::styled(status.text.clone(), status_style(status.kind))),
                chunks[2],
            );
        }

        let records: Vec<Line> = self
            .tracker
            .records()
            .iter()
            .map(|record| Line::from(record.display_line()))
            .collect();
        f.render_widget(Paragraph::new(records), chunks[3]);

        let totals = self.tracker.totals();
        f.render_widget(
            Paragraph::new(vec![
                Line::from(totals.area_line()),
                Line::from(totals.profit_line()),
            ])
            .style(totals_style()),
            chunks[4],
        );

        if self.rain.is_active() {
            rain_overlay::draw_rain(
                f.buffer_mut(),
                size,
                self.rain.particles(),
                self.rain.viewport(),
            );
        }
    }

    fn render_form(&self, f: &mut Frame, area: Rect) {
        let focused = self.form.focused();
        let value_width = (area.width as usize).saturating_sub(LABEL_WIDTH + 5);

        let mut lines: Vec<Line> = FormField::ALL
            .iter()
            .map(|&field| {
                let is_focused = field == focused;
                let marker = if is_focused { "› " } else { "  " };
                let label = format!("{}{:<width$}", marker, field.label(), width = LABEL_WIDTH);
                let value = self.form.value(field);

                let mut spans = vec![Span::styled(label, field_label_style(is_focused))];
                if value.is_empty() {
                    if is_focused {
                        spans.push(Span::raw("█"));
                    }
                    spans.push(Span::styled(field.placeholder(), placeholder_style()));
                } else {
                    spans.push(Span::raw(ui_helpers::visible_tail(value, value_width)));
                    if is_focused {
                        spans.push(Span::raw("█"));
                    }
                }
                Line::from(spans)
            })
            .collect();

        lines.push(Line::from(Span::styled(
            "Enter salvar · Tab/↑↓ campos · F2 exportar · Esc sair",
            Style::default().fg(Color::DarkGray),
        )));

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(
                Line::from("Registro de Plantio - Agricultor Conectado")
                    .alignment(Alignment::Left),
            );
        if self.rain.is_active()
            && let Some(seed) = self.rain.seed()
        {
            block = block.title(
                Line::from(Span::styled(
                    format!(" chuva de {} ", seed),
                    Style::default().fg(seed.style().color),
                ))
                .alignment(Alignment::Right),
            );
        }
        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}
