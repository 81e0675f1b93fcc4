use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::App;

impl App {
    /// Returns true when the UI should exit.
    pub(super) fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => return true,
            KeyCode::Char('c') if ctrl => return true,
            KeyCode::Char('s') if ctrl => self.export_records(),
            KeyCode::F(2) => self.export_records(),
            KeyCode::Enter => self.submit_form(),
            KeyCode::Tab | KeyCode::Down => self.form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.form.focus_prev(),
            KeyCode::Backspace => self.form.pop_char(),
            KeyCode::Char(c) if !ctrl => self.form.push_char(c),
            _ => return false,
        }

        self.render_needed = true;
        false
    }
}
