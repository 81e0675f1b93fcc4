use crate::validation::RawSubmission;

use super::ui_helpers;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum FormField {
    Crop,
    Area,
    Date,
    SeedPrice,
    FertPrice,
    SalePrice,
}

impl FormField {
    pub(super) const ALL: [FormField; 6] = [
        FormField::Crop,
        FormField::Area,
        FormField::Date,
        FormField::SeedPrice,
        FormField::FertPrice,
        FormField::SalePrice,
    ];

    pub(super) fn label(self) -> &'static str {
        match self {
            FormField::Crop => "Cultura",
            FormField::Area => "Área",
            FormField::Date => "Data",
            FormField::SeedPrice => "Semente",
            FormField::FertPrice => "Fertilizante",
            FormField::SalePrice => "Venda",
        }
    }

    pub(super) fn placeholder(self) -> &'static str {
        match self {
            FormField::Crop => "Nome da cultura (ex: Milho)",
            FormField::Area => "Área plantada (hectares)",
            FormField::Date => "Data de plantio (ex: 23/04/2025)",
            FormField::SeedPrice => "Preço da semente por ha (R$)",
            FormField::FertPrice => "Preço do fertilizante por ha (R$)",
            FormField::SalePrice => "Valor de venda por ha (R$)",
        }
    }
}

#[derive(Debug, Default)]
pub(super) struct FormState {
    values: [String; 6],
    focused: usize,
}

impl FormState {
    pub(super) fn value(&self, field: FormField) -> &str {
        &self.values[Self::index(field)]
    }

    pub(super) fn focused(&self) -> FormField {
        FormField::ALL[self.focused]
    }

    pub(super) fn focus_next(&mut self) {
        self.focused = ui_helpers::wrap_next_index(self.focused, FormField::ALL.len());
    }

    pub(super) fn focus_prev(&mut self) {
        self.focused = ui_helpers::wrap_prev_index(self.focused, FormField::ALL.len());
    }

    pub(super) fn push_char(&mut self, c: char) {
        self.values[self.focused].push(c);
    }

    pub(super) fn pop_char(&mut self) {
        self.values[self.focused].pop();
    }

    pub(super) fn clear(&mut self) {
        for value in &mut self.values {
            value.clear();
        }
        self.focused = 0;
    }

    pub(super) fn to_submission(&self) -> RawSubmission {
        let [crop, area, date, seed_price, fert_price, sale_price] = self.values.clone();
        RawSubmission {
            crop,
            area,
            date,
            seed_price,
            fert_price,
            sale_price,
        }
    }

    fn index(field: FormField) -> usize {
        FormField::ALL
            .iter()
            .position(|candidate| *candidate == field)
            .unwrap_or(0)
    }

    #[cfg(test)]
    pub(super) fn fill(&mut self, values: [&str; 6]) {
        for (slot, value) in self.values.iter_mut().zip(values) {
            *slot = value.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_wraps_both_ways() {
        let mut form = FormState::default();
        assert_eq!(form.focused(), FormField::Crop);

        form.focus_prev();
        assert_eq!(form.focused(), FormField::SalePrice);

        form.focus_next();
        form.focus_next();
        assert_eq!(form.focused(), FormField::Area);
    }

    #[test]
    fn test_typing_edits_focused_field() {
        let mut form = FormState::default();
        form.focus_next();
        for c in "2.5x".chars() {
            form.push_char(c);
        }
        form.pop_char();

        assert_eq!(form.value(FormField::Area), "2.5");
        assert_eq!(form.value(FormField::Crop), "");
    }

    #[test]
    fn test_to_submission_maps_fields_in_order() {
        let mut form = FormState::default();
        form.fill(["Milho", "2", "01/01/2025", "100", "50", "300"]);

        let raw = form.to_submission();
        assert_eq!(raw.crop, "Milho");
        assert_eq!(raw.date, "01/01/2025");
        assert_eq!(raw.fert_price, "50");
        assert_eq!(raw.sale_price, "300");
    }

    #[test]
    fn test_clear_resets_values_and_focus() {
        let mut form = FormState::default();
        form.fill(["a", "b", "c", "d", "e", "f"]);
        form.focus_next();

        form.clear();

        assert!(FormField::ALL.iter().all(|f| form.value(*f).is_empty()));
        assert_eq!(form.focused(), FormField::Crop);
    }
}
