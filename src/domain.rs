use chrono::NaiveDate;
use itertools::Itertools;
use tracing::{info, warn};

use crate::{
    constants::{CURRENCY_PREFIX, MESSAGES},
    seed::SeedType,
    validation::{RawSubmission, RecordDraft, validate_submission},
};

#[derive(Clone, Debug, PartialEq)]
pub struct PlantingRecord {
    crop: String,
    area: f64,
    planting_date: NaiveDate,
    date_text: String,
    total_profit: f64,
}

impl PlantingRecord {
    pub fn from_draft(draft: RecordDraft) -> Self {
        let total_profit = total_profit(
            draft.seed_price,
            draft.fert_price,
            draft.sale_price,
            draft.area,
        );
        Self {
            crop: draft.crop,
            area: draft.area,
            planting_date: draft.planting_date,
            date_text: draft.date_text,
            total_profit,
        }
    }

    pub fn crop(&self) -> &str {
        &self.crop
    }

    pub fn area(&self) -> f64 {
        self.area
    }

    pub fn planting_date(&self) -> NaiveDate {
        self.planting_date
    }

    /// The date as the user typed it.
    pub fn date_text(&self) -> &str {
        &self.date_text
    }

    pub fn total_profit(&self) -> f64 {
        self.total_profit
    }

    pub fn display_line(&self) -> String {
        let fields = [
            self.crop.clone(),
            format!("{} ha", self.area),
            format!("Plantado em: {}", self.date_text),
            format!("Lucro: {}", format_money(self.total_profit)),
        ];
        format!("• {}", fields.iter().join(" | "))
    }
}

pub fn cost_per_hectare(seed_price: f64, fert_price: f64) -> f64 {
    seed_price + fert_price
}

pub fn profit_per_hectare(seed_price: f64, fert_price: f64, sale_price: f64) -> f64 {
    sale_price - cost_per_hectare(seed_price, fert_price)
}

/// Negative results are valid: a harvest sold below cost.
pub fn total_profit(seed_price: f64, fert_price: f64, sale_price: f64, area: f64) -> f64 {
    profit_per_hectare(seed_price, fert_price, sale_price) * area
}

pub fn format_money(value: f64) -> String {
    format!("{} {:.2}", CURRENCY_PREFIX, value)
}

#[derive(Default, Debug)]
pub struct RecordStore {
    records: Vec<PlantingRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Newest planting first; `sort_by` is stable so equal dates keep insertion order.
    pub fn insert(&mut self, record: PlantingRecord) {
        self.records.push(record);
        self.records
            .sort_by(|a, b| b.planting_date().cmp(&a.planting_date()));
    }

    pub fn all(&self) -> &[PlantingRecord] {
        &self.records
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Totals {
    pub area: f64,
    pub profit: f64,
}

impl Totals {
    pub fn from_records(records: &[PlantingRecord]) -> Self {
        records.iter().fold(Totals::default(), |acc, record| Totals {
            area: acc.area + record.area,
            profit: acc.profit + record.total_profit,
        })
    }

    pub fn area_line(&self) -> String {
        format!("Área total plantada: {:.2} hectares", self.area)
    }

    pub fn profit_line(&self) -> String {
        format!("Lucro total estimado: {}", format_money(self.profit))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Warning,
    Success,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Warning,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }
}

/// Owns the record list and the status line shown under the form.
pub struct PlantingTracker {
    store: RecordStore,
    status: Option<StatusMessage>,
}

impl Default for PlantingTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl PlantingTracker {
    pub fn new() -> Self {
        Self {
            store: RecordStore::new(),
            status: None,
        }
    }

    pub fn records(&self) -> &[PlantingRecord] {
        self.store.all()
    }

    pub fn totals(&self) -> Totals {
        Totals::from_records(self.store.all())
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn set_status(&mut self, status: StatusMessage) {
        self.status = Some(status);
    }

    /// Validates and stores one submission, returning the seed type the
    /// celebration rain should use. A failed submission leaves the store as is.
    pub fn submit(&mut self, raw: &RawSubmission) -> Option<SeedType> {
        match validate_submission(raw) {
            Ok(draft) => {
                let record = PlantingRecord::from_draft(draft);
                let seed = SeedType::classify(record.crop());
                info!(
                    crop = record.crop(),
                    area = record.area(),
                    profit = record.total_profit(),
                    %seed,
                    "record saved"
                );
                self.store.insert(record);
                self.status = Some(StatusMessage::success(MESSAGES.record_saved));
                Some(seed)
            }
            Err(e) => {
                warn!(error = %e, "submission rejected");
                self.status = Some(StatusMessage::warning(MESSAGES.invalid_form));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::validation::submission;

    fn record(crop: &str, date: (i32, u32, u32), area: f64, profit_per_ha: f64) -> PlantingRecord {
        let (year, month, day) = date;
        PlantingRecord::from_draft(RecordDraft {
            crop: crop.to_string(),
            area,
            planting_date: NaiveDate::from_ymd_opt(year, month, day).unwrap(),
            date_text: format!("{:02}/{:02}/{}", day, month, year),
            seed_price: 0.0,
            fert_price: 0.0,
            sale_price: profit_per_ha,
        })
    }

    #[test]
    fn test_profit_arithmetic() {
        assert_eq!(cost_per_hectare(100.0, 50.0), 150.0);
        assert_eq!(profit_per_hectare(100.0, 50.0, 300.0), 150.0);
        assert_eq!(total_profit(100.0, 50.0, 300.0, 2.0), 300.0);
    }

    #[test]
    fn test_profit_may_be_negative() {
        assert_eq!(total_profit(200.0, 150.0, 100.0, 4.0), -1000.0);
    }

    #[test]
    fn test_store_sorted_newest_first() {
        let mut store = RecordStore::new();
        store.insert(record("a", (2025, 1, 10), 1.0, 0.0));
        store.insert(record("b", (2025, 3, 1), 1.0, 0.0));
        store.insert(record("c", (2024, 12, 31), 1.0, 0.0));

        let crops: Vec<&str> = store.all().iter().map(|r| r.crop()).collect();
        assert_eq!(crops, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_store_equal_dates_keep_insertion_order() {
        let mut store = RecordStore::new();
        store.insert(record("first", (2025, 5, 5), 1.0, 0.0));
        store.insert(record("newer", (2025, 6, 1), 1.0, 0.0));
        store.insert(record("second", (2025, 5, 5), 1.0, 0.0));
        store.insert(record("third", (2025, 5, 5), 1.0, 0.0));

        let crops: Vec<&str> = store.all().iter().map(|r| r.crop()).collect();
        assert_eq!(crops, vec!["newer", "first", "second", "third"]);
    }

    #[test]
    fn test_totals_sum_area_and_profit() {
        let records = vec![
            record("a", (2025, 1, 1), 2.0, 150.0),
            record("b", (2025, 1, 2), 1.5, -20.0),
        ];
        let totals = Totals::from_records(&records);

        assert_eq!(totals.area, 3.5);
        assert_eq!(totals.profit, 270.0);
        assert_eq!(totals.area_line(), "Área total plantada: 3.50 hectares");
        assert_eq!(totals.profit_line(), "Lucro total estimado: R$ 270.00");
    }

    #[test]
    fn test_totals_empty() {
        assert_eq!(Totals::from_records(&[]), Totals::default());
    }

    #[test]
    fn test_display_line_format() {
        let r = record("Milho", (2025, 1, 1), 2.0, 150.0);
        assert_eq!(
            r.display_line(),
            "• Milho | 2 ha | Plantado em: 01/01/2025 | Lucro: R$ 300.00"
        );
    }

    #[test]
    fn test_new_tracker_is_empty() {
        let tracker = PlantingTracker::default();

        assert!(tracker.records().is_empty());
        assert_eq!(tracker.status(), None);
        assert_eq!(tracker.totals(), Totals::default());
    }

    #[test]
    fn test_tracker_submit_success_sets_status() {
        let mut tracker = PlantingTracker::new();
        let seed = tracker.submit(&submission("Milho", "2", "01/01/2025", "100", "50", "300"));

        assert_eq!(seed, Some(SeedType::Corn));
        assert_eq!(tracker.records().len(), 1);
        assert_eq!(tracker.records()[0].total_profit(), 300.0);
        assert_eq!(
            tracker.status(),
            Some(&StatusMessage::success(MESSAGES.record_saved))
        );
    }

    #[test]
    fn test_tracker_submit_failure_leaves_store_unchanged() {
        let mut tracker = PlantingTracker::new();
        tracker.submit(&submission("Soja", "1", "02/02/2025", "1", "1", "5"));

        let seed = tracker.submit(&submission("Milho", "abc", "01/01/2025", "100", "50", "300"));

        assert_eq!(seed, None);
        assert_eq!(tracker.records().len(), 1);
        assert_eq!(tracker.records()[0].crop(), "Soja");
        assert_eq!(tracker.status().map(|s| s.kind), Some(StatusKind::Warning));
    }

    proptest! {
        #[test]
        fn prop_total_profit_matches_formula(
            seed in -1e6f64..1e6,
            fert in -1e6f64..1e6,
            sale in -1e6f64..1e6,
            area in 0.001f64..1e4,
        ) {
            let raw = submission(
                "Trigo",
                &area.to_string(),
                "10/10/2024",
                &seed.to_string(),
                &fert.to_string(),
                &sale.to_string(),
            );
            let draft = validate_submission(&raw).unwrap();
            let rec = PlantingRecord::from_draft(draft);
            let expected = (sale - seed - fert) * area;
            let tolerance = 1e-9 * (sale.abs() + seed.abs() + fert.abs() + 1.0) * area;
            prop_assert!((rec.total_profit() - expected).abs() <= tolerance);
        }

        #[test]
        fn prop_store_always_sorted_descending(
            days in proptest::collection::vec(0i64..3650, 1..40)
        ) {
            let base = NaiveDate::from_ymd_opt(2015, 1, 1).unwrap();
            let mut store = RecordStore::new();
            for (i, offset) in days.iter().enumerate() {
                let date = base + chrono::Duration::days(*offset);
                store.insert(PlantingRecord::from_draft(RecordDraft {
                    crop: i.to_string(),
                    area: 1.0,
                    planting_date: date,
                    date_text: date.format("%d/%m/%Y").to_string(),
                    seed_price: 0.0,
                    fert_price: 0.0,
                    sale_price: 0.0,
                }));
            }

            for pair in store.all().windows(2) {
                prop_assert!(pair[0].planting_date() >= pair[1].planting_date());
                if pair[0].planting_date() == pair[1].planting_date() {
                    let a: usize = pair[0].crop().parse().unwrap();
                    let b: usize = pair[1].crop().parse().unwrap();
                    prop_assert!(a < b);
                }
            }
        }
    }
}
