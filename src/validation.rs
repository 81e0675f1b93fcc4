use chrono::NaiveDate;

/// Raw text exactly as typed into the six form fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawSubmission {
    pub crop: String,
    pub area: String,
    pub date: String,
    pub seed_price: String,
    pub fert_price: String,
    pub sale_price: String,
}

/// A submission that passed validation but has no derived fields yet.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordDraft {
    pub crop: String,
    pub area: f64,
    pub planting_date: NaiveDate,
    pub date_text: String,
    pub seed_price: f64,
    pub fert_price: f64,
    pub sale_price: f64,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("crop name is empty")]
    EmptyCrop,
    #[error("field '{field}' is not a number: {value:?}")]
    NotANumber { field: &'static str, value: String },
    #[error("area must be positive, got {0}")]
    NonPositiveArea(f64),
    #[error("invalid planting date: {0:?}")]
    InvalidDate(String),
}

/// Parses `dd/mm/yyyy`. Out-of-range days or months are rejected rather than
/// rolled into the next month.
pub fn parse_planting_date(text: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = text.split('/').collect();
    let [day, month, year] = parts.as_slice() else {
        return None;
    };

    let day: u32 = day.trim().parse().ok()?;
    let month: u32 = month.trim().parse().ok()?;
    let year: i32 = year.trim().parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_number(field: &'static str, raw: &str) -> Result<f64, ValidationError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ValidationError::NotANumber {
            field,
            value: raw.to_string(),
        })
}

pub fn validate_submission(raw: &RawSubmission) -> Result<RecordDraft, ValidationError> {
    let crop = raw.crop.trim();
    if crop.is_empty() {
        return Err(ValidationError::EmptyCrop);
    }

    let area = parse_number("area", &raw.area)?;
    if area <= 0.0 {
        return Err(ValidationError::NonPositiveArea(area));
    }

    let date_text = raw.date.trim();
    let planting_date = parse_planting_date(date_text)
        .ok_or_else(|| ValidationError::InvalidDate(date_text.to_string()))?;

    Ok(RecordDraft {
        crop: crop.to_string(),
        area,
        planting_date,
        date_text: date_text.to_string(),
        seed_price: parse_number("seed_price", &raw.seed_price)?,
        fert_price: parse_number("fert_price", &raw.fert_price)?,
        sale_price: parse_number("sale_price", &raw.sale_price)?,
    })
}

#[cfg(test)]
pub(crate) fn submission(
    crop: &str,
    area: &str,
    date: &str,
    seed_price: &str,
    fert_price: &str,
    sale_price: &str,
) -> RawSubmission {
    RawSubmission {
        crop: crop.to_string(),
        area: area.to_string(),
        date: date.to_string(),
        seed_price: seed_price.to_string(),
        fert_price: fert_price.to_string(),
        sale_price: sale_price.to_string(),
    }
}
