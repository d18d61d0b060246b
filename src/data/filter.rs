use super::model::CellValue;
use super::records::{DepreciationRecord, PriceRecord, RawPriceRecord};
use crate::config::{ZIP_PREFIX_HIGH, ZIP_PREFIX_LEN, ZIP_PREFIX_LOW, ZIP_WIDTH};

// ---------------------------------------------------------------------------
// Zip-code normalization
// ---------------------------------------------------------------------------

/// Render a raw zip cell as text and left-pad it with zeros to [`ZIP_WIDTH`].
///
/// Never fails. Codes already at least `ZIP_WIDTH` long are returned as-is,
/// and a leading sign stays in front of the padding.
pub fn normalize_zipcode(raw: &CellValue) -> String {
    let text = match raw {
        CellValue::Float(v) if v.fract() == 0.0 && v.is_finite() => format!("{v:.0}"),
        other => other.to_string(),
    };
    zero_pad(&text, ZIP_WIDTH)
}

fn zero_pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let zeros = "0".repeat(width - len);
    match text.strip_prefix(['+', '-']) {
        Some(digits) => format!("{}{zeros}{digits}", &text[..1]),
        None => format!("{zeros}{text}"),
    }
}

/// Normalize every record's zip code.  The input slice is left untouched.
pub fn normalize_zipcodes(records: &[RawPriceRecord]) -> Vec<PriceRecord> {
    records
        .iter()
        .map(|r| PriceRecord {
            zipcode: normalize_zipcode(&r.zipcode),
            sale_price: r.sale_price,
            resell_price: r.resell_price,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Zip-prefix band filter
// ---------------------------------------------------------------------------

/// First [`ZIP_PREFIX_LEN`] characters of a zip code (fewer if it is shorter).
pub fn zip_prefix(zipcode: &str) -> &str {
    match zipcode.char_indices().nth(ZIP_PREFIX_LEN) {
        Some((end, _)) => &zipcode[..end],
        None => zipcode,
    }
}

/// Whether a zip code's prefix lies in the inclusive band, compared as text.
pub fn in_zip_band(zipcode: &str) -> bool {
    let prefix = zip_prefix(zipcode);
    ZIP_PREFIX_LOW <= prefix && prefix <= ZIP_PREFIX_HIGH
}

/// Keep records whose zip prefix falls in `"00"..="19"`, sorted by zip code.
///
/// Returns `(original_index, record)` pairs so callers can trace each row
/// back to the source table.  Equal zip codes keep their input order.
pub fn filter_by_zipcode(records: &[PriceRecord]) -> Vec<(usize, PriceRecord)> {
    let mut kept: Vec<(usize, PriceRecord)> = records
        .iter()
        .enumerate()
        .filter(|(_, r)| in_zip_band(&r.zipcode))
        .map(|(i, r)| (i, r.clone()))
        .collect();
    kept.sort_by(|(_, a), (_, b)| a.zipcode.cmp(&b.zipcode));

    log::debug!("Zip band filter kept {} of {} records", kept.len(), records.len());
    kept
}

// ---------------------------------------------------------------------------
// Make filter
// ---------------------------------------------------------------------------

pub const PORSCHE: &str = "Porsche";

/// Keep only Porsche sales (exact, case-sensitive match on `Make`).
pub fn filter_porsche(records: &[DepreciationRecord]) -> Vec<DepreciationRecord> {
    records
        .iter()
        .filter(|r| r.make == PORSCHE)
        .cloned()
        .collect()
}
