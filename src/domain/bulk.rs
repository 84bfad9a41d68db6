// src/domain/bulk.rs

use crate::domain::commodity::PriceUpdate;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum BulkParseError {
    #[error("no price lines submitted")]
    Empty,

    #[error("line {line}: {reason}")]
    InvalidLine { line: usize, reason: String },
}

/// Parse the admin bulk-update textarea.
///
/// Each non-blank line is `region, price, unit` with an optional fourth
/// `change` percentage. The whole input is rejected on the first bad line,
/// so a caller never applies part of a submission.
pub fn parse_bulk_updates(input: &str) -> Result<Vec<PriceUpdate>, BulkParseError> {
    let mut updates = Vec::new();

    for (idx, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let update = parse_line(line).map_err(|reason| BulkParseError::InvalidLine {
            line: idx + 1,
            reason,
        })?;
        updates.push(update);
    }

    if updates.is_empty() {
        return Err(BulkParseError::Empty);
    }
    Ok(updates)
}

fn parse_line(line: &str) -> Result<PriceUpdate, String> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if !(3..=4).contains(&fields.len()) {
        return Err(format!(
            "expected `region, price, unit[, change]`, got {} field(s)",
            fields.len()
        ));
    }

    let region = fields[0];
    if region.is_empty() {
        return Err("missing region".into());
    }

    let price = parse_price(fields[1])?;

    let unit = fields[2];
    if unit.is_empty() {
        return Err("missing unit".into());
    }

    let change = match fields.get(3) {
        Some(raw) if !raw.is_empty() => Some(
            raw.trim_end_matches('%')
                .parse::<f64>()
                .ok()
                .filter(|c| c.is_finite())
                .ok_or_else(|| format!("invalid change `{raw}`"))?,
        ),
        _ => None,
    };

    Ok(PriceUpdate {
        region: region.to_string(),
        price,
        unit: unit.to_string(),
        change,
    })
}

/// Parses a non-negative price; thousands separators are not accepted here
/// because `,` is the field separator.
pub fn parse_price(raw: &str) -> Result<f64, String> {
    let price: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("invalid price `{raw}`"))?;
    check_price(price)
}

/// Rejects negative, NaN and infinite prices.
pub fn check_price(price: f64) -> Result<f64, String> {
    if !price.is_finite() || price < 0.0 {
        return Err(format!("price must be a non-negative number, got `{price}`"));
    }
    Ok(price)
}
