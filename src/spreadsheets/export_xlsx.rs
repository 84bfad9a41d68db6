use crate::domain::logic::average_price;
use crate::domain::AppState;
use crate::errors::ServerError;
use crate::responses::xlsx_response;
use crate::responses::ResultResp;
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

const PRICE_HEADERS: [&str; 7] = [
    "Commodity",
    "Region",
    "Price (NGN)",
    "Unit",
    "Change %",
    "Last Updated",
    "Commodity Avg (NGN)",
];

const HISTORY_HEADERS: [&str; 3] = ["Commodity", "Period", "Price (NGN)"];

pub fn export_prices_xlsx(state: &AppState, date: &str) -> ResultResp {
    let buffer = build_prices_workbook(state)
        .map_err(|e| ServerError::XlsxError(format!("Failed to build workbook: {e}")))?;

    xlsx_response(buffer, &format!("agri_prices_{date}.xlsx"))
}

/// Two sheets: one row per commodity × region, and the price histories.
pub fn build_prices_workbook(state: &AppState) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();
    let money = Format::new().set_num_format("#,##0.00");

    let prices = workbook.add_worksheet();
    prices.set_name("Prices")?;
    write_headers(prices, &PRICE_HEADERS, &bold)?;

    let mut r: u32 = 1;
    for c in &state.commodities {
        let avg = average_price(c);
        for p in &c.prices {
            prices.write_string(r, 0, &c.name)?;
            prices.write_string(r, 1, &p.region)?;
            if p.has_data() {
                prices.write_number_with_format(r, 2, p.price, &money)?;
            } else {
                prices.write_string(r, 2, "")?;
            }
            prices.write_string(r, 3, &p.unit)?;
            prices.write_number(r, 4, p.change)?;
            prices.write_string(r, 5, &p.last_updated)?;
            prices.write_number_with_format(r, 6, avg, &money)?;
            r += 1;
        }
    }
    prices.autofit();

    let history = workbook.add_worksheet();
    history.set_name("History")?;
    write_headers(history, &HISTORY_HEADERS, &bold)?;

    let mut r: u32 = 1;
    for c in &state.commodities {
        for point in &c.history {
            history.write_string(r, 0, &c.name)?;
            history.write_string(r, 1, &point.date)?;
            history.write_number_with_format(r, 2, point.price, &money)?;
            r += 1;
        }
    }
    history.autofit();

    workbook.save_to_buffer()
}

fn write_headers(sheet: &mut Worksheet, headers: &[&str], format: &Format) -> Result<(), XlsxError> {
    for (col, header) in headers.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *header, format)?;
    }
    Ok(())
}
