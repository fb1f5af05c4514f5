use chrono::{DateTime, Datelike, FixedOffset, Offset, Utc};

const MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

fn group_digits(value: u64) -> String {
    let s = value.to_string().chars().rev().collect::<Vec<char>>();
    let mut out = Vec::new();
    for (i, ch) in s.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push('.');
        }
        out.push(*ch);
    }
    out.into_iter().rev().collect()
}

pub fn format_with_dots(value: i64) -> String {
    let formatted = group_digits(value.unsigned_abs());
    if value < 0 {
        format!("-{}", formatted)
    } else {
        formatted
    }
}

/// Rupiah with a non-breaking space after the symbol, sign in front:
/// `Rp 1.500`, `-Rp 1.500`.
pub fn format_currency(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    format!("{}Rp\u{a0}{}", sign, group_digits(amount.unsigned_abs()))
}

pub fn format_balance(balance: i64) -> String {
    format!("Rp{}", format_with_dots(balance))
}

/// Balance card text; `None` means loading until a refresh has failed.
pub fn balance_label(balance: Option<i64>, refresh_failed: bool) -> String {
    match balance {
        Some(value) => format_balance(value),
        None if refresh_failed => "Tidak diketahui".to_string(),
        None => "Memuat...".to_string(),
    }
}

/// `24 Jun 2021, 11.11` in the given offset.
pub fn format_timestamp(timestamp: i64, offset: FixedOffset) -> String {
    let Some(utc) = DateTime::<Utc>::from_timestamp(timestamp, 0) else {
        return timestamp.to_string();
    };
    let local = utc.with_timezone(&offset);
    format!(
        "{:02} {} {}, {}",
        local.day(),
        MONTHS_SHORT[local.month0() as usize],
        local.year(),
        local.format("%H.%M")
    )
}

/// Browser offset at the given instant, so DST is honoured per row.
#[cfg(target_arch = "wasm32")]
pub fn local_offset(timestamp: i64) -> FixedOffset {
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(timestamp as f64 * 1000.0));
    let east_seconds = -(date.get_timezone_offset() * 60.0) as i32;
    FixedOffset::east_opt(east_seconds).unwrap_or_else(utc_offset)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn local_offset(_timestamp: i64) -> FixedOffset {
    utc_offset()
}

fn utc_offset() -> FixedOffset {
    Utc.fix()
}

pub fn format_local_timestamp(timestamp: i64) -> String {
    format_timestamp(timestamp, local_offset(timestamp))
}
