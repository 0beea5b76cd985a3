pub const RUPEES_PER_LAKH: u64 = 100_000;
pub const PAISE_PER_LAKH: u64 = RUPEES_PER_LAKH * 100;

/// Renders a total given in paise as lakhs with two decimals, e.g. `₹22.50 Lakhs`.
pub fn format_lakhs(paise: u64) -> String {
    // hundredths of a lakh, rounded half up
    let unit = PAISE_PER_LAKH / 100;
    let hundredths = paise / unit + u64::from(paise % unit >= unit / 2);
    format!("₹{}.{:02} Lakhs", hundredths / 100, hundredths % 100)
}

pub fn format_rate(rate: u32) -> String {
    format!("₹{}", rate)
}
