use log::Level;

pub const BUSINESS_NAME: &str = "SKR Builders And Promoters";
pub const PROPRIETOR: &str = "R. Anand";
pub const PROPRIETOR_TITLE: &str = "Proprietor • SKR";
pub const PHONE_DISPLAY: &str = "+91 90874 11115";
pub const EMAIL: &str = "contact@skrbuilders.com";
pub const ADDRESS: &str = "#292/1, Leo Apartment, Viduthalai Nagar, Chennai - 600 117.";
pub const DEVELOPER_CREDIT: &str = "Trenz Technologies";

// Contact modal pops up on its own once, this long after the page mounts.
pub const AUTO_OPEN_DELAY_MS: u32 = 4_000;
// How long "Copied!" / "Copy failed" stays on the copy button.
pub const COPY_STATUS_RESET_MS: u32 = 2_000;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Intent traces while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
