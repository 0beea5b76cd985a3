use crate::config;

pub const GENERAL_ENQUIRY: &str = "Hi, I am interested in your construction services.";
pub const CUSTOM_QUOTE: &str = "Hi, I need a custom quote for my project.";

/// Digits of the display phone number, country code included.
pub fn dial_digits() -> String {
    config::PHONE_DISPLAY
        .chars()
        .filter(char::is_ascii_digit)
        .collect()
}

pub fn whatsapp_link(message: Option<&str>) -> String {
    match message {
        Some(text) => format!(
            "https://wa.me/{}?text={}",
            dial_digits(),
            urlencoding::encode(text)
        ),
        None => format!("https://wa.me/{}", dial_digits()),
    }
}

pub fn tel_link() -> String {
    format!("tel:+{}", dial_digits())
}

pub fn mailto_link() -> String {
    format!("mailto:{}", config::EMAIL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dial_digits() {
        assert_eq!(dial_digits(), "919087411115");
        assert_eq!(tel_link(), "tel:+919087411115");
    }

    #[test]
    fn test_whatsapp_links() {
        assert_eq!(whatsapp_link(None), "https://wa.me/919087411115");
        assert_eq!(
            whatsapp_link(Some(GENERAL_ENQUIRY)),
            "https://wa.me/919087411115?text=Hi%2C%20I%20am%20interested%20in%20your%20construction%20services."
        );
        assert_eq!(
            whatsapp_link(Some(CUSTOM_QUOTE)),
            "https://wa.me/919087411115?text=Hi%2C%20I%20need%20a%20custom%20quote%20for%20my%20project."
        );
    }

    #[test]
    fn test_mailto() {
        assert_eq!(mailto_link(), "mailto:contact@skrbuilders.com");
    }
}
