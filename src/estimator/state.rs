use crate::estimator::catalog::PackageChoice;

pub const AREA_MIN: u32 = 500;
pub const AREA_MAX: u32 = 5000;
pub const AREA_STEP: u32 = 50;
pub const DEFAULT_AREA: u64 = 1000;

/// Areas are held in hundredths of a square foot so a typed `1500.75` keeps
/// its fraction. Hundredths of a sq.ft times rupees per sq.ft is paise.
const CENTI_PER_SQFT: u64 = 100;
const PAISE_PER_RUPEE: u64 = 100;

/// Where an area change came from. The slider is bounded, the number box is not.
#[derive(Debug, Clone, PartialEq)]
pub enum AreaInput {
    Slider(u32),
    Typed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Estimate {
    /// Total in paise.
    Priced(u64),
    QuoteRequired,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EstimatorState {
    area_centi: u64,
    selected: PackageChoice,
}

impl Default for EstimatorState {
    fn default() -> Self {
        Self {
            area_centi: DEFAULT_AREA * CENTI_PER_SQFT,
            selected: PackageChoice::default(),
        }
    }
}

impl EstimatorState {
    /// Area in hundredths of a square foot.
    pub fn area_centi(&self) -> u64 {
        self.area_centi
    }

    /// Area as shown in the number box: `1000`, `1500.75`, `1500.5`.
    pub fn area_label(&self) -> String {
        let whole = self.area_centi / CENTI_PER_SQFT;
        match self.area_centi % CENTI_PER_SQFT {
            0 => whole.to_string(),
            frac if frac % 10 == 0 => format!("{}.{}", whole, frac / 10),
            frac => format!("{}.{:02}", whole, frac),
        }
    }

    pub fn selected(&self) -> PackageChoice {
        self.selected
    }

    /// Returns true when the stored area changed.
    pub fn set_area(&mut self, input: AreaInput) -> bool {
        let next = match input {
            AreaInput::Slider(value) => Some(u64::from(snap_to_slider(value)) * CENTI_PER_SQFT),
            AreaInput::Typed(text) => parse_typed_area(&text),
        };
        match next {
            Some(area_centi) if area_centi != self.area_centi => {
                self.area_centi = area_centi;
                true
            }
            _ => false,
        }
    }

    pub fn set_package(&mut self, choice: PackageChoice) -> bool {
        if self.selected == choice {
            return false;
        }
        self.selected = choice;
        true
    }

    /// Exact total in paise, zero for a custom quote.
    pub fn total_paise(&self) -> u64 {
        match self.selected.package() {
            Some(package) => self.area_centi.saturating_mul(u64::from(package.rate)),
            None => 0,
        }
    }

    /// Total in whole rupees. Exact whenever the area is a whole number of sq.ft.
    pub fn total_cost(&self) -> u64 {
        self.total_paise() / PAISE_PER_RUPEE
    }

    pub fn estimate(&self) -> Estimate {
        match self.selected {
            PackageChoice::Custom => Estimate::QuoteRequired,
            _ => Estimate::Priced(self.total_paise()),
        }
    }

    /// Position for the range control. A typed area can sit outside the
    /// slider bounds, the thumb then rests at the nearest end.
    pub fn slider_value(&self) -> u32 {
        let whole = (self.area_centi + CENTI_PER_SQFT / 2) / CENTI_PER_SQFT;
        whole.clamp(u64::from(AREA_MIN), u64::from(AREA_MAX)) as u32
    }
}

fn snap_to_slider(value: u32) -> u32 {
    let clamped = value.clamp(AREA_MIN, AREA_MAX);
    let snapped = (clamped - AREA_MIN + AREA_STEP / 2) / AREA_STEP * AREA_STEP + AREA_MIN;
    snapped.min(AREA_MAX)
}

// A cleared number box reads as zero. Anything negative or non-numeric is
// dropped and the previous area stays. Fractions are kept to 0.01 sq.ft.
fn parse_typed_area(text: &str) -> Option<u64> {
    let text = text.trim();
    if text.is_empty() {
        return Some(0);
    }
    let value = text.parse::<f64>().ok()?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    // float to int casts saturate
    Some((value * CENTI_PER_SQFT as f64).round() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::catalog::{lookup, PackageId};
    use crate::estimator::format::format_lakhs;

    #[test]
    fn test_defaults() {
        let state = EstimatorState::default();
        assert_eq!(state.area_label(), "1000");
        assert_eq!(state.area_centi(), 100_000);
        assert_eq!(state.selected(), PackageChoice::Basic);
        assert_eq!(state.total_cost(), 2_250_000);
    }

    #[test]
    fn test_total_matches_rate_across_slider_range() {
        let mut state = EstimatorState::default();
        for choice in [PackageChoice::Basic, PackageChoice::Classic] {
            state.set_package(choice);
            let rate = u64::from(choice.package().map(|p| p.rate).unwrap_or_default());
            for area in (AREA_MIN..=AREA_MAX).step_by(AREA_STEP as usize) {
                state.set_area(AreaInput::Slider(area));
                assert_eq!(state.total_cost(), u64::from(area) * rate);
                assert_eq!(state.total_paise(), u64::from(area) * rate * 100);
            }
        }
    }

    #[test]
    fn test_custom_total_is_zero_for_any_area() {
        let mut state = EstimatorState::default();
        state.set_package(PackageChoice::Custom);
        for area in ["0", "500", "3000", "999999", "1500.75"] {
            state.set_area(AreaInput::Typed(area.to_string()));
            assert_eq!(state.total_cost(), 0);
            assert_eq!(state.estimate(), Estimate::QuoteRequired);
        }
    }

    #[test]
    fn test_switching_package_updates_total_immediately() {
        let mut state = EstimatorState::default();
        state.set_area(AreaInput::Slider(2000));
        assert_eq!(state.total_cost(), 4_500_000);

        assert!(state.set_package(PackageChoice::Classic));
        assert_eq!(state.total_cost(), 5_000_000);
        assert_eq!(state.estimate(), Estimate::Priced(500_000_000));

        state.set_package(PackageChoice::Custom);
        assert_eq!(state.total_cost(), 0);

        state.set_package(PackageChoice::Basic);
        assert_eq!(state.total_cost(), 2000 * u64::from(lookup(PackageId::Basic).rate));
    }

    #[test]
    fn test_reselecting_same_package_is_not_a_change() {
        let mut state = EstimatorState::default();
        assert!(!state.set_package(PackageChoice::Basic));
    }

    #[test]
    fn test_slider_clamps_and_snaps() {
        let mut state = EstimatorState::default();
        state.set_area(AreaInput::Slider(100));
        assert_eq!(state.area_label(), "500");
        state.set_area(AreaInput::Slider(9000));
        assert_eq!(state.area_label(), "5000");
        state.set_area(AreaInput::Slider(1024));
        assert_eq!(state.area_label(), "1000");
        state.set_area(AreaInput::Slider(1025));
        assert_eq!(state.area_label(), "1050");
        state.set_area(AreaInput::Slider(4990));
        assert_eq!(state.area_label(), "5000");
    }

    #[test]
    fn test_typed_entry_is_not_clamped() {
        let mut state = EstimatorState::default();
        assert!(state.set_area(AreaInput::Typed("120".to_string())));
        assert_eq!(state.area_label(), "120");
        assert_eq!(state.total_cost(), 120 * 2250);

        state.set_area(AreaInput::Typed("12345".to_string()));
        assert_eq!(state.area_label(), "12345");
        assert_eq!(state.slider_value(), AREA_MAX);
    }

    #[test]
    fn test_typed_fraction_reaches_the_total() {
        let mut state = EstimatorState::default();
        assert!(state.set_area(AreaInput::Typed("1500.75".to_string())));
        assert_eq!(state.area_label(), "1500.75");
        assert_eq!(state.area_centi(), 150_075);

        // 1500.75 * 2250 = 3,376,687.50
        assert_eq!(state.total_paise(), 337_668_750);
        assert_eq!(state.total_cost(), 3_376_687);
        assert_eq!(state.estimate(), Estimate::Priced(337_668_750));
        assert_eq!(format_lakhs(state.total_paise()), "₹33.77 Lakhs");
        assert_eq!(state.slider_value(), 1501);

        state.set_area(AreaInput::Typed("1500.5".to_string()));
        assert_eq!(state.area_label(), "1500.5");
        assert_eq!(state.total_paise(), 337_612_500);
    }

    #[test]
    fn test_typed_entry_edge_cases() {
        let mut state = EstimatorState::default();
        state.set_area(AreaInput::Typed("".to_string()));
        assert_eq!(state.area_label(), "0");
        assert_eq!(state.total_cost(), 0);
        assert_eq!(state.slider_value(), AREA_MIN);

        state.set_area(AreaInput::Typed("800".to_string()));
        assert!(!state.set_area(AreaInput::Typed("-40".to_string())));
        assert!(!state.set_area(AreaInput::Typed("abc".to_string())));
        assert!(!state.set_area(AreaInput::Typed("800.00".to_string())));
        assert_eq!(state.area_label(), "800");
    }

    #[test]
    fn test_huge_typed_area_saturates() {
        let mut state = EstimatorState::default();
        state.set_area(AreaInput::Typed(u64::MAX.to_string()));
        assert_eq!(state.total_paise(), u64::MAX);
        assert_eq!(state.total_cost(), u64::MAX / 100);
    }
}
