//! Construction packages offered by the estimator.
//!
//! The catalog only knows about priced packages. A `custom` selection lives in
//! [`PackageChoice`] and never reaches [`lookup`], so there is no way to ask the
//! catalog for a rate it does not have.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Unknown package: '{0}'")]
    UnknownPackage(String),

    #[error("Package '{0}' has no catalog rate, it is quoted manually")]
    NotPriced(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageId {
    Basic,
    Classic,
}

#[derive(Debug, PartialEq)]
pub struct Package {
    pub name: &'static str,
    /// Rupees per square foot.
    pub rate: u32,
    /// Shown top to bottom in the estimator.
    pub features: &'static [&'static str],
}

static BASIC: Package = Package {
    name: "Basic Package",
    rate: 2250,
    features: &[
        "Steel: ARS / iSteel",
        "Cement: Dalmia / Coromandel (43/53 Grade)",
        "Flooring: Tiles up to ₹80/sq.ft",
        "Paint: Tractor Emulsion",
        "Windows: Standard UPVC",
        "Electrical: Anchor / Havells wires",
        "Bathroom: Parryware fittings (₹20k/bath)",
    ],
};

static CLASSIC: Package = Package {
    name: "Classic Package",
    rate: 2500,
    features: &[
        "Steel: TATA / JSW",
        "Cement: Ultratech / Ramco (43/53 Grade)",
        "Flooring: Tiles up to ₹120/sq.ft",
        "Paint: Royal Emulsion",
        "Windows: UPVC with Mesh",
        "Electrical: Finolex wires",
        "Bathroom: Jaquar fittings (₹30k/bath)",
    ],
};

pub fn lookup(id: PackageId) -> &'static Package {
    match id {
        PackageId::Basic => &BASIC,
        PackageId::Classic => &CLASSIC,
    }
}

impl PackageId {
    pub fn as_str(self) -> &'static str {
        match self {
            PackageId::Basic => "basic",
            PackageId::Classic => "classic",
        }
    }
}

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageId {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(PackageId::Basic),
            "classic" => Ok(PackageId::Classic),
            "custom" => Err(CatalogError::NotPriced(s.to_string())),
            _ => Err(CatalogError::UnknownPackage(s.to_string())),
        }
    }
}

/// What the user picked in the estimator: a catalog package or a manual quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PackageChoice {
    #[default]
    Basic,
    Classic,
    Custom,
}

impl PackageChoice {
    /// Display order of the package cards.
    pub const ALL: [PackageChoice; 3] = [
        PackageChoice::Basic,
        PackageChoice::Classic,
        PackageChoice::Custom,
    ];

    pub fn catalog_id(self) -> Option<PackageId> {
        match self {
            PackageChoice::Basic => Some(PackageId::Basic),
            PackageChoice::Classic => Some(PackageId::Classic),
            PackageChoice::Custom => None,
        }
    }

    pub fn package(self) -> Option<&'static Package> {
        self.catalog_id().map(lookup)
    }

    pub fn as_str(self) -> &'static str {
        match self.catalog_id() {
            Some(id) => id.as_str(),
            None => "custom",
        }
    }
}

impl From<PackageId> for PackageChoice {
    fn from(id: PackageId) -> Self {
        match id {
            PackageId::Basic => PackageChoice::Basic,
            PackageId::Classic => PackageChoice::Classic,
        }
    }
}

impl fmt::Display for PackageChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageChoice {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<PackageId>() {
            Ok(id) => Ok(id.into()),
            Err(CatalogError::NotPriced(_)) => Ok(PackageChoice::Custom),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_catalog_rate_is_positive() {
        for id in [PackageId::Basic, PackageId::Classic] {
            let package = lookup(id);
            assert!(package.rate > 0, "{} has a zero rate", package.name);
            assert!(!package.features.is_empty());
        }
    }

    #[test]
    fn test_catalog_rates() {
        assert_eq!(lookup(PackageId::Basic).rate, 2250);
        assert_eq!(lookup(PackageId::Classic).rate, 2500);
        assert_eq!(lookup(PackageId::Classic).name, "Classic Package");
    }

    #[test]
    fn test_feature_order_is_preserved() {
        let features = lookup(PackageId::Basic).features;
        assert_eq!(features.first(), Some(&"Steel: ARS / iSteel"));
        assert_eq!(features.last(), Some(&"Bathroom: Parryware fittings (₹20k/bath)"));
        assert_eq!(features.len(), 7);
    }

    #[test]
    fn test_custom_has_no_package() {
        assert_eq!(PackageChoice::Custom.catalog_id(), None);
        assert!(PackageChoice::Custom.package().is_none());
        assert_eq!(PackageChoice::Classic.package().map(|p| p.rate), Some(2500));
    }

    #[test]
    fn test_parse_package_ids() {
        assert_eq!("basic".parse::<PackageId>(), Ok(PackageId::Basic));
        assert_eq!(" Classic ".parse::<PackageId>(), Ok(PackageId::Classic));
        assert_eq!(
            "custom".parse::<PackageId>(),
            Err(CatalogError::NotPriced("custom".to_string()))
        );
        assert_eq!(
            "premium".parse::<PackageId>(),
            Err(CatalogError::UnknownPackage("premium".to_string()))
        );
    }

    #[test]
    fn test_parse_package_choice() {
        assert_eq!("custom".parse::<PackageChoice>(), Ok(PackageChoice::Custom));
        assert_eq!("basic".parse::<PackageChoice>(), Ok(PackageChoice::Basic));
        assert!("luxury".parse::<PackageChoice>().is_err());
        for choice in PackageChoice::ALL {
            assert_eq!(choice.to_string().parse::<PackageChoice>(), Ok(choice));
        }
    }
}
