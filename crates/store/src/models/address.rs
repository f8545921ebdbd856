//! Structured address and contact types shared by projects and caregivers.

use serde::{Deserialize, Serialize};

/// A normalized address (city / zone / woreda), all parts optional.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Address {
    pub city: Option<String>,
    pub zone: Option<String>,
    pub woreda: Option<String>,
}

/// Address as accepted on input.
///
/// Older clients send `subcity` instead of `zone`; normalization maps it
/// to `zone` only when `zone` itself is absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddressInput {
    pub city: Option<String>,
    pub zone: Option<String>,
    pub subcity: Option<String>,
    pub woreda: Option<String>,
}

impl AddressInput {
    /// Normalize into the stored shape, applying the `subcity` alias.
    pub fn normalize(self) -> Address {
        Address {
            city: self.city,
            zone: self.zone.or(self.subcity),
            woreda: self.woreda,
        }
    }
}

/// Contact details for a caregiver.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Contact {
    pub phone: Option<String>,
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subcity_fills_missing_zone() {
        let address = AddressInput {
            subcity: Some("Bole".into()),
            ..Default::default()
        };
        assert_eq!(address.normalize().zone.as_deref(), Some("Bole"));
    }

    #[test]
    fn zone_wins_when_both_supplied() {
        let address = AddressInput {
            zone: Some("Kirkos".into()),
            subcity: Some("Bole".into()),
            ..Default::default()
        };
        assert_eq!(address.normalize().zone.as_deref(), Some("Kirkos"));
    }

    #[test]
    fn empty_input_normalizes_to_empty_address() {
        let address = AddressInput::default().normalize();
        assert!(address.city.is_none() && address.zone.is_none() && address.woreda.is_none());
    }
}
