use serde::{Deserialize, Serialize};

/// A 0x-prefixed hex quantity, as used by Ethereum-style JSON-RPC for block
/// numbers, balances, gas prices and chain ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity(pub u128);

impl Quantity {
    /// The value truncated to 64 bits; callers use this for quantities that
    /// are u64-sized by protocol (block numbers, chain ids).
    pub fn as_u64(self) -> u64 {
        self.0 as u64
    }
}

impl From<u64> for Quantity {
    fn from(value: u64) -> Self {
        Self(u128::from(value))
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{:x}", self.0)
    }
}

impl Serialize for Quantity {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let digits = raw
            .strip_prefix("0x")
            .ok_or_else(|| serde::de::Error::custom(format!("quantity '{raw}' lacks 0x prefix")))?;

        u128::from_str_radix(digits, 16)
            .map(Quantity)
            .map_err(|error| serde::de::Error::custom(format!("invalid quantity '{raw}': {error}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_hex_quantities() {
        let quantity: Quantity = serde_json::from_str(r#""0x3152f11""#).expect("decodes");
        assert_eq!(quantity, Quantity(51_723_025));
        assert_eq!(quantity.as_u64(), 51_723_025);
        assert_eq!(
            serde_json::to_string(&quantity).expect("encodes"),
            r#""0x3152f11""#
        );
    }

    #[test]
    fn rejects_unprefixed_and_malformed_values() {
        assert!(serde_json::from_str::<Quantity>(r#""123""#).is_err());
        assert!(serde_json::from_str::<Quantity>(r#""0xzz""#).is_err());
    }
}
