use serde::{Deserialize, Serialize};

/// Car identifier scoping the wallbox configuration (`carid` on the wire).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct CarId(pub i32);

impl CarId {
    /// Sentinel the page sends when it was opened without a car context.
    pub const NONE: CarId = CarId(-1);

    pub fn is_none(self) -> bool {
        self == Self::NONE
    }
}

impl Default for CarId {
    fn default() -> Self {
        Self::NONE
    }
}

impl std::fmt::Display for CarId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Wallbox integration type; the tokens are what the stream endpoint
/// dispatches its protocol handlers on.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub enum ChargerType {
    #[serde(rename = "openwb")]
    OpenWb,
    #[serde(rename = "go-e")]
    GoE,
    #[serde(rename = "tesla-gen3")]
    TeslaGen3,
    /// No type configured; serialized as the empty string.
    #[default]
    #[serde(rename = "")]
    Unset,
}

impl ChargerType {
    pub fn as_token(self) -> &'static str {
        match self {
            Self::OpenWb => "openwb",
            Self::GoE => "go-e",
            Self::TeslaGen3 => "tesla-gen3",
            Self::Unset => "",
        }
    }

    /// Tokens other than the known ones fold to `Unset` so that a stale or
    /// hand-edited saved configuration still loads into the form.
    pub fn from_token(token: &str) -> Self {
        match token {
            "openwb" => Self::OpenWb,
            "go-e" => Self::GoE,
            "tesla-gen3" => Self::TeslaGen3,
            _ => Self::Unset,
        }
    }
}

impl<'de> Deserialize<'de> for ChargerType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let token = String::deserialize(deserializer)?;
        Ok(Self::from_token(&token))
    }
}

/// Wallbox configuration for one car, as edited in the form. Field names
/// match the load response and the test/save payloads.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WallboxConfig {
    #[serde(rename = "type")]
    pub charger_type: ChargerType,
    pub host: String,
    pub param: String,
}

/// Status reported by a test or save call. Not persisted; each response
/// replaces the previous one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WallboxStatus {
    #[serde(rename = "Version")]
    pub version: String,
    #[serde(rename = "Utility_kWh")]
    pub utility_kwh: f64,
    #[serde(rename = "Vehicle_kWh")]
    pub vehicle_kwh: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn charger_type_tokens_round_trip() {
        let cases = [
            (ChargerType::OpenWb, r#""openwb""#),
            (ChargerType::GoE, r#""go-e""#),
            (ChargerType::TeslaGen3, r#""tesla-gen3""#),
            (ChargerType::Unset, r#""""#),
        ];

        for (charger_type, token) in cases {
            assert_eq!(serde_json::to_string(&charger_type).unwrap(), token);
            assert_eq!(
                serde_json::from_str::<ChargerType>(token).unwrap(),
                charger_type
            );
        }
    }

    #[test]
    fn unknown_charger_token_folds_to_unset() {
        let parsed: ChargerType = serde_json::from_str(r#""keba""#).unwrap();
        assert_eq!(parsed, ChargerType::Unset);
    }

    #[test]
    fn load_response_with_missing_fields_decodes_to_defaults() {
        let config: WallboxConfig = serde_json::from_str(r#"{"host":"10.0.0.5"}"#).unwrap();
        assert_eq!(config.charger_type, ChargerType::Unset);
        assert_eq!(config.host, "10.0.0.5");
        assert_eq!(config.param, "");
    }

    #[test]
    fn status_decodes_from_stream_field_names() {
        let status: WallboxStatus = serde_json::from_str(
            r#"{"Version":"1.2.3","Utility_kWh":10.5,"Vehicle_kWh":9.25}"#,
        )
        .unwrap();
        assert_eq!(status.version, "1.2.3");
        assert_eq!(status.utility_kwh, 10.5);
        assert_eq!(status.vehicle_kwh, 9.25);
    }
}
