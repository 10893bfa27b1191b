//! Wire types for the teslaloggerstream endpoint.
//!
//! Every page action is one POST carrying a form-encoded envelope: the page
//! selector in `url` and the JSON action payload in `data`.

use serde::{Deserialize, Serialize, Serializer};

use crate::types::wallbox::{CarId, WallboxConfig};

/// Path of the stream endpoint all page actions post to.
pub const STREAM_ENDPOINT: &str = "/teslaloggerstream.php";

/// Page selector carried in the envelope's `url` field.
pub const WALLBOX_PAGE: &str = "wallbox";

/// Action marker; the stream endpoint expects the literal string `"1"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionFlag;

impl Serialize for ActionFlag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str("1")
    }
}

/// Form-encoded envelope the stream endpoint dispatches on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StreamEnvelope {
    pub url: String,
    pub data: String,
}

/// Load the saved configuration for one car.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LoadRequest {
    pub load: ActionFlag,
    pub carid: CarId,
}

/// Probe the wallbox with the (possibly unsaved) form values.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TestRequest {
    pub test: ActionFlag,
    #[serde(flatten)]
    pub config: WallboxConfig,
}

/// Persist the form values for one car. The endpoint answers with the same
/// status shape as a test.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SaveRequest {
    pub save: ActionFlag,
    pub carid: CarId,
    #[serde(flatten)]
    pub config: WallboxConfig,
}

/// One request to the wallbox page of the stream endpoint. Each variant
/// carries exactly the fields its action needs; the wire shape stays flat.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum WallboxRequest {
    Load(LoadRequest),
    Test(TestRequest),
    Save(SaveRequest),
}

impl WallboxRequest {
    pub fn load(carid: CarId) -> Self {
        Self::Load(LoadRequest {
            load: ActionFlag,
            carid,
        })
    }

    pub fn test(config: WallboxConfig) -> Self {
        Self::Test(TestRequest {
            test: ActionFlag,
            config,
        })
    }

    pub fn save(carid: CarId, config: WallboxConfig) -> Self {
        Self::Save(SaveRequest {
            save: ActionFlag,
            carid,
            config,
        })
    }

    /// Encode as the form body the stream endpoint expects.
    pub fn form_body(&self) -> Result<String, String> {
        let data = serde_json::to_string(self).map_err(|e| e.to_string())?;
        serde_urlencoded::to_string(StreamEnvelope {
            url: WALLBOX_PAGE.to_string(),
            data,
        })
        .map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::wallbox::ChargerType;
    use serde_json::json;

    #[test]
    fn load_payload_carries_flag_and_carid() {
        let payload = serde_json::to_value(WallboxRequest::load(CarId(3))).unwrap();
        assert_eq!(payload, json!({"load": "1", "carid": 3}));
    }

    #[test]
    fn unset_carid_serializes_as_sentinel_in_load_and_save() {
        let load = serde_json::to_value(WallboxRequest::load(CarId::NONE)).unwrap();
        assert_eq!(load["carid"], json!(-1));

        let save =
            serde_json::to_value(WallboxRequest::save(CarId::NONE, WallboxConfig::default()))
                .unwrap();
        assert_eq!(save["carid"], json!(-1));
    }

    #[test]
    fn test_payload_flattens_form_values() {
        let config = WallboxConfig {
            charger_type: ChargerType::GoE,
            host: "10.0.0.5".to_string(),
            param: "p1".to_string(),
        };

        let payload = serde_json::to_value(WallboxRequest::test(config)).unwrap();
        assert_eq!(
            payload,
            json!({"test": "1", "type": "go-e", "host": "10.0.0.5", "param": "p1"})
        );
    }

    #[test]
    fn form_body_wraps_payload_in_stream_envelope() {
        let body = WallboxRequest::load(CarId(5)).form_body().unwrap();

        let envelope: StreamEnvelope = serde_urlencoded::from_str(&body).unwrap();
        assert_eq!(envelope.url, WALLBOX_PAGE);
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&envelope.data).unwrap(),
            json!({"load": "1", "carid": 5})
        );
    }
}
