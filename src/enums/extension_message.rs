use serde::{Deserialize, Serialize};
use crate::enums::dispatch_status::StatusKind;

/// Messages another surface (options page, popup) sends to the background.
#[derive(Debug, Deserialize, Serialize, Clone, Eq, PartialEq)]
#[serde(tag = "type")]
pub enum ExtensionMessage {
    #[serde(rename = "SET_BROWSER_ICON")]
    SetBrowserIcon {
        status: StatusKind,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    },
    #[serde(other)]
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_set_browser_icon() {
        let msg: ExtensionMessage =
            serde_json::from_str(r#"{"type":"SET_BROWSER_ICON","status":"OK","title":"Done"}"#).unwrap();
        assert_eq!(
            msg,
            ExtensionMessage::SetBrowserIcon { status: StatusKind::Ok, title: Some("Done".to_string()) }
        );
    }

    #[test]
    fn unknown_types_are_tolerated() {
        let msg: ExtensionMessage = serde_json::from_str(r#"{"type":"PING"}"#).unwrap();
        assert_eq!(msg, ExtensionMessage::Unknown);
    }
}
