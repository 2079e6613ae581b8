use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Device information as reported by `get_device_info`.
///
/// The raw document is kept for JSON output; the typed fields cover what
/// the text view shows.
#[derive(Debug, Clone)]
pub struct DeviceInfo {
    pub raw: serde_json::Value,
    pub nickname: Option<String>,
    pub avatar: Option<String>,
    pub device_on: bool,
    pub device_type: Option<String>,
    pub model: Option<String>,
    pub device_id: Option<String>,
    pub fw_ver: Option<String>,
    pub hw_ver: Option<String>,
    pub region: Option<String>,
    pub ip: Option<String>,
    pub mac: Option<String>,
    pub ssid: Option<String>,
    pub rssi: Option<i64>,
    pub signal_level: Option<i64>,
}

fn str_field(data: &serde_json::Value, key: &str) -> Option<String> {
    data.get(key).and_then(|v| v.as_str()).map(|s| s.to_string())
}

/// Nickname and SSID arrive base64-encoded. Anything that doesn't decode to
/// UTF-8 is shown as-is.
pub fn decode_label(value: &str) -> String {
    STANDARD
        .decode(value)
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok())
        .unwrap_or_else(|| value.to_string())
}

impl DeviceInfo {
    pub fn from_json(data: serde_json::Value) -> Self {
        Self {
            nickname: str_field(&data, "nickname"),
            avatar: str_field(&data, "avatar"),
            device_on: data
                .get("device_on")
                .and_then(|v| v.as_bool())
                .unwrap_or(false),
            device_type: str_field(&data, "type"),
            model: str_field(&data, "model"),
            device_id: str_field(&data, "device_id"),
            fw_ver: str_field(&data, "fw_ver"),
            hw_ver: str_field(&data, "hw_ver"),
            region: str_field(&data, "region"),
            ip: str_field(&data, "ip"),
            mac: str_field(&data, "mac"),
            ssid: str_field(&data, "ssid"),
            rssi: data.get("rssi").and_then(|v| v.as_i64()),
            signal_level: data.get("signal_level").and_then(|v| v.as_i64()),
            raw: data,
        }
    }

    pub fn power_state(&self) -> &'static str {
        if self.device_on {
            "On"
        } else {
            "Off"
        }
    }

    pub fn render_text(&self) -> String {
        let s = |v: &Option<String>| v.clone().unwrap_or_default();
        let n = |v: Option<i64>| v.unwrap_or_default();

        let lines = [
            "Device Information:".to_string(),
            String::new(),
            format!(
                "         Nick Name: {}",
                decode_label(self.nickname.as_deref().unwrap_or(""))
            ),
            format!("              Icon: {}", s(&self.avatar)),
            format!("       Power State: {}", self.power_state()),
            format!(
                "              Type: {} {}",
                s(&self.device_type),
                s(&self.model)
            ),
            format!("         Device ID: {}", s(&self.device_id)),
            format!("  Firmware Version: {}", s(&self.fw_ver)),
            format!("  Hardware Version: {}", s(&self.hw_ver)),
            format!("            Region: {}", s(&self.region)),
            String::new(),
            "Network Information:".to_string(),
            String::new(),
            format!("        IP Address: {}", s(&self.ip)),
            format!("       MAC Address: {}", s(&self.mac)),
            format!(
                "         WiFi SSID: {}",
                decode_label(self.ssid.as_deref().unwrap_or(""))
            ),
            format!("        RSSI Level: {}", n(self.rssi)),
            format!("      Signal Level: {}", n(self.signal_level)),
        ];
        lines.join("\n")
    }
}
