use serde_json::json;

use crate::config::Labels;
use crate::duration::seconds_to_human;
use crate::error::AppError;

/// Energy counters from `get_energy_usage`.
///
/// Power is reported in milliwatts and energy in watt-hours.
#[derive(Debug, Clone)]
pub struct EnergyUsage {
    pub raw: serde_json::Value,
    pub current_power_mw: f64,
    pub today_energy_wh: f64,
    pub month_energy_wh: f64,
    pub today_runtime: i64,
    pub month_runtime: i64,
}

impl EnergyUsage {
    pub fn from_json(data: serde_json::Value) -> Self {
        let num = |key: &str| data.get(key).and_then(|v| v.as_f64()).unwrap_or_default();
        let secs = |key: &str| data.get(key).and_then(|v| v.as_i64()).unwrap_or_default();
        Self {
            current_power_mw: num("current_power"),
            today_energy_wh: num("today_energy"),
            month_energy_wh: num("month_energy"),
            today_runtime: secs("today_runtime"),
            month_runtime: secs("month_runtime"),
            raw: data,
        }
    }

    pub fn current_power_watt(&self) -> f64 {
        self.current_power_mw / 1000.0
    }

    pub fn today_energy_kwh(&self) -> f64 {
        self.today_energy_wh / 1000.0
    }

    pub fn month_energy_kwh(&self) -> f64 {
        self.month_energy_wh / 1000.0
    }

    /// Metric document in the shape Choria's metric watcher consumes.
    pub fn choria_metrics(&self, labels: &Labels) -> serde_json::Value {
        json!({
            "labels": labels,
            "metrics": {
                "current_power_watt": self.current_power_watt(),
                "today_energy_kwh": self.today_energy_kwh(),
                "month_energy_kwh": self.month_energy_kwh(),
                "today_runtime_seconds": self.today_runtime,
                "month_runtime_seconds": self.month_runtime,
            }
        })
    }

    pub fn render_text(&self) -> Result<String, AppError> {
        let lines = [
            "Power Usage".to_string(),
            String::new(),
            format!("    Current Power: {:.3}W", self.current_power_watt()),
            format!("     Today Energy: {:.3}kWh", self.today_energy_kwh()),
            format!("     Month Energy: {:.3}kWh", self.month_energy_kwh()),
            format!(
                "    Today Runtime: {}",
                seconds_to_human(self.today_runtime)?
            ),
            format!(
                "    Month Runtime: {}",
                seconds_to_human(self.month_runtime)?
            ),
        ];
        Ok(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> serde_json::Value {
        json!({
            "today_runtime": 3661,
            "month_runtime": 604_800,
            "today_energy": 1234,
            "month_energy": 45678,
            "local_time": "2024-03-01 12:00:00",
            "current_power": 15250
        })
    }

    #[test]
    fn unit_conversions() {
        let usage = EnergyUsage::from_json(sample());
        assert_eq!(usage.current_power_watt(), 15.25);
        assert_eq!(usage.today_energy_kwh(), 1.234);
        assert_eq!(usage.month_energy_kwh(), 45.678);
    }

    #[test]
    fn text_view_uses_both_runtime_counters() {
        let text = EnergyUsage::from_json(sample()).render_text().unwrap();
        let expected = "Power Usage\n\
                        \n    Current Power: 15.250W\
                        \n     Today Energy: 1.234kWh\
                        \n     Month Energy: 45.678kWh\
                        \n    Today Runtime: 1 hour 1 minute 1 second\
                        \n    Month Runtime: 1 week 0 day 0 hour 0 minute 0 second";
        assert_eq!(text, expected);
    }

    #[test]
    fn choria_document() {
        let mut labels = Labels::new();
        labels.insert("room".into(), "kitchen".into());
        let doc = EnergyUsage::from_json(sample()).choria_metrics(&labels);
        assert_eq!(doc["labels"]["room"], "kitchen");
        assert_eq!(doc["metrics"]["current_power_watt"], 15.25);
        assert_eq!(doc["metrics"]["today_runtime_seconds"], 3661);
        assert_eq!(doc["metrics"]["month_runtime_seconds"], 604_800);
    }

    #[test]
    fn negative_runtime_fails_text_view() {
        let usage = EnergyUsage::from_json(json!({"today_runtime": -1}));
        assert!(matches!(
            usage.render_text(),
            Err(AppError::InvalidInput(_))
        ));
    }
}
