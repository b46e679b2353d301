use serde::Deserialize;

/// Optional per-repository defaults, read from `scorecard.toml` at the
/// target root. CLI flags take precedence over every field here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScorecardConfig {
    pub output: Option<OutputConfig>,
    pub gate: Option<GateConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    pub format: Option<ConfigFormat>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigFormat {
    Json,
    Text,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GateConfig {
    pub min_score: Option<u32>,
}

impl ScorecardConfig {
    pub fn output_format(&self) -> Option<ConfigFormat> {
        self.output.as_ref().and_then(|output| output.format)
    }

    pub fn min_score(&self) -> Option<u32> {
        self.gate.as_ref().and_then(|gate| gate.min_score)
    }
}
