use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Category a finding is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BiasType {
    Political,
    Emotional,
    Framing,
    Assumption,
    #[serde(rename = "loaded language")]
    LoadedLanguage,
}

impl BiasType {
    pub const ALL: [BiasType; 5] = [
        BiasType::Political,
        BiasType::Emotional,
        BiasType::Framing,
        BiasType::Assumption,
        BiasType::LoadedLanguage,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BiasType::Political => "political",
            BiasType::Emotional => "emotional",
            BiasType::Framing => "framing",
            BiasType::Assumption => "assumption",
            BiasType::LoadedLanguage => "loaded language",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

/// One flagged span as emitted by the model.
///
/// The model's object is kept verbatim, so missing or mistyped fields reach
/// the caller unchanged. The accessors return `None` for anything that does
/// not match the expected shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Finding(Value);

impl Finding {
    pub fn new(
        text: &str,
        severity: f64,
        bias_type: BiasType,
        reason: &str,
        suggestion: &str,
    ) -> Self {
        let mut map = Map::new();
        map.insert("text".into(), Value::from(text));
        map.insert("severity".into(), Value::from(severity));
        map.insert("type".into(), Value::from(bias_type.as_str()));
        map.insert("reason".into(), Value::from(reason));
        map.insert("suggestion".into(), Value::from(suggestion));
        Self(Value::Object(map))
    }

    pub fn text(&self) -> Option<&str> {
        self.str_field("text")
    }

    pub fn severity(&self) -> Option<f64> {
        self.0.get("severity").and_then(Value::as_f64)
    }

    pub fn bias_type(&self) -> Option<BiasType> {
        self.str_field("type").and_then(BiasType::parse)
    }

    pub fn reason(&self) -> Option<&str> {
        self.str_field("reason")
    }

    pub fn suggestion(&self) -> Option<&str> {
        self.str_field("suggestion")
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }
}

impl From<Value> for Finding {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
