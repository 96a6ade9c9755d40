use crate::companion::CorgiName;
use serde::{Deserialize, Serialize};

pub const GENERATE_NAME_ERROR: &str = "AIによる名前の生成中にエラーが発生しました。";
pub const MISSING_BEHAVIOR_ERROR: &str = "解釈する行動が指定されていません。";
pub const INTERPRET_BEHAVIOR_ERROR: &str = "AIによる行動の解釈中にエラーが発生しました。";

#[derive(Debug, Deserialize)]
pub struct InterpretBehaviorRequest {
    #[serde(default)]
    pub behavior: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateNameResponse {
    pub name: String,
    pub story: String,
}

impl From<CorgiName> for GenerateNameResponse {
    fn from(result: CorgiName) -> Self {
        Self {
            name: result.name,
            story: result.story,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct InterpretBehaviorResponse {
    pub interpretation: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
