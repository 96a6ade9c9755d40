use crate::llm::{ChatCompletionRequest, ChatMessage};

const NAME_SYSTEM_PROMPT: &str = "あなたは創造的なコーギーの専門家です。ユーザーの指示に従い、ユニークで魅力的なコーギーの名前と、その短い由来を創作してください。必ず「名前：(名前)、由来：(由来)」の形式で回答してください。";

const NAME_USER_PROMPT: &str = "コーギーの名前を一つ提案してください。例：『名前：ビスケ、由来：こんがり焼いたビスケットのように、香ばしくて甘い性格だから。』";

const BEHAVIOR_SYSTEM_PROMPT: &str = "あなたは賢くてユーモアのあるコーギーの達人です。ユーザーが観察したコーギーの行動を翻訳し、そのコーギーが何を考えているかを楽しく想像力豊かに、日本語で簡潔に2～3文で説明してください。";

/// A persona instruction, the user turn, and the sampling settings to send them with.
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    pub system: &'static str,
    pub user: String,
    pub temperature: f32,
    pub max_tokens: u16,
}

impl Prompt {
    pub fn into_request(self) -> ChatCompletionRequest {
        ChatCompletionRequest {
            messages: vec![ChatMessage::system(self.system), ChatMessage::user(self.user)],
            max_tokens: Some(self.max_tokens),
            temperature: Some(self.temperature),
        }
    }
}

pub fn name_generation() -> Prompt {
    Prompt {
        system: NAME_SYSTEM_PROMPT,
        user: NAME_USER_PROMPT.to_string(),
        temperature: 0.8,
        max_tokens: 150,
    }
}

/// `behavior` is interpolated verbatim.
pub fn behavior_interpretation(behavior: &str) -> Prompt {
    Prompt {
        system: BEHAVIOR_SYSTEM_PROMPT,
        user: format!("このコーギーの行動を翻訳してください：「{}」", behavior),
        temperature: 0.7,
        max_tokens: 200,
    }
}
