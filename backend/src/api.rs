use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageView {
    pub messages: Vec<String>,
    pub prompts: Vec<String>,
    pub yes_growth: f32,
    pub yes_destination: String,
    pub carousel_debounce_ms: u32,
    pub lyric_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateNotice {
    pub message: Option<String>,
}
