use serde::{Deserialize, Serialize};

pub const ENV_GEMINI_API_KEY: &str = "NUTRI_GEMINI_API_KEY";
pub const ENV_API_URL: &str = "NUTRI_API_URL";
pub const ENV_CLOUDINARY_CLOUD_NAME: &str = "NUTRI_CLOUDINARY_CLOUD_NAME";
pub const ENV_CLOUDINARY_UPLOAD_PRESET: &str = "NUTRI_CLOUDINARY_UPLOAD_PRESET";
pub const ENV_SUMMARY_URL: &str = "NUTRI_SUMMARY_URL";

pub const DEFAULT_SUMMARY_URL: &str = "https://verbose-data.onrender.com/api/ai";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Top-level application configuration.
/// Built once at start-up; nothing in it is user-editable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub chat: ChatConfig,
    /// Key for the generative service. `None` leaves the chat unavailable.
    #[serde(skip_serializing)]
    pub gemini_api_key: Option<String>,
    /// Base URL of the account API; empty means same origin
    pub api_url: String,
    #[serde(skip_serializing)]
    pub upload: Option<UploadCredentials>,
    pub summary_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            chat: ChatConfig::default(),
            gemini_api_key: None,
            api_url: String::new(),
            upload: None,
            summary_url: DEFAULT_SUMMARY_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Build from any key lookup. Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let upload = match (get(ENV_CLOUDINARY_CLOUD_NAME), get(ENV_CLOUDINARY_UPLOAD_PRESET)) {
            (Some(cloud_name), Some(upload_preset)) => Some(UploadCredentials {
                cloud_name,
                upload_preset,
            }),
            _ => None,
        };

        Self {
            chat: ChatConfig::default(),
            gemini_api_key: get(ENV_GEMINI_API_KEY),
            api_url: get(ENV_API_URL)
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or_default(),
            upload,
            summary_url: get(ENV_SUMMARY_URL).unwrap_or_else(|| DEFAULT_SUMMARY_URL.to_string()),
        }
    }

    /// Values baked in at compile time via environment variables.
    pub fn from_build_env() -> Self {
        Self::from_lookup(|key| {
            let value = match key {
                ENV_GEMINI_API_KEY => option_env!("NUTRI_GEMINI_API_KEY"),
                ENV_API_URL => option_env!("NUTRI_API_URL"),
                ENV_CLOUDINARY_CLOUD_NAME => option_env!("NUTRI_CLOUDINARY_CLOUD_NAME"),
                ENV_CLOUDINARY_UPLOAD_PRESET => option_env!("NUTRI_CLOUDINARY_UPLOAD_PRESET"),
                ENV_SUMMARY_URL => option_env!("NUTRI_SUMMARY_URL"),
                _ => None,
            };
            value.map(String::from)
        })
    }

    pub fn reset_endpoint(&self) -> String {
        format!("{}/auth/forgot-password", self.api_url)
    }
}

/// Image-host account settings. Both values are required before any upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadCredentials {
    pub cloud_name: String,
    pub upload_preset: String,
}

/// Fixed per-session settings for the generative service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    pub model: String,
    pub system_prompt: String,
    pub generation: GenerationConfig,
    pub safety: Vec<SafetySetting>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            generation: GenerationConfig::default(),
            safety: SafetySetting::default_policy(),
        }
    }
}

impl ChatConfig {
    /// Locally synthesized opening message
    pub fn greeting(&self, user_name: Option<&str>) -> String {
        let name = user_name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or("friend");
        format!(
            "Hey there, {}! 👋 I’m NutriAI’s Nutrition Assistant. Ask about fruits, veggies, \
             calories, or healthy recipes, and I’ll dish out the details! 🍎🥗 \
             Try \"How many calories in an apple?\" or ask for a meal idea!",
            name
        )
    }
}

/// Decoding parameters, serialized in the generative service's wire format
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.9,
            top_k: 1,
            top_p: 1.0,
            max_output_tokens: 2048,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HarmCategory {
    #[serde(rename = "HARM_CATEGORY_HARASSMENT")]
    Harassment,
    #[serde(rename = "HARM_CATEGORY_HATE_SPEECH")]
    HateSpeech,
    #[serde(rename = "HARM_CATEGORY_SEXUALLY_EXPLICIT")]
    SexuallyExplicit,
    #[serde(rename = "HARM_CATEGORY_DANGEROUS_CONTENT")]
    DangerousContent,
}

impl HarmCategory {
    pub fn all() -> &'static [HarmCategory] {
        &[
            HarmCategory::Harassment,
            HarmCategory::HateSpeech,
            HarmCategory::SexuallyExplicit,
            HarmCategory::DangerousContent,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HarmBlockThreshold {
    BlockNone,
    BlockOnlyHigh,
    BlockMediumAndAbove,
    BlockLowAndAbove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetySetting {
    pub category: HarmCategory,
    pub threshold: HarmBlockThreshold,
}

impl SafetySetting {
    /// Every category blocked at medium probability and above
    pub fn default_policy() -> Vec<SafetySetting> {
        HarmCategory::all()
            .iter()
            .map(|&category| SafetySetting {
                category,
                threshold: HarmBlockThreshold::BlockMediumAndAbove,
            })
            .collect()
    }
}

const DEFAULT_SYSTEM_PROMPT: &str = r#"You are NutriAI Assistant, a smart and supportive nutrition expert designed to help users understand the nutritional value of fruits, vegetables, and healthy foods.

Your mission is to **inform, inspire, and guide** users toward a healthier lifestyle with accurate, engaging answers.

👉 Your job is to have **engaging, helpful, and human-like** conversations:
1. **Context-based responses**: Tailor answers to the user’s query (e.g., calories, recipes, health benefits).
2. **Personalized touch**: Use the user’s name if available (e.g., "Hi Jane, here’s what I found!").
3. **Follow-up questions**: Ask things like:
   - "Want to add this to your calorie log?"
   - "Need a recipe with this ingredient?"
   - "Curious about another food?"
4. Use **emojis**, **markdown**, and a friendly tone to keep it warm and interactive.
5. **Celebrate choices**: Encourage healthy habits with positive vibes.

🧠 For nutrition queries, use this structure when relevant:

## 🥗 Nutrition Snapshot: [Food Name]

**🔍 Overview:**
A quick summary of the food.

**🔥 Calories:** [X kcal] (per 100g)
**💪 Key Nutrients:**
- [Nutrient 1]
- [Nutrient 2]
- [Nutrient 3]

**🌟 Health Benefits:**
- [Benefit 1]
- [Benefit 2]
- [Benefit 3]

**🍽️ Tips:**
- [Tip 1]
- [Tip 2]
- [Tip 3]

---

💬 Tone: **Friendly food coach**, encouraging and never judging. Keep it light, educational, and actionable. Stay focused on nutrition, food facts, and healthy habits. 🍏🥕✨"#;
