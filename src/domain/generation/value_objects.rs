//! Generation Context - Value Objects
//!
//! 生成参数的值对象：模型标签、语速、温度
//!
//! 模型选择使用带标签的枚举而不是字符串查表，
//! 未知模型在解析阶段即被拒绝，不存在静默落空分支

use serde::{Deserialize, Serialize};

use super::GenerationError;

/// 支持的 TTS 模型（Replicate 上的四个固定模型）
///
/// 每个变体对应一种提供方调用形态，参数子集各不相同：
/// - Kokoro: text + voice + speed + temperature
/// - MinimaxSpeech02Hd: text + voice + speed（无 temperature）
/// - Orpheus3b: text + voice + emotion_level（temperature 映射为情绪强度）
/// - F5Tts: text + voice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TtsModel {
    /// jaaari/kokoro-82m
    Kokoro,
    /// minimax/speech-02-hd
    MinimaxSpeech02Hd,
    /// lucataco/orpheus-3b-0.1-ft
    Orpheus3b,
    /// x-lance/f5-tts
    F5Tts,
}

impl TtsModel {
    /// 所有支持的模型
    pub const ALL: [TtsModel; 4] = [
        TtsModel::Kokoro,
        TtsModel::MinimaxSpeech02Hd,
        TtsModel::Orpheus3b,
        TtsModel::F5Tts,
    ];

    /// Kokoro 在 Replicate 上锁定的版本号
    pub const KOKORO_VERSION: &'static str =
        "f559560eb822dc509045f3921a1921234918b91739db4bf3daab2169b71c7a13";

    /// 模型标识符（Replicate 的 owner/name 形式）
    pub fn identifier(&self) -> &'static str {
        match self {
            TtsModel::Kokoro => "jaaari/kokoro-82m",
            TtsModel::MinimaxSpeech02Hd => "minimax/speech-02-hd",
            TtsModel::Orpheus3b => "lucataco/orpheus-3b-0.1-ft",
            TtsModel::F5Tts => "x-lance/f5-tts",
        }
    }

    /// 解析模型标识符
    ///
    /// 不在白名单内的标识符返回 `UnsupportedModel`
    pub fn parse(identifier: &str) -> Result<Self, GenerationError> {
        match identifier {
            "jaaari/kokoro-82m" => Ok(TtsModel::Kokoro),
            "minimax/speech-02-hd" => Ok(TtsModel::MinimaxSpeech02Hd),
            "lucataco/orpheus-3b-0.1-ft" => Ok(TtsModel::Orpheus3b),
            "x-lance/f5-tts" => Ok(TtsModel::F5Tts),
            _ => Err(GenerationError::UnsupportedModel),
        }
    }

    /// 锁定的版本号（仅 Kokoro 锁定，其余模型使用最新版本）
    pub fn pinned_version(&self) -> Option<&'static str> {
        match self {
            TtsModel::Kokoro => Some(Self::KOKORO_VERSION),
            _ => None,
        }
    }

    /// 该模型可用的音色
    pub fn voices(&self) -> &'static [&'static str] {
        match self {
            TtsModel::Kokoro => &[
                "af_nicole",
                "af_sarah",
                "am_adam",
                "am_michael",
                "bf_emma",
                "bf_isabella",
                "bm_george",
                "bm_lewis",
            ],
            TtsModel::MinimaxSpeech02Hd => &[
                "English_Trustworth_Man",
                "English_CalmWoman",
                "English_Gentle-voiced_man",
                "English_Graceful_Lady",
                "English_ReservedYoungMan",
                "English_PlayfulGirl",
                "English_ManWithDeepVoice",
                "English_MaturePartner",
                "English_FriendlyPerson",
                "English_SereneWoman",
                "English_ConfidentWoman",
                "English_PatientMan",
            ],
            TtsModel::Orpheus3b => &[
                "female_calm",
                "male_warm",
                "female_expressive",
                "male_deep",
                "female_gentle",
                "male_confident",
            ],
            TtsModel::F5Tts => &["default", "female_young", "male_mature", "female_warm"],
        }
    }

    /// 默认音色（音色列表的第一项）
    pub fn default_voice(&self) -> &'static str {
        self.voices()[0]
    }
}

impl Default for TtsModel {
    fn default() -> Self {
        TtsModel::Kokoro
    }
}

impl std::fmt::Display for TtsModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.identifier())
    }
}

impl Serialize for TtsModel {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.identifier())
    }
}

impl<'de> Deserialize<'de> for TtsModel {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        TtsModel::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// 语速（范围 [0.5, 2.0]）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Speed(f64);

impl Speed {
    pub const MIN: f64 = 0.5;
    pub const MAX: f64 = 2.0;

    pub fn new(value: f64) -> Result<Self, GenerationError> {
        if !value.is_finite() || value < Self::MIN || value > Self::MAX {
            return Err(GenerationError::SpeedOutOfRange);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self(1.0)
    }
}

impl TryFrom<f64> for Speed {
    type Error = GenerationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Speed> for f64 {
    fn from(speed: Speed) -> Self {
        speed.0
    }
}

/// 温度（范围 [0.1, 1.0]）
///
/// Orpheus 模型将此值用作 emotion_level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Temperature(f64);

impl Temperature {
    pub const MIN: f64 = 0.1;
    pub const MAX: f64 = 1.0;

    pub fn new(value: f64) -> Result<Self, GenerationError> {
        if !value.is_finite() || value < Self::MIN || value > Self::MAX {
            return Err(GenerationError::TemperatureOutOfRange);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Temperature {
    fn default() -> Self {
        Self(0.7)
    }
}

impl TryFrom<f64> for Temperature {
    type Error = GenerationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Temperature> for f64 {
    fn from(temperature: Temperature) -> Self {
        temperature.0
    }
}

/// 经过校验的生成请求参数
///
/// 不变量:
/// - text 非空且非纯空白（已 trim）
/// - speed / temperature 在各自范围内
/// - model 必为四个白名单模型之一
#[derive(Debug, Clone)]
pub struct GenerationParams {
    text: String,
    voice: String,
    speed: Speed,
    temperature: Temperature,
    model: TtsModel,
}

impl GenerationParams {
    /// 构建并校验生成参数
    ///
    /// 校验顺序与对外错误信息保持固定：
    /// text → model → speed → temperature
    pub fn new(
        text: &str,
        voice: Option<String>,
        speed: Option<f64>,
        temperature: Option<f64>,
        model: Option<&str>,
    ) -> Result<Self, GenerationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(GenerationError::EmptyText);
        }

        let model = match model {
            Some(identifier) => TtsModel::parse(identifier)?,
            None => TtsModel::default(),
        };

        let speed = match speed {
            Some(value) => Speed::new(value)?,
            None => Speed::default(),
        };

        let temperature = match temperature {
            Some(value) => Temperature::new(value)?,
            None => Temperature::default(),
        };

        let voice = voice.unwrap_or_else(|| model.default_voice().to_string());

        Ok(Self {
            text: text.to_string(),
            voice,
            speed,
            temperature,
            model,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn voice(&self) -> &str {
        &self.voice
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn temperature(&self) -> Temperature {
        self.temperature
    }

    pub fn model(&self) -> TtsModel {
        self.model
    }
}
