//! Provider - AI vendor a chatbot runs on
//!
//! Stored and transferred as its integer code.

use serde::{Deserialize, Serialize};

/// AI Provider
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "i32", into = "i32")]
pub enum Provider {
    #[default]
    Google,
    OpenAI,
}

impl Provider {
    /// Every known provider, in code order
    pub const ALL: [Provider; 2] = [Provider::Google, Provider::OpenAI];

    /// Integer code used by the document store
    pub fn code(self) -> i32 {
        match self {
            Provider::Google => 1,
            Provider::OpenAI => 2,
        }
    }

    /// Human readable name
    pub fn label(self) -> &'static str {
        match self {
            Provider::Google => "Google",
            Provider::OpenAI => "OpenAI",
        }
    }
}

impl TryFrom<i32> for Provider {
    type Error = String;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Provider::Google),
            2 => Ok(Provider::OpenAI),
            _ => Err(format!("Unknown provider code: {}", code)),
        }
    }
}

impl From<Provider> for i32 {
    fn from(provider: Provider) -> Self {
        provider.code()
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Provider::Google => write!(f, "google"),
            Provider::OpenAI => write!(f, "openai"),
        }
    }
}

impl std::str::FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(code) = s.parse::<i32>() {
            return Provider::try_from(code);
        }
        match s.to_lowercase().as_str() {
            "google" => Ok(Provider::Google),
            "openai" => Ok(Provider::OpenAI),
            _ => Err(format!("Unknown provider: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(Provider::Google.code(), 1);
        assert_eq!(Provider::OpenAI.code(), 2);
        assert_eq!(Provider::default(), Provider::Google);
    }

    #[test]
    fn test_unknown_code_rejected() {
        assert!(Provider::try_from(0).is_err());
        assert!(Provider::try_from(3).is_err());
        assert!(serde_json::from_str::<Provider>("7").is_err());
    }

    #[test]
    fn test_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&Provider::OpenAI).unwrap(), "2");
        assert_eq!(
            serde_json::from_str::<Provider>("1").unwrap(),
            Provider::Google
        );
    }

    #[test]
    fn test_parse_code_or_name() {
        assert_eq!("2".parse::<Provider>().unwrap(), Provider::OpenAI);
        assert_eq!("Google".parse::<Provider>().unwrap(), Provider::Google);
        assert!("anthropic".parse::<Provider>().is_err());
    }
}
