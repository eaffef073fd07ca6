//! Static message dictionary for the two supported languages.

use crate::core::naming::PatternError;
use crate::core::port::PortStatus;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "ko")]
    Korean,
    #[serde(rename = "en")]
    English,
}

impl Language {
    /// The other language, for a two-state language switch
    pub fn toggled(self) -> Self {
        match self {
            Language::Korean => Language::English,
            Language::English => Language::Korean,
        }
    }

    pub fn messages(self) -> &'static Messages {
        match self {
            Language::Korean => &KOREAN,
            Language::English => &ENGLISH,
        }
    }
}

/// User-facing strings for one language
#[derive(Debug)]
pub struct Messages {
    pub port_label: &'static str,
    pub status_normal: &'static str,
    pub status_unused: &'static str,
    pub status_needs_check: &'static str,
    pub status_unspecified: &'static str,
    pub pattern_required: &'static str,
    pub pattern_not_recognized: &'static str,
    pub supported_formats: &'static str,
    pub format_examples: [(&'static str, &'static str); 3],
}

impl Messages {
    pub fn status_label(&self, status: PortStatus) -> &'static str {
        match status {
            PortStatus::Normal => self.status_normal,
            PortStatus::Unused => self.status_unused,
            PortStatus::NeedsCheck => self.status_needs_check,
            PortStatus::Unspecified => self.status_unspecified,
        }
    }

    /// Message shown when a batch rename is rejected, with the format help appended
    pub fn describe_pattern_error(&self, error: &PatternError) -> String {
        match error {
            PatternError::EmptyPattern => self.pattern_required.to_string(),
            PatternError::PatternNotRecognized { pattern } => {
                let mut text = format!("{}\n\"{}\"\n\n{}", self.pattern_not_recognized, pattern, self.supported_formats);
                for (example, description) in &self.format_examples {
                    text.push_str(&format!("\n{} {}", example, description));
                }
                text
            }
        }
    }
}

static KOREAN: Messages = Messages {
    port_label: "포트",
    status_normal: "정상",
    status_unused: "미사용",
    status_needs_check: "점검필요",
    status_unspecified: "미지정",
    pattern_required: "이름 패턴을 입력해주세요.",
    pattern_not_recognized: "패턴을 인식하지 못했습니다. 입력한 형식을 확인해주세요.",
    supported_formats: "지원 형식:",
    format_examples: [
        ("E1/1", "→ E1/1, E1/2, E1/3... 자동으로 증가"),
        ("E1/1 - 2/24", "→ E1/1부터 E2/24까지 범위 지정"),
        ("E{row}/{col}", "→ 행/열 번호 자동 치환 (1행1열 → E1/1)"),
    ],
};

static ENGLISH: Messages = Messages {
    port_label: "Port",
    status_normal: "Normal",
    status_unused: "Unused",
    status_needs_check: "Check Required",
    status_unspecified: "Unspecified",
    pattern_required: "Please enter name pattern.",
    pattern_not_recognized: "Pattern not recognized. Please check the format you entered.",
    supported_formats: "Supported Formats:",
    format_examples: [
        ("E1/1", "→ E1/1, E1/2, E1/3... auto increment"),
        ("E1/1 - 2/24", "→ Range from E1/1 to E2/24"),
        ("E{row}/{col}", "→ Auto replace row/col numbers (row1col1 → E1/1)"),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes() {
        assert_eq!(serde_json::to_string(&Language::Korean).unwrap(), "\"ko\"");
        assert_eq!(serde_json::from_str::<Language>("\"en\"").unwrap(), Language::English);
        assert_eq!(Language::Korean.toggled(), Language::English);
    }

    #[test]
    fn test_unrecognized_message_echoes_pattern() {
        let error = PatternError::PatternNotRecognized {
            pattern: "xyz".to_string(),
        };
        let text = Language::English.messages().describe_pattern_error(&error);
        assert!(text.starts_with("Pattern not recognized."));
        assert!(text.contains("\"xyz\""));
        assert!(text.contains("E1/1 - 2/24"));
    }

    #[test]
    fn test_korean_messages_match_dictionary() {
        let messages = Language::Korean.messages();
        assert_eq!(
            messages.pattern_not_recognized,
            "패턴을 인식하지 못했습니다. 입력한 형식을 확인해주세요."
        );
        assert_eq!(messages.format_examples[0].1, "→ E1/1, E1/2, E1/3... 자동으로 증가");
        assert_eq!(messages.format_examples[1].1, "→ E1/1부터 E2/24까지 범위 지정");
    }

    #[test]
    fn test_status_labels() {
        let messages = Language::Korean.messages();
        assert_eq!(messages.status_label(PortStatus::Unused), "미사용");
        assert_eq!(Language::English.messages().status_label(PortStatus::NeedsCheck), "Check Required");
    }
}
