use crate::Localizer;

pub const DEFAULT_TARGET_LANGUAGE: &str = "english";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageOption {
    /// Value persisted in settings and passed to the model prompt.
    pub value: &'static str,
    pub label_key: &'static str,
    pub emoji: &'static str,
}

pub const LANGUAGE_OPTIONS: &[LanguageOption] = &[
    LanguageOption { value: "english", label_key: "languages.english", emoji: "🇬🇧" },
    LanguageOption { value: "chinese", label_key: "languages.chinese", emoji: "🇨🇳" },
    LanguageOption { value: "chinese-traditional", label_key: "languages.chinese-traditional", emoji: "🇭🇰" },
    LanguageOption { value: "japanese", label_key: "languages.japanese", emoji: "🇯🇵" },
    LanguageOption { value: "korean", label_key: "languages.korean", emoji: "🇰🇷" },
    LanguageOption { value: "russian", label_key: "languages.russian", emoji: "🇷🇺" },
    LanguageOption { value: "spanish", label_key: "languages.spanish", emoji: "🇪🇸" },
    LanguageOption { value: "french", label_key: "languages.french", emoji: "🇫🇷" },
    LanguageOption { value: "italian", label_key: "languages.italian", emoji: "🇮🇹" },
    LanguageOption { value: "portuguese", label_key: "languages.portuguese", emoji: "🇵🇹" },
    LanguageOption { value: "arabic", label_key: "languages.arabic", emoji: "🇸🇦" },
    LanguageOption { value: "german", label_key: "languages.german", emoji: "🇩🇪" },
];

pub fn find_language(value: &str) -> Option<&'static LanguageOption> {
    LANGUAGE_OPTIONS.iter().find(|option| option.value == value)
}

/// Options whose localized label contains `query`, ignoring case.
///
/// A blank query returns every option in table order.
pub fn search_languages(query: &str, localizer: &Localizer) -> Vec<&'static LanguageOption> {
    let needle = query.trim().to_lowercase();
    LANGUAGE_OPTIONS
        .iter()
        .filter(|option| {
            needle.is_empty() || localizer.text(option.label_key).to_lowercase().contains(&needle)
        })
        .collect()
}
