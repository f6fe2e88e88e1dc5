use std::collections::HashMap;

const EN_US: &[(&str, &str)] = &[
    ("translate.title", "Translate"),
    ("translate.any.language", "Any language"),
    ("translate.input.placeholder", "Enter text to translate"),
    ("translate.output.placeholder", "Translation"),
    ("translate.button.translate", "Translate"),
    ("translate.copy", "Copy"),
    ("translate.copied", "Copied"),
    ("translate.clear", "Clear"),
    ("translate.error.not_configured", "Translation model is not configured"),
    ("translate.error.failed", "Translation failed"),
    ("translate.search.placeholder", "Search languages"),
    ("translate.notice.dismiss", "Dismiss"),
    ("settings.model.title", "Model Settings"),
    ("settings.model.link", "Model settings"),
    ("settings.model.provider", "Provider"),
    ("settings.model.name", "Model"),
    ("settings.model.base_url", "API base URL"),
    ("settings.model.api_key_env", "API key environment variable"),
    ("settings.model.save", "Save"),
    ("settings.model.remove", "Remove model"),
    ("settings.model.back", "Back"),
    ("settings.model.saved", "Settings saved"),
    ("languages.english", "English"),
    ("languages.chinese", "Simplified Chinese"),
    ("languages.chinese-traditional", "Traditional Chinese"),
    ("languages.japanese", "Japanese"),
    ("languages.korean", "Korean"),
    ("languages.russian", "Russian"),
    ("languages.spanish", "Spanish"),
    ("languages.french", "French"),
    ("languages.italian", "Italian"),
    ("languages.portuguese", "Portuguese"),
    ("languages.arabic", "Arabic"),
    ("languages.german", "German"),
];

const ZH_CN: &[(&str, &str)] = &[
    ("translate.title", "翻译"),
    ("translate.any.language", "任意语言"),
    ("translate.input.placeholder", "输入文本进行翻译"),
    ("translate.output.placeholder", "翻译"),
    ("translate.button.translate", "翻译"),
    ("translate.copy", "复制"),
    ("translate.copied", "已复制"),
    ("translate.clear", "清空"),
    ("translate.error.not_configured", "翻译模型未配置"),
    ("translate.error.failed", "翻译失败"),
    ("translate.search.placeholder", "搜索语言"),
    ("translate.notice.dismiss", "关闭"),
    ("settings.model.title", "模型设置"),
    ("settings.model.link", "模型设置"),
    ("settings.model.provider", "服务商"),
    ("settings.model.name", "模型"),
    ("settings.model.base_url", "API 地址"),
    ("settings.model.api_key_env", "API 密钥环境变量"),
    ("settings.model.save", "保存"),
    ("settings.model.remove", "移除模型"),
    ("settings.model.back", "返回"),
    ("settings.model.saved", "设置已保存"),
    ("languages.english", "英文"),
    ("languages.chinese", "简体中文"),
    ("languages.chinese-traditional", "繁体中文"),
    ("languages.japanese", "日语"),
    ("languages.korean", "韩语"),
    ("languages.russian", "俄语"),
    ("languages.spanish", "西班牙语"),
    ("languages.french", "法语"),
    ("languages.italian", "意大利语"),
    ("languages.portuguese", "葡萄牙语"),
    ("languages.arabic", "阿拉伯语"),
    ("languages.german", "德语"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    EnUs,
    ZhCn,
}

impl Locale {
    /// Accepts `en-US`, `en_us`, `zh-CN`, `zh` and similar spellings.
    pub fn from_code(code: &str) -> Option<Self> {
        let normalized = code.trim().replace('_', "-").to_ascii_lowercase();
        match normalized.as_str() {
            "en" | "en-us" => Some(Self::EnUs),
            "zh" | "zh-cn" | "zh-hans" => Some(Self::ZhCn),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::ZhCn => "zh-CN",
        }
    }

    fn table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::EnUs => EN_US,
            Self::ZhCn => ZH_CN,
        }
    }
}

/// Resolves user-facing strings: active locale, then English, then the key itself.
#[derive(Debug, Clone)]
pub struct Localizer {
    strings: HashMap<&'static str, &'static str>,
    fallback: HashMap<&'static str, &'static str>,
}

impl Localizer {
    pub fn new(locale: Locale) -> Self {
        Self {
            strings: locale.table().iter().copied().collect(),
            fallback: EN_US.iter().copied().collect(),
        }
    }

    pub fn text<'a>(&'a self, key: &'a str) -> &'a str {
        self.strings
            .get(key)
            .or_else(|| self.fallback.get(key))
            .copied()
            .unwrap_or(key)
    }
}

impl Default for Localizer {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_codes_round_trip() {
        for locale in [Locale::EnUs, Locale::ZhCn] {
            assert_eq!(Locale::from_code(locale.code()), Some(locale));
        }
        assert_eq!(Locale::from_code("zh_cn"), Some(Locale::ZhCn));
        assert_eq!(Locale::from_code("fr-FR"), None);
    }

    #[test]
    fn unknown_keys_resolve_to_themselves() {
        let localizer = Localizer::new(Locale::ZhCn);
        assert_eq!(localizer.text("translate.title"), "翻译");
        assert_eq!(localizer.text("no.such.key"), "no.such.key");
    }

    #[test]
    fn locale_tables_cover_the_same_keys() {
        let en: Vec<_> = EN_US.iter().map(|(key, _)| *key).collect();
        let zh: Vec<_> = ZH_CN.iter().map(|(key, _)| *key).collect();
        assert_eq!(en, zh);
    }
}
