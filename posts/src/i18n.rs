use std::str::FromStr;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum I18nKey {
    Uncategorized,
}

pub trait Localizer: Send + Sync {
    fn text(&self, key: I18nKey) -> &str;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Lang {
    #[default]
    En,
    ZhCn,
    ZhTw,
    Ja,
    Ko,
    Es,
    Th,
    Vi,
    Id,
    Tr,
}

#[derive(Debug, Error, Diagnostic)]
#[error("Unknown language code {0:?}")]
#[diagnostic(
    code(posts::unknown_lang),
    help("Supported: en, zh_CN, zh_TW, ja, ko, es, th, vi, id, tr")
)]
pub struct LangError(pub String);

impl FromStr for Lang {
    type Err = LangError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");

        let lang = match normalized.as_str() {
            "en" | "en_us" | "en_gb" => Lang::En,
            "zh_cn" | "zh" => Lang::ZhCn,
            "zh_tw" => Lang::ZhTw,
            "ja" | "ja_jp" => Lang::Ja,
            "ko" | "ko_kr" => Lang::Ko,
            "es" => Lang::Es,
            "th" => Lang::Th,
            "vi" => Lang::Vi,
            "id" => Lang::Id,
            "tr" => Lang::Tr,
            _ => return Err(LangError(s.to_string())),
        };

        Ok(lang)
    }
}

impl Localizer for Lang {
    fn text(&self, key: I18nKey) -> &str {
        match (self, key) {
            (Lang::En, I18nKey::Uncategorized) => "Uncategorized",
            (Lang::ZhCn, I18nKey::Uncategorized) => "未分类",
            (Lang::ZhTw, I18nKey::Uncategorized) => "未分類",
            (Lang::Ja, I18nKey::Uncategorized) => "カテゴリなし",
            (Lang::Ko, I18nKey::Uncategorized) => "분류되지 않음",
            (Lang::Es, I18nKey::Uncategorized) => "Sin categoría",
            (Lang::Th, I18nKey::Uncategorized) => "ไม่ได้จัดหมวดหมู่",
            (Lang::Vi, I18nKey::Uncategorized) => "Chưa phân loại",
            (Lang::Id, I18nKey::Uncategorized) => "Tanpa Kategori",
            (Lang::Tr, I18nKey::Uncategorized) => "Kategorisiz",
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_codes() {
        assert_eq!("en".parse::<Lang>().unwrap(), Lang::En);
        assert_eq!("zh-CN".parse::<Lang>().unwrap(), Lang::ZhCn);
        assert_eq!("zh_tw".parse::<Lang>().unwrap(), Lang::ZhTw);
        assert!("klingon".parse::<Lang>().is_err());
    }

    #[test]
    fn uncategorized_label() {
        assert_eq!(Lang::En.text(I18nKey::Uncategorized), "Uncategorized");
        assert_eq!(Lang::ZhCn.text(I18nKey::Uncategorized), "未分类");
    }
}
