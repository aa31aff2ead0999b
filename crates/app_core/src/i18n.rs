//! Internationalization support using Fluent

use crate::AppError;
use fluent::{FluentBundle, FluentResource};
use fluent_langneg::{negotiate_languages, NegotiationStrategy};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use unic_langid::LanguageIdentifier;

pub use fluent::FluentArgs;

/// Locale used when a key is missing from the current one
pub const FALLBACK_LOCALE: &str = "en";

/// String tables compiled into the binary
const EMBEDDED: [(&str, &str); 2] = [
    ("zh-CN", include_str!("../locales/zh-CN/main.ftl")),
    ("en", include_str!("../locales/en/main.ftl")),
];

/// Localization manager
pub struct I18n {
    bundles: RwLock<HashMap<String, Arc<FluentBundle<FluentResource>>>>,
    current_locale: RwLock<String>,
    fallback_locale: String,
}

impl I18n {
    /// Create an empty manager
    pub fn new(default_locale: &str) -> Self {
        Self {
            bundles: RwLock::new(HashMap::new()),
            current_locale: RwLock::new(default_locale.to_string()),
            fallback_locale: FALLBACK_LOCALE.to_string(),
        }
    }

    /// Load the embedded tables and pick the best match for `requested`
    pub fn embedded(requested: &str) -> Result<Self, AppError> {
        let i18n = Self::new(FALLBACK_LOCALE);

        for (locale, source) in EMBEDDED {
            i18n.insert_bundle(locale, vec![source.to_string()])?;
        }

        let chosen = i18n.negotiate(requested);
        i18n.set_locale(&chosen);
        tracing::info!("Locale: requested {}, using {}", requested, chosen);

        Ok(i18n)
    }

    /// Load extra translations, one subdirectory of `.ftl` files per locale
    ///
    /// Messages override the embedded ones of the same locale.
    pub fn load_from_dir(&self, dir: &Path) -> Result<(), AppError> {
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();

            if path.is_dir() {
                let Some(locale) = path.file_name().and_then(|n| n.to_str()) else {
                    continue;
                };

                self.load_locale(locale, &path)?;
            }
        }

        Ok(())
    }

    /// Load a specific locale
    fn load_locale(&self, locale: &str, dir: &Path) -> Result<(), AppError> {
        let mut sources: Vec<String> = EMBEDDED
            .iter()
            .filter(|(embedded, _)| *embedded == locale)
            .map(|(_, source)| source.to_string())
            .collect();

        let mut paths: Vec<_> = std::fs::read_dir(dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.extension().is_some_and(|ext| ext == "ftl"))
            .collect();
        paths.sort();

        for path in paths {
            sources.push(std::fs::read_to_string(&path)?);
        }

        self.insert_bundle(locale, sources)
    }

    /// Build a bundle; later sources override earlier ones
    fn insert_bundle(&self, locale: &str, sources: Vec<String>) -> Result<(), AppError> {
        let lang_id: LanguageIdentifier = locale
            .parse()
            .map_err(|e| AppError::Localization(format!("Invalid locale {}: {}", locale, e)))?;

        let mut bundle = FluentBundle::new(vec![lang_id]);
        bundle.set_use_isolating(false);

        for source in sources {
            let resource = FluentResource::try_new(source).map_err(|(_, errors)| {
                AppError::Localization(format!("Fluent parse errors in {}: {:?}", locale, errors))
            })?;
            bundle.add_resource_overriding(resource);
        }

        self.bundles.write().insert(locale.to_string(), Arc::new(bundle));
        tracing::debug!("Loaded locale: {}", locale);

        Ok(())
    }

    /// Best available locale for a requested tag, falling back to English
    pub fn negotiate(&self, requested: &str) -> String {
        let requested: Vec<LanguageIdentifier> = requested.parse().into_iter().collect();
        let available: Vec<LanguageIdentifier> = self
            .available_locales()
            .iter()
            .filter_map(|locale| locale.parse().ok())
            .collect();
        let default: Option<LanguageIdentifier> = self.fallback_locale.parse().ok();

        negotiate_languages(
            &requested,
            &available,
            default.as_ref(),
            NegotiationStrategy::Filtering,
        )
        .first()
        .map(|lang| lang.to_string())
        .unwrap_or_else(|| self.fallback_locale.clone())
    }

    /// Set the current locale
    pub fn set_locale(&self, locale: &str) -> bool {
        if self.bundles.read().contains_key(locale) {
            *self.current_locale.write() = locale.to_string();
            true
        } else {
            false
        }
    }

    /// Get the current locale
    pub fn current_locale(&self) -> String {
        self.current_locale.read().clone()
    }

    /// Get a localized string
    pub fn get(&self, key: &str) -> String {
        self.get_with_args(key, None)
    }

    /// Get a localized string with arguments
    pub fn get_with_args(&self, key: &str, args: Option<&FluentArgs>) -> String {
        let bundles = self.bundles.read();
        let current = self.current_locale.read().clone();

        if let Some(text) = bundles.get(&current).and_then(|b| format(b, key, args)) {
            return text;
        }

        if current != self.fallback_locale {
            if let Some(text) = bundles.get(&self.fallback_locale).and_then(|b| format(b, key, args)) {
                return text;
            }
        }

        tracing::trace!("Missing translation: {}", key);
        key.to_string()
    }

    /// Get available locales
    pub fn available_locales(&self) -> Vec<String> {
        let mut locales: Vec<String> = self.bundles.read().keys().cloned().collect();
        locales.sort();
        locales
    }
}

fn format(bundle: &FluentBundle<FluentResource>, key: &str, args: Option<&FluentArgs>) -> Option<String> {
    let pattern = bundle.get_message(key)?.value()?;
    let mut errors = Vec::new();
    let result = bundle.format_pattern(pattern, args, &mut errors);

    if errors.is_empty() {
        Some(result.to_string())
    } else {
        None
    }
}

/// Convenience macro for getting localized strings
#[macro_export]
macro_rules! t {
    ($i18n:expr, $key:expr) => {
        $i18n.get($key)
    };
    ($i18n:expr, $key:expr, $($arg_name:ident = $arg_value:expr),+ $(,)?) => {{
        let mut args = $crate::i18n::FluentArgs::new();
        $(
            args.set(stringify!($arg_name), $arg_value);
        )+
        $i18n.get_with_args($key, Some(&args))
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CommandRegistry, MENUS};

    #[test]
    fn test_embedded_zh_strings() {
        let i18n = I18n::embedded("zh-CN").unwrap();
        assert_eq!(i18n.current_locale(), "zh-CN");
        assert_eq!(i18n.get("content-loading"), "正在加载照片...");
        assert_eq!(t!(i18n, "statusbar-total", total = 24), "共 24 个文件");
        assert_eq!(t!(i18n, "statusbar-selected", count = 3), ", 选中 3 个");
        assert_eq!(t!(i18n, "inspector-multiple", count = 2), "已选择 2 个文件");
        assert_eq!(t!(i18n, "preview-current", size = 150), "当前: 150px");
    }

    #[test]
    fn test_negotiation() {
        let i18n = I18n::embedded("en-US").unwrap();
        assert_eq!(i18n.current_locale(), "en");
        assert_eq!(i18n.negotiate("zh-CN"), "zh-CN");
        assert_eq!(i18n.negotiate("fr"), "en");
        assert_eq!(i18n.negotiate("not a locale"), "en");
    }

    #[test]
    fn test_missing_key_falls_back() {
        let i18n = I18n::embedded("zh-CN").unwrap();
        assert_eq!(i18n.get("no-such-key"), "no-such-key");
        assert!(!i18n.set_locale("ja"));
        assert_eq!(i18n.current_locale(), "zh-CN");
    }

    #[test]
    fn test_every_label_is_translated() {
        let i18n = I18n::embedded("zh-CN").unwrap();
        let registry = CommandRegistry::with_defaults();

        for menu in MENUS.iter() {
            assert_ne!(i18n.get(menu.title_key), menu.title_key);
            for id in menu.items {
                let spec = registry.spec(id).unwrap();
                assert_ne!(i18n.get(spec.label_key), spec.label_key);
            }
        }
    }

    #[test]
    fn test_dir_overrides_embedded() {
        let dir = tempfile::tempdir().unwrap();
        let zh = dir.path().join("zh-CN");
        std::fs::create_dir(&zh).unwrap();
        std::fs::write(zh.join("custom.ftl"), "content-loading = 请稍候\n").unwrap();

        let i18n = I18n::embedded("zh-CN").unwrap();
        i18n.load_from_dir(dir.path()).unwrap();

        assert_eq!(i18n.get("content-loading"), "请稍候");
        assert_eq!(i18n.get("panel-properties"), "属性");
    }

    #[test]
    fn test_dir_adds_new_locale() {
        let dir = tempfile::tempdir().unwrap();
        let ja = dir.path().join("ja");
        std::fs::create_dir(&ja).unwrap();
        std::fs::write(ja.join("main.ftl"), "panel-properties = プロパティ\n").unwrap();

        let i18n = I18n::embedded("zh-CN").unwrap();
        assert_eq!(i18n.available_locales(), vec!["en", "zh-CN"]);

        i18n.load_from_dir(dir.path()).unwrap();
        assert_eq!(i18n.available_locales(), vec!["en", "ja", "zh-CN"]);
        assert_eq!(i18n.negotiate("ja-JP"), "ja");
    }

    #[test]
    fn test_bad_ftl_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let en = dir.path().join("en");
        std::fs::create_dir(&en).unwrap();
        std::fs::write(en.join("broken.ftl"), "= no id\n").unwrap();

        let i18n = I18n::embedded("en").unwrap();
        let err = i18n.load_from_dir(dir.path()).unwrap_err();
        assert!(matches!(err, AppError::Localization(_)));
    }
}
