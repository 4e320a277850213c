// SPDX-License-Identifier: MIT

//! Default configuration values.
//!
//! The English and Turkish tables mirror each other entry for entry; only
//! display text differs. Validation and formatting never look at the
//! language.

use super::schema::{
    FormatTemplate, Language, PromptMessages, ScConfig, ScopeEntry, TypeEntry, ValidationRules,
};

/// Build the full default configuration for a language.
pub fn default_config(language: Language) -> ScConfig {
    ScConfig {
        language,
        types: default_types(language),
        scopes: Some(default_scopes(language)),
        validation: ValidationRules::default(),
        prompt_messages: default_prompts(language),
        format: FormatTemplate::default(),
    }
}

/// The default commit type table.
pub fn default_types(language: Language) -> Vec<TypeEntry> {
    match language {
        Language::En => vec![
            TypeEntry::new("feat", "feat: A new feature")
                .with_description("Introduces a new feature to the codebase")
                .with_emoji("✨"),
            TypeEntry::new("fix", "fix: A bug fix")
                .with_description("Patches a bug in your codebase")
                .with_emoji("🐛"),
            TypeEntry::new("docs", "docs: Documentation only changes")
                .with_description("Changes to documentation only")
                .with_emoji("📚"),
            TypeEntry::new(
                "style",
                "style: Changes that do not affect the meaning of the code",
            )
            .with_description("Code style changes (white-space, formatting, missing semi-colons, etc)")
            .with_emoji("💎"),
            TypeEntry::new(
                "refactor",
                "refactor: A code change that neither fixes a bug nor adds a feature",
            )
            .with_description("Code refactoring without changing functionality")
            .with_emoji("📦"),
            TypeEntry::new("perf", "perf: A code change that improves performance")
                .with_description("Performance improvements")
                .with_emoji("🚀"),
            TypeEntry::new(
                "test",
                "test: Adding missing tests or correcting existing tests",
            )
            .with_description("Adding or updating tests")
            .with_emoji("🚨"),
            TypeEntry::new(
                "build",
                "build: Changes that affect the build system or external dependencies",
            )
            .with_description("Build system or dependency changes")
            .with_emoji("🛠️"),
            TypeEntry::new("ci", "ci: Changes to our CI configuration files and scripts")
                .with_description("Continuous integration changes")
                .with_emoji("⚙️"),
            TypeEntry::new(
                "chore",
                "chore: Other changes that don't modify src or test files",
            )
            .with_description("Other changes that don't modify source or test files")
            .with_emoji("♻️"),
            TypeEntry::new("revert", "revert: Reverts a previous commit")
                .with_description("Reverts a previous commit")
                .with_emoji("🗑️"),
        ],
        Language::Tr => vec![
            TypeEntry::new("feat", "feat: Yeni bir özellik")
                .with_description("Kod tabanına yeni bir özellik ekler")
                .with_emoji("✨"),
            TypeEntry::new("fix", "fix: Hata düzeltme")
                .with_description("Kod tabanındaki bir hatayı düzeltir")
                .with_emoji("🐛"),
            TypeEntry::new("docs", "docs: Sadece dokümantasyon değişiklikleri")
                .with_description("Sadece dokümantasyon değişiklikleri")
                .with_emoji("📚"),
            TypeEntry::new("style", "style: Kodun anlamını etkilemeyen değişiklikler")
                .with_description(
                    "Kod stili değişiklikleri (boşluk, formatlama, noktalı virgül, vb.)",
                )
                .with_emoji("💎"),
            TypeEntry::new(
                "refactor",
                "refactor: Hata düzeltmeyen ve özellik eklemeyen kod değişikliği",
            )
            .with_description("İşlevselliği değiştirmeyen kod yeniden yapılandırması")
            .with_emoji("📦"),
            TypeEntry::new("perf", "perf: Performansı iyileştiren kod değişikliği")
                .with_description("Performans iyileştirmeleri")
                .with_emoji("🚀"),
            TypeEntry::new(
                "test",
                "test: Eksik testleri ekleme veya mevcut testleri düzeltme",
            )
            .with_description("Test ekleme veya güncelleme")
            .with_emoji("🚨"),
            TypeEntry::new(
                "build",
                "build: Derleme sistemini veya dış bağımlılıkları etkileyen değişiklikler",
            )
            .with_description("Derleme sistemi veya bağımlılık değişiklikleri")
            .with_emoji("🛠️"),
            TypeEntry::new(
                "ci",
                "ci: CI yapılandırma dosyaları ve scriptlerinde değişiklikler",
            )
            .with_description("Sürekli entegrasyon değişiklikleri")
            .with_emoji("⚙️"),
            TypeEntry::new(
                "chore",
                "chore: Kaynak veya test dosyalarını değiştirmeyen diğer değişiklikler",
            )
            .with_description("Kaynak veya test dosyalarını değiştirmeyen diğer değişiklikler")
            .with_emoji("♻️"),
            TypeEntry::new("revert", "revert: Önceki bir commit'i geri alır")
                .with_description("Önceki bir commit'i geri alır")
                .with_emoji("🗑️"),
        ],
    }
}

/// The default predefined scope table.
pub fn default_scopes(language: Language) -> Vec<ScopeEntry> {
    match language {
        Language::En => vec![
            ScopeEntry::new("api", "api: API related changes"),
            ScopeEntry::new("ui", "ui: User interface changes"),
            ScopeEntry::new("db", "db: Database related changes"),
            ScopeEntry::new("config", "config: Configuration changes"),
            ScopeEntry::new("deps", "deps: Dependency updates"),
        ],
        Language::Tr => vec![
            ScopeEntry::new("api", "api: API ile ilgili değişiklikler"),
            ScopeEntry::new("ui", "ui: Kullanıcı arayüzü değişiklikleri"),
            ScopeEntry::new("db", "db: Veritabanı ile ilgili değişiklikler"),
            ScopeEntry::new("config", "config: Yapılandırma değişiklikleri"),
            ScopeEntry::new("deps", "deps: Bağımlılık güncellemeleri"),
        ],
    }
}

/// The default interactive prompt text.
pub fn default_prompts(language: Language) -> PromptMessages {
    match language {
        Language::En => PromptMessages {
            commit_type: "Select the type of change that you're committing:".to_string(),
            scope: "Denote the SCOPE of this change (optional):".to_string(),
            custom_scope: "Enter a custom scope:".to_string(),
            subject: "Write a SHORT, IMPERATIVE tense description of the change:".to_string(),
            body: "Provide a LONGER description of the change (optional):".to_string(),
            breaking: "Are there any breaking changes?".to_string(),
            breaking_body: "Describe the breaking changes:".to_string(),
            issues: "Add issue references (e.g. \"fix #123\", \"re #456\"):".to_string(),
        },
        Language::Tr => PromptMessages {
            commit_type: "Yaptığınız değişikliğin türünü seçin:".to_string(),
            scope: "Bu değişikliğin KAPSAMINI belirtin (opsiyonel):".to_string(),
            custom_scope: "Özel bir kapsam girin:".to_string(),
            subject: "Değişikliğin KISA, EMİR KİPİNDE bir açıklamasını yazın:".to_string(),
            body: "Değişikliğin DAHA UZUN bir açıklamasını yazın (opsiyonel):".to_string(),
            breaking: "Herhangi bir breaking change var mı?".to_string(),
            breaking_body: "Breaking change'leri açıklayın:".to_string(),
            issues: "Issue referansları ekleyin (örn. \"fix #123\", \"re #456\"):".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_en() {
        let config = default_config(Language::En);
        assert_eq!(config.language, Language::En);
        assert_eq!(config.types.len(), 11);
        assert_eq!(config.scopes.as_ref().unwrap().len(), 5);
    }

    #[test]
    fn test_language_tables_align() {
        let en = default_types(Language::En);
        let tr = default_types(Language::Tr);
        assert_eq!(en.len(), tr.len());
        for (a, b) in en.iter().zip(tr.iter()) {
            assert_eq!(a.value, b.value);
            assert_eq!(a.emoji, b.emoji);
        }
    }

    #[test]
    fn test_feat_has_sparkles() {
        let types = default_types(Language::En);
        let feat = types.iter().find(|t| t.value == "feat").unwrap();
        assert_eq!(feat.emoji.as_deref(), Some("✨"));
    }
}
