pub mod c_family;
pub mod common;
pub mod functional;
pub mod markup;
pub mod misc;
pub mod profile;
pub mod scanner;
pub mod script;

pub use common::{ByteRange, CommentKind, CommentSpan, EditError, remove_ranges};
pub use profile::{BlockComment, Heredoc, LanguageProfile, StringDelimiter};
pub use scanner::find_comments;

use crate::CoreError;
use std::collections::HashMap;

/// Read-only lookup from language identifier to its profile.
///
/// Built once at startup and shared by reference with every worker.
#[derive(Debug, Clone)]
pub struct ProfileRegistry {
    profiles: Vec<LanguageProfile>,
    by_name: HashMap<&'static str, usize>,
    by_extension: HashMap<&'static str, usize>,
    by_filename: HashMap<&'static str, usize>,
}

impl ProfileRegistry {
    /// All built-in profiles, validated.
    pub fn builtin() -> Result<Self, CoreError> {
        let profiles = c_family::PROFILES
            .iter()
            .chain(script::PROFILES)
            .chain(functional::PROFILES)
            .chain(markup::PROFILES)
            .chain(misc::PROFILES)
            .copied()
            .collect();
        Self::new(profiles)
    }

    pub fn new(profiles: Vec<LanguageProfile>) -> Result<Self, CoreError> {
        let mut by_name = HashMap::new();
        let mut by_extension = HashMap::new();
        let mut by_filename = HashMap::new();

        for (index, profile) in profiles.iter().enumerate() {
            profile.validate()?;
            if by_name.insert(profile.name, index).is_some() {
                return Err(conflict(profile, format!("duplicate profile '{}'", profile.name)));
            }
            for &ext in profile.extensions {
                if let Some(previous) = by_extension.insert(ext, index) {
                    return Err(conflict(
                        profile,
                        format!(
                            "extension '{}' is already claimed by '{}'",
                            ext, profiles[previous].name
                        ),
                    ));
                }
            }
            for &name in profile.filenames {
                if let Some(previous) = by_filename.insert(name, index) {
                    return Err(conflict(
                        profile,
                        format!(
                            "file name '{}' is already claimed by '{}'",
                            name, profiles[previous].name
                        ),
                    ));
                }
            }
        }

        tracing::debug!(profiles = profiles.len(), "language profiles registered");
        Ok(ProfileRegistry {
            profiles,
            by_name,
            by_extension,
            by_filename,
        })
    }

    pub fn get(&self, language: &str) -> Result<&LanguageProfile, CoreError> {
        self.by_name
            .get(language)
            .map(|&i| &self.profiles[i])
            .ok_or_else(|| CoreError::UnsupportedLanguage(language.to_string()))
    }

    /// Case-insensitive, without the leading dot.
    pub fn for_extension(&self, extension: &str) -> Option<&LanguageProfile> {
        self.by_extension
            .get(extension.to_ascii_lowercase().as_str())
            .map(|&i| &self.profiles[i])
    }

    pub fn for_filename(&self, file_name: &str) -> Option<&LanguageProfile> {
        self.by_filename.get(file_name).map(|&i| &self.profiles[i])
    }

    pub fn profiles(&self) -> &[LanguageProfile] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

fn conflict(profile: &LanguageProfile, reason: String) -> CoreError {
    CoreError::ProfileConfiguration {
        profile: profile.name.to_string(),
        reason,
    }
}
