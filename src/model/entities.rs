use std::{collections::HashMap, fmt::Display, ops::Deref, str::FromStr};

use anyhow::anyhow;
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

/// A color in ARGB layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArgbColor(pub u32);

impl ArgbColor {
    const OPAQUE: u32 = 0xFF00_0000;

    /// Creates an opaque color from its red, green and blue components.
    pub fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self(Self::OPAQUE | (red as u32) << 16 | (green as u32) << 8 | blue as u32)
    }

    /// Retrieves the alpha component.
    pub fn alpha(&self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Retrieves the red component.
    pub fn red(&self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Retrieves the green component.
    pub fn green(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Retrieves the blue component.
    pub fn blue(&self) -> u8 {
        self.0 as u8
    }
}

impl FromStr for ArgbColor {
    type Err = anyhow::Error;

    /// Parses `#RGB`, `#RRGGBB` or `#AARRGGBB` hex notations.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().strip_prefix('#').unwrap_or(s.trim());
        if hex.is_empty() || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(anyhow!("Invalid hex color: {s:?}"));
        }
        let value = u32::from_str_radix(hex, 16)?;

        match hex.len() {
            3 => {
                let expand = |nibble: u32| ((nibble & 0xF) * 0x11) as u8;
                Ok(Self::from_rgb(
                    expand(value >> 8),
                    expand(value >> 4),
                    expand(value),
                ))
            }
            6 => Ok(Self(Self::OPAQUE | value)),
            8 => Ok(Self(value)),
            _ => Err(anyhow!("Invalid hex color length: {s:?}")),
        }
    }
}

impl Display for ArgbColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.alpha() == 0xFF {
            write!(f, "#{:02X}{:02X}{:02X}", self.red(), self.green(), self.blue())
        } else {
            write!(f, "#{:08X}", self.0)
        }
    }
}

impl Serialize for ArgbColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A mapping from programming language name to its display color.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageColorMap(HashMap<String, ArgbColor>);

impl LanguageColorMap {
    /// Creates a new `LanguageColorMap` from the given entries.
    pub fn new(colors: HashMap<String, ArgbColor>) -> Self {
        Self(colors)
    }

    /// Looks up the color of a language, if any.
    pub fn color_of(&self, language: Option<&str>) -> Option<ArgbColor> {
        language.and_then(|language| self.0.get(language).copied())
    }
}

impl Deref for LanguageColorMap {
    type Target = HashMap<String, ArgbColor>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromIterator<(String, ArgbColor)> for LanguageColorMap {
    fn from_iter<T: IntoIterator<Item = (String, ArgbColor)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// The owner of a repository.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Owner {
    /// The identifier of the owner.
    pub id: u64,

    /// The login of the owner.
    pub username: String,

    /// The avatar URL of the owner.
    pub avatar_url: String,
}

/// A repository returned by a search, decorated with its language color.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RepoItem {
    pub id: u64,
    pub full_name: String,
    pub language: Option<String>,
    pub star_count: u32,
    pub name: String,
    pub description: Option<String>,
    pub language_color: Option<ArgbColor>,
    pub html_url: String,
    pub owner: Owner,
    pub updated_at: DateTime<Utc>,
}

impl Display for RepoItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} stars)", self.full_name, self.star_count)?;
        if let Some(language) = &self.language {
            write!(f, " [{language}")?;
            if let Some(color) = self.language_color {
                write!(f, " {color}")?;
            }
            write!(f, "]")?;
        }
        write!(f, " {}", self.html_url)
    }
}

/// The ordered repositories of a search page.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResult(pub Vec<RepoItem>);

impl Deref for SearchResult {
    type Target = Vec<RepoItem>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl IntoIterator for SearchResult {
    type Item = RepoItem;
    type IntoIter = std::vec::IntoIter<RepoItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
