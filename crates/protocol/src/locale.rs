//! Locale values and their POSIX wire rendering.
//!
//! Only the POSIX string form of a locale crosses the SDK boundary; the
//! handshake body and the `updateLocale` bridge command both carry it.
//! Reference: <https://www.gnu.org/software/gettext/manual/html_node/Locale-Names.html>

use std::fmt;

/// A language/region/variant tuple.
///
/// The root locale (all parts empty) renders as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Locale {
	language: String,
	region: String,
	variant: String,
}

impl Locale {
	/// A locale with a language and region, e.g. `Locale::new("fr", "CA")`.
	/// Pass an empty region for language-only locales.
	pub fn new(language: impl Into<String>, region: impl Into<String>) -> Self {
		Self {
			language: language.into(),
			region: region.into(),
			variant: String::new(),
		}
	}

	/// A locale carrying a variant, e.g. `Locale::with_variant("fi", "FI", "euro")`.
	pub fn with_variant(
		language: impl Into<String>,
		region: impl Into<String>,
		variant: impl Into<String>,
	) -> Self {
		Self {
			language: language.into(),
			region: region.into(),
			variant: variant.into(),
		}
	}

	/// The root locale.
	pub fn root() -> Self {
		Self::default()
	}

	pub fn language(&self) -> &str {
		&self.language
	}

	pub fn region(&self) -> &str {
		&self.region
	}

	pub fn variant(&self) -> &str {
		&self.variant
	}

	/// The `language[_REGION][@variant]` rendering used in wire payloads.
	///
	/// A variant is only emitted when a region is present.
	pub fn posix(&self) -> String {
		if self.region.is_empty() {
			self.language.clone()
		} else if !self.variant.is_empty() {
			format!("{}_{}@{}", self.language, self.region, self.variant)
		} else {
			format!("{}_{}", self.language, self.region)
		}
	}
}

impl fmt::Display for Locale {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.posix())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn language_and_region() {
		assert_eq!(Locale::new("fr", "CA").posix(), "fr_CA");
	}

	#[test]
	fn language_only() {
		assert_eq!(Locale::new("de", "").posix(), "de");
	}

	#[test]
	fn variant_is_appended() {
		assert_eq!(Locale::with_variant("fi", "FI", "euro").posix(), "fi_FI@euro");
	}

	#[test]
	fn variant_without_region_is_dropped() {
		assert_eq!(Locale::with_variant("th", "", "TH").posix(), "th");
	}

	#[test]
	fn root_locale_is_empty() {
		assert_eq!(Locale::root().posix(), "");
	}

	#[test]
	fn display_matches_posix() {
		assert_eq!(Locale::new("sv", "SE").to_string(), "sv_SE");
	}
}
