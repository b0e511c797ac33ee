//! Test Data Builders
//!
//! Provides a builder for raw postcode input with sensible defaults.
//! Tests specify only the part they care about (a district letter, the
//! spacing, lower case) and take defaults for everything else.

/// Where spaces go in the built input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spacing {
    /// `AA9B 9DD`
    Canonical,
    /// `AA9B9DD`
    Compact,
    /// ` A A 9 B 9 D D `
    Everywhere,
}

/// Builder for raw standard postcode input
#[derive(Debug, Clone)]
pub struct TestPostcodeBuilder {
    area: String,
    district: String,
    sector: char,
    unit: String,
    spacing: Spacing,
    lowercase: bool,
}

impl Default for TestPostcodeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestPostcodeBuilder {
    /// Creates a new builder producing `AA9B 9DD`
    pub fn new() -> Self {
        Self {
            area: "AA".to_string(),
            district: "9B".to_string(),
            sector: '9',
            unit: "DD".to_string(),
            spacing: Spacing::Canonical,
            lowercase: false,
        }
    }

    /// Sets the area letters
    pub fn area(mut self, area: impl Into<String>) -> Self {
        self.area = area.into();
        self
    }

    /// Sets the district
    pub fn district(mut self, district: impl Into<String>) -> Self {
        self.district = district.into();
        self
    }

    /// Sets the sector digit
    pub fn sector(mut self, sector: char) -> Self {
        self.sector = sector;
        self
    }

    /// Sets the unit letters
    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    /// Sets the spacing style
    pub fn spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    /// Emits the input in lower case
    pub fn lowercase(mut self) -> Self {
        self.lowercase = true;
        self
    }

    /// The outward code this builder will produce
    pub fn expected_outward(&self) -> String {
        format!("{}{}", self.area, self.district).to_ascii_uppercase()
    }

    /// The inward code this builder will produce
    pub fn expected_inward(&self) -> String {
        format!("{}{}", self.sector, self.unit).to_ascii_uppercase()
    }

    /// Builds the raw input string
    pub fn build(&self) -> String {
        let outward = format!("{}{}", self.area, self.district);
        let inward = format!("{}{}", self.sector, self.unit);

        let raw = match self.spacing {
            Spacing::Canonical => format!("{} {}", outward, inward),
            Spacing::Compact => format!("{}{}", outward, inward),
            Spacing::Everywhere => {
                let mut spaced = String::from(" ");
                for c in outward.chars().chain(inward.chars()) {
                    spaced.push(c);
                    spaced.push(' ');
                }
                spaced
            }
        };

        if self.lowercase {
            raw.to_ascii_lowercase()
        } else {
            raw
        }
    }
}
