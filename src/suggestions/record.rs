use crate::lookup::RawCountry;

/// One entry of the suggestion list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// Stable key: numeric ISO code, falling back to the alpha-3 code
    pub id: String,
    /// Common name; this is what a selection writes back to the input
    pub primary_name: String,
    /// Official name
    pub secondary_name: String,
    /// Flag image URL
    pub image_ref: String,
}

impl Suggestion {
    /// Text shown in the panel: "common / official"
    pub fn label(&self) -> String {
        format!("{} / {}", self.primary_name, self.secondary_name)
    }
}

impl From<RawCountry> for Suggestion {
    fn from(raw: RawCountry) -> Self {
        let id = raw
            .ccn3
            .filter(|code| !code.is_empty())
            .or(raw.cca3)
            .unwrap_or_else(|| raw.name.common.clone());

        Suggestion {
            id,
            primary_name: raw.name.common,
            secondary_name: raw.name.official,
            image_ref: raw.flags.png,
        }
    }
}
