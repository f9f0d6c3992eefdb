//! Offline country table
//!
//! Matches by ASCII case-insensitive substring on the common or official name
//! and settles immediately.

use futures::FutureExt;

use super::{CountryLookup, LookupFuture, RawCountry, RawFlags, RawName};

/// (ccn3, cca3, cca2, common, official)
type Entry = (&'static str, &'static str, &'static str, &'static str, &'static str);

const COUNTRIES: &[Entry] = &[
    ("032", "ARG", "ar", "Argentina", "Argentine Republic"),
    ("036", "AUS", "au", "Australia", "Commonwealth of Australia"),
    ("040", "AUT", "at", "Austria", "Republic of Austria"),
    ("056", "BEL", "be", "Belgium", "Kingdom of Belgium"),
    ("076", "BRA", "br", "Brazil", "Federative Republic of Brazil"),
    ("124", "CAN", "ca", "Canada", "Canada"),
    ("152", "CHL", "cl", "Chile", "Republic of Chile"),
    ("156", "CHN", "cn", "China", "People's Republic of China"),
    ("170", "COL", "co", "Colombia", "Republic of Colombia"),
    ("191", "HRV", "hr", "Croatia", "Republic of Croatia"),
    ("203", "CZE", "cz", "Czechia", "Czech Republic"),
    ("208", "DNK", "dk", "Denmark", "Kingdom of Denmark"),
    ("818", "EGY", "eg", "Egypt", "Arab Republic of Egypt"),
    ("234", "FRO", "fo", "Faroe Islands", "Faroe Islands"),
    ("246", "FIN", "fi", "Finland", "Republic of Finland"),
    ("250", "FRA", "fr", "France", "French Republic"),
    ("254", "GUF", "gf", "French Guiana", "Guiana"),
    ("258", "PYF", "pf", "French Polynesia", "French Polynesia"),
    ("268", "GEO", "ge", "Georgia", "Georgia"),
    ("276", "DEU", "de", "Germany", "Federal Republic of Germany"),
    ("288", "GHA", "gh", "Ghana", "Republic of Ghana"),
    ("300", "GRC", "gr", "Greece", "Hellenic Republic"),
    ("304", "GRL", "gl", "Greenland", "Greenland"),
    ("348", "HUN", "hu", "Hungary", "Hungary"),
    ("352", "ISL", "is", "Iceland", "Iceland"),
    ("356", "IND", "in", "India", "Republic of India"),
    ("360", "IDN", "id", "Indonesia", "Republic of Indonesia"),
    ("372", "IRL", "ie", "Ireland", "Republic of Ireland"),
    ("380", "ITA", "it", "Italy", "Italian Republic"),
    ("392", "JPN", "jp", "Japan", "Japan"),
    ("404", "KEN", "ke", "Kenya", "Republic of Kenya"),
    ("", "UNK", "xk", "Kosovo", "Republic of Kosovo"),
    ("484", "MEX", "mx", "Mexico", "United Mexican States"),
    ("504", "MAR", "ma", "Morocco", "Kingdom of Morocco"),
    ("528", "NLD", "nl", "Netherlands", "Kingdom of the Netherlands"),
    ("554", "NZL", "nz", "New Zealand", "New Zealand"),
    ("566", "NGA", "ng", "Nigeria", "Federal Republic of Nigeria"),
    ("578", "NOR", "no", "Norway", "Kingdom of Norway"),
    ("604", "PER", "pe", "Peru", "Republic of Peru"),
    ("616", "POL", "pl", "Poland", "Republic of Poland"),
    ("620", "PRT", "pt", "Portugal", "Portuguese Republic"),
    ("642", "ROU", "ro", "Romania", "Romania"),
    ("710", "ZAF", "za", "South Africa", "Republic of South Africa"),
    ("410", "KOR", "kr", "South Korea", "Republic of Korea"),
    ("724", "ESP", "es", "Spain", "Kingdom of Spain"),
    ("752", "SWE", "se", "Sweden", "Kingdom of Sweden"),
    ("756", "CHE", "ch", "Switzerland", "Swiss Confederation"),
    ("792", "TUR", "tr", "Turkey", "Republic of Turkey"),
    ("804", "UKR", "ua", "Ukraine", "Ukraine"),
    ("826", "GBR", "gb", "United Kingdom", "United Kingdom of Great Britain and Northern Ireland"),
    ("840", "USA", "us", "United States", "United States of America"),
    ("704", "VNM", "vn", "Vietnam", "Socialist Republic of Vietnam"),
];

/// Lookup backed by a built-in country table
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledLookup;

impl BundledLookup {
    pub fn new() -> Self {
        Self
    }

    /// All records whose common or official name contains `query`
    pub fn matches(query: &str) -> Vec<RawCountry> {
        let needle = query.trim().to_ascii_lowercase();
        COUNTRIES
            .iter()
            .filter(|(_, _, _, common, official)| {
                common.to_ascii_lowercase().contains(&needle)
                    || official.to_ascii_lowercase().contains(&needle)
            })
            .map(to_raw)
            .collect()
    }
}

fn to_raw(entry: &Entry) -> RawCountry {
    let (ccn3, cca3, cca2, common, official) = *entry;
    RawCountry {
        ccn3: (!ccn3.is_empty()).then(|| ccn3.to_string()),
        cca3: Some(cca3.to_string()),
        name: RawName {
            common: common.to_string(),
            official: official.to_string(),
        },
        flags: RawFlags {
            png: format!("https://flagcdn.com/w320/{}.png", cca2),
        },
    }
}

impl CountryLookup for BundledLookup {
    fn lookup(&self, query: &str) -> Option<LookupFuture> {
        if query.trim().is_empty() {
            return None;
        }
        Some(futures::future::ready(Ok(Self::matches(query))).boxed())
    }
}
