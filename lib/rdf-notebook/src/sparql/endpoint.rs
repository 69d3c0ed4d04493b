use crate::error::EndpointParseError;
use reqwest::Url;
use std::fmt;
use std::str::FromStr;

/// The SPARQL endpoint of the Fedlex triple store (abbreviation `F`).
pub const FEDLEX_ENDPOINT: &str = "https://fedlex.data.admin.ch/sparqlendpoint";
/// The SPARQL endpoint of the geo.admin.ch triple store (abbreviation `G`).
pub const GEO_ENDPOINT: &str = "https://geo.ld.admin.ch/query";
/// The SPARQL endpoint of the LINDAS triple store (abbreviation `L`).
pub const LINDAS_ENDPOINT: &str = "https://ld.admin.ch/query";

/// A SPARQL endpoint, either one of the well-known Swiss triple stores or any URL.
///
/// ```
/// use rdf_notebook::sparql::Endpoint;
///
/// assert_eq!("F".parse::<Endpoint>()?, Endpoint::Fedlex);
/// assert_eq!(Endpoint::default().as_str(), "https://ld.admin.ch/query");
/// assert_eq!(
///     "https://query.wikidata.org/sparql".parse::<Endpoint>()?.as_str(),
///     "https://query.wikidata.org/sparql"
/// );
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Endpoint {
    Fedlex,
    Geo,
    #[default]
    Lindas,
    Custom(Url),
}

impl Endpoint {
    /// Returns the URL of the endpoint.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Fedlex => FEDLEX_ENDPOINT,
            Self::Geo => GEO_ENDPOINT,
            Self::Lindas => LINDAS_ENDPOINT,
            Self::Custom(url) => url.as_str(),
        }
    }
}

impl FromStr for Endpoint {
    type Err = EndpointParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "F" => Ok(Self::Fedlex),
            "G" => Ok(Self::Geo),
            "L" => Ok(Self::Lindas),
            _ => Url::parse(value)
                .map(Self::Custom)
                .map_err(|error| EndpointParseError {
                    value: value.to_owned(),
                    error,
                }),
        }
    }
}

impl From<Url> for Endpoint {
    fn from(url: Url) -> Self {
        Self::Custom(url)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abbreviations() -> Result<(), EndpointParseError> {
        assert_eq!("F".parse::<Endpoint>()?.as_str(), FEDLEX_ENDPOINT);
        assert_eq!("G".parse::<Endpoint>()?.as_str(), GEO_ENDPOINT);
        assert_eq!("L".parse::<Endpoint>()?.as_str(), LINDAS_ENDPOINT);
        Ok(())
    }

    #[test]
    fn abbreviations_are_case_sensitive() {
        let error = "l".parse::<Endpoint>().unwrap_err();
        assert_eq!(error.value, "l");
    }

    #[test]
    fn custom_urls() -> Result<(), EndpointParseError> {
        let endpoint = "http://localhost:7878/query".parse::<Endpoint>()?;
        assert!(matches!(endpoint, Endpoint::Custom(_)));
        assert_eq!(endpoint.to_string(), "http://localhost:7878/query");
        Ok(())
    }
}
