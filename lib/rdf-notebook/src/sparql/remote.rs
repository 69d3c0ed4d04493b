use crate::error::RemoteQueryError;
use crate::sparql::{boolean_table, term_value, Endpoint};
use crate::table::ResultTable;
use oxrdf::Variable;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use sparesults::{QueryResultsFormat, QueryResultsParser, ReaderQueryResultsParserOutput};
use std::time::Duration;

/// The media type of the [SPARQL JSON results format](https://www.w3.org/TR/sparql11-results-json/).
pub const SPARQL_RESULTS_JSON: &str = "application/sparql-results+json";
/// The content type of the form-encoded query body.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(60);

/// Holds the configuration of a [`SparqlClient`].
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// The total timeout of a request. `None` waits forever.
    pub timeout: Option<Duration>,
    /// The `User-Agent` header sent with every request.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Some(HTTP_TIMEOUT),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_owned(),
        }
    }
}

/// Sends SPARQL queries to remote endpoints.
///
/// The client keeps a connection pool, so reusing it for several queries is cheaper than calling
/// [`remote_query`] repeatedly.
#[derive(Clone, Debug)]
pub struct SparqlClient {
    client: reqwest::Client,
}

impl SparqlClient {
    /// Creates a client with the default [`ClientConfig`].
    pub fn new() -> Result<Self, RemoteQueryError> {
        Self::with_config(&ClientConfig::default())
    }

    pub fn with_config(config: &ClientConfig) -> Result<Self, RemoteQueryError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Wraps an already configured [`reqwest::Client`].
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Sends `query` to `endpoint` and returns the results as a table.
    ///
    /// The query is sent as a form-encoded `POST` asking for SPARQL JSON results. Each cell holds
    /// the `value` of the binding, or is empty if the variable is unbound. Columns whose values are
    /// all numbers are converted with [`ResultTable::convert_numeric_columns`].
    pub async fn query(
        &self,
        query: &str,
        endpoint: &Endpoint,
    ) -> Result<ResultTable, RemoteQueryError> {
        tracing::info!("Sending SPARQL query to {endpoint}");
        let body = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("query", query)
            .finish();
        let response = self
            .client
            .post(endpoint.as_str())
            .header(ACCEPT, SPARQL_RESULTS_JSON)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteQueryError::Status {
                url: response.url().clone(),
                status,
            });
        }

        let payload = response.bytes().await?;
        tracing::debug!("Received {} bytes from {endpoint}", payload.len());

        let mut table = match QueryResultsParser::from_format(QueryResultsFormat::Json)
            .for_reader(&payload[..])?
        {
            ReaderQueryResultsParserOutput::Solutions(solutions) => {
                let variables = solutions.variables().to_vec();
                let mut table = ResultTable::new(variables.iter().map(Variable::as_str));
                for solution in solutions {
                    let solution = solution?;
                    table.push_values(variables.iter().map(|v| solution.get(v).map(term_value)));
                }
                table
            }
            ReaderQueryResultsParserOutput::Boolean(value) => boolean_table(value),
        };
        table.convert_numeric_columns();

        tracing::debug!("Remote query returned {} rows", table.len());
        Ok(table)
    }
}

/// Sends `query` to `endpoint` with a default [`SparqlClient`].
///
/// See [`SparqlClient::query`].
pub async fn remote_query(query: &str, endpoint: &Endpoint) -> Result<ResultTable, RemoteQueryError> {
    SparqlClient::new()?.query(query, endpoint).await
}
