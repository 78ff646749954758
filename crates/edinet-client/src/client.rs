//! EDINET DB API client.
//!
//! Endpoints and response shapes follow the live `edinetdb.jp` service:
//! keyword search goes through `/search?q=`, listings through `/companies`,
//! and both wrap their arrays in either `data` or a named key depending on
//! API revision. All of that looseness is absorbed here; callers receive
//! typed identities and raw statement records ready for normalization.

use crate::error::{ClientError, Result};
use edinet_statements::CompanyIdentity;
use serde_json::{Map, Value};
use std::time::Duration;

/// EDINET DB API base URL.
const BASE_URL: &str = "https://edinetdb.jp/v1";

/// Request timeout, matching the original tool.
const TIMEOUT: Duration = Duration::from_secs(30);

/// A company profile as returned by `/companies/{code}`.
#[derive(Debug, Clone)]
pub struct CompanyProfile {
    /// Core identity fields.
    pub identity: CompanyIdentity,
    /// Registered address.
    pub address: Option<String>,
    /// Establishment date as reported (free-form).
    pub established_date: Option<String>,
}

/// Async client for the EDINET DB API.
#[derive(Debug, Clone)]
pub struct EdinetClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl EdinetClient {
    /// Create a client for the production API.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_key, BASE_URL)
    }

    /// Create a client against a custom base URL (used by tests).
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(TIMEOUT)
            .build()
            .map_err(ClientError::Network)?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into(),
        })
    }

    async fn request(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Value> {
        let url = format!("{}/{endpoint}", self.base_url);
        tracing::debug!(%url, "EDINET DB request");

        let response = self
            .client
            .get(&url)
            .header("X-API-Key", &self.api_key)
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if status.as_u16() == 401 || status.as_u16() == 403 {
            return Err(ClientError::Auth {
                status: status.as_u16(),
            });
        }
        if status.as_u16() == 404 {
            // company endpoints are the only 404 source; extract the code
            let code = endpoint
                .strip_prefix("companies/")
                .map_or(endpoint, |rest| rest.split('/').next().unwrap_or(rest));
            return Err(ClientError::CompanyNotFound {
                code: code.to_string(),
            });
        }
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                endpoint: endpoint.to_string(),
            });
        }

        Ok(response.json().await?)
    }

    /// Search companies by keyword, or list companies when no query given.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or authentication failure.
    pub async fn search_companies(
        &self,
        query: Option<&str>,
        per_page: usize,
        page: usize,
    ) -> Result<Vec<CompanyIdentity>> {
        let body = if let Some(query) = query {
            self.request("search", &[("q", query.to_string())]).await?
        } else {
            self.request(
                "companies",
                &[
                    ("per_page", per_page.to_string()),
                    ("page", page.to_string()),
                ],
            )
            .await?
        };

        let list = wrapped_array(&body, &["data", "companies"]).ok_or_else(|| {
            ClientError::UnexpectedResponse {
                endpoint: "search".to_string(),
            }
        })?;

        let mut companies: Vec<CompanyIdentity> =
            list.iter().filter_map(identity_from).collect();
        companies.truncate(per_page);
        Ok(companies)
    }

    /// Fetch one company's profile.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::CompanyNotFound`] for an unknown code.
    pub async fn company(&self, code: &str) -> Result<CompanyProfile> {
        let endpoint = format!("companies/{code}");
        let body = self.request(&endpoint, &[]).await?;
        let obj = body
            .as_object()
            .ok_or_else(|| ClientError::UnexpectedResponse {
                endpoint: endpoint.clone(),
            })?;

        // the path code is authoritative even if the body omits its own
        let identity = identity_from(&body)
            .or_else(|| {
                string_of(obj, &["name"]).map(|name| CompanyIdentity {
                    code: code.to_string(),
                    name,
                    securities_code: string_of(obj, &["securities_code", "sec_code"]),
                    industry: string_of(obj, &["industry", "sector"]),
                })
            })
            .ok_or_else(|| ClientError::UnexpectedResponse {
                endpoint: endpoint.clone(),
            })?;

        Ok(CompanyProfile {
            identity,
            address: string_of(obj, &["address"]),
            established_date: string_of(obj, &["established_date"]),
        })
    }

    /// Fetch a company's raw financial records, most recent first.
    ///
    /// Records are returned untyped; callers hand them to the statement
    /// normalizer. `years` limits the result to the most recent periods.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::CompanyNotFound`] for an unknown code.
    pub async fn financials(&self, code: &str, years: Option<usize>) -> Result<Vec<Value>> {
        let endpoint = format!("companies/{code}/financials");
        let body = self.request(&endpoint, &[]).await?;
        let mut records = wrapped_array(&body, &["data", "financials"])
            .ok_or_else(|| ClientError::UnexpectedResponse { endpoint })?
            .to_vec();
        if let Some(years) = years.filter(|&y| y > 0) {
            records.truncate(years);
        }
        Ok(records)
    }

    /// Fetch a company's most recent raw financial record, if any.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::CompanyNotFound`] for an unknown code.
    pub async fn latest_financials(&self, code: &str) -> Result<Option<Value>> {
        Ok(self.financials(code, Some(1)).await?.into_iter().next())
    }
}

fn wrapped_array<'a>(body: &'a Value, keys: &[&str]) -> Option<&'a Vec<Value>> {
    keys.iter()
        .find_map(|key| body.get(*key).and_then(Value::as_array))
}

fn string_of(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| obj.get(*key))
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

/// Map one company object to an identity, tolerating key aliases across API
/// revisions (`edinet_code`/`code`, `securities_code`/`sec_code`,
/// `industry`/`sector`).
fn identity_from(value: &Value) -> Option<CompanyIdentity> {
    let obj = value.as_object()?;
    let code = string_of(obj, &["edinet_code", "code"])?;
    let name = string_of(obj, &["name"])?;
    Some(CompanyIdentity {
        code,
        name,
        securities_code: string_of(obj, &["securities_code", "sec_code"]),
        industry: string_of(obj, &["industry", "sector"]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!({
        "edinet_code": "E02367",
        "name": "任天堂株式会社",
        "securities_code": "79740",
        "industry": "機械",
    }))]
    #[case(json!({
        "code": "E02367",
        "name": "任天堂株式会社",
        "sec_code": "79740",
        "sector": "機械",
    }))]
    fn test_identity_alias_shapes(#[case] body: Value) {
        let identity = identity_from(&body).unwrap();
        assert_eq!(identity.code, "E02367");
        assert_eq!(identity.name, "任天堂株式会社");
        assert_eq!(identity.securities_code.as_deref(), Some("79740"));
        assert_eq!(identity.industry.as_deref(), Some("機械"));
    }

    #[test]
    fn test_identity_requires_code_and_name() {
        assert!(identity_from(&json!({ "name": "No Code KK" })).is_none());
        assert!(identity_from(&json!({ "edinet_code": "E00001" })).is_none());
    }

    #[test]
    fn test_wrapped_array_accepts_either_key() {
        let with_data = json!({ "data": [1, 2] });
        let with_name = json!({ "financials": [3] });
        assert_eq!(wrapped_array(&with_data, &["data", "financials"]).unwrap().len(), 2);
        assert_eq!(wrapped_array(&with_name, &["data", "financials"]).unwrap().len(), 1);
        assert!(wrapped_array(&json!({}), &["data"]).is_none());
    }

    #[test]
    fn test_error_messages_stay_distinct() {
        let not_found = ClientError::CompanyNotFound {
            code: "E99999".to_string(),
        };
        let auth = ClientError::Auth { status: 401 };
        assert!(not_found.to_string().contains("E99999"));
        assert!(auth.to_string().contains("API key"));
    }
}
