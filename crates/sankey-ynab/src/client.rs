//! Thin blocking client for the YNAB v1 REST API.

use reqwest::blocking::Client as HttpClient;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use sankey_domain::{BudgetCategoryGroup, BudgetMonth};

use crate::{MonthSelector, UpstreamError};

const DEFAULT_BASE_URL: &str = "https://api.ynab.com/v1";

/// Authenticated client scoped to one access token. Construct a fresh
/// client per run; nothing is cached between fetches.
#[derive(Debug, Clone)]
pub struct YnabClient {
    base_url: String,
    token: String,
    http: HttpClient,
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct CategoriesPayload {
    category_groups: Vec<BudgetCategoryGroup>,
}

#[derive(Debug, Deserialize)]
struct MonthPayload {
    month: BudgetMonth,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    detail: String,
}

impl YnabClient {
    pub fn new(token: impl Into<String>) -> Result<Self, UpstreamError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(UpstreamError::MissingToken);
        }
        Ok(Self {
            base_url: DEFAULT_BASE_URL.into(),
            token,
            http: HttpClient::builder().build()?,
        })
    }

    /// Points the client at a different API root (e.g. a local stub).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetches every category group for the budget, with embedded category
    /// lists.
    pub fn categories(&self, budget_id: &str) -> Result<Vec<BudgetCategoryGroup>, UpstreamError> {
        if budget_id.trim().is_empty() {
            return Err(UpstreamError::MissingBudgetId);
        }
        let payload: CategoriesPayload = self.get(&format!("budgets/{budget_id}/categories"))?;
        Ok(payload.category_groups)
    }

    /// Fetches a single month snapshot: the aggregate budgeted income plus
    /// the month-scoped category listing.
    pub fn budget_month(
        &self,
        budget_id: &str,
        month: MonthSelector,
    ) -> Result<BudgetMonth, UpstreamError> {
        if budget_id.trim().is_empty() {
            return Err(UpstreamError::MissingBudgetId);
        }
        let payload: MonthPayload = self.get(&format!("budgets/{budget_id}/months/{month}"))?;
        Ok(payload.month)
    }

    fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, UpstreamError> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), path);
        tracing::debug!(%url, "fetching from budgeting provider");
        let response = self.http.get(&url).bearer_auth(&self.token).send()?;
        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<ErrorEnvelope>()
                .map(|body| body.error.detail)
                .unwrap_or_else(|_| {
                    status
                        .canonical_reason()
                        .unwrap_or("unknown error")
                        .to_string()
                });
            return Err(UpstreamError::Api {
                status: status.as_u16(),
                detail,
            });
        }
        Ok(response.json::<Envelope<T>>()?.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_token() {
        assert!(matches!(
            YnabClient::new("  "),
            Err(UpstreamError::MissingToken)
        ));
        assert!(YnabClient::new("token").is_ok());
    }

    #[test]
    fn decodes_categories_envelope_with_extra_provider_fields() {
        let raw = r#"{
            "data": {
                "category_groups": [
                    {
                        "id": "2f1eab21-3f17-4e73-a04e-6c3d30706031",
                        "name": "Rent",
                        "hidden": false,
                        "deleted": false,
                        "categories": [
                            {
                                "id": "13419c12-78d8-4818-b5dc-601b2a8dcf4f",
                                "category_group_id": "2f1eab21-3f17-4e73-a04e-6c3d30706031",
                                "name": "Apt",
                                "hidden": false,
                                "original_category_group_id": null,
                                "note": null,
                                "budgeted": 500,
                                "activity": -120,
                                "balance": 380,
                                "goal_type": null,
                                "deleted": false
                            }
                        ]
                    }
                ],
                "server_knowledge": 473
            }
        }"#;
        let envelope: Envelope<CategoriesPayload> =
            serde_json::from_str(raw).expect("decode categories");
        let groups = envelope.data.category_groups;
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, "Rent");
        let categories = groups[0].categories.as_deref().expect("embedded list");
        assert_eq!(categories[0].budgeted, 500);
        assert_eq!(categories[0].group_id, groups[0].id);
    }

    #[test]
    fn decodes_month_envelope() {
        let raw = r#"{
            "data": {
                "month": {
                    "month": "2024-05-01",
                    "note": null,
                    "income": 350000,
                    "budgeted": 340000,
                    "activity": -120000,
                    "to_be_budgeted": 10000,
                    "categories": [
                        {
                            "id": "13419c12-78d8-4818-b5dc-601b2a8dcf4f",
                            "category_group_id": "2f1eab21-3f17-4e73-a04e-6c3d30706031",
                            "name": "Apt",
                            "hidden": false,
                            "budgeted": 500,
                            "deleted": false
                        }
                    ]
                }
            }
        }"#;
        let envelope: Envelope<MonthPayload> = serde_json::from_str(raw).expect("decode month");
        let month = envelope.data.month;
        assert_eq!(month.budgeted, 340000);
        assert_eq!(month.categories.len(), 1);
        assert_eq!(month.month.to_string(), "2024-05-01");
    }

    #[test]
    fn decodes_api_error_envelope() {
        let raw = r#"{
            "error": {
                "id": "401",
                "name": "unauthorized",
                "detail": "Unauthorized"
            }
        }"#;
        let envelope: ErrorEnvelope = serde_json::from_str(raw).expect("decode error");
        assert_eq!(envelope.error.detail, "Unauthorized");
    }
}
