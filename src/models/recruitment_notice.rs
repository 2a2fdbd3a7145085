use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Full `recruitment_notices` row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct RecruitmentNotice {
    pub id: i32,
    pub company_name: Option<String>,
    pub country: Option<String>,
    pub area: Option<String>,
    pub position: Option<String>,
    pub compensation: Option<String>,
    pub skill: Option<String>,
    pub detail: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// List/search projection: no `detail`, no timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NoticeSummary {
    pub id: i32,
    pub company_name: Option<String>,
    pub country: Option<String>,
    pub area: Option<String>,
    pub position: Option<String>,
    pub compensation: Option<String>,
    pub skill: Option<String>,
}

/// Detail projection: every attribute except the timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NoticeDetail {
    pub id: i32,
    pub company_name: Option<String>,
    pub country: Option<String>,
    pub area: Option<String>,
    pub position: Option<String>,
    pub compensation: Option<String>,
    pub skill: Option<String>,
    pub detail: Option<String>,
}

/// Caller-supplied notice attributes.
///
/// On create every field is stored as given. On update a `None` field is
/// left untouched by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct NoticeFields {
    pub company_name: Option<String>,
    pub country: Option<String>,
    pub area: Option<String>,
    pub position: Option<String>,
    pub compensation: Option<String>,
    pub skill: Option<String>,
    pub detail: Option<String>,
}

impl NoticeFields {
    /// Drops empty strings so that they count as "not supplied".
    pub fn supplied_only(self) -> Self {
        fn keep(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.is_empty())
        }

        Self {
            company_name: keep(self.company_name),
            country: keep(self.country),
            area: keep(self.area),
            position: keep(self.position),
            compensation: keep(self.compensation),
            skill: keep(self.skill),
            detail: keep(self.detail),
        }
    }
}

impl From<RecruitmentNotice> for NoticeSummary {
    fn from(value: RecruitmentNotice) -> Self {
        Self {
            id: value.id,
            company_name: value.company_name,
            country: value.country,
            area: value.area,
            position: value.position,
            compensation: value.compensation,
            skill: value.skill,
        }
    }
}

impl From<RecruitmentNotice> for NoticeDetail {
    fn from(value: RecruitmentNotice) -> Self {
        Self {
            id: value.id,
            company_name: value.company_name,
            country: value.country,
            area: value.area,
            position: value.position,
            compensation: value.compensation,
            skill: value.skill,
            detail: value.detail,
        }
    }
}
