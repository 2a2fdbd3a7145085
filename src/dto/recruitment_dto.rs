use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::recruitment_notice::{NoticeDetail, NoticeSummary};

#[derive(Debug, Clone, Serialize, Deserialize, Default, IntoParams)]
#[serde(default)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Substring looked up in company name, country, area, position,
    /// compensation and skill.
    pub keyword: Option<String>,
}

/// Payload of the notice detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NoticeDetailData {
    pub recruitment_detail: NoticeDetail,
    /// Ids of every notice posted by the same company, this one included.
    pub recruitment_notices_by_company: Vec<i32>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct NoticeListBody {
    pub data: Vec<NoticeSummary>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct NoticeDetailBody {
    pub data: NoticeDetailData,
}
