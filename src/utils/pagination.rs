use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct PaginationQuery {
    #[serde(default, deserialize_with = "deserialize_optional_u64")]
    pub page: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_optional_u64")]
    pub limit: Option<u64>,
}

fn deserialize_optional_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let opt: Option<String> = Option::deserialize(deserializer)?;
    match opt {
        Some(s) => s.parse::<u64>().map(Some).map_err(Error::custom),
        None => Ok(None),
    }
}

#[derive(Debug, Serialize)]
pub struct PaginationInfo {
    pub current_page: u64,
    pub total_pages: u64,
    pub total_items: u64,
    pub items_per_page: u64,
}

#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationInfo,
}

impl PaginationQuery {
    pub fn get_page(&self) -> u64 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn get_limit(&self) -> u64 {
        self.limit.unwrap_or(10).clamp(1, 100) // Max 100 items per page
    }

    pub fn get_offset(&self) -> u64 {
        (self.get_page() - 1) * self.get_limit()
    }
}

impl PaginationInfo {
    pub fn new(current_page: u64, total_items: u64, items_per_page: u64) -> Self {
        let total_pages = if total_items == 0 {
            1
        } else {
            total_items.div_ceil(items_per_page)
        };

        Self {
            current_page,
            total_pages,
            total_items,
            items_per_page,
        }
    }
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, pagination: PaginationInfo) -> Self {
        Self { data, pagination }
    }
}

/// Slice one page out of a fully loaded collection.
pub fn paginate<T>(items: Vec<T>, query: &PaginationQuery) -> PaginatedResponse<T> {
    let total = items.len() as u64;
    let page = items
        .into_iter()
        .skip(query.get_offset() as usize)
        .take(query.get_limit() as usize)
        .collect();

    PaginatedResponse::new(
        page,
        PaginationInfo::new(query.get_page(), total, query.get_limit()),
    )
}
