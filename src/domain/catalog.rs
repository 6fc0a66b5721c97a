use super::models::ItemRecord;

/// Lifecycle of the single catalog read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Pending,
    Loaded,
    Failed,
}

impl LoadStatus {
    pub fn as_str(&self) -> &str {
        match self {
            LoadStatus::Pending => "pending",
            LoadStatus::Loaded => "loaded",
            LoadStatus::Failed => "failed",
        }
    }

    pub fn is_settled(&self) -> bool {
        !matches!(self, LoadStatus::Pending)
    }
}

/// In-memory holder for the fetched collection and its load status
#[derive(Debug, Clone)]
pub struct CatalogState {
    items: Vec<ItemRecord>,
    load_status: LoadStatus,
}

impl CatalogState {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            load_status: LoadStatus::Pending,
        }
    }

    pub fn loaded(items: Vec<ItemRecord>) -> Self {
        Self {
            items,
            load_status: LoadStatus::Loaded,
        }
    }

    pub fn failed() -> Self {
        Self {
            items: Vec::new(),
            load_status: LoadStatus::Failed,
        }
    }

    pub fn items(&self) -> &[ItemRecord] {
        &self.items
    }

    pub fn load_status(&self) -> LoadStatus {
        self.load_status
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}
