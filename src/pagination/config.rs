use crate::errors::ConfigError;

pub const DEFAULT_PAGE_SIZE: usize = 8;

/// Configuration for client-side pagination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationConfig {
    page_size: usize,
}

impl PaginationConfig {
    pub fn new() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Result<Self, ConfigError> {
        if page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        self.page_size = page_size;
        Ok(self)
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page_size() {
        assert_eq!(PaginationConfig::default().page_size(), 8);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        assert_eq!(
            PaginationConfig::new().with_page_size(0),
            Err(ConfigError::ZeroPageSize)
        );
        assert_eq!(PaginationConfig::new().with_page_size(3).unwrap().page_size(), 3);
    }
}
