//! Third slot of the index chain. No upstream is wired to it yet, so it never
//! issues a request and always reports an empty board.

use async_trait::async_trait;

use super::IndexSource;
use crate::models::{IndexBoard, IndexDescriptor};

#[derive(Debug, Default)]
pub struct ReservedSource;

#[async_trait]
impl IndexSource for ReservedSource {
    fn id(&self) -> &'static str {
        "RESERVED"
    }

    fn priority(&self) -> u8 {
        3
    }

    async fn fetch_indices(&self, _targets: &[IndexDescriptor]) -> IndexBoard {
        IndexBoard::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::live_indices;

    #[tokio::test]
    async fn test_always_empty() {
        assert!(ReservedSource.fetch_indices(&live_indices()).await.is_empty());
    }
}
