//! Player endpoints.

use ms_core::error::MsResult;
use ms_models::Player;

use super::resource::PLAYERS;
use crate::client::MediasiteClient;
use crate::query::{field, PagedRequest};

impl MediasiteClient {
    /// All players, ordered by name.
    pub async fn get_players(&self) -> MsResult<Vec<Player>> {
        self.fetch_all(&PagedRequest::new(PLAYERS).order_by(field::NAME))
            .await
    }
}
