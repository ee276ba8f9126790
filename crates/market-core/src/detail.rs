//! Detail page loading and seller contact rules.

use serde::Serialize;

use crate::backend::MarketBackend;
use crate::error::{MarketError, MarketResult};
use crate::models::{DetailRecord, Viewer};
use crate::social::SocialState;

/// Everything the detail page shows after loading
#[derive(Debug, Clone, PartialEq)]
pub struct DetailSnapshot {
    pub record: DetailRecord,
    pub viewer: Option<Viewer>,
    pub social: SocialState,
}

/// Load the record, the share count, the viewer and the viewer's social
/// flags. The first failure aborts the whole load.
pub async fn load_detail<B>(backend: &B, idea_id: &str) -> MarketResult<DetailSnapshot>
where
    B: MarketBackend + ?Sized,
{
    let record = backend
        .fetch_detail(idea_id)
        .await?
        .ok_or(MarketError::NotFound)?;
    let share_count = backend.share_count(idea_id).await?;
    let viewer = backend.current_user().await?;

    let (like, saved) = match &viewer {
        Some(viewer) => {
            let like = backend.like_status(idea_id, Some(&viewer.id)).await?;
            let saved = backend.save_status(idea_id, &viewer.id).await?;
            (like, saved)
        }
        None => (backend.like_status(idea_id, None).await?, false),
    };

    log::debug!(
        "loaded idea {idea_id}: {} likes, {share_count} shares, viewer={}",
        like.count,
        viewer.is_some()
    );

    Ok(DetailSnapshot {
        record,
        viewer,
        social: SocialState::new(like, saved, share_count),
    })
}

/// Payload of the `ida:open-chat` window event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatTarget {
    pub user_id: String,
    pub user_name: String,
}

pub const OPEN_CHAT_EVENT: &str = "ida:open-chat";

/// Who "Message Seller" should open a chat with.
pub fn contact_target(viewer: Option<&Viewer>, record: &DetailRecord) -> MarketResult<ChatTarget> {
    let viewer = viewer.ok_or_else(MarketError::login_to_message)?;
    let seller = record
        .user_id
        .as_deref()
        .filter(|id| !id.is_empty())
        .ok_or_else(|| {
            log::error!("idea {} has no seller id", record.idea_id);
            MarketError::SellerUnknown
        })?;
    if seller == viewer.id {
        return Err(MarketError::SelfContact);
    }
    Ok(ChatTarget {
        user_id: seller.to_string(),
        user_name: record.username.clone(),
    })
}
