//! Per-browser table layout persistence, stored in the caller's session.

use axum::Json;
use axum::extract::Path;
use auditdesk_core::AppError;
use auditdesk_domain::TableLayout;
use tower_sessions::Session;

use crate::dto::{Envelope, SuccessResponse, TableLayoutDto};
use crate::error::ApiResult;
use crate::session::layout_key;

pub async fn get_layout(
    Path(page): Path<String>,
    session: Session,
) -> ApiResult<Json<Envelope<TableLayoutDto>>> {
    let layout = session
        .get::<TableLayout>(&layout_key(&page))
        .await
        .map_err(|error| AppError::Internal(format!("failed to read table layout: {error}")))?
        .ok_or_else(|| AppError::NotFound(format!("no saved layout for page '{page}'")))?;

    Ok(Json(Envelope::ok(TableLayoutDto::from(&layout))))
}

pub async fn put_layout(
    Path(page): Path<String>,
    session: Session,
    Json(request): Json<TableLayoutDto>,
) -> ApiResult<Json<SuccessResponse>> {
    let layout = request.into_layout()?;

    session
        .insert(&layout_key(&page), &layout)
        .await
        .map_err(|error| AppError::Internal(format!("failed to save table layout: {error}")))?;

    Ok(Json(SuccessResponse::ok()))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use auditdesk_domain::{ColumnLayout, TableLayout};
    use tower_sessions::{MemoryStore, Session};

    use crate::session::layout_key;

    fn layout() -> TableLayout {
        TableLayout::new(vec![
            ColumnLayout {
                key: "key".to_owned(),
                width: 100,
            },
            ColumnLayout {
                key: "summary".to_owned(),
                width: 320,
            },
            ColumnLayout {
                key: "status".to_owned(),
                width: 120,
            },
        ])
        .unwrap_or_else(|_| panic!("test layout"))
    }

    #[tokio::test]
    async fn layout_round_trips_through_the_session() {
        let session = Session::new(None, Arc::new(MemoryStore::default()), None);
        let saved = layout();

        let inserted = session.insert(&layout_key("findings"), &saved).await;
        assert!(inserted.is_ok());

        let loaded = session
            .get::<TableLayout>(&layout_key("findings"))
            .await
            .unwrap_or_default();
        assert_eq!(loaded, Some(saved));
    }

    #[tokio::test]
    async fn layouts_are_scoped_per_page() {
        let session = Session::new(None, Arc::new(MemoryStore::default()), None);

        let inserted = session.insert(&layout_key("findings"), &layout()).await;
        assert!(inserted.is_ok());

        let other_page = session
            .get::<TableLayout>(&layout_key("tasks"))
            .await
            .unwrap_or_default();
        assert!(other_page.is_none());
    }
}
