use axum::{extract::Path, Json};

use crate::errors::AppError;
use crate::themes::{all_themes, theme_config, Theme, ThemeConfig};

/// GET /api/v1/themes
pub async fn handle_list_themes() -> Json<&'static [ThemeConfig]> {
    Json(all_themes())
}

/// GET /api/v1/themes/:id
pub async fn handle_get_theme(
    Path(id): Path<String>,
) -> Result<Json<&'static ThemeConfig>, AppError> {
    let theme = Theme::from_id(&id)
        .ok_or_else(|| AppError::NotFound(format!("Unknown theme '{id}'")))?;
    Ok(Json(theme_config(theme)))
}
