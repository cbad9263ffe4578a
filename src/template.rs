use axum::{
    extract::{FromRequestParts, Query},
    http::{HeaderMap, StatusCode, header, request::Parts},
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use std::{convert::Infallible, str::FromStr};
use strum::{Display, EnumString};

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon of the mode the toggle switches to
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }
}

/// Presentation state threaded into every render.
///
/// Nothing about the theme or menu lives outside this value; links carry it
/// forward as query parameters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    pub theme: Theme,
    pub menu_open: bool,
}

impl RenderContext {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            menu_open: false,
        }
    }

    fn href(theme: Theme, menu_open: bool) -> String {
        if menu_open {
            format!("/?theme={theme}&menu=true")
        } else {
            format!("/?theme={theme}")
        }
    }

    pub fn toggle_theme_href(&self) -> String {
        Self::href(self.theme.toggled(), self.menu_open)
    }

    pub fn toggle_menu_href(&self) -> String {
        Self::href(self.theme, !self.menu_open)
    }

    /// Section link; following it closes the menu
    pub fn section_href(&self, section: &str) -> String {
        format!("{}#{section}", Self::href(self.theme, false))
    }

    /// Form action keeping the current theme
    pub fn contact_action(&self) -> String {
        format!("/contact?theme={}", self.theme)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub theme: Option<String>,
    pub menu: Option<String>,
}

impl PageQuery {
    /// Unknown values fall back to the default theme and a closed menu
    pub fn context(&self, default_theme: Theme) -> RenderContext {
        let theme = self
            .theme
            .as_deref()
            .and_then(|t| Theme::from_str(t).ok())
            .unwrap_or(default_theme);

        let menu_open = matches!(self.menu.as_deref(), Some("true" | "1" | "open"));

        RenderContext { theme, menu_open }
    }
}

pub struct Template {
    pub context: RenderContext,
    /// Request made by twinspark, answered with a fragment
    pub partial: bool,
}

impl Template {
    pub fn new(context: RenderContext) -> Self {
        Self {
            context,
            partial: false,
        }
    }

    pub fn partial(mut self, partial: bool) -> Self {
        self.partial = partial;
        self
    }

    /// twinspark marks its requests with a `ts-request` header and a
    /// `text/html+partial` accept type
    pub fn is_partial_request(headers: &HeaderMap) -> bool {
        headers.contains_key("ts-request")
            || headers
                .get(header::ACCEPT)
                .and_then(|v| v.to_str().ok())
                .is_some_and(|v| v.contains("text/html+partial"))
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        match template.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!(err = %err, "failed to render template");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to render template. Error: {err}"),
                )
                    .into_response()
            }
        }
    }
}

impl FromRequestParts<crate::routes::AppState> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &crate::routes::AppState,
    ) -> Result<Self, Self::Rejection> {
        let query = Query::<PageQuery>::try_from_uri(&parts.uri)
            .map(|Query(q)| q)
            .unwrap_or_default();

        Ok(
            Template::new(query.context(state.config.site.default_theme))
                .partial(Template::is_partial_request(&parts.headers)),
        )
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate {
    pub ctx: RenderContext,
    pub profile: &'static crate::content::Profile,
}
