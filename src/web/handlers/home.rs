//! Landing page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use axum::response::IntoResponse;

use crate::domain::entities::Post;
use crate::error::AppError;
use crate::state::AppState;

/// A feature card in the landing page grid.
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        icon: "🚀",
        title: "Performance",
        description: "Experiência ultra-rápida com tecnologia de ponta que garante o melhor desempenho possível.",
    },
    Feature {
        icon: "🎨",
        title: "Design",
        description: "Interface moderna e intuitiva criada com as melhores práticas de UX/UI design.",
    },
    Feature {
        icon: "🔒",
        title: "Segurança",
        description: "Seus dados protegidos com as mais avançadas tecnologias de criptografia e segurança.",
    },
];

/// Template for the landing page.
///
/// Renders `templates/home.html` with the hero header, feature cards,
/// the latest posts and the call-to-action section.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub features: &'static [Feature],
    pub posts: Vec<Post>,
}

/// Renders the landing page.
///
/// # Endpoint
///
/// `GET /`
///
/// # Errors
///
/// The posts feed is required: when the content API fails and nothing is
/// cached, the render fails with 502 Bad Gateway.
pub async fn home_handler(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let posts = state.post_service.get_posts().await?;

    Ok(HomeTemplate {
        features: FEATURES,
        posts,
    })
}
