use axum::{
    Extension, Router,
    routing::{MethodRouter, delete, get},
};
use tower_http::trace::TraceLayer;

use crate::{
    controllers::{
        comment::{create_comment, delete_comment, list_comments},
        page::{self, not_found},
        post::{create_post, delete_post, find_post, list_categories, list_posts},
    },
    infra::{context::AppContext, cors},
};

fn page_route(name: &'static str) -> MethodRouter {
    get(move |Extension(ctx): Extension<AppContext>| async move { page::render(&ctx, name).await })
}

pub fn create_router(ctx: AppContext) -> Router {
    let app : Router = Router::new()
        .route("/", page_route("index.html"))
        .route("/index.html", page_route("index.html"))
        .route("/404.html", page_route("404.html"))
        .route("/about", page_route("about.html"))
        .route("/about.html", page_route("about.html"))
        .route("/cert", page_route("cert.html"))
        .route("/cert.html", page_route("cert.html"))
        .route("/new-post", page_route("new-post.html"))
        .route("/new-post.html", page_route("new-post.html"))
        .route("/post", page_route("post.html"))
        .route("/post.html", page_route("post.html"))
        .route("/post/:id", page_route("post.html"))
        .route("/posts", page_route("posts.html"))
        .route("/posts.html", page_route("posts.html"))
        .route("/contact", page_route("contact.html"))
        .route("/contact.html", page_route("contact.html"))
        .route("/api/posts", get(list_posts).post(create_post))
        .route("/api/posts/:id", get(find_post).delete(delete_post))
        .route("/api/categories", get(list_categories))
        .route("/api/posts/:id/comments", get(list_comments).post(create_comment))
        .route("/api/comments/:id", delete(delete_comment))
        .fallback(not_found)
        .layer(Extension(ctx))
        .layer(cors::create_cors())
        .layer(TraceLayer::new_for_http());
    app
}
