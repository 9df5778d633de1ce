use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::Html;
use axum::Router;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

type Routes = Arc<HashMap<String, (StatusCode, String)>>;

/// A tiny HTTP server serving canned pages by path, bound to a random local port.
/// Unknown paths get a 404.
pub struct FixtureSite {
    pub base_url: String,
    handle: JoinHandle<()>,
}

impl FixtureSite {
    pub async fn serve(pages: &[(&str, u16, String)]) -> Self {
        let routes: Routes = Arc::new(
            pages
                .iter()
                .map(|(path, status, body)| {
                    let status = StatusCode::from_u16(*status).expect("valid status code");
                    (path.to_string(), (status, body.clone()))
                })
                .collect(),
        );

        let app = Router::new().fallback(canned_page).with_state(routes);

        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind listener");
        let addr = listener.local_addr().expect("local addr");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("fixture server");
        });

        Self {
            base_url: format!("http://{addr}/"),
            handle,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

impl Drop for FixtureSite {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn canned_page(State(routes): State<Routes>, uri: Uri) -> (StatusCode, Html<String>) {
    match routes.get(uri.path()) {
        Some((status, body)) => (*status, Html(body.clone())),
        None => (StatusCode::NOT_FOUND, Html("not found".to_string())),
    }
}

pub fn quote_div(text: &str, author: &str, tags: &[&str]) -> String {
    let tags = tags
        .iter()
        .map(|t| format!(r#"<a class="tag" href="/tag/{t}/page/1/">{t}</a>"#))
        .collect::<String>();
    format!(
        r#"<div class="quote" itemscope itemtype="http://schema.org/CreativeWork">
            <span class="text" itemprop="text">{text}</span>
            <span>by <small class="author" itemprop="author">{author}</small>
            <a href="/author/x">(about)</a></span>
            <div class="tags">Tags: {tags}</div>
        </div>"#
    )
}

/// A listing page; `next` is the href of the pager's "next" link, if any.
pub fn listing_page(quotes: &[String], next: Option<&str>) -> String {
    let pager = match next {
        Some(href) => format!(
            r#"<li class="next"><a href="{href}">Next <span aria-hidden="true">&rarr;</span></a></li>"#
        ),
        None => String::new(),
    };
    format!(
        r#"<!DOCTYPE html><html lang="en"><head><title>Quotes</title></head><body>
        <div class="container"><div class="row"><div class="col-md-8">
        {}
        <nav><ul class="pager">{pager}</ul></nav>
        </div></div></div></body></html>"#,
        quotes.concat()
    )
}
