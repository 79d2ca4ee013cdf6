//! One-shot confirmation messages that survive a single redirect.
//!
//! A mutating request fills a [`Flash`] and hands it back as a `flash`
//! cookie on its redirect; the next page view reads the cookie, shows the
//! messages and clears it. Nothing here touches the store.

use std::convert::Infallible;

use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::request::Parts;
use axum::http::{HeaderMap, HeaderValue};
use axum::response::{IntoResponse, Redirect, Response};
use url::form_urlencoded;

const COOKIE_NAME: &str = "flash";
const MESSAGE_KEY: &str = "m";

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Flash {
    messages: Vec<String>,
}

impl Flash {
    pub fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }

    /// Messages carried by the request's `flash` cookie, if any.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let messages = headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| {
                let (name, encoded) = pair.trim().split_once('=')?;
                (name == COOKIE_NAME).then_some(encoded)
            })
            .flat_map(|encoded| {
                form_urlencoded::parse(encoded.as_bytes())
                    .filter(|(key, _)| key == MESSAGE_KEY)
                    .map(|(_, message)| message.into_owned())
                    .collect::<Vec<_>>()
            })
            .collect();

        Self { messages }
    }

    pub fn set_cookie(&self) -> Option<HeaderValue> {
        if self.is_empty() {
            return None;
        }
        let encoded = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.messages.iter().map(|m| (MESSAGE_KEY, m.as_str())))
            .finish();
        HeaderValue::from_str(&format!(
            "{COOKIE_NAME}={encoded}; Path=/; HttpOnly; SameSite=Lax"
        ))
        .ok()
    }

    pub fn clear_cookie() -> HeaderValue {
        HeaderValue::from_static("flash=; Path=/; Max-Age=0")
    }

    /// 303 to `to`, carrying these messages to the page it lands on.
    pub fn redirect(self, to: &str) -> Response {
        let mut response = Redirect::to(to).into_response();
        if let Some(cookie) = self.set_cookie() {
            response.headers_mut().append(SET_COOKIE, cookie);
        }
        response
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Flash
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Flash::from_headers(&parts.headers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers_with_cookie(cookie: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(cookie).unwrap());
        headers
    }

    #[test]
    fn test_empty_flash_sets_no_cookie() {
        assert!(Flash::default().set_cookie().is_none());
    }

    #[test]
    fn test_cookie_carries_messages_to_next_request() {
        let mut flash = Flash::default();
        flash.push("Carteira criada com sucesso!");
        flash.push("Ação excluída com sucesso!");

        let set_cookie = flash.set_cookie().unwrap();
        let pair = set_cookie.to_str().unwrap().split(';').next().unwrap().to_string();

        let restored = Flash::from_headers(&headers_with_cookie(&pair));
        assert_eq!(restored, flash);
    }

    #[test]
    fn test_cookie_name_must_match_exactly() {
        let headers = headers_with_cookie("oldflash=m=stale; flash=m=fresh");
        assert_eq!(Flash::from_headers(&headers).into_messages(), vec!["fresh".to_string()]);

        let clear = Flash::clear_cookie();
        assert!(clear.to_str().unwrap().starts_with(&format!("{COOKIE_NAME}=;")));
    }

    #[test]
    fn test_other_cookies_are_ignored() {
        let headers = headers_with_cookie("session=abc; flash=m=Ol%C3%A1; theme=dark");
        let flash = Flash::from_headers(&headers);
        assert_eq!(flash.into_messages(), vec!["Olá".to_string()]);
    }

    #[test]
    fn test_redirect_is_see_other_with_cookie() {
        let mut flash = Flash::default();
        flash.push("Ação atualizada com sucesso!");

        let response = flash.redirect("/carteira/7");
        assert_eq!(response.status(), axum::http::StatusCode::SEE_OTHER);
        assert_eq!(response.headers()["location"], "/carteira/7");
        assert!(response.headers()[SET_COOKIE].to_str().unwrap().starts_with("flash=m="));
    }
}
