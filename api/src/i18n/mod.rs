//! Language negotiation for user-facing messages.
//!
//! The product ships in Russian with an English fallback for API consumers;
//! the preference is read from the `Accept-Language` header per request.

use actix_web::http::header;
use actix_web::HttpRequest;

/// Language preference for response messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Russian,
}

impl Language {
    /// Detect language preference from the Accept-Language header.
    ///
    /// Defaults to Russian, the product's primary language.
    pub fn from_request(req: &HttpRequest) -> Self {
        let header_str = match req
            .headers()
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|value| value.to_str().ok())
        {
            Some(value) => value,
            None => return Language::Russian,
        };

        // Example: "ru-RU,ru;q=0.9,en-US;q=0.8,en;q=0.7"
        let mut preferred = Language::Russian;
        let mut max_quality = 0.0_f32;

        for entry in header_str.split(',') {
            let mut parts = entry.trim().split(';');
            let tag = parts.next().unwrap_or("").to_lowercase();
            let quality = parts
                .next()
                .and_then(|q| q.trim().strip_prefix("q=").map(str::to_string))
                .and_then(|q| q.parse::<f32>().ok())
                .unwrap_or(1.0);

            if tag.starts_with("ru") && quality > max_quality {
                preferred = Language::Russian;
                max_quality = quality;
            } else if tag.starts_with("en") && quality > max_quality {
                preferred = Language::English;
                max_quality = quality;
            }
        }

        preferred
    }

    /// Pick the message text for this language
    pub fn pick<'a>(&self, en: &'a str, ru: &'a str) -> &'a str {
        match self {
            Language::English => en,
            Language::Russian => ru,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_detects_russian() {
        let req = TestRequest::default()
            .insert_header(("Accept-Language", "ru-RU,ru;q=0.9,en-US;q=0.8"))
            .to_http_request();
        assert_eq!(Language::from_request(&req), Language::Russian);
    }

    #[test]
    fn test_detects_english() {
        let req = TestRequest::default()
            .insert_header(("Accept-Language", "en-US,en;q=0.9,ru;q=0.8"))
            .to_http_request();
        assert_eq!(Language::from_request(&req), Language::English);
    }

    #[test]
    fn test_defaults_to_russian() {
        let req = TestRequest::default().to_http_request();
        assert_eq!(Language::from_request(&req), Language::Russian);
    }

    #[test]
    fn test_pick() {
        assert_eq!(Language::Russian.pick("Signed in", "Успешный вход"), "Успешный вход");
        assert_eq!(Language::English.pick("Signed in", "Успешный вход"), "Signed in");
    }
}
