use std::{
    fmt::{Debug, Display},
    sync::atomic::{AtomicBool, Ordering},
};

use actix_web::{
    body::BoxBody, http::header::ContentType, http::StatusCode, HttpResponse,
    HttpResponseBuilder, ResponseError,
};

use crate::templates;

pub static IS_DEBUG_ON: AtomicBool = AtomicBool::new(false);

#[derive(Debug)]
pub struct PageError {
    message: String,
    status_code: StatusCode,
}

impl PageError {
    pub fn new(message: impl Into<String>, status_code: StatusCode) -> Self {
        Self {
            message: message.into(),
            status_code,
        }
    }

    fn body(&self, with_detail: bool) -> String {
        let detail = with_detail.then_some(self.message.as_str());
        templates::render_error(self.status_code, detail)
            .unwrap_or_else(|_| self.status_code.to_string())
    }
}

impl Display for PageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageError")
            .field("message", &self.message)
            .field("status_code", &self.status_code)
            .finish()
    }
}

impl ResponseError for PageError {
    fn status_code(&self) -> StatusCode {
        self.status_code
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        HttpResponseBuilder::new(self.status_code)
            .insert_header(ContentType::html())
            .body(self.body(IS_DEBUG_ON.load(Ordering::Relaxed)))
    }
}

pub fn response_from_error(message: impl Into<String>, status_code: StatusCode) -> HttpResponse {
    PageError::new(message, status_code).error_response()
}
