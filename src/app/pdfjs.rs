//! Bindings to the pdf.js bridge module.
//!
//! Outside the browser there is no pdf.js, so the server build gets stubs that
//! report the document as unavailable. Loading only ever starts from client
//! effects, so the stubs are never reached during SSR.

use crate::{
    error::{Result, SiteError},
    resume::RenderOutcome,
};

#[cfg(feature = "hydrate")]
mod js {
    use leptos::web_sys::HtmlCanvasElement;
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen(module = "/pdfjs_bridge.js")]
    extern "C" {
        /// Resolves to the document's page count.
        #[wasm_bindgen(catch, js_name = loadPdfDocument)]
        pub async fn load_pdf_document(url: &str) -> Result<JsValue, JsValue>;

        /// Resolves to `true` once drawn, `false` if a newer render for the canvas won.
        #[wasm_bindgen(catch, js_name = renderPdfPage)]
        pub async fn render_pdf_page(
            canvas: &HtmlCanvasElement,
            url: &str,
            page_number: u32,
            width: f64,
            scale: f64,
        ) -> Result<JsValue, JsValue>;
    }
}

#[cfg(feature = "hydrate")]
fn describe(err: wasm_bindgen::JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

#[cfg(feature = "hydrate")]
pub async fn load_document(path: &str) -> Result<u32> {
    let pages = js::load_pdf_document(path)
        .await
        .map_err(|e| SiteError::DocumentLoad {
            path: path.to_string(),
            reason: describe(e),
        })?;
    match pages.as_f64() {
        Some(n) if n >= 1.0 => Ok(n as u32),
        _ => Err(SiteError::DocumentLoad {
            path: path.to_string(),
            reason: "document has no pages".to_string(),
        }),
    }
}

#[cfg(feature = "hydrate")]
pub async fn render_page(
    canvas: &leptos::web_sys::HtmlCanvasElement,
    path: &str,
    page: u32,
    width: u32,
    scale: f64,
) -> Result<RenderOutcome> {
    js::render_pdf_page(canvas, path, page, f64::from(width), scale)
        .await
        .map(|drawn| RenderOutcome::from_drawn(drawn.as_bool().unwrap_or(false)))
        .map_err(|e| SiteError::PageRender {
            page,
            reason: describe(e),
        })
}

#[cfg(not(feature = "hydrate"))]
pub async fn load_document(path: &str) -> Result<u32> {
    Err(SiteError::DocumentLoad {
        path: path.to_string(),
        reason: "pdf.js is only available in the browser".to_string(),
    })
}

#[cfg(not(feature = "hydrate"))]
pub async fn render_page(
    _canvas: &leptos::web_sys::HtmlCanvasElement,
    _path: &str,
    page: u32,
    _width: u32,
    _scale: f64,
) -> Result<RenderOutcome> {
    Err(SiteError::PageRender {
        page,
        reason: "pdf.js is only available in the browser".to_string(),
    })
}
