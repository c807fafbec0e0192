//! [`MetadataPort`] over the live document.
//!
//! Every write to the page title, description tag, structured-data script and
//! off-screen crawler content goes through here.

use crate::dom::{document, ensure_element, js_error_message};
use arcade_core::MetadataPort;
use serde_json::Value;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

pub const STRUCTURED_DATA_ID: &str = "structured-data";
pub const SEO_CONTENT_ID: &str = "seo-content";
const DESCRIPTION_SELECTOR: &str = "meta[name='description']";

#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentMetadata;

impl DocumentMetadata {
    fn description_meta(doc: &Document) -> Result<Element, JsValue> {
        if let Some(meta) = doc.query_selector(DESCRIPTION_SELECTOR)? {
            return Ok(meta);
        }
        let head = doc
            .head()
            .ok_or_else(|| JsValue::from_str("document has no <head>"))?;
        let meta = doc.create_element("meta")?;
        meta.set_attribute("name", "description")?;
        head.append_child(&meta)?;
        Ok(meta)
    }

    fn structured_data_script(doc: &Document) -> Result<Element, JsValue> {
        let head = doc
            .head()
            .ok_or_else(|| JsValue::from_str("document has no <head>"))?;
        let script = ensure_element(doc, &head, "script", STRUCTURED_DATA_ID)?;
        script.set_attribute("type", "application/ld+json")?;
        Ok(script)
    }

    fn show_hidden_content(doc: &Document, markup: &str) -> Result<(), JsValue> {
        let body = doc
            .body()
            .ok_or_else(|| JsValue::from_str("document has no <body>"))?;
        let host = ensure_element(doc, &body, "div", SEO_CONTENT_ID)?;
        host.set_class_name("seo-offscreen");
        host.set_inner_html(markup);
        Ok(())
    }
}

fn report(action: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        log::warn!("could not {action}: {}", js_error_message(&err));
    }
}

impl MetadataPort for DocumentMetadata {
    fn title(&self) -> String {
        document().map(|doc| doc.title()).unwrap_or_default()
    }

    fn set_title(&mut self, title: &str) {
        if let Some(doc) = document() {
            doc.set_title(title);
        }
    }

    fn description(&self) -> String {
        document()
            .and_then(|doc| doc.query_selector(DESCRIPTION_SELECTOR).ok().flatten())
            .and_then(|meta| meta.get_attribute("content"))
            .unwrap_or_default()
    }

    fn set_description(&mut self, description: &str) {
        let Some(doc) = document() else {
            return;
        };
        report(
            "update the description tag",
            Self::description_meta(&doc).and_then(|meta| meta.set_attribute("content", description)),
        );
    }

    fn set_structured_data(&mut self, data: &Value) {
        let Some(doc) = document() else {
            return;
        };
        report(
            "write structured data",
            Self::structured_data_script(&doc)
                .map(|script| script.set_text_content(Some(&data.to_string()))),
        );
    }

    fn set_hidden_content(&mut self, markup: Option<&str>) {
        let Some(doc) = document() else {
            return;
        };
        match markup {
            Some(markup) => report(
                "show crawler content",
                Self::show_hidden_content(&doc, markup),
            ),
            None => {
                if let Some(host) = doc.get_element_by_id(SEO_CONTENT_ID) {
                    host.remove();
                }
            }
        }
    }
}
