use crate::constants::{CAUSTIC_SELECTOR, RIPPLE_SELECTOR};
use crate::core::style;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The single dynamically-injected `<style>` element in the document head.
///
/// Class-wide rules for the caustic and ripple classes are rewritten here
/// as text, one rule per selector, instead of restyling every element
/// individually. Only the UI thread ever writes it.
pub struct StyleBlock {
    el: web::HtmlStyleElement,
}

impl StyleBlock {
    /// Create and append the block, pre-seeded with empty rules for every
    /// selector that will be rewritten later. Rewrites for unseeded
    /// selectors are dropped.
    pub fn install(document: &web::Document) -> anyhow::Result<Self> {
        let el = document
            .create_element("style")
            .map_err(|e| anyhow::anyhow!("create <style>: {e:?}"))?
            .dyn_into::<web::HtmlStyleElement>()
            .map_err(|e| anyhow::anyhow!("not a style element: {e:?}"))?;
        el.set_text_content(Some(&style::seed(&[CAUSTIC_SELECTOR, RIPPLE_SELECTOR])));
        let head = document
            .head()
            .ok_or_else(|| anyhow::anyhow!("document has no <head>"))?;
        head.append_child(&el)
            .map_err(|e| anyhow::anyhow!("append <style>: {e:?}"))?;
        Ok(Self { el })
    }

    /// Replace the rule for `selector` with one holding `declarations`.
    /// Idempotent; a selector that was never seeded is logged and dropped.
    pub fn rewrite(&self, selector: &str, declarations: &str) {
        let css = self.el.text_content().unwrap_or_default();
        let new_rule = style::rule(selector, declarations);
        match style::replace_rule(&css, selector, &new_rule) {
            Some(next) => self.el.set_text_content(Some(&next)),
            None => log::warn!("[style] no seeded rule for {selector}; rewrite dropped"),
        }
    }
}
