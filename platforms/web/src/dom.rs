use crate::assets::embedded_stylesheet;
use gloo_events::EventListener;
use ncd_ui::{BootError, HostDocument, RenderRuntime, Stylesheet, StylesheetSource};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};
use yew::prelude::*;
use yew::{AppHandle, Renderer};

/// The live browser document.
pub struct DomDocument {
    document: Document,
}

impl DomDocument {
    /// Binds to the document of the current window.
    pub fn current() -> Result<Self, BootError> {
        let window =
            web_sys::window().ok_or_else(|| BootError::Host("No window object available".into()))?;
        let document = window
            .document()
            .ok_or_else(|| BootError::Host("No document available".into()))?;

        Ok(Self { document })
    }

    fn link_element(&self, sheet: &Stylesheet, href: &str) -> Result<Element, JsValue> {
        let link = self.document.create_element("link")?;
        link.set_attribute("rel", "stylesheet")?;
        link.set_attribute("href", href)?;
        link.set_attribute("data-stylesheet", &sheet.name)?;

        // A missing file only shows up once the browser tries to fetch it
        let name = sheet.name.clone();
        let href = href.to_string();
        EventListener::new(&link, "error", move |_| {
            log::error!("Failed to load stylesheet {} from {}", name, href);
        })
        .forget();

        Ok(link)
    }

    fn style_element(&self, sheet: &Stylesheet, css: &str) -> Result<Element, JsValue> {
        let style = self.document.create_element("style")?;
        style.set_attribute("data-stylesheet", &sheet.name)?;
        style.set_text_content(Some(css));
        Ok(style)
    }
}

fn asset_error(sheet: &Stylesheet, reason: impl Into<String>) -> BootError {
    BootError::AssetLoad {
        name: sheet.name.clone(),
        reason: reason.into(),
    }
}

/// Resolves the CSS of an embedded stylesheet, failing with `AssetLoad` for unknown keys.
fn embedded_css(sheet: &Stylesheet, key: &str) -> Result<&'static str, BootError> {
    embedded_stylesheet(key).ok_or_else(|| asset_error(sheet, format!("{key} is not embedded")))
}

impl HostDocument for DomDocument {
    type Node = Element;

    fn find_mount_point(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn register_stylesheet(&mut self, sheet: &Stylesheet) -> Result<(), BootError> {
        let head = self
            .document
            .head()
            .ok_or_else(|| BootError::Host("Document has no <head>".into()))?;

        let element = match &sheet.source {
            StylesheetSource::Href(href) => self.link_element(sheet, href),
            StylesheetSource::Embedded(key) => {
                let css = embedded_css(sheet, key)?;
                self.style_element(sheet, css)
            }
        }
        .map_err(|e| asset_error(sheet, format!("{:?}", e)))?;

        head.append_child(&element)
            .map_err(|e| asset_error(sheet, format!("{:?}", e)))?;
        Ok(())
    }
}

#[derive(Properties, PartialEq)]
pub struct ShellProps {
    pub tree: Html,
}

/// Top-level component handed to Yew. It renders whatever tree it is given, so later
/// renders into the same root reconcile against the previous tree.
#[function_component(Shell)]
pub fn shell(props: &ShellProps) -> Html {
    props.tree.clone()
}

/// A render root: the host element plus the Yew app once it has been mounted.
pub struct DomRoot {
    host: Element,
    handle: Option<AppHandle<Shell>>,
}

#[derive(Default)]
pub struct YewRuntime;

impl RenderRuntime for YewRuntime {
    type Node = Element;
    type Root = DomRoot;
    type Tree = Html;

    fn create_root(&mut self, node: Element) -> Result<DomRoot, BootError> {
        Ok(DomRoot {
            host: node,
            handle: None,
        })
    }

    fn render(&mut self, root: &mut DomRoot, tree: Html) -> Result<(), BootError> {
        match root.handle.as_mut() {
            Some(handle) => handle.update(ShellProps { tree }),
            None => {
                let handle =
                    Renderer::<Shell>::with_root_and_props(root.host.clone(), ShellProps { tree })
                        .render();
                root.handle = Some(handle);
            }
        }
        Ok(())
    }
}
