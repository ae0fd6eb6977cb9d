use ncd_ui::diagnostics::duplicate_ids;
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StrictModeProps {
    #[prop_or_default]
    pub children: Html,
}

/// Renders its children unchanged. Debug builds additionally run development checks
/// against the document once the wrapped tree has been mounted.
#[function_component(StrictMode)]
pub fn strict_mode(props: &StrictModeProps) -> Html {
    use_effect_with((), |_| {
        if cfg!(debug_assertions) {
            run_checks();
        }
    });

    props.children.clone()
}

fn run_checks() {
    log::debug!("Strict mode active, running development checks");

    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let nodes = match document.query_selector_all("[id]") {
        Ok(nodes) => nodes,
        Err(e) => {
            log::warn!("Strict mode could not scan element ids: {:?}", e);
            return;
        }
    };

    let ids = (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .map(|element| element.id());

    for id in duplicate_ids(ids) {
        log::warn!("Element id #{} is used more than once in the document", id);
    }
}
