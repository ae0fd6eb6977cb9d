use yew::prelude::*;

/// The application root. It takes no props.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div class="app-shell">
            <nav class="navbar navbar-dark bg-dark">
                <div class="container-fluid">
                    <span class="navbar-brand">{"Novel Class Discovery"}</span>
                </div>
            </nav>
            <main class="container py-4">
                <p class="lead">{"Select a dataset to begin."}</p>
            </main>
        </div>
    }
}
