use crate::app::api::ApiCtx;
use crate::components::status::EmptyState;
use crate::core::theme::toggle_theme;
use crate::features::logs::view::LogsPage;
use preferences::{
    LocalPreferenceStore, ROOT_ID, apply_theme, load_config, load_theme_mode, log_storage_error,
};
use routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

pub(crate) mod api;
mod preferences;
mod routes;

#[function_component(BlocklogApp)]
pub(crate) fn blocklog_app() -> Html {
    let theme = use_state(load_theme_mode);
    let api_ctx = use_memo(|_| ApiCtx::new(load_config()), ());

    {
        let theme = *theme;
        use_effect_with_deps(
            move |_| {
                apply_theme(theme);
                || ()
            },
            theme,
        );
    }

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |()| {
            let mut next = *theme;
            if let Err(err) = toggle_theme(&mut next, &mut LocalPreferenceStore) {
                log_storage_error(&err);
            }
            theme.set(next);
        })
    };

    let current_theme = *theme;
    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <BrowserRouter>
                <Switch<Route> render={move |route| match route {
                    Route::Logs => html! {
                        <LogsPage theme={current_theme} on_toggle_theme={on_toggle_theme.clone()} />
                    },
                    Route::NotFound => html! {
                        <EmptyState
                            title="Not found"
                            description={AttrValue::from("Open the viewer with ?d=<id> to load a log set.")}
                        />
                    },
                }} />
            </BrowserRouter>
        </ContextProvider<ApiCtx>>
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id(ROOT_ID) {
        yew::Renderer::<BlocklogApp>::with_root(root).render();
    } else {
        yew::Renderer::<BlocklogApp>::new().render();
    }
}
