//! Loading, error and empty panels for the page body.
//!
//! # Design
//! - Keep copy entirely prop-driven.
//! - Each panel replaces the card list; none of them render alongside cards.

use yew::prelude::*;

#[function_component(LoadingPanel)]
pub(crate) fn loading_panel() -> Html {
    html! {
        <div class="flex items-center justify-center h-screen">
            <span class="loading loading-spinner loading-lg" role="status" aria-label="Loading logs" />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ErrorPanelProps {
    pub message: AttrValue,
}

#[function_component(ErrorPanel)]
pub(crate) fn error_panel(props: &ErrorPanelProps) -> Html {
    html! {
        <div role="alert" class="alert alert-error justify-center">
            <span>{format!("Error: {}", props.message)}</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct EmptyStateProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(EmptyState)]
pub(crate) fn empty_state(props: &EmptyStateProps) -> Html {
    html! {
        <div class={classes!("empty-state", "text-center", "py-12", props.class.clone())}>
            <h4 class="text-lg font-semibold">{props.title.clone()}</h4>
            {props.description.clone().map(|text| html! {
                <p class="opacity-70">{text}</p>
            }).unwrap_or_default()}
        </div>
    }
}
