//! Fixed dark/light toggle button.

use crate::components::icons::{MoonIcon, SunIcon};
use crate::core::theme::ThemeMode;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ThemeToggleProps {
    pub theme: ThemeMode,
    pub on_toggle: Callback<()>,
}

#[function_component(ThemeToggle)]
pub(crate) fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };
    let variant = match props.theme {
        ThemeMode::Dark => "btn-ghost",
        ThemeMode::Light => "btn-outline",
    };
    html! {
        <button
            type="button"
            class={classes!("btn", "btn-square", "btn-sm", "fixed", "top-4", "right-4", variant)}
            aria-label="Toggle dark mode"
            {onclick}
        >
            {match props.theme {
                ThemeMode::Dark => html! { <SunIcon /> },
                ThemeMode::Light => html! { <MoonIcon /> },
            }}
        </button>
    }
}
