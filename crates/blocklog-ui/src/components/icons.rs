//! Inline SVG icons for the theme toggle.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct IconProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub title: Option<AttrValue>,
}

fn icon_svg(props: &IconProps, body: Html) -> Html {
    let aria_hidden = props.title.is_none().then_some(AttrValue::from("true"));
    html! {
        <svg
            class={props.class.clone()}
            width="20"
            height="20"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-linecap="round"
            stroke-linejoin="round"
            stroke-width="2"
            role="img"
            aria-hidden={aria_hidden}
        >
            {props.title.clone().map(|title| html! { <title>{title}</title> }).unwrap_or_default()}
            {body}
        </svg>
    }
}

/// Shown in dark mode; switches to light.
#[function_component(SunIcon)]
pub(crate) fn sun_icon(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! {
            <>
                <circle cx="12" cy="12" r="4" />
                <path d="M12 2v2M12 20v2M4.93 4.93l1.41 1.41M17.66 17.66l1.41 1.41M2 12h2M20 12h2M6.34 17.66l-1.41 1.41M19.07 4.93l-1.41 1.41" />
            </>
        },
    )
}

/// Shown in light mode; switches to dark.
#[function_component(MoonIcon)]
pub(crate) fn moon_icon(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! {
            <path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9z" />
        },
    )
}
