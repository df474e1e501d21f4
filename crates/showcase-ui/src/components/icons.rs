use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct IconProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub title: Option<AttrValue>,
}

fn icon_svg(props: &IconProps, body: Html) -> Html {
    let title = props.title.clone();
    let aria_hidden = title.is_none().then_some(AttrValue::from("true"));
    html! {
        <svg
            class={props.class.clone()}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-linecap="round"
            stroke-linejoin="round"
            stroke-width="2"
            role="img"
            aria-hidden={aria_hidden}
            aria-label={title.clone()}
        >
            {title.map(|text| html! { <title>{text}</title> }).unwrap_or_default()}
            {body}
        </svg>
    }
}

#[function_component(IconChevronDown)]
pub(crate) fn icon_chevron_down(props: &IconProps) -> Html {
    icon_svg(props, html! { <path d="m6 9l6 6l6-6" /> })
}

#[function_component(IconMoon)]
pub(crate) fn icon_moon(props: &IconProps) -> Html {
    icon_svg(props, html! { <path d="M12 3a6 6 0 0 0 9 9a9 9 0 1 1-9-9" /> })
}

#[function_component(IconSun)]
pub(crate) fn icon_sun(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! {
            <>
                <circle cx="12" cy="12" r="4" />
                <path d="M12 2v2m0 16v2M4.93 4.93l1.41 1.41m11.32 11.32l1.41 1.41M2 12h2m16 0h2M6.34 17.66l-1.41 1.41M19.07 4.93l-1.41 1.41" />
            </>
        },
    )
}
