use crate::components::icons::{IconMoon, IconSun};
use crate::core::theme::ThemeMode;
use yew::prelude::*;

/// Props for the light/dark switch.
#[derive(Properties, PartialEq)]
pub(crate) struct ThemeToggleProps {
    /// Mode currently applied.
    pub mode: ThemeMode,
    /// Additional CSS classes.
    #[prop_or_default]
    pub class: Classes,
    /// Fired when the user asks for the opposite mode.
    #[prop_or_default]
    pub ontoggle: Callback<()>,
}

#[function_component(ThemeToggle)]
pub(crate) fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let onclick = {
        let ontoggle = props.ontoggle.clone();
        Callback::from(move |_: MouseEvent| ontoggle.emit(()))
    };
    let icon = if props.mode.is_dark() {
        html! { <IconMoon class="size-5" /> }
    } else {
        html! { <IconSun class="size-5" /> }
    };

    html! {
        <button
            type="button"
            class={classes!("theme-toggle", "btn", "btn-ghost", "btn-square", props.class.clone())}
            aria-label={props.mode.toggle_label()}
            onclick={onclick}
        >
            {icon}
        </button>
    }
}
