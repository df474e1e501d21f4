use crate::components::icons::IconChevronDown;
use crate::core::config::DEFAULT_ID_PREFIX;
use crate::core::disclosure::{
    DisclosureAction, DisclosureController, DisclosureOptions, RegionAttributes,
};
use crate::core::ids::UuidIds;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct AccordionProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Groups independent [`AccordionItem`]s; items keep their own state.
#[function_component(Accordion)]
pub(crate) fn accordion(props: &AccordionProps) -> Html {
    html! {
        <div class={classes!("accordion", "join", "join-vertical", "w-full", props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct AccordionItemProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub default_open: bool,
    #[prop_or_default]
    pub disabled: bool,
    /// Fixed identity; a generated one is used when absent or blank.
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or(AttrValue::Static(DEFAULT_ID_PREFIX))]
    pub id_prefix: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

impl Reducible for DisclosureController {
    type Action = DisclosureAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        if next == *self { self } else { Rc::new(next) }
    }
}

#[function_component(AccordionItem)]
pub(crate) fn accordion_item(props: &AccordionItemProps) -> Html {
    let controller = {
        let options = DisclosureOptions {
            default_open: props.default_open,
            disabled: props.disabled,
            id: props.id.as_ref().map(ToString::to_string),
        };
        let mut ids = UuidIds::new(props.id_prefix.to_string());
        use_reducer(move || DisclosureController::with_generator(options, &mut ids))
    };
    {
        let controller = controller.clone();
        use_effect_with_deps(
            move |disabled| {
                controller.dispatch(DisclosureAction::SetDisabled(*disabled));
                || ()
            },
            props.disabled,
        );
    }

    let onclick = {
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| controller.dispatch(DisclosureAction::Toggle))
    };

    let trigger = controller.trigger();
    let region = controller.region();

    html! {
        <div
            class={classes!(
                "accordion-item",
                "join-item",
                "border-b",
                trigger.disabled.then_some("opacity-50"),
                trigger.disabled.then_some("cursor-not-allowed")
            )}
        >
            <h3>
                <button
                    type="button"
                    id={trigger.id.clone()}
                    class="accordion-trigger flex w-full items-center justify-between px-6 py-4 text-left font-medium"
                    onclick={onclick}
                    aria-expanded={trigger.expanded.to_string()}
                    aria-controls={trigger.controls.clone()}
                    aria-disabled={trigger.disabled.to_string()}
                    disabled={trigger.disabled}
                >
                    <span>{props.title.clone()}</span>
                    <IconChevronDown
                        class={classes!(
                            "size-5",
                            "transition-transform",
                            trigger.indicator_rotated().then_some("rotate-180")
                        )}
                    />
                </button>
            </h3>
            <div
                id={region.id.clone()}
                role={RegionAttributes::ROLE}
                aria-labelledby={region.labelled_by.clone()}
                class={classes!("accordion-region", "overflow-hidden", (!region.visible).then_some("h-0"))}
            >
                if region.visible {
                    <div class="accordion-content px-6 py-3">{ for props.children.iter() }</div>
                }
            </div>
        </div>
    }
}
